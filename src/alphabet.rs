// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The 26-letter alphabet every representation is built over.
//!
//! Words are plain byte strings. A byte is a letter iff it is in `b'A'..=b'Z'`;
//! anything else (lowercase, digits, UTF-8 continuation bytes) is rejected with
//! `InvalidCharacter` before any structure is touched.

use std::fmt;

use crate::error::{Result, TrieError};

/// Number of symbols in the alphabet.
pub const ALPHABET_SIZE: usize = 26;

/// First letter of the alphabet as an ASCII byte.
pub const FIRST_LETTER: u8 = b'A';

/// Last letter of the alphabet as an ASCII byte.
pub const LAST_LETTER: u8 = b'Z';

/// A validated alphabet symbol, stored as its index `0..26`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Map an ASCII byte to a letter, or `None` if it is outside `A..=Z`.
    #[inline]
    pub const fn from_ascii(byte: u8) -> Option<Letter> {
        if byte >= FIRST_LETTER && byte <= LAST_LETTER {
            Some(Letter(byte - FIRST_LETTER))
        } else {
            None
        }
    }

    /// Letter at alphabet position `index`, or `None` if `index >= 26`.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Letter> {
        if index < ALPHABET_SIZE {
            Some(Letter(index as u8))
        } else {
            None
        }
    }

    /// Alphabet position, `0` for `A` through `25` for `Z`.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The ASCII byte for this letter.
    #[inline]
    pub const fn to_ascii(self) -> u8 {
        self.0 + FIRST_LETTER
    }

    /// Presence bit for this letter in a 32-bit letter mask.
    #[inline]
    pub const fn bit(self) -> u32 {
        1 << self.0
    }

    /// All 26 letters in ascending order.
    pub fn all() -> impl Iterator<Item = Letter> + Clone {
        (0..ALPHABET_SIZE as u8).map(Letter)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_ascii() as char)
    }
}

/// Check that every byte of `word` is a letter.
///
/// Reports the first offending byte and its position. Does not allocate.
pub fn validate(word: &[u8]) -> Result<()> {
    match word.iter().position(|&b| Letter::from_ascii(b).is_none()) {
        Some(position) => Err(TrieError::InvalidCharacter {
            byte: word[position],
            position,
        }),
        None => Ok(()),
    }
}

/// Validate `word`, then yield its letters.
///
/// Validation runs over the whole word before the iterator is returned, so a
/// caller that mutates while iterating never sees a half-valid word.
pub fn letters(word: &[u8]) -> Result<impl Iterator<Item = Letter> + '_> {
    validate(word)?;
    Ok(word.iter().map(|&b| Letter(b - FIRST_LETTER)))
}

/// Letters present in a 32-bit mask, ascending.
pub fn mask_letters(mask: u32) -> impl Iterator<Item = Letter> {
    Letter::all().filter(move |l| mask & l.bit() != 0)
}

/// Bits above position 25 are never set by a valid encoder.
pub const MASK_UNUSED_BITS: u32 = !((1u32 << ALPHABET_SIZE) - 1);
