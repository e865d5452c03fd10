// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pack short words into a single `u64`, five bits per letter.
//!
//! Letters map to `1..=26` (zero is reserved so that "A" and "AA" differ) and are
//! shifted in most-significant first. Twelve letters fill 60 bits; a thirteenth
//! would need 65. Codes are only used by the comparison baselines, never by the
//! tries themselves.

use crate::alphabet::{self, Letter};
use crate::error::{Result, TrieError};

/// Bits per packed letter.
pub const LETTER_BITS: u32 = 5;

/// Longest word that fits in a `u64` code.
pub const MAX_CODE_LETTERS: usize = (u64::BITS / LETTER_BITS) as usize;

/// Pack `word` into a 64-bit code.
pub fn encode_word(word: &str) -> Result<u64> {
    let letters = alphabet::letters(word.as_bytes())?;
    if word.len() > MAX_CODE_LETTERS {
        return Err(TrieError::WordTooLong {
            len: word.len(),
            max: MAX_CODE_LETTERS,
        });
    }
    Ok(letters.fold(0u64, |code, letter| {
        (code << LETTER_BITS) | (letter.index() as u64 + 1)
    }))
}

/// Pack every word, failing on the first one that does not fit.
pub fn encode_words<S: AsRef<str>>(words: &[S]) -> Result<Vec<u64>> {
    words.iter().map(|w| encode_word(w.as_ref())).collect()
}

/// Unpack a code produced by [`encode_word`].
///
/// Returns `None` for codes no word packs to: a zero group below the leading
/// letter, or a group above 26.
pub fn decode_word(mut code: u64) -> Option<String> {
    let mut out = Vec::with_capacity(MAX_CODE_LETTERS);
    while code != 0 {
        let group = (code & ((1 << LETTER_BITS) - 1)) as usize;
        let letter = group.checked_sub(1).and_then(Letter::from_index)?;
        out.push(letter.to_ascii());
        code >>= LETTER_BITS;
    }
    out.reverse();
    Some(out.into_iter().map(char::from).collect())
}
