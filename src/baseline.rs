// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Non-trie word sets the tries are measured against.
//!
//! Binary search over a sorted `Vec<String>` is the reference every benchmark
//! ratio is relative to. The packed variants trade generality (at most 12
//! letters) for comparing single integers instead of strings. The identity-hash
//! set skips hashing altogether: packed codes are already well spread.

use std::collections::HashSet;
use std::hash::{BuildHasherDefault, Hasher};

use crate::alphabet;
use crate::error::Result;
use crate::set::WordSet;
use crate::word_code::{encode_word, encode_words};

/// Sorted strings, queried by binary search.
#[derive(Debug, Clone, Default)]
pub struct SortedWords {
    words: Vec<String>,
}

impl SortedWords {
    pub fn build<S: AsRef<str>>(words: &[S]) -> Result<Self> {
        let mut words: Vec<String> = words
            .iter()
            .map(|w| -> Result<String> {
                alphabet::validate(w.as_ref().as_bytes())?;
                Ok(w.as_ref().to_owned())
            })
            .collect::<Result<_>>()?;
        words.sort_unstable();
        words.dedup();
        Ok(Self { words })
    }
}

impl WordSet for SortedWords {
    fn contains(&self, word: &str) -> Result<bool> {
        alphabet::validate(word.as_bytes())?;
        Ok(self
            .words
            .binary_search_by(|probe| probe.as_str().cmp(word))
            .is_ok())
    }

    fn label(&self) -> &'static str {
        "bsearch-string"
    }
}

/// Sorted packed codes, queried by binary search.
#[derive(Debug, Clone, Default)]
pub struct SortedCodes {
    codes: Vec<u64>,
}

impl SortedCodes {
    pub fn build<S: AsRef<str>>(words: &[S]) -> Result<Self> {
        let mut codes = encode_words(words)?;
        codes.sort_unstable();
        codes.dedup();
        Ok(Self { codes })
    }

    /// Query by a code packed ahead of time.
    #[inline]
    pub fn contains_code(&self, code: u64) -> bool {
        self.codes.binary_search(&code).is_ok()
    }
}

impl WordSet for SortedCodes {
    fn contains(&self, word: &str) -> Result<bool> {
        Ok(self.contains_code(encode_word(word)?))
    }

    fn label(&self) -> &'static str {
        "bsearch-code"
    }
}

/// Strings in a standard `HashSet`.
#[derive(Debug, Clone, Default)]
pub struct HashedWords {
    words: HashSet<String>,
}

impl HashedWords {
    pub fn build<S: AsRef<str>>(words: &[S]) -> Result<Self> {
        let words = words
            .iter()
            .map(|w| -> Result<String> {
                alphabet::validate(w.as_ref().as_bytes())?;
                Ok(w.as_ref().to_owned())
            })
            .collect::<Result<_>>()?;
        Ok(Self { words })
    }
}

impl WordSet for HashedWords {
    fn contains(&self, word: &str) -> Result<bool> {
        alphabet::validate(word.as_bytes())?;
        Ok(self.words.contains(word))
    }

    fn label(&self) -> &'static str {
        "hashset(string)"
    }
}

/// Hasher that returns the `u64` it is fed, unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityHasher(u64);

impl Hasher for IdentityHasher {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        // Only u64 keys are ever hashed; fold anything else in byte by byte.
        for &b in bytes {
            self.0 = (self.0 << 8) | u64::from(b);
        }
    }

    fn write_u64(&mut self, value: u64) {
        self.0 = value;
    }
}

/// Packed codes in a `HashSet`, with either the default or the identity hasher.
#[derive(Debug, Clone, Default)]
pub struct HashedCodes<S = std::collections::hash_map::RandomState> {
    codes: HashSet<u64, S>,
}

/// Packed codes hashed by identity.
pub type IdentityHashedCodes = HashedCodes<BuildHasherDefault<IdentityHasher>>;

impl<H: std::hash::BuildHasher + Default> HashedCodes<H> {
    pub fn build<S: AsRef<str>>(words: &[S]) -> Result<Self> {
        let mut codes = HashSet::with_capacity_and_hasher(words.len(), H::default());
        codes.extend(encode_words(words)?);
        Ok(Self { codes })
    }

    /// Query by a code packed ahead of time.
    #[inline]
    pub fn contains_code(&self, code: u64) -> bool {
        self.codes.contains(&code)
    }
}

impl WordSet for HashedCodes {
    fn contains(&self, word: &str) -> Result<bool> {
        Ok(self.contains_code(encode_word(word)?))
    }

    fn label(&self) -> &'static str {
        "hashset(code)"
    }
}

impl WordSet for IdentityHashedCodes {
    fn contains(&self, word: &str) -> Result<bool> {
        Ok(self.contains_code(encode_word(word)?))
    }

    fn label(&self) -> &'static str {
        "hashset(code,hash)"
    }
}
