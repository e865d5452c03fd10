// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The one query contract every representation honors.
//!
//! For any word set `W` and query `q`, every `WordSet` built from `W` returns the
//! same `contains(q)`: `Ok(true)` iff `q` is in `W`, `Ok(false)` otherwise, and
//! `Err(InvalidCharacter)` if `q` has a byte outside `A..=Z`. The equivalence
//! checker and the benchmarks rely on nothing else.

use crate::array_trie::ArrayTrie;
use crate::dynamic::DynamicTrie;
use crate::error::Result;
use crate::flat::FlatTrie;

/// Membership query over a static word set.
pub trait WordSet {
    /// Whether `word` is in the set.
    fn contains(&self, word: &str) -> Result<bool>;

    /// Short label used in reports and benchmark output.
    fn label(&self) -> &'static str;
}

impl WordSet for DynamicTrie {
    #[inline]
    fn contains(&self, word: &str) -> Result<bool> {
        self.find(word)
    }

    fn label(&self) -> &'static str {
        "dynamic-trie"
    }
}

impl WordSet for ArrayTrie {
    #[inline]
    fn contains(&self, word: &str) -> Result<bool> {
        self.find(word)
    }

    fn label(&self) -> &'static str {
        "array-trie"
    }
}

impl WordSet for FlatTrie {
    #[inline]
    fn contains(&self, word: &str) -> Result<bool> {
        self.lookup(word)
    }

    fn label(&self) -> &'static str {
        "static-trie"
    }
}

/// A representation that can grow one word at a time.
pub trait WordSetBuilder: WordSet {
    /// Add `word`, leaving the set untouched if it is invalid.
    fn add_word(&mut self, word: &str) -> Result<()>;
}

impl WordSetBuilder for DynamicTrie {
    fn add_word(&mut self, word: &str) -> Result<()> {
        self.insert(word)
    }
}

impl WordSetBuilder for ArrayTrie {
    fn add_word(&mut self, word: &str) -> Result<()> {
        self.insert(word)
    }
}

impl<T: WordSet + ?Sized> WordSet for &T {
    #[inline]
    fn contains(&self, word: &str) -> Result<bool> {
        (**self).contains(word)
    }

    fn label(&self) -> &'static str {
        (**self).label()
    }
}

impl<T: WordSet + ?Sized> WordSet for Box<T> {
    #[inline]
    fn contains(&self, word: &str) -> Result<bool> {
        (**self).contains(word)
    }

    fn label(&self) -> &'static str {
        (**self).label()
    }
}

/// The three trie representations built from one word list.
#[derive(Debug)]
pub struct TrieSet {
    pub dynamic: DynamicTrie,
    pub array: ArrayTrie,
    pub flat: FlatTrie,
}

impl TrieSet {
    /// Build all three representations. Fails on the first invalid word or if
    /// the flat encoding overflows.
    pub fn build<S: AsRef<str>>(words: &[S]) -> Result<Self> {
        let dynamic = DynamicTrie::from_words(words)?;
        let array = ArrayTrie::from_words(words)?;
        let flat = FlatTrie::encode(&dynamic)?;
        Ok(Self {
            dynamic,
            array,
            flat,
        })
    }

    /// The representations as trait objects, oracle first.
    pub fn representations(&self) -> [&(dyn WordSet + Sync); 3] {
        [&self.dynamic, &self.array, &self.flat]
    }
}
