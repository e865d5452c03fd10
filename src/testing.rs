//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It holds the reference word set and a few helpers so tests and benches agree
//! on what "the scenario" is.

#![doc(hidden)]

use crate::error::Result;
use crate::flat::FlatTrie;
use crate::set::TrieSet;
use crate::DynamicTrie;

/// Words of the reference scenario.
pub const SCENARIO_WORDS: [&str; 4] = ["AB", "ABC", "ACD", "BAD"];

/// Queries that must be absent from the reference scenario.
pub const SCENARIO_ABSENT: [&str; 6] = ["A", "", "AC", "BC", "BA", "B"];

/// Owned copies of `words`.
pub fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// The reference scenario as owned strings.
pub fn scenario_words() -> Vec<String> {
    owned(&SCENARIO_WORDS)
}

/// Encode `words` straight to a flat trie.
pub fn flat_from(words: &[&str]) -> Result<FlatTrie> {
    FlatTrie::encode(&DynamicTrie::from_words(words)?)
}

/// All three tries built from the reference scenario.
pub fn scenario_tries() -> Result<TrieSet> {
    TrieSet::build(&SCENARIO_WORDS)
}

/// A deterministic pseudo-random word list: `count` words of 1..=`max_len`
/// letters, sorted and deduplicated. Same seed, same list.
pub fn generated_words(count: usize, max_len: usize, seed: u64) -> Vec<String> {
    let mut state = seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1;
    let mut next = move || {
        // xorshift64
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };
    let max_len = max_len.max(1) as u64;
    let mut words: Vec<String> = (0..count)
        .map(|_| {
            let len = 1 + (next() % max_len) as usize;
            (0..len).map(|_| char::from(b'A' + (next() % 26) as u8)).collect()
        })
        .collect();
    words.sort_unstable();
    words.dedup();
    words
}
