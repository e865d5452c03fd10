//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;
use wordtrie::{validate, DynamicTrie, FlatTrie, TrieSet};

// Re-export canonical test utilities from wordtrie::testing
pub use wordtrie::testing::{
    flat_from, generated_words, owned, scenario_words, SCENARIO_ABSENT, SCENARIO_WORDS,
};

// ============================================================================
// FIXTURES
// ============================================================================

/// Write `contents` to a fresh temporary file that lives as long as the handle.
pub fn wordlist_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp word list");
    file.write_all(contents.as_bytes())
        .expect("write temp word list");
    file
}

/// One word per line.
pub fn wordlist_of(words: &[String]) -> NamedTempFile {
    wordlist_file(&(words.join("\n") + "\n"))
}

/// Every representation built from `words`, panicking on invalid input.
pub fn build_all(words: &[String]) -> TrieSet {
    TrieSet::build(words).expect("valid words")
}

/// Encode `words`, panicking on invalid input.
pub fn encode(words: &[String]) -> FlatTrie {
    FlatTrie::encode(&DynamicTrie::from_words(words).expect("valid words")).expect("encodes")
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// The flat buffer passes full validation and agrees with its own stats.
pub fn assert_flat_well_formed(flat: &FlatTrie) {
    let validated = validate(flat.as_bytes()).expect("encoder output validates");
    let stats = flat.stats().expect("stats");
    assert_eq!(validated.nodes, flat.node_count());
    assert_eq!(validated.nodes, stats.nodes);
    assert_eq!(validated.terminals, stats.terminals);
    assert_eq!(stats.bytes, flat.len());
}
