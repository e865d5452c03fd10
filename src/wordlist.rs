// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading word lists.
//!
//! A word list is whitespace-separated tokens, usually one per line. Every token
//! is validated against the alphabet as it is read, so a bad entry is reported
//! with its line number instead of surfacing later as an insert failure.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::alphabet;
use crate::error::{Result as TrieResult, TrieError};
use crate::set::WordSetBuilder;

/// Why a word list could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: {source}")]
    InvalidWord {
        line: usize,
        #[source]
        source: TrieError,
    },
}

/// Read every whitespace-separated word from `reader`.
pub fn read_words<R: BufRead>(reader: R) -> Result<Vec<String>, WordListError> {
    let mut words = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        for token in line.split_whitespace() {
            alphabet::validate(token.as_bytes()).map_err(|source| {
                WordListError::InvalidWord {
                    line: index + 1,
                    source,
                }
            })?;
            words.push(token.to_owned());
        }
    }
    Ok(words)
}

/// Read a word list from a file.
pub fn load_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let words = read_words(BufReader::new(file))?;
    tracing::debug!(path = %path.display(), words = words.len(), "word list loaded");
    Ok(words)
}

/// Insert every word into `set`, stopping at the first invalid one.
pub fn populate<B, S>(set: &mut B, words: &[S]) -> TrieResult<()>
where
    B: WordSetBuilder + ?Sized,
    S: AsRef<str>,
{
    for word in words {
        set.add_word(word.as_ref())?;
    }
    tracing::debug!(label = set.label(), words = words.len(), "populated");
    Ok(())
}

/// Whether `words` is sorted ascending (duplicates allowed).
pub fn is_sorted(words: &[String]) -> bool {
    words.windows(2).all(|w| w[0] <= w[1])
}

/// Each word reversed, in the same order. Used as a probe set whose words are
/// mostly absent but share lengths and letter frequencies with the originals.
pub fn reversed(words: &[String]) -> Vec<String> {
    words.iter().map(|w| w.chars().rev().collect()).collect()
}
