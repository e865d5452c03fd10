// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for trie construction, encoding and flat lookups.
//!
//! All three core failure modes are returned to the immediate caller. None of
//! them are transient, so nothing here is retryable.

/// Result type used throughout the crate.
pub type Result<T, E = TrieError> = std::result::Result<T, E>;

/// Everything that can go wrong building, encoding or querying a trie.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    /// An inserted or queried byte falls outside `A..=Z`.
    ///
    /// The operation that hit it made no change to the structure.
    #[error("invalid character {byte:#04x} at position {position} (expected A-Z)")]
    InvalidCharacter { byte: u8, position: usize },

    /// A relative child offset does not fit in 32 bits.
    ///
    /// Encoding is all-or-nothing: no buffer is produced.
    #[error("child offset {offset} at byte {slot} exceeds the 32-bit offset range")]
    EncodingOverflow { slot: usize, offset: u64 },

    /// The flat buffer is internally inconsistent at `position`.
    ///
    /// Unreachable for buffers produced by `encode`; seen only for foreign or
    /// damaged bytes.
    #[error("corrupt flat buffer at byte {position}: {reason}")]
    CorruptBuffer {
        position: usize,
        reason: &'static str,
    },

    /// A word is too long to pack into a 64-bit word code.
    #[error("word of {len} letters exceeds the packed code limit of {max}")]
    WordTooLong { len: usize, max: usize },
}

impl TrieError {
    pub(crate) fn corrupt(position: usize, reason: &'static str) -> Self {
        TrieError::CorruptBuffer { position, reason }
    }
}
