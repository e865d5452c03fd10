// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pointer-free flat trie: one immutable byte buffer, queried in place.
//!
//! A [`DynamicTrie`](crate::DynamicTrie) is encoded once, breadth-first, into
//! back-to-back nodes. Each node stores a child count, a 26-bit letter mask, a
//! sorted letter table, one relative `u32` offset per child, and a terminal
//! byte. Offsets are measured from the slot to the child, so the bytes can be
//! copied anywhere and still work.
//!
//! | Module    | Contents                                          |
//! |-----------|---------------------------------------------------|
//! | `layout`  | constants, field readers, [`FlatNode`] view       |
//! | `encode`  | two-pass BFS encoder                              |
//! | `decode`  | `lookup`, node walker, `validate`                 |
//!
//! A `FlatTrie` is `Send + Sync` and never mutated after creation. Any number
//! of threads can query the same buffer without coordination.

mod decode;
mod encode;
mod layout;

pub use decode::{lookup, validate, Nodes, Validated};
pub use encode::encode;
pub(crate) use encode::encode_with_limit;
pub use layout::{
    node_size, read_u32, read_u8, FlatNode, COUNT_SIZE, MASK_SIZE, MAX_OFFSET, MIN_NODE_SIZE,
    OFFSET_SIZE, TERMINAL_SIZE,
};

use crate::alphabet::ALPHABET_SIZE;
use crate::dynamic::DynamicTrie;
use crate::error::Result;

/// An encoded trie. Construct with [`FlatTrie::encode`] or [`FlatTrie::from_bytes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatTrie {
    bytes: Box<[u8]>,
    nodes: usize,
}

impl FlatTrie {
    /// Encode a finished dynamic trie. See [`encode`].
    pub fn encode(trie: &DynamicTrie) -> Result<Self> {
        encode(trie)
    }

    pub(crate) fn from_encoded(bytes: Vec<u8>, nodes: usize) -> Self {
        Self {
            bytes: bytes.into_boxed_slice(),
            nodes,
        }
    }

    /// Adopt bytes produced elsewhere (copied, sent over a channel, ...).
    ///
    /// The buffer is fully validated first.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let validated = validate(&bytes)?;
        Ok(Self::from_encoded(bytes, validated.nodes))
    }

    /// Whether `word` is stored.
    #[inline]
    pub fn lookup(&self, word: &str) -> Result<bool> {
        lookup(&self.bytes, word)
    }

    /// The raw encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Give up ownership of the encoded bytes.
    pub fn into_bytes(self) -> Box<[u8]> {
        self.bytes
    }

    /// Encoded length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false: even an empty trie has a root node.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of encoded nodes.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Re-run full structural validation over the owned bytes.
    pub fn validate(&self) -> Result<Validated> {
        validate(&self.bytes)
    }

    /// Nodes in storage order.
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes::new(&self.bytes)
    }

    /// Shape summary for reporting.
    pub fn stats(&self) -> Result<FlatStats> {
        let mut stats = FlatStats {
            bytes: self.bytes.len(),
            nodes: 0,
            terminals: 0,
            leaves: 0,
            branching: [0; ALPHABET_SIZE + 1],
        };
        for node in self.nodes() {
            let node = node?;
            stats.nodes += 1;
            if node.is_terminal()? {
                stats.terminals += 1;
            }
            if node.child_count() == 0 {
                stats.leaves += 1;
            }
            if let Some(slot) = stats.branching.get_mut(node.child_count()) {
                *slot += 1;
            }
        }
        Ok(stats)
    }
}

/// Node and byte counts of an encoded trie.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FlatStats {
    pub bytes: usize,
    pub nodes: usize,
    pub terminals: usize,
    pub leaves: usize,
    /// `branching[k]` is the number of nodes with `k` children.
    pub branching: [usize; ALPHABET_SIZE + 1],
}

impl FlatStats {
    /// Average bytes per stored word, or 0 for an empty set.
    pub fn bytes_per_word(&self) -> f64 {
        if self.terminals == 0 {
            0.0
        } else {
            self.bytes as f64 / self.terminals as f64
        }
    }
}
