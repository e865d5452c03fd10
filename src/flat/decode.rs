// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Membership queries and structural validation over encoded bytes.
//!
//! `lookup` is the hot path. Per letter it reads one byte and one `u32`, and if
//! the letter's mask bit is clear it answers `false` without ever touching the
//! letter table. Only on a set bit does it binary-search the letters and follow
//! the offset. No allocation, no writes, no state carried between calls.
//!
//! `validate` is the slow path for bytes of unknown origin: it walks every node
//! in buffer order and checks every layout rule, so that a buffer that passes
//! can be queried knowing `CorruptBuffer` will not come up.

use std::collections::HashSet;

use crate::alphabet::{self, Letter, MASK_UNUSED_BITS};
use crate::error::{Result, TrieError};

use super::layout::{FlatNode, MIN_NODE_SIZE};

/// Whether `word` is stored in the flat trie encoded in `buf`.
///
/// Out-of-alphabet bytes in `word` fail with `InvalidCharacter`, inconsistent
/// bytes in `buf` with `CorruptBuffer`. Never panics, whatever `buf` holds.
pub fn lookup(buf: &[u8], word: &str) -> Result<bool> {
    let word = word.as_bytes();
    alphabet::validate(word)?;

    let mut cursor = 0usize;
    for &byte in word {
        let node = FlatNode::parse(buf, cursor)?;
        let bit = Letter::from_ascii(byte).map_or(0, Letter::bit);

        if node.mask() & bit == 0 {
            return Ok(false);
        }

        let index = node.letters().binary_search(&byte).map_err(|_| {
            TrieError::corrupt(node.start(), "mask bit set without a matching letter")
        })?;
        cursor = node.child_start(index)?;
    }

    FlatNode::parse(buf, cursor)?.is_terminal()
}

/// Iterator over the nodes of a buffer in storage (BFS) order.
///
/// Yields an error and stops at the first node that does not parse.
pub struct Nodes<'a> {
    buf: &'a [u8],
    cursor: usize,
    failed: bool,
}

impl<'a> Nodes<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            cursor: 0,
            failed: false,
        }
    }
}

impl<'a> Iterator for Nodes<'a> {
    type Item = Result<FlatNode<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.cursor >= self.buf.len() {
            return None;
        }
        match FlatNode::parse(self.buf, self.cursor) {
            Ok(node) => {
                self.cursor = node.end();
                Some(Ok(node))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

/// Summary of a validated buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated {
    pub nodes: usize,
    pub terminals: usize,
}

/// Check every layout invariant of `buf`.
///
/// - nodes tile the buffer exactly, starting with the root at byte 0
/// - letters are strictly increasing ASCII `A..=Z`
/// - the mask has exactly the bits of the letters, nothing above bit 25
/// - terminal bytes are 0 or 1
/// - every offset lands on a node start strictly after its slot
/// - every node except the root is the target of exactly one offset
pub fn validate(buf: &[u8]) -> Result<Validated> {
    if buf.len() < MIN_NODE_SIZE {
        return Err(TrieError::corrupt(0, "buffer shorter than one node"));
    }

    let mut starts = HashSet::new();
    let mut targets: Vec<(usize, usize)> = Vec::new();
    let mut terminals = 0;

    for node in Nodes::new(buf) {
        let node = node?;
        starts.insert(node.start());

        let letters = node.letters();
        let mut mask = 0u32;
        for (i, &b) in letters.iter().enumerate() {
            let letter = Letter::from_ascii(b)
                .ok_or_else(|| TrieError::corrupt(node.letters_start() + i, "letter outside A-Z"))?;
            if i > 0 && letters[i - 1] >= b {
                return Err(TrieError::corrupt(
                    node.letters_start() + i,
                    "letters not strictly increasing",
                ));
            }
            mask |= letter.bit();
        }
        if node.mask() & MASK_UNUSED_BITS != 0 || node.mask() != mask {
            return Err(TrieError::corrupt(
                node.start() + 1,
                "mask does not match letter table",
            ));
        }

        if node.is_terminal()? {
            terminals += 1;
        }

        for i in 0..node.child_count() {
            let slot = node.slot(i);
            let target = node.child_start(i)?;
            if target <= slot {
                return Err(TrieError::corrupt(slot, "child offset does not point forward"));
            }
            targets.push((slot, target));
        }
    }

    let mut seen = HashSet::with_capacity(targets.len());
    for &(slot, target) in &targets {
        if !starts.contains(&target) {
            return Err(TrieError::corrupt(slot, "child offset misses every node start"));
        }
        if target == 0 || !seen.insert(target) {
            return Err(TrieError::corrupt(slot, "node reachable from more than one slot"));
        }
    }
    if seen.len() + 1 != starts.len() {
        return Err(TrieError::corrupt(0, "unreachable nodes in buffer"));
    }

    Ok(Validated {
        nodes: starts.len(),
        terminals,
    })
}
