// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Breadth-first flattening of a [`DynamicTrie`] into the flat layout.
//!
//! Two passes. The first walks the trie in BFS order and writes every node with
//! zeroed offset slots, recording where each node starts. A node's children are
//! always written after it, so their positions are unknown while the parent is
//! being written. The second pass walks the same order, recomputes each node's
//! cursor by parsing the header written in pass one, and patches every slot with
//! `start(child) - slot`.
//!
//! Children of BFS node `i` occupy consecutive BFS ordinals starting at
//! `first_child[i]`, so no pointer-keyed map is needed to find their starts.

use crate::contracts::{check_forward_offset, check_mask_matches, check_node_start};
use crate::dynamic::{DynamicNode, DynamicTrie};
use crate::error::{Result, TrieError};

use super::layout::{write_u32, FlatNode, COUNT_SIZE, MASK_SIZE, MAX_OFFSET, OFFSET_SIZE};
use super::FlatTrie;

/// Encode `trie` into a flat buffer.
///
/// Fails with `EncodingOverflow` if any relative offset exceeds `u32::MAX`; no
/// buffer is returned in that case.
pub fn encode(trie: &DynamicTrie) -> Result<FlatTrie> {
    encode_with_limit(trie.root(), MAX_OFFSET)
}

/// Encode with a custom offset ceiling. Lets tests reach the overflow path
/// without building a multi-gigabyte trie.
pub(crate) fn encode_with_limit(root: &DynamicNode, max_offset: u64) -> Result<FlatTrie> {
    let mut bytes: Vec<u8> = Vec::new();
    let mut pending: Vec<&DynamicNode> = vec![root];
    let mut starts: Vec<usize> = Vec::new();
    let mut first_child: Vec<usize> = Vec::new();

    // Pass 1: headers, letters, zeroed slots, terminal byte.
    let mut i = 0;
    while i < pending.len() {
        let node = pending[i];
        starts.push(bytes.len());
        first_child.push(pending.len());

        let mask = node.letters().iter().fold(0u32, |acc, l| acc | l.bit());
        let letters_at = bytes.len() + COUNT_SIZE + MASK_SIZE;

        bytes.push(node.child_count() as u8);
        bytes.extend_from_slice(&mask.to_le_bytes());
        bytes.extend(node.letters().iter().map(|l| l.to_ascii()));
        check_mask_matches(mask, &bytes[letters_at..]);
        bytes.resize(bytes.len() + node.child_count() * OFFSET_SIZE, 0);
        bytes.push(u8::from(node.is_terminal()));

        pending.extend(node.children());
        i += 1;
    }

    // Pass 2: patch relative offsets.
    let mut cursor = 0;
    for (ordinal, node) in pending.iter().enumerate() {
        check_node_start(ordinal, cursor, starts[ordinal]);

        // Slot positions come from the same view the decoder reads through.
        let view = FlatNode::parse(&bytes, cursor)?;
        let count = node.child_count();
        debug_assert_eq!(view.child_count(), count);
        let (first_slot, end) = (view.slot(0), view.end());

        for j in 0..count {
            let slot = first_slot + j * OFFSET_SIZE;
            let target = starts[first_child[ordinal] + j];
            check_forward_offset(slot, target);

            let offset = (target - slot) as u64;
            if offset > max_offset {
                tracing::debug!(
                    slot,
                    offset,
                    max_offset,
                    "flat encode aborted: child offset out of range"
                );
                return Err(TrieError::EncodingOverflow { slot, offset });
            }
            write_u32(&mut bytes, slot, offset as u32);
        }

        cursor = end;
    }

    debug_assert_eq!(cursor, bytes.len());
    tracing::debug!(
        nodes = pending.len(),
        bytes = bytes.len(),
        "flat trie encoded"
    );

    Ok(FlatTrie::from_encoded(bytes, pending.len()))
}
