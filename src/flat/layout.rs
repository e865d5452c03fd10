// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Node layout and bounds-checked field access.
//!
//! Every node is a contiguous byte range:
//!
//! ```text
//! ┌───────┬──────────┬─────────────┬──────────────────┬──────────┐
//! │ count │   mask   │   letters   │     offsets      │ terminal │
//! │  u8   │  u32 LE  │ [u8; count] │ [u32 LE; count]  │    u8    │
//! └───────┴──────────┴─────────────┴──────────────────┴──────────┘
//! ```
//!
//! `FlatNode` is the single source of truth for where each field lives. The
//! encoder writes headers from the size constants below and then locates every
//! offset slot it patches through `FlatNode`, the same view lookup and the
//! validator read with, so the write path and the read path cannot drift apart.
//!
//! Nothing here aliases buffer memory as a typed pointer. Integers are read
//! with `u32::from_le_bytes` over a checked slice.

use crate::error::{Result, TrieError};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Bytes for the child-count field.
pub const COUNT_SIZE: usize = 1;

/// Bytes for the letter bitmask.
pub const MASK_SIZE: usize = 4;

/// Bytes per child-offset slot.
pub const OFFSET_SIZE: usize = 4;

/// Bytes for the terminal flag.
pub const TERMINAL_SIZE: usize = 1;

/// Size of a node with no children.
pub const MIN_NODE_SIZE: usize = COUNT_SIZE + MASK_SIZE + TERMINAL_SIZE;

/// Largest relative offset an encoded slot can hold.
pub const MAX_OFFSET: u64 = u32::MAX as u64;

/// Encoded size of a node with `child_count` children.
#[inline]
pub const fn node_size(child_count: usize) -> usize {
    MIN_NODE_SIZE + child_count * (1 + OFFSET_SIZE)
}

// ============================================================================
// FIELD READERS / WRITERS
// ============================================================================

/// Read one byte at `pos`.
#[inline]
pub fn read_u8(buf: &[u8], pos: usize) -> Result<u8> {
    buf.get(pos)
        .copied()
        .ok_or_else(|| TrieError::corrupt(pos, "read past end of buffer"))
}

/// Read a little-endian `u32` at `pos`.
#[inline]
pub fn read_u32(buf: &[u8], pos: usize) -> Result<u32> {
    let end = pos
        .checked_add(4)
        .ok_or_else(|| TrieError::corrupt(pos, "field position overflows"))?;
    let bytes: [u8; 4] = buf
        .get(pos..end)
        .and_then(|s| s.try_into().ok())
        .ok_or_else(|| TrieError::corrupt(pos, "read past end of buffer"))?;
    Ok(u32::from_le_bytes(bytes))
}

/// Overwrite the little-endian `u32` at `pos`. The slot must already exist.
#[inline]
pub(crate) fn write_u32(buf: &mut [u8], pos: usize, value: u32) {
    buf[pos..pos + 4].copy_from_slice(&value.to_le_bytes());
}

// ============================================================================
// NODE VIEW
// ============================================================================

/// Read-only view of one encoded node.
///
/// Construction checks that the whole node lies inside the buffer, so the
/// field accessors below never index out of range.
#[derive(Debug, Clone, Copy)]
pub struct FlatNode<'a> {
    buf: &'a [u8],
    start: usize,
    child_count: usize,
    mask: u32,
}

impl<'a> FlatNode<'a> {
    /// Parse the node header at `start` and bounds-check the full node.
    #[inline]
    pub fn parse(buf: &'a [u8], start: usize) -> Result<Self> {
        let child_count = read_u8(buf, start)? as usize;
        let mask = read_u32(buf, start + COUNT_SIZE)?;
        let end = start
            .checked_add(node_size(child_count))
            .ok_or_else(|| TrieError::corrupt(start, "node extent overflows"))?;
        if end > buf.len() {
            return Err(TrieError::corrupt(start, "node extends past end of buffer"));
        }
        Ok(Self {
            buf,
            start,
            child_count,
            mask,
        })
    }

    /// Byte position of the node's first byte.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn child_count(&self) -> usize {
        self.child_count
    }

    /// Letter presence bits, bit `i` for alphabet position `i`.
    #[inline]
    pub fn mask(&self) -> u32 {
        self.mask
    }

    /// Position of the first letter byte.
    #[inline]
    pub fn letters_start(&self) -> usize {
        self.start + COUNT_SIZE + MASK_SIZE
    }

    /// The sorted ASCII letter table.
    #[inline]
    pub fn letters(&self) -> &'a [u8] {
        let from = self.letters_start();
        &self.buf[from..from + self.child_count]
    }

    /// Position of the first offset slot.
    #[inline]
    pub fn offsets_start(&self) -> usize {
        self.letters_start() + self.child_count
    }

    /// Position of the offset slot for child `index`.
    #[inline]
    pub fn slot(&self, index: usize) -> usize {
        self.offsets_start() + index * OFFSET_SIZE
    }

    /// Raw relative offset stored for child `index`.
    #[inline]
    pub fn offset(&self, index: usize) -> Result<u32> {
        if index >= self.child_count {
            return Err(TrieError::corrupt(self.start, "child index out of range"));
        }
        read_u32(self.buf, self.slot(index))
    }

    /// Absolute start of child `index`: slot position plus stored offset.
    #[inline]
    pub fn child_start(&self, index: usize) -> Result<usize> {
        let slot = self.slot(index);
        let offset = self.offset(index)? as usize;
        slot.checked_add(offset)
            .ok_or_else(|| TrieError::corrupt(slot, "child offset overflows"))
    }

    /// Position of the terminal byte.
    #[inline]
    pub fn terminal_pos(&self) -> usize {
        self.offsets_start() + self.child_count * OFFSET_SIZE
    }

    /// The terminal flag. Bytes other than 0 and 1 are corrupt.
    #[inline]
    pub fn is_terminal(&self) -> Result<bool> {
        let pos = self.terminal_pos();
        match read_u8(self.buf, pos)? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(TrieError::corrupt(pos, "terminal byte is neither 0 nor 1")),
        }
    }

    /// Total encoded size of this node.
    #[inline]
    pub fn size(&self) -> usize {
        node_size(self.child_count)
    }

    /// Position one past the node's last byte.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.size()
    }
}
