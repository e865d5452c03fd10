//! Runtime contracts for the trie and flat-layout invariants.
//!
//! These are debug-mode assertions. They:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Fail at the exact step that broke an invariant, not later at lookup time
//! 3. Mirror the layout rules `flat::validate` checks on whole buffers
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Invariant                                        |
//! |----------------------------|--------------------------------------------------|
//! | `check_children_sorted`    | node letters strictly increasing                 |
//! | `check_parallel_lengths`   | letters and children have equal length           |
//! | `check_node_start`         | second encode pass agrees with recorded starts   |
//! | `check_forward_offset`     | BFS children always start after their slot       |
//! | `check_mask_matches`       | bitmask bits are exactly the letter table        |
//!
//! # Usage
//!
//! ```ignore
//! use wordtrie::contracts::*;
//!
//! // In debug builds, this panics if the invariant is violated
//! check_children_sorted(node.letters());
//!
//! // In release builds, this is a no-op
//! ```

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// Every alphabet letter must have a bit in the 32-bit mask, and a node's child
/// count must fit its one-byte field.
const _: () = {
    assert!(crate::alphabet::ALPHABET_SIZE <= 32);
    assert!(crate::alphabet::ALPHABET_SIZE <= u8::MAX as usize);
    assert!(crate::flat::MIN_NODE_SIZE == 6);
};

use crate::alphabet::Letter;

// ============================================================================
// DYNAMIC TRIE CONTRACTS
// ============================================================================

/// Check that a node's letters are strictly increasing (sorted, no duplicates).
///
/// # Panics (debug builds only)
/// Panics at the first adjacent pair that is out of order or equal.
#[inline]
pub fn check_children_sorted(letters: &[Letter]) {
    for i in 1..letters.len() {
        debug_assert!(
            letters[i - 1] < letters[i],
            "Contract violation: node letters not strictly increasing - \
             letters[{}] = {} >= letters[{}] = {}",
            i - 1,
            letters[i - 1],
            i,
            letters[i]
        );
    }
}

/// Check that the letter and child sequences of a node line up.
#[inline]
pub fn check_parallel_lengths(letters_len: usize, children_len: usize) {
    debug_assert_eq!(
        letters_len, children_len,
        "Contract violation: node has {} letters but {} children",
        letters_len, children_len
    );
}

// ============================================================================
// ENCODER CONTRACTS
// ============================================================================

/// Check that the cursor recomputed in the offset pass matches the start index
/// recorded while the node was written.
///
/// # Panics (debug builds only)
/// Panics if header sizes were computed differently in the two passes.
#[inline]
pub fn check_node_start(node: usize, cursor: usize, recorded: usize) {
    debug_assert_eq!(
        cursor, recorded,
        "Contract violation: node {} recomputed at byte {} but was written at byte {}",
        node, cursor, recorded
    );
}

/// Check that a child lies strictly after the offset slot that points at it.
///
/// BFS order writes children after their parent, so relative offsets are
/// always positive.
#[inline]
pub fn check_forward_offset(slot: usize, target: usize) {
    debug_assert!(
        target > slot,
        "Contract violation: child at byte {} is not after its offset slot at byte {}",
        target,
        slot
    );
}

/// Check that a letter mask has exactly the bits of the sorted letter table.
#[inline]
pub fn check_mask_matches(mask: u32, letters: &[u8]) {
    let expected = letters
        .iter()
        .filter_map(|&b| Letter::from_ascii(b))
        .fold(0u32, |acc, l| acc | l.bit());
    debug_assert_eq!(
        mask, expected,
        "Contract violation: letter mask {:#010x} does not match letters {:?}",
        mask,
        String::from_utf8_lossy(letters)
    );
}
