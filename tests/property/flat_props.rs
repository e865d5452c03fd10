//! Properties of the flat buffer itself: layout invariants, relocation, and
//! behavior on damaged bytes.

use crate::common::{assert_flat_well_formed, encode};
use proptest::prelude::*;
use wordtrie::flat::{FlatNode, MIN_NODE_SIZE};
use wordtrie::{lookup, validate, FlatTrie, TrieError};

fn words_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::string::string_regex("[A-H]{0,6}").unwrap(), 0..30)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_encoder_output_validates(words in words_strategy()) {
        assert_flat_well_formed(&encode(&words));
    }

    #[test]
    fn prop_mask_matches_letters(words in words_strategy()) {
        let flat = encode(&words);
        for node in flat.nodes() {
            let node: FlatNode<'_> = node.unwrap();
            let mask = node.letters().iter().fold(0u32, |m, &b| m | 1 << (b - b'A'));
            prop_assert_eq!(node.mask(), mask);
            prop_assert_eq!(node.mask().count_ones() as usize, node.child_count());
        }
    }

    /// Bytes copied into a fresh allocation answer identically.
    #[test]
    fn prop_relocation(words in words_strategy(), query in "[A-H]{0,6}") {
        let flat = encode(&words);
        let mut padded = vec![0xAAu8; 3];
        padded.extend_from_slice(flat.as_bytes());
        let moved = &padded[3..];
        prop_assert_eq!(lookup(moved, &query).unwrap(), flat.lookup(&query).unwrap());
    }

    /// Any truncation of a valid buffer fails validation.
    #[test]
    fn prop_truncation_rejected(words in words_strategy(), cut in any::<prop::sample::Index>()) {
        let flat = encode(&words);
        let bytes = flat.as_bytes();
        let len = cut.index(bytes.len());
        prop_assert!(validate(&bytes[..len]).is_err());
        prop_assert!(FlatTrie::from_bytes(bytes[..len].to_vec()).is_err());
    }

    /// Flipping any single byte never makes lookup panic, and the answer is
    /// either a boolean or `CorruptBuffer`.
    #[test]
    fn prop_damaged_bytes_never_panic(
        words in words_strategy(),
        at in any::<prop::sample::Index>(),
        xor in 1u8..=255,
        query in "[A-H]{0,6}",
    ) {
        let mut bytes = encode(&words).as_bytes().to_vec();
        let i = at.index(bytes.len());
        bytes[i] ^= xor;
        match lookup(&bytes, &query) {
            Ok(_) | Err(TrieError::CorruptBuffer { .. }) => {}
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }

    #[test]
    fn prop_short_buffers_corrupt(bytes in prop::collection::vec(any::<u8>(), 0..MIN_NODE_SIZE)) {
        prop_assert!(
            matches!(
                lookup(&bytes, ""),
                Err(TrieError::CorruptBuffer { .. })
            ),
            "expected CorruptBuffer for {:?}",
            bytes
        );
    }
}
