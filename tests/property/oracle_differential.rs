//! Differential testing: compare the tries against the oracles.
//!
//! If they disagree, the oracle is right.

use super::oracles::{oracle_bfs_nodes, oracle_contains, oracle_encode, oracle_node_count};
use crate::common::{build_all, encode};
use proptest::prelude::*;
use wordtrie::{ArrayTrie, DynamicTrie, HashedWords, SortedWords, WordSet};

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-F]{0,7}").unwrap()
}

fn words_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 0..40)
}

// =============================================================================
// ENCODER: exact bytes
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// The encoder emits exactly the bytes the prefix oracle computes.
    #[test]
    fn diff_encode_bytes(words in words_strategy()) {
        let flat = encode(&words);
        let expected = oracle_encode(&words);
        prop_assert_eq!(flat.as_bytes(), expected.as_slice());
    }

    /// Node counts agree between builder, encoding and oracle.
    #[test]
    fn diff_node_count(words in words_strategy()) {
        let trie = DynamicTrie::from_words(&words).unwrap();
        let flat = encode(&words);
        let expected = oracle_node_count(&words);
        prop_assert_eq!(trie.node_count(), expected);
        prop_assert_eq!(flat.node_count(), expected);
    }

    /// Storage order of the flat nodes is the oracle's BFS order.
    #[test]
    fn diff_bfs_order(words in words_strategy()) {
        let flat = encode(&words);
        let nodes = oracle_bfs_nodes(&words);
        let counts: Vec<usize> = flat.nodes().map(|n| n.unwrap().child_count()).collect();
        let expected: Vec<usize> = nodes
            .iter()
            .map(|p| nodes.iter().filter(|c| c.len() == p.len() + 1 && c.starts_with(p.as_str())).count())
            .collect();
        prop_assert_eq!(counts, expected);
    }
}

// =============================================================================
// QUERIES: every representation vs oracle
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn diff_contains(words in words_strategy(), queries in prop::collection::vec(word_strategy(), 0..40)) {
        let tries = build_all(&words);
        let sorted = SortedWords::build(&words).unwrap();
        let hashed = HashedWords::build(&words).unwrap();

        for query in words.iter().chain(&queries) {
            let expected = oracle_contains(&words, query);
            for set in tries.representations() {
                prop_assert_eq!(set.contains(query).unwrap(), expected, "{} on {:?}", set.label(), query);
            }
            prop_assert_eq!(sorted.contains(query).unwrap(), expected);
            prop_assert_eq!(hashed.contains(query).unwrap(), expected);
        }
    }

    /// A cleared array trie is empty and refills to the same answers.
    #[test]
    fn diff_array_trie_clear_refill(words in words_strategy(), queries in prop::collection::vec(word_strategy(), 0..20)) {
        let mut trie = ArrayTrie::from_words(&words).unwrap();
        trie.clear();
        for query in &queries {
            prop_assert!(!trie.find(query).unwrap());
        }
        trie.insert_many(&words).unwrap();
        for query in words.iter().chain(&queries) {
            prop_assert_eq!(trie.find(query).unwrap(), oracle_contains(&words, query));
        }
    }
}
