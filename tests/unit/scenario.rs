//! The reference scenario {AB, ABC, ACD, BAD}, end to end.

use crate::common::{encode, scenario_words, SCENARIO_ABSENT, SCENARIO_WORDS};
use wordtrie::baseline::{HashedCodes, HashedWords, IdentityHashedCodes, SortedCodes, SortedWords};
use wordtrie::flat::read_u32;
use wordtrie::{ArrayTrie, DynamicTrie, TrieError, TrieSet, WordSet};

#[test]
fn every_representation_agrees_on_scenario() {
    let words = scenario_words();
    let tries = TrieSet::build(&words).unwrap();
    let sorted = SortedWords::build(&words).unwrap();
    let sorted_codes = SortedCodes::build(&words).unwrap();
    let hashed = HashedWords::build(&words).unwrap();
    let hashed_codes = HashedCodes::<std::collections::hash_map::RandomState>::build(&words).unwrap();
    let identity = IdentityHashedCodes::build(&words).unwrap();

    let [dynamic, array, flat] = tries.representations();
    let sets: [&dyn WordSet; 8] = [
        dynamic,
        array,
        flat,
        &sorted,
        &sorted_codes,
        &hashed,
        &hashed_codes,
        &identity,
    ];

    for set in sets {
        for word in SCENARIO_WORDS {
            assert!(set.contains(word).unwrap(), "{} missed {}", set.label(), word);
        }
        for word in SCENARIO_ABSENT {
            assert!(!set.contains(word).unwrap(), "{} found {:?}", set.label(), word);
        }
        assert!(matches!(
            set.contains("BAd"),
            Err(TrieError::InvalidCharacter { byte: b'd', position: 2 })
        ));
    }
}

#[test]
fn scenario_builder_shape() {
    let trie = DynamicTrie::from_words(SCENARIO_WORDS).unwrap();
    // root, A, B, AB, AC, BA, ABC, ACD, BAD
    assert_eq!(trie.node_count(), 9);
    assert_eq!(trie.word_count(), 4);
    assert_eq!(trie.depth(), 3);
    assert_eq!(trie.words(), SCENARIO_WORDS.to_vec());
}

#[test]
fn scenario_flat_offsets() {
    let flat = encode(&scenario_words());
    let buf = flat.as_bytes();

    // node starts in BFS order:
    // "" 0, A 16, B 32, AB 43, AC 54, BA 65, ABC 76, ACD 82, BAD 88
    assert_eq!(buf.len(), 94);
    let starts: Vec<usize> = flat.nodes().map(|n| n.unwrap().start()).collect();
    assert_eq!(starts, vec![0, 16, 32, 43, 54, 65, 76, 82, 88]);

    // root: 2 children, mask A|B, letters, offsets from slots 7 and 11
    assert_eq!(&buf[..7], &[2, 0b11, 0, 0, 0, b'A', b'B']);
    assert_eq!(read_u32(buf, 7).unwrap(), 16 - 7);
    assert_eq!(read_u32(buf, 11).unwrap(), 32 - 11);
    assert_eq!(buf[15], 0);

    // AB is terminal and has one child
    assert_eq!(buf[43], 1);
    assert_eq!(buf[43 + 10], 1);

    // BA -> BAD
    assert_eq!(read_u32(buf, 71).unwrap(), 88 - 71);
}

#[test]
fn scenario_array_trie_dead_shells() {
    let trie = ArrayTrie::from_words(SCENARIO_WORDS).unwrap();
    assert_eq!(trie.live_nodes(), 9);
    // every node with children owns 26 slots: root, A, B, AB, AC, BA
    assert_eq!(trie.allocated_nodes(), 1 + 6 * 26);
    assert!(!trie.find("C").unwrap());
}
