//! Byte-level layout and corruption handling through the public API.

use crate::common::{flat_from, owned};
use wordtrie::flat::{node_size, FlatNode, MIN_NODE_SIZE};
use wordtrie::{lookup, validate, DynamicTrie, FlatTrie, TrieError};

#[rustfmt::skip]
const TWO_WORDS: &[u8] = &[
    // root: children A, C
    2, 0b101, 0, 0, 0, b'A', b'C', 9, 0, 0, 0, 11, 0, 0, 0, 0,
    // A (terminal)
    0, 0, 0, 0, 0, 1,
    // C (terminal)
    0, 0, 0, 0, 0, 1,
];

#[test]
fn empty_trie_is_six_zero_bytes() {
    let flat = FlatTrie::encode(&DynamicTrie::new()).unwrap();
    assert_eq!(flat.as_bytes(), &[0u8; 6]);
    assert!(!flat.lookup("").unwrap());
    assert!(!flat.lookup("A").unwrap());
}

#[test]
fn empty_word_marks_root() {
    let flat = flat_from(&[""]).unwrap();
    assert_eq!(flat.as_bytes(), &[0, 0, 0, 0, 0, 1]);
    assert!(flat.lookup("").unwrap());
}

#[test]
fn encoder_matches_handwritten_bytes() {
    let flat = flat_from(&["C", "A"]).unwrap();
    assert_eq!(flat.as_bytes(), TWO_WORDS);
    assert_eq!(validate(TWO_WORDS).unwrap().terminals, 2);
}

#[test]
fn node_sizes() {
    assert_eq!(node_size(0), MIN_NODE_SIZE);
    assert_eq!(node_size(26), 6 + 26 * 5);
    let root = FlatNode::parse(TWO_WORDS, 0).unwrap();
    assert_eq!(root.size(), node_size(2));
    assert_eq!(root.end(), 16);
    assert_eq!(root.letters(), b"AC");
}

#[test]
fn terminal_byte_must_be_zero_or_one() {
    let mut buf = TWO_WORDS.to_vec();
    buf[21] = 2;
    assert!(matches!(
        lookup(&buf, "A"),
        Err(TrieError::CorruptBuffer { position: 21, .. })
    ));
    assert!(validate(&buf).is_err());
    // the other branch is unaffected
    assert!(lookup(&buf, "C").unwrap());
}

#[test]
fn mask_miss_answers_without_reading_letters() {
    let mut buf = TWO_WORDS.to_vec();
    // scribble over the letter table; B's mask bit is still clear
    buf[5] = 0xFF;
    buf[6] = 0xFF;
    assert!(!lookup(&buf, "B").unwrap());
    assert!(validate(&buf).is_err());
}

#[test]
fn offset_out_of_bounds_is_corrupt() {
    let mut buf = TWO_WORDS.to_vec();
    buf[11..15].copy_from_slice(&u32::MAX.to_le_bytes());
    assert!(matches!(lookup(&buf, "C"), Err(TrieError::CorruptBuffer { .. })));
    assert!(lookup(&buf, "A").unwrap());
}

#[test]
fn invalid_query_checked_before_buffer() {
    // even garbage bytes report the bad query character first
    assert!(matches!(
        lookup(&[], "a"),
        Err(TrieError::InvalidCharacter { byte: b'a', position: 0 })
    ));
}

#[test]
fn unicode_query_rejected() {
    let flat = flat_from(&["CAFE"]).unwrap();
    assert!(matches!(
        flat.lookup("CAFÉ"),
        Err(TrieError::InvalidCharacter { position: 3, .. })
    ));
}

#[test]
fn from_bytes_round_trip_keeps_answers() {
    let words = owned(&["ZEBRA", "ZEBU", "ZOO"]);
    let flat = flat_from(&["ZEBRA", "ZEBU", "ZOO"]).unwrap();
    let adopted = FlatTrie::from_bytes(flat.clone().into_bytes().into_vec()).unwrap();
    for w in &words {
        assert!(adopted.lookup(w).unwrap());
    }
    assert!(!adopted.lookup("ZEB").unwrap());
}
