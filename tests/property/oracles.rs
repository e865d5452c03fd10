//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations built on `BTreeSet`. They are slow
//! and allocate freely; their only job is to be right.

use std::collections::{BTreeMap, BTreeSet};

/// Membership by set lookup.
pub fn oracle_contains(words: &[String], query: &str) -> bool {
    words.iter().any(|w| w == query)
}

/// Every prefix of every word, the empty word included, in BFS order.
///
/// BFS over children sorted by letter visits nodes shortest first and, within a
/// length, in lexicographic order, so sorting by `(len, string)` reproduces it.
pub fn oracle_bfs_nodes(words: &[String]) -> Vec<String> {
    let mut prefixes: BTreeSet<String> = BTreeSet::new();
    prefixes.insert(String::new());
    for word in words {
        for end in 1..=word.len() {
            prefixes.insert(word[..end].to_string());
        }
    }
    let mut nodes: Vec<String> = prefixes.into_iter().collect();
    nodes.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    nodes
}

/// Flat encoding computed from prefixes alone, without building a trie.
pub fn oracle_encode(words: &[String]) -> Vec<u8> {
    let nodes = oracle_bfs_nodes(words);
    let stored: BTreeSet<&str> = words.iter().map(String::as_str).collect();

    // children of each prefix, already sorted by letter
    let mut children: BTreeMap<&str, Vec<u8>> = BTreeMap::new();
    for node in &nodes {
        if let Some((&last, _)) = node.as_bytes().split_last() {
            children.entry(&node[..node.len() - 1]).or_default().push(last);
        }
    }

    let size = |node: &str| 6 + 5 * children.get(node).map_or(0, Vec::len);
    let mut starts: BTreeMap<&str, usize> = BTreeMap::new();
    let mut position = 0;
    for node in &nodes {
        starts.insert(node.as_str(), position);
        position += size(node.as_str());
    }

    let mut out = Vec::with_capacity(position);
    for node in &nodes {
        let letters = children.get(node.as_str()).cloned().unwrap_or_default();
        out.push(letters.len() as u8);
        let mask = letters.iter().fold(0u32, |m, &b| m | 1 << (b - b'A'));
        out.extend_from_slice(&mask.to_le_bytes());
        out.extend_from_slice(&letters);
        let slots_start = out.len();
        for (i, &letter) in letters.iter().enumerate() {
            let mut child = node.clone();
            child.push(char::from(letter));
            let slot = slots_start + 4 * i;
            let offset = (starts[child.as_str()] - slot) as u32;
            out.extend_from_slice(&offset.to_le_bytes());
        }
        out.push(u8::from(stored.contains(node.as_str())));
    }
    out
}

/// Number of distinct non-empty prefixes plus the root.
pub fn oracle_node_count(words: &[String]) -> usize {
    oracle_bfs_nodes(words).len()
}
