// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The mutable builder trie, and the oracle every other representation is
//! checked against.
//!
//! Each node owns its children by value in a `Vec`, kept sorted by letter next
//! to a parallel `Vec` of letters. Lookups binary-search the letter table. There
//! are no back-references and no sharing, so dropping the root drops everything.
//!
//! Mutation takes `&mut self`. Concurrent inserts need external exclusion, and a
//! reader must not observe a trie mid-insertion; the borrow checker enforces both.

use crate::alphabet::{self, Letter};
use crate::contracts::{check_children_sorted, check_parallel_lengths};
use crate::error::Result;

/// One node of a [`DynamicTrie`].
///
/// `Clone`, `PartialEq` and `Drop` walk the subtree with an explicit stack, so
/// they are safe for arbitrarily long words.
#[derive(Debug, Default)]
pub struct DynamicNode {
    terminal: bool,
    letters: Vec<Letter>,
    children: Vec<DynamicNode>,
}

impl DynamicNode {
    /// Whether the path to this node is a stored word.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Child letters, strictly increasing.
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Children, in the same order as [`letters`](Self::letters).
    pub fn children(&self) -> &[DynamicNode] {
        &self.children
    }

    /// Number of children.
    pub fn child_count(&self) -> usize {
        self.letters.len()
    }

    /// `(letter, child)` pairs in letter order.
    pub fn edges(&self) -> impl Iterator<Item = (Letter, &DynamicNode)> {
        self.letters.iter().copied().zip(self.children.iter())
    }

    /// The child reached by `letter`, if any.
    pub fn child(&self, letter: Letter) -> Option<&DynamicNode> {
        self.letters
            .binary_search(&letter)
            .ok()
            .map(|i| &self.children[i])
    }

    /// Descend to `letter`, creating the child at its sorted position if absent.
    ///
    /// Returns the child and whether it was newly allocated.
    fn child_or_insert(&mut self, letter: Letter) -> (&mut DynamicNode, bool) {
        match self.letters.binary_search(&letter) {
            Ok(i) => (&mut self.children[i], false),
            Err(i) => {
                self.letters.insert(i, letter);
                self.children.insert(i, DynamicNode::default());
                check_children_sorted(&self.letters);
                check_parallel_lengths(self.letters.len(), self.children.len());
                (&mut self.children[i], true)
            }
        }
    }
}

impl Clone for DynamicNode {
    // Post-order: a node is rebuilt once its children sit on top of `built`.
    fn clone(&self) -> Self {
        let mut built: Vec<DynamicNode> = Vec::new();
        let mut stack = vec![(self, 0usize)];
        while let Some(top) = stack.last_mut() {
            let (node, next) = (top.0, top.1);
            if next < node.children.len() {
                top.1 += 1;
                stack.push((&node.children[next], 0));
            } else {
                stack.pop();
                let children = built.split_off(built.len() - node.children.len());
                built.push(DynamicNode {
                    terminal: node.terminal,
                    letters: node.letters.clone(),
                    children,
                });
            }
        }
        built.pop().unwrap_or_default()
    }
}

impl PartialEq for DynamicNode {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.terminal != b.terminal || a.letters != b.letters {
                return false;
            }
            stack.extend(a.children.iter().zip(&b.children));
        }
        true
    }
}

impl Eq for DynamicNode {}

impl Drop for DynamicNode {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

/// Mutable trie over the 26-letter alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicTrie {
    root: DynamicNode,
    nodes: usize,
    words: usize,
}

impl Default for DynamicTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl DynamicTrie {
    /// An empty trie: a single non-terminal root.
    pub fn new() -> Self {
        Self {
            root: DynamicNode::default(),
            nodes: 1,
            words: 0,
        }
    }

    /// Build a trie from a sequence of words, stopping at the first invalid one.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        trie.insert_many(words)?;
        Ok(trie)
    }

    /// The root node.
    pub fn root(&self) -> &DynamicNode {
        &self.root
    }

    /// Total nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Number of distinct stored words.
    pub fn word_count(&self) -> usize {
        self.words
    }

    /// Whether no word (not even the empty word) is stored.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Insert `word`.
    ///
    /// The whole word is validated first, so an `InvalidCharacter` error leaves
    /// the trie untouched. Re-inserting a stored word changes nothing.
    pub fn insert(&mut self, word: &str) -> Result<()> {
        let letters = alphabet::letters(word.as_bytes())?;

        let mut current = &mut self.root;
        for letter in letters {
            let (next, created) = current.child_or_insert(letter);
            if created {
                self.nodes += 1;
            }
            current = next;
        }

        if !current.terminal {
            current.terminal = true;
            self.words += 1;
        }
        Ok(())
    }

    /// Insert every word in order.
    ///
    /// Stops at the first invalid word: earlier words stay inserted, the invalid
    /// word itself is not.
    pub fn insert_many<I, S>(&mut self, words: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.insert(word.as_ref())?;
        }
        Ok(())
    }

    /// Whether `word` is stored.
    ///
    /// The empty string is stored only if it was inserted explicitly.
    pub fn find(&self, word: &str) -> Result<bool> {
        let mut current = &self.root;
        for letter in alphabet::letters(word.as_bytes())? {
            match current.child(letter) {
                Some(next) => current = next,
                None => return Ok(false),
            }
        }
        Ok(current.terminal)
    }

    /// Every stored word, in lexicographic order.
    pub fn words(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.words);
        if self.root.terminal {
            out.push(String::new());
        }

        let mut prefix: Vec<u8> = Vec::new();
        let mut stack: Vec<(&DynamicNode, usize)> = vec![(&self.root, 0)];
        while let Some(top) = stack.last_mut() {
            let (node, next) = (top.0, top.1);
            if next < node.children.len() {
                top.1 += 1;
                let child = &node.children[next];
                prefix.push(node.letters[next].to_ascii());
                if child.terminal {
                    out.push(prefix.iter().map(|&b| b as char).collect());
                }
                stack.push((child, 0));
            } else {
                stack.pop();
                prefix.pop();
            }
        }
        out
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(&self.root, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.children.iter().map(|c| (c, depth + 1)));
        }
        deepest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrieError;

    fn scenario() -> DynamicTrie {
        DynamicTrie::from_words(["ABC", "AB", "ACD", "BAD"]).unwrap()
    }

    #[test]
    fn test_scenario_membership() {
        let trie = scenario();
        for word in ["AB", "ABC", "ACD", "BAD"] {
            assert!(trie.find(word).unwrap(), "{} should be stored", word);
        }
        for word in ["A", "", "AC", "BC", "BA", "B"] {
            assert!(!trie.find(word).unwrap(), "{:?} should be absent", word);
        }
    }

    #[test]
    fn test_node_and_word_counts() {
        let trie = scenario();
        // root, A, B, AB, AC, BA, ABC, ACD, BAD
        assert_eq!(trie.node_count(), 9);
        assert_eq!(trie.word_count(), 4);
        assert_eq!(trie.depth(), 3);
    }

    #[test]
    fn test_reinsert_is_noop() {
        let mut trie = scenario();
        let before = trie.clone();
        trie.insert("ACD").unwrap();
        trie.insert("AB").unwrap();
        assert_eq!(trie, before);
    }

    #[test]
    fn test_empty_word() {
        let mut trie = DynamicTrie::new();
        assert!(trie.is_empty());
        assert!(!trie.find("").unwrap());
        trie.insert("").unwrap();
        assert!(trie.find("").unwrap());
        assert!(trie.root().is_terminal());
        assert_eq!(trie.node_count(), 1);
        assert_eq!(trie.word_count(), 1);
    }

    #[test]
    fn test_children_sorted_regardless_of_insert_order() {
        let trie = DynamicTrie::from_words(["Z", "M", "A", "Q", "B"]).unwrap();
        let letters: String = trie
            .root()
            .letters()
            .iter()
            .map(|l| l.to_ascii() as char)
            .collect();
        assert_eq!(letters, "ABMQZ");
        assert_eq!(trie.root().children().len(), 5);
    }

    #[test]
    fn test_invalid_insert_leaves_trie_untouched() {
        let mut trie = scenario();
        let before = trie.clone();
        let err = trie.insert("ABx").unwrap_err();
        assert_eq!(
            err,
            TrieError::InvalidCharacter {
                byte: b'x',
                position: 2
            }
        );
        assert_eq!(trie, before);
    }

    #[test]
    fn test_insert_many_stops_at_first_invalid() {
        let mut trie = DynamicTrie::new();
        let result = trie.insert_many(["CAT", "D0G", "EEL"]);
        assert!(result.is_err());
        assert!(trie.find("CAT").unwrap());
        assert!(!trie.find("EEL").unwrap());
        assert_eq!(trie.word_count(), 1);
    }

    #[test]
    fn test_invalid_query_is_error() {
        let trie = scenario();
        assert!(trie.find("ab").is_err());
        // Rejected even when the valid prefix already misses.
        assert!(trie.find("ZZ?").is_err());
    }

    #[test]
    fn test_words_are_sorted() {
        let trie = DynamicTrie::from_words(["BAD", "AB", "ACD", "ABC", ""]).unwrap();
        assert_eq!(trie.words(), vec!["", "AB", "ABC", "ACD", "BAD"]);
    }

    #[test]
    fn test_clone_and_eq_follow_structure() {
        let trie = scenario();
        let copy = trie.clone();
        assert_eq!(copy, trie);
        assert_eq!(copy.words(), trie.words());

        let mut other = scenario();
        other.insert("ACE").unwrap();
        assert_ne!(other.root(), trie.root());
    }

    #[test]
    fn test_very_long_word_builds_encodes_and_drops() {
        use crate::flat::FlatTrie;

        let word = "A".repeat(300_000);
        let mut trie = DynamicTrie::from_words([word.as_str(), "AB"]).unwrap();
        assert_eq!(trie.node_count(), 300_001 + 1);
        assert_eq!(trie.depth(), 300_000);
        assert_eq!(trie.words(), vec![word.clone(), "AB".to_string()]);

        let flat = FlatTrie::encode(&trie).unwrap();
        assert!(flat.lookup(&word).unwrap());
        assert!(!flat.lookup(&word[..299_999]).unwrap());

        trie.insert(&word).unwrap();
        let copy = trie.clone();
        assert_eq!(copy, trie);
        drop(trie);
        drop(copy);
    }

    #[test]
    fn test_prefix_and_extension_are_independent() {
        let trie = DynamicTrie::from_words(["CAT", "CATALOG"]).unwrap();
        assert!(trie.find("CAT").unwrap());
        assert!(trie.find("CATALOG").unwrap());
        for between in ["CATA", "CATAL", "CATALO"] {
            assert!(!trie.find(between).unwrap());
        }
    }
}
