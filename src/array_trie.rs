// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Direct-indexed trie: every node that has children owns all 26 slots.
//!
//! Descending is one array index per letter, no search at all. The price is
//! memory: inserting a single letter below a node allocates a full array of 26
//! child nodes, most of which stay empty forever. Those never-used slots are
//! "dead shells" and [`ArrayTrie::suffixes`] reports them as absent, so a
//! caller walking a query letter by letter cannot tell "no such edge" from
//! "edge into nothing".

use crate::alphabet::{self, Letter, ALPHABET_SIZE};
use crate::error::Result;

/// A node of the direct-indexed trie. The root is just another node.
#[derive(Debug, Default)]
pub struct ArrayTrie {
    next: Option<Box<[ArrayTrie; ALPHABET_SIZE]>>,
    terminal: bool,
}

impl ArrayTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a sequence of words, stopping at the first invalid one.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        trie.insert_many(words)?;
        Ok(trie)
    }

    /// Whether the path to this node is a stored word.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Whether this node has allocated its child array.
    pub fn has_children(&self) -> bool {
        self.next.is_some()
    }

    /// A node leads toward at least one stored word.
    fn is_live(&self) -> bool {
        self.terminal || self.next.is_some()
    }

    /// Insert the word spelled by `letters`, allocating arrays on the way down.
    pub fn insert_letters<I>(&mut self, letters: I)
    where
        I: IntoIterator<Item = Letter>,
    {
        let mut node = self;
        for letter in letters {
            let next = node
                .next
                .get_or_insert_with(|| Box::new(std::array::from_fn(|_| ArrayTrie::default())));
            node = &mut next[letter.index()];
        }
        node.terminal = true;
    }

    /// Validate and insert `word`. Invalid words leave the trie untouched.
    pub fn insert(&mut self, word: &str) -> Result<()> {
        let letters = alphabet::letters(word.as_bytes())?;
        self.insert_letters(letters);
        Ok(())
    }

    /// Insert every word in order, stopping at the first invalid one.
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

    /// The live child for `letter`, or `None` if absent or a dead shell.
    pub fn suffixes(&self, letter: Letter) -> Option<&ArrayTrie> {
        let child = &self.next.as_ref()?[letter.index()];
        child.is_live().then_some(child)
    }

    /// Drop every child and unmark this node. The node stays usable.
    pub fn clear(&mut self) {
        self.next = None;
        self.terminal = false;
    }

    /// Whether `word` is stored: chained `suffixes` never absent, last node terminal.
    pub fn find(&self, word: &str) -> Result<bool> {
        let mut node = self;
        for letter in alphabet::letters(word.as_bytes())? {
            match node.suffixes(letter) {
                Some(next) => node = next,
                None => return Ok(false),
            }
        }
        Ok(node.terminal)
    }

    /// Nodes physically allocated, dead shells included.
    pub fn allocated_nodes(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            if let Some(next) = &node.next {
                stack.extend(next.iter());
            }
        }
        count
    }

    /// Nodes that lead toward a stored word, root included.
    pub fn live_nodes(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(Letter::all().filter_map(move |l| node.suffixes(l)));
        }
        count
    }
}

impl Drop for ArrayTrie {
    fn drop(&mut self) {
        let mut stack: Vec<Box<[ArrayTrie; ALPHABET_SIZE]>> =
            self.next.take().into_iter().collect();
        while let Some(mut block) = stack.pop() {
            stack.extend(block.iter_mut().filter_map(|child| child.next.take()));
        }
    }
}
