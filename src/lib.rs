//! Pointer-free flat tries for allocation-free dictionary membership queries.
//!
//! A static set of uppercase words is built once into a mutable
//! [`DynamicTrie`], then flattened into a single immutable byte buffer
//! ([`FlatTrie`]) that answers membership queries in place: no pointers, no
//! allocation, no reference back to the builder. A fixed-fanout [`ArrayTrie`]
//! and a handful of non-trie baselines exist for comparison.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌───────────────┐
//! │ alphabet.rs │────▶│  dynamic.rs  │────▶│ flat/encode   │
//! │  (Letter,   │     │ (DynamicTrie,│     │ (two-pass BFS)│
//! │  validate)  │     │   oracle)    │     └───────┬───────┘
//! └─────────────┘     └──────────────┘             ▼
//!        │            ┌──────────────┐     ┌───────────────┐
//!        └───────────▶│ array_trie.rs│     │ flat/decode   │
//!                     │ (26-ary)     │     │ (lookup,      │
//!                     └──────────────┘     │  validate)    │
//!                            │             └───────┬───────┘
//!                            ▼                     ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                        set.rs                           │
//! │      (WordSet: one `contains` contract for all)         │
//! └─────────────────────────────────────────────────────────┘
//!        │                   │                     │
//!        ▼                   ▼                     ▼
//!   baseline.rs          check.rs              bench.rs
//! ```
//!
//! # Flat node layout
//!
//! | Field      | Size          | Contents                               |
//! |------------|---------------|----------------------------------------|
//! | count      | 1             | number of children                     |
//! | mask       | 4 (LE)        | bit `i` set iff letter `i` has a child |
//! | letters    | count         | child letters, ASCII, ascending        |
//! | offsets    | 4 × count (LE)| slot-relative distance to each child   |
//! | terminal   | 1             | `1` if a word ends here, else `0`      |
//!
//! # Usage
//!
//! ```
//! use wordtrie::{DynamicTrie, FlatTrie};
//!
//! let trie = DynamicTrie::from_words(["AB", "ABC", "ACD", "BAD"])?;
//! let flat = FlatTrie::encode(&trie)?;
//!
//! assert!(flat.lookup("ACD")?);
//! assert!(!flat.lookup("AC")?);
//! # Ok::<(), wordtrie::TrieError>(())
//! ```

// Module declarations
pub mod alphabet;
pub mod array_trie;
pub mod baseline;
pub mod bench;
pub mod check;
pub mod contracts;
pub mod dynamic;
pub mod error;
pub mod flat;
pub mod set;
pub mod testing;
pub mod word_code;
pub mod wordlist;

// Re-exports for public API
pub use alphabet::{Letter, ALPHABET_SIZE};
pub use array_trie::ArrayTrie;
pub use baseline::{HashedCodes, HashedWords, IdentityHashedCodes, SortedCodes, SortedWords};
pub use bench::{bench_all, BenchConfig, BenchError, BenchReport};
pub use check::{check, probe_words, CheckReport};
pub use dynamic::{DynamicNode, DynamicTrie};
pub use error::{Result, TrieError};
pub use flat::{lookup, validate, FlatStats, FlatTrie};
pub use set::{TrieSet, WordSet, WordSetBuilder};
pub use word_code::{decode_word, encode_word};
pub use wordlist::{load_words, read_words, WordListError};
