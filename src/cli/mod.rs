// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the wordtrie command-line interface.
//!
//! Four subcommands, all taking a word list: `inspect` shows what the flat
//! encoding of it looks like, `query` asks every representation about some
//! words, `check` cross-checks the representations against each other, and
//! `bench` times them.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "wordtrie",
    about = "Flat trie encoding and dictionary membership benchmarks",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build and encode a word list, then print its size and shape
    Inspect {
        /// Word list, whitespace-separated uppercase words
        wordlist: PathBuf,
    },

    /// Look words up in every representation
    Query {
        /// Word list, whitespace-separated uppercase words
        wordlist: PathBuf,

        /// Words to look up
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Check that every representation agrees on words, reversals and prefixes
    Check {
        /// Word list, whitespace-separated uppercase words
        wordlist: PathBuf,
    },

    /// Time every representation against binary search over sorted strings
    Bench {
        /// Word list, whitespace-separated uppercase words
        wordlist: PathBuf,

        /// Back-to-back queries per word
        #[arg(short, long, default_value = "1000")]
        runs: usize,

        /// Shortest word length to report
        #[arg(long, default_value = "3")]
        min_length: usize,

        /// Longest word length to report
        #[arg(long, default_value = "10")]
        max_length: usize,

        /// Print the full report as JSON instead of the ratio table
        #[arg(long)]
        json: bool,
    },
}
