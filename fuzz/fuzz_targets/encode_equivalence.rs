// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for encoder correctness.
//!
//! Builds every representation from arbitrary words and checks that each one
//! agrees with a `BTreeSet` on the words, their prefixes and their reversals.

#![no_main]

use std::collections::BTreeSet;

use libfuzzer_sys::fuzz_target;
use wordtrie::{probe_words, validate, TrieSet, WordSet};

fuzz_target!(|raw: Vec<Vec<u8>>| {
    let words: Vec<String> = raw
        .iter()
        .take(256)
        .map(|w| w.iter().take(16).map(|b| char::from(b'A' + b % 26)).collect())
        .collect();

    let tries = TrieSet::build(&words).expect("letters-only words always build");
    validate(tries.flat.as_bytes()).expect("encoder output must validate");

    let expected: BTreeSet<&str> = words.iter().map(String::as_str).collect();
    for probe in probe_words(&words) {
        let truth = expected.contains(probe.as_str());
        for set in tries.representations() {
            assert_eq!(
                set.contains(&probe).expect("valid probe"),
                truth,
                "{} disagrees on {:?}",
                set.label(),
                probe
            );
        }
    }
});
