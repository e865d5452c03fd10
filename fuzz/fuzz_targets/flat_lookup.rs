// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for lookups over untrusted bytes.
//!
//! `lookup` and `validate` must answer or return an error for any buffer,
//! never panic or loop. A buffer that validates must also answer every query
//! without `CorruptBuffer`.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use wordtrie::{lookup, validate, TrieError};

#[derive(Debug, Arbitrary)]
struct Input {
    buffer: Vec<u8>,
    /// Folded into `A..=Z` so most queries get past validation.
    query: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let query: String = input
        .query
        .iter()
        .take(32)
        .map(|b| char::from(b'A' + b % 26))
        .collect();

    let answer = lookup(&input.buffer, &query);
    if let Err(e) = &answer {
        assert!(
            matches!(e, TrieError::CorruptBuffer { .. }),
            "letters-only query produced {:?}",
            e
        );
    }

    if validate(&input.buffer).is_ok() {
        assert!(answer.is_ok(), "validated buffer failed lookup: {:?}", answer);
    }
});
