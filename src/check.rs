// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cross-representation equivalence checking.
//!
//! Every [`WordSet`] built from the same words must give the same answer to the
//! same query. The first set passed is the oracle; a probe is a mismatch when
//! any other set disagrees with it, including disagreeing on the error.
//!
//! Probes are the words themselves (all present), their reversals (mostly
//! absent), and every prefix of every word (the empty word included). Prefixes
//! are where terminal flags and child pointers are easiest to get wrong.
//!
//! With the `parallel` feature the probes are split across the rayon pool.
//! All representations are immutable and `Sync`, so no locking is involved.

use std::collections::BTreeSet;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;

use crate::error::Result;
use crate::set::WordSet;

/// One representation's answer to a probe.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Answer {
    pub label: &'static str,
    pub outcome: String,
}

/// A probe on which the representations disagreed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Mismatch {
    pub word: String,
    pub answers: Vec<Answer>,
}

/// Summary of an equivalence run.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CheckReport {
    pub probes: usize,
    pub representations: Vec<&'static str>,
    pub mismatches: Vec<Mismatch>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Words, reversed words and all prefixes, sorted and deduplicated.
pub fn probe_words(words: &[String]) -> Vec<String> {
    let mut probes = BTreeSet::new();
    for word in words {
        probes.insert(word.chars().rev().collect::<String>());
        // ASCII-only after validation, so every byte index is a char boundary
        for end in 0..=word.len() {
            if let Some(prefix) = word.get(..end) {
                probes.insert(prefix.to_owned());
            }
        }
    }
    probes.into_iter().collect()
}

fn describe(outcome: &Result<bool>) -> String {
    match outcome {
        Ok(true) => "present".to_owned(),
        Ok(false) => "absent".to_owned(),
        Err(e) => format!("error: {}", e),
    }
}

fn probe(sets: &[&(dyn WordSet + Sync)], word: &str) -> Option<Mismatch> {
    let outcomes: Vec<Result<bool>> = sets.iter().map(|s| s.contains(word)).collect();
    let (oracle, rest) = outcomes.split_first()?;
    if rest.iter().all(|o| o == oracle) {
        return None;
    }
    Some(Mismatch {
        word: word.to_owned(),
        answers: sets
            .iter()
            .zip(&outcomes)
            .map(|(set, outcome)| Answer {
                label: set.label(),
                outcome: describe(outcome),
            })
            .collect(),
    })
}

fn report(
    sets: &[&(dyn WordSet + Sync)],
    probes: usize,
    mut mismatches: Vec<Mismatch>,
) -> CheckReport {
    mismatches.sort_by(|a, b| a.word.cmp(&b.word));
    tracing::debug!(
        probes,
        representations = sets.len(),
        mismatches = mismatches.len(),
        "equivalence check finished"
    );
    CheckReport {
        probes,
        representations: sets.iter().map(|s| s.label()).collect(),
        mismatches,
    }
}

/// Query every probe against every set and collect the disagreements.
pub fn check(sets: &[&(dyn WordSet + Sync)], probes: &[String]) -> CheckReport {
    #[cfg(feature = "parallel")]
    let mismatches: Vec<Mismatch> = probes
        .par_iter()
        .filter_map(|word| probe(sets, word))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let mismatches: Vec<Mismatch> = probes.iter().filter_map(|word| probe(sets, word)).collect();

    report(sets, probes.len(), mismatches)
}

/// [`check`], advancing `progress` once per probe.
#[cfg(feature = "parallel")]
pub fn check_with_progress(
    sets: &[&(dyn WordSet + Sync)],
    probes: &[String],
    progress: &ProgressBar,
) -> CheckReport {
    let mismatches: Vec<Mismatch> = probes
        .par_iter()
        .filter_map(|word| {
            let found = probe(sets, word);
            progress.inc(1);
            found
        })
        .collect();
    report(sets, probes.len(), mismatches)
}
