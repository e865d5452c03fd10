// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lookup timing harness.
//!
//! Every representation answers the same two needle sets: the words themselves
//! (all hits) and the words reversed (mostly misses, same length profile). Each
//! needle is queried `runs` times in a row and the elapsed time is bucketed by
//! needle length. A bucket reports its median, or 1 ns when no needle has that
//! length. Timings are clamped to at least 1 ns, so ratios never divide by zero.
//!
//! Results are reported as ratios against binary search over sorted strings:
//!
//! ```text
//! length  forward  reversed  # tag
//! 3       2.41     3.02      # static-trie
//! ```
//!
//! A ratio above 1 means the representation is faster than the baseline.
//! Packed-code baselines hold at most 12 letters; when a word list has longer
//! words they are skipped with a warning instead of failing the whole run.

use std::hint::black_box;
use std::io::{self, Write};
use std::time::Instant;

use crate::baseline::{HashedCodes, HashedWords, IdentityHashedCodes, SortedCodes, SortedWords};
use crate::error::TrieError;
use crate::set::{TrieSet, WordSet};
use crate::word_code::encode_words;
use crate::wordlist;

/// Knobs for a benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct BenchConfig {
    /// Back-to-back queries per needle.
    pub runs: usize,
    /// Shortest length reported.
    pub min_length: usize,
    /// Longest length reported.
    pub max_length: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            runs: 1000,
            min_length: 3,
            max_length: 10,
        }
    }
}

/// Why a benchmark run failed.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    #[error(transparent)]
    Trie(#[from] TrieError),

    #[error("failed to write results: {0}")]
    Io(#[from] io::Error),
}

/// Median nanoseconds per needle length, indexed by length.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct TimePerLength(Vec<u64>);

impl TimePerLength {
    /// Median for `length`; 1 for lengths with no needles.
    pub fn get(&self, length: usize) -> u64 {
        self.0.get(length).copied().unwrap_or(1)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Time `f` over every needle, `runs` times each, and bucket by `lengths`.
///
/// The first error `f` returns aborts the run and is handed back.
pub fn run_benchmark<T, E, F>(
    needles: &[T],
    lengths: &[usize],
    runs: usize,
    mut f: F,
) -> Result<TimePerLength, E>
where
    F: FnMut(&T) -> Result<bool, E>,
{
    debug_assert_eq!(needles.len(), lengths.len());

    let buckets = lengths.iter().copied().max().map_or(0, |m| m + 1);
    let mut durations: Vec<Vec<u64>> = vec![Vec::new(); buckets];

    for (needle, &length) in needles.iter().zip(lengths) {
        let start = Instant::now();
        for _ in 0..runs {
            black_box(f(black_box(needle))?);
        }
        let elapsed = u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX);
        durations[length].push(elapsed.max(1));
    }

    Ok(TimePerLength(
        durations
            .into_iter()
            .map(|mut d| {
                if d.is_empty() {
                    1
                } else {
                    d.sort_unstable();
                    d[d.len() / 2]
                }
            })
            .collect(),
    ))
}

/// Forward and reversed timings of one representation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct BenchRow {
    pub label: &'static str,
    pub forward: TimePerLength,
    pub reversed: TimePerLength,
}

impl BenchRow {
    /// `(forward, reversed)` speed relative to `baseline` at `length`.
    pub fn ratios(&self, baseline: &BenchRow, length: usize) -> (f32, f32) {
        (
            baseline.forward.get(length) as f32 / self.forward.get(length) as f32,
            baseline.reversed.get(length) as f32 / self.reversed.get(length) as f32,
        )
    }
}

/// Every row of a run, baseline first.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct BenchReport {
    pub config: BenchConfig,
    pub words: usize,
    pub rows: Vec<BenchRow>,
}

impl BenchReport {
    pub fn baseline(&self) -> Option<&BenchRow> {
        self.rows.first()
    }
}

struct Needles {
    forward: Vec<String>,
    reversed: Vec<String>,
    lengths: Vec<usize>,
}

fn bench_set(set: &dyn WordSet, needles: &Needles, runs: usize) -> Result<BenchRow, TrieError> {
    let query = |w: &String| set.contains(w);
    Ok(BenchRow {
        label: set.label(),
        forward: run_benchmark(&needles.forward, &needles.lengths, runs, query)?,
        reversed: run_benchmark(&needles.reversed, &needles.lengths, runs, query)?,
    })
}

/// `Ok(None)` when some needle is too long to pack.
fn bench_codes<F>(
    label: &'static str,
    needles: &Needles,
    runs: usize,
    f: F,
) -> Result<Option<BenchRow>, TrieError>
where
    F: Fn(u64) -> bool,
{
    let coded = encode_words(&needles.forward).and_then(|forward| {
        encode_words(&needles.reversed).map(|reversed| (forward, reversed))
    });
    let (forward, reversed) = match coded {
        Ok(codes) => codes,
        Err(e @ TrieError::WordTooLong { .. }) => {
            tracing::warn!(label, error = %e, "skipping packed-code representation");
            return Ok(None);
        }
        Err(e) => return Err(e),
    };
    let query = |&c: &u64| Ok::<_, TrieError>(f(c));
    Ok(Some(BenchRow {
        label,
        forward: run_benchmark(&forward, &needles.lengths, runs, query)?,
        reversed: run_benchmark(&reversed, &needles.lengths, runs, query)?,
    }))
}

/// Build every representation from `words` and time them all.
pub fn run_all(words: &[String], config: &BenchConfig) -> Result<BenchReport, TrieError> {
    if !wordlist::is_sorted(words) {
        tracing::debug!("word list is not sorted; baselines sort their own copy");
    }
    let needles = Needles {
        forward: words.to_vec(),
        reversed: wordlist::reversed(words),
        lengths: words.iter().map(String::len).collect(),
    };
    let runs = config.runs;

    let mut rows = Vec::new();
    rows.push(bench_set(&SortedWords::build(words)?, &needles, runs)?);

    match SortedCodes::build(words) {
        Ok(set) => rows.extend(bench_codes(set.label(), &needles, runs, |c| set.contains_code(c))?),
        Err(e) => tracing::warn!(error = %e, "skipping bsearch-code"),
    }
    match HashedCodes::<std::collections::hash_map::RandomState>::build(words) {
        Ok(set) => rows.extend(bench_codes(set.label(), &needles, runs, |c| set.contains_code(c))?),
        Err(e) => tracing::warn!(error = %e, "skipping hashset(code)"),
    }
    match IdentityHashedCodes::build(words) {
        Ok(set) => rows.extend(bench_codes(set.label(), &needles, runs, |c| set.contains_code(c))?),
        Err(e) => tracing::warn!(error = %e, "skipping hashset(code,hash)"),
    }

    rows.push(bench_set(&HashedWords::build(words)?, &needles, runs)?);

    let tries = TrieSet::build(words)?;
    rows.push(bench_set(&tries.array, &needles, runs)?);
    rows.push(bench_set(&tries.dynamic, &needles, runs)?);
    rows.push(bench_set(&tries.flat, &needles, runs)?);

    tracing::debug!(words = words.len(), rows = rows.len(), runs, "benchmark finished");
    Ok(BenchReport {
        config: *config,
        words: words.len(),
        rows,
    })
}

/// Write one `length\tforward\treversed\t# tag` line per row and length.
pub fn write_ratios<W: Write>(out: &mut W, report: &BenchReport) -> io::Result<()> {
    let Some(baseline) = report.baseline() else {
        return Ok(());
    };
    for row in &report.rows {
        for length in report.config.min_length..=report.config.max_length {
            let (forward, reversed) = row.ratios(baseline, length);
            writeln!(out, "{}\t{}\t{}\t# {}", length, forward, reversed, row.label)?;
        }
    }
    Ok(())
}

/// Time every representation and write the ratio table to `out`.
pub fn bench_all<W: Write>(
    out: &mut W,
    words: &[String],
    config: &BenchConfig,
) -> Result<BenchReport, BenchError> {
    let report = run_all(words, config)?;
    write_ratios(out, &report)?;
    Ok(report)
}
