// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};
use std::path::Path;

use clap::Parser;
#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

use wordtrie::{
    load_words, probe_words, ArrayTrie, BenchConfig, DynamicTrie, FlatTrie, HashedWords,
    SortedWords, TrieSet, WordSet,
};

mod cli;
use cli::display::{self, format_size, pad_left, pad_right, palette, paint};
use cli::{Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Inspect { wordlist } => run_inspect(&wordlist),
        Commands::Query { wordlist, words } => run_query(&wordlist, &words),
        Commands::Check { wordlist } => run_check(&wordlist),
        Commands::Bench {
            wordlist,
            runs,
            min_length,
            max_length,
            json,
        } => {
            let config = BenchConfig {
                runs,
                min_length,
                max_length,
            };
            run_bench(&wordlist, &config, json)
        }
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn load(path: &Path) -> Result<Vec<String>, String> {
    load_words(path).map_err(|e| format!("{}: {}", path.display(), e))
}

fn brotli_size(data: &[u8]) -> Result<usize, String> {
    let mut compressed = Vec::new();
    {
        let mut encoder = brotli::CompressorWriter::new(&mut compressed, 4096, 11, 22);
        encoder
            .write_all(data)
            .map_err(|e| format!("brotli: {}", e))?;
    }
    Ok(compressed.len())
}

// ============================================================================
// INSPECT
// ============================================================================

fn run_inspect(path: &Path) -> Result<(), String> {
    let words = load(path)?;
    let trie = DynamicTrie::from_words(&words).map_err(|e| e.to_string())?;
    let flat = FlatTrie::encode(&trie).map_err(|e| e.to_string())?;
    let stats = flat.stats().map_err(|e| e.to_string())?;
    let array = ArrayTrie::from_words(&words).map_err(|e| e.to_string())?;

    let raw: usize = trie.words().iter().map(|w| w.len() + 1).sum();
    let compressed = brotli_size(flat.as_bytes())?;

    let label = |s: &str| pad_right(&paint(palette().gray, false, s), 22);
    let value = |s: String| pad_left(&s, 14);

    display::banner(&format!("WORDTRIE  {}", path.display()));

    display::section_top("WORDS");
    display::row(&format!("{}{}", label("read"), value(words.len().to_string())));
    display::row(&format!("{}{}", label("distinct"), value(trie.word_count().to_string())));
    display::row(&format!("{}{}", label("longest"), value(trie.depth().to_string())));
    display::section_bot();

    display::section_top("NODES");
    display::row(&format!("{}{}", label("dynamic trie"), value(trie.node_count().to_string())));
    display::row(&format!("{}{}", label("flat trie"), value(stats.nodes.to_string())));
    display::row(&format!("{}{}", label("  terminal"), value(stats.terminals.to_string())));
    display::row(&format!("{}{}", label("  leaves"), value(stats.leaves.to_string())));
    display::row(&format!(
        "{}{}",
        label("array trie (live)"),
        value(array.live_nodes().to_string())
    ));
    display::row(&format!(
        "{}{}",
        label("array trie (alloc)"),
        value(array.allocated_nodes().to_string())
    ));
    display::section_bot();

    display::section_top("BRANCHING");
    for (children, &count) in stats.branching.iter().enumerate() {
        if count > 0 {
            display::row(&format!(
                "{}{}",
                label(&format!("{} children", children)),
                value(count.to_string())
            ));
        }
    }
    display::section_bot();

    display::section_top("SIZE");
    display::row(&format!("{}{}", label("word list"), value(format_size(raw))));
    display::row(&format!(
        "{}{}  {}",
        label("flat trie"),
        value(format_size(stats.bytes)),
        display::savings_colored(raw, stats.bytes)
    ));
    display::row(&format!(
        "{}{}  {}",
        label("flat trie (brotli)"),
        value(format_size(compressed)),
        display::savings_colored(raw, compressed)
    ));
    display::row(&format!(
        "{}{}",
        label("bytes per word"),
        value(format!("{:.2}", stats.bytes_per_word()))
    ));
    display::section_bot();

    Ok(())
}

// ============================================================================
// QUERY
// ============================================================================

fn run_query(path: &Path, queries: &[String]) -> Result<(), String> {
    let words = load(path)?;
    let tries = TrieSet::build(&words).map_err(|e| e.to_string())?;
    let sorted = SortedWords::build(&words).map_err(|e| e.to_string())?;
    let hashed = HashedWords::build(&words).map_err(|e| e.to_string())?;

    let [dynamic, array, flat] = tries.representations();
    let sets: [&dyn WordSet; 5] = [dynamic, array, flat, &sorted, &hashed];

    for query in queries {
        display::section_top(query);
        for set in sets {
            display::row(&format!(
                " {}{}",
                pad_right(set.label(), 20),
                display::presence(&set.contains(query))
            ));
        }
        display::section_bot();
    }
    Ok(())
}

// ============================================================================
// CHECK
// ============================================================================

#[cfg(feature = "parallel")]
fn progress_bar(len: usize) -> ProgressBar {
    let style = ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<10} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .map(|s| s.progress_chars("━━╸"))
    .unwrap_or_else(|_| ProgressStyle::default_bar());
    let pb = ProgressBar::new(len as u64);
    pb.set_style(style);
    pb.set_prefix("Checking");
    pb
}

fn run_check(path: &Path) -> Result<(), String> {
    let words = load(path)?;
    let tries = TrieSet::build(&words).map_err(|e| e.to_string())?;
    let sorted = SortedWords::build(&words).map_err(|e| e.to_string())?;
    let hashed = HashedWords::build(&words).map_err(|e| e.to_string())?;
    let probes = probe_words(&words);

    let [dynamic, array, flat] = tries.representations();
    let sets: [&(dyn WordSet + Sync); 5] = [dynamic, array, flat, &sorted, &hashed];

    #[cfg(feature = "parallel")]
    let report = {
        let pb = progress_bar(probes.len());
        let report = wordtrie::check::check_with_progress(&sets, &probes, &pb);
        pb.finish_with_message(format!("{} probes", probes.len()));
        report
    };
    #[cfg(not(feature = "parallel"))]
    let report = wordtrie::check(&sets, &probes);

    display::section_top("EQUIVALENCE");
    display::row(&format!(" representations  {}", report.representations.join(", ")));
    display::row(&format!(" probes           {}", report.probes));
    for mismatch in report.mismatches.iter().take(20) {
        let answers: Vec<String> = mismatch
            .answers
            .iter()
            .map(|a| format!("{}={}", a.label, a.outcome))
            .collect();
        display::row(&paint(
            palette().red,
            false,
            &format!(" {:?}: {}", mismatch.word, answers.join(" ")),
        ));
    }
    display::section_bot();

    if report.is_ok() {
        println!("{}", paint(palette().green, true, "✓ all representations agree"));
        Ok(())
    } else {
        Err(format!(
            "{} of {} probes disagree",
            report.mismatches.len(),
            report.probes
        ))
    }
}

// ============================================================================
// BENCH
// ============================================================================

fn run_bench(path: &Path, config: &BenchConfig, json: bool) -> Result<(), String> {
    if config.min_length > config.max_length {
        return Err(format!(
            "--min-length {} is greater than --max-length {}",
            config.min_length, config.max_length
        ));
    }
    let words = load(path)?;

    if json {
        #[cfg(feature = "serde_json")]
        {
            let report = wordtrie::bench::run_all(&words, config).map_err(|e| e.to_string())?;
            let text = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
            println!("{}", text);
            return Ok(());
        }
        #[cfg(not(feature = "serde_json"))]
        return Err("--json needs the serde_json feature".to_string());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    wordtrie::bench_all(&mut out, &words, config).map_err(|e| e.to_string())?;
    Ok(())
}
