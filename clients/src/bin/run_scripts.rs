//! `uqdemo-run-scripts`: Runs every teaching script under a directory as a smoke test.
//!
//! **Usage:**
//! ```text
//! uqdemo-run-scripts <directory> [--config <toml>] [--max-files <n>] [--interpreter <cmd>] [--extension <ext>] [--keep-going]
//! ```
//!
//! Exits non-zero if any script fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use uqdemo_runner::{run_all, RunnerConfig, Severity};

/// Run every teaching script under a directory.
#[derive(Parser)]
#[command(
    name = "uqdemo-run-scripts",
    about = "Run every teaching script under a directory as a smoke test"
)]
struct Args {
    /// Directory searched recursively for scripts.
    directory: PathBuf,

    /// TOML file with runner settings; flags given here take precedence.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum number of scripts to run.
    #[arg(long)]
    max_files: Option<usize>,

    /// Interpreter used to run each script.
    #[arg(long)]
    interpreter: Option<String>,

    /// Extension of the script files, without the dot.
    #[arg(long)]
    extension: Option<String>,

    /// Keep running after a failing script.
    #[arg(long)]
    keep_going: bool,
}

fn main() -> Result<()> {
    uqdemo_clients::init_tracing();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => RunnerConfig::load(path)?,
        None => RunnerConfig::default(),
    };
    config.root = args.directory;
    if let Some(max_files) = args.max_files {
        config.max_files = max_files;
    }
    if let Some(interpreter) = args.interpreter {
        config.interpreter = interpreter;
    }
    if let Some(extension) = args.extension {
        config.extension = extension;
    }
    if args.keep_going {
        config.fail_fast = false;
    }

    println!("+ Searching in {} ...", config.root.display());
    let report = run_all(&config)?;

    for (index, result) in report.results.iter().enumerate() {
        let status = match result.severity {
            Severity::Pass => "PASS",
            Severity::Skipped => "SKIP",
            Severity::Failure => "FAIL",
        };
        println!("({index}) [{status}] {:<40} {}", result.script, result.message);
        for detail in &result.details {
            println!("       {detail}");
        }
    }

    println!();
    println!("Number of tested files: {}", report.tested_count());

    let failed = report.failure_count();
    if failed > 0 {
        eprintln!("Smoke test FAILED: {failed} script(s) did not pass.");
        process::exit(1);
    }

    println!("Smoke test PASSED.");
    Ok(())
}
