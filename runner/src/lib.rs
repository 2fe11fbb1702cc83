//! Smoke-test runner for teaching scripts.
//!
//! Walks a directory tree, collects every script with the configured
//! extension (at most `max_files` of them), and runs each one with the
//! configured interpreter from the script's own directory. A script passes
//! when it exits with status 0.
//!
//! # Entry Point
//!
//! ```no_run
//! use std::path::PathBuf;
//! use uqdemo_runner::{run_all, RunnerConfig};
//!
//! let config = RunnerConfig {
//!     root: PathBuf::from("lessons"),
//!     ..RunnerConfig::default()
//! };
//! let report = run_all(&config).expect("run failed");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod discover;
pub mod error;
pub mod execute;
pub mod report;

pub use config::RunnerConfig;
pub use discover::discover;
pub use error::RunnerError;
pub use execute::{execute, ScriptOutcome};
pub use report::{RunReport, ScriptResult, Severity};

/// Discovers and runs every script, returning one result per discovered
/// script.
///
/// A script that exits non-zero, or whose interpreter cannot be started,
/// is a [`Severity::Failure`]. With `fail_fast`, scripts after the first
/// failure are reported as [`Severity::Skipped`].
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub fn run_all(config: &RunnerConfig) -> anyhow::Result<RunReport> {
    let scripts = discover(config)?;
    tracing::info!(root = %config.root.display(), scripts = scripts.len(), "searching done");

    let mut report = RunReport::new();
    let mut remaining = scripts.iter().enumerate();
    for (index, script) in remaining.by_ref() {
        let name = script.display().to_string();
        tracing::info!(index, script = %name, "testing");
        let failure = match execute(script, config) {
            Ok(outcome) if outcome.succeeded() => {
                report.push(ScriptResult::pass(
                    name,
                    format!("ok in {:.2?}", outcome.elapsed),
                ));
                continue;
            }
            Ok(outcome) => {
                let code = outcome
                    .exit_code
                    .map_or_else(|| "signal".to_string(), |c| c.to_string());
                tracing::warn!(script = %name, code = %code, "script failed");
                ScriptResult::fail_with_details(
                    name,
                    format!("wrong return code = {code}"),
                    outcome.stderr_tail,
                )
            }
            Err(err) => {
                let reason = format!("{err:#}");
                tracing::warn!(script = %name, error = %reason, "script could not be started");
                ScriptResult::fail_with_details(name, "could not be started", vec![reason])
            }
        };
        report.push(failure);
        if config.fail_fast {
            break;
        }
    }
    for (_, script) in remaining {
        report.push(ScriptResult::skipped(script.display().to_string()));
    }

    tracing::info!(
        tested = report.tested_count(),
        failed = report.failure_count(),
        "run finished"
    );
    Ok(report)
}
