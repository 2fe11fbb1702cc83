//! Executes one script.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::config::RunnerConfig;

/// Lines of stderr kept for a failing script.
const STDERR_TAIL: usize = 10;

/// What happened when a script ran.
#[derive(Debug, Clone)]
pub struct ScriptOutcome {
    /// Path of the script.
    pub script: PathBuf,
    /// Exit code, or `None` if the process was terminated by a signal.
    pub exit_code: Option<i32>,
    /// Last lines of the script's standard error.
    pub stderr_tail: Vec<String>,
    /// Wall-clock run time.
    pub elapsed: Duration,
}

impl ScriptOutcome {
    /// True when the script exited with status 0.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs `<interpreter> [args…] <file name>` from the script's own directory
/// and waits for it.
///
/// # Errors
///
/// Returns an error if the path has no file name or the interpreter cannot
/// be started. A script that starts and exits non-zero is *not* an error;
/// inspect [`ScriptOutcome::succeeded`].
pub fn execute(script: &Path, config: &RunnerConfig) -> Result<ScriptOutcome> {
    let file_name = script
        .file_name()
        .with_context(|| format!("Not a script file: {}", script.display()))?;
    let dir = match script.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    tracing::debug!(
        script = %script.display(),
        interpreter = %config.interpreter,
        "running script"
    );
    let started = Instant::now();
    let output = Command::new(&config.interpreter)
        .args(&config.interpreter_args)
        .arg(file_name)
        .current_dir(dir)
        .output()
        .with_context(|| {
            format!(
                "Cannot start `{}` for {}",
                config.interpreter,
                script.display()
            )
        })?;
    let elapsed = started.elapsed();

    let stderr = String::from_utf8_lossy(&output.stderr);
    let lines: Vec<&str> = stderr.lines().collect();
    let stderr_tail = lines[lines.len().saturating_sub(STDERR_TAIL)..]
        .iter()
        .map(|l| l.to_string())
        .collect();

    Ok(ScriptOutcome {
        script: script.to_path_buf(),
        exit_code: output.status.code(),
        stderr_tail,
        elapsed,
    })
}
