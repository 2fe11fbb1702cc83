//! Run report types: per-script results, severity levels, and aggregation.

/// Severity level of a script result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Severity {
    /// The script exited with status 0.
    Pass,
    /// The script was not run (a previous script failed under fail-fast).
    Skipped,
    /// The script exited with a non-zero status or could not be started.
    Failure,
}

/// Outcome of one script.
#[derive(Debug, Clone)]
pub struct ScriptResult {
    /// Path of the script, as discovered.
    pub script: String,
    /// Human-readable message describing the outcome.
    pub message: String,
    /// Severity of the result.
    pub severity: Severity,
    /// Additional detail lines (tail of the script's stderr on failure).
    pub details: Vec<String>,
}

impl ScriptResult {
    /// Creates a passing result.
    pub fn pass(script: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            message: message.into(),
            severity: Severity::Pass,
            details: Vec::new(),
        }
    }

    /// Creates a failure result with additional detail lines.
    pub fn fail_with_details(
        script: impl Into<String>,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self {
            script: script.into(),
            message: message.into(),
            severity: Severity::Failure,
            details,
        }
    }

    /// Creates a skipped result.
    pub fn skipped(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            message: "not run after an earlier failure".to_string(),
            severity: Severity::Skipped,
            details: Vec::new(),
        }
    }

    /// Returns true if this result represents a failure.
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

/// Aggregated results of a run, in execution order.
#[derive(Debug, Default)]
pub struct RunReport {
    /// All individual script results.
    pub results: Vec<ScriptResult>,
}

impl RunReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result to this report.
    pub fn push(&mut self, result: ScriptResult) {
        self.results.push(result);
    }

    /// Number of scripts actually executed.
    pub fn tested_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.severity != Severity::Skipped)
            .count()
    }

    /// Returns the count of failed scripts.
    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failure()).count()
    }

    /// Returns true if no script failed.
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_ignore_skipped_scripts() {
        let mut report = RunReport::new();
        report.push(ScriptResult::pass("a.py", "ok"));
        report.push(ScriptResult::fail_with_details("b.py", "exit 1", vec!["boom".into()]));
        report.push(ScriptResult::skipped("c.py"));
        assert_eq!(report.tested_count(), 2);
        assert_eq!(report.failure_count(), 1);
        assert!(!report.all_passed());
    }

    #[test]
    fn empty_report_passes() {
        assert!(RunReport::new().all_passed());
    }
}
