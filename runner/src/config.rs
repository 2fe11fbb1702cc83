//! Runner configuration.
//!
//! Every field has a default, so a configuration file only lists what it
//! changes:
//!
//! ```toml
//! root = "lessons"
//! interpreter = "python3"
//! max_files = 20
//! fail_fast = false
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::RunnerError;

/// Where to look for scripts and how to run them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunnerConfig {
    /// Directory searched recursively.
    pub root: PathBuf,
    /// Extension (without the dot) of the files to run.
    pub extension: String,
    /// Program used to run each script.
    pub interpreter: String,
    /// Arguments passed to the interpreter before the script name.
    pub interpreter_args: Vec<String>,
    /// Upper bound on the number of scripts collected across all directories.
    pub max_files: usize,
    /// Stop at the first failing script.
    pub fail_fast: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extension: "py".to_string(),
            interpreter: "python".to_string(),
            interpreter_args: Vec::new(),
            max_files: 100,
            fail_fast: true,
        }
    }
}

impl RunnerConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Parse`] for malformed TOML or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self, RunnerError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read runner configuration: {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("Cannot parse runner configuration: {}", path.display()))
    }

    /// Checks the configuration before a run.
    ///
    /// # Errors
    ///
    /// Returns the first [`RunnerError`] found.
    pub fn validate(&self) -> Result<(), RunnerError> {
        if self.interpreter.trim().is_empty() {
            return Err(RunnerError::EmptyInterpreter);
        }
        if self.extension.trim().is_empty() {
            return Err(RunnerError::EmptyExtension);
        }
        if !self.root.is_dir() {
            return Err(RunnerError::MissingRoot(self.root.clone()));
        }
        Ok(())
    }
}
