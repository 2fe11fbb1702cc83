//! Errors raised while configuring a run.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for invalid runner configuration.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The search root does not exist or is not a directory.
    #[error("search root is not a directory: {}", .0.display())]
    MissingRoot(PathBuf),
    /// No interpreter command was configured.
    #[error("interpreter command is empty")]
    EmptyInterpreter,
    /// No script extension was configured.
    #[error("script extension is empty")]
    EmptyExtension,
    /// The configuration file is not valid TOML for [`RunnerConfig`](crate::RunnerConfig).
    #[error("invalid runner configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
