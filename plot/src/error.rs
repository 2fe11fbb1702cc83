//! Errors raised while assembling chart layers.

use thiserror::Error;

/// Error type for invalid chart layers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlotError {
    /// A text layer needs exactly one label per anchor point.
    #[error("text layer has {points} points but {labels} labels")]
    LabelCountMismatch {
        /// Number of anchor points supplied.
        points: usize,
        /// Number of labels supplied.
        labels: usize,
    },
}
