//! Errors raised by the explorer.

use thiserror::Error;
use uqdemo_plot::PlotError;

/// Error type for explorer operations.
///
/// Every error is raised before any chart is built, so a failing call never
/// yields a partial view.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExplorerError {
    /// The visualization is defined for 2-dimensional multi-indices only.
    #[error("expected a {expected}-dimensional enumeration, got dimension {found}")]
    DimensionMismatch {
        /// Dimension the visualization requires.
        expected: usize,
        /// Dimension of the enumeration rule.
        found: usize,
    },
    /// Enumeration ranks start at 0.
    #[error("rank {0} is negative")]
    InvalidRank(i64),
    /// Label offsets must be finite numbers.
    #[error("label offset must be finite, got {0}")]
    InvalidLabelOffset(f64),
    /// A chart layer could not be built.
    #[error(transparent)]
    Plot(#[from] PlotError),
}
