//! Errors raised while constructing enumeration rules.

use thiserror::Error;

/// Error type for invalid enumeration rule parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumerationError {
    /// An enumeration rule needs at least one input dimension.
    #[error("enumeration dimension must be at least 1")]
    ZeroDimension,
}
