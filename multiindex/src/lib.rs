//! Multi-indices and enumeration rules for polynomial chaos bases.
//!
//! A polynomial chaos expansion orders its basis terms through an
//! *enumeration function*: a bijection from a rank `0, 1, 2, …` to a
//! multi-index holding one polynomial degree per input dimension. Ranks are
//! grouped into *strata* (for the linear rule, one stratum per total degree).
//!
//! # Entry Point
//!
//! ```
//! use uqdemo_multiindex::{EnumerationFunction, LinearEnumerateFunction};
//!
//! let rule = LinearEnumerateFunction::new(2)?;
//! assert_eq!(rule.call(4).as_slice(), &[1, 1]);
//! assert_eq!(rule.strata_cardinal(2), 3);
//! assert_eq!(rule.strata_cumulated_cardinal(2), 6);
//! # Ok::<(), uqdemo_multiindex::EnumerationError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod enumerate;
pub mod error;
pub mod linear;
pub mod model;

pub use enumerate::EnumerationFunction;
pub use error::EnumerationError;
pub use linear::LinearEnumerateFunction;
pub use model::MultiIndex;
