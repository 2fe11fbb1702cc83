//! Shared setup for the uqdemo binaries.
//!
//! # Entry Point
//!
//! ```
//! use uqdemo_clients::{env_filter, rank_listing};
//! use uqdemo_multiindex::LinearEnumerateFunction;
//!
//! assert_eq!(env_filter(None).to_string(), "info");
//!
//! let rule = LinearEnumerateFunction::new(2)?;
//! let listing = rank_listing(&rule, 3);
//! assert_eq!(listing[2]["multi_index"], serde_json::json!([0, 1]));
//! # Ok::<(), uqdemo_multiindex::EnumerationError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;
use uqdemo_multiindex::EnumerationFunction;

/// Filter used when `RUST_LOG` is unset, empty or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Builds the log filter from `RUST_LOG`-style directives.
#[must_use]
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs the stderr subscriber, honouring `RUST_LOG`.
pub fn init_tracing() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}

/// Ranks `0..count` with their multi-index and total degree, as a JSON
/// array.
#[must_use]
pub fn rank_listing<E: EnumerationFunction>(rule: &E, count: usize) -> Value {
    Value::Array(
        (0..count)
            .map(|rank| {
                let m = rule.call(rank);
                json!({
                    "rank": rank,
                    "degree": m.total_degree(),
                    "multi_index": m
                })
            })
            .collect(),
    )
}
