//! Error type shared by the traversals and the harness.

use thiserror::Error;

/// Errors raised while building or comparing Euler trails.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested vertex count is outside the configured range.
    #[error("vertex count {n} is outside the accepted range {min}..={max}")]
    InvalidInput {
        /// Requested vertex count.
        n: usize,
        /// Smallest accepted vertex count.
        min: usize,
        /// Largest accepted vertex count.
        max: usize,
    },

    /// The harness configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The recursive traversal would have gone deeper than its ceiling.
    #[error("recursion depth exceeded the configured ceiling of {limit}")]
    RecursionLimitExceeded {
        /// The ceiling that was hit.
        limit: usize,
    },

    /// A configuration file could not be read, or the worker thread could not start.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A configuration file is not valid JSON for [`HarnessConfig`](crate::HarnessConfig).
    #[error("malformed configuration: {0}")]
    ConfigFormat(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
