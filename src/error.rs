//! Error types for the ambient configuration and I/O surface. Contract
//! violations within the numeric/sampling core (a non-square matrix
//! handed to `jacobi_svd`, a dimension mismatch between a vector and a
//! domain box) are programmer errors, not recoverable conditions, and are
//! reported with `debug_assert!`/`assert!` instead — see SPEC_FULL.md §7.

use thiserror::Error;

/// Everything that can go wrong reading configuration or sampler output
/// from the environment or disk.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(String),

    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: String, value: String },

    #[error("invalid dimension: got {got}, {reason}")]
    InvalidDimension { got: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
