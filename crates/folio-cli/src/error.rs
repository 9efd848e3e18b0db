//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A metric name that does not exist.
    #[error("Unknown metric: {0}. Use one of: {1}")]
    UnknownMetric(String, String),

    /// Different number of assets and weights.
    #[error("{assets} assets but {weights} weights")]
    WeightCount {
        /// Number of assets.
        assets: usize,
        /// Number of weights.
        weights: usize,
    },

    /// Missing required argument.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
