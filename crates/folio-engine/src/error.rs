//! Engine error types.

use std::path::PathBuf;

use folio_portfolio::PortfolioError;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Engine error type.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Evaluating one combination failed.
    #[error("combination #{index}: {source}")]
    Combination {
        /// Position of the combination in enumeration or input order.
        index: u64,
        /// What went wrong.
        #[source]
        source: PortfolioError,
    },

    /// Invalid configuration value.
    #[error("configuration error: {0}")]
    Config(String),

    /// Configuration file could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigIo {
        /// Path that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML.
    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Subset size outside `1..`.
    #[error("subset size must be at least 1, got {0}")]
    InvalidSubsetSize(usize),

    /// A pipeline thread could not be started.
    #[error("failed to spawn {thread} thread: {source}")]
    Spawn {
        /// Which stage.
        thread: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A pipeline thread panicked.
    #[error("{thread} thread panicked")]
    ThreadPanicked {
        /// Which stage.
        thread: String,
    },
}

impl EngineError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Wrap a portfolio error with the index of the offending combination.
    pub fn combination(index: u64, source: impl Into<PortfolioError>) -> Self {
        Self::Combination {
            index,
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::CoreError;

    #[test]
    fn test_combination_error_message() {
        let err = EngineError::combination(17, CoreError::unknown_asset("XYZ"));
        assert_eq!(
            err.to_string(),
            "combination #17: asset not found in registry: XYZ"
        );
    }

    #[test]
    fn test_config_error_message() {
        let err = EngineError::config("batch_size must be positive");
        assert_eq!(
            err.to_string(),
            "configuration error: batch_size must be positive"
        );
    }
}
