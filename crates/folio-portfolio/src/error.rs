//! Error types for portfolio evaluation.
//!
//! This module defines the error types used throughout the portfolio crate.

use folio_core::CoreError;
use thiserror::Error;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur during portfolio operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortfolioError {
    /// Registry lookup or combination validation failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Different number of return series and percentages.
    #[error("length mismatch: {series} return series but {percentages} percentages")]
    LengthMismatch {
        /// Number of return series.
        series: usize,
        /// Number of percentages.
        percentages: usize,
    },

    /// Percentages do not sum to 100%.
    #[error("percentages must sum to 100%, got {total}")]
    AllocationSum {
        /// The actual sum, as a fraction.
        total: f64,
    },

    /// Return series of unequal length.
    #[error("length mismatch: return series {index} has {actual} years, expected {expected}")]
    SeriesLength {
        /// Position of the offending series.
        index: usize,
        /// Length of the first series.
        expected: usize,
        /// Length of the offending series.
        actual: usize,
    },

    /// Common history too short for the rolling metrics.
    #[error("insufficient history: {years} common years, need at least {required}")]
    InsufficientHistory {
        /// Years available.
        years: usize,
        /// Years required.
        required: usize,
    },

    /// Allocation ladder is not strictly increasing up to 100%.
    #[error("invalid allocation ladder: {reason}")]
    InvalidLadder {
        /// What is wrong with the ladder.
        reason: String,
    },
}

impl PortfolioError {
    /// Create an invalid ladder error.
    #[must_use]
    pub fn invalid_ladder(reason: impl Into<String>) -> Self {
        Self::InvalidLadder {
            reason: reason.into(),
        }
    }
}
