//! Error types for core operations.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building or querying core types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Asset name not present in the registry.
    #[error("asset not found in registry: {name}")]
    UnknownAsset {
        /// The name that was looked up.
        name: String,
    },

    /// The same asset name was supplied twice.
    #[error("duplicate asset name: {name}")]
    DuplicateAsset {
        /// The repeated name.
        name: String,
    },

    /// Asset record failed validation.
    #[error("invalid asset '{name}': {reason}")]
    InvalidAsset {
        /// The asset name (may be empty).
        name: String,
        /// Why the asset was rejected.
        reason: String,
    },

    /// Combination has a different number of assets and percentages.
    #[error("length mismatch: {assets} assets but {percentages} percentages")]
    LengthMismatch {
        /// Number of asset names.
        assets: usize,
        /// Number of percentages.
        percentages: usize,
    },

    /// Allocation percentages do not sum to 100%.
    #[error("percentages must sum to 100%, got {total}")]
    AllocationSum {
        /// The actual sum, as a fraction.
        total: f64,
    },

    /// Combination without any assets.
    #[error("combination must contain at least one asset")]
    EmptyCombination,

    /// Percentage outside `[0, 1]` or not finite.
    #[error("invalid percentage {value} for asset '{name}'")]
    InvalidPercent {
        /// The asset the percentage belongs to.
        name: String,
        /// The offending value.
        value: f64,
    },
}

impl CoreError {
    /// Creates an unknown asset error.
    #[must_use]
    pub fn unknown_asset(name: impl Into<String>) -> Self {
        Self::UnknownAsset { name: name.into() }
    }

    /// Creates a duplicate asset error.
    #[must_use]
    pub fn duplicate_asset(name: impl Into<String>) -> Self {
        Self::DuplicateAsset { name: name.into() }
    }

    /// Creates an invalid asset error.
    #[must_use]
    pub fn invalid_asset(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAsset {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
