//! # Folio Core
//!
//! Core types and the asset registry for the Folio asset allocation library.
//!
//! This crate provides the foundational building blocks used throughout Folio:
//!
//! - **Types**: [`Percent`], [`Asset`], [`Combination`]
//! - **Registry**: [`AssetRegistry`], a read-only name → asset map with
//!   year-aligned return lookups
//!
//! ## Units
//!
//! Annual returns are stored in percentage points (`10.0` is a +10% year).
//! Allocations and withdrawal rates use [`Percent`], where `1.0` is 100%.
//! Conversions between the two scales are always explicit.
//!
//! ## Example
//!
//! ```rust
//! use folio_core::prelude::*;
//!
//! let stocks = Asset::new("TSM", "VTSMX", 2018, vec![-5.2, 30.8]).unwrap();
//! let bonds = Asset::new("ITT", "VFITX", 2019, vec![6.9]).unwrap();
//! let registry = AssetRegistry::from_assets([stocks, bonds]).unwrap();
//!
//! let aligned = registry.aligned_returns(&["TSM", "ITT"]).unwrap();
//! assert_eq!(aligned[0], &[30.8][..]);
//!
//! let combo = Combination::equal_weight(vec!["TSM".into(), "ITT".into()]).unwrap();
//! assert_eq!(combo.percentages()[0].to_string(), "50%");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod registry;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::registry::AssetRegistry;
    pub use crate::types::{Asset, Combination, Percent, ALLOCATION_TOLERANCE};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use registry::AssetRegistry;
pub use types::{Asset, Combination, Percent, ALLOCATION_TOLERANCE};
