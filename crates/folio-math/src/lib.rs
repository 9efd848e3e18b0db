//! # Folio Math
//!
//! Numeric primitives for the Folio asset allocation library.
//!
//! This crate provides:
//!
//! - **Statistics**: sum, product, mean, population standard deviation, harmonic mean
//! - **Growth**: cumulative growth multipliers from percentage-point returns
//! - **Windows**: every contiguous sub-slice of a fixed length
//!
//! ## Design Philosophy
//!
//! - **Allocation Free**: Hot-path variants write into caller-owned buffers
//! - **Fail Fast**: Precondition violations (empty input, non-positive values,
//!   oversized windows) panic with a descriptive message. They indicate bugs,
//!   not bad data.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]

pub mod growth;
pub mod stats;
pub mod windows;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::growth::{cumulative, cumulative_list, cumulative_list_into, growth_factor};
    pub use crate::stats::{harmonic_mean, mean, product, std_dev, sum};
    pub use crate::windows::sub_slices;
}

pub use growth::{cumulative, cumulative_list, cumulative_list_into};
pub use stats::{harmonic_mean, mean, product, std_dev, sum};
pub use windows::sub_slices;
