//! # Folio Ext File
//!
//! File-based asset return datasets for the Folio library.
//!
//! - [`load_registry`]: read a tab-separated dataset from disk
//! - [`parse_registry`]: parse dataset text already in memory
//! - [`bundled_registry`]: the small fixture dataset compiled into this crate
//!
//! The bundled dataset is synthetic. It exists so that tests, benchmarks
//! and the CLI have realistic-looking series to work with.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod dataset;
mod error;

pub use dataset::{bundled_registry, load_registry, parse_registry, LoadOptions, BUNDLED_DATASET};
pub use error::{FileError, FileResult};
