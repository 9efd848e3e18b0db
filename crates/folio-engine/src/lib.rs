//! # Folio Engine
//!
//! Parallel sweeps over asset combinations.
//!
//! This crate provides:
//! - [`evaluate_streaming`]: producer, worker pool and merge stage connected
//!   by bounded channels, for `k`-of-`n` sweeps too large to materialise
//! - [`evaluate_batch`]: order-preserving evaluation of a materialised slice
//! - [`EngineConfig`]: worker count, batch size and channel depth, loadable
//!   from TOML
//! - [`Progress`]: live counters for long runs
//!
//! ## Architecture
//!
//! ```text
//! AssetRegistry (shared, read-only)
//!       │
//!       ├─> producer ─> [batches] ─> workers ─> [stats] ─> merge ─> results
//!       │
//!       └─> evaluate_batch ─> segments ─> scoped threads ─> Vec<PortfolioStat>
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use folio_engine::{evaluate_streaming, EngineConfig};
//! use folio_ext_file::bundled_registry;
//!
//! let registry = Arc::new(bundled_registry()?);
//! let universe = registry.names().to_vec();
//! let handle = evaluate_streaming(registry, universe, 3, None, &EngineConfig::default())?;
//! for stat in handle.iter() {
//!     println!("{stat}");
//! }
//! handle.join()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod batch;
pub mod config;
pub mod error;
pub mod progress;
pub mod segments;
pub mod streaming;

// Re-exports
pub use batch::evaluate_batch;
pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use progress::Progress;
pub use segments::{segment_indexes, segment_ranges};
pub use streaming::{evaluate_streaming, evaluate_streaming_collect, SweepHandle};
