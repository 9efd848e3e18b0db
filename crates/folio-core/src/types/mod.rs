//! Domain types for allocation analytics.
//!
//! - [`Percent`]: fraction where `1.0` is 100%
//! - [`Asset`]: named annual return series with its year span
//! - [`Combination`]: assets paired with allocations summing to 100%

mod asset;
mod combination;
mod percent;

pub use asset::Asset;
pub use combination::{Combination, ALLOCATION_TOLERANCE};
pub use percent::Percent;
