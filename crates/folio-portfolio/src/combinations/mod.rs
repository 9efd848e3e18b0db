//! Combination enumeration.
//!
//! Two enumerators serve different scales:
//!
//! - [`ladder_combinations`]: every non-empty asset subset paired with every
//!   allocation drawn from a ladder of cumulative percentages. Arbitrary
//!   unequal weights, materialised eagerly; suited to small asset lists.
//! - [`for_each_subset`]: every `k`-of-`n` subset in lexicographic order,
//!   written into a caller-owned buffer with no per-subset allocation.
//!   Suited to large `n` with fixed equal weights.
//!
//! [`binomial`] sizes a `k`-of-`n` run for progress reporting.

mod binomial;
mod ladder;
mod subsets;

pub use binomial::binomial;
pub use ladder::{ladder_combinations, percent_ladder, translate_percentages};
pub use subsets::for_each_subset;
