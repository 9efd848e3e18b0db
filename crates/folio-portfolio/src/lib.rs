//! # Folio Portfolio
//!
//! Combination enumeration, portfolio evaluation and multi-metric ranking.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: the registry is passed explicitly, nothing is cached
//! - **Fixed metric table**: [`Metric`] carries name and direction, so rank
//!   and filter logic is shared across every metric
//! - **Reusable buffers**: [`Evaluator`] keeps its scratch vectors between
//!   calls for tight sweep loops
//!
//! ## Quick Start
//!
//! ```rust
//! use folio_core::prelude::*;
//! use folio_portfolio::prelude::*;
//!
//! let years = 35;
//! let stocks: Vec<f64> = (0..years).map(|i| if i % 4 == 0 { -8.0 } else { 12.0 }).collect();
//! let bonds = vec![3.0; years];
//! let registry = AssetRegistry::from_assets([
//!     Asset::new("STK", "STK", 1985, stocks).unwrap(),
//!     Asset::new("BND", "BND", 1985, bonds).unwrap(),
//! ])
//! .unwrap();
//!
//! let combos = ladder_combinations(&["STK", "BND"], &percent_ladder(25.0).unwrap()).unwrap();
//! let stats: Vec<PortfolioStat> = combos
//!     .iter()
//!     .map(|c| evaluate_portfolio(&registry, c))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! let best = top_n(stats, &Metric::ALL, 3);
//! assert_eq!(best.len(), 3);
//! ```
//!
//! ## Module Overview
//!
//! - [`combinations`] - Allocation ladders, `k`-of-`n` subsets, binomial counts
//! - [`evaluator`] - Portfolio returns and metric evaluation
//! - [`ranking`] - Ordinal and percentage ranks, fused ordering
//! - [`query`] - Predicates and lookups over evaluated stats
//! - [`stat`] - [`PortfolioStat`], [`Metrics`], [`Metric`]
//!
//! ## Feature Flags
//!
//! - `parallel`: sort large result sets with rayon

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]

pub mod combinations;
pub mod error;
pub mod evaluator;
pub mod query;
pub mod ranking;
pub mod stat;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::combinations::{
        binomial, for_each_subset, ladder_combinations, percent_ladder, translate_percentages,
    };
    pub use crate::error::{PortfolioError, PortfolioResult};
    pub use crate::evaluator::{
        evaluate_portfolio, evaluate_portfolio_if_as_good_or_better_than, portfolio_returns,
        Evaluator,
    };
    pub use crate::query::{as_good_or_better_than, find_many, find_one, has_assets};
    pub use crate::ranking::{rank_all, rank_by, sort_by_fused, top_n};
    pub use crate::stat::{Direction, Metric, Metrics, PortfolioStat, Rank, Ranks};
}

// Re-export error types at crate root
pub use error::{PortfolioError, PortfolioResult};

// Re-export main types
pub use stat::{Direction, Metric, Metrics, PortfolioStat, Rank, Ranks};

pub use evaluator::{
    evaluate_portfolio, evaluate_portfolio_if_as_good_or_better_than, portfolio_returns,
    portfolio_returns_into, Evaluator, MIN_YEARS,
};

pub use ranking::{fused_score, rank_all, rank_by, rank_percentage, sort_by_fused, top_n};

pub use query::{
    as_good_or_better_than, compare_performance, copy_stats, describe_comparison, find_many,
    find_one, has_assets,
};
