//! # Folio Analytics
//!
//! Deterministic analytics over annual return series.
//!
//! All functions take a slice of annual real returns in percentage points
//! (`10.0` is a +10% year), indexed by year offset:
//!
//! - **Returns**: CAGR, average return, percentile baseline returns
//! - **Withdrawal**: safe and perpetual withdrawal rates, worst rolling window
//! - **Sensitivity**: spread of decade-over-decade CAGR differences
//! - **Drawdowns**: leading drawdown sequences and their scores
//!
//! ## Units
//!
//! | Metric | Unit |
//! |--------|------|
//! | CAGR, average, baselines, sensitivity | percentage points |
//! | SWR, PWR | fraction of starting balance (`0.04` is 4%) |
//! | Deepest drawdown | fraction (`-0.15` is a 15% loss) |
//! | Ulcer score | dimensionless |
//! | Longest drawdown | years |
//!
//! ## Panics
//!
//! Window lengths larger than the series and empty series where a value is
//! required are programmer errors and panic.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod drawdown;
pub mod returns;
pub mod sensitivity;
pub mod withdrawal;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::drawdown::{
        drawdown_scores, drawdowns, leading_drawdown, scores_of, ulcer_score, Drawdown,
        DrawdownScores,
    };
    pub use crate::returns::{
        average_return, baseline_long_term, baseline_return, baseline_short_term, cagr,
        BASELINE_PERCENTILE, LONG_TERM_WINDOW, SHORT_TERM_WINDOW,
    };
    pub use crate::sensitivity::{start_date_sensitivity, SENSITIVITY_WINDOW};
    pub use crate::withdrawal::{min_pwr, min_swr, pwr, swr, RateWindow, RETIREMENT_YEARS};
}

pub use drawdown::{drawdown_scores, drawdowns, Drawdown, DrawdownScores};
pub use returns::{average_return, baseline_long_term, baseline_short_term, cagr};
pub use sensitivity::start_date_sensitivity;
pub use withdrawal::{min_pwr, min_swr, pwr, swr, RateWindow};
