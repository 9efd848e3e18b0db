//! Safe and perpetual withdrawal rates.
//!
//! Withdrawals are taken at the start of each of the `N` years of a series
//! and once more at its end, so the balance multipliers seen at each
//! withdrawal are `1.0, C_1, …, C_N`, and
//!
//! ```text
//! SWR = harmonic_mean(1.0, C_1, …, C_N) / (N + 1)
//! PWR = SWR · (1 − 1 / C_N)
//! ```
//!
//! SWR exhausts the balance exactly with the final withdrawal; PWR leaves
//! the balance after it equal to the starting one.

use serde::{Deserialize, Serialize};

use folio_math::{cumulative, growth::cumulative_list_into, harmonic_mean, sub_slices};

/// Retirement horizon used for the rolling withdrawal metrics.
pub const RETIREMENT_YEARS: usize = 30;

/// Worst withdrawal rate over rolling windows.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RateWindow {
    /// The lowest rate found, as a fraction of starting balance.
    pub rate: f64,
    /// Index of the first year of the window that produced it.
    pub start_index: usize,
}

/// Safe withdrawal rate of a series, as a fraction of starting balance.
///
/// # Panics
///
/// Panics if `returns` is empty or the balance multiplier reaches zero.
pub fn swr(returns: &[f64]) -> f64 {
    let mut balances = Vec::with_capacity(returns.len() + 1);
    swr_with(returns, &mut balances)
}

/// Perpetual withdrawal rate of a series, as a fraction of starting balance.
///
/// Negative when the series loses money overall.
pub fn pwr(returns: &[f64]) -> f64 {
    let mut balances = Vec::with_capacity(returns.len() + 1);
    pwr_with(returns, &mut balances)
}

/// Lowest SWR over every `years`-long window.
///
/// Returns a zero [`RateWindow`] when `years` is zero.
///
/// # Panics
///
/// Panics if `years` exceeds the series length.
pub fn min_swr(returns: &[f64], years: usize) -> RateWindow {
    min_rate(returns, years, swr_with)
}

/// Lowest PWR over every `years`-long window.
///
/// Returns a zero [`RateWindow`] when `years` is zero.
///
/// # Panics
///
/// Panics if `years` exceeds the series length.
pub fn min_pwr(returns: &[f64], years: usize) -> RateWindow {
    min_rate(returns, years, pwr_with)
}

fn min_rate(returns: &[f64], years: usize, rate: fn(&[f64], &mut Vec<f64>) -> f64) -> RateWindow {
    if years == 0 {
        return RateWindow::default();
    }
    let mut balances = Vec::with_capacity(years + 1);
    let mut worst: Option<RateWindow> = None;
    for (start_index, window) in sub_slices(returns, years).enumerate() {
        let r = rate(window, &mut balances);
        if worst.map_or(true, |w| r < w.rate) {
            worst = Some(RateWindow {
                rate: r,
                start_index,
            });
        }
    }
    worst.unwrap_or_default()
}

/// Balance multipliers at each withdrawal: `1.0, C_1, …, C_N`.
fn withdrawal_balances(returns: &[f64], out: &mut Vec<f64>) {
    cumulative_list_into(returns, out);
    out.insert(0, 1.0);
}

fn swr_with(returns: &[f64], balances: &mut Vec<f64>) -> f64 {
    assert!(!returns.is_empty(), "swr: empty return series");
    withdrawal_balances(returns, balances);
    harmonic_mean(balances) / balances.len() as f64
}

fn pwr_with(returns: &[f64], balances: &mut Vec<f64>) -> f64 {
    swr_with(returns, balances) * (1.0 - 1.0 / cumulative(returns))
}
