//! Growth-rate and percentile return metrics.

use folio_math::{cumulative, mean, sub_slices};

/// Window length for the long-term baseline return.
pub const LONG_TERM_WINDOW: usize = 15;

/// Window length for the short-term baseline return.
pub const SHORT_TERM_WINDOW: usize = 3;

/// Percentile used by both baseline returns.
pub const BASELINE_PERCENTILE: f64 = 15.0;

/// Compound annual growth rate in percentage points.
///
/// `(1 + cagr / 100)^N` equals the cumulative growth of the series.
///
/// # Panics
///
/// Panics if `returns` is empty.
pub fn cagr(returns: &[f64]) -> f64 {
    assert!(!returns.is_empty(), "cagr: empty return series");
    let years = returns.len() as f64;
    (cumulative(returns).powf(1.0 / years) - 1.0) * 100.0
}

/// Arithmetic mean of the annual returns.
///
/// # Panics
///
/// Panics if `returns` is empty.
pub fn average_return(returns: &[f64]) -> f64 {
    mean(returns)
}

/// The `percentile`-th CAGR across every `window`-year sub-period.
///
/// CAGRs of all contiguous windows are sorted ascending and the value at
/// index `⌊count · percentile / 100⌋` is returned.
///
/// # Panics
///
/// Panics if `window` is zero or exceeds the series length, or if
/// `percentile` is outside `[0, 100)`.
pub fn baseline_return(returns: &[f64], window: usize, percentile: f64) -> f64 {
    assert!(
        (0.0..100.0).contains(&percentile),
        "baseline_return: percentile {percentile} outside [0, 100)"
    );
    let mut cagrs: Vec<f64> = sub_slices(returns, window).map(cagr).collect();
    cagrs.sort_by(f64::total_cmp);
    let index = (cagrs.len() as f64 * percentile / 100.0) as usize;
    cagrs[index]
}

/// 15th-percentile CAGR over 15-year windows.
pub fn baseline_long_term(returns: &[f64]) -> f64 {
    baseline_return(returns, LONG_TERM_WINDOW, BASELINE_PERCENTILE)
}

/// 15th-percentile CAGR over 3-year windows.
pub fn baseline_short_term(returns: &[f64]) -> f64 {
    baseline_return(returns, SHORT_TERM_WINDOW, BASELINE_PERCENTILE)
}
