//! Start-date sensitivity.

use folio_math::sub_slices;

use crate::returns::cagr;

/// Length of the windows compared decade against decade.
pub const SENSITIVITY_WINDOW: usize = 20;

/// How strongly outcomes depend on the year an investor started.
///
/// Every 20-year window is split into two decades and the difference
/// `CAGR(second) − CAGR(first)` is taken. The result is the best positive
/// difference minus the worst negative difference, in percentage points,
/// so it is never negative. Lower is better.
///
/// Series shorter than 20 years have no window and score zero.
pub fn start_date_sensitivity(returns: &[f64]) -> f64 {
    if returns.len() < SENSITIVITY_WINDOW {
        return 0.0;
    }
    let half = SENSITIVITY_WINDOW / 2;
    let mut worst_shortfall = 0.0_f64;
    let mut best_improvement = 0.0_f64;
    for window in sub_slices(returns, SENSITIVITY_WINDOW) {
        let (first, second) = window.split_at(half);
        let diff = cagr(second) - cagr(first);
        worst_shortfall = worst_shortfall.min(diff);
        best_improvement = best_improvement.max(diff);
    }
    best_improvement - worst_shortfall
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_constant_series_is_insensitive() {
        assert_abs_diff_eq!(start_date_sensitivity(&[6.0; 35]), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_short_series_scores_zero() {
        assert_eq!(start_date_sensitivity(&[1.0; 19]), 0.0);
    }

    #[test]
    fn test_single_window() {
        // First decade flat, second decade +10% a year.
        let mut returns = vec![0.0; 10];
        returns.extend([10.0; 10]);
        assert_relative_eq!(start_date_sensitivity(&returns), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_spans_shortfall_and_improvement() {
        // Windows starting at 0 see +5 then 0 (shortfall of 5); the window
        // starting at 10 sees 0 then +5 (improvement of 5).
        let mut returns = vec![5.0; 10];
        returns.extend([0.0; 10]);
        returns.extend([5.0; 10]);
        assert_relative_eq!(start_date_sensitivity(&returns), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_never_negative() {
        let returns: Vec<f64> = (0..40_i32).map(|i| f64::from((i * 7) % 11) - 4.0).collect();
        assert!(start_date_sensitivity(&returns) >= 0.0);
    }
}
