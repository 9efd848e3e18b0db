//! Property-based tests for return analytics.
//!
//! - CAGR compounds back to cumulative growth
//! - Drawdown recovery flag matches the multipliers seen after the run
//! - Single-pass drawdown scores equal the materialised ones
//! - Withdrawal rates are ordered: PWR never exceeds SWR for gaining series

use folio_analytics::prelude::*;
use folio_math::{cumulative, growth::growth_factor};
use proptest::prelude::*;

fn returns(min_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-40.0f64..60.0, min_len..48)
}

proptest! {
    #[test]
    fn cagr_compounds_to_cumulative(rs in returns(1)) {
        let g = cagr(&rs);
        let rebuilt = (1.0 + g / 100.0).powi(rs.len() as i32);
        let expected = cumulative(&rs);
        prop_assert!((rebuilt - expected).abs() <= expected * 1e-9);
    }

    #[test]
    fn recovery_flag_matches_tail(rs in returns(1)) {
        for d in drawdowns(&rs) {
            let end = d.start + d.len();
            let c_before: f64 = rs[d.start..end].iter().map(|&r| growth_factor(r)).product();
            match rs.get(end) {
                Some(&next) => {
                    prop_assert!(d.recovered);
                    prop_assert!(c_before * growth_factor(next) >= 1.0);
                }
                None => prop_assert!(!d.recovered),
            }
            prop_assert!(d.multipliers.iter().all(|&c| c < 1.0));
        }
    }

    #[test]
    fn single_pass_scores_match(rs in returns(0)) {
        let fast = drawdown_scores(&rs);
        let slow = scores_of(&drawdowns(&rs));
        prop_assert!((fast.max_ulcer - slow.max_ulcer).abs() <= 1e-9);
        prop_assert!((fast.deepest - slow.deepest).abs() <= 1e-12);
        prop_assert_eq!(fast.longest, slow.longest);
        prop_assert!(fast.deepest <= 0.0);
    }

    #[test]
    fn ulcer_doubles_without_recovery(seq in prop::collection::vec(0.01f64..0.999, 1..20)) {
        let recovered = ulcer_score(&seq, true);
        prop_assert!((ulcer_score(&seq, false) - 2.0 * recovered).abs() <= 1e-12 * recovered.max(1.0));
    }

    #[test]
    fn pwr_below_swr_for_gaining_series(rs in prop::collection::vec(0.5f64..30.0, 1..40)) {
        prop_assert!(pwr(&rs) <= swr(&rs));
        prop_assert!(pwr(&rs) > 0.0);
    }
}
