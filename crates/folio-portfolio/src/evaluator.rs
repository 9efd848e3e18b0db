//! Portfolio evaluation.
//!
//! Turns a [`Combination`] into a [`PortfolioStat`]: resolve each asset in
//! the registry, align the return series on their common years, blend them
//! into the annually rebalanced portfolio series, then run the analytics.

use folio_analytics::prelude::*;
use folio_core::{AssetRegistry, Combination, Percent, ALLOCATION_TOLERANCE};
use folio_math::std_dev;

use crate::error::{PortfolioError, PortfolioResult};
use crate::stat::{Metric, Metrics, PortfolioStat};

/// Minimum common history needed to compute every metric.
pub const MIN_YEARS: usize = RETIREMENT_YEARS;

/// Yearly returns of a portfolio rebalanced annually to `percentages`.
///
/// Element `i` is `Σⱼ percentages[j] · series[j][i]`.
///
/// # Example
///
/// ```rust
/// use folio_core::Percent;
/// use folio_portfolio::portfolio_returns;
///
/// let blended = portfolio_returns(
///     &[&[10.0, 20.0], &[5.0, 10.0]],
///     &[Percent::new(0.5), Percent::new(0.5)],
/// )
/// .unwrap();
/// assert_eq!(blended, vec![7.5, 15.0]);
/// ```
pub fn portfolio_returns(series: &[&[f64]], percentages: &[Percent]) -> PortfolioResult<Vec<f64>> {
    let mut out = Vec::new();
    portfolio_returns_into(series, percentages, &mut out)?;
    Ok(out)
}

/// Like [`portfolio_returns`] but reuses `out`'s allocation.
pub fn portfolio_returns_into(
    series: &[&[f64]],
    percentages: &[Percent],
    out: &mut Vec<f64>,
) -> PortfolioResult<()> {
    if series.len() != percentages.len() {
        return Err(PortfolioError::LengthMismatch {
            series: series.len(),
            percentages: percentages.len(),
        });
    }
    let total: Percent = percentages.iter().sum();
    if (total.value() - 1.0).abs() > ALLOCATION_TOLERANCE {
        return Err(PortfolioError::AllocationSum {
            total: total.value(),
        });
    }
    let expected = series[0].len();
    if let Some((index, s)) = series
        .iter()
        .enumerate()
        .find(|(_, s)| s.len() != expected)
    {
        return Err(PortfolioError::SeriesLength {
            index,
            expected,
            actual: s.len(),
        });
    }

    out.clear();
    out.resize(expected, 0.0);
    for (s, p) in series.iter().zip(percentages) {
        let weight = p.value();
        for (acc, r) in out.iter_mut().zip(s.iter()) {
            *acc += weight * r;
        }
    }
    Ok(())
}

/// Reusable evaluation state bound to one registry.
///
/// Holds the aligned-series and portfolio-return buffers so that
/// evaluating many combinations in a loop does not reallocate them. One
/// evaluator per worker thread.
#[derive(Debug)]
pub struct Evaluator<'a> {
    registry: &'a AssetRegistry,
    aligned: Vec<&'a [f64]>,
    returns: Vec<f64>,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator over `registry`.
    pub fn new(registry: &'a AssetRegistry) -> Self {
        Self {
            registry,
            aligned: Vec::new(),
            returns: Vec::new(),
        }
    }

    /// The registry combinations are resolved against.
    pub fn registry(&self) -> &'a AssetRegistry {
        self.registry
    }

    /// Portfolio returns from the most recent evaluation.
    pub fn last_returns(&self) -> &[f64] {
        &self.returns
    }

    /// Computes every metric for `combination`. Ranks are left at zero.
    pub fn evaluate(&mut self, combination: &Combination) -> PortfolioResult<PortfolioStat> {
        let start_year = self.prepare(combination)?;
        let metrics = compute_metrics(&self.returns, None).unwrap_or_default();
        Ok(PortfolioStat::new(
            combination.clone(),
            start_year,
            self.returns.len(),
            metrics,
        ))
    }

    /// Computes metrics one at a time, giving up as soon as one is strictly
    /// worse than in `reference`.
    ///
    /// Returns `Ok(None)` for a rejected combination.
    pub fn evaluate_if_as_good_or_better(
        &mut self,
        combination: &Combination,
        reference: &Metrics,
    ) -> PortfolioResult<Option<PortfolioStat>> {
        let start_year = self.prepare(combination)?;
        Ok(compute_metrics(&self.returns, Some(reference)).map(|metrics| {
            PortfolioStat::new(combination.clone(), start_year, self.returns.len(), metrics)
        }))
    }

    fn prepare(&mut self, combination: &Combination) -> PortfolioResult<i32> {
        let start_year = self
            .registry
            .aligned_returns_into(combination.assets(), &mut self.aligned)?;
        portfolio_returns_into(&self.aligned, combination.percentages(), &mut self.returns)?;
        if self.returns.len() < MIN_YEARS {
            return Err(PortfolioError::InsufficientHistory {
                years: self.returns.len(),
                required: MIN_YEARS,
            });
        }
        Ok(start_year)
    }
}

/// Evaluates a single combination.
pub fn evaluate_portfolio(
    registry: &AssetRegistry,
    combination: &Combination,
) -> PortfolioResult<PortfolioStat> {
    Evaluator::new(registry).evaluate(combination)
}

/// Evaluates `combination`, returning `None` if any metric is strictly
/// worse than `reference`'s.
pub fn evaluate_portfolio_if_as_good_or_better_than(
    registry: &AssetRegistry,
    combination: &Combination,
    reference: &PortfolioStat,
) -> PortfolioResult<Option<PortfolioStat>> {
    Evaluator::new(registry).evaluate_if_as_good_or_better(combination, &reference.metrics)
}

/// Records `value` and reports whether it keeps the candidate alive.
fn admit(metrics: &mut Metrics, reference: Option<&Metrics>, metric: Metric, value: f64) -> bool {
    metrics.set(metric, value);
    reference.map_or(true, |r| !metric.is_worse(value, r.get(metric)))
}

/// Cheapest metrics first so rejected candidates cost as little as possible.
fn compute_metrics(returns: &[f64], reference: Option<&Metrics>) -> Option<Metrics> {
    let mut m = Metrics::default();

    if !admit(&mut m, reference, Metric::AvgReturn, average_return(returns)) {
        return None;
    }
    if !admit(&mut m, reference, Metric::StdDev, std_dev(returns)) {
        return None;
    }
    if !admit(
        &mut m,
        reference,
        Metric::BaselineLTReturn,
        baseline_long_term(returns),
    ) {
        return None;
    }
    if !admit(
        &mut m,
        reference,
        Metric::BaselineSTReturn,
        baseline_short_term(returns),
    ) {
        return None;
    }
    let pwr30 = min_pwr(returns, RETIREMENT_YEARS);
    if !admit(&mut m, reference, Metric::Pwr30, pwr30.rate) {
        return None;
    }
    let swr30 = min_swr(returns, RETIREMENT_YEARS);
    if !admit(&mut m, reference, Metric::Swr30, swr30.rate) {
        return None;
    }

    let scores = drawdown_scores(returns);
    if !admit(&mut m, reference, Metric::UlcerScore, scores.max_ulcer)
        || !admit(&mut m, reference, Metric::DeepestDrawdown, scores.deepest)
        || !admit(
            &mut m,
            reference,
            Metric::LongestDrawdown,
            scores.longest as f64,
        )
    {
        return None;
    }

    if !admit(
        &mut m,
        reference,
        Metric::StartDateSensitivity,
        start_date_sensitivity(returns),
    ) {
        return None;
    }
    Some(m)
}
