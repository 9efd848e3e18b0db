//! Allocation-ladder enumeration.
//!
//! A ladder is a strictly increasing list of cumulative percentages ending
//! at 100%, e.g. `25%, 50%, 75%, 100%`. Choosing `k` rungs for `k` assets
//! and differencing them yields allocations that sum to 100%.

use folio_core::{Combination, Percent, ALLOCATION_TOLERANCE};

use crate::error::{PortfolioError, PortfolioResult};

/// Converts cumulative percentages into per-asset allocations by
/// subtracting each entry's predecessor. Inverts a prefix sum.
///
/// # Example
///
/// ```rust
/// use folio_core::Percent;
/// use folio_portfolio::combinations::translate_percentages;
///
/// let cumulative: Vec<Percent> = [25.0, 50.0, 75.0, 100.0]
///     .into_iter()
///     .map(Percent::from_points)
///     .collect();
/// assert_eq!(translate_percentages(&cumulative), vec![Percent::new(0.25); 4]);
/// ```
pub fn translate_percentages(cumulative: &[Percent]) -> Vec<Percent> {
    let mut previous = Percent::ZERO;
    cumulative
        .iter()
        .map(|&c| {
            let allocation = c - previous;
            previous = c;
            allocation
        })
        .collect()
}

/// Evenly spaced ladder `step, 2·step, …, 100` given in percentage points.
pub fn percent_ladder(step_points: f64) -> PortfolioResult<Vec<Percent>> {
    if !(step_points > 0.0 && step_points <= 100.0) {
        return Err(PortfolioError::invalid_ladder(format!(
            "step {step_points} outside (0, 100]"
        )));
    }
    let rungs = (100.0 / step_points).round();
    if (rungs * step_points - 100.0).abs() > 1e-9 {
        return Err(PortfolioError::invalid_ladder(format!(
            "step {step_points} does not divide 100"
        )));
    }
    let rungs = rungs as usize;
    Ok((1..=rungs)
        .map(|i| {
            if i == rungs {
                Percent::HUNDRED
            } else {
                Percent::from_points(i as f64 * step_points)
            }
        })
        .collect())
}

/// Every non-empty subset of `assets` paired with every strictly increasing
/// choice of ladder rungs of the same size that ends at the top rung.
///
/// Assets keep their input order within each combination. Allocations are
/// the differences between consecutive chosen rungs, so none is zero.
///
/// For assets `A, B, C` and ladder `33%, 66%, 100%` this yields ten
/// combinations: three singletons at 100%, three pairs at both 33/67 and
/// 66/34, and `A, B, C` at 33/33/34.
pub fn ladder_combinations<S: AsRef<str>>(
    assets: &[S],
    ladder: &[Percent],
) -> PortfolioResult<Vec<Combination>> {
    validate_ladder(ladder)?;

    let mut picks = Vec::new();
    let mut chosen_assets = Vec::with_capacity(ladder.len());
    let mut chosen_rungs = Vec::with_capacity(ladder.len());
    extend(
        assets.len(),
        ladder.len(),
        0,
        0,
        &mut chosen_assets,
        &mut chosen_rungs,
        &mut picks,
    );

    picks
        .into_iter()
        .map(|(asset_idx, rung_idx)| {
            let names = asset_idx
                .iter()
                .map(|&i| assets[i].as_ref().to_string())
                .collect();
            let cumulative: Vec<Percent> = rung_idx.iter().map(|&r| ladder[r]).collect();
            Ok(Combination::new(names, translate_percentages(&cumulative))?)
        })
        .collect()
}

fn validate_ladder(ladder: &[Percent]) -> PortfolioResult<()> {
    let Some(top) = ladder.last() else {
        return Err(PortfolioError::invalid_ladder("empty ladder"));
    };
    if (top.value() - 1.0).abs() > ALLOCATION_TOLERANCE {
        return Err(PortfolioError::invalid_ladder(format!(
            "top rung is {top}, expected 100%"
        )));
    }
    if ladder[0].value() <= 0.0 {
        return Err(PortfolioError::invalid_ladder("rungs must be positive"));
    }
    if ladder.windows(2).any(|w| w[0] >= w[1]) {
        return Err(PortfolioError::invalid_ladder("rungs must strictly increase"));
    }
    Ok(())
}

type Pick = (Vec<usize>, Vec<usize>);

fn extend(
    n_assets: usize,
    n_rungs: usize,
    next_asset: usize,
    next_rung: usize,
    chosen_assets: &mut Vec<usize>,
    chosen_rungs: &mut Vec<usize>,
    out: &mut Vec<Pick>,
) {
    let top = n_rungs - 1;
    for asset in next_asset..n_assets {
        for rung in next_rung..n_rungs {
            chosen_assets.push(asset);
            chosen_rungs.push(rung);
            if rung == top {
                out.push((chosen_assets.clone(), chosen_rungs.clone()));
            } else {
                extend(
                    n_assets,
                    n_rungs,
                    asset + 1,
                    rung + 1,
                    chosen_assets,
                    chosen_rungs,
                    out,
                );
            }
            chosen_assets.pop();
            chosen_rungs.pop();
        }
    }
}
