//! Queries over evaluated portfolios.

use std::fmt::Write as _;

use crate::stat::{Metric, PortfolioStat, Ranks};

/// First stat matching `predicate`.
pub fn find_one<P>(stats: &[PortfolioStat], predicate: P) -> Option<&PortfolioStat>
where
    P: Fn(&PortfolioStat) -> bool,
{
    stats.iter().find(|s| predicate(s))
}

/// Every stat matching `predicate`, in input order.
pub fn find_many<P>(stats: &[PortfolioStat], predicate: P) -> Vec<&PortfolioStat>
where
    P: Fn(&PortfolioStat) -> bool,
{
    stats.iter().filter(|s| predicate(s)).collect()
}

/// Predicate accepting stats no worse than `reference` on every metric.
pub fn as_good_or_better_than(reference: &PortfolioStat) -> impl Fn(&PortfolioStat) -> bool + '_ {
    move |candidate| candidate.metrics.as_good_or_better_than(&reference.metrics)
}

/// Predicate accepting stats whose combination holds exactly `assets`, in
/// any order.
pub fn has_assets<'a, S: AsRef<str>>(assets: &'a [S]) -> impl Fn(&PortfolioStat) -> bool + 'a {
    move |candidate| {
        let held = candidate.combination.assets();
        held.len() == assets.len()
            && assets
                .iter()
                .all(|a| held.iter().any(|h| h == a.as_ref()))
    }
}

/// Metric-by-metric difference `a − b`, carrying `a`'s combination.
///
/// Ranks are cleared since a delta has no position in any set.
pub fn compare_performance(a: &PortfolioStat, b: &PortfolioStat) -> PortfolioStat {
    PortfolioStat {
        combination: a.combination.clone(),
        start_year: a.start_year,
        years: a.years,
        metrics: a.metrics.delta(&b.metrics),
        ranks: Ranks::default(),
    }
}

/// Deep copy of every stat.
pub fn copy_stats(stats: &[PortfolioStat]) -> Vec<PortfolioStat> {
    stats.to_vec()
}

/// Multi-line diagnostic listing each metric of `a`, `b` and their delta.
pub fn describe_comparison(a: &PortfolioStat, b: &PortfolioStat) -> String {
    let delta = compare_performance(a, b);
    let mut out = format!("{}\nvs {}\n", a.combination, b.combination);
    for m in Metric::ALL {
        let _ = writeln!(
            out,
            "{:<14}{:>12}{:>12}{:>+12.4}",
            m.name(),
            m.format_value(a.metric(m)),
            m.format_value(b.metric(m)),
            delta.metric(m)
        );
    }
    out
}
