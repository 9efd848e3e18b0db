//! Multi-metric ranking.
//!
//! Each metric is ranked independently: ordinal 1 for the best value, ties
//! sharing the lowest ordinal of their group (competition ranking, so
//! `1, 1, 3`). The ordinal is then remapped to a percentage
//! `r / R · 99 + 1` in `(1, 100]`, where `R` is the largest ordinal
//! assigned. The fused order sorts by `Σ percentage²`, so one poor rank
//! outweighs several middling ones.

use std::cmp::Ordering;

use crate::stat::{Metric, PortfolioStat, Rank};

/// Sets above this size are sorted with rayon when the `parallel` feature
/// is enabled.
pub const PARALLEL_SORT_THRESHOLD: usize = 10_000;

/// Ranks `stats` by one metric, filling `stat.ranks` for that metric.
///
/// The slice order is left unchanged.
pub fn rank_by(stats: &mut [PortfolioStat], metric: Metric) {
    if stats.is_empty() {
        return;
    }

    let mut order: Vec<usize> = (0..stats.len()).collect();
    sort_indices(&mut order, |&a, &b| {
        metric.compare(stats[a].metric(metric), stats[b].metric(metric))
    });

    let mut ordinals = vec![0u32; stats.len()];
    let mut previous: Option<(f64, u32)> = None;
    for (position, &i) in order.iter().enumerate() {
        let value = stats[i].metric(metric);
        let ordinal = match previous {
            Some((v, r)) if v == value => r,
            _ => position as u32 + 1,
        };
        ordinals[i] = ordinal;
        previous = Some((value, ordinal));
    }

    let max = ordinals.iter().copied().max().unwrap_or(1);
    for (stat, ordinal) in stats.iter_mut().zip(ordinals) {
        stat.ranks.set(
            metric,
            Rank {
                ordinal,
                percentage: rank_percentage(ordinal, max),
            },
        );
    }
}

/// Ranks `stats` by each of `metrics`.
pub fn rank_all(stats: &mut [PortfolioStat], metrics: &[Metric]) {
    for &metric in metrics {
        rank_by(stats, metric);
    }
}

/// `ordinal / max · 99 + 1`.
pub fn rank_percentage(ordinal: u32, max: u32) -> f64 {
    assert!(max > 0, "rank_percentage: max ordinal must be positive");
    f64::from(ordinal) / f64::from(max) * 99.0 + 1.0
}

/// `Σ percentage²` over `metrics`. Lower is better.
pub fn fused_score(stat: &PortfolioStat, metrics: &[Metric]) -> f64 {
    metrics
        .iter()
        .map(|&m| {
            let p = stat.rank(m).percentage;
            p * p
        })
        .sum()
}

/// Sorts ranked stats ascending by [`fused_score`]. Stable.
pub fn sort_by_fused(stats: &mut [PortfolioStat], metrics: &[Metric]) {
    let keys: Vec<f64> = stats.iter().map(|s| fused_score(s, metrics)).collect();
    let mut order: Vec<usize> = (0..stats.len()).collect();
    sort_indices(&mut order, |&a, &b| keys[a].total_cmp(&keys[b]));
    permute(stats, &order);
}

/// Ranks by `metrics`, sorts by fused score and keeps the best `n`.
pub fn top_n(
    mut stats: Vec<PortfolioStat>,
    metrics: &[Metric],
    n: usize,
) -> Vec<PortfolioStat> {
    rank_all(&mut stats, metrics);
    sort_by_fused(&mut stats, metrics);
    stats.truncate(n);
    stats
}

fn sort_indices<F>(order: &mut [usize], compare: F)
where
    F: Fn(&usize, &usize) -> Ordering + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::slice::ParallelSliceMut;
        if order.len() > PARALLEL_SORT_THRESHOLD {
            order.par_sort_by(compare);
            return;
        }
    }

    order.sort_by(compare);
}

/// Rearranges `items` so that `items[i]` becomes the old `items[order[i]]`.
fn permute<T>(items: &mut [T], order: &[usize]) {
    let mut visited = vec![false; items.len()];
    for start in 0..items.len() {
        let mut current = start;
        while !visited[current] {
            visited[current] = true;
            let next = order[current];
            if next == start {
                break;
            }
            items.swap(current, next);
            current = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stat::Metrics;
    use approx::assert_relative_eq;
    use folio_core::Combination;

    fn stat(name: &str, avg_return: f64, std_dev: f64) -> PortfolioStat {
        PortfolioStat::new(
            Combination::single(name),
            1970,
            50,
            Metrics {
                avg_return,
                std_dev,
                ..Metrics::default()
            },
        )
    }

    fn ordinals(stats: &[PortfolioStat], metric: Metric) -> Vec<u32> {
        stats.iter().map(|s| s.rank(metric).ordinal).collect()
    }

    #[test]
    fn test_rank_higher_is_better() {
        let mut stats = vec![stat("A", 3.0, 0.0), stat("B", 7.0, 0.0), stat("C", 5.0, 0.0)];
        rank_by(&mut stats, Metric::AvgReturn);
        assert_eq!(ordinals(&stats, Metric::AvgReturn), vec![3, 1, 2]);
        // Input order is preserved.
        assert_eq!(stats[0].combination.assets()[0], "A");
    }

    #[test]
    fn test_rank_lower_is_better() {
        let mut stats = vec![stat("A", 0.0, 9.0), stat("B", 0.0, 4.0), stat("C", 0.0, 6.0)];
        rank_by(&mut stats, Metric::StdDev);
        assert_eq!(ordinals(&stats, Metric::StdDev), vec![3, 1, 2]);
    }

    #[test]
    fn test_ties_share_lowest_ordinal() {
        let mut stats = vec![
            stat("A", 5.0, 0.0),
            stat("B", 7.0, 0.0),
            stat("C", 7.0, 0.0),
            stat("D", 1.0, 0.0),
        ];
        rank_by(&mut stats, Metric::AvgReturn);
        assert_eq!(ordinals(&stats, Metric::AvgReturn), vec![3, 1, 1, 4]);
    }

    #[test]
    fn test_percentages() {
        let mut stats: Vec<PortfolioStat> =
            (0..5_i32).map(|i| stat("X", f64::from(i), 0.0)).collect();
        rank_by(&mut stats, Metric::AvgReturn);
        for s in &stats {
            let p = s.rank(Metric::AvgReturn).percentage;
            assert!(p > 1.0 && p <= 100.0);
        }
        // Lowest average ranks last, at 100.
        assert_relative_eq!(stats[0].rank(Metric::AvgReturn).percentage, 100.0);
        assert_relative_eq!(stats[4].rank(Metric::AvgReturn).percentage, 1.0 / 5.0 * 99.0 + 1.0);
    }

    #[test]
    fn test_single_stat_ranks_at_hundred() {
        let mut stats = vec![stat("A", 1.0, 1.0)];
        rank_all(&mut stats, &Metric::ALL);
        assert!(Metric::ALL
            .iter()
            .all(|&m| stats[0].rank(m) == Rank { ordinal: 1, percentage: 100.0 }));
    }

    #[test]
    fn test_empty_is_noop() {
        let mut stats: Vec<PortfolioStat> = Vec::new();
        rank_all(&mut stats, &Metric::ALL);
        sort_by_fused(&mut stats, &Metric::ALL);
        assert!(stats.is_empty());
    }

    #[test]
    fn test_fused_order_penalises_weakness() {
        // A: best return, worst risk. B: second on both. C: worst return, best risk.
        let mut stats = vec![stat("A", 9.0, 20.0), stat("B", 8.0, 10.0), stat("C", 2.0, 5.0)];
        let metrics = [Metric::AvgReturn, Metric::StdDev];
        rank_all(&mut stats, &metrics);
        sort_by_fused(&mut stats, &metrics);

        let names: Vec<&str> = stats
            .iter()
            .map(|s| s.combination.assets()[0].as_str())
            .collect();
        assert_eq!(names[0], "B");
        for pair in stats.windows(2) {
            assert!(fused_score(&pair[0], &metrics) <= fused_score(&pair[1], &metrics));
        }
    }

    #[test]
    fn test_top_n() {
        let stats: Vec<PortfolioStat> = (0..10_i32)
            .map(|i| stat("X", f64::from(i), 10.0 - f64::from(i) / 2.0))
            .collect();
        let metrics = [Metric::AvgReturn, Metric::StdDev];
        let top = top_n(stats, &metrics, 3);
        assert_eq!(top.len(), 3);
        // Higher average and lower deviation go together, so the best is i = 9.
        assert_relative_eq!(top[0].metrics.avg_return, 9.0);
        assert_eq!(top[0].rank(Metric::AvgReturn).ordinal, 1);
    }

    #[test]
    fn test_permute() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        permute(&mut items, &[2, 0, 3, 1]);
        assert_eq!(items, vec!['c', 'a', 'd', 'b']);
    }
}
