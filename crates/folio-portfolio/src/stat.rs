//! Portfolio statistics, metrics and ranks.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use folio_core::{Combination, Percent};

/// Whether larger or smaller metric values are preferable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Larger values rank first.
    HigherIsBetter,
    /// Smaller values rank first.
    LowerIsBetter,
}

/// The metrics computed for every portfolio.
///
/// Each metric carries a fixed [`Direction`], so ranking and filtering
/// logic is shared across all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Metric {
    /// Arithmetic mean annual return, percentage points.
    AvgReturn,
    /// 15th-percentile 15-year CAGR, percentage points.
    BaselineLTReturn,
    /// 15th-percentile 3-year CAGR, percentage points.
    BaselineSTReturn,
    /// Worst 30-year perpetual withdrawal rate, fraction.
    Pwr30,
    /// Worst 30-year safe withdrawal rate, fraction.
    Swr30,
    /// Population standard deviation of annual returns, percentage points.
    StdDev,
    /// Highest ulcer score of any drawdown.
    UlcerScore,
    /// Deepest drawdown as a negative fraction.
    ///
    /// A smaller loss is better, so the raw value ranks higher-is-better.
    DeepestDrawdown,
    /// Longest drawdown, years.
    LongestDrawdown,
    /// Decade-over-decade CAGR spread, percentage points.
    StartDateSensitivity,
}

impl Metric {
    /// Number of metrics.
    pub const COUNT: usize = 10;

    /// Every metric, in display order.
    pub const ALL: [Metric; Metric::COUNT] = [
        Metric::AvgReturn,
        Metric::BaselineLTReturn,
        Metric::BaselineSTReturn,
        Metric::Pwr30,
        Metric::Swr30,
        Metric::StdDev,
        Metric::UlcerScore,
        Metric::DeepestDrawdown,
        Metric::LongestDrawdown,
        Metric::StartDateSensitivity,
    ];

    /// Position in [`Metric::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Preferred direction.
    pub const fn direction(self) -> Direction {
        match self {
            Metric::AvgReturn
            | Metric::BaselineLTReturn
            | Metric::BaselineSTReturn
            | Metric::Pwr30
            | Metric::Swr30
            | Metric::DeepestDrawdown => Direction::HigherIsBetter,
            Metric::StdDev
            | Metric::UlcerScore
            | Metric::LongestDrawdown
            | Metric::StartDateSensitivity => Direction::LowerIsBetter,
        }
    }

    /// Short display name.
    pub const fn name(self) -> &'static str {
        match self {
            Metric::AvgReturn => "AvgReturn",
            Metric::BaselineLTReturn => "BaselineLT",
            Metric::BaselineSTReturn => "BaselineST",
            Metric::Pwr30 => "PWR30",
            Metric::Swr30 => "SWR30",
            Metric::StdDev => "StdDev",
            Metric::UlcerScore => "Ulcer",
            Metric::DeepestDrawdown => "DeepestDD",
            Metric::LongestDrawdown => "LongestDD",
            Metric::StartDateSensitivity => "StartDateSens",
        }
    }

    /// Parses a display name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Orders two values of this metric best-first.
    pub fn compare(self, a: f64, b: f64) -> Ordering {
        match self.direction() {
            Direction::HigherIsBetter => b.total_cmp(&a),
            Direction::LowerIsBetter => a.total_cmp(&b),
        }
    }

    /// Returns true if `candidate` is strictly worse than `reference`.
    pub fn is_worse(self, candidate: f64, reference: f64) -> bool {
        match self.direction() {
            Direction::HigherIsBetter => candidate < reference,
            Direction::LowerIsBetter => candidate > reference,
        }
    }

    /// Renders a value in this metric's unit.
    pub fn format_value(self, value: f64) -> String {
        match self {
            Metric::Pwr30 | Metric::Swr30 | Metric::DeepestDrawdown => {
                format!("{:.3}%", Percent::new(value).as_points())
            }
            Metric::LongestDrawdown => format!("{value:.0}y"),
            _ => format!("{value:.3}"),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Metric values of one portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Metrics {
    /// See [`Metric::AvgReturn`].
    pub avg_return: f64,
    /// See [`Metric::BaselineLTReturn`].
    pub baseline_lt_return: f64,
    /// See [`Metric::BaselineSTReturn`].
    pub baseline_st_return: f64,
    /// See [`Metric::Pwr30`].
    pub pwr30: f64,
    /// See [`Metric::Swr30`].
    pub swr30: f64,
    /// See [`Metric::StdDev`].
    pub std_dev: f64,
    /// See [`Metric::UlcerScore`].
    pub ulcer_score: f64,
    /// See [`Metric::DeepestDrawdown`].
    pub deepest_drawdown: f64,
    /// See [`Metric::LongestDrawdown`].
    pub longest_drawdown: f64,
    /// See [`Metric::StartDateSensitivity`].
    pub start_date_sensitivity: f64,
}

impl Metrics {
    /// Value of one metric.
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::AvgReturn => self.avg_return,
            Metric::BaselineLTReturn => self.baseline_lt_return,
            Metric::BaselineSTReturn => self.baseline_st_return,
            Metric::Pwr30 => self.pwr30,
            Metric::Swr30 => self.swr30,
            Metric::StdDev => self.std_dev,
            Metric::UlcerScore => self.ulcer_score,
            Metric::DeepestDrawdown => self.deepest_drawdown,
            Metric::LongestDrawdown => self.longest_drawdown,
            Metric::StartDateSensitivity => self.start_date_sensitivity,
        }
    }

    /// Mutable access to one metric.
    pub fn get_mut(&mut self, metric: Metric) -> &mut f64 {
        match metric {
            Metric::AvgReturn => &mut self.avg_return,
            Metric::BaselineLTReturn => &mut self.baseline_lt_return,
            Metric::BaselineSTReturn => &mut self.baseline_st_return,
            Metric::Pwr30 => &mut self.pwr30,
            Metric::Swr30 => &mut self.swr30,
            Metric::StdDev => &mut self.std_dev,
            Metric::UlcerScore => &mut self.ulcer_score,
            Metric::DeepestDrawdown => &mut self.deepest_drawdown,
            Metric::LongestDrawdown => &mut self.longest_drawdown,
            Metric::StartDateSensitivity => &mut self.start_date_sensitivity,
        }
    }

    /// Sets one metric.
    pub fn set(&mut self, metric: Metric, value: f64) {
        *self.get_mut(metric) = value;
    }

    /// Returns true if no metric is strictly worse than in `reference`.
    pub fn as_good_or_better_than(&self, reference: &Metrics) -> bool {
        Metric::ALL
            .iter()
            .all(|&m| !m.is_worse(self.get(m), reference.get(m)))
    }

    /// Element-wise `self − other`.
    pub fn delta(&self, other: &Metrics) -> Metrics {
        let mut out = Metrics::default();
        for m in Metric::ALL {
            out.set(m, self.get(m) - other.get(m));
        }
        out
    }
}

/// Position of a portfolio within a ranked set for one metric.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rank {
    /// 1 for the best value; ties share the lowest ordinal.
    pub ordinal: u32,
    /// `ordinal / max_ordinal · 99 + 1`, in `(1, 100]`. Zero until ranked.
    pub percentage: f64,
}

/// Ranks for every metric, indexed by [`Metric`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Ranks([Rank; Metric::COUNT]);

impl Ranks {
    /// Rank for one metric.
    pub fn get(&self, metric: Metric) -> Rank {
        self.0[metric.index()]
    }

    /// Sets the rank for one metric.
    pub fn set(&mut self, metric: Metric, rank: Rank) {
        self.0[metric.index()] = rank;
    }

    /// Returns true once any metric has been ranked.
    pub fn is_ranked(&self) -> bool {
        self.0.iter().any(|r| r.ordinal > 0)
    }
}

/// A combination together with its metrics and ranks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioStat {
    /// Assets and allocations.
    pub combination: Combination,
    /// First year of the common history the metrics cover.
    pub start_year: i32,
    /// Number of years of common history.
    pub years: usize,
    /// Computed metrics.
    pub metrics: Metrics,
    /// Ranks, populated by a ranking pass.
    pub ranks: Ranks,
}

impl PortfolioStat {
    /// Creates an unranked stat.
    pub fn new(combination: Combination, start_year: i32, years: usize, metrics: Metrics) -> Self {
        Self {
            combination,
            start_year,
            years,
            metrics,
            ranks: Ranks::default(),
        }
    }

    /// Value of one metric.
    pub fn metric(&self, metric: Metric) -> f64 {
        self.metrics.get(metric)
    }

    /// Rank for one metric.
    pub fn rank(&self, metric: Metric) -> Rank {
        self.ranks.get(metric)
    }
}

/// One line: allocations, then every metric with its ordinal rank.
impl fmt::Display for PortfolioStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.combination)?;
        for m in Metric::ALL {
            write!(
                f,
                " | {} {} ({})",
                m.name(),
                m.format_value(self.metric(m)),
                self.rank(m).ordinal
            )?;
        }
        Ok(())
    }
}
