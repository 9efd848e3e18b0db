//! Drawdown sequences and scores.
//!
//! A drawdown sequence starting at year `i` is the run of cumulative growth
//! multipliers, measured from the start of year `i`, that stay below 1.0.
//! It ends when a multiplier reaches 1.0 again (recovered) or when the data
//! runs out (unrecovered).
//!
//! [`drawdowns`] peels one leading sequence from every start index, so the
//! sequences overlap and the cost is quadratic in the series length. The
//! scores take the worst value across all of them.

use serde::{Deserialize, Serialize};

use folio_math::growth::growth_factor;

/// Points per unit of lost value in the ulcer score.
const ULCER_SCALE: f64 = 10.0;

/// A run of cumulative multipliers below 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drawdown {
    /// Index of the year the run was measured from.
    pub start: usize,
    /// Cumulative multipliers for consecutive years, all below 1.0.
    pub multipliers: Vec<f64>,
    /// True if a multiplier of at least 1.0 followed before the data ended.
    pub recovered: bool,
}

impl Drawdown {
    /// Length in years.
    pub fn len(&self) -> usize {
        self.multipliers.len()
    }

    /// Returns true if the sequence has no years.
    pub fn is_empty(&self) -> bool {
        self.multipliers.is_empty()
    }

    /// Lowest multiplier minus one; zero for an empty sequence.
    pub fn depth(&self) -> f64 {
        self.multipliers
            .iter()
            .copied()
            .fold(1.0, f64::min)
            - 1.0
    }

    /// Ulcer score of this sequence.
    pub fn ulcer_score(&self) -> f64 {
        ulcer_score(&self.multipliers, self.recovered)
    }
}

/// Severity of a drawdown: `Σ (1 − cᵢ) · 10`, doubled if never recovered.
pub fn ulcer_score(multipliers: &[f64], recovered: bool) -> f64 {
    let score: f64 = multipliers.iter().map(|c| (1.0 - c) * ULCER_SCALE).sum();
    if recovered {
        score
    } else {
        score * 2.0
    }
}

/// Worst-case drawdown figures for a series.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DrawdownScores {
    /// Highest ulcer score of any sequence.
    pub max_ulcer: f64,
    /// Lowest `min(cᵢ) − 1` of any sequence; zero or negative.
    pub deepest: f64,
    /// Longest sequence, in years.
    pub longest: usize,
}

impl DrawdownScores {
    fn absorb(&mut self, ulcer: f64, depth: f64, len: usize) {
        self.max_ulcer = self.max_ulcer.max(ulcer);
        self.deepest = self.deepest.min(depth);
        self.longest = self.longest.max(len);
    }
}

/// The drawdown sequence at the very start of `returns`, if any.
///
/// The `start` of the result is zero.
pub fn leading_drawdown(returns: &[f64]) -> Option<Drawdown> {
    let mut multipliers = Vec::new();
    let mut recovered = false;
    let mut c = 1.0;
    for &r in returns {
        c *= growth_factor(r);
        if c >= 1.0 {
            recovered = true;
            break;
        }
        multipliers.push(c);
    }
    if multipliers.is_empty() {
        return None;
    }
    Some(Drawdown {
        start: 0,
        multipliers,
        recovered,
    })
}

/// Every non-empty leading drawdown, one per start index.
pub fn drawdowns(returns: &[f64]) -> Vec<Drawdown> {
    (0..returns.len())
        .filter_map(|start| {
            leading_drawdown(&returns[start..]).map(|d| Drawdown { start, ..d })
        })
        .collect()
}

/// Scores of a materialised drawdown list.
///
/// All zero when `drawdowns` is empty.
pub fn scores_of(drawdowns: &[Drawdown]) -> DrawdownScores {
    let mut scores = DrawdownScores::default();
    for d in drawdowns {
        scores.absorb(d.ulcer_score(), d.depth(), d.len());
    }
    scores
}

/// Drawdown scores of a series.
///
/// Same result as `scores_of(&drawdowns(returns))`, computed in a single
/// pass per start index without materialising the sequences.
pub fn drawdown_scores(returns: &[f64]) -> DrawdownScores {
    let mut scores = DrawdownScores::default();
    for start in 0..returns.len() {
        let mut c = 1.0;
        let mut ulcer = 0.0;
        let mut lowest = 1.0_f64;
        let mut len = 0;
        let mut recovered = false;
        for &r in &returns[start..] {
            c *= growth_factor(r);
            if c >= 1.0 {
                recovered = true;
                break;
            }
            ulcer += (1.0 - c) * ULCER_SCALE;
            lowest = lowest.min(c);
            len += 1;
        }
        if len == 0 {
            continue;
        }
        if !recovered {
            ulcer *= 2.0;
        }
        scores.absorb(ulcer, lowest - 1.0, len);
    }
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_leading_drawdown_recovered() {
        let d = leading_drawdown(&[-1.0, -1.0, 3.0]).unwrap();
        assert_eq!(d.start, 0);
        assert!(d.recovered);
        assert_eq!(d.len(), 2);
        assert_relative_eq!(d.multipliers[0], 0.99);
        assert_relative_eq!(d.multipliers[1], 0.9801);
    }

    #[test]
    fn test_leading_drawdown_none_when_first_year_gains() {
        assert_eq!(leading_drawdown(&[2.0, -50.0]), None);
        assert_eq!(leading_drawdown(&[0.0, -1.0]), None);
        assert_eq!(leading_drawdown(&[]), None);
    }

    #[test]
    fn test_leading_drawdown_unrecovered() {
        let d = leading_drawdown(&[-10.0, 5.0]).unwrap();
        assert!(!d.recovered);
        assert_eq!(d.len(), 2);
        assert_relative_eq!(d.multipliers[1], 0.945);
    }

    #[test]
    fn test_drawdowns_overlap() {
        let dd = drawdowns(&[-1.0, -1.0, 3.0]);
        assert_eq!(dd.len(), 2);
        assert_eq!(dd[0].start, 0);
        assert_eq!(dd[0].len(), 2);
        assert!(dd[0].recovered);
        assert_eq!(dd[1].start, 1);
        assert_eq!(dd[1].len(), 1);
        assert_relative_eq!(dd[1].multipliers[0], 0.99);
        assert!(dd[1].recovered);
    }

    #[test]
    fn test_ulcer_score_doubles_when_unrecovered() {
        assert_relative_eq!(ulcer_score(&[0.99], true), 0.1, epsilon = 1e-12);
        assert_relative_eq!(ulcer_score(&[0.99], false), 0.2, epsilon = 1e-12);
        let seq = [0.95, 0.9, 0.97];
        assert_relative_eq!(ulcer_score(&seq, false), 2.0 * ulcer_score(&seq, true));
    }

    #[test]
    fn test_scores_small_series() {
        let scores = drawdown_scores(&[-1.0, -1.0, 3.0]);
        assert_relative_eq!(scores.max_ulcer, 0.299, epsilon = 1e-9);
        assert_relative_eq!(scores.deepest, -0.0199, epsilon = 1e-9);
        assert_eq!(scores.longest, 2);
    }

    #[test]
    fn test_scores_without_drawdowns() {
        assert_eq!(drawdown_scores(&[1.0, 2.0, 0.0]), DrawdownScores::default());
        assert_eq!(scores_of(&[]), DrawdownScores::default());
    }

    #[test]
    fn test_single_pass_matches_materialised() {
        let returns = [
            -15.0, 2.0, 10.0, -4.0, -3.0, 1.0, 8.0, -20.0, 5.0, 4.0, 3.0, -1.0,
        ];
        let fast = drawdown_scores(&returns);
        let slow = scores_of(&drawdowns(&returns));
        assert_relative_eq!(fast.max_ulcer, slow.max_ulcer, epsilon = 1e-12);
        assert_relative_eq!(fast.deepest, slow.deepest, epsilon = 1e-12);
        assert_eq!(fast.longest, slow.longest);
    }

    #[test]
    fn test_depth() {
        let d = Drawdown {
            start: 3,
            multipliers: vec![0.9, 0.8, 0.85],
            recovered: false,
        };
        assert_relative_eq!(d.depth(), -0.2, epsilon = 1e-12);
        assert_relative_eq!(d.ulcer_score(), 9.0, epsilon = 1e-12);
    }
}
