//! Progress counters shared by pipeline threads.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Point-in-time view of a sweep's progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Progress {
    /// Candidates the run will enumerate, `C(n, k)`.
    pub total: u64,
    /// Candidates handed to workers so far.
    pub produced: u64,
    /// Candidates evaluated so far.
    pub evaluated: u64,
    /// Stats sent downstream so far.
    pub emitted: u64,
}

impl Progress {
    /// Evaluated share of the total, in `[0, 1]`. An empty run is complete.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.evaluated as f64 / self.total as f64
        }
    }

    /// Candidates rejected by the reference filter so far.
    pub fn rejected(&self) -> u64 {
        self.evaluated.saturating_sub(self.emitted)
    }
}

/// Atomic counters behind [`Progress`].
#[derive(Debug, Default)]
pub(crate) struct Counters {
    total: u64,
    produced: AtomicU64,
    evaluated: AtomicU64,
    emitted: AtomicU64,
}

impl Counters {
    pub(crate) fn new(total: u64) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub(crate) fn add_produced(&self, n: u64) {
        self.produced.fetch_add(n, Ordering::Relaxed);
    }

    /// Returns the new evaluated count.
    pub(crate) fn add_evaluated(&self) -> u64 {
        self.evaluated.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub(crate) fn add_emitted(&self) {
        self.emitted.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> Progress {
        Progress {
            total: self.total,
            produced: self.produced.load(Ordering::Relaxed),
            evaluated: self.evaluated.load(Ordering::Relaxed),
            emitted: self.emitted.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let counters = Counters::new(10);
        counters.add_produced(4);
        assert_eq!(counters.add_evaluated(), 1);
        assert_eq!(counters.add_evaluated(), 2);
        counters.add_emitted();

        let progress = counters.snapshot();
        assert_eq!(
            progress,
            Progress {
                total: 10,
                produced: 4,
                evaluated: 2,
                emitted: 1
            }
        );
        assert!((progress.fraction() - 0.2).abs() < 1e-12);
        assert_eq!(progress.rejected(), 1);
    }

    #[test]
    fn test_empty_run_is_complete() {
        assert_eq!(Progress::default().fraction(), 1.0);
    }
}
