//! Order-preserving batch evaluation.

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use tracing::{info, warn};

use folio_core::{AssetRegistry, Combination};
use folio_portfolio::{Evaluator, PortfolioStat};

use crate::error::{EngineError, EngineResult};
use crate::segments::segment_ranges;

/// Evaluates `combinations` in up to `workers` segments on the rayon pool.
///
/// The input is split into contiguous segments, one task each, and each
/// result lands at its input position, so the output order matches the
/// input order. If any evaluation fails the first recorded error is
/// returned and every result is discarded.
pub fn evaluate_batch(
    registry: &AssetRegistry,
    combinations: &[Combination],
    workers: usize,
) -> EngineResult<Vec<PortfolioStat>> {
    if workers == 0 {
        return Err(EngineError::config("workers must be at least 1"));
    }
    if combinations.is_empty() {
        return Ok(Vec::new());
    }

    let segments = workers.min(combinations.len());
    info!(
        combinations = combinations.len(),
        workers = segments,
        "Starting batch evaluation"
    );

    let first_error: Mutex<Option<EngineError>> = Mutex::new(None);
    let failed = AtomicBool::new(false);
    let mut output: Vec<Option<PortfolioStat>> = vec![None; combinations.len()];

    rayon::scope(|scope| {
        let mut rest = output.as_mut_slice();
        for (start, end) in segment_ranges(combinations.len(), segments) {
            let (chunk, tail) = std::mem::take(&mut rest).split_at_mut(end - start);
            rest = tail;
            let input = &combinations[start..end];
            let first_error = &first_error;
            let failed = &failed;

            scope.spawn(move |_| {
                let mut evaluator = Evaluator::new(registry);
                for (index, (combination, slot)) in
                    (start as u64..).zip(input.iter().zip(chunk.iter_mut()))
                {
                    if failed.load(Ordering::Relaxed) {
                        return;
                    }
                    match evaluator.evaluate(combination) {
                        Ok(stat) => *slot = Some(stat),
                        Err(source) => {
                            {
                                let mut recorded = first_error.lock();
                                if recorded.is_none() {
                                    *recorded = Some(EngineError::Combination { index, source });
                                }
                            }
                            failed.store(true, Ordering::Relaxed);
                            return;
                        }
                    }
                }
            });
        }
    });

    if let Some(error) = first_error.into_inner() {
        warn!(error = %error, "Batch evaluation failed");
        return Err(error);
    }
    Ok(output.into_iter().flatten().collect())
}
