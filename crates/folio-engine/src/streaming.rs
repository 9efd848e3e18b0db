//! Streaming `k`-of-`n` sweeps.
//!
//! # Architecture
//!
//! ```text
//!                        ┌──────────┐
//!                   ┌──► │ worker 1 │ ──► channel ──┐
//! ┌──────────┐      │    └──────────┘               │    ┌───────┐
//! │ producer │ ─────┤         ...                   ├──► │ merge │ ──► results
//! └──────────┘      │    ┌──────────┐               │    └───────┘
//!  (batches)        └──► │ worker M │ ──► channel ──┘
//!                        └──────────┘
//! ```
//!
//! The producer enumerates equal-weight subsets in lexicographic order and
//! sends them in fixed-size batches over a bounded channel, so a slow
//! consumer throttles the whole run. Result order is not deterministic.
//!
//! The first failure is recorded and cancels the run; [`SweepHandle::join`]
//! then reports it. Joining or dropping the handle cancels the run, so
//! every thread winds down at its next combination.

use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam::channel::{self, Receiver, Select, Sender};
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use folio_core::{AssetRegistry, Combination};
use folio_portfolio::combinations::{binomial, for_each_subset};
use folio_portfolio::{Evaluator, Metrics, PortfolioStat};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::progress::{Counters, Progress};

/// Consecutive combinations starting at enumeration index `first_index`.
#[derive(Debug)]
struct Batch {
    first_index: u64,
    combinations: Vec<Combination>,
}

impl Batch {
    fn new(first_index: u64, capacity: usize) -> Self {
        Self {
            first_index,
            combinations: Vec::with_capacity(capacity),
        }
    }

    fn len(&self) -> u64 {
        self.combinations.len() as u64
    }
}

/// State shared by every pipeline thread.
#[derive(Debug)]
struct Shared {
    cancelled: AtomicBool,
    first_error: Mutex<Option<EngineError>>,
    counters: Counters,
    progress_interval: u64,
}

impl Shared {
    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Records `error` unless an earlier one is already recorded, then
    /// cancels the run.
    fn fail(&self, error: EngineError) {
        {
            let mut slot = self.first_error.lock();
            if slot.is_none() {
                warn!(error = %error, "Sweep failed");
                *slot = Some(error);
            }
        }
        self.cancel();
    }
}

/// A running sweep.
///
/// Read results through [`iter`](Self::iter) or [`results`](Self::results),
/// then call [`join`](Self::join) to learn whether the run succeeded.
#[derive(Debug)]
pub struct SweepHandle {
    results: Receiver<PortfolioStat>,
    shared: Arc<Shared>,
    threads: Vec<(String, JoinHandle<()>)>,
}

impl SweepHandle {
    /// The merged result channel.
    pub fn results(&self) -> &Receiver<PortfolioStat> {
        &self.results
    }

    /// Blocking iterator over results; ends when every worker is done.
    pub fn iter(&self) -> channel::Iter<'_, PortfolioStat> {
        self.results.iter()
    }

    /// Current counters.
    pub fn progress(&self) -> Progress {
        self.shared.counters.snapshot()
    }

    /// Stops enumeration. Batches already queued are skipped.
    pub fn cancel(&self) {
        self.shared.cancel();
    }

    /// Returns true once the run was cancelled or failed.
    pub fn is_cancelled(&self) -> bool {
        self.shared.is_cancelled()
    }

    /// Cancels whatever is still running, waits for every thread and
    /// reports the first recorded error.
    ///
    /// Results not yet received are discarded, so drain [`iter`](Self::iter)
    /// first to keep them. A run with an error yields only the error, never
    /// partial success.
    pub fn join(mut self) -> EngineResult<Progress> {
        self.shared.cancel();
        // Unblocks the merge stage; ends once every worker has exited.
        while self.results.recv().is_ok() {}

        let mut panicked = None;
        for (name, handle) in std::mem::take(&mut self.threads) {
            if handle.join().is_err() && panicked.is_none() {
                panicked = Some(name);
            }
        }

        if let Some(error) = self.shared.first_error.lock().take() {
            return Err(error);
        }
        if let Some(thread) = panicked {
            return Err(EngineError::ThreadPanicked { thread });
        }

        let progress = self.shared.counters.snapshot();
        info!(
            evaluated = progress.evaluated,
            emitted = progress.emitted,
            "Sweep finished"
        );
        Ok(progress)
    }
}

/// Dropping a handle cancels the run; its threads exit on their own.
impl Drop for SweepHandle {
    fn drop(&mut self) {
        self.shared.cancel();
    }
}

/// Starts a sweep over every `k`-asset equal-weight combination of
/// `universe`.
///
/// With a `reference`, only stats at least as good on every metric are
/// emitted, and candidates are abandoned at their first worse metric.
pub fn evaluate_streaming(
    registry: Arc<AssetRegistry>,
    universe: Vec<String>,
    k: usize,
    reference: Option<Metrics>,
    config: &EngineConfig,
) -> EngineResult<SweepHandle> {
    config.validate()?;
    if k == 0 {
        return Err(EngineError::InvalidSubsetSize(k));
    }

    let workers = config.resolved_workers();
    let total = binomial(universe.len() as u64, k as u64);
    let shared = Arc::new(Shared {
        cancelled: AtomicBool::new(false),
        first_error: Mutex::new(None),
        counters: Counters::new(total),
        progress_interval: config.progress_interval,
    });

    info!(
        assets = universe.len(),
        k,
        total,
        workers,
        filtered = reference.is_some(),
        "Starting streaming sweep"
    );

    let (batch_tx, batch_rx) = channel::bounded::<Batch>(config.channel_capacity);
    let (result_tx, result_rx) = channel::bounded::<PortfolioStat>(config.batch_size);
    let reference = reference.map(Arc::new);
    let mut threads = Vec::with_capacity(workers + 2);

    {
        let shared = Arc::clone(&shared);
        let batch_size = config.batch_size;
        threads.push(spawn("producer", move || {
            produce(&universe, k, batch_size, &batch_tx, &shared);
        })?);
    }

    let mut worker_outputs = Vec::with_capacity(workers);
    for id in 0..workers {
        let (out_tx, out_rx) = channel::bounded::<PortfolioStat>(config.batch_size);
        worker_outputs.push(out_rx);

        let registry = Arc::clone(&registry);
        let batches = batch_rx.clone();
        let reference = reference.clone();
        let shared = Arc::clone(&shared);
        threads.push(spawn(&format!("worker-{id}"), move || {
            work(&registry, &batches, &out_tx, reference.as_deref(), &shared);
        })?);
    }
    drop(batch_rx);

    threads.push(spawn("merge", move || merge(worker_outputs, &result_tx))?);

    Ok(SweepHandle {
        results: result_rx,
        shared,
        threads,
    })
}

/// Runs a sweep to completion and gathers its results, in no particular
/// order.
pub fn evaluate_streaming_collect(
    registry: Arc<AssetRegistry>,
    universe: Vec<String>,
    k: usize,
    reference: Option<Metrics>,
    config: &EngineConfig,
) -> EngineResult<Vec<PortfolioStat>> {
    let handle = evaluate_streaming(registry, universe, k, reference, config)?;
    let stats: Vec<PortfolioStat> = handle.iter().collect();
    handle.join()?;
    Ok(stats)
}

fn spawn<F>(name: &str, f: F) -> EngineResult<(String, JoinHandle<()>)>
where
    F: FnOnce() + Send + 'static,
{
    let handle = thread::Builder::new()
        .name(format!("folio-{name}"))
        .spawn(f)
        .map_err(|source| EngineError::Spawn {
            thread: name.to_string(),
            source,
        })?;
    Ok((name.to_string(), handle))
}

fn produce(universe: &[String], k: usize, batch_size: usize, tx: &Sender<Batch>, shared: &Shared) {
    let names: Vec<&str> = universe.iter().map(String::as_str).collect();
    let mut buf = vec![""; k];
    let mut index = 0u64;
    let mut batch = Batch::new(0, batch_size);

    let flow = for_each_subset(&names, &mut buf, |subset| {
        if shared.is_cancelled() {
            return ControlFlow::Break(());
        }
        let assets = subset.iter().map(|s| (*s).to_string()).collect();
        match Combination::equal_weight(assets) {
            Ok(combination) => batch.combinations.push(combination),
            Err(e) => {
                shared.fail(EngineError::combination(index, e));
                return ControlFlow::Break(());
            }
        }
        index += 1;

        if batch.combinations.len() == batch_size {
            let full = std::mem::replace(&mut batch, Batch::new(index, batch_size));
            shared.counters.add_produced(full.len());
            if tx.send(full).is_err() {
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    });

    if flow.is_continue() && !batch.combinations.is_empty() {
        shared.counters.add_produced(batch.len());
        let _ = tx.send(batch);
    }
    debug!(produced = index, "Producer finished");
}

fn work(
    registry: &AssetRegistry,
    batches: &Receiver<Batch>,
    out: &Sender<PortfolioStat>,
    reference: Option<&Metrics>,
    shared: &Shared,
) {
    let mut evaluator = Evaluator::new(registry);

    for batch in batches {
        for (index, combination) in (batch.first_index..).zip(&batch.combinations) {
            if shared.is_cancelled() {
                return;
            }
            let outcome = match reference {
                Some(reference) => evaluator.evaluate_if_as_good_or_better(combination, reference),
                None => evaluator.evaluate(combination).map(Some),
            };

            let evaluated = shared.counters.add_evaluated();
            if shared.progress_interval > 0 && evaluated % shared.progress_interval == 0 {
                let progress = shared.counters.snapshot();
                debug!(
                    evaluated = progress.evaluated,
                    emitted = progress.emitted,
                    total = progress.total,
                    "Sweep progress"
                );
            }

            match outcome {
                Ok(Some(stat)) => {
                    shared.counters.add_emitted();
                    if out.send(stat).is_err() {
                        return;
                    }
                }
                Ok(None) => {}
                Err(source) => {
                    shared.fail(EngineError::Combination { index, source });
                    return;
                }
            }
        }
    }
}

/// Forwards from every worker channel until all of them disconnect.
fn merge(mut inputs: Vec<Receiver<PortfolioStat>>, output: &Sender<PortfolioStat>) {
    while !inputs.is_empty() {
        let (index, received) = {
            let mut select = Select::new();
            for rx in &inputs {
                select.recv(rx);
            }
            let op = select.select();
            let index = op.index();
            (index, op.recv(&inputs[index]))
        };

        match received {
            Ok(stat) => {
                if output.send(stat).is_err() {
                    return;
                }
            }
            Err(_) => {
                inputs.swap_remove(index);
            }
        }
    }
}
