//! Sweep command implementation.
//!
//! Streams every k-asset equal-weight portfolio through the engine, then
//! ranks what survives and prints the best.

use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use tracing::info;

use folio_core::Combination;
use folio_engine::evaluate_streaming;
use folio_portfolio::{evaluate_portfolio, top_n, PortfolioStat};

use crate::cli::OutputFormat;
use crate::commands::{parse_metrics, DataArgs, EngineArgs};
use crate::output::{print_header, print_output, print_warning, StatRow};

/// Arguments for the sweep command.
#[derive(Args, Debug)]
pub struct SweepArgs {
    /// Assets per portfolio
    #[arg(short, long, default_value_t = 3)]
    pub k: usize,

    /// Keep only portfolios at least as good as this equal-weight baseline on every metric
    #[arg(short, long, value_delimiter = ',')]
    pub baseline: Vec<String>,

    /// Assets to combine. Defaults to every asset in the dataset.
    #[arg(short, long, value_delimiter = ',')]
    pub universe: Vec<String>,

    /// Metrics used for ranking. Defaults to all of them.
    #[arg(short, long, value_delimiter = ',')]
    pub metrics: Vec<String>,

    /// Number of portfolios to print
    #[arg(short, long, default_value_t = 20)]
    pub top: usize,

    #[command(flatten)]
    pub data: DataArgs,

    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Execute the sweep command.
pub fn execute(args: SweepArgs, format: OutputFormat) -> Result<()> {
    let metrics = parse_metrics(&args.metrics)?;
    let config = args.engine.resolve()?;
    let registry = Arc::new(args.data.load()?);

    let universe = if args.universe.is_empty() {
        registry.names().to_vec()
    } else {
        args.universe
    };

    let reference = if args.baseline.is_empty() {
        None
    } else {
        let baseline = evaluate_portfolio(&registry, &Combination::equal_weight(args.baseline)?)?;
        info!(baseline = %baseline.combination, "Filtering against baseline");
        Some(baseline.metrics)
    };

    let handle = evaluate_streaming(registry, universe, args.k, reference, &config)?;
    let stats: Vec<PortfolioStat> = handle.iter().collect();
    let progress = handle.join()?;
    info!(
        evaluated = progress.evaluated,
        emitted = progress.emitted,
        rejected = progress.rejected(),
        "Sweep finished"
    );

    if stats.is_empty() {
        print_warning("No portfolio passed the sweep");
    }

    let best = top_n(stats, &metrics, args.top);
    let rows = StatRow::from_stats(&best, &metrics);
    if format == OutputFormat::Table {
        print_header(&format!("Top {} of {} portfolios", rows.len(), progress.emitted));
    }
    print_output(&rows, format)
}
