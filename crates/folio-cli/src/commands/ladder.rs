//! Ladder command implementation.
//!
//! Evaluates every allocation of a few assets whose weights are rungs of
//! a percentage ladder, e.g. 10%, 20%, ... 100%.

use anyhow::Result;
use clap::Args;
use tracing::info;

use folio_engine::evaluate_batch;
use folio_portfolio::combinations::{ladder_combinations, percent_ladder};
use folio_portfolio::top_n;

use crate::cli::OutputFormat;
use crate::commands::{parse_metrics, require_assets, DataArgs, EngineArgs};
use crate::output::{print_header, print_output, StatRow};

/// Arguments for the ladder command.
#[derive(Args, Debug)]
pub struct LadderArgs {
    /// Comma-separated asset names, e.g. TSM,ITT,GLD
    #[arg(short, long, value_delimiter = ',')]
    pub assets: Vec<String>,

    /// Ladder step in percent; must divide 100
    #[arg(short, long, default_value_t = 10.0)]
    pub step: f64,

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

/// Execute the ladder command.
pub fn execute(args: LadderArgs, format: OutputFormat) -> Result<()> {
    require_assets(&args.assets)?;
    let metrics = parse_metrics(&args.metrics)?;
    let config = args.engine.resolve()?;
    let registry = args.data.load()?;

    let ladder = percent_ladder(args.step)?;
    let combinations = ladder_combinations(&args.assets, &ladder)?;
    info!(
        assets = args.assets.len(),
        rungs = ladder.len(),
        combinations = combinations.len(),
        "Evaluating ladder"
    );

    let stats = evaluate_batch(&registry, &combinations, config.resolved_workers())?;
    let total = stats.len();
    let best = top_n(stats, &metrics, args.top);
    let rows = StatRow::from_stats(&best, &metrics);
    if format == OutputFormat::Table {
        print_header(&format!("Top {} of {} allocations", rows.len(), total));
    }
    print_output(&rows, format)
}
