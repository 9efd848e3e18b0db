//! Evaluate command implementation.
//!
//! Computes every metric for one portfolio.

use anyhow::Result;
use clap::Args;

use folio_core::{Combination, Percent};
use folio_portfolio::{evaluate_portfolio, Metric};

use crate::cli::OutputFormat;
use crate::commands::{require_assets, DataArgs};
use crate::error::CliError;
use crate::output::{print_header, print_output, KeyValue, StatRow};

/// Arguments for the evaluate command.
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Comma-separated asset names, e.g. TSM,ITT
    #[arg(short, long, value_delimiter = ',')]
    pub assets: Vec<String>,

    /// Comma-separated allocations in percent, e.g. 60,40. Defaults to equal weights.
    #[arg(short, long, value_delimiter = ',')]
    pub weights: Vec<f64>,

    #[command(flatten)]
    pub data: DataArgs,
}

/// Execute the evaluate command.
pub fn execute(args: EvaluateArgs, format: OutputFormat) -> Result<()> {
    require_assets(&args.assets)?;
    let combination = build_combination(args.assets, &args.weights)?;

    let registry = args.data.load()?;
    let stat = evaluate_portfolio(&registry, &combination)?;

    match format {
        OutputFormat::Table => {
            let mut rows = vec![
                KeyValue::new("Portfolio", stat.combination.to_string()),
                KeyValue::new(
                    "History",
                    format!(
                        "{}-{} ({} years)",
                        stat.start_year,
                        stat.start_year + stat.years as i32 - 1,
                        stat.years
                    ),
                ),
                KeyValue::new("", ""),
            ];
            rows.extend(Metric::ALL.iter().map(|&m| KeyValue::from_metric(m, stat.metric(m))));

            print_header("Portfolio Metrics");
            print_output(&rows, format)?;
        }
        _ => print_output(&[StatRow::new(1, &stat, &[])], format)?,
    }

    Ok(())
}

fn build_combination(assets: Vec<String>, weights: &[f64]) -> Result<Combination> {
    if weights.is_empty() {
        return Ok(Combination::equal_weight(assets)?);
    }
    if weights.len() != assets.len() {
        return Err(CliError::WeightCount {
            assets: assets.len(),
            weights: weights.len(),
        }
        .into());
    }
    let percentages = weights.iter().map(|&w| Percent::from_points(w)).collect();
    Ok(Combination::new(assets, percentages)?)
}
