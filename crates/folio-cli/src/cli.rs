//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{AssetsArgs, EvaluateArgs, LadderArgs, SweepArgs};

/// Folio - historical asset allocation sweeps
#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// List the assets in a dataset
    Assets(AssetsArgs),

    /// Evaluate one portfolio
    Evaluate(EvaluateArgs),

    /// Evaluate every allocation of a few assets on a percentage ladder
    Ladder(LadderArgs),

    /// Evaluate every k-asset equal-weight portfolio and rank the results
    Sweep(SweepArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// One line per result
    Minimal,
}
