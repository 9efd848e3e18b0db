//! Assets command implementation.
//!
//! Lists the assets of a dataset and the years they cover.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::DataArgs;
use crate::output::{print_header, print_output};

/// Arguments for the assets command.
#[derive(Args, Debug)]
pub struct AssetsArgs {
    #[command(flatten)]
    pub data: DataArgs,
}

#[derive(Debug, Serialize, Tabled)]
struct AssetRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "First")]
    first_year: i32,
    #[tabled(rename = "Last")]
    last_year: i32,
    #[tabled(rename = "Years")]
    years: usize,
}

/// Execute the assets command.
pub fn execute(args: AssetsArgs, format: OutputFormat) -> Result<()> {
    let registry = args.data.load()?;
    let rows: Vec<AssetRow> = registry
        .iter()
        .map(|a| AssetRow {
            name: a.name().to_string(),
            symbol: a.symbol().to_string(),
            first_year: a.first_year(),
            last_year: a.last_year(),
            years: a.years(),
        })
        .collect();

    if format == OutputFormat::Table {
        print_header("Assets");
    }
    print_output(&rows, format)
}
