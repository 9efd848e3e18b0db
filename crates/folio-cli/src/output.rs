//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use folio_portfolio::{fused_score, Metric, PortfolioStat};

use crate::cli::OutputFormat;

/// Formats and prints output based on the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => print_csv(data),
        OutputFormat::Minimal => print_minimal(data),
    }
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{table}");
    Ok(())
}

/// Prints data as JSON.
fn print_json<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as CSV.
fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints one compact JSON object per line.
fn print_minimal<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    for item in data {
        println!("{}", serde_json::to_string(item)?);
    }
    Ok(())
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// A metric rendered in its own unit.
    pub fn from_metric(metric: Metric, value: f64) -> Self {
        Self::new(metric.name(), metric.format_value(value))
    }
}

/// One ranked portfolio.
///
/// Tables show rounded values in each metric's unit; JSON and CSV carry
/// the raw numbers.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct StatRow {
    #[tabled(rename = "#")]
    pub position: usize,
    #[tabled(rename = "Portfolio")]
    pub portfolio: String,
    #[tabled(rename = "From")]
    pub start_year: i32,
    #[tabled(rename = "Years")]
    pub years: usize,
    #[tabled(rename = "Avg", display_with = "display_points")]
    pub avg_return: f64,
    #[tabled(rename = "LT", display_with = "display_points")]
    pub baseline_lt_return: f64,
    #[tabled(rename = "ST", display_with = "display_points")]
    pub baseline_st_return: f64,
    #[tabled(rename = "PWR30", display_with = "display_fraction")]
    pub pwr30: f64,
    #[tabled(rename = "SWR30", display_with = "display_fraction")]
    pub swr30: f64,
    #[tabled(rename = "StdDev", display_with = "display_points")]
    pub std_dev: f64,
    #[tabled(rename = "Ulcer", display_with = "display_points")]
    pub ulcer_score: f64,
    #[tabled(rename = "DeepDD", display_with = "display_fraction")]
    pub deepest_drawdown: f64,
    #[tabled(rename = "LongDD")]
    pub longest_drawdown: f64,
    #[tabled(rename = "Sens", display_with = "display_points")]
    pub start_date_sensitivity: f64,
    #[tabled(rename = "Score", display_with = "display_score")]
    pub score: f64,
}

impl StatRow {
    /// Builds a row; `metrics` selects which ranks feed the score.
    pub fn new(position: usize, stat: &PortfolioStat, metrics: &[Metric]) -> Self {
        let m = &stat.metrics;
        Self {
            position,
            portfolio: stat.combination.to_string(),
            start_year: stat.start_year,
            years: stat.years,
            avg_return: m.avg_return,
            baseline_lt_return: m.baseline_lt_return,
            baseline_st_return: m.baseline_st_return,
            pwr30: m.pwr30,
            swr30: m.swr30,
            std_dev: m.std_dev,
            ulcer_score: m.ulcer_score,
            deepest_drawdown: m.deepest_drawdown,
            longest_drawdown: m.longest_drawdown,
            start_date_sensitivity: m.start_date_sensitivity,
            score: fused_score(stat, metrics),
        }
    }

    /// Rows numbered from 1, in the order given.
    pub fn from_stats(stats: &[PortfolioStat], metrics: &[Metric]) -> Vec<Self> {
        stats
            .iter()
            .enumerate()
            .map(|(i, s)| Self::new(i + 1, s, metrics))
            .collect()
    }
}

fn display_points(value: &f64) -> String {
    format!("{value:.2}")
}

fn display_fraction(value: &f64) -> String {
    format!("{:.2}%", value * 100.0)
}

fn display_score(value: &f64) -> String {
    format!("{value:.0}")
}
