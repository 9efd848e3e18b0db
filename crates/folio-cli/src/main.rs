//! Folio CLI - sweep, evaluate and rank asset allocations.
//!
//! # Usage
//!
//! ```bash
//! # Every 3-asset equal-weight portfolio, best 20 by fused rank
//! folio sweep --k 3 --top 20
//!
//! # Only portfolios at least as good as 50/50 stocks/bonds on every metric
//! folio sweep --k 4 --baseline TSM,ITT
//!
//! # One portfolio
//! folio evaluate --assets TSM,ITT --weights 60,40
//!
//! # Every allocation of three assets in 10% steps
//! folio ladder --assets TSM,ITT,GLD --step 10
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.quiet { "warn" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let format = cli.format;

    match cli.command {
        Commands::Assets(args) => commands::assets::execute(args, format)?,
        Commands::Evaluate(args) => commands::evaluate::execute(args, format)?,
        Commands::Ladder(args) => commands::ladder::execute(args, format)?,
        Commands::Sweep(args) => commands::sweep::execute(args, format)?,
    }

    Ok(())
}
