//! CLI command implementations.

pub mod assets;
pub mod evaluate;
pub mod ladder;
pub mod sweep;

pub use assets::AssetsArgs;
pub use evaluate::EvaluateArgs;
pub use ladder::LadderArgs;
pub use sweep::SweepArgs;

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use folio_core::AssetRegistry;
use folio_engine::EngineConfig;
use folio_ext_file::{load_registry, parse_registry, LoadOptions, BUNDLED_DATASET};
use folio_portfolio::{Metric, MIN_YEARS};

use crate::error::{CliError, CliResult};

/// Where asset returns come from.
#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// Tab-separated returns file. Defaults to the bundled dataset.
    #[arg(short, long, env = "FOLIO_DATA")]
    pub data: Option<PathBuf>,

    /// Assets with fewer years of history are rejected
    #[arg(long, default_value_t = MIN_YEARS)]
    pub min_years: usize,
}

impl DataArgs {
    /// Loads the registry.
    pub fn load(&self) -> anyhow::Result<AssetRegistry> {
        let options = LoadOptions::default().with_min_years(self.min_years);
        let registry = match &self.data {
            Some(path) => load_registry(path, &options)?,
            None => parse_registry(BUNDLED_DATASET, &options)?,
        };
        info!(assets = registry.len(), "Loaded asset registry");
        Ok(registry)
    }
}

/// Sweep engine settings.
#[derive(Args, Debug, Clone)]
pub struct EngineArgs {
    /// TOML engine configuration file
    #[arg(long, env = "FOLIO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Worker threads, overriding the configuration
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Combinations per batch, overriding the configuration
    #[arg(long)]
    pub batch_size: Option<usize>,
}

impl EngineArgs {
    /// Resolves the engine configuration: file first, then flag overrides.
    pub fn resolve(&self) -> anyhow::Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::from_toml_file(path)?,
            None => EngineConfig::default(),
        };
        if let Some(workers) = self.workers {
            config = config.with_workers(workers);
        }
        if let Some(batch_size) = self.batch_size {
            config = config.with_batch_size(batch_size);
        }
        config.validate()?;
        Ok(config)
    }
}

/// Parses metric names; an empty list means every metric.
pub fn parse_metrics(names: &[String]) -> CliResult<Vec<Metric>> {
    if names.is_empty() {
        return Ok(Metric::ALL.to_vec());
    }
    names
        .iter()
        .map(|name| {
            Metric::from_name(name).ok_or_else(|| {
                let known: Vec<&str> = Metric::ALL.iter().map(|m| m.name()).collect();
                CliError::UnknownMetric(name.clone(), known.join(", "))
            })
        })
        .collect()
}

/// Rejects an empty asset list.
pub fn require_assets(assets: &[String]) -> CliResult<()> {
    if assets.is_empty() {
        return Err(CliError::MissingArgument("--assets".to_string()));
    }
    Ok(())
}
