//! Engine configuration.

use std::num::NonZeroUsize;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Configuration for sweep runs.
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```toml
/// workers = 8
/// batch_size = 5000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Worker threads. `None` uses the available parallelism.
    pub workers: Option<usize>,

    /// Combinations per channel message.
    pub batch_size: usize,

    /// Bounded channel depth, in messages.
    pub channel_capacity: usize,

    /// Evaluated combinations between progress events. Zero disables them.
    pub progress_interval: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            workers: None,
            batch_size: 10_000,
            channel_capacity: 16,
            progress_interval: 1_000_000,
        }
    }
}

impl EngineConfig {
    /// Creates a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the worker count.
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Sets the batch size.
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Sets the channel capacity.
    #[must_use]
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity;
        self
    }

    /// Sets the progress interval.
    #[must_use]
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Worker count with the default resolved.
    #[must_use]
    pub fn resolved_workers(&self) -> usize {
        self.workers.unwrap_or_else(|| {
            std::thread::available_parallelism().map_or(1, NonZeroUsize::get)
        })
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> EngineResult<()> {
        if self.workers == Some(0) {
            return Err(EngineError::config("workers must be at least 1"));
        }
        if self.batch_size == 0 {
            return Err(EngineError::config("batch_size must be at least 1"));
        }
        if self.channel_capacity == 0 {
            return Err(EngineError::config("channel_capacity must be at least 1"));
        }
        Ok(())
    }

    /// Parses and validates TOML.
    pub fn from_toml_str(text: &str) -> EngineResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| EngineError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
