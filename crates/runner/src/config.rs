//! Run configuration loaded from TOML.

use crate::RunnerError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use techtree_scheduler::SchedulerConfig;
use techtree_simulator::SamplerConfig;

/// Default draw count for `techtree sample`.
pub const DEFAULT_SAMPLE_DRAWS: usize = 100;

/// Default seed for `techtree sample`.
pub const DEFAULT_SAMPLE_SEED: u64 = 101010;

/// Default number of simulated years for both commands.
pub const DEFAULT_YEARS: u32 = 10;

/// Everything a run can be configured with.
///
/// ```toml
/// [scheduler]
/// negligible_threshold = 0.001
///
/// [scheduler.economics]
/// discount_rate = 0.05
/// current_year = 2030
///
/// [scheduler.trl]
/// default_probability = 0.6
///
/// [scheduler.trl.probabilities]
/// "5-6" = 0.75
///
/// [sampler]
/// draws = 500
/// seed = 7
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    pub scheduler: SchedulerConfig,
    pub sampler: SamplerConfig,
}

impl RunnerConfig {
    /// Defaults used when no config file is given.
    pub fn cli_defaults() -> Self {
        let sampler = SamplerConfig::default()
            .with_years(DEFAULT_YEARS)
            .with_draws(DEFAULT_SAMPLE_DRAWS)
            .with_seed(DEFAULT_SAMPLE_SEED);

        Self {
            scheduler: SchedulerConfig::default(),
            sampler,
        }
    }

    /// Parse a TOML document. Missing sections and fields keep their defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, RunnerError> {
        Ok(toml::from_str(raw)?)
    }

    /// Load a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RunnerError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Load `path` if given, otherwise use [`RunnerConfig::cli_defaults`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, RunnerError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::cli_defaults()),
        }
    }
}
