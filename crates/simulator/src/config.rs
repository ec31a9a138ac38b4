//! Configuration types for the sampler.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Configuration for a sampling run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Number of calendar years to report.
    pub years: u32,

    /// Monte Carlo draws per model.
    pub draws: usize,

    /// Random seed for deterministic sampling. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// First reported year.
    pub current_year: i32,

    /// Log-space spread of milestone durations.
    pub duration_sigma: f64,

    /// Log-space spread of reactor output.
    pub output_sigma: f64,

    /// TRL assumed when a milestone has none, or none that parses.
    pub default_trl: f64,

    /// Years of work per missing TRL level.
    pub years_per_trl_level: f64,

    /// Shortest median milestone duration.
    pub min_duration_years: f64,

    /// Nameplate capacity of the reactor in MW.
    pub plant_capacity_mw: f64,

    /// Fraction of the year the reactor runs at nameplate capacity.
    pub capacity_factor: f64,
}

impl SamplerConfig {
    /// Create a configuration reporting `years` years from `current_year`.
    pub fn new(years: u32, current_year: i32) -> Self {
        Self {
            years,
            draws: 200,
            seed: Some(42),
            current_year,
            duration_sigma: 0.25,
            output_sigma: 0.10,
            default_trl: 5.0,
            years_per_trl_level: 2.5,
            min_duration_years: 0.5,
            plant_capacity_mw: 1000.0,
            capacity_factor: 0.90,
        }
    }

    /// Set the number of draws.
    pub fn with_draws(mut self, draws: usize) -> Self {
        self.draws = draws;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Seed from entropy instead of a fixed seed.
    pub fn without_seed(mut self) -> Self {
        self.seed = None;
        self
    }

    /// Set the number of reported years.
    pub fn with_years(mut self, years: u32) -> Self {
        self.years = years;
        self
    }

    /// Set the first reported year.
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = year;
        self
    }

    /// Median reactor output in TWh per year.
    pub fn median_output_twh(&self) -> f64 {
        self.plant_capacity_mw * self.capacity_factor * 24.0 * 365.0 / 1_000_000.0
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self::new(10, chrono::Local::now().year())
    }
}
