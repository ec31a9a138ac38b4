//! Configuration types for the scheduler.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Calendar year of the local clock.
pub fn this_year() -> i32 {
    chrono::Local::now().year()
}

/// Economic assumptions behind the valuation function.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomicConfig {
    /// Annual discount rate.
    pub discount_rate: f64,

    /// Years a deployed plant produces energy.
    pub years_of_operation: u32,

    /// Nameplate capacity of one plant in MW.
    pub plant_capacity_mw: f64,

    /// Fraction of the year the plant runs at nameplate capacity.
    pub capacity_factor: f64,

    /// Reference year: the first simulated year and the discounting origin.
    pub current_year: i32,
}

impl EconomicConfig {
    /// Create a configuration anchored at `current_year`.
    pub fn new(current_year: i32) -> Self {
        Self {
            discount_rate: 0.05,
            years_of_operation: 60,
            plant_capacity_mw: 1000.0,
            capacity_factor: 0.90,
            current_year,
        }
    }

    /// Set the discount rate.
    pub fn with_discount_rate(mut self, rate: f64) -> Self {
        self.discount_rate = rate;
        self
    }

    /// Set the operating lifetime.
    pub fn with_years_of_operation(mut self, years: u32) -> Self {
        self.years_of_operation = years;
        self
    }

    /// Set plant capacity and capacity factor.
    pub fn with_plant(mut self, capacity_mw: f64, capacity_factor: f64) -> Self {
        self.plant_capacity_mw = capacity_mw;
        self.capacity_factor = capacity_factor;
        self
    }

    /// Set the reference year.
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = year;
        self
    }

    /// Energy one plant produces per year of operation, in MWh.
    pub fn annual_output_mwh(&self) -> f64 {
        self.plant_capacity_mw * self.capacity_factor * 24.0 * 365.0
    }
}

impl Default for EconomicConfig {
    fn default() -> Self {
        Self::new(this_year())
    }
}

/// Initial probability of success per TRL bucket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrlTable {
    /// Bucket key (`"6"`, `"5-6"`, ...) -> probability.
    pub probabilities: BTreeMap<String, f64>,

    /// Probability for missing or unknown buckets.
    pub default_probability: f64,
}

impl TrlTable {
    /// Probability for a bucket key, if the key is known.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.probabilities.get(key).copied()
    }

    /// Set the probability of one bucket.
    pub fn with_bucket(mut self, key: impl Into<String>, probability: f64) -> Self {
        self.probabilities.insert(key.into(), probability);
        self
    }

    /// Set the fallback probability.
    pub fn with_default_probability(mut self, probability: f64) -> Self {
        self.default_probability = probability;
        self
    }
}

impl Default for TrlTable {
    fn default() -> Self {
        let probabilities = [
            ("1", 0.10),
            ("2", 0.20),
            ("2-3", 0.25),
            ("3", 0.30),
            ("3-4", 0.40),
            ("4", 0.50),
            ("4-5", 0.60),
            ("5", 0.70),
            ("5-6", 0.75),
            ("6", 0.80),
            ("6-7", 0.85),
            ("7", 0.90),
            ("7-8", 0.95),
            ("8", 0.98),
            ("9", 1.0),
        ]
        .into_iter()
        .map(|(key, p)| (key.to_string(), p))
        .collect();

        Self {
            probabilities,
            default_probability: 0.6,
        }
    }
}

/// Configuration for a scheduling run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Valuation assumptions.
    pub economics: EconomicConfig,

    /// TRL -> initial probability.
    pub trl: TrlTable,

    /// Years of work per missing TRL level.
    pub years_per_trl_level: f64,

    /// Duration used whenever a projected TRL is present.
    pub projected_duration_years: f64,

    /// Duration used when the current TRL is missing or not numeric.
    pub fallback_duration_years: f64,

    /// Floor for the initial duration in the risk-reduction denominator.
    pub min_initial_time: f64,

    /// MWh per reported impact unit (TWh).
    pub mwh_per_reporting_unit: f64,

    /// Impacts at or below this value (TWh) are not recorded.
    pub negligible_threshold: f64,
}

impl SchedulerConfig {
    /// Create a configuration anchored at `current_year`.
    pub fn new(current_year: i32) -> Self {
        Self {
            economics: EconomicConfig::new(current_year),
            trl: TrlTable::default(),
            years_per_trl_level: 2.5,
            projected_duration_years: 7.5,
            fallback_duration_years: 5.0,
            min_initial_time: 0.1,
            mwh_per_reporting_unit: 1_000_000.0,
            negligible_threshold: 1e-3,
        }
    }

    /// Set the economic assumptions.
    pub fn with_economics(mut self, economics: EconomicConfig) -> Self {
        self.economics = economics;
        self
    }

    /// Set the TRL probability table.
    pub fn with_trl_table(mut self, trl: TrlTable) -> Self {
        self.trl = trl;
        self
    }

    /// Set the reference year.
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.economics.current_year = year;
        self
    }

    /// Set the reporting threshold.
    pub fn with_negligible_threshold(mut self, threshold: f64) -> Self {
        self.negligible_threshold = threshold;
        self
    }

    pub fn current_year(&self) -> i32 {
        self.economics.current_year
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self::new(this_year())
    }
}
