//! Random models of the quantities a chain depends on.
//!
//! Both models are log-normal: right-skewed, strictly positive, and centred
//! so that their median equals the deterministic estimate.

use crate::{SamplerConfig, SamplerError};
use rand::distributions::Distribution;
use statrs::distribution::LogNormal;
use techtree_types::{trl, Node};

/// A source of independent draws of one quantity.
pub trait WorldModel {
    /// Draw one sample.
    fn sample(&self, rng: &mut impl rand::Rng) -> f64;

    /// The deterministic value the samples are centred on.
    fn median(&self) -> f64;

    /// Draw `draws` samples.
    fn sample_n(&self, rng: &mut impl rand::Rng, draws: usize) -> Vec<f64> {
        (0..draws).map(|_| self.sample(rng)).collect()
    }
}

/// Log-normal with a given median and log-space spread.
#[derive(Debug, Clone)]
struct MedianLogNormal {
    median: f64,
    dist: LogNormal,
}

impl MedianLogNormal {
    fn new(model: &'static str, median: f64, sigma: f64) -> Result<Self, SamplerError> {
        let dist = LogNormal::new(median.ln(), sigma).map_err(|e| SamplerError::Distribution {
            model,
            reason: e.to_string(),
        })?;
        Ok(Self { median, dist })
    }
}

/// Years a milestone takes to complete.
#[derive(Debug, Clone)]
pub struct MilestoneDurationModel {
    inner: MedianLogNormal,
}

impl MilestoneDurationModel {
    /// Model centred on `max(min, (9 - TRL) * years_per_level)`.
    ///
    /// A missing or non-numeric TRL falls back to `default_trl`.
    pub fn for_trl(trl_current: Option<&str>, config: &SamplerConfig) -> Result<Self, SamplerError> {
        let level = trl_current
            .and_then(trl::leading_level)
            .unwrap_or(config.default_trl);
        let median = trl::years_to_maturity(level, config.years_per_trl_level)
            .max(config.min_duration_years);

        Ok(Self {
            inner: MedianLogNormal::new("milestone duration", median, config.duration_sigma)?,
        })
    }

    /// Model for a milestone node.
    pub fn for_node(node: &Node, config: &SamplerConfig) -> Result<Self, SamplerError> {
        Self::for_trl(node.trl_current.as_deref(), config)
    }
}

impl WorldModel for MilestoneDurationModel {
    fn sample(&self, rng: &mut impl rand::Rng) -> f64 {
        self.inner.dist.sample(rng)
    }

    fn median(&self) -> f64 {
        self.inner.median
    }
}

/// Annual energy output of the reactor at the end of the chain, in TWh.
#[derive(Debug, Clone)]
pub struct ReactorOutputModel {
    inner: MedianLogNormal,
}

impl ReactorOutputModel {
    pub fn new(config: &SamplerConfig) -> Result<Self, SamplerError> {
        let median = config.median_output_twh().max(1e-6);
        Ok(Self {
            inner: MedianLogNormal::new("reactor output", median, config.output_sigma)?,
        })
    }
}

impl WorldModel for ReactorOutputModel {
    fn sample(&self, rng: &mut impl rand::Rng) -> f64 {
        self.inner.dist.sample(rng)
    }

    fn median(&self) -> f64 {
        self.inner.median
    }
}
