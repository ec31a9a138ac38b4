//! Probabilistic sampler for linear milestone chains.
//!
//! Where the scheduler works on a whole tech tree with deterministic
//! estimates, the sampler takes a single chain of milestones ending in a
//! reactor concept and estimates, year by year, the expected energy that
//! chain delivers, attributing it evenly to its milestones.
//!
//! # Example
//!
//! ```ignore
//! use techtree_simulator::{save_results, simulate_chain, SamplerConfig};
//!
//! let config = SamplerConfig::default().with_draws(100).with_seed(101010);
//! let impact = simulate_chain(&chain, &config)?;
//! save_results(&impact, None, "data/simulations/latest/results.json")?;
//! ```
//!
//! Every world model draws from its own ChaCha stream, seeded from the
//! run's root RNG, so results are reproducible for a given seed.

mod config;
mod error;
mod results;
mod runner;
pub mod world_models;

pub use config::SamplerConfig;
pub use error::SamplerError;
pub use results::{save_results, ResultsArtifact};
pub use runner::simulate_chain;
pub use world_models::{MilestoneDurationModel, ReactorOutputModel, WorldModel};
