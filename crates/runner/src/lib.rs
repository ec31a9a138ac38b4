//! Runner for the tech tree scheduler and sampler.
//!
//! Each run gets its own directory under an output root:
//!
//! ```text
//! <out>/
//! ├── scheduler_demos/<name>/   impact.json, status.json, log.out
//! └── simulations/<name>/       results.json, log.out
//! ```
//!
//! The `latest` run is replaced on every invocation; any other name must
//! be new unless replacement is forced.

mod commands;
mod config;
mod demo;
mod error;
mod logging;
mod run_dir;
mod summary;

pub use commands::{
    load_chain, load_graph, run_sample, run_schedule, SampleOutcome, ScheduleOutcome,
};
pub use config::{
    RunnerConfig, DEFAULT_SAMPLE_DRAWS, DEFAULT_SAMPLE_SEED, DEFAULT_YEARS,
};
pub use demo::{demo_chain, demo_graph};
pub use error::RunnerError;
pub use logging::init_logging;
pub use run_dir::{prepare_run_dir, RunDir, LATEST_RUN, SAMPLER_RUNS, SCHEDULER_RUNS};
pub use summary::ImpactSummary;
