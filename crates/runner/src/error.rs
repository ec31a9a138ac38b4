//! Error types for the runner.

use std::path::PathBuf;
use techtree_graph::GraphError;
use techtree_simulator::SamplerError;
use thiserror::Error;

/// Errors from preparing, running or persisting a run.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Sampler(#[from] SamplerError),

    /// A named run already exists and `--force` was not given.
    #[error("Run directory {} already exists; pass --force to replace it", .0.display())]
    RunDirExists(PathBuf),

    #[error("Invalid run name {0:?}")]
    InvalidRunName(String),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
