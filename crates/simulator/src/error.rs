//! Error types for the sampler.

use thiserror::Error;

/// Errors from sampling or persisting results.
#[derive(Debug, Error)]
pub enum SamplerError {
    /// At least one draw is needed to estimate anything.
    #[error("Draw count must be positive")]
    ZeroDraws,

    /// Distribution parameters were rejected.
    #[error("Invalid {model} distribution: {reason}")]
    Distribution { model: &'static str, reason: String },

    #[error("Failed to write results: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode results: {0}")]
    Json(#[from] serde_json::Error),
}
