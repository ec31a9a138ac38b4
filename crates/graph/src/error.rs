//! Error types for graph loading.

use thiserror::Error;

/// Errors while reading a graph payload.
///
/// Only the outer shape can fail; anything inside a well-formed JSON object
/// is ingested best effort.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The payload is not valid JSON.
    #[error("Invalid graph JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload could not be read.
    #[error("Failed to read graph: {0}")]
    Io(#[from] std::io::Error),

    /// The payload is valid JSON but not an object.
    #[error("Graph payload must be a JSON object, found {0}")]
    NotAnObject(&'static str),
}
