//! Per-year node status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a schedulable node in one simulated year.
///
/// `Completed` is terminal: once reached it is reported for every later year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Blocked: at least one prerequisite is not complete.
    Pending,
    /// Unblocked and still in progress.
    Active,
    /// Done.
    Completed,
}

impl Status {
    /// The status label used in result tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::Active => "Active",
            Status::Completed => "Completed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
