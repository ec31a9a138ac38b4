//! JSON result artifact consumed by reporting tools.

use crate::SamplerError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use techtree_types::{ImpactTable, StatusTable, YearlyStatus};
use tracing::info;

/// On-disk shape of a result file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsArtifact {
    pub impact_data: ImpactTable,
    pub status_data: StatusTable,
}

impl ResultsArtifact {
    /// Pair an impact table with a status table.
    ///
    /// Without a status table every impact label maps to an empty record.
    pub fn new(impact: &ImpactTable, status: Option<&StatusTable>) -> Self {
        let status_data = match status {
            Some(status) => status.clone(),
            None => impact
                .keys()
                .map(|label| (label.clone(), YearlyStatus::new()))
                .collect(),
        };

        Self {
            impact_data: impact.clone(),
            status_data,
        }
    }
}

/// Write `{impactData, statusData}` to `path` as pretty-printed JSON.
///
/// Parent directories are created as needed. Returns the written path.
pub fn save_results(
    impact: &ImpactTable,
    status: Option<&StatusTable>,
    path: impl AsRef<Path>,
) -> Result<PathBuf, SamplerError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let artifact = ResultsArtifact::new(impact, status);
    fs::write(path, serde_json::to_string_pretty(&artifact)?)?;

    info!(path = %path.display(), labels = artifact.impact_data.len(), "Results saved");
    Ok(path.to_path_buf())
}
