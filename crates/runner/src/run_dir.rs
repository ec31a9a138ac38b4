//! Per-run output directories.

use crate::RunnerError;
use std::fs;
use std::path::{Path, PathBuf};

/// Run name that is always replaced without asking.
pub const LATEST_RUN: &str = "latest";

/// Subdirectory for scheduler runs.
pub const SCHEDULER_RUNS: &str = "scheduler_demos";

/// Subdirectory for sampler runs.
pub const SAMPLER_RUNS: &str = "simulations";

/// A freshly created run directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunDir {
    pub path: PathBuf,
    /// A previous run of the same name was removed.
    pub replaced: bool,
}

/// Create `<root>/<family>/<name>`.
///
/// An existing directory is replaced if the run is [`LATEST_RUN`] or
/// `force` is set; otherwise it is left alone and an error is returned.
/// Runs before logging is installed, so replacement is reported to the
/// caller instead of logged.
pub fn prepare_run_dir(
    root: &Path,
    family: &str,
    name: &str,
    force: bool,
) -> Result<RunDir, RunnerError> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(RunnerError::InvalidRunName(name.to_string()));
    }

    let path = root.join(family).join(name);
    let replaced = path.exists();
    if replaced {
        if name != LATEST_RUN && !force {
            return Err(RunnerError::RunDirExists(path));
        }
        fs::remove_dir_all(&path)?;
    }

    fs::create_dir_all(&path)?;
    Ok(RunDir { path, replaced })
}
