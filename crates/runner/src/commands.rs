//! The `schedule` and `sample` runs.

use crate::demo::{demo_chain, demo_graph};
use crate::summary::ImpactSummary;
use crate::RunnerError;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use techtree_graph::{normalize_nodes, TechTree};
use techtree_scheduler::{ScheduleReport, Scheduler, SchedulerConfig};
use techtree_simulator::{save_results, simulate_chain, SamplerConfig};
use techtree_types::{ImpactTable, Node};
use tracing::info;

/// Outcome of a scheduler run.
#[derive(Debug)]
pub struct ScheduleOutcome {
    pub report: ScheduleReport,
    pub summary: ImpactSummary,
    pub impact_path: PathBuf,
    pub status_path: PathBuf,
}

/// Outcome of a sampler run.
#[derive(Debug)]
pub struct SampleOutcome {
    pub impact: ImpactTable,
    pub summary: ImpactSummary,
    pub results_path: PathBuf,
}

/// Load a graph file, or the demo graph when no file is given.
pub fn load_graph(path: Option<&Path>) -> Result<TechTree, RunnerError> {
    match path {
        Some(path) => Ok(TechTree::from_path(path)?),
        None => Ok(TechTree::from_value(demo_graph())),
    }
}

/// Load a chain file (a JSON array of nodes), or the demo chain.
///
/// Chain records are normalized like graph nodes; unusable records are
/// skipped with a warning.
pub fn load_chain(path: Option<&Path>) -> Result<Vec<Node>, RunnerError> {
    let Some(path) = path else {
        return Ok(demo_chain());
    };

    let raw = fs::read_to_string(path)?;
    let mut diagnostics = Vec::new();
    let chain = normalize_nodes(serde_json::from_str(&raw)?, &mut diagnostics);
    info!(
        path = %path.display(),
        nodes = chain.len(),
        skipped = diagnostics.len(),
        "Chain loaded"
    );
    Ok(chain)
}

fn write_json<T: Serialize>(path: PathBuf, value: &T) -> Result<PathBuf, RunnerError> {
    fs::write(&path, serde_json::to_string_pretty(value)?)?;
    info!(path = %path.display(), "Wrote output");
    Ok(path)
}

/// Schedule `tree` for `years` and write `impact.json` and `status.json`
/// into `run_dir`.
pub fn run_schedule(
    tree: TechTree,
    years: u32,
    config: SchedulerConfig,
    run_dir: &Path,
) -> Result<ScheduleOutcome, RunnerError> {
    info!(
        nodes = tree.len(),
        edges = tree.index().edge_count(),
        years,
        "Running scheduler"
    );

    let first_year = config.current_year();
    let report = Scheduler::new(tree, config).run(years);
    let summary = ImpactSummary::from_table(&report.impact, first_year);
    info!(records = report.impact_records(), "Computed impacts for active node-years");
    info!(%summary, "Summary");

    let impact_path = write_json(run_dir.join("impact.json"), &report.impact)?;
    let status_path = write_json(run_dir.join("status.json"), &report.status)?;

    Ok(ScheduleOutcome {
        report,
        summary,
        impact_path,
        status_path,
    })
}

/// Sample `chain` and write `results.json` into `run_dir`.
pub fn run_sample(
    chain: &[Node],
    config: &SamplerConfig,
    run_dir: &Path,
) -> Result<SampleOutcome, RunnerError> {
    for node in chain {
        info!(id = %node.id, label = %node.label, kind = %node.kind, "Chain node");
    }

    let impact = simulate_chain(chain, config)?;
    let summary = ImpactSummary::from_table(&impact, config.current_year);
    info!(%summary, "Summary");

    let results_path = save_results(&impact, None, run_dir.join("results.json"))?;

    Ok(SampleOutcome {
        impact,
        summary,
        results_path,
    })
}
