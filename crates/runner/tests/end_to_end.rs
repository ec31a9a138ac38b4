//! Runs both commands against a temporary output root.

use std::fs;
use techtree_graph::TechTree;
use techtree_runner::{
    demo_chain, demo_graph, load_chain, load_graph, prepare_run_dir, run_sample, run_schedule,
    RunnerConfig, SAMPLER_RUNS, SCHEDULER_RUNS,
};
use techtree_scheduler::SchedulerConfig;
use techtree_simulator::{ResultsArtifact, SamplerConfig};
use techtree_test_helpers::multi_target_graph;
use techtree_types::{ImpactTable, StatusTable};

#[test]
fn test_schedule_writes_both_tables() {
    let root = tempfile::tempdir().unwrap();
    let run_dir = prepare_run_dir(root.path(), SCHEDULER_RUNS, "e2e", false).unwrap().path;

    let outcome = run_schedule(
        TechTree::from_value(multi_target_graph()),
        5,
        SchedulerConfig::new(2030),
        &run_dir,
    )
    .unwrap();

    let impact: ImpactTable =
        serde_json::from_str(&fs::read_to_string(&outcome.impact_path).unwrap()).unwrap();
    let status: StatusTable =
        serde_json::from_str(&fs::read_to_string(&outcome.status_path).unwrap()).unwrap();

    assert_eq!(status, outcome.report.status);
    assert_eq!(impact.len(), 3);
    assert_eq!(impact["M1"].len(), 5);
    assert_eq!(outcome.summary.total_techs, 3);
    assert_eq!(outcome.summary.active_techs, 2);
    assert_eq!(outcome.summary.current_opportunities, 2);
}

#[test]
fn test_demo_graph_schedules() {
    let root = tempfile::tempdir().unwrap();
    let run_dir = prepare_run_dir(root.path(), SCHEDULER_RUNS, "latest", false).unwrap().path;

    let tree = load_graph(None).unwrap();
    assert_eq!(tree.len(), 5);
    assert_eq!(tree.edges().len(), TechTree::from_value(demo_graph()).edges().len());

    let outcome = run_schedule(tree, 5, SchedulerConfig::new(2030), &run_dir).unwrap();
    let labels: Vec<&str> = outcome.report.status.keys().map(String::as_str).collect();
    assert_eq!(labels.len(), 3);
    assert!(labels.contains(&"HT Materials"));
    assert!(outcome.report.diagnostics.is_empty());
}

#[test]
fn test_graph_file_is_loaded() {
    let root = tempfile::tempdir().unwrap();
    let path = root.path().join("graph.json");
    fs::write(&path, serde_json::to_string(&multi_target_graph()).unwrap()).unwrap();

    let tree = load_graph(Some(path.as_path())).unwrap();
    assert_eq!(tree.len(), 5);
}

#[test]
fn test_sample_writes_results() {
    let root = tempfile::tempdir().unwrap();
    let run_dir = prepare_run_dir(root.path(), SAMPLER_RUNS, "latest", false).unwrap().path;
    let config = SamplerConfig::new(5, 2030).with_draws(50).with_seed(3);

    let outcome = run_sample(&demo_chain(), &config, &run_dir).unwrap();

    assert_eq!(outcome.results_path, run_dir.join("results.json"));
    let artifact: ResultsArtifact =
        serde_json::from_str(&fs::read_to_string(&outcome.results_path).unwrap()).unwrap();
    let labels: Vec<&str> = artifact.impact_data.keys().map(String::as_str).collect();
    assert_eq!(labels, vec!["Milestone A", "Milestone B"]);
    assert_eq!(outcome.summary.total_techs, 2);
}

#[test]
fn test_chain_file_is_loaded() {
    let root = tempfile::tempdir().unwrap();
    let path = root.path().join("chain.json");
    fs::write(&path, serde_json::to_string(&demo_chain()).unwrap()).unwrap();

    assert_eq!(load_chain(Some(path.as_path())).unwrap(), demo_chain());
    assert_eq!(load_chain(None).unwrap(), demo_chain());
}

#[test]
fn test_chain_file_tolerates_nested_and_unlabeled_nodes() {
    let root = tempfile::tempdir().unwrap();
    let path = root.path().join("chain.json");
    let chain = serde_json::json!([
        {"id": "m1", "data": {"nodeLabel": "Milestone", "trl_current": "6"}},
        {"id": "m2", "data": {"nodeLabel": "Milestone", "trl_current": "5"}},
        {"id": "c1", "type": "ReactorConcept"},
    ]);
    fs::write(&path, chain.to_string()).unwrap();

    let chain = load_chain(Some(path.as_path())).unwrap();
    assert_eq!(chain.len(), 3);

    let run_dir = prepare_run_dir(root.path(), SAMPLER_RUNS, "nested", false).unwrap().path;
    let config = SamplerConfig::new(3, 2030).with_draws(20).with_seed(9);
    let outcome = run_sample(&chain, &config, &run_dir).unwrap();

    let labels: Vec<&str> = outcome.impact.keys().map(String::as_str).collect();
    assert_eq!(labels, vec!["m1", "m2"]);
}

#[test]
fn test_config_file_feeds_both_commands() {
    let root = tempfile::tempdir().unwrap();
    let path = root.path().join("run.toml");
    fs::write(
        &path,
        "[scheduler.economics]\ncurrent_year = 2040\n\n[sampler]\ndraws = 20\nyears = 3\n",
    )
    .unwrap();

    let config = RunnerConfig::load_or_default(Some(path.as_path())).unwrap();
    assert_eq!(config.scheduler.current_year(), 2040);
    assert_eq!(config.sampler.draws, 20);
    assert_eq!(config.sampler.years, 3);
}
