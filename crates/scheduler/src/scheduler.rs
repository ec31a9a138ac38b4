//! Year-stepped scheduling with marginal impact.

use crate::critical_path::{evaluate, EvalContext};
use crate::estimate::InitialEstimate;
use crate::state::{NodeState, Snapshot};
use crate::valuation::discounted_mwh;
use crate::SchedulerConfig;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use techtree_graph::TechTree;
use techtree_types::{
    impact_records, Diagnostic, ImpactTable, NodeId, Status, StatusTable,
};
use tracing::{debug, info, trace, warn};

/// Year counts accepted by [`Scheduler::run_checked`].
pub const CHECKED_YEARS: RangeInclusive<u32> = 5..=30;

/// Output of one scheduling run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleReport {
    /// label -> year -> impact (TWh). Sparse: negligible impacts are omitted.
    pub impact: ImpactTable,

    /// label -> year -> status. Dense over the simulated years.
    pub status: StatusTable,

    /// Ingestion, estimate and evaluation diagnostics, in that order.
    pub diagnostics: Vec<Diagnostic>,
}

impl ScheduleReport {
    /// Number of recorded node-years of impact.
    pub fn impact_records(&self) -> usize {
        impact_records(&self.impact)
    }
}

/// Deterministic scheduler over one tech tree.
///
/// Every schedulable node receives one unit of effort per year once all of
/// its prerequisites are complete. After each year's status pass, the value
/// of one extra year of effort on each active node is measured against the
/// reactor concepts downstream of it.
pub struct Scheduler {
    tree: TechTree,
    config: SchedulerConfig,
    /// Starting state; every run forks from it.
    initial: Snapshot,
    /// Estimate diagnostics, computed once.
    estimate_diagnostics: Vec<Diagnostic>,
}

impl Scheduler {
    /// Create a scheduler, estimating every node's starting state.
    pub fn new(tree: TechTree, config: SchedulerConfig) -> Self {
        let mut estimate_diagnostics = Vec::new();
        let initial = tree
            .nodes()
            .values()
            .map(|node| {
                let estimate =
                    InitialEstimate::for_node(node, &config, &mut estimate_diagnostics);
                (
                    node.id.clone(),
                    NodeState::from_estimate(estimate, config.min_initial_time),
                )
            })
            .collect();

        Self {
            tree,
            config,
            initial,
            estimate_diagnostics,
        }
    }

    pub fn tree(&self) -> &TechTree {
        &self.tree
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Starting state of every node.
    pub fn initial_state(&self) -> &Snapshot {
        &self.initial
    }

    /// Simulate `years` calendar years starting at the configured current year.
    pub fn run(&self, years: u32) -> ScheduleReport {
        let first_year = self.config.current_year();
        info!(
            nodes = self.tree.len(),
            schedulable = self.tree.schedulable_nodes().count(),
            years,
            first_year,
            "Starting schedule"
        );

        let mut state = self.initial.clone();
        let mut impact = ImpactTable::new();
        let mut status = StatusTable::new();
        for node in self.tree.schedulable_nodes() {
            impact.insert(node.label.clone(), Default::default());
            status.insert(node.label.clone(), Default::default());
        }
        let mut cycles: IndexSet<NodeId> = IndexSet::new();

        for year in (0..years).map(|offset| first_year + offset as i32) {
            let active = self.advance_year(year, &mut state, &mut status);
            debug!(year, active = active.len(), "Status pass complete");

            for id in &active {
                let Some(node) = self.tree.node(id) else {
                    continue;
                };
                let Some(value) = self.marginal_impact(id, &state, &mut cycles) else {
                    continue;
                };
                if value > self.config.negligible_threshold {
                    trace!(node = %id, year, impact = value, "Impact recorded");
                    if let Some(yearly) = impact.get_mut(&node.label) {
                        yearly.insert(year, value);
                    }
                }
            }
        }

        let mut diagnostics = self.tree.diagnostics().to_vec();
        diagnostics.extend(self.estimate_diagnostics.iter().cloned());
        for node in cycles {
            let diagnostic = Diagnostic::CyclicDependency { node };
            warn!(%diagnostic, "Cycle treated as unreachable");
            diagnostics.push(diagnostic);
        }

        let report = ScheduleReport {
            impact,
            status,
            diagnostics,
        };
        info!(
            records = report.impact_records(),
            diagnostics = report.diagnostics.len(),
            "Schedule complete"
        );
        report
    }

    /// [`Scheduler::run`] restricted to [`CHECKED_YEARS`].
    pub fn run_checked(&self, years: u32) -> Option<ScheduleReport> {
        CHECKED_YEARS.contains(&years).then(|| self.run(years))
    }

    /// Status pass for one year, in node order.
    ///
    /// Returns the nodes that worked this year and are still incomplete.
    fn advance_year(&self, year: i32, state: &mut Snapshot, status: &mut StatusTable) -> Vec<NodeId> {
        let mut active = Vec::new();

        for node in self.tree.schedulable_nodes() {
            let id = &node.id;
            let this_year = if state.is_complete(id) {
                Status::Completed
            } else if self
                .tree
                .dependencies(id)
                .iter()
                .all(|prerequisite| state.is_complete(prerequisite))
            {
                if let Some(node_state) = state.get_mut(id) {
                    if !node_state.advance() {
                        active.push(id.clone());
                    }
                }
                Status::Active
            } else {
                Status::Pending
            };

            if let Some(yearly) = status.get_mut(&node.label) {
                yearly.insert(year, this_year);
            }
        }

        active
    }

    /// Reporting-unit value of one extra year of effort on `id`.
    ///
    /// `None` when no reactor concept depends on the node.
    fn marginal_impact(
        &self,
        id: &NodeId,
        state: &Snapshot,
        cycles: &mut IndexSet<NodeId>,
    ) -> Option<f64> {
        let concepts = self.tree.downstream_concepts(id);
        if concepts.is_empty() {
            return None;
        }

        let baseline = self.pathway_mwh(state, &concepts, cycles);
        let accelerated = self.pathway_mwh(&state.accelerated(id), &concepts, cycles);

        Some((accelerated - baseline) / self.config.mwh_per_reporting_unit)
    }

    /// Expected discounted MWh of `concepts` under `snapshot`.
    fn pathway_mwh(
        &self,
        snapshot: &Snapshot,
        concepts: &[NodeId],
        cycles: &mut IndexSet<NodeId>,
    ) -> f64 {
        let mut ctx = EvalContext::new();
        let origin = f64::from(self.config.current_year());

        let total = concepts
            .iter()
            .map(|concept| {
                let path = evaluate(concept, snapshot, self.tree.index(), &mut ctx);
                discounted_mwh(origin + path.time, &self.config.economics) * path.probability
            })
            .sum();

        cycles.extend(ctx.into_cycles());
        total
    }
}
