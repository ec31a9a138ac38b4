//! Critical-path evaluation over a snapshot.
//!
//! The time to complete a node is its own remaining time plus the slowest
//! prerequisite chain (prerequisites run in parallel); its probability of
//! success is its own probability times that of every prerequisite
//! (independent events).
//!
//! Results are memoized in an [`EvalContext`]. A context is only valid for
//! the snapshot it was first used with: create a fresh one for every batch.

use crate::state::Snapshot;
use indexmap::IndexSet;
use std::collections::{HashMap, HashSet};
use techtree_graph::DependencyIndex;
use techtree_types::NodeId;
use tracing::trace;

/// Time to completion and probability of success of a node's full path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathEstimate {
    pub time: f64,
    pub probability: f64,
}

impl PathEstimate {
    /// A branch that can never complete.
    pub const UNREACHABLE: Self = Self {
        time: f64::INFINITY,
        probability: 0.0,
    };

    /// A branch that contributes nothing.
    pub const NEUTRAL: Self = Self {
        time: 0.0,
        probability: 1.0,
    };
}

/// Memo and recursion guard for one evaluation batch.
#[derive(Debug, Default)]
pub struct EvalContext {
    memo: HashMap<NodeId, PathEstimate>,
    in_progress: HashSet<NodeId>,
    cycles: IndexSet<NodeId>,
}

impl EvalContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes at which a cycle was entered, in discovery order.
    pub fn cycles(&self) -> &IndexSet<NodeId> {
        &self.cycles
    }

    pub fn into_cycles(self) -> IndexSet<NodeId> {
        self.cycles
    }
}

/// Evaluate the critical path ending at `id`.
///
/// Never fails: re-entering a node already being evaluated yields
/// [`PathEstimate::UNREACHABLE`] for that branch, and ids missing from the
/// snapshot yield [`PathEstimate::NEUTRAL`].
pub fn evaluate(
    id: &NodeId,
    snapshot: &Snapshot,
    index: &DependencyIndex,
    ctx: &mut EvalContext,
) -> PathEstimate {
    if ctx.in_progress.contains(id) {
        ctx.cycles.insert(id.clone());
        return PathEstimate::UNREACHABLE;
    }
    if let Some(cached) = ctx.memo.get(id) {
        return *cached;
    }
    let Some(state) = snapshot.get(id) else {
        return PathEstimate::NEUTRAL;
    };

    let own = PathEstimate {
        time: state.time_remaining,
        probability: state.prob_of_success,
    };

    let prerequisites = index.dependencies(id);
    if prerequisites.is_empty() {
        return own;
    }

    ctx.in_progress.insert(id.clone());

    let mut slowest = 0.0_f64;
    let mut joint = 1.0_f64;
    for prerequisite in prerequisites {
        let path = evaluate(prerequisite, snapshot, index, ctx);
        slowest = slowest.max(path.time);
        joint *= path.probability;
    }

    let result = PathEstimate {
        time: own.time + slowest,
        probability: own.probability * joint,
    };
    trace!(node = %id, time = result.time, probability = result.probability, "Critical path");

    ctx.memo.insert(id.clone(), result);
    ctx.in_progress.remove(id);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NodeState;
    use indexmap::IndexMap;
    use techtree_types::{Edge, Node, NodeKind};

    fn state(time: f64, probability: f64) -> NodeState {
        NodeState {
            initial_time: time.max(0.1),
            initial_prob: probability,
            time_remaining: time,
            prob_of_success: probability,
            complete: false,
        }
    }

    fn snapshot(states: &[(&str, NodeState)]) -> Snapshot {
        states
            .iter()
            .map(|(id, state)| (NodeId::from(*id), *state))
            .collect()
    }

    fn index(ids: &[&str], edges: &[Edge]) -> DependencyIndex {
        let nodes: IndexMap<NodeId, Node> = ids
            .iter()
            .map(|id| (NodeId::from(*id), Node::new(*id, *id, NodeKind::Milestone)))
            .collect();
        DependencyIndex::build(&nodes, edges, &mut Vec::new())
    }

    #[test]
    fn test_leaf_is_its_own_state() {
        let index = index(&["a"], &[]);
        let snapshot = snapshot(&[("a", state(3.25, 0.4))]);

        let path = evaluate(&"a".into(), &snapshot, &index, &mut EvalContext::new());
        assert_eq!(path.time, 3.25);
        assert_eq!(path.probability, 0.4);
    }

    #[test]
    fn test_max_time_and_product_probability() {
        let index = index(
            &["m1", "m2", "et1", "c1"],
            &[
                Edge::single("m1", "et1"),
                Edge::single("m2", "et1"),
                Edge::single("et1", "c1"),
            ],
        );
        let snapshot = snapshot(&[
            ("m1", state(2.0, 0.8)),
            ("m2", state(3.0, 0.9)),
            ("et1", state(5.0, 0.7)),
            ("c1", state(0.0, 1.0)),
        ]);

        let path = evaluate(&"c1".into(), &snapshot, &index, &mut EvalContext::new());
        assert!((path.time - 8.0).abs() < 1e-9);
        assert!((path.probability - 0.504).abs() < 1e-9);
    }

    #[test]
    fn test_mutual_cycle_is_unreachable_from_either_end() {
        let index = index(&["a", "b"], &[Edge::single("a", "b"), Edge::single("b", "a")]);
        let snapshot = snapshot(&[("a", state(1.0, 0.9)), ("b", state(1.0, 0.9))]);

        for start in ["a", "b"] {
            let mut ctx = EvalContext::new();
            let path = evaluate(&start.into(), &snapshot, &index, &mut ctx);
            assert_eq!(path.time, f64::INFINITY);
            assert_eq!(path.probability, 0.0);
            assert!(ctx.cycles().contains(&NodeId::from(start)));
        }
    }

    #[test]
    fn test_missing_prerequisite_state_is_neutral() {
        let index = index(&["a", "b"], &[Edge::single("a", "b")]);
        let snapshot = snapshot(&[("b", state(2.0, 0.5))]);

        let path = evaluate(&"b".into(), &snapshot, &index, &mut EvalContext::new());
        assert_eq!(path.time, 2.0);
        assert_eq!(path.probability, 0.5);
    }

    #[test]
    fn test_memo_is_scoped_to_its_context() {
        let index = index(&["a", "b"], &[Edge::single("a", "b")]);
        let snapshot = snapshot(&[("a", state(2.0, 0.5)), ("b", state(1.0, 1.0))]);
        let faster = snapshot.accelerated(&"a".into());

        let mut ctx = EvalContext::new();
        let before = evaluate(&"b".into(), &snapshot, &index, &mut ctx);
        let stale = evaluate(&"b".into(), &faster, &index, &mut ctx);
        let fresh = evaluate(&"b".into(), &faster, &index, &mut EvalContext::new());

        assert_eq!(before, stale);
        assert_eq!(fresh.time, 2.0);
        assert!(fresh.probability > before.probability);
    }
}
