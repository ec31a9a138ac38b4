//! Mutable per-node simulation state and copy-on-write snapshots.

use crate::estimate::InitialEstimate;
use techtree_types::NodeId;

/// Simulation state of one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeState {
    /// Estimated duration, floored to stay a usable denominator.
    pub initial_time: f64,
    /// Probability before any risk was retired.
    pub initial_prob: f64,
    pub time_remaining: f64,
    pub prob_of_success: f64,
    pub complete: bool,
}

impl NodeState {
    /// Starting state from an estimate.
    ///
    /// Nodes with no remaining work start complete and certain.
    pub fn from_estimate(estimate: InitialEstimate, min_initial_time: f64) -> Self {
        let complete = estimate.duration <= 0.0;
        Self {
            initial_time: if complete {
                min_initial_time
            } else {
                estimate.duration.max(min_initial_time)
            },
            initial_prob: estimate.probability,
            time_remaining: estimate.duration.max(0.0),
            prob_of_success: if complete { 1.0 } else { estimate.probability },
            complete,
        }
    }

    /// Probability gained per year of work.
    pub fn risk_increment(&self) -> f64 {
        (1.0 - self.initial_prob) / self.initial_time
    }

    /// Spend one year of work on the node.
    ///
    /// Returns `true` if the node completed this year.
    pub fn advance(&mut self) -> bool {
        if self.time_remaining > 0.0 {
            self.time_remaining -= 1.0;
            self.prob_of_success += self.risk_increment();
        }
        if self.time_remaining <= 0.0 {
            self.complete = true;
            self.time_remaining = 0.0;
            self.prob_of_success = 1.0;
        }
        self.complete
    }

    /// One hypothetical extra year of work.
    ///
    /// Unlike [`NodeState::advance`] this never completes the node. Time may
    /// run past zero and probability past 1.
    pub fn accelerate(&mut self) {
        self.time_remaining -= 1.0;
        self.prob_of_success += self.risk_increment();
    }
}

/// State of every node at one point of the simulation.
///
/// Backed by a persistent map: cloning is O(1) and a counterfactual only
/// copies the entries it changes, so baseline and hypothesis never share
/// mutations.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    states: im::HashMap<NodeId, NodeState>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: NodeId, state: NodeState) {
        self.states.insert(id, state);
    }

    pub fn get(&self, id: &NodeId) -> Option<&NodeState> {
        self.states.get(id)
    }

    pub fn get_mut(&mut self, id: &NodeId) -> Option<&mut NodeState> {
        self.states.get_mut(id)
    }

    /// Whether `id` is known and complete.
    pub fn is_complete(&self, id: &NodeId) -> bool {
        self.states.get(id).is_some_and(|state| state.complete)
    }

    /// A copy of this snapshot with one extra year of work applied to `id`.
    pub fn accelerated(&self, id: &NodeId) -> Self {
        let mut fork = self.clone();
        if let Some(state) = fork.states.get_mut(id) {
            state.accelerate();
        }
        fork
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl FromIterator<(NodeId, NodeState)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (NodeId, NodeState)>>(iter: I) -> Self {
        Self {
            states: iter.into_iter().collect(),
        }
    }
}
