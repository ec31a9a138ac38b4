//! Forward and reverse dependency index.

use crate::payload::record;
use indexmap::IndexMap;
use std::collections::HashSet;
use techtree_types::{Diagnostic, Edge, Node, NodeId};

/// Bidirectional adjacency over the tech tree.
///
/// An edge `source -> target` means `source` is a prerequisite of `target`.
/// The index answers both questions the scheduler asks:
///
/// 1. Given a node, which nodes must complete before it? (`dependencies`)
/// 2. Given a node, which nodes does it unblock? (`successors`)
///
/// Every known node has an entry in both maps, possibly empty, and the two
/// maps are mutual inverses. Pairs with an unknown endpoint are reported and
/// left out of both.
#[derive(Debug, Clone, Default)]
pub struct DependencyIndex {
    /// node -> prerequisites, in edge order
    dependencies: IndexMap<NodeId, Vec<NodeId>>,
    /// Reverse index: node -> dependents, in edge order
    successors: IndexMap<NodeId, Vec<NodeId>>,
    /// Number of distinct indexed pairs.
    edge_count: usize,
}

impl DependencyIndex {
    /// Build the index for `nodes` from `edges`.
    ///
    /// Irregular edges are skipped with a diagnostic: missing source, no
    /// targets, unknown endpoints and repeated pairs.
    pub fn build(
        nodes: &IndexMap<NodeId, Node>,
        edges: &[Edge],
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Self {
        let mut index = Self {
            dependencies: nodes.keys().map(|id| (id.clone(), Vec::new())).collect(),
            successors: nodes.keys().map(|id| (id.clone(), Vec::new())).collect(),
            edge_count: 0,
        };
        let mut seen: HashSet<(NodeId, NodeId)> = HashSet::new();

        for (position, edge) in edges.iter().enumerate() {
            let Some(source) = edge.source() else {
                record(diagnostics, Diagnostic::EdgeWithoutSource { index: position });
                continue;
            };

            let targets = edge.resolved_targets();
            if targets.is_empty() {
                record(
                    diagnostics,
                    Diagnostic::EdgeWithoutTargets {
                        index: position,
                        source: source.clone(),
                    },
                );
                continue;
            }

            for target in targets {
                if !nodes.contains_key(source) || !nodes.contains_key(target) {
                    record(
                        diagnostics,
                        Diagnostic::DanglingEdge {
                            source: source.clone(),
                            target: target.clone(),
                        },
                    );
                    continue;
                }

                if !seen.insert((source.clone(), target.clone())) {
                    record(
                        diagnostics,
                        Diagnostic::DuplicateEdge {
                            source: source.clone(),
                            target: target.clone(),
                        },
                    );
                    continue;
                }

                index.insert(source, target);
            }
        }

        index
    }

    fn insert(&mut self, source: &NodeId, target: &NodeId) {
        // Build reverse index
        if let Some(dependents) = self.successors.get_mut(source) {
            dependents.push(target.clone());
        }
        // Store forward mapping
        if let Some(prerequisites) = self.dependencies.get_mut(target) {
            prerequisites.push(source.clone());
        }
        self.edge_count += 1;
    }

    /// Prerequisites of `id`. Empty for unknown ids.
    pub fn dependencies(&self, id: &NodeId) -> &[NodeId] {
        self.dependencies.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Direct dependents of `id`. Empty for unknown ids.
    pub fn successors(&self, id: &NodeId) -> &[NodeId] {
        self.successors.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The full node -> prerequisites map.
    pub fn dependency_map(&self) -> &IndexMap<NodeId, Vec<NodeId>> {
        &self.dependencies
    }

    /// The full node -> dependents map.
    pub fn successor_map(&self) -> &IndexMap<NodeId, Vec<NodeId>> {
        &self.successors
    }

    /// Number of distinct prerequisite pairs.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
