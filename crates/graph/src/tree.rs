//! The canonical, immutable tech tree.

use crate::payload::{self, record};
use crate::{downstream_concepts, DependencyIndex, GraphError};
use indexmap::IndexMap;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use techtree_types::{Diagnostic, Edge, Node, NodeId};
use tracing::info;

/// Normalized nodes, edges and their dependency index.
///
/// Built once, then shared read-only by the scheduler and the sampler.
/// Node order is input order; a repeated id keeps the first position and
/// the last record.
#[derive(Debug, Clone, Default)]
pub struct TechTree {
    nodes: IndexMap<NodeId, Node>,
    edges: Vec<Edge>,
    index: DependencyIndex,
    diagnostics: Vec<Diagnostic>,
}

impl TechTree {
    /// Build a tree from canonical records.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self::assemble(nodes, edges, Vec::new())
    }

    /// Build a tree from a parsed JSON payload.
    ///
    /// Never fails: anything unusable is dropped and reported through
    /// [`TechTree::diagnostics`].
    pub fn from_value(payload: Value) -> Self {
        let mut diagnostics = Vec::new();
        let graph = payload::normalize(payload, &mut diagnostics);
        Self::assemble(graph.nodes, graph.edges, diagnostics)
    }

    /// Parse a JSON document into a tree.
    pub fn from_json_str(raw: &str) -> Result<Self, GraphError> {
        let payload: Value = serde_json::from_str(raw)?;
        Self::from_object(payload)
    }

    /// Read a JSON document into a tree.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, GraphError> {
        let payload: Value = serde_json::from_reader(reader)?;
        Self::from_object(payload)
    }

    /// Load a JSON graph file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GraphError> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    fn from_object(payload: Value) -> Result<Self, GraphError> {
        match &payload {
            Value::Object(_) => Ok(Self::from_value(payload)),
            Value::Array(_) => Err(GraphError::NotAnObject("an array")),
            Value::String(_) => Err(GraphError::NotAnObject("a string")),
            Value::Number(_) => Err(GraphError::NotAnObject("a number")),
            Value::Bool(_) => Err(GraphError::NotAnObject("a boolean")),
            Value::Null => Err(GraphError::NotAnObject("null")),
        }
    }

    fn assemble(nodes: Vec<Node>, edges: Vec<Edge>, mut diagnostics: Vec<Diagnostic>) -> Self {
        let mut by_id: IndexMap<NodeId, Node> = IndexMap::with_capacity(nodes.len());
        for node in nodes {
            let id = node.id.clone();
            if by_id.insert(id.clone(), node).is_some() {
                record(&mut diagnostics, Diagnostic::DuplicateNodeId { id });
            }
        }

        let index = DependencyIndex::build(&by_id, &edges, &mut diagnostics);

        let mut labels = HashSet::new();
        let mut reported = HashSet::new();
        for node in by_id.values().filter(|n| n.kind.is_schedulable()) {
            if !labels.insert(node.label.as_str()) && reported.insert(node.label.as_str()) {
                record(
                    &mut diagnostics,
                    Diagnostic::DuplicateLabel {
                        label: node.label.clone(),
                    },
                );
            }
        }

        info!(
            nodes = by_id.len(),
            edges = index.edge_count(),
            diagnostics = diagnostics.len(),
            "Tech tree loaded"
        );

        Self {
            nodes: by_id,
            edges,
            index,
            diagnostics,
        }
    }

    /// All nodes, in input order.
    pub fn nodes(&self) -> &IndexMap<NodeId, Node> {
        &self.nodes
    }

    /// Look a node up by id.
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Edges as authored (after payload normalization).
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn index(&self) -> &DependencyIndex {
        &self.index
    }

    /// Prerequisites of `id`.
    pub fn dependencies(&self, id: &NodeId) -> &[NodeId] {
        self.index.dependencies(id)
    }

    /// Direct dependents of `id`.
    pub fn successors(&self, id: &NodeId) -> &[NodeId] {
        self.index.successors(id)
    }

    /// Reactor concepts reachable from `id`.
    pub fn downstream_concepts(&self, id: &NodeId) -> Vec<NodeId> {
        downstream_concepts(id, &self.nodes, &self.index)
    }

    /// Milestones and enabling technologies, in input order.
    pub fn schedulable_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values().filter(|n| n.kind.is_schedulable())
    }

    /// Everything degraded while loading.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Re-emit the tree in the flat `{graph: {nodes, edges}}` shape.
    ///
    /// Edges are written one pair per record, exactly as indexed, so
    /// reloading the output yields the same tree without diagnostics.
    pub fn to_legacy_value(&self) -> Value {
        let nodes: Vec<Value> = self
            .nodes
            .values()
            .map(|node| {
                json!({
                    "id": node.id,
                    "label": node.label,
                    "type": node.kind,
                    "trl_current": node.trl_current,
                    "trl_projected_5_10_years": node.trl_projected_5_10_years,
                })
            })
            .collect();

        let edges: Vec<Value> = self
            .index
            .successor_map()
            .iter()
            .flat_map(|(source, targets)| {
                targets
                    .iter()
                    .map(move |target| json!({ "source": source, "target": target }))
            })
            .collect();

        json!({ "graph": { "nodes": nodes, "edges": edges } })
    }
}
