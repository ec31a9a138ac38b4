//! Structured warnings for degraded input.
//!
//! Ingestion and scheduling never fail on irregular input. Whenever a value
//! is dropped or replaced by a default, a [`Diagnostic`] records what
//! happened so callers can surface it without changing the result.

use crate::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A degraded-input event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The payload is not a graph object; nothing was ingested.
    MalformedPayload { reason: String },

    /// Input node at `index` has no usable id and was skipped.
    NodeWithoutId { index: usize },

    /// Input node at `index` could not be read as a node record.
    MalformedNode { index: usize, reason: String },

    /// A later node reused this id and replaced the earlier record.
    DuplicateNodeId { id: NodeId },

    /// Input edge at `index` could not be read as an edge record.
    MalformedEdge { index: usize, reason: String },

    /// Input edge at `index` has no source.
    EdgeWithoutSource { index: usize },

    /// Input edge at `index` has no resolvable targets.
    EdgeWithoutTargets { index: usize, source: NodeId },

    /// An edge endpoint is not a known node; the pair was not indexed.
    DanglingEdge { source: NodeId, target: NodeId },

    /// The pair was already indexed by an earlier edge.
    DuplicateEdge { source: NodeId, target: NodeId },

    /// Two schedulable nodes share a label; their results collide.
    DuplicateLabel { label: String },

    /// The TRL's leading token is not numeric; the fallback duration is used.
    UnparsedTrl { node: NodeId, value: String },

    /// The TRL is not in the probability table; the default probability is used.
    UnknownTrlBucket { node: NodeId, value: String },

    /// Evaluating this node's prerequisites entered a dependency cycle.
    CyclicDependency { node: NodeId },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedPayload { reason } => {
                write!(f, "graph payload is malformed ({reason}); nothing ingested")
            }
            Self::NodeWithoutId { index } => write!(f, "node #{index} has no id; skipped"),
            Self::MalformedNode { index, reason } => {
                write!(f, "node #{index} is malformed ({reason}); skipped")
            }
            Self::DuplicateNodeId { id } => {
                write!(f, "node id {id} is repeated; the later record wins")
            }
            Self::MalformedEdge { index, reason } => {
                write!(f, "edge #{index} is malformed ({reason}); skipped")
            }
            Self::EdgeWithoutSource { index } => write!(f, "edge #{index} has no source"),
            Self::EdgeWithoutTargets { index, source } => {
                write!(f, "edge #{index} from {source} has no targets")
            }
            Self::DanglingEdge { source, target } => {
                write!(f, "edge {source} -> {target} references an unknown node")
            }
            Self::DuplicateEdge { source, target } => {
                write!(f, "edge {source} -> {target} is repeated")
            }
            Self::DuplicateLabel { label } => {
                write!(f, "label {label:?} is shared by several schedulable nodes")
            }
            Self::UnparsedTrl { node, value } => {
                write!(f, "node {node} has unparseable TRL {value:?}; using fallback duration")
            }
            Self::UnknownTrlBucket { node, value } => {
                write!(f, "node {node} has unknown TRL {value:?}; using default probability")
            }
            Self::CyclicDependency { node } => {
                write!(f, "prerequisites of {node} form a cycle; treated as unreachable")
            }
        }
    }
}
