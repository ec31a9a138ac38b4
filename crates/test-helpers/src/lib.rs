//! Shared fixtures for tech tree tests.
//!
//! Graph fixtures are returned as raw JSON payloads so each test exercises
//! the same ingestion path as real input files.

use serde_json::{json, Value};
use techtree_types::{Node, NodeKind};

/// Prerequisites plus a fan-out edge, flat attribute schema.
///
/// ```text
/// m1 ─┐
///     ├─> et1 ──> {c1, c2}
/// m2 ─┘
/// ```
pub fn multi_target_graph() -> Value {
    json!({
        "nodes": [
            {"id": "m1", "label": "M1", "type": "Milestone", "trl_current": "6"},
            {"id": "m2", "label": "M2", "type": "Milestone", "trl_current": "5"},
            {"id": "et1", "label": "ET1", "type": "EnablingTechnology", "trl_current": "4"},
            {"id": "c1", "label": "Concept 1", "type": "ReactorConcept"},
            {"id": "c2", "label": "Concept 2", "type": "ReactorConcept"},
        ],
        "edges": [
            {"source": "m1", "target": "et1"},
            {"source": "m2", "target": "et1"},
            {"source": "et1", "targets": ["c1", "c2"]},
        ],
    })
}

/// Same topology as [`multi_target_graph`], attributes nested under `data`.
pub fn ts_like_graph() -> Value {
    json!({
        "nodes": [
            {"id": "m1", "data": {"label": "M1", "nodeLabel": "Milestone", "trl_current": "6"}},
            {"id": "m2", "data": {"label": "M2", "nodeLabel": "Milestone", "trl_current": "5"}},
            {"id": "et1", "data": {"label": "ET1", "nodeLabel": "EnablingTechnology", "trl_current": "4"}},
            {"id": "c1", "data": {"label": "Concept 1", "nodeLabel": "ReactorConcept"}},
            {"id": "c2", "data": {"label": "Concept 2", "nodeLabel": "ReactorConcept"}},
        ],
        "edges": [
            {"source": "m1", "target": "et1"},
            {"source": "m2", "target": "et1"},
            {"source": "et1", "targets": ["c1", "c2"]},
        ],
    })
}

/// One milestone feeding one concept, wrapped in `graph`.
pub fn min_graph() -> Value {
    json!({
        "graph": {
            "nodes": [
                {"id": "m1", "label": "Milestone A", "type": "Milestone", "trl_current": "5"},
                {"id": "c1", "label": "Concept 1", "type": "ReactorConcept", "trl_current": "7"},
            ],
            "edges": [
                {"source": "m1", "target": "c1"},
            ],
        }
    })
}

/// Two milestones that require each other.
pub fn cycle_graph() -> Value {
    json!({
        "nodes": [
            {"id": "a", "label": "A", "type": "Milestone"},
            {"id": "b", "label": "B", "type": "Milestone"},
        ],
        "edges": [
            {"source": "a", "target": "b"},
            {"source": "b", "target": "a"},
        ],
    })
}

/// Milestones leading to a reactor concept, for the sampler.
pub fn basic_chain() -> Vec<Node> {
    vec![
        Node::new("m1", "M1", NodeKind::Milestone).with_trl("6"),
        Node::new("m2", "M2", NodeKind::Milestone).with_trl("5"),
        Node::new("c1", "Concept 1", NodeKind::ReactorConcept),
    ]
}
