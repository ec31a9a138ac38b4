//! Built-in inputs used when no file is given.

use serde_json::{json, Value};
use techtree_types::{Node, NodeKind};

/// Two milestones gating one enabling technology that feeds two concepts.
pub fn demo_graph() -> Value {
    json!({
        "nodes": [
            {"id": "m1", "label": "Milestone A", "type": "Milestone", "trl_current": "6"},
            {"id": "m2", "label": "Milestone B", "type": "Milestone", "trl_current": "5"},
            {"id": "et1", "label": "HT Materials", "type": "EnablingTechnology", "trl_current": "4"},
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

/// Two milestones leading to a single concept.
pub fn demo_chain() -> Vec<Node> {
    vec![
        Node::new("m1", "Milestone A", NodeKind::Milestone).with_trl("6"),
        Node::new("m2", "Milestone B", NodeKind::Milestone).with_trl("5"),
        Node::new("c1", "Concept 1", NodeKind::ReactorConcept),
    ]
}
