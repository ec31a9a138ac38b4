//! Raw payload shapes and their normalization.
//!
//! Graphs arrive from hand-edited files and from a web editor, so the same
//! information shows up in several shapes:
//!
//! - wrapped `{graph: {nodes, edges}}` or flat `{nodes, edges}`
//! - node attributes at the top level (`label`, `type`, `trl_current`) or
//!   nested under `data` (`label`, `nodeLabel`, `trl_current`)
//! - scalar fields as strings, numbers or booleans
//!
//! Every field is optional and every unknown field is ignored.

use serde::Deserialize;
use serde_json::Value;
use techtree_types::{Diagnostic, Edge, Node, NodeId, NodeKind};
use tracing::warn;

/// A loosely typed scalar field.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
    /// Arrays, objects: present but unusable.
    Other(serde::de::IgnoredAny),
}

impl Scalar {
    /// Text form, or `None` for empty, false or unusable values.
    fn into_text(self) -> Option<String> {
        match self {
            Scalar::Text(text) if !text.is_empty() => Some(text),
            Scalar::Text(_) => None,
            Scalar::Number(number) => Some(number.to_string()),
            Scalar::Flag(true) => Some("true".to_string()),
            Scalar::Flag(false) | Scalar::Other(_) => None,
        }
    }
}

fn text(field: Option<Scalar>) -> Option<String> {
    field.and_then(Scalar::into_text)
}

#[derive(Debug, Default, Deserialize)]
struct RawNodeData {
    #[serde(default)]
    label: Option<Scalar>,
    #[serde(default, rename = "nodeLabel")]
    node_label: Option<Scalar>,
    #[serde(default)]
    trl_current: Option<Scalar>,
    #[serde(default)]
    trl_projected_5_10_years: Option<Scalar>,
}

#[derive(Debug, Default, Deserialize)]
struct RawNode {
    #[serde(default)]
    id: Option<Scalar>,
    #[serde(default)]
    label: Option<Scalar>,
    #[serde(default, rename = "type")]
    kind: Option<Scalar>,
    #[serde(default)]
    trl_current: Option<Scalar>,
    #[serde(default)]
    trl_projected_5_10_years: Option<Scalar>,
    #[serde(default)]
    data: Option<Value>,
}

impl RawNode {
    /// Resolve into a canonical node, preferring nested `data.*` attributes.
    fn into_node(self) -> Option<Node> {
        let id = NodeId::new(text(self.id)?);

        let data = self
            .data
            .filter(Value::is_object)
            .and_then(|data| serde_json::from_value::<RawNodeData>(data).ok());

        let (label, kind, trl_current, trl_projected) = match data {
            Some(data) => (
                text(data.label).or_else(|| text(self.label)),
                text(data.node_label).or_else(|| text(self.kind)),
                text(data.trl_current).or_else(|| text(self.trl_current)),
                text(data.trl_projected_5_10_years)
                    .or_else(|| text(self.trl_projected_5_10_years)),
            ),
            None => (
                text(self.label),
                text(self.kind),
                text(self.trl_current),
                text(self.trl_projected_5_10_years),
            ),
        };

        Some(Node {
            label: label.unwrap_or_else(|| id.to_string()),
            kind: kind.map(|k| NodeKind::from_label(&k)).unwrap_or_default(),
            trl_current,
            trl_projected_5_10_years: trl_projected,
            id,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawEdge {
    #[serde(default)]
    source: Option<Scalar>,
    #[serde(default)]
    target: Option<Scalar>,
    #[serde(default)]
    targets: Option<Value>,
}

impl RawEdge {
    fn into_edge(self) -> Edge {
        let targets = match self.targets {
            Some(Value::Array(items)) => Some(
                items
                    .into_iter()
                    .filter_map(|item| serde_json::from_value::<Scalar>(item).ok())
                    .filter_map(Scalar::into_text)
                    .map(NodeId::new)
                    .collect(),
            ),
            _ => None,
        };

        Edge {
            source: text(self.source).map(NodeId::new),
            target: text(self.target).map(NodeId::new),
            targets,
        }
    }
}

/// Normalized nodes and edges, in input order.
#[derive(Debug, Default)]
pub(crate) struct NormalizedGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

pub(crate) fn record(diagnostics: &mut Vec<Diagnostic>, diagnostic: Diagnostic) {
    warn!(%diagnostic, "Degraded graph input");
    diagnostics.push(diagnostic);
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Normalize a graph payload.
///
/// Accepts either `{graph: {nodes, edges}}` or `{nodes, edges}`. Missing
/// lists are treated as empty.
pub(crate) fn normalize(payload: Value, diagnostics: &mut Vec<Diagnostic>) -> NormalizedGraph {
    let Value::Object(mut root) = payload else {
        record(
            diagnostics,
            Diagnostic::MalformedPayload {
                reason: format!("expected an object, found {}", value_kind(&payload)),
            },
        );
        return NormalizedGraph::default();
    };

    let mut graph = match root.remove("graph") {
        Some(Value::Object(inner)) => inner,
        Some(other) => {
            record(
                diagnostics,
                Diagnostic::MalformedPayload {
                    reason: format!("`graph` is {}", value_kind(&other)),
                },
            );
            return NormalizedGraph::default();
        }
        None => root,
    };

    let nodes = take_list(&mut graph, "nodes")
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| normalize_node(index, value, diagnostics))
        .collect();

    let edges = take_list(&mut graph, "edges")
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| normalize_edge(index, value, diagnostics))
        .collect();

    NormalizedGraph { nodes, edges }
}

fn take_list(graph: &mut serde_json::Map<String, Value>, key: &str) -> Vec<Value> {
    match graph.remove(key) {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    }
}

fn normalize_node(index: usize, value: Value, diagnostics: &mut Vec<Diagnostic>) -> Option<Node> {
    if !value.is_object() {
        record(
            diagnostics,
            Diagnostic::MalformedNode {
                index,
                reason: format!("expected an object, found {}", value_kind(&value)),
            },
        );
        return None;
    }

    let raw = match serde_json::from_value::<RawNode>(value) {
        Ok(raw) => raw,
        Err(e) => {
            record(
                diagnostics,
                Diagnostic::MalformedNode {
                    index,
                    reason: e.to_string(),
                },
            );
            return None;
        }
    };

    let node = raw.into_node();
    if node.is_none() {
        record(diagnostics, Diagnostic::NodeWithoutId { index });
    }
    node
}

fn normalize_edge(index: usize, value: Value, diagnostics: &mut Vec<Diagnostic>) -> Option<Edge> {
    if !value.is_object() {
        record(
            diagnostics,
            Diagnostic::MalformedEdge {
                index,
                reason: format!("expected an object, found {}", value_kind(&value)),
            },
        );
        return None;
    }

    match serde_json::from_value::<RawEdge>(value) {
        Ok(raw) => Some(raw.into_edge()),
        Err(e) => {
            record(
                diagnostics,
                Diagnostic::MalformedEdge {
                    index,
                    reason: e.to_string(),
                },
            );
            None
        }
    }
}

/// Normalize a node list such as a sampler chain.
///
/// Accepts a bare array of node records or an object with a `nodes` list.
/// Records get the same tolerance as graph nodes: nested `data.*`
/// attributes, numeric fields, and the id as fallback label.
pub fn normalize_nodes(payload: Value, diagnostics: &mut Vec<Diagnostic>) -> Vec<Node> {
    let items = match payload {
        Value::Array(items) => items,
        Value::Object(mut root) => take_list(&mut root, "nodes"),
        other => {
            record(
                diagnostics,
                Diagnostic::MalformedPayload {
                    reason: format!("expected a node list, found {}", value_kind(&other)),
                },
            );
            return Vec::new();
        }
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| normalize_node(index, value, diagnostics))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flat_and_wrapped_shapes_are_equivalent() {
        let flat = json!({
            "nodes": [{"id": "m1", "label": "M1", "type": "Milestone", "trl_current": "6"}],
            "edges": [{"source": "m1", "target": "c1"}],
        });
        let wrapped = json!({ "graph": flat.clone() });

        let a = normalize(flat, &mut Vec::new());
        let b = normalize(wrapped, &mut Vec::new());

        assert_eq!(a.nodes, b.nodes);
        assert_eq!(a.edges, b.edges);
        assert_eq!(a.nodes[0].kind, NodeKind::Milestone);
    }

    #[test]
    fn test_nested_data_attributes() {
        let graph = normalize(
            json!({"nodes": [{
                "id": "et1",
                "data": {"label": "ET1", "nodeLabel": "EnablingTechnology", "trl_current": "4"}
            }]}),
            &mut Vec::new(),
        );

        let node = &graph.nodes[0];
        assert_eq!(node.label, "ET1");
        assert_eq!(node.kind, NodeKind::EnablingTechnology);
        assert_eq!(node.trl_current.as_deref(), Some("4"));
    }

    #[test]
    fn test_label_defaults_to_id_and_numbers_become_text() {
        let graph = normalize(
            json!({"nodes": [{"id": 7, "type": "Milestone", "trl_current": 6, "extra": [1, 2]}]}),
            &mut Vec::new(),
        );

        let node = &graph.nodes[0];
        assert_eq!(node.id.as_str(), "7");
        assert_eq!(node.label, "7");
        assert_eq!(node.trl_current.as_deref(), Some("6"));
    }

    #[test]
    fn test_false_projection_is_absent() {
        let graph = normalize(
            json!({"nodes": [
                {"id": "a", "trl_projected_5_10_years": false},
                {"id": "b", "trl_projected_5_10_years": "7"},
                {"id": "c", "trl_projected_5_10_years": ""},
            ]}),
            &mut Vec::new(),
        );

        let projected: Vec<bool> = graph
            .nodes
            .iter()
            .map(|n| n.trl_projected_5_10_years.is_some())
            .collect();
        assert_eq!(projected, vec![false, true, false]);
    }

    #[test]
    fn test_irregular_records_are_reported_not_fatal() {
        let mut diagnostics = Vec::new();
        let graph = normalize(
            json!({
                "nodes": [{"label": "no id"}, "oops", {"id": "m1"}],
                "edges": [42, {"source": "m1", "targets": ["c1", null, 3]}],
            }),
            &mut diagnostics,
        );

        assert_eq!(graph.nodes.len(), 1);
        assert_eq!(graph.edges.len(), 1);
        assert_eq!(
            graph.edges[0].targets,
            Some(vec![NodeId::from("c1"), NodeId::from("3")])
        );
        assert_eq!(diagnostics.len(), 3);
        assert!(matches!(diagnostics[0], Diagnostic::NodeWithoutId { index: 0 }));
        assert!(matches!(diagnostics[1], Diagnostic::MalformedNode { index: 1, .. }));
        assert!(matches!(diagnostics[2], Diagnostic::MalformedEdge { index: 0, .. }));
    }

    #[test]
    fn test_non_object_payload_yields_empty_graph() {
        let mut diagnostics = Vec::new();
        let graph = normalize(json!([1, 2, 3]), &mut diagnostics);

        assert!(graph.nodes.is_empty());
        assert!(graph.edges.is_empty());
        assert!(matches!(diagnostics[0], Diagnostic::MalformedPayload { .. }));
    }

    #[test]
    fn test_structured_field_values_are_ignored() {
        let graph = normalize(
            json!({"nodes": [{"id": "m1", "label": ["M", "1"], "trl_current": {"level": 6}}]}),
            &mut Vec::new(),
        );

        let node = &graph.nodes[0];
        assert_eq!(node.label, "m1");
        assert_eq!(node.trl_current, None);
    }

    #[test]
    fn test_node_lists_accept_both_attribute_shapes() {
        let mut diagnostics = Vec::new();
        let nodes = normalize_nodes(
            json!([
                {"id": "m1", "data": {"label": "Milestone A", "nodeLabel": "Milestone", "trl_current": "6"}},
                {"id": "m2", "type": "Milestone", "trl_current": "5"},
                {"id": "c1", "type": "ReactorConcept"},
            ]),
            &mut diagnostics,
        );

        assert!(diagnostics.is_empty());
        let labels: Vec<&str> = nodes.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["Milestone A", "m2", "c1"]);
        assert_eq!(nodes[0].kind, NodeKind::Milestone);
        assert_eq!(nodes[0].trl_current.as_deref(), Some("6"));

        let wrapped = normalize_nodes(
            json!({"nodes": [{"id": "m2", "type": "Milestone"}]}),
            &mut diagnostics,
        );
        assert_eq!(wrapped[0].id.as_str(), "m2");
    }

    #[test]
    fn test_node_list_must_be_a_list() {
        let mut diagnostics = Vec::new();
        assert!(normalize_nodes(json!("chain"), &mut diagnostics).is_empty());
        assert!(matches!(diagnostics.as_slice(), [Diagnostic::MalformedPayload { .. }]));
    }
}
