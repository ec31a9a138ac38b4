//! Ingestion tests over the shared graph fixtures.

use std::collections::HashSet;
use techtree_graph::TechTree;
use techtree_test_helpers::{cycle_graph, min_graph, multi_target_graph, ts_like_graph};
use techtree_types::{Diagnostic, NodeId, NodeKind};

fn ids(list: &[NodeId]) -> HashSet<&str> {
    list.iter().map(NodeId::as_str).collect()
}

#[test]
fn test_multi_target_maps() {
    let tree = TechTree::from_value(multi_target_graph());

    assert_eq!(ids(tree.dependencies(&"et1".into())), HashSet::from(["m1", "m2"]));
    assert_eq!(ids(tree.dependencies(&"c1".into())), HashSet::from(["et1"]));
    assert_eq!(ids(tree.dependencies(&"c2".into())), HashSet::from(["et1"]));

    assert_eq!(tree.successors(&"m1".into()), &[NodeId::from("et1")]);
    assert_eq!(tree.successors(&"m2".into()), &[NodeId::from("et1")]);
    assert_eq!(ids(tree.successors(&"et1".into())), HashSet::from(["c1", "c2"]));
    assert!(tree.diagnostics().is_empty());
}

#[test]
fn test_nested_schema_matches_flat_schema() {
    let flat = TechTree::from_value(multi_target_graph());
    let nested = TechTree::from_value(ts_like_graph());

    let m1 = nested.node(&"m1".into()).unwrap();
    assert_eq!(m1.label, "M1");
    assert_eq!(m1.kind, NodeKind::Milestone);
    assert_eq!(nested.node(&"et1".into()).unwrap().kind, NodeKind::EnablingTechnology);

    assert_eq!(nested.nodes(), flat.nodes());
    assert_eq!(nested.index().dependency_map(), flat.index().dependency_map());
    assert_eq!(nested.index().successor_map(), flat.index().successor_map());
}

#[test]
fn test_maps_are_mutually_consistent() {
    for payload in [multi_target_graph(), ts_like_graph(), min_graph(), cycle_graph()] {
        let tree = TechTree::from_value(payload);

        for (source, targets) in tree.index().successor_map() {
            for target in targets {
                assert!(tree.dependencies(target).contains(source));
            }
        }
        for (target, sources) in tree.index().dependency_map() {
            for source in sources {
                assert!(tree.successors(source).contains(target));
            }
        }
        for id in tree.nodes().keys() {
            assert!(tree.index().dependency_map().contains_key(id));
            assert!(tree.index().successor_map().contains_key(id));
        }
    }
}

#[test]
fn test_downstream_concepts() {
    let tree = TechTree::from_value(multi_target_graph());

    assert_eq!(ids(&tree.downstream_concepts(&"m1".into())), HashSet::from(["c1", "c2"]));
    assert_eq!(ids(&tree.downstream_concepts(&"et1".into())), HashSet::from(["c1", "c2"]));
    assert_eq!(ids(&tree.downstream_concepts(&"c1".into())), HashSet::from(["c1"]));
}

#[test]
fn test_downstream_concepts_ignore_edge_order() {
    let mut payload = multi_target_graph();
    payload["edges"]
        .as_array_mut()
        .unwrap()
        .reverse();
    let reversed = TechTree::from_value(payload);
    let forward = TechTree::from_value(multi_target_graph());

    for id in forward.nodes().keys() {
        assert_eq!(
            ids(&forward.downstream_concepts(id)),
            ids(&reversed.downstream_concepts(id))
        );
    }
}

#[test]
fn test_cycles_are_accepted_at_load() {
    let tree = TechTree::from_value(cycle_graph());

    assert_eq!(tree.dependencies(&"a".into()), &[NodeId::from("b")]);
    assert_eq!(tree.dependencies(&"b".into()), &[NodeId::from("a")]);
    assert!(tree.diagnostics().is_empty());
}

#[test]
fn test_dangling_edge_is_dropped() {
    let mut payload = min_graph();
    payload["graph"]["edges"]
        .as_array_mut()
        .unwrap()
        .push(serde_json::json!({"source": "m1", "target": "ghost"}));

    let tree = TechTree::from_value(payload);

    assert_eq!(tree.successors(&"m1".into()), &[NodeId::from("c1")]);
    assert_eq!(
        tree.diagnostics(),
        &[Diagnostic::DanglingEdge {
            source: "m1".into(),
            target: "ghost".into()
        }]
    );
}

#[test]
fn test_from_reader_accepts_wrapped_document() {
    let raw = serde_json::to_vec(&min_graph()).unwrap();
    let tree = TechTree::from_reader(raw.as_slice()).unwrap();

    assert_eq!(tree.len(), 2);
    assert_eq!(tree.node(&"m1".into()).unwrap().label, "Milestone A");
}
