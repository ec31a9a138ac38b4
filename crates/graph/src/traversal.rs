//! Reachability queries over the dependency index.

use crate::DependencyIndex;
use indexmap::{IndexMap, IndexSet};
use std::collections::VecDeque;
use techtree_types::{Node, NodeId};

/// Reactor concepts reachable from `start` along successor edges.
///
/// Breadth-first, so concepts come back in discovery order. `start` itself
/// is included when it is a reactor concept. Each node is visited once, so
/// cycles terminate.
pub fn downstream_concepts(
    start: &NodeId,
    nodes: &IndexMap<NodeId, Node>,
    index: &DependencyIndex,
) -> Vec<NodeId> {
    let mut visited: IndexSet<&NodeId> = IndexSet::new();
    let mut queue: VecDeque<&NodeId> = VecDeque::new();
    let mut concepts = Vec::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if nodes
            .get(current)
            .is_some_and(|node| node.kind.is_reactor_concept())
        {
            concepts.push(current.clone());
        }

        for next in index.successors(current) {
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    concepts
}

#[cfg(test)]
mod tests {
    use super::*;
    use techtree_types::{Edge, NodeKind};

    fn graph(specs: &[(&str, NodeKind)], edges: &[Edge]) -> (IndexMap<NodeId, Node>, DependencyIndex) {
        let nodes: IndexMap<NodeId, Node> = specs
            .iter()
            .map(|(id, kind)| (NodeId::from(*id), Node::new(*id, *id, kind.clone())))
            .collect();
        let index = DependencyIndex::build(&nodes, edges, &mut Vec::new());
        (nodes, index)
    }

    #[test]
    fn test_finds_concepts_through_intermediate_nodes() {
        let (nodes, index) = graph(
            &[
                ("m1", NodeKind::Milestone),
                ("et1", NodeKind::EnablingTechnology),
                ("c1", NodeKind::ReactorConcept),
                ("c2", NodeKind::ReactorConcept),
            ],
            &[Edge::single("m1", "et1"), Edge::fan_out("et1", ["c1", "c2"])],
        );

        let found = downstream_concepts(&"m1".into(), &nodes, &index);
        assert_eq!(found, vec![NodeId::from("c1"), NodeId::from("c2")]);
    }

    #[test]
    fn test_start_concept_is_included() {
        let (nodes, index) = graph(&[("c1", NodeKind::ReactorConcept)], &[]);
        assert_eq!(
            downstream_concepts(&"c1".into(), &nodes, &index),
            vec![NodeId::from("c1")]
        );
    }

    #[test]
    fn test_cycle_terminates() {
        let (nodes, index) = graph(
            &[
                ("a", NodeKind::Milestone),
                ("b", NodeKind::Milestone),
                ("c", NodeKind::ReactorConcept),
            ],
            &[
                Edge::single("a", "b"),
                Edge::single("b", "a"),
                Edge::single("b", "c"),
            ],
        );

        assert_eq!(
            downstream_concepts(&"a".into(), &nodes, &index),
            vec![NodeId::from("c")]
        );
    }

    #[test]
    fn test_unknown_start_has_no_concepts() {
        let (nodes, index) = graph(&[("a", NodeKind::Milestone)], &[]);
        assert!(downstream_concepts(&"ghost".into(), &nodes, &index).is_empty());
    }
}
