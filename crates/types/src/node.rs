//! Canonical node and edge records.

use crate::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The role a node plays in the tech tree.
///
/// Only [`NodeKind::Milestone`] and [`NodeKind::EnablingTechnology`] are
/// scheduled; [`NodeKind::ReactorConcept`] nodes are where value is realized.
/// Any other type string is carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    Milestone,
    EnablingTechnology,
    ReactorConcept,
    /// Pass-through type carried as authored.
    Other(String),
    /// No type given.
    #[default]
    Untyped,
}

impl NodeKind {
    /// Parse a type label as found in input graphs.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Milestone" => Self::Milestone,
            "EnablingTechnology" => Self::EnablingTechnology,
            "ReactorConcept" => Self::ReactorConcept,
            "" => Self::Untyped,
            other => Self::Other(other.to_string()),
        }
    }

    /// The type label used in input and output graphs.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Milestone => "Milestone",
            Self::EnablingTechnology => "EnablingTechnology",
            Self::ReactorConcept => "ReactorConcept",
            Self::Other(label) => label,
            Self::Untyped => "",
        }
    }

    /// Whether nodes of this kind advance year by year and receive impact.
    pub fn is_schedulable(&self) -> bool {
        matches!(self, Self::Milestone | Self::EnablingTechnology)
    }

    /// Whether this node is a terminal reactor concept.
    pub fn is_reactor_concept(&self) -> bool {
        matches!(self, Self::ReactorConcept)
    }
}

impl From<String> for NodeKind {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node in the tech tree graph.
///
/// This is the canonical, immutable record. Simulation state (time remaining,
/// probability of success, completion) is kept separately by the scheduler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identity.
    pub id: NodeId,

    /// Display name; the key of every result table.
    #[serde(default)]
    pub label: String,

    /// Node role.
    #[serde(rename = "type", default)]
    pub kind: NodeKind,

    /// Current technology readiness, e.g. `"6"`, `"5-6"` or
    /// `"5-6 (Tokamaks); 2-3 (Stellarators)"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trl_current: Option<String>,

    /// Projected readiness in 5-10 years. Its presence alone shortens the
    /// duration estimate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trl_projected_5_10_years: Option<String>,
}

impl Node {
    /// Create a node without TRL metadata.
    pub fn new(id: impl Into<NodeId>, label: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            trl_current: None,
            trl_projected_5_10_years: None,
        }
    }

    /// Set the current TRL.
    pub fn with_trl(mut self, trl: impl Into<String>) -> Self {
        self.trl_current = Some(trl.into());
        self
    }

    /// Set the projected TRL.
    pub fn with_projected_trl(mut self, trl: impl Into<String>) -> Self {
        self.trl_projected_5_10_years = Some(trl.into());
        self
    }
}

/// Directed edge in the tech tree.
///
/// Input graphs use either a single `target` or a fan-out list `targets`;
/// both are kept as authored and unified by [`Edge::resolved_targets`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Edge {
    /// Prerequisite end of the edge.
    #[serde(default)]
    pub source: Option<NodeId>,

    /// Single dependent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<NodeId>,

    /// Fan-out dependents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<NodeId>>,
}

impl Edge {
    /// Edge with a single target.
    pub fn single(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            source: Some(source.into()),
            target: Some(target.into()),
            targets: None,
        }
    }

    /// Edge fanning out to several targets.
    pub fn fan_out<I, T>(source: impl Into<NodeId>, targets: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<NodeId>,
    {
        Self {
            source: Some(source.into()),
            target: None,
            targets: Some(targets.into_iter().map(Into::into).collect()),
        }
    }

    /// The source id, if present and non-empty.
    pub fn source(&self) -> Option<&NodeId> {
        self.source.as_ref().filter(|id| !id.is_empty())
    }

    /// Non-empty target ids.
    ///
    /// A non-empty `targets` list wins; otherwise the single `target` is used.
    pub fn resolved_targets(&self) -> Vec<&NodeId> {
        match self.targets.as_deref() {
            Some(targets) if !targets.is_empty() => {
                targets.iter().filter(|id| !id.is_empty()).collect()
            }
            _ => self.target.iter().filter(|id| !id.is_empty()).collect(),
        }
    }
}
