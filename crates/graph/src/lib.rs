//! Graph ingestion for the tech tree.
//!
//! This crate turns externally authored graph payloads into a canonical,
//! immutable [`TechTree`] and derives the two adjacency maps every later
//! stage depends on.
//!
//! # Pipeline
//!
//! ```text
//! JSON payload
//!   {graph:{nodes,edges}} | {nodes,edges}
//!   flat node attributes | nested `data.*` attributes
//!   `target` | `targets`
//!         │
//!         ▼
//! ┌──────────────────────────┐
//! │ payload::normalize       │  best effort, never fails
//! └────────────┬─────────────┘
//!              ▼
//! ┌──────────────────────────┐
//! │ DependencyIndex::build   │  dependencies (incoming)
//! │                          │  successors   (outgoing)
//! └────────────┬─────────────┘
//!              ▼
//!          TechTree  +  Vec<Diagnostic>
//! ```
//!
//! Irregular input (missing ids, dangling edges, odd field types) is dropped
//! or defaulted and reported as a [`Diagnostic`](techtree_types::Diagnostic).
//! Cycles are legal here; they are resolved lazily by the scheduler.

mod error;
mod index;
mod payload;
mod traversal;
mod tree;

pub use error::GraphError;
pub use index::DependencyIndex;
pub use payload::normalize_nodes;
pub use traversal::downstream_concepts;
pub use tree::TechTree;
