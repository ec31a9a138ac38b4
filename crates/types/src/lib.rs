//! Core types for the tech tree scheduler.
//!
//! Everything that crosses a crate boundary lives here: node and edge
//! records in their canonical form, the per-year node status, the two
//! label-keyed result tables, and the structured diagnostics emitted when
//! input has to be degraded instead of rejected.
//!
//! # Overview
//!
//! ```text
//! Node ──┐
//!        ├──► techtree-graph ──► techtree-scheduler ──► ImpactTable
//! Edge ──┘         │                                    StatusTable
//!                  └──► Diagnostic ◄────────────────────┘
//! ```
//!
//! The TRL helpers in [`trl`] are shared by the deterministic scheduler and
//! the probabilistic sampler so both derive durations from the same tokens.

mod diagnostic;
mod identifiers;
mod node;
mod status;
mod tables;
pub mod trl;

pub use diagnostic::Diagnostic;
pub use identifiers::NodeId;
pub use node::{Edge, Node, NodeKind};
pub use status::Status;
pub use tables::{impact_records, ImpactTable, StatusTable, YearlyImpact, YearlyStatus};
