//! Deterministic tech tree scheduler.
//!
//! Given a [`TechTree`](techtree_graph::TechTree), the scheduler steps
//! through calendar years, allocating one unit of effort to every unblocked
//! milestone and enabling technology, and measures the marginal value of
//! one extra year of effort on each of them.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       Scheduler                          │
//! │                                                          │
//! │  TechTree ──► InitialEstimate ──► Snapshot (initial)     │
//! │                                        │ clone per run   │
//! │                                        ▼                 │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │  for each year:                                    │  │
//! │  │    status pass   Pending / Active / Completed      │  │
//! │  │    impact pass   baseline vs Snapshot::accelerated │  │
//! │  │                  critical_path::evaluate           │  │
//! │  │                  (fresh EvalContext per batch)     │  │
//! │  │                  valuation::discounted_mwh         │  │
//! │  └────────────────────────────────────────────────────┘  │
//! │                         │                                │
//! │                         ▼                                │
//! │                   ScheduleReport                         │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The scheduler never fails. Degraded input shows up as
//! [`Diagnostic`](techtree_types::Diagnostic)s in the report.

mod config;
pub mod critical_path;
mod estimate;
mod scheduler;
mod state;
pub mod valuation;

pub use config::{this_year, EconomicConfig, SchedulerConfig, TrlTable};
pub use critical_path::{EvalContext, PathEstimate};
pub use estimate::{initial_duration, initial_probability, InitialEstimate};
pub use scheduler::{ScheduleReport, Scheduler, CHECKED_YEARS};
pub use state::{NodeState, Snapshot};
