//! Headline numbers over an impact table.

use serde::{Deserialize, Serialize};
use std::fmt;
use techtree_types::ImpactTable;

/// Summary of an impact table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ImpactSummary {
    /// Labels in the table.
    pub total_techs: usize,
    /// Labels with any positive impact.
    pub active_techs: usize,
    /// Largest single impact (TWh), or 0.
    pub max_impact: f64,
    /// Labels with positive impact in the first simulated year.
    pub current_opportunities: usize,
}

impl ImpactSummary {
    pub fn from_table(table: &ImpactTable, first_year: i32) -> Self {
        Self {
            total_techs: table.len(),
            active_techs: table
                .values()
                .filter(|yearly| yearly.values().any(|impact| *impact > 0.0))
                .count(),
            max_impact: table
                .values()
                .flat_map(|yearly| yearly.values().copied())
                .fold(0.0, f64::max),
            current_opportunities: table
                .values()
                .filter(|yearly| yearly.get(&first_year).is_some_and(|impact| *impact > 0.0))
                .count(),
        }
    }
}

impl fmt::Display for ImpactSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} technologies, {} with impact, max {:.3} TWh, {} open this year",
            self.total_techs, self.active_techs, self.max_impact, self.current_opportunities
        )
    }
}
