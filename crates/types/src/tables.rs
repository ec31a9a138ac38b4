//! Label-keyed result tables.
//!
//! Both tables are keyed by node label (not id) and hold one entry per
//! schedulable node, in input order. Years are calendar years.

use crate::Status;
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// Impact of one node per year, in reporting units (TWh). Sparse.
pub type YearlyImpact = BTreeMap<i32, f64>;

/// Status of one node per year. Dense over the simulated horizon.
pub type YearlyStatus = BTreeMap<i32, Status>;

/// label -> year -> impact.
pub type ImpactTable = IndexMap<String, YearlyImpact>;

/// label -> year -> status.
pub type StatusTable = IndexMap<String, YearlyStatus>;

/// Number of recorded node-years in an impact table.
pub fn impact_records(table: &ImpactTable) -> usize {
    table.values().map(|yearly| yearly.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impact_records_counts_node_years() {
        let mut table = ImpactTable::new();
        table.insert("A".into(), [(2030, 1.5), (2031, 0.2)].into_iter().collect());
        table.insert("B".into(), YearlyImpact::new());
        table.insert("C".into(), [(2030, 0.7)].into_iter().collect());

        assert_eq!(impact_records(&table), 3);
    }

    #[test]
    fn test_tables_serialize_years_as_keys() {
        let mut table = StatusTable::new();
        table.insert("A".into(), [(2030, Status::Active)].into_iter().collect());

        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"A":{"2030":"Active"}}"#);
    }
}
