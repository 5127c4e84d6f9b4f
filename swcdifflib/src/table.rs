//! Ordered record tables with merge and component filtering.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// An ordered sequence of mapping records.
///
/// Insertion order reflects source document traversal order: outer items in
/// document order, inner ports in document order within each item. Tables
/// are never mutated after construction; [`merge`](Table::merge) and
/// [`filter_by_component`](Table::filter_by_component) return new values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from records, preserving their order
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// The records in this table, in insertion order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterate over records in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the table holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True when an identical record (all three fields) is present
    pub fn contains(&self, record: &Record) -> bool {
        self.records.contains(record)
    }

    /// Combine two tables into a new one.
    ///
    /// Records of `self` come first, then records of `other`; exact
    /// duplicates (all three fields equal) are dropped, keeping the first
    /// occurrence. The result is commutative as a set but not in record
    /// ordering: the first operand's records win their positions.
    pub fn merge(&self, other: &Table) -> Table {
        let mut seen: HashSet<&Record> = HashSet::new();
        let mut merged = Vec::with_capacity(self.records.len() + other.records.len());
        for record in self.records.iter().chain(other.records.iter()) {
            if seen.insert(record) {
                merged.push(record.clone());
            }
        }
        Table { records: merged }
    }

    /// The sub-sequence of records owned by `component` (exact,
    /// case-sensitive match), relative order preserved. An empty table is
    /// returned when nothing matches.
    pub fn filter_by_component(&self, component: &str) -> Table {
        Table {
            records: self
                .records
                .iter()
                .filter(|r| r.component == component)
                .cloned()
                .collect(),
        }
    }

    /// Distinct component names in first-seen order
    pub fn components(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for record in &self.records {
            if seen.insert(record.component.as_str()) {
                names.push(record.component.clone());
            }
        }
        names
    }
}
