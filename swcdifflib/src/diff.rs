//! Per-component diffing between two mapping tables.
//!
//! Components are compared independently: a mapping extract aggregates
//! many unrelated components, and a global diff would conflate additions
//! across them. Every data shape (component present or absent on either
//! side) is a modeled outcome, not an error.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::record::Record;
use crate::table::Table;

/// Outcome of diffing one component between a baseline and a target table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiffOutcome {
    /// Component present on both sides; carries the target records not
    /// found (by exact tuple match) among the baseline's records
    Compared(Vec<Record>),
    /// Component present only in the target; carries all of its target
    /// records
    OnlyInTarget(Vec<Record>),
    /// Component present only in the baseline: no new ports
    OnlyInBaseline,
    /// Component present in neither table
    AbsentFromBoth,
}

impl DiffOutcome {
    /// Records considered new in the target, in target order
    pub fn new_records(&self) -> &[Record] {
        match self {
            DiffOutcome::Compared(records) | DiffOutcome::OnlyInTarget(records) => records,
            DiffOutcome::OnlyInBaseline | DiffOutcome::AbsentFromBoth => &[],
        }
    }

    /// Number of records considered new in the target
    pub fn new_count(&self) -> usize {
        self.new_records().len()
    }
}

/// Compute which of `component`'s records are new in `target` relative to
/// `baseline`.
///
/// A target record is "new" only when no baseline record of the same
/// component equals it in all three fields. Matching is exact tuple
/// equality, never per-column membership: a target row whose id happens to
/// match an unrelated baseline row's id is still new. Records carrying the
/// absent-field marker are excluded from [`DiffOutcome::Compared`]
/// results; [`DiffOutcome::OnlyInTarget`] carries the component's target
/// records verbatim.
pub fn diff_component(baseline: &Table, target: &Table, component: &str) -> DiffOutcome {
    let base = baseline.filter_by_component(component);
    let tgt = target.filter_by_component(component);

    match (base.is_empty(), tgt.is_empty()) {
        (false, false) => {
            let known: HashSet<&Record> = base.iter().collect();
            let new_records = tgt
                .iter()
                .filter(|r| r.is_complete() && !known.contains(*r))
                .cloned()
                .collect();
            DiffOutcome::Compared(new_records)
        }
        (true, false) => DiffOutcome::OnlyInTarget(tgt.records().to_vec()),
        (false, true) => DiffOutcome::OnlyInBaseline,
        (true, true) => DiffOutcome::AbsentFromBoth,
    }
}
