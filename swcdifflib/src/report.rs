//! Aggregated per-component diff summaries.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::diff::diff_component;
use crate::table::Table;

/// One summary line: a component and how many of its ports are new in the
/// target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Component name
    pub component: String,
    /// Number of new ports in the target
    pub new_ports: u64,
}

/// Per-component new-port counts across two tables.
///
/// Only components with a strictly positive count appear, in the order
/// they were first encountered while scanning the baseline's components
/// followed by components unique to the target. An empty summary is the
/// valid "no differences" outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    entries: Vec<ReportEntry>,
}

impl ReportSummary {
    /// The summary entries, in component-first-seen order
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Number of components with new ports
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no component gained ports
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of new-port counts over all components
    pub fn total_new_ports(&self) -> u64 {
        self.entries.iter().map(|e| e.new_ports).sum()
    }
}

/// Union of both tables' distinct components: the baseline's in first-seen
/// order, then the target-only ones in first-seen order.
fn component_union(baseline: &Table, target: &Table) -> Vec<String> {
    let mut names = baseline.components();
    let seen: HashSet<String> = names.iter().cloned().collect();
    for name in target.components() {
        if !seen.contains(&name) {
            names.push(name);
        }
    }
    names
}

/// Run the diff engine across every component present in either table and
/// collect the components that gained ports.
///
/// Infallible: the diff engine is total over data content, so the
/// aggregator is too.
pub fn aggregate(baseline: &Table, target: &Table) -> ReportSummary {
    let mut entries = Vec::new();
    for component in component_union(baseline, target) {
        let count = diff_component(baseline, target, &component).new_count();
        if count > 0 {
            entries.push(ReportEntry {
                component,
                new_ports: count as u64,
            });
        }
    }
    ReportSummary { entries }
}
