//! Table-ready export structures.
//!
//! This module provides [`ExportTable`], the presentation-ready shape
//! handed to exporters (terminal renderer, CSV writer, JSON serializer).
//! Field values pass through unchanged; counts are non-negative integers;
//! record rows carry a 1-based index label. Exporters iterate over
//! headers/rows/footer and apply formatting, no computation.

use serde::{Deserialize, Serialize};

use crate::record::Record;
use crate::report::ReportSummary;
use crate::table::Table;

/// A single row in an export table (data row or footer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    /// First-column label (row index, component name, or a total label)
    pub label: String,
    /// Remaining cell values, pre-stringified
    pub values: Vec<String>,
}

/// Presentation-ready table data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportTable {
    /// Optional heading (e.g. "New ports for Diag: a.xml → b.xml")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Column headers: [label_header, value1, value2, ...]
    pub headers: Vec<String>,
    /// Data rows
    pub rows: Vec<ExportRow>,
    /// Summary/footer row
    pub footer: ExportRow,
}

impl ExportTable {
    /// Build a record table with `#`/`ID`/`PORT`/`SWC` columns and row
    /// indices starting at 1.
    pub fn from_records(records: &[Record], title: Option<String>) -> Self {
        let rows = records
            .iter()
            .enumerate()
            .map(|(i, r)| ExportRow {
                label: (i + 1).to_string(),
                values: vec![r.id.clone(), r.port.clone(), r.component.clone()],
            })
            .collect();

        ExportTable {
            title,
            headers: vec![
                "#".to_string(),
                "ID".to_string(),
                "PORT".to_string(),
                "SWC".to_string(),
            ],
            rows,
            footer: ExportRow {
                label: format!("Total ({} ports)", records.len()),
                values: Vec::new(),
            },
        }
    }

    /// Build a record table from a whole mapping table
    pub fn from_table(table: &Table, title: Option<String>) -> Self {
        Self::from_records(table.records(), title)
    }

    /// Build a per-component summary table with `SWC`/`New Ports` columns
    pub fn from_summary(summary: &ReportSummary, title: Option<String>) -> Self {
        let rows = summary
            .entries()
            .iter()
            .map(|e| ExportRow {
                label: e.component.clone(),
                values: vec![e.new_ports.to_string()],
            })
            .collect();

        ExportTable {
            title,
            headers: vec!["SWC".to_string(), "New Ports".to_string()],
            rows,
            footer: ExportRow {
                label: format!("Total ({} SWCs)", summary.len()),
                values: vec![summary.total_new_ports().to_string()],
            },
        }
    }
}
