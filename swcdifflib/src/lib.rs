//! # swcdifflib
//!
//! A library for comparing SWC port-mapping extracts from automotive
//! signal-mapping configurations.
//!
//! ## Overview
//!
//! A mapping extract assigns identifiers ("IDs") and port names to owning
//! software components ("SWCs"). This library loads such extracts
//! (hierarchical XML documents or already-tabular CSV exports) into
//! ordered [`Table`]s of [`Record`]s, merges extracts with exact-duplicate
//! elimination, and computes, per software component, which ports are
//! newly present in one extract relative to the other.
//!
//! Components are diffed independently; each comparison yields one of four
//! modeled outcomes ([`DiffOutcome`]), so a component missing from either
//! side is a reportable result, never an error. [`aggregate`] runs the
//! diff across every component found in either table and collects the
//! components that gained ports.
//!
//! Presentation is out of scope: results are handed to exporters as
//! structured values ([`ExportTable`]) with all field values passed
//! through unchanged.
//!
//! ## Example
//!
//! ```rust
//! use std::fs;
//! use swcdifflib::{diff_component, load_table, DiffOutcome, SourceKind};
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let baseline = dir.path().join("dids_swc_mapping.xml");
//! fs::write(&baseline, "<MAPPING><ITEM><ID>4049</ID><PORTS>\
//!     <PORT><NAME>P_Read</NAME><SWC>Diag</SWC></PORT>\
//!     </PORTS></ITEM></MAPPING>").unwrap();
//! let target = dir.path().join("rids_swc_mapping.xml");
//! fs::write(&target, "<MAPPING><ITEM><ID>4049</ID><PORTS>\
//!     <PORT><NAME>P_Read</NAME><SWC>Diag</SWC></PORT>\
//!     <PORT><NAME>P_Write</NAME><SWC>Diag</SWC></PORT>\
//!     </PORTS></ITEM></MAPPING>").unwrap();
//!
//! let base = load_table(&baseline, SourceKind::Hierarchical).unwrap();
//! let tgt = load_table(&target, SourceKind::Hierarchical).unwrap();
//!
//! match diff_component(&base, &tgt, "Diag") {
//!     DiffOutcome::Compared(new_ports) => {
//!         assert_eq!(new_ports.len(), 1);
//!         assert_eq!(new_ports[0].port, "P_Write");
//!         assert_eq!(new_ports[0].id, "0x0FD1");
//!     }
//!     outcome => panic!("unexpected outcome: {outcome:?}"),
//! }
//! ```

pub mod diff;
pub mod error;
pub mod export;
pub mod loader;
pub mod record;
pub mod report;
pub mod table;

pub use diff::{diff_component, DiffOutcome};
pub use error::SwcDiffError;
pub use export::{ExportRow, ExportTable};
pub use loader::{load_table, SourceKind};
pub use record::{normalize_id, Record};
pub use report::{aggregate, ReportEntry, ReportSummary};
pub use table::Table;

/// Result type for swcdifflib operations
pub type Result<T> = std::result::Result<T, SwcDiffError>;
