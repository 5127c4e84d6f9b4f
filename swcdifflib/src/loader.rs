//! Loading mapping sources into tables.
//!
//! Two source shapes are understood:
//!
//! - **Hierarchical** (XML): a root element holding `ITEM` elements, each
//!   with an `ID` child and a `PORTS` child of `PORT` elements carrying
//!   `NAME` and `SWC`. One record is emitted per (item, port) pair, in
//!   document order, with identifiers hex-normalized.
//! - **Tabular** (CSV): one `ID,PORT,SWC` row per record, read as-is.
//!   Identifiers are assumed to be already normalized by a prior export
//!   and are not re-normalized.
//!
//! A missing identifier, name, or component field yields the absent-field
//! marker rather than failing the whole load; only structurally corrupt
//! documents are errors.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::SwcDiffError;
use crate::record::{normalize_id, Record};
use crate::table::Table;
use crate::Result;

/// The kind of a mapping source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// XML-like tree of items with nested ports
    Hierarchical,
    /// One row per (id, port, component) triple
    Tabular,
}

impl SourceKind {
    /// Derive the source kind from a file extension: `.xml` is
    /// hierarchical, `.csv` is tabular, anything else is unsupported.
    pub fn from_path(path: &Path) -> Result<SourceKind> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("xml") => Ok(SourceKind::Hierarchical),
            Some("csv") => Ok(SourceKind::Tabular),
            _ => Err(SwcDiffError::UnsupportedFormat {
                detail: format!(
                    "'{}' is neither a hierarchical (.xml) nor a tabular (.csv) source",
                    path.display()
                ),
            }),
        }
    }
}

/// Load one mapping source into a table.
///
/// The only side effect is reading the file. A missing file is
/// `SourceNotFound`; a document that cannot be parsed at all is
/// `SourceParse`. Field-level problems do not fail the load (see the
/// module docs).
pub fn load_table(path: impl AsRef<Path>, kind: SourceKind) -> Result<Table> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(SwcDiffError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| SwcDiffError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    match kind {
        SourceKind::Hierarchical => parse_hierarchical(path, &content),
        SourceKind::Tabular => parse_tabular(path, &content),
    }
}

#[derive(Debug, Deserialize)]
struct MappingDoc {
    #[serde(rename = "ITEM", default)]
    items: Vec<ItemNode>,
}

#[derive(Debug, Deserialize)]
struct ItemNode {
    #[serde(rename = "ID")]
    id: Option<String>,
    #[serde(rename = "PORTS")]
    ports: Option<PortsNode>,
}

#[derive(Debug, Deserialize)]
struct PortsNode {
    #[serde(rename = "PORT", default)]
    ports: Vec<PortNode>,
}

#[derive(Debug, Deserialize)]
struct PortNode {
    #[serde(rename = "NAME")]
    name: Option<String>,
    #[serde(rename = "SWC")]
    swc: Option<String>,
}

fn parse_hierarchical(path: &Path, content: &str) -> Result<Table> {
    let doc: MappingDoc =
        quick_xml::de::from_str(content).map_err(|e| SwcDiffError::SourceParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut records = Vec::new();
    for item in &doc.items {
        // A non-numeric identifier degrades to the absent marker; the rest
        // of the item's ports still load.
        let id = match &item.id {
            Some(raw) => normalize_id(raw).unwrap_or_else(|_| Record::ABSENT.to_string()),
            None => Record::ABSENT.to_string(),
        };

        let Some(ports) = &item.ports else {
            continue;
        };
        for port in &ports.ports {
            records.push(Record::new(
                id.clone(),
                field_or_absent(port.name.clone()),
                field_or_absent(port.swc.clone()),
            ));
        }
    }
    Ok(Table::from_records(records))
}

#[derive(Debug, Deserialize)]
struct TabularRow {
    #[serde(rename = "ID")]
    id: Option<String>,
    #[serde(rename = "PORT")]
    port: Option<String>,
    #[serde(rename = "SWC")]
    swc: Option<String>,
}

fn parse_tabular(path: &Path, content: &str) -> Result<Table> {
    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let mut records = Vec::new();
    for row in reader.deserialize::<TabularRow>() {
        let row = row.map_err(|e| SwcDiffError::SourceParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        records.push(Record::new(
            field_or_absent(row.id),
            field_or_absent(row.port),
            field_or_absent(row.swc),
        ));
    }
    Ok(Table::from_records(records))
}

fn field_or_absent(value: Option<String>) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => Record::ABSENT.to_string(),
    }
}
