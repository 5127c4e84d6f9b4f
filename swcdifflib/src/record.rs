//! The atomic mapping record: one (identifier, port, component) triple.

use serde::{Deserialize, Serialize};

use crate::error::SwcDiffError;
use crate::Result;

/// One row of a mapping extract.
///
/// Field names serialize as the legacy column names (`ID`, `PORT`, `SWC`)
/// so tabular artifacts round-trip with previously exported reports.
/// Records are immutable once constructed; comparison is exact and
/// case-sensitive on all three fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Normalized identifier (e.g. `0x0FD1`)
    #[serde(rename = "ID")]
    pub id: String,
    /// Port name
    #[serde(rename = "PORT")]
    pub port: String,
    /// Owning software component
    #[serde(rename = "SWC")]
    pub component: String,
}

impl Record {
    /// Marker substituted for fields missing from a source document.
    ///
    /// It is a value, not an error: loaders emit it instead of failing the
    /// whole load, and the diff engine filters records carrying it out of
    /// compared results.
    pub const ABSENT: &'static str = "<absent>";

    /// Create a new record
    pub fn new(
        id: impl Into<String>,
        port: impl Into<String>,
        component: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            port: port.into(),
            component: component.into(),
        }
    }

    /// True when no field carries the absent marker
    pub fn is_complete(&self) -> bool {
        self.id != Self::ABSENT && self.port != Self::ABSENT && self.component != Self::ABSENT
    }
}

/// Normalize a raw identifier into its canonical rendering: parsed as an
/// unsigned integer, re-rendered as uppercase hexadecimal, zero-padded to
/// at least four digits, `0x`-prefixed (`4049` becomes `0x0FD1`).
///
/// Existing reports depend on this exact rendering.
pub fn normalize_id(raw: &str) -> Result<String> {
    let value: u64 = raw
        .trim()
        .parse()
        .map_err(|_| SwcDiffError::MalformedField {
            field: "ID".to_string(),
            value: raw.to_string(),
        })?;
    Ok(format!("0x{value:04X}"))
}
