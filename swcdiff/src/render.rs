//! Rendering of export tables to terminal text, JSON, and CSV.

use std::path::Path;

use console::Style;
use swcdifflib::{ExportRow, ExportTable, Record, ReportSummary};

/// Output format selected with `--output`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Self {
        match value {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            _ => OutputFormat::Table,
        }
    }
}

/// Width of each column: the widest of header, data cells, and footer.
fn column_widths(table: &ExportTable) -> Vec<usize> {
    let mut widths: Vec<usize> = table.headers.iter().map(|h| h.len()).collect();
    for row in table.rows.iter().chain(std::iter::once(&table.footer)) {
        widths[0] = widths[0].max(row.label.len());
        for (i, value) in row.values.iter().enumerate() {
            widths[i + 1] = widths[i + 1].max(value.len());
        }
    }
    widths
}

fn format_cells(label: &str, values: &[String], widths: &[usize]) -> String {
    let mut line = format!("{:<width$}", label, width = widths[0]);
    for (i, value) in values.iter().enumerate() {
        line.push_str(&format!("  {:>width$}", value, width = widths[i + 1]));
    }
    line
}

fn format_row(row: &ExportRow, widths: &[usize]) -> String {
    format_cells(&row.label, &row.values, widths)
}

/// Render an export table as aligned terminal text: optional title, bold
/// header, data rows, separator, footer.
pub fn render_table(table: &ExportTable) -> String {
    let widths = column_widths(table);
    let emphasis = Style::new().bold();
    let mut out = String::new();

    if let Some(title) = &table.title {
        out.push_str(&format!("{}\n\n", emphasis.apply_to(title)));
    }

    let header = format_cells(&table.headers[0], &table.headers[1..], &widths);
    let separator = "-".repeat(header.len());

    out.push_str(&format!("{}\n", emphasis.apply_to(&header)));
    out.push_str(&separator);
    out.push('\n');
    for row in &table.rows {
        out.push_str(&format_row(row, &widths));
        out.push('\n');
    }
    out.push_str(&separator);
    out.push('\n');
    out.push_str(&format_row(&table.footer, &widths));
    out.push('\n');
    out
}

/// Render records as CSV text with the legacy `ID,PORT,SWC` columns, the
/// shape the tabular loader reads back.
pub fn records_to_csv(records: &[Record]) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    if records.is_empty() {
        writer.write_record(["ID", "PORT", "SWC"])?;
    }
    for record in records {
        writer.serialize(record)?;
    }
    let data = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&data).to_string())
}

/// Render a report summary as CSV text
pub fn summary_to_csv(summary: &ReportSummary) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(["SWC", "New Ports"])?;
    for entry in summary.entries() {
        writer.write_record([entry.component.clone(), entry.new_ports.to_string()])?;
    }
    let data = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&data).to_string())
}

/// Write records to a CSV artifact on disk
pub fn write_records_csv(records: &[Record], path: &Path) -> anyhow::Result<()> {
    std::fs::write(path, records_to_csv(records)?)?;
    Ok(())
}

/// Write a report summary to a CSV artifact on disk
pub fn write_summary_csv(summary: &ReportSummary, path: &Path) -> anyhow::Result<()> {
    std::fs::write(path, summary_to_csv(summary)?)?;
    Ok(())
}
