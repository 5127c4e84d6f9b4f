//! # swcdiff
//!
//! A CLI tool for comparing SWC port-mapping extracts.
//!
//! ## Overview
//!
//! swcdiff is built on top of swcdifflib and works on signal-mapping
//! extracts: hierarchical XML documents (`.xml`) or already-tabular CSV
//! exports (`.csv`). It can dump and merge extracts, list the ports of one
//! software component, show the ports a component gained between two
//! extracts, and summarize new-port counts across all components.
//!
//! ## Usage
//!
//! ```bash
//! # Show the full port table of an extract
//! swcdiff view dids_swc_mapping.xml
//!
//! # Merge two extracts into one table (duplicates dropped)
//! swcdiff view dids_swc_mapping.xml rids_swc_mapping.xml
//!
//! # List every port of one component
//! swcdiff ports dids_swc_mapping.xml --swc Diag
//!
//! # Ports of Diag that are new in the target extract
//! swcdiff new-ports dids_swc_mapping.xml rids_swc_mapping.xml --swc Diag
//!
//! # Per-component summary of new ports, exported as CSV
//! swcdiff report dids_swc_mapping.xml rids_swc_mapping.xml --out report.csv
//!
//! # JSON instead of a table
//! swcdiff report old.xml new.xml --output json
//! ```

use std::path::Path;
use std::process::ExitCode;

use clap::{Arg, ArgMatches, Command};
use swcdifflib::{
    aggregate, diff_component, load_table, DiffOutcome, ExportTable, Record, ReportSummary,
    SourceKind, SwcDiffError, Table,
};

mod render;
use render::OutputFormat;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("swcdiff")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compare SWC port-mapping extracts and report new ports per software component")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("view")
                .about("Show the full port table of one or more sources, merged in order")
                .arg(
                    Arg::new("source")
                        .required(true)
                        .num_args(1..)
                        .help("Mapping sources (.xml or .csv); several are merged"),
                )
                .arg(output_arg())
                .arg(out_file_arg()),
        )
        .subcommand(
            Command::new("ports")
                .about("List every port owned by one SWC in a source")
                .arg(
                    Arg::new("source")
                        .required(true)
                        .help("Mapping source (.xml or .csv)"),
                )
                .arg(swc_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("new-ports")
                .about("Show the ports of one SWC that are new in the target extract")
                .arg(Arg::new("baseline").required(true).help("Baseline extract"))
                .arg(Arg::new("target").required(true).help("Target extract"))
                .arg(swc_arg())
                .arg(output_arg())
                .arg(out_file_arg()),
        )
        .subcommand(
            Command::new("report")
                .about("Summarize new-port counts per SWC across two extracts")
                .arg(Arg::new("baseline").required(true).help("Baseline extract"))
                .arg(Arg::new("target").required(true).help("Target extract"))
                .arg(output_arg())
                .arg(out_file_arg()),
        )
}

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .value_parser(["table", "json", "csv"])
        .default_value("table")
        .help("Output format")
}

fn out_file_arg() -> Arg {
    Arg::new("out")
        .short('o')
        .long("out")
        .value_name("FILE")
        .help("Also write the result as a CSV artifact")
}

fn swc_arg() -> Arg {
    Arg::new("swc")
        .short('s')
        .long("swc")
        .required(true)
        .help("Software component name (case sensitive)")
}

/// Load one source, deriving its kind from the file extension
fn load_source(path_str: &str) -> anyhow::Result<Table> {
    let path = Path::new(path_str);
    let kind = SourceKind::from_path(path)?;
    Ok(load_table(path, kind)?)
}

/// Two-source commands must not compare a file against itself
fn ensure_distinct(baseline: &str, target: &str) -> anyhow::Result<()> {
    if Path::new(baseline).file_name() == Path::new(target).file_name() {
        return Err(SwcDiffError::UnsupportedFormat {
            detail: format!("baseline and target share the file name '{baseline}'"),
        }
        .into());
    }
    Ok(())
}

fn output_format(matches: &ArgMatches) -> OutputFormat {
    matches
        .get_one::<String>("output")
        .map(|s| OutputFormat::parse(s))
        .unwrap_or(OutputFormat::Table)
}

/// Honor `--out` (when the subcommand has it), then render records in the
/// requested format
fn finish_records(
    matches: &ArgMatches,
    records: &[Record],
    title: Option<String>,
) -> anyhow::Result<String> {
    if let Ok(Some(out)) = matches.try_get_one::<String>("out") {
        render::write_records_csv(records, Path::new(out))?;
        eprintln!("=> CSV written: {out}");
    }
    match output_format(matches) {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&ExportTable::from_records(
            records, title,
        ))?),
        OutputFormat::Csv => render::records_to_csv(records),
        OutputFormat::Table => Ok(render::render_table(&ExportTable::from_records(
            records, title,
        ))),
    }
}

fn finish_summary(
    matches: &ArgMatches,
    summary: &ReportSummary,
    title: Option<String>,
) -> anyhow::Result<String> {
    if let Ok(Some(out)) = matches.try_get_one::<String>("out") {
        render::write_summary_csv(summary, Path::new(out))?;
        eprintln!("=> CSV written: {out}");
    }
    match output_format(matches) {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&ExportTable::from_summary(
            summary, title,
        ))?),
        OutputFormat::Csv => render::summary_to_csv(summary),
        OutputFormat::Table => Ok(render::render_table(&ExportTable::from_summary(
            summary, title,
        ))),
    }
}

/// Handler for the view command
fn view_handler(matches: &ArgMatches) -> anyhow::Result<String> {
    let sources: Vec<&str> = matches
        .get_many::<String>("source")
        .unwrap()
        .map(String::as_str)
        .collect();

    let mut table = load_source(sources[0])?;
    for source in &sources[1..] {
        table = table.merge(&load_source(source)?);
    }

    finish_records(matches, table.records(), None)
}

/// Handler for the ports command
fn ports_handler(matches: &ArgMatches) -> anyhow::Result<String> {
    let source = matches.get_one::<String>("source").unwrap();
    let swc = matches.get_one::<String>("swc").unwrap();

    let slice = load_source(source)?.filter_by_component(swc);
    if slice.is_empty() {
        return Ok(format!("No ports found for {swc}."));
    }

    let title = format!("Ports of {swc} in {source}");
    finish_records(matches, slice.records(), Some(title))
}

/// Handler for the new-ports command
fn new_ports_handler(matches: &ArgMatches) -> anyhow::Result<String> {
    let baseline_path = matches.get_one::<String>("baseline").unwrap();
    let target_path = matches.get_one::<String>("target").unwrap();
    let swc = matches.get_one::<String>("swc").unwrap();
    ensure_distinct(baseline_path, target_path)?;

    let baseline = load_source(baseline_path)?;
    let target = load_source(target_path)?;

    match diff_component(&baseline, &target, swc) {
        DiffOutcome::AbsentFromBoth => Ok(format!("SWC {swc} does not exist in either file")),
        DiffOutcome::OnlyInBaseline => Ok(format!("No new ports for {swc}")),
        DiffOutcome::Compared(records) if records.is_empty() => {
            Ok(format!("No new ports for {swc}"))
        }
        DiffOutcome::Compared(records) | DiffOutcome::OnlyInTarget(records) => {
            let title = format!("New ports for {swc}: {baseline_path} \u{2192} {target_path}");
            finish_records(matches, &records, Some(title))
        }
    }
}

/// Handler for the report command
fn report_handler(matches: &ArgMatches) -> anyhow::Result<String> {
    let baseline_path = matches.get_one::<String>("baseline").unwrap();
    let target_path = matches.get_one::<String>("target").unwrap();
    ensure_distinct(baseline_path, target_path)?;

    let baseline = load_source(baseline_path)?;
    let target = load_source(target_path)?;

    let summary = aggregate(&baseline, &target);
    if summary.is_empty() {
        return Ok("No changes detected between the two files.".to_string());
    }

    let title = format!("New ports per SWC: {baseline_path} \u{2192} {target_path}");
    finish_summary(matches, &summary, Some(title))
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    let result = match matches.subcommand() {
        Some(("view", sub)) => view_handler(sub),
        Some(("ports", sub)) => ports_handler(sub),
        Some(("new-ports", sub)) => new_ports_handler(sub),
        Some(("report", sub)) => report_handler(sub),
        _ => unreachable!("subcommand is required"),
    };

    match result {
        Ok(output) => {
            print!("{output}");
            if !output.ends_with('\n') {
                println!();
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
