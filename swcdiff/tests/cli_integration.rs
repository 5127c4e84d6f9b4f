//! Integration tests for swcdiff CLI

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

fn run_swcdiff(args: &[&str]) -> (String, String, bool) {
    let mut cmd_args = vec!["run", "-p", "swcdiff", "--"];
    cmd_args.extend(args);

    let output = Command::new("cargo")
        .args(&cmd_args)
        .current_dir(env!("CARGO_MANIFEST_DIR").to_string() + "/..")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

const BASELINE_XML: &str = r#"<MAPPING>
    <ITEM>
        <ID>1</ID>
        <PORTS>
            <PORT><NAME>P1</NAME><SWC>Diag</SWC></PORT>
            <PORT><NAME>P2</NAME><SWC>Diag</SWC></PORT>
        </PORTS>
    </ITEM>
    <ITEM>
        <ID>4049</ID>
        <PORTS>
            <PORT><NAME>P_Tx</NAME><SWC>Com</SWC></PORT>
        </PORTS>
    </ITEM>
</MAPPING>"#;

const TARGET_XML: &str = r#"<MAPPING>
    <ITEM>
        <ID>1</ID>
        <PORTS>
            <PORT><NAME>P1</NAME><SWC>Diag</SWC></PORT>
            <PORT><NAME>P3</NAME><SWC>Diag</SWC></PORT>
        </PORTS>
    </ITEM>
    <ITEM>
        <ID>4049</ID>
        <PORTS>
            <PORT><NAME>P_Tx</NAME><SWC>Com</SWC></PORT>
            <PORT><NAME>P_Nm</NAME><SWC>Nm</SWC></PORT>
        </PORTS>
    </ITEM>
</MAPPING>"#;

/// Write the two standard fixtures and return (dir, baseline, target).
/// The dir must stay alive for the duration of the test.
fn fixtures() -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().unwrap();
    let baseline = dir.path().join("dids_swc_mapping.xml");
    let target = dir.path().join("rids_swc_mapping.xml");
    fs::write(&baseline, BASELINE_XML).unwrap();
    fs::write(&target, TARGET_XML).unwrap();
    (dir, baseline, target)
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_swcdiff(&["--help"]);

    assert!(success);
    assert!(stdout.contains("swcdiff"));
    assert!(stdout.contains("view"));
    assert!(stdout.contains("ports"));
    assert!(stdout.contains("new-ports"));
    assert!(stdout.contains("report"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_swcdiff(&["--version"]);

    assert!(success);
    assert!(stdout.contains("swcdiff"));
}

#[test]
fn test_view_table_output() {
    let (_dir, baseline, _) = fixtures();
    let (stdout, _, success) = run_swcdiff(&["view", baseline.to_str().unwrap()]);

    assert!(success);
    assert!(stdout.contains("ID"));
    assert!(stdout.contains("0x0001"));
    assert!(stdout.contains("0x0FD1"));
    assert!(stdout.contains("P_Tx"));
    assert!(stdout.contains("Total (3 ports)"));
}

#[test]
fn test_view_json_output() {
    let (_dir, baseline, _) = fixtures();
    let (stdout, _, success) =
        run_swcdiff(&["view", baseline.to_str().unwrap(), "--output", "json"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    assert!(parsed.get("headers").is_some());
    assert!(parsed.get("rows").is_some());
    assert!(parsed.get("footer").is_some());
    assert_eq!(parsed["rows"][0]["label"], "1");
    assert_eq!(parsed["rows"][0]["values"][0], "0x0001");
}

#[test]
fn test_view_csv_output() {
    let (_dir, baseline, _) = fixtures();
    let (stdout, _, success) =
        run_swcdiff(&["view", baseline.to_str().unwrap(), "--output", "csv"]);

    assert!(success);
    assert!(stdout.starts_with("ID,PORT,SWC"));
    assert!(stdout.contains("0x0FD1,P_Tx,Com"));
}

#[test]
fn test_view_merges_sources_and_drops_duplicates() {
    let (_dir, baseline, target) = fixtures();
    let (stdout, _, success) = run_swcdiff(&[
        "view",
        baseline.to_str().unwrap(),
        target.to_str().unwrap(),
    ]);

    assert!(success);
    // 3 + 4 records with 2 exact duplicates
    assert!(stdout.contains("Total (5 ports)"));
}

#[test]
fn test_ports_lists_component_slice() {
    let (_dir, baseline, _) = fixtures();
    let (stdout, _, success) = run_swcdiff(&[
        "ports",
        baseline.to_str().unwrap(),
        "--swc",
        "Diag",
    ]);

    assert!(success);
    assert!(stdout.contains("Ports of Diag"));
    assert!(stdout.contains("P1"));
    assert!(stdout.contains("P2"));
    assert!(!stdout.contains("P_Tx"));
    assert!(stdout.contains("Total (2 ports)"));
}

#[test]
fn test_ports_unknown_component_message() {
    let (_dir, baseline, _) = fixtures();
    let (stdout, _, success) = run_swcdiff(&[
        "ports",
        baseline.to_str().unwrap(),
        "--swc",
        "Adc",
    ]);

    assert!(success);
    assert!(stdout.contains("No ports found for Adc."));
}

#[test]
fn test_new_ports_reports_added_port() {
    let (_dir, baseline, target) = fixtures();
    let (stdout, _, success) = run_swcdiff(&[
        "new-ports",
        baseline.to_str().unwrap(),
        target.to_str().unwrap(),
        "--swc",
        "Diag",
    ]);

    assert!(success);
    assert!(stdout.contains("New ports for Diag"));
    assert!(stdout.contains("P3"));
    assert!(!stdout.contains("P2"));
    assert!(stdout.contains("Total (1 ports)"));
}

#[test]
fn test_new_ports_component_only_in_target() {
    let (_dir, baseline, target) = fixtures();
    let (stdout, _, success) = run_swcdiff(&[
        "new-ports",
        baseline.to_str().unwrap(),
        target.to_str().unwrap(),
        "--swc",
        "Nm",
    ]);

    assert!(success);
    assert!(stdout.contains("P_Nm"));
    assert!(stdout.contains("Total (1 ports)"));
}

#[test]
fn test_new_ports_unchanged_component_message() {
    let (_dir, baseline, target) = fixtures();
    let (stdout, _, success) = run_swcdiff(&[
        "new-ports",
        baseline.to_str().unwrap(),
        target.to_str().unwrap(),
        "--swc",
        "Com",
    ]);

    assert!(success);
    assert!(stdout.contains("No new ports for Com"));
}

#[test]
fn test_new_ports_absent_component_message() {
    let (_dir, baseline, target) = fixtures();
    let (stdout, _, success) = run_swcdiff(&[
        "new-ports",
        baseline.to_str().unwrap(),
        target.to_str().unwrap(),
        "--swc",
        "Adc",
    ]);

    assert!(success);
    assert!(stdout.contains("SWC Adc does not exist in either file"));
}

#[test]
fn test_new_ports_rejects_same_file_name() {
    let (_dir, baseline, _) = fixtures();
    let other_dir = TempDir::new().unwrap();
    let clashing = other_dir.path().join("dids_swc_mapping.xml");
    fs::write(&clashing, TARGET_XML).unwrap();

    let (_, stderr, success) = run_swcdiff(&[
        "new-ports",
        baseline.to_str().unwrap(),
        clashing.to_str().unwrap(),
        "--swc",
        "Diag",
    ]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("share the file name"));
}

#[test]
fn test_report_summary_output() {
    let (_dir, baseline, target) = fixtures();
    let (stdout, _, success) = run_swcdiff(&[
        "report",
        baseline.to_str().unwrap(),
        target.to_str().unwrap(),
    ]);

    assert!(success);
    assert!(stdout.contains("New ports per SWC"));
    assert!(stdout.contains("Diag"));
    assert!(stdout.contains("Nm"));
    // Com is unchanged and must not appear as a data row
    assert!(!stdout.lines().any(|l| l.starts_with("Com")));
    assert!(stdout.contains("Total (2 SWCs)"));
}

#[test]
fn test_report_no_changes_message() {
    let (_dir, baseline, _) = fixtures();
    let copy_dir = TempDir::new().unwrap();
    let copy = copy_dir.path().join("same_mapping.xml");
    fs::write(&copy, BASELINE_XML).unwrap();

    let (stdout, _, success) = run_swcdiff(&[
        "report",
        baseline.to_str().unwrap(),
        copy.to_str().unwrap(),
    ]);

    assert!(success);
    assert!(stdout.contains("No changes detected between the two files."));
}

#[test]
fn test_report_out_writes_csv_artifact() {
    let (_dir, baseline, target) = fixtures();
    let out_dir = TempDir::new().unwrap();
    let out = out_dir.path().join("report.csv");

    let (_, stderr, success) = run_swcdiff(&[
        "report",
        baseline.to_str().unwrap(),
        target.to_str().unwrap(),
        "--out",
        out.to_str().unwrap(),
    ]);

    assert!(success);
    assert!(stderr.contains("CSV written"));
    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("SWC,New Ports"));
    assert!(content.contains("Diag,1"));
    assert!(content.contains("Nm,1"));
}

#[test]
fn test_view_csv_artifact_round_trips_as_tabular_source() {
    let (_dir, baseline, _) = fixtures();
    let out_dir = TempDir::new().unwrap();
    let out = out_dir.path().join("export.csv");

    let (_, _, success) = run_swcdiff(&[
        "view",
        baseline.to_str().unwrap(),
        "--out",
        out.to_str().unwrap(),
    ]);
    assert!(success);

    // Reload the artifact as the tabular side of a diff
    let (stdout, _, success) = run_swcdiff(&[
        "new-ports",
        out.to_str().unwrap(),
        baseline.to_str().unwrap(),
        "--swc",
        "Diag",
    ]);
    assert!(success);
    assert!(stdout.contains("No new ports for Diag"));
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mapping.xlsx");
    fs::write(&path, "not a real workbook").unwrap();

    let (_, stderr, success) = run_swcdiff(&["view", path.to_str().unwrap()]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("unsupported source format"));
}

#[test]
fn test_missing_source_file() {
    let (_, stderr, success) = run_swcdiff(&["view", "/nonexistent/mapping.xml"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("does not exist"));
}
