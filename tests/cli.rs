//! E2E tests for the agencies, contribution and session commands

use std::io::Write;
use std::process::{Command, Stdio};

const DATA: &str = "tests/data/summary.json";

fn run(args: &[&str]) -> (bool, String) {
    let output = Command::new("cargo")
        .args(["run", "--quiet", "--"])
        .args(args)
        .output()
        .expect("Failed to execute command");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).to_string(),
    )
}

/// Test the agency breakdown of the fixture dataset
#[test]
fn agencies_table() {
    let (ok, stdout) = run(&["agencies", "-f", DATA]);
    assert!(ok, "Command failed: {}", stdout);

    // Line items for the same agency are merged
    assert!(stdout.contains("TOTAL BUDGET: $49,000,000,000"));
    assert!(stdout.contains("Department of Education"));
    assert!(stdout.contains("$25,000,000,000"));
    assert!(stdout.contains("51.020%"));

    // Records without an agency still count
    assert!(stdout.contains("null"));
}

/// Test the top ten view drops the smallest agencies
#[test]
fn agencies_top_ten() {
    let (ok, stdout) = run(&["agencies", "-f", DATA, "--view", "top-ten"]);
    assert!(ok, "Command failed: {}", stdout);

    assert!(stdout.contains("Department for the Aging"));
    assert!(!stdout.contains("Department of Cultural Affairs"));
}

/// Test JSON output of the agency breakdown
#[test]
fn agencies_json() {
    let (ok, stdout) = run(&["agencies", "-f", DATA, "--json"]);
    assert!(ok, "Command failed: {}", stdout);

    assert!(stdout.contains("\"total_budget\""));
    assert!(stdout.contains("\"agency_count\": 12"));
}

/// Test the contribution figure and its per-agency split
#[test]
fn contribution_table() {
    let (ok, stdout) = run(&[
        "contribution",
        "-f",
        DATA,
        "--federal",
        "1000",
        "--state",
        "1000",
        "--local",
        "500",
    ]);
    assert!(ok, "Command failed: {}", stdout);

    assert!(stdout.contains("YOUR CONTRIBUTION: 548.09"));
    assert!(stdout.contains("Your Contribution (of $548.09)"));
    assert!(stdout.contains("$279.64"));
    assert!(stdout.contains("$111.86"));
}

/// Test grants derived from the published budget total
#[test]
fn contribution_reference_grant_base() {
    let (ok, stdout) = run(&[
        "contribution",
        "-f",
        DATA,
        "--federal",
        "1000",
        "--state",
        "1000",
        "--local",
        "500",
        "--grant-base",
        "reference",
    ]);
    assert!(ok, "Command failed: {}", stdout);

    assert!(stdout.contains("YOUR CONTRIBUTION: 593.52"));
}

/// Test an empty tax field shows NaN rather than failing
#[test]
fn contribution_missing_input_is_nan() {
    let (ok, stdout) = run(&["contribution", "-f", DATA, "--federal", "1000"]);
    assert!(ok, "Command failed: {}", stdout);

    assert!(stdout.contains("YOUR CONTRIBUTION: NaN"));
    assert!(stdout.contains("$NaN"));
}

/// Test a failed load leaves the tool in its empty state
#[test]
fn missing_data_file_is_not_fatal() {
    let (ok, stdout) = run(&["agencies", "-f", "tests/data/does_not_exist.json"]);
    assert!(ok, "Command failed: {}", stdout);

    assert!(stdout.contains("No budget data loaded"));
}

/// Test JSON output of the contribution keeps NaN as null
#[test]
fn contribution_json_nan_is_null() {
    let (ok, stdout) = run(&["contribution", "-f", DATA, "--federal", "1000", "--json"]);
    assert!(ok, "Command failed: {}", stdout);

    assert!(stdout.contains("\"your_contribution\": null"));
    assert!(stdout.contains("\"total_budget\""));
}

/// Test CSV output of the contribution split
#[test]
fn contribution_csv() {
    let (ok, stdout) = run(&[
        "contribution",
        "-f",
        DATA,
        "--federal",
        "1000",
        "--state",
        "1000",
        "--local",
        "500",
        "--csv",
    ]);
    assert!(ok, "Command failed: {}", stdout);

    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("agency,amount,percent,contribution"));
    assert!(stdout.contains("Department of Education,\"$25,000,000,000\",51.020%,$279.64"));
}

/// Test CSV output of the agency breakdown
#[test]
fn agencies_csv() {
    let (ok, stdout) = run(&["agencies", "-f", DATA, "--view", "top-ten", "--csv"]);
    assert!(ok, "Command failed: {}", stdout);

    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("rank,agency,amount,percent"));
    assert_eq!(lines.count(), 10);
}

/// Test JSON output before any data is loaded
#[test]
fn missing_data_file_json_is_null() {
    let (ok, stdout) = run(&["agencies", "-f", "tests/data/does_not_exist.json", "--json"]);
    assert!(ok, "Command failed: {}", stdout);
    assert_eq!(stdout.trim(), "null");

    let (ok, stdout) = run(&[
        "contribution",
        "-f",
        "tests/data/does_not_exist.json",
        "--json",
    ]);
    assert!(ok, "Command failed: {}", stdout);
    assert_eq!(stdout.trim(), "null");
}

/// Test the interactive session applies commands in order
#[test]
fn session_commands() {
    let mut child = Command::new("cargo")
        .args(["run", "--quiet", "--", "session", "-f", DATA])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"top\ncalc 1000 1000 500\nbogus\nquit\n")
        .expect("Failed to write commands");

    let output = child.wait_with_output().expect("Failed to wait on command");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "Command failed: {:?}", output);

    // Switching view before calculating shows empty fields as NaN
    assert!(stdout.contains("YOUR CONTRIBUTION: NaN"));
    assert!(stdout.contains("YOUR CONTRIBUTION: 548.09"));
    assert!(stdout.contains("Unknown command 'bogus'"));
    assert!(!stdout.contains("Department of Cultural Affairs"));
}

/// Test the schema command prints the dataset schema
#[test]
fn schema_output() {
    let (ok, stdout) = run(&["schema"]);
    assert!(ok, "Command failed: {}", stdout);

    assert!(stdout.contains("\"agency\""));
    assert!(stdout.contains("\"amount\""));
}
