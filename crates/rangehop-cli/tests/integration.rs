//! Integration tests for CLI commands.

use std::process::Command;
use tempfile::TempDir;

const NOW: &str = "1700000000000";

fn run_cli(args: &[&str]) -> (bool, String, String) {
    let output = Command::new("cargo")
        .args(["run", "--bin", "rangehop", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    let success = output.status.success();

    (success, stdout, stderr)
}

fn metrics_addr() -> String {
    "https://eu-west-1.console.aws.amazon.com/cloudwatch/home?region=eu-west-1#metricsV2:graph=~(view~'timeSeries~start~'-PT3H~end~'P0D)".to_string()
}

#[test]
fn test_classify_command() {
    let (success, stdout, _) = run_cli(&["classify", &metrics_addr()]);
    assert!(success);
    assert_eq!(stdout.trim(), "metrics-graph");

    let (success, stdout, _) = run_cli(&["classify", "https://example.com/"]);
    assert!(success);
    assert_eq!(stdout.trim(), "not-applicable");
}

#[test]
fn test_parse_json_output() {
    let (success, stdout, _) = run_cli(&["parse", &metrics_addr(), "--json", "--at", NOW]);
    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON");
    assert_eq!(value["start_ms"], 1_700_000_000_000_i64 - 10_800_000);
    assert_eq!(value["end_ms"], 1_700_000_000_000_i64);
    assert_eq!(value["encoding"], "relative");
    assert_eq!(value["source_tag"], "metrics-graph");
}

#[test]
fn test_parse_table_output() {
    let (success, stdout, _) = run_cli(&["parse", &metrics_addr(), "--at", NOW]);
    assert!(success);
    assert!(stdout.contains("START"));
    assert!(stdout.contains("metrics-graph"));
}

#[test]
fn test_parse_unsupported_address_fails_with_reason_code() {
    let (success, _, stderr) = run_cli(&[
        "parse",
        "https://console.aws.amazon.com/iam/home#/users",
        "--at",
        NOW,
    ]);
    assert!(!success);
    assert!(stderr.contains("no-match"));
}

#[test]
fn test_inject_command() {
    let addr = "https://console.aws.amazon.com/xray/home?region=us-east-1&timeRange=PT1H";
    let (success, stdout, _) = run_cli(&[
        "inject",
        addr,
        "--start",
        "1700000000000",
        "--end",
        "1700003600000",
    ]);
    assert!(success);
    let rewritten = stdout.trim();
    assert!(rewritten.contains("region=us-east-1"));
    assert!(rewritten.contains("timeRange=2023-11-14T22:13:20.000Z~2023-11-14T23:13:20.000Z"));
}

#[test]
fn test_inject_accepts_iso_endpoints() {
    let addr = "https://console.aws.amazon.com/xray/home?timeRange=PT1H";
    let (success, stdout, _) = run_cli(&[
        "inject",
        addr,
        "--start",
        "2023-11-14T22:13:20Z",
        "--end",
        "2023-11-14T23:13:20Z",
    ]);
    assert!(success);
    assert!(stdout.contains("2023-11-14T22:13:20.000Z~2023-11-14T23:13:20.000Z"));
}

#[test]
fn test_copy_paste_flow() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("store.json");
    let store_arg = store.to_string_lossy().to_string();

    let (success, stdout, _) = run_cli(&[
        "copy",
        &metrics_addr(),
        "--store",
        &store_arg,
        "--at",
        NOW,
    ]);
    assert!(success);
    assert!(stdout.contains("remembered"));

    // paste the captured window into a different scheme's address
    let target = "https://console.aws.amazon.com/xray/home?timeRange=PT15M";
    let (success, stdout, _) = run_cli(&["paste", target, "--store", &store_arg]);
    assert!(success);
    // -PT3H before the pinned now, rendered absolute
    assert!(stdout.contains("timeRange=2023-11-14T19:13:20.000Z~2023-11-14T22:13:20.000Z"));
}

#[test]
fn test_paste_without_copy_fails() {
    let temp_dir = TempDir::new().unwrap();
    let store_arg = temp_dir
        .path()
        .join("empty.json")
        .to_string_lossy()
        .to_string();

    let (success, _, stderr) = run_cli(&[
        "paste",
        "https://console.aws.amazon.com/xray/home?timeRange=PT1H",
        "--store",
        &store_arg,
    ]);
    assert!(!success);
    assert!(stderr.contains("no remembered range"));
}

#[test]
fn test_history_lists_newest_first() {
    let temp_dir = TempDir::new().unwrap();
    let store_arg = temp_dir
        .path()
        .join("store.json")
        .to_string_lossy()
        .to_string();

    run_cli(&["copy", &metrics_addr(), "--store", &store_arg, "--at", NOW]);
    run_cli(&[
        "copy",
        &metrics_addr(),
        "--store",
        &store_arg,
        "--label",
        "incident-42",
        "--at",
        "1700003600000",
    ]);

    let (success, stdout, _) = run_cli(&["history", "--store", &store_arg, "--json"]);
    assert!(success);
    let lines: Vec<&str> = stdout.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(lines.len(), 2);
    let newest: serde_json::Value = serde_json::from_str(lines[0]).expect("Invalid JSON");
    assert_eq!(newest["source_tag"], "incident-42");
}
