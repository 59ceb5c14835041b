//! End-to-end tests for the `impactmap` binary.

mod common;

use assert_cmd::prelude::*;
use serde_json::Value;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

/// Run the binary in an isolated directory so no stray config is picked up
fn impactmap(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_impactmap"));
    cmd.current_dir(dir.path()).env("NO_COLOR", "1");
    cmd
}

fn json_output(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("Output is not valid JSON")
}

#[test]
fn test_estimate_json() {
    let dir = TempDir::new().unwrap();
    let json = json_output(impactmap(&dir).args([
        "estimate",
        "--hours",
        "2",
        "--errors",
        "10",
        "--frequency",
        "Daily",
        "--format",
        "json",
    ]));

    let estimate = &json["result"]["estimate"];
    assert_eq!(estimate["labor"], 21600.0);
    assert_eq!(estimate["error"], 18000.0);
    assert_eq!(estimate["total"], 39600.0);
    assert_eq!(estimate["synthetic_metrics"][0]["type"], "labor");
    assert_eq!(json["settings"]["hourly_rate"], 45.0);
}

#[test]
fn test_estimate_with_calendar_preset() {
    let dir = TempDir::new().unwrap();
    let json = json_output(impactmap(&dir).args([
        "estimate", "--hours", "2", "--errors", "0", "--frequency", "Monthly", "--preset",
        "calendar", "--format", "json",
    ]));
    assert_eq!(json["result"]["estimate"]["labor"], 1080.0);
}

#[test]
fn test_metric_respects_rate_override() {
    let dir = TempDir::new().unwrap();
    let json = json_output(impactmap(&dir).args([
        "metric",
        "--baseline",
        "100",
        "--target",
        "20",
        "--type",
        "labor",
        "--hourly-rate",
        "50",
        "--format",
        "json",
    ]));
    assert_eq!(json["result"]["metric"]["value"], 4000.0);
}

#[test]
fn test_config_file_in_working_directory_is_used() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".impactmap.toml"),
        "[settings]\nerror_cost = 200\n\n[output]\ndefault_format = \"json\"\n",
    )
    .unwrap();

    let json = json_output(impactmap(&dir).args(["estimate", "--errors", "1"]));
    assert_eq!(json["result"]["estimate"]["total"], 2400.0);
}

#[test]
fn test_totals_markdown_to_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("totals.md");
    impactmap(&dir)
        .arg("totals")
        .arg(common::data_path("invoice_process.json"))
        .args(["--format", "markdown", "--output"])
        .arg(&output)
        .assert()
        .success();

    let markdown = fs::read_to_string(&output).unwrap();
    assert!(markdown.contains("Invoice matching"));
    assert!(markdown.contains("$10,254"));
}

#[test]
fn test_portfolio_terminal_lists_by_value() {
    let dir = TempDir::new().unwrap();
    let output = impactmap(&dir)
        .arg("portfolio")
        .arg(common::data_path("portfolio.yaml"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();

    let claims = text.find("Claims intake").unwrap();
    let invoice = text.find("Invoice matching").unwrap();
    assert!(claims < invoice);
    assert!(text.contains("$11,600"));
}

#[test]
fn test_portfolio_matrix_json() {
    let dir = TempDir::new().unwrap();
    let json = json_output(
        impactmap(&dir)
            .arg("portfolio")
            .arg(common::data_path("portfolio.yaml"))
            .args(["--matrix", "--company", "Acme Logistics", "--format", "json"]),
    );

    let report = &json["result"]["portfolio"];
    assert_eq!(report["stats"]["total"], 3);
    assert_eq!(report["stats"]["unscored"], 1);
    assert_eq!(report["rows"].as_array().unwrap().len(), 2);
    let pursue = report["matrix"]
        .as_array()
        .unwrap()
        .iter()
        .find(|group| group["quadrant"] == "pursue")
        .unwrap();
    assert_eq!(pursue["rows"][0]["name"], "Invoice matching");
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    impactmap(&dir).arg("init").assert().success();
    assert!(dir.path().join(".impactmap.toml").exists());

    impactmap(&dir).arg("init").assert().failure();
    impactmap(&dir).args(["init", "--force"]).assert().success();
}

#[test]
fn test_missing_input_file_fails() {
    let dir = TempDir::new().unwrap();
    impactmap(&dir)
        .args(["totals", "does-not-exist.json"])
        .assert()
        .failure();
}
