use predicates::prelude::*;

use crate::common::{RAW_SAMPLE, Workspace};

#[test]
fn seeded_input_is_filtered_and_published() {
    let ws = Workspace::new();
    let raw = ws.write_file("raw/sample.csv", RAW_SAMPLE);

    ws.clean("sample.csv:latest", "10", "350")
        .arg("--seed")
        .arg(&raw)
        .assert()
        .success()
        .stderr(predicate::str::contains("Downloading artifact"))
        .stderr(predicate::str::contains("3 rows dropped"))
        .stderr(predicate::str::contains("Logging artifact"));

    let cleaned = ws.stored("clean_sample.csv", "clean_sample.csv");
    let mut lines = cleaned.lines();
    assert_eq!(lines.next(), Some("id,name,neighbourhood_group,price,minimum_nights,last_review"));
    let ids: Vec<&str> = lines.map(|l| l.split(',').next().unwrap()).collect();
    assert_eq!(ids, ["2539", "2595", "3647", "3831"]);
    assert!(cleaned.contains("\"Clean & quiet apt, home by the park\""));

    assert!(ws.work_dir().join("clean_sample.csv").is_file());
}

#[test]
fn run_record_captures_config_and_artifacts() {
    let ws = Workspace::new();
    let raw = ws.write_file("raw/sample.csv", RAW_SAMPLE);

    ws.clean("sample.csv", "10", "350").arg("--seed").arg(&raw).assert().success();

    let runs = ws.run_records();
    assert_eq!(runs.len(), 1);
    let run = &runs[0];
    assert_eq!(run["job_type"], "basic_cleaning");
    assert_eq!(run["status"], "succeeded");
    assert_eq!(run["config"]["min_price"], 10.0);
    assert_eq!(run["config"]["max_price"], 350.0);
    assert_eq!(run["config"]["output_type"], "clean_sample");
    assert_eq!(run["inputs"][0], "sample.csv");
    assert_eq!(run["outputs"][0]["name"], "clean_sample.csv");
    assert_eq!(run["outputs"][0]["digest"].as_str().map(str::len), Some(32));
}

#[test]
fn previously_published_artifact_can_be_cleaned_again() {
    let ws = Workspace::new();
    let raw = ws.write_file("raw/sample.csv", RAW_SAMPLE);
    ws.clean("sample.csv", "10", "350").arg("--seed").arg(&raw).assert().success();

    let output = ws
        .command()
        .args([
            "--input_artifact",
            "clean_sample.csv:latest",
            "--output_artifact",
            "cheap.csv",
            "--output_type",
            "clean_sample",
            "--output_description",
            "under 100",
            "--min_price",
            "0",
            "--max_price",
            "100",
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["input_rows"], 4);
    assert_eq!(report["kept_rows"], 1);
    assert_eq!(report["dropped_rows"], 3);
    assert_eq!(report["breakdown"]["above_max"], 3);
}

#[test]
fn inverted_bounds_publish_header_only() {
    let ws = Workspace::new();
    let raw = ws.write_file("raw/sample.csv", RAW_SAMPLE);

    ws.clean("sample.csv", "200", "100").arg("--seed").arg(&raw).assert().success();

    assert_eq!(
        ws.stored("clean_sample.csv", "clean_sample.csv"),
        "id,name,neighbourhood_group,price,minimum_nights,last_review\n"
    );
}

#[test]
fn missing_column_fails_with_schema_error() {
    let ws = Workspace::new();
    let raw = ws.write_file("raw/sample.csv", RAW_SAMPLE);

    ws.clean("sample.csv", "10", "350")
        .args(["--field", "cost", "--seed"])
        .arg(&raw)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Column 'cost' not found"));

    assert!(!ws.store_dir().join("clean_sample.csv").exists());
}

#[test]
fn quiet_suppresses_info_logs() {
    let ws = Workspace::new();
    let raw = ws.write_file("raw/sample.csv", RAW_SAMPLE);

    ws.clean("sample.csv", "10", "350")
        .arg("-q")
        .arg("--seed")
        .arg(&raw)
        .assert()
        .success()
        .stderr(predicate::str::contains("Downloading artifact").not());
}
