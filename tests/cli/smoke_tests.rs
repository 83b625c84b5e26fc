use predicates::prelude::*;

use crate::common::{RAW_SAMPLE, Workspace};

#[test]
fn shows_help() {
    Workspace::new()
        .command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--input_artifact"))
        .stdout(predicate::str::contains("--max_price"));
}

#[test]
fn missing_required_argument_fails() {
    Workspace::new()
        .command()
        .args(["--input_artifact", "sample.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output_artifact"));
}

#[test]
fn unknown_artifact_exits_with_failure() {
    let ws = Workspace::new();
    ws.clean("missing.csv:latest", "10", "350")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found"));

    let runs = ws.run_records();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0]["status"], "failed");
}

#[test]
fn nan_bound_is_rejected_by_the_parser() {
    Workspace::new()
        .clean("sample.csv", "nan", "350")
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be NaN"));
}

#[test]
fn infinite_upper_bound_leaves_the_range_open() {
    let ws = Workspace::new();
    let raw = ws.write_file("raw/sample.csv", RAW_SAMPLE);

    ws.clean("sample.csv", "10", "inf")
        .arg("--seed")
        .arg(&raw)
        .assert()
        .success()
        .stderr(predicate::str::contains("[10, inf]"))
        .stderr(predicate::str::contains("2 rows dropped"));

    let cleaned = ws.stored("clean_sample.csv", "clean_sample.csv");
    let ids: Vec<&str> = cleaned.lines().skip(1).map(|l| l.split(',').next().unwrap()).collect();
    assert_eq!(ids, ["2539", "2595", "3647", "3831", "5121"]);
}
