//! Integration tests for the skillpulse CLI
//!
//! Each test writes a config (and usually a behavior data file) into a temp
//! dir and runs the real binary against it.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper function to create a skillpulse command
fn skillpulse() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("skillpulse"))
}

/// Write a config with the standard roster and, optionally, behavior data
fn write_config(dir: &Path, data: Option<&str>) -> PathBuf {
    let mut config = String::from(
        r#"
[[users]]
id = "u1"
name = "Aditi"
skills = ["frontend", "react"]

[[users]]
id = "u2"
name = "Rahul"
skills = ["backend", "node"]

[[users]]
id = "u3"
name = "Neha"
skills = ["ml", "python"]
"#,
    );

    if let Some(data) = data {
        let data_path = dir.join("behavior.json");
        fs::write(&data_path, data).unwrap();
        config.push_str(&format!("\n[storage]\ndata_file = \"{}\"\n", data_path.display()));
    }

    let path = dir.join("config.toml");
    fs::write(&path, config).unwrap();
    path
}

const DATA: &str = r#"{"users":{
    "u2":{"commits":2,"lastCommit":1000,"fileEdits":{"total":5,"reverts":2}},
    "u1":{"commits":5,"lastCommit":2000,"fileEdits":{"total":10,"reverts":1}}
}}"#;

#[test]
fn test_version() {
    skillpulse()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("skillpulse"));
}

#[test]
fn test_version_json() {
    skillpulse()
        .args(["version", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn test_help() {
    skillpulse()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Match tasks to the users"));
}

#[test]
fn test_no_args_shows_info() {
    skillpulse()
        .assert()
        .success()
        .stdout(predicate::str::contains("skillpulse --help"));
}

#[test]
fn test_leaderboard_json() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), Some(DATA));

    let output = skillpulse()
        .args(["leaderboard", "--json", "--config"])
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(entries[0]["userId"], "u1");
    assert_eq!(entries[1]["userId"], "u2");
}

#[test]
fn test_leaderboard_empty() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), None);

    skillpulse()
        .args(["leaderboard", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("No behavior records yet"));
}

#[test]
fn test_metrics_json() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), Some(DATA));

    let output = skillpulse()
        .args(["metrics", "u1", "--task-status", "in_progress", "--json", "--config"])
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["userId"], "u1");
    assert_eq!(report["taskStatus"], "in_progress");
    assert_eq!(report["mismatch"], "HIGH_RISK");
    assert_eq!(report["accuracy"], 0.9);
}

#[test]
fn test_metrics_human_labels_activity_per_day() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), Some(DATA));

    skillpulse()
        .args(["metrics", "u1", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("commits/day"))
        .stdout(predicate::str::contains("commits/h").not());
}

#[test]
fn test_metrics_unknown_user_fails() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), Some(DATA));

    skillpulse()
        .args(["metrics", "ghost", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_suggest_picks_best_match() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), None);

    let output = skillpulse()
        .args(["suggest", "--skills", "ml,python", "--json", "--config"])
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["assignee"], "u3");
    assert_eq!(report["candidates"][0]["userId"], "u3");
    assert_eq!(report["candidates"].as_array().unwrap().len(), 3);
}

#[test]
fn test_suggest_below_threshold() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), None);

    skillpulse()
        .args(["suggest", "--skills", "rust,go,react", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("threshold"));
}

#[test]
fn test_bad_config_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[leaderboard]\nsize = 0\n").unwrap();

    skillpulse()
        .args(["leaderboard", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("leaderboard.size"));
}
