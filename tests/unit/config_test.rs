//! Tests for configuration loading

use std::fs;

use skillpulse::api::AppState;
use skillpulse::config::Config;
use tempfile::TempDir;

#[test]
fn test_load_explicit_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        r#"
[server]
port = 4000

[matching]
threshold = 0.75

[[users]]
id = "u1"
name = "Aditi"
skills = ["frontend", "react"]
"#,
    )
    .unwrap();

    let config = Config::load(Some(path.as_path())).unwrap();
    assert_eq!(config.server.port, 4000);
    assert_eq!(config.server.host, "127.0.0.1");
    assert!((config.matching.threshold - 0.75).abs() < f64::EPSILON);
    assert_eq!(config.leaderboard.size, 5);
    assert_eq!(config.users.len(), 1);
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    assert!(Config::load(Some(temp.path().join("absent.toml").as_path())).is_err());
}

#[test]
fn test_invalid_threshold_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[matching]\nthreshold = 1.5\n").unwrap();
    assert!(Config::load(Some(path.as_path())).is_err());
}

#[test]
fn test_state_from_config_uses_data_file() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("behavior.json");
    fs::write(&data, r#"{"users":{"u1":{"commits":2,"lastCommit":0}}}"#).unwrap();

    let mut config = Config::from_toml(
        r#"
[[users]]
id = "u1"
name = "Aditi"
skills = ["react"]
"#,
    )
    .unwrap();
    config.storage.data_file = Some(data);

    let state = AppState::from_config(&config).unwrap();
    assert_eq!(state.board.users().len(), 1);
    assert_eq!(state.behavior.all().unwrap().len(), 1);
}
