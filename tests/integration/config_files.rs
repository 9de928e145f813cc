//! Fan-out configuration loaded from disk.

use pipekit::{matched_at_least_parallel, FanOutConfig, PipelineError};
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("fan-out.json");
    fs::write(&path, contents).expect("Failed to write config");
    path
}

#[test]
fn loads_config_and_drives_fan_out() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, r#"{ "threads": 2, "minLen": 4 }"#);

    let config = FanOutConfig::from_json_file(&path).expect("config should load");
    assert_eq!(config, FanOutConfig { threads: 2, min_len: 4 });

    let items: Vec<i64> = (0..100).collect();
    let matched = matched_at_least_parallel(&items, 50, &config).expect("fan-out should run");
    assert_eq!(matched.len(), 50);
}

#[test]
fn empty_object_means_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "{}");
    assert_eq!(
        FanOutConfig::from_json_file(&path).unwrap(),
        FanOutConfig::default()
    );
}

#[test]
fn invalid_values_and_syntax_are_config_errors() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let path = write_config(&dir, r#"{ "minLen": 0 }"#);
    let err = FanOutConfig::from_json_file(&path).unwrap_err();
    assert!(err.to_string().contains("minLen must be at least 1"));

    let path = write_config(&dir, "{ threads: ");
    assert!(matches!(
        FanOutConfig::from_json_file(&path),
        Err(PipelineError::Config { .. })
    ));
}

#[test]
fn missing_file_names_the_path() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let missing = dir.path().join("nope.json");
    let err = FanOutConfig::from_json_file(&missing).unwrap_err();
    assert!(err.to_string().contains("nope.json"));
}
