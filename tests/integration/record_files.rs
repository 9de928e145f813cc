//! Records loaded from JSON and run through the collectors.

use crate::common::{names, sample_users};
use pipekit::testing::load_records;
use pipekit::{collect_sorted_unique_by_age, join_names, records_by_name, PipelineError, Record};
use std::fs;
use tempfile::TempDir;

#[test]
fn loaded_records_match_built_in_fixture() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("users.json");
    let json = serde_json::to_string(&sample_users()).expect("Failed to serialize");
    fs::write(&path, json).expect("Failed to write records");

    let records = load_records(&path).expect("records should load");
    assert_eq!(records, sample_users());
    assert_eq!(join_names(&records, "/"), "kim/lee/park/kim/choi");
    assert_eq!(
        names(&collect_sorted_unique_by_age(&records)),
        vec!["kim", "lee", "kim"]
    );
}

#[test]
fn hand_written_file_loads() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("pair.json");
    fs::write(
        &path,
        r#"[{ "name": "ana", "age": 40 }, { "name": "bo", "age": 2 }]"#,
    )
    .expect("Failed to write records");

    let records = load_records(&path).unwrap();
    assert_eq!(records, vec![Record::new("ana", 40), Record::new("bo", 2)]);
    assert_eq!(records_by_name(&records).map(|m| m.len()), Ok(2));
}

#[test]
fn malformed_records_are_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"[{ "name": "ana", "age": -1 }]"#).expect("Failed to write records");
    assert!(matches!(
        load_records(&path),
        Err(PipelineError::Config { .. })
    ));
}
