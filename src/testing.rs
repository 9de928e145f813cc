// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests, and the binary.
//!
//! Always compiled but hidden from documentation.

#![doc(hidden)]

use std::fs;
use std::path::Path;

use crate::error::PipelineError;
use crate::types::Record;

pub fn make_record(name: &str, age: u32) -> Record {
    Record::new(name, age)
}

/// The five-record fixture every collector example runs over.
///
/// Two "kim"s, two 25s, two 30s: enough collisions to exercise grouping,
/// deduplication, tie-breaking, and the strict map's duplicate error.
pub fn sample_users() -> Vec<Record> {
    vec![
        make_record("kim", 21),
        make_record("lee", 25),
        make_record("park", 25),
        make_record("kim", 30),
        make_record("choi", 30),
    ]
}

/// Load records from a JSON array of `{ "name": ..., "age": ... }` objects.
pub fn load_records(path: &Path) -> Result<Vec<Record>, PipelineError> {
    let content = fs::read_to_string(path).map_err(|e| PipelineError::Config {
        message: format!("failed to read {}: {}", path.display(), e),
    })?;
    serde_json::from_str(&content).map_err(|e| PipelineError::Config {
        message: format!("failed to parse records in {}: {}", path.display(), e),
    })
}
