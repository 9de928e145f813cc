//! Shared test utilities and fixtures.

#![allow(dead_code)]

use pipekit::Record;
use proptest::prelude::*;

// Re-export canonical test utilities from pipekit::testing
pub use pipekit::testing::{make_record, sample_users};

/// Names in order, for compact assertions.
pub fn names(records: &[Record]) -> Vec<&str> {
    records.iter().map(Record::name).collect()
}

pub fn zero_to(count: i64) -> Vec<i64> {
    (0..count).collect()
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// Short names from a small alphabet, so collisions are common.
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[a-d]{1,2}"
}

pub fn record_strategy() -> impl Strategy<Value = Record> {
    (name_strategy(), 0u32..80).prop_map(|(name, age)| Record::new(name, age))
}

pub fn records_strategy() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(record_strategy(), 0..50)
}

pub fn words_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-e]{1,3}", 0..60)
}
