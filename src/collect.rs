// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Record collectors: one function per terminal reducer.
//!
//! Each function builds a `Pipeline` over the borrowed records and hands it
//! one reducer from `reducers`. In debug builds the result is checked against
//! its contract before it is returned.

use std::collections::HashMap;

use crate::contracts::{
    check_length_preserved, check_partition, check_sorted_by_key, check_sum_preserved,
};
use crate::error::PipelineError;
use crate::pipeline::Pipeline;
use crate::reducers::{
    grouping_max_by, grouping_sum, joining, partitioning, to_map, to_sorted_set_by, to_vec,
};
use crate::Record;

/// Names in input order.
pub fn collect_names(records: &[Record]) -> Vec<String> {
    let names = Pipeline::from_source(records)
        .map(|record: &Record| record.name().to_string())
        .collect_with(to_vec());
    check_length_preserved(records.len(), names.len(), "collect_names");
    names
}

/// Records ascending by age, one per distinct age (the first seen wins).
pub fn collect_sorted_unique_by_age(records: &[Record]) -> Vec<Record> {
    let sorted = Pipeline::from_source(records)
        .map(Record::clone)
        .collect_with(to_sorted_set_by(|record: &Record| record.age()));
    check_sorted_by_key(&sorted, Record::age);
    sorted
}

/// Total age per name.
pub fn sum_ages_by_name(records: &[Record]) -> HashMap<String, u64> {
    let sums = Pipeline::from_source(records).collect_with(grouping_sum(
        |record: &&Record| record.name().to_string(),
        |record: &&Record| u64::from(record.age()),
    ));
    check_sum_preserved(records, sums.values());
    sums
}

/// The oldest record per name. Equal ages resolve to the later record.
pub fn max_by_age_per_name(records: &[Record]) -> HashMap<String, Record> {
    Pipeline::from_source(records)
        .map(Record::clone)
        .collect_with(grouping_max_by(
            |record: &Record| record.name().to_string(),
            |a: &Record, b: &Record| a.age().cmp(&b.age()),
        ))
}

/// Names joined by `delimiter`. Empty input gives an empty string.
pub fn join_names(records: &[Record], delimiter: &str) -> String {
    Pipeline::from_source(records)
        .map(Record::name)
        .collect_with(joining(delimiter))
}

/// Split into `(age <= threshold, age > threshold)`, each in input order.
pub fn partition_by_age_over(records: &[Record], threshold: u32) -> (Vec<Record>, Vec<Record>) {
    let over = |record: &Record| record.age() > threshold;
    let halves = Pipeline::from_source(records)
        .map(Record::clone)
        .collect_with(partitioning(over));
    check_partition(records.len(), &halves.matched, &halves.unmatched, over);
    (halves.unmatched, halves.matched)
}

/// Index records by name with no merge function.
///
/// Fails with `PipelineError::DuplicateKey` on the first repeated name.
pub fn records_by_name(records: &[Record]) -> Result<HashMap<String, Record>, PipelineError> {
    Pipeline::from_source(records).try_collect_with(to_map(
        |record: &&Record| record.name().to_string(),
        |record: &Record| record.clone(),
    ))
}
