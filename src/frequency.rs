// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word counting two ways.
//!
//! `count_frequencies_manual` is the shape people write first: walk the words
//! and bump a counter in a map the loop owns. `count_frequencies` does the
//! counting inside the terminal reducer, so the pipeline has no side effect at
//! all. Both must agree on every input; the property tests hold them to it.

use std::collections::HashMap;

use crate::pipeline::Pipeline;
use crate::reducers::grouping_count;

/// Occurrences of each distinct word, counted by a grouping reducer.
pub fn count_frequencies<S: AsRef<str>>(words: &[S]) -> HashMap<String, u64> {
    Pipeline::from_source(words)
        .collect_with(grouping_count(|word: &&S| (*word).as_ref().to_string()))
}

/// Occurrences of each distinct word, counted by mutating a map once per element.
pub fn count_frequencies_manual<S: AsRef<str>>(words: &[S]) -> HashMap<String, u64> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for word in words {
        *counts.entry(word.as_ref().to_string()).or_insert(0) += 1;
    }
    counts
}
