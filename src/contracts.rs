// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the record collectors.
//!
//! Debug-mode assertions that restate, at the point of production, the
//! properties the property tests check from the outside:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!` only)
//! 2. **Early failure**: a collector that breaks its own postcondition panics
//!    in the test that exercised it, not three calls later
//!
//! # Contracts
//!
//! | Contract Function        | Postcondition                                        |
//! |--------------------------|------------------------------------------------------|
//! | `check_length_preserved` | a 1:1 map kept every element                         |
//! | `check_sorted_by_key`    | keys strictly increase (sorted *and* deduplicated)   |
//! | `check_sum_preserved`    | grouped sums add up to the ungrouped total           |
//! | `check_partition`        | halves are disjoint, complete, and on the right side |
//!
//! # Usage
//!
//! ```ignore
//! let names = collect(records);
//! check_length_preserved(records.len(), names.len(), "collect_names");
//! ```

use crate::Record;

// ============================================================================
// SEQUENCE CONTRACTS
// ============================================================================

/// Check that a one-to-one transform produced exactly one output per input.
#[inline]
pub fn check_length_preserved(input_len: usize, output_len: usize, operation: &str) {
    debug_assert_eq!(
        input_len, output_len,
        "Contract violation: {} - produced {} elements from {} inputs",
        operation, output_len, input_len
    );
}

/// Check that `items` are strictly increasing by `key`.
///
/// Strict, because the set collectors collapse equal keys: a repeated key
/// means the deduplication did not happen.
///
/// # Panics (debug builds only)
/// Panics at the first adjacent pair that is out of order or equal.
#[inline]
pub fn check_sorted_by_key<T, K, F>(items: &[T], key: F)
where
    K: Ord + std::fmt::Debug,
    F: Fn(&T) -> K,
{
    for i in 1..items.len() {
        let prev = key(&items[i - 1]);
        let curr = key(&items[i]);
        debug_assert!(
            prev < curr,
            "Contract violation: sorted set - key[{}] {:?} >= key[{}] {:?}",
            i - 1,
            prev,
            i,
            curr
        );
    }
}

// ============================================================================
// AGGREGATION CONTRACTS
// ============================================================================

/// Check that per-group sums add up to the sum over the whole input.
#[inline]
pub fn check_sum_preserved<'a>(records: &[Record], sums: impl IntoIterator<Item = &'a u64>) {
    let expected: u64 = records.iter().map(|r| u64::from(r.age())).sum();
    let actual: u64 = sums.into_iter().sum();
    debug_assert_eq!(
        expected, actual,
        "Contract violation: grouped sum - groups total {} but input totals {}",
        actual, expected
    );
}

/// Check that a partition is complete and each side honours the predicate.
///
/// # Panics (debug builds only)
/// Panics if an element sits on the wrong side or if any element went missing.
#[inline]
pub fn check_partition<T, P>(input_len: usize, matched: &[T], unmatched: &[T], predicate: P)
where
    P: Fn(&T) -> bool,
{
    debug_assert_eq!(
        matched.len() + unmatched.len(),
        input_len,
        "Contract violation: partition - {} + {} elements from {} inputs",
        matched.len(),
        unmatched.len(),
        input_len
    );

    for (i, item) in matched.iter().enumerate() {
        debug_assert!(
            predicate(item),
            "Contract violation: partition - matched[{}] fails the predicate",
            i
        );
    }

    for (i, item) in unmatched.iter().enumerate() {
        debug_assert!(
            !predicate(item),
            "Contract violation: partition - unmatched[{}] passes the predicate",
            i
        );
    }
}
