// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A replay of lazy evaluation order.
//!
//! The pipeline is built first, then a line is recorded, then the pipeline runs.
//! If building had done any work, the "First" lines would come before the
//! "Second" line. They come after it, and they interleave with "Third" one
//! element at a time:
//!
//! ```text
//! Second. I should be the second group of prints
//! First. My number is 1
//! Third. My number is 2
//! First. My number is 2
//! First. My number is 3
//! Third. My number is 4
//! ```

use crate::pipeline::Pipeline;
use crate::sink::EventSink;

/// Build `1, 2, 3 -> inspect -> +1 -> even`, record a marker, then run it.
///
/// Returns how many elements reached the consumer.
pub fn replay<S: EventSink + ?Sized>(sink: &S) -> usize {
    let pipeline = Pipeline::from_source(vec![1_u32, 2, 3])
        .inspect(|n| sink.record(format!("First. My number is {}", n)))
        .map(|n| n + 1)
        .filter(|n| n % 2 == 0);
    log::debug!("built {}", pipeline.describe());

    sink.record("Second. I should be the second group of prints".to_string());

    pipeline.for_each(|n| sink.record(format!("Third. My number is {}", n)))
}
