// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lazy pipelines, terminal reducers, and parallel fan-out.
//!
//! A `Pipeline` describes a source and a chain of stages without running any of
//! them. A terminal call pulls elements one at a time through the whole chain
//! and into a `Reducer`, which decides the shape of the result: a list, a sorted
//! set, a grouped map, a joined string, a two-way partition. `ParallelPipeline`
//! runs the same kind of chain on a rayon pool.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ pipeline.rs │────▶│ reducers.rs  │◀────│  fan_out.rs  │
//! │ (Pipeline,  │     │ (Reducer,    │     │ (Parallel-   │
//! │  StageKind) │     │  TryReducer) │     │  Pipeline)   │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │  collect.rs · frequency.rs · laziness.rs · varargs.rs   │
//! │        (record collectors and demonstrations)           │
//! └─────────────────────────────────────────────────────────┘
//!        │
//!        ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │   contracts.rs (debug-only result checks)  sink.rs      │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! | Module      | Role                                         |
//! |-------------|----------------------------------------------|
//! | `pipeline`  | Lazy build/run split, per-element ordering   |
//! | `reducers`  | Terminal accumulators                        |
//! | `collect`   | One function per record collector            |
//! | `frequency` | Word counts, declarative vs. manual          |
//! | `laziness`  | Replay of lazy evaluation order              |
//! | `varargs`   | Variable arity: erased slots and `min_of`    |
//! | `fan_out`   | Parallel chains, per-worker accumulation     |
//! | `config`    | Fan-out settings                             |
//! | `sink`      | Injectable side-effect destinations          |
//!
//! # Usage
//!
//! ```
//! use pipekit::{collect_names, partition_by_age_over, Record};
//!
//! let records = vec![Record::new("kim", 21), Record::new("lee", 30)];
//! assert_eq!(collect_names(&records), vec!["kim", "lee"]);
//!
//! let (young, old) = partition_by_age_over(&records, 25);
//! assert_eq!(young.len(), 1);
//! assert_eq!(old[0].name(), "lee");
//! ```

pub mod collect;
pub mod config;
pub mod contracts;
pub mod error;
pub mod fan_out;
pub mod frequency;
pub mod laziness;
pub mod pipeline;
pub mod reducers;
pub mod sink;
pub mod testing;
mod types;
pub mod varargs;

// Re-exports for public API
pub use collect::{
    collect_names, collect_sorted_unique_by_age, join_names, max_by_age_per_name,
    partition_by_age_over, records_by_name, sum_ages_by_name,
};
pub use config::FanOutConfig;
pub use error::PipelineError;
pub use fan_out::{
    matched_at_least_parallel, matched_at_least_sequential, matched_at_least_shared,
    ParallelPipeline, SharedCollector,
};
pub use frequency::{count_frequencies, count_frequencies_manual};
pub use pipeline::{Pipeline, StageKind};
pub use reducers::{Reducer, TryReducer};
pub use sink::{EventSink, LogSink, MemorySink, StdoutSink};
pub use types::Record;
pub use varargs::{min_of, min_of_slice, VarArgs};
