// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the pipekit command-line interface.
//!
//! One subcommand per demonstration: record collectors, word counting, lazy
//! evaluation order, parallel fan-out, and the variable-arity cases. Every
//! subcommand prints what the library computed; none of them mutate anything
//! on disk.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pipekit",
    about = "Lazy pipelines, terminal reducers, and parallel fan-out",
    version
)]
pub struct Cli {
    /// More log output: -v info, -vv debug, -vvv trace (RUST_LOG wins)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run every record collector and print the results
    Collect {
        /// JSON array of {"name", "age"} records (defaults to the built-in sample)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Delimiter for the joined names
        #[arg(short, long, default_value = ", ")]
        delimiter: String,

        /// Age threshold for partitioning (strictly greater is "over")
        #[arg(short, long, default_value = "25")]
        threshold: u32,
    },

    /// Count word frequencies both ways and compare
    Frequencies {
        /// Words to count
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Replay the lazy evaluation order
    Laziness,

    /// Match a range sequentially and in parallel
    FanOut {
        /// Items are 0..count
        #[arg(long, default_value = "100")]
        count: i64,

        /// Keep items >= threshold
        #[arg(long, default_value = "50")]
        threshold: i64,

        /// Worker threads (0 = one per logical CPU)
        #[arg(long)]
        threads: Option<usize>,

        /// Minimum items per worker split
        #[arg(long)]
        min_len: Option<usize>,

        /// JSON fan-out config; flags override its fields
        #[arg(long)]
        config: Option<PathBuf>,

        /// Push into one locked collector and print each worker's matches
        #[arg(long)]
        shared: bool,
    },

    /// Minimum of one or more integers
    Min {
        #[arg(allow_negative_numbers = true)]
        first: i64,

        #[arg(allow_negative_numbers = true)]
        rest: Vec<i64>,
    },

    /// Show a variable-arity store failing late on read
    Varargs,
}
