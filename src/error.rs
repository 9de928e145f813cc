// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors surfaced by reducers, variable-arity views, and fan-out setup.
//!
//! Nothing here is retried or recovered internally. Every variant reaches the
//! caller on the first failure.

use std::fmt;

/// Error type for pipeline and variable-arity failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// A map collector without a merge function saw the same key twice.
    DuplicateKey { key: String },
    /// An erased variable-arity slot held a value of a different type than declared.
    TypeMismatch {
        index: usize,
        expected: &'static str,
    },
    /// An operation with no sensible default received no input.
    EmptyInput { operation: &'static str },
    /// Fan-out configuration was rejected or the worker pool could not be built.
    Config { message: String },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::DuplicateKey { key } => {
                write!(f, "duplicate key '{}' with no merge function", key)
            }
            PipelineError::TypeMismatch { index, expected } => {
                write!(
                    f,
                    "slot {} does not hold a value of declared type {}",
                    index, expected
                )
            }
            PipelineError::EmptyInput { operation } => {
                write!(f, "{} requires at least one argument", operation)
            }
            PipelineError::Config { message } => {
                write!(f, "invalid fan-out configuration: {}", message)
            }
        }
    }
}

impl std::error::Error for PipelineError {}
