// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The value that flows through the record pipelines.
//!
//! `Record` is deliberately boring: a name and an age, immutable once built.
//! Fields are private so nothing downstream of construction can change them,
//! which is what lets the collectors hand out clones freely.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable `(name, age)` pair used as pipeline fodder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    name: String,
    age: u32,
}

impl Record {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn age(&self) -> u32 {
        self.age
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Record{{name='{}', age={}}}", self.name, self.age)
    }
}
