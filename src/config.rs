// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fan-out configuration.
//!
//! Loaded from a small JSON file or built in code; command-line flags override
//! individual fields. `threads = 0` leaves the pool size to rayon.
//!
//! ```json
//! { "threads": 4, "minLen": 8 }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::PipelineError;

/// How a `ParallelPipeline` splits its work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FanOutConfig {
    /// Worker threads. 0 means rayon's default (one per logical CPU).
    pub threads: usize,
    /// Minimum number of items a worker takes per split.
    pub min_len: usize,
}

impl Default for FanOutConfig {
    fn default() -> Self {
        Self {
            threads: 0,
            min_len: 1,
        }
    }
}

impl FanOutConfig {
    /// Read and validate a JSON config file.
    pub fn from_json_file(path: &Path) -> Result<Self, PipelineError> {
        let content = fs::read_to_string(path).map_err(|e| PipelineError::Config {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;
        Self::from_json_str(&content).map_err(|e| PipelineError::Config {
            message: format!("{}: {}", path.display(), e),
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, PipelineError> {
        let config: Self = serde_json::from_str(json).map_err(|e| PipelineError::Config {
            message: format!("invalid JSON: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.min_len == 0 {
            return Err(PipelineError::Config {
                message: "minLen must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Build a dedicated worker pool sized by this config.
    #[cfg(feature = "parallel")]
    pub fn build_pool(&self) -> Result<rayon::ThreadPool, PipelineError> {
        self.validate()?;
        rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .thread_name(|index| format!("pipekit-worker-{}", index))
            .build()
            .map_err(|e| PipelineError::Config {
                message: e.to_string(),
            })
    }
}
