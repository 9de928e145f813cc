// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fan-out: the same pipeline, split across a worker pool.
//!
//! `ParallelPipeline` composes its stages into one per-element chain and hands
//! whole elements to rayon workers. Each element runs its full chain on a
//! single worker, so per-element stage order still holds; the order *between*
//! elements does not.
//!
//! Results are accumulated per worker (`fold`) and merged at the end
//! (`reduce`), so no collection is ever written by two threads. When workers
//! really must push into one place, `SharedCollector` puts that place behind a
//! lock. What does not work, and does not compile, is pushing into a plain
//! `Vec` from inside a parallel closure:
//!
//! ```compile_fail
//! use rayon::prelude::*;
//!
//! let mut matched = Vec::new();
//! (0..100).into_par_iter().for_each(|n| {
//!     if n >= 50 {
//!         matched.push(n); // cannot borrow as mutable in a `Fn` closure
//!     }
//! });
//! ```
//!
//! Without the `parallel` feature everything here runs on the calling thread.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use parking_lot::Mutex;
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::config::FanOutConfig;
use crate::error::PipelineError;
use crate::pipeline::{Pipeline, StageKind};
use crate::reducers::to_vec;
use crate::sink::EventSink;

type Chain<'a, T, U> = Arc<dyn Fn(T) -> Option<U> + Send + Sync + 'a>;

/// A pipeline over owned items whose stages run on a worker pool.
pub struct ParallelPipeline<'a, T, U = T> {
    items: Vec<T>,
    chain: Chain<'a, T, U>,
    stages: Vec<StageKind>,
    config: FanOutConfig,
}

impl<'a, T: Send + 'a> ParallelPipeline<'a, T> {
    pub fn new(items: Vec<T>, config: FanOutConfig) -> Self {
        Self {
            items,
            chain: Arc::new(|item: T| Some(item)),
            stages: Vec::new(),
            config,
        }
    }
}

impl<'a, T: Send + 'a, U: Send + 'a> ParallelPipeline<'a, T, U> {
    fn then<V: Send + 'a>(
        self,
        kind: StageKind,
        step: impl Fn(U) -> Option<V> + Send + Sync + 'a,
    ) -> ParallelPipeline<'a, T, V> {
        let ParallelPipeline {
            items,
            chain,
            mut stages,
            config,
        } = self;
        stages.push(kind);
        ParallelPipeline {
            items,
            chain: Arc::new(move |item: T| (*chain)(item).and_then(&step)),
            stages,
            config,
        }
    }

    pub fn inspect<F>(self, f: F) -> Self
    where
        F: Fn(&U) + Send + Sync + 'a,
    {
        self.then(StageKind::Inspect, move |item| {
            f(&item);
            Some(item)
        })
    }

    pub fn map<V: Send + 'a, F>(self, f: F) -> ParallelPipeline<'a, T, V>
    where
        F: Fn(U) -> V + Send + Sync + 'a,
    {
        self.then(StageKind::Map, move |item| Some(f(item)))
    }

    pub fn filter<F>(self, predicate: F) -> Self
    where
        F: Fn(&U) -> bool + Send + Sync + 'a,
    {
        self.then(StageKind::Filter, move |item| predicate(&item).then_some(item))
    }

    pub fn stages(&self) -> &[StageKind] {
        &self.stages
    }

    /// Run every item through the chain, folding survivors per worker and
    /// merging the per-worker results.
    #[cfg(feature = "parallel")]
    fn fold_reduce<A, ID, F, R>(
        self,
        identity: ID,
        fold_op: F,
        reduce_op: R,
    ) -> Result<A, PipelineError>
    where
        A: Send,
        ID: Fn() -> A + Send + Sync,
        F: Fn(A, U) -> A + Send + Sync,
        R: Fn(A, A) -> A + Send + Sync,
    {
        let pool = self.config.build_pool()?;
        log::debug!(
            "fan-out over {} items on {} workers (min_len {})",
            self.items.len(),
            pool.current_num_threads(),
            self.config.min_len
        );
        let ParallelPipeline {
            items,
            chain,
            config,
            ..
        } = self;
        Ok(pool.install(move || {
            items
                .into_par_iter()
                .with_min_len(config.min_len)
                .filter_map(|item| (*chain)(item))
                .fold(&identity, &fold_op)
                .reduce(&identity, &reduce_op)
        }))
    }

    #[cfg(not(feature = "parallel"))]
    fn fold_reduce<A, ID, F, R>(
        self,
        identity: ID,
        fold_op: F,
        reduce_op: R,
    ) -> Result<A, PipelineError>
    where
        A: Send,
        ID: Fn() -> A + Send + Sync,
        F: Fn(A, U) -> A + Send + Sync,
        R: Fn(A, A) -> A + Send + Sync,
    {
        self.config.validate()?;
        log::debug!("fan-out over {} items on the calling thread", self.items.len());
        let chain = self.chain;
        let folded = self
            .items
            .into_iter()
            .filter_map(|item| (*chain)(item))
            .fold(identity(), fold_op);
        Ok(reduce_op(identity(), folded))
    }

    /// Survivors as a `Vec`. Arrival order is unspecified.
    pub fn collect_vec(self) -> Result<Vec<U>, PipelineError> {
        self.fold_reduce(
            Vec::new,
            |mut acc, item| {
                acc.push(item);
                acc
            },
            |mut left, mut right| {
                left.append(&mut right);
                left
            },
        )
    }

    /// Survivors as an ordered set.
    pub fn collect_set(self) -> Result<BTreeSet<U>, PipelineError>
    where
        U: Ord,
    {
        self.fold_reduce(
            BTreeSet::new,
            |mut acc, item| {
                acc.insert(item);
                acc
            },
            |mut left, mut right| {
                left.append(&mut right);
                left
            },
        )
    }

    pub fn count(self) -> Result<usize, PipelineError> {
        self.fold_reduce(|| 0, |n, _| n + 1, |a, b| a + b)
    }

    /// Hand each survivor to `consumer`, possibly from several threads at once.
    pub fn for_each<F>(self, consumer: F) -> Result<(), PipelineError>
    where
        F: Fn(U) + Send + Sync,
    {
        self.fold_reduce(|| (), |(), item| consumer(item), |(), ()| ())
    }
}

/// A lock-protected collection that several workers may push into.
#[derive(Debug, Default)]
pub struct SharedCollector<T> {
    items: Mutex<Vec<T>>,
}

impl<T> SharedCollector<T> {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
        }
    }

    pub fn push(&self, item: T) {
        self.items.lock().push(item);
    }

    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }

    pub fn into_inner(self) -> Vec<T> {
        self.items.into_inner()
    }
}

// ============================================================================
// MATCHING AT A THRESHOLD
// ============================================================================

/// `items >= threshold`, in input order, on the calling thread.
pub fn matched_at_least_sequential(items: &[i64], threshold: i64) -> Vec<i64> {
    Pipeline::from_source(items.iter().copied())
        .filter(move |n| *n >= threshold)
        .collect_with(to_vec())
}

/// `items >= threshold`, with per-worker accumulation merged at the end.
pub fn matched_at_least_parallel(
    items: &[i64],
    threshold: i64,
    config: &FanOutConfig,
) -> Result<Vec<i64>, PipelineError> {
    ParallelPipeline::new(items.to_vec(), config.clone())
        .filter(move |n| *n >= threshold)
        .collect_vec()
}

/// `items >= threshold`, with every worker pushing into one locked collector.
///
/// Each push is recorded to `sink` as `"<thread id> matched <n>"`, so the
/// interleaving across workers can be inspected after the fact.
pub fn matched_at_least_shared<S>(
    items: &[i64],
    threshold: i64,
    config: &FanOutConfig,
    sink: &S,
) -> Result<Vec<i64>, PipelineError>
where
    S: EventSink + ?Sized,
{
    let matched = SharedCollector::new();
    ParallelPipeline::new(items.to_vec(), config.clone())
        .filter(move |n| *n >= threshold)
        .for_each(|n| {
            let thread = std::thread::current().id();
            log::trace!("{:?} matched {}", thread, n);
            sink.record(format!("{:?} matched {}", thread, n));
            matched.push(n);
        })?;
    Ok(matched.into_inner())
}
