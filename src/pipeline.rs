// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lazy, pull-driven pipelines with an explicit build/run split.
//!
//! Rust iterators are already lazy, but that laziness is easy to lose track of:
//! a chain of adapters looks like work even though none has happened. A
//! `Pipeline` makes the split visible. Building one records the stage chain and
//! nothing else (the source is not even turned into an iterator yet). Only a
//! terminal call (`for_each`, `run_while`, `collect_with`, `try_collect_with`,
//! or iterating it) opens the source and starts pulling.
//!
//! # Ordering
//!
//! Each element travels through every stage before the next element is pulled:
//!
//! ```text
//! source ──1──▶ inspect ──1──▶ map ──2──▶ filter ──2──▶ terminal
//! source ──2──▶ inspect ──2──▶ map ──3──▶ filter ✗
//! source ──3──▶ inspect ──3──▶ map ──4──▶ filter ──4──▶ terminal
//! ```
//!
//! Side effects are never batched across elements, and a stage downstream of a
//! filter never sees what the filter rejected. A terminal that stops early
//! (`run_while`) or a `take_while` stage bounds how much of the source is ever
//! pulled.
//!
//! ```
//! use pipekit::pipeline::Pipeline;
//! use pipekit::sink::{EventSink, MemorySink};
//!
//! let sink = MemorySink::new();
//! let pipeline = Pipeline::from_source(vec![1, 2])
//!     .inspect(|n| sink.record(format!("saw {}", n)))
//!     .map(|n| n * 10);
//! assert!(sink.is_empty());
//!
//! let total: i32 = pipeline.into_iter().sum();
//! assert_eq!(total, 30);
//! assert_eq!(sink.events(), vec!["saw 1", "saw 2"]);
//! ```

use std::fmt;

use crate::error::PipelineError;
use crate::reducers::{reduce_all, try_reduce_all, Reducer, TryReducer};

/// A running pipeline: the composed stage chain over an opened source.
pub type Stream<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

type Opener<'a, T> = Box<dyn FnOnce() -> Stream<'a, T> + 'a>;

/// The kind of an intermediate stage, for introspection and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
    Inspect,
    Map,
    Filter,
    TakeWhile,
}

impl StageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StageKind::Inspect => "inspect",
            StageKind::Map => "map",
            StageKind::Filter => "filter",
            StageKind::TakeWhile => "take_while",
        }
    }
}

/// A description of a source plus a chain of stages, not yet executed.
pub struct Pipeline<'a, T> {
    open: Opener<'a, T>,
    stages: Vec<StageKind>,
}

impl<'a, T: 'a> Pipeline<'a, T> {
    /// Describe a pipeline over `source`. `into_iter` is deferred to the terminal call.
    pub fn from_source<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T> + 'a,
        I::IntoIter: 'a,
    {
        Self {
            open: Box::new(move || -> Stream<'a, T> { Box::new(source.into_iter()) }),
            stages: Vec::new(),
        }
    }

    /// Describe a pipeline whose source produces elements on demand.
    ///
    /// `next` runs once per pulled element, so any side effect it has happens
    /// in lockstep with the downstream stages.
    pub fn generate<F>(next: F) -> Self
    where
        F: FnMut() -> Option<T> + 'a,
    {
        Self {
            open: Box::new(move || -> Stream<'a, T> { Box::new(std::iter::from_fn(next)) }),
            stages: Vec::new(),
        }
    }

    fn then<U: 'a>(
        self,
        kind: StageKind,
        attach: impl FnOnce(Stream<'a, T>) -> Stream<'a, U> + 'a,
    ) -> Pipeline<'a, U> {
        let Pipeline { open, mut stages } = self;
        stages.push(kind);
        Pipeline {
            open: Box::new(move || attach(open())),
            stages,
        }
    }

    /// Observe each element without changing it.
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnMut(&T) + 'a,
    {
        self.then(StageKind::Inspect, move |upstream| -> Stream<'a, T> {
            Box::new(upstream.inspect(f))
        })
    }

    pub fn map<U: 'a, F>(self, f: F) -> Pipeline<'a, U>
    where
        F: FnMut(T) -> U + 'a,
    {
        self.then(StageKind::Map, move |upstream| -> Stream<'a, U> {
            Box::new(upstream.map(f))
        })
    }

    pub fn filter<F>(self, predicate: F) -> Self
    where
        F: FnMut(&T) -> bool + 'a,
    {
        self.then(StageKind::Filter, move |upstream| -> Stream<'a, T> {
            Box::new(upstream.filter(predicate))
        })
    }

    /// Stop pulling from the source at the first element the predicate rejects.
    pub fn take_while<F>(self, predicate: F) -> Self
    where
        F: FnMut(&T) -> bool + 'a,
    {
        self.then(StageKind::TakeWhile, move |upstream| -> Stream<'a, T> {
            Box::new(upstream.take_while(predicate))
        })
    }

    /// The recorded stage chain, in declaration order.
    pub fn stages(&self) -> &[StageKind] {
        &self.stages
    }

    /// Human-readable chain, e.g. `source -> inspect -> map`.
    pub fn describe(&self) -> String {
        std::iter::once("source")
            .chain(self.stages.iter().map(|stage| stage.as_str()))
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    fn start(self) -> Stream<'a, T> {
        log::debug!("running pipeline: {}", self.describe());
        (self.open)()
    }

    /// Pull every element through the chain into `consumer`. Returns how many arrived.
    pub fn for_each<F>(self, mut consumer: F) -> usize
    where
        F: FnMut(T),
    {
        let mut delivered = 0;
        for item in self.start() {
            consumer(item);
            delivered += 1;
        }
        log::debug!("pipeline delivered {} elements", delivered);
        delivered
    }

    /// Like `for_each`, but stops pulling as soon as `consumer` returns `false`.
    ///
    /// The element that made the consumer stop counts as delivered.
    pub fn run_while<F>(self, mut consumer: F) -> usize
    where
        F: FnMut(T) -> bool,
    {
        let mut delivered = 0;
        for item in self.start() {
            delivered += 1;
            if !consumer(item) {
                break;
            }
        }
        log::debug!("pipeline stopped after {} elements", delivered);
        delivered
    }

    pub fn collect_with<R>(self, reducer: R) -> R::Output
    where
        R: Reducer<T>,
    {
        reduce_all(self.start(), reducer)
    }

    /// Collect with a reducer that can fail. Pulling stops at the first error.
    pub fn try_collect_with<R>(self, reducer: R) -> Result<R::Output, PipelineError>
    where
        R: TryReducer<T>,
    {
        let result = try_reduce_all(self.start(), reducer);
        if let Err(err) = &result {
            log::debug!("pipeline aborted: {}", err);
        }
        result
    }
}

impl<'a, T: 'a> IntoIterator for Pipeline<'a, T> {
    type Item = T;
    type IntoIter = Stream<'a, T>;

    fn into_iter(self) -> Stream<'a, T> {
        self.start()
    }
}

impl<T> fmt::Debug for Pipeline<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stages)
            .finish_non_exhaustive()
    }
}
