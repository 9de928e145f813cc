// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Injectable destinations for demonstration side effects.
//!
//! The pipelines in this crate exist to show *when* side effects happen. Writing
//! them straight to stdout makes that impossible to assert on, so every
//! observable effect goes through an `EventSink` instead. Tests hand in a
//! `MemorySink` and read the captured order back; the binary hands in a
//! `StdoutSink`; library users who just want the trail in their logs use
//! `LogSink`.
//!
//! Sinks are `Send + Sync` because fan-out workers record into the same sink
//! from several threads at once.

use parking_lot::Mutex;
use std::sync::Arc;

/// Receives one event per observable side effect.
pub trait EventSink: Send + Sync {
    fn record(&self, event: String);
}

impl<S: EventSink + ?Sized> EventSink for &S {
    fn record(&self, event: String) {
        (**self).record(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for Arc<S> {
    fn record(&self, event: String) {
        (**self).record(event);
    }
}

/// Captures events in arrival order behind a lock.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<String> {
        self.events.lock().clone()
    }

    /// Drain the captured events, leaving the sink empty.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl EventSink for MemorySink {
    fn record(&self, event: String) {
        self.events.lock().push(event);
    }
}

/// Forwards events to the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn record(&self, event: String) {
        log::info!(target: "pipekit::events", "{}", event);
    }
}

/// Prints each event on its own line. Used by the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl EventSink for StdoutSink {
    fn record(&self, event: String) {
        println!("{}", event);
    }
}
