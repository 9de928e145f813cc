//! Lazy build/run split and per-element ordering.

use pipekit::laziness::replay;
use pipekit::reducers::to_vec;
use pipekit::{EventSink, MemorySink, Pipeline, StageKind};
use std::cell::Cell;

#[test]
fn replay_matches_expected_order() {
    let sink = MemorySink::new();
    replay(&sink);
    let events = sink.events();
    assert_eq!(events.len(), 6);
    assert!(events[0].starts_with("Second."));
    assert_eq!(events[1], "First. My number is 1");
    assert_eq!(events[5], "Third. My number is 4");
}

#[test]
fn building_records_stages_without_running_them() {
    let sink = MemorySink::new();
    let pipeline = Pipeline::from_source(1..=3)
        .inspect(|n| sink.record(format!("peek {}", n)))
        .filter(|n| n % 2 == 1)
        .map(|n| n * 100);

    assert!(sink.is_empty());
    assert_eq!(
        pipeline.stages(),
        &[StageKind::Inspect, StageKind::Filter, StageKind::Map]
    );
    assert_eq!(pipeline.describe(), "source -> inspect -> filter -> map");

    let out = pipeline.collect_with(to_vec());
    assert_eq!(out, vec![100, 300]);
    assert_eq!(sink.events(), vec!["peek 1", "peek 2", "peek 3"]);
}

#[test]
fn generated_source_is_pulled_on_demand() {
    let produced = Cell::new(0);
    let pipeline = Pipeline::generate(|| {
        produced.set(produced.get() + 1);
        Some(produced.get())
    })
    .take_while(|n| *n < 4);
    assert_eq!(produced.get(), 0);

    let delivered = pipeline.for_each(|_| {});
    assert_eq!(delivered, 3);
    // The rejected fourth element is the last one pulled.
    assert_eq!(produced.get(), 4);
}

#[test]
fn run_while_stops_pulling_early() {
    let pulled = Cell::new(0);
    let delivered = Pipeline::from_source(0..1_000)
        .inspect(|_| pulled.set(pulled.get() + 1))
        .run_while(|n| n < 2);
    assert_eq!(delivered, 3);
    assert_eq!(pulled.get(), 3);
}
