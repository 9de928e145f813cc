//! Parallel fan-out against the sequential baseline.

use crate::common::zero_to;
use pipekit::{
    matched_at_least_parallel, matched_at_least_sequential, matched_at_least_shared, FanOutConfig,
    MemorySink, ParallelPipeline, SharedCollector,
};
use std::collections::BTreeSet;

#[test]
fn hundred_items_at_fifty_threshold() {
    let items = zero_to(100);
    let expected: BTreeSet<i64> = (50..=99).collect();

    let sequential = matched_at_least_sequential(&items, 50);
    assert_eq!(sequential.len(), 50);
    assert_eq!(sequential.iter().copied().collect::<BTreeSet<_>>(), expected);

    for threads in [1, 2, 8] {
        let config = FanOutConfig::default().with_threads(threads);
        let parallel = matched_at_least_parallel(&items, 50, &config).unwrap();
        assert_eq!(parallel.len(), 50);
        assert_eq!(parallel.into_iter().collect::<BTreeSet<_>>(), expected);
    }
}

#[test]
fn shared_variant_records_one_event_per_match() {
    let sink = MemorySink::new();
    let config = FanOutConfig::default().with_threads(3).with_min_len(5);
    let matched = matched_at_least_shared(&zero_to(100), 90, &config, &sink).unwrap();

    assert_eq!(matched.len(), 10);
    let events = sink.events();
    assert_eq!(events.len(), 10);
    assert!(events.iter().all(|e| e.starts_with("ThreadId(")));
    assert!(events.iter().any(|e| e.ends_with(" matched 99")));
}

#[test]
fn shared_collector_accepts_pushes_from_many_workers() {
    let collector = SharedCollector::new();
    ParallelPipeline::new(zero_to(200), FanOutConfig::default().with_threads(4))
        .map(|n| n * 2)
        .for_each(|n| collector.push(n))
        .unwrap();
    assert_eq!(collector.len(), 200);
    let sum: i64 = collector.into_inner().into_iter().sum();
    assert_eq!(sum, 2 * (0..200).sum::<i64>());
}

#[test]
fn threshold_above_every_item_matches_nothing() {
    let config = FanOutConfig::default();
    assert!(matched_at_least_parallel(&zero_to(10), 10, &config)
        .unwrap()
        .is_empty());
    assert!(matched_at_least_sequential(&[], 0).is_empty());
}
