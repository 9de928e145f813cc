//! Pipeline ordering and fan-out equivalence over random inputs.

use pipekit::reducers::to_vec;
use pipekit::{
    matched_at_least_parallel, matched_at_least_sequential, min_of, EventSink, FanOutConfig,
    MemorySink, Pipeline,
};
use proptest::prelude::*;
use std::cell::Cell;

proptest! {
    #[test]
    fn inspect_log_interleaves_per_element(items in prop::collection::vec(0u32..1000, 0..30)) {
        let sink = MemorySink::new();
        let pipeline = Pipeline::from_source(items.clone())
            .inspect(|n| sink.record(format!("in {}", n)))
            .filter(|n| n % 2 == 0)
            .inspect(|n| sink.record(format!("out {}", n)));
        prop_assert!(sink.is_empty());

        let kept = pipeline.collect_with(to_vec());

        let mut expected = Vec::new();
        for n in &items {
            expected.push(format!("in {}", n));
            if n % 2 == 0 {
                expected.push(format!("out {}", n));
            }
        }
        prop_assert_eq!(sink.events(), expected);
        prop_assert_eq!(kept.len(), items.iter().filter(|n| *n % 2 == 0).count());
    }

    #[test]
    fn take_while_pulls_up_to_first_rejection(
        items in prop::collection::vec(0u32..100, 0..40),
        limit in 0u32..100,
    ) {
        let pulled = Cell::new(0usize);
        let kept = Pipeline::from_source(items.clone())
            .inspect(|_| pulled.set(pulled.get() + 1))
            .take_while(|n| *n < limit)
            .collect_with(to_vec());

        let prefix = items.iter().take_while(|n| **n < limit).count();
        prop_assert_eq!(kept.len(), prefix);
        prop_assert_eq!(pulled.get(), (prefix + 1).min(items.len()));
    }

    #[test]
    fn fan_out_matches_same_multiset(
        items in prop::collection::vec(-500i64..500, 0..300),
        threshold in -500i64..500,
        threads in 1usize..5,
        min_len in 1usize..20,
    ) {
        let config = FanOutConfig::default().with_threads(threads).with_min_len(min_len);
        let mut sequential = matched_at_least_sequential(&items, threshold);
        let mut parallel = matched_at_least_parallel(&items, threshold, &config).unwrap();
        sequential.sort_unstable();
        parallel.sort_unstable();
        prop_assert_eq!(sequential, parallel);
    }

    #[test]
    fn min_of_is_a_lower_bound(
        first in any::<i64>(),
        rest in prop::collection::vec(any::<i64>(), 0..10),
    ) {
        let min = min_of(first, &rest);
        prop_assert!(min <= first);
        prop_assert!(rest.iter().all(|n| min <= *n));
        prop_assert!(min == first || rest.contains(&min));
    }
}
