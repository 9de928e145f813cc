//! Collector invariants over random record lists.

use crate::common::{records_strategy, words_strategy};
use pipekit::{
    collect_names, collect_sorted_unique_by_age, count_frequencies, count_frequencies_manual,
    max_by_age_per_name, partition_by_age_over, sum_ages_by_name,
};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

proptest! {
    #[test]
    fn names_preserve_order_and_length(records in records_strategy()) {
        let names = collect_names(&records);
        prop_assert_eq!(names.len(), records.len());
        for (name, record) in names.iter().zip(&records) {
            prop_assert_eq!(name.as_str(), record.name());
        }
    }

    #[test]
    fn sorted_unique_is_strictly_increasing(records in records_strategy()) {
        let sorted = collect_sorted_unique_by_age(&records);
        prop_assert!(sorted.windows(2).all(|w| w[0].age() < w[1].age()));

        let distinct_ages: BTreeSet<u32> = records.iter().map(|r| r.age()).collect();
        prop_assert_eq!(sorted.len(), distinct_ages.len());

        // The survivor for each age is the first record with that age.
        for survivor in &sorted {
            let first = records.iter().find(|r| r.age() == survivor.age());
            prop_assert_eq!(first, Some(survivor));
        }
    }

    #[test]
    fn sums_preserve_total_age(records in records_strategy()) {
        let sums = sum_ages_by_name(&records);
        let total: u64 = records.iter().map(|r| u64::from(r.age())).sum();
        prop_assert_eq!(sums.values().sum::<u64>(), total);
    }

    #[test]
    fn max_by_holds_the_oldest_age_per_name(records in records_strategy()) {
        let oldest = max_by_age_per_name(&records);
        let mut expected: HashMap<&str, u32> = HashMap::new();
        for record in &records {
            let age = expected.entry(record.name()).or_insert(record.age());
            *age = (*age).max(record.age());
        }
        prop_assert_eq!(oldest.len(), expected.len());
        for (name, age) in expected {
            prop_assert_eq!(oldest[name].age(), age);
        }
    }

    #[test]
    fn partition_is_disjoint_and_complete(records in records_strategy(), threshold in 0u32..80) {
        let (at_or_under, over) = partition_by_age_over(&records, threshold);
        prop_assert_eq!(at_or_under.len() + over.len(), records.len());
        prop_assert!(at_or_under.iter().all(|r| r.age() <= threshold));
        prop_assert!(over.iter().all(|r| r.age() > threshold));
    }

    #[test]
    fn frequency_paths_agree(words in words_strategy()) {
        let declarative = count_frequencies(&words);
        prop_assert_eq!(declarative.values().sum::<u64>(), words.len() as u64);
        prop_assert_eq!(declarative, count_frequencies_manual(&words));
    }
}

#[test]
fn frequency_example_counts() {
    let words = ["a", "a", "b", "b", "c", "c", "d"];
    let expected: HashMap<String, u64> = [("a", 2), ("b", 2), ("c", 2), ("d", 1)]
        .into_iter()
        .map(|(w, n)| (w.to_string(), n))
        .collect();
    assert_eq!(count_frequencies(&words), expected);
    assert_eq!(count_frequencies_manual(&words), expected);
}
