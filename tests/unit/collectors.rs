//! Record collectors over the shared fixture.

use crate::common::{make_record, names, sample_users};
use pipekit::reducers::{grouping_by, joining, to_map_with, Joining};
use pipekit::{
    collect_names, collect_sorted_unique_by_age, join_names, max_by_age_per_name,
    partition_by_age_over, records_by_name, sum_ages_by_name, Pipeline, PipelineError,
};

#[test]
fn fixture_walkthrough() {
    let users = sample_users();

    assert_eq!(collect_names(&users), vec!["kim", "lee", "park", "kim", "choi"]);
    assert_eq!(join_names(&users, ", "), "kim, lee, park, kim, choi");

    let unique = collect_sorted_unique_by_age(&users);
    assert_eq!(names(&unique), vec!["kim", "lee", "kim"]);

    let sums = sum_ages_by_name(&users);
    assert_eq!(sums.values().sum::<u64>(), 131);

    let oldest = max_by_age_per_name(&users);
    assert_eq!(oldest["kim"].age(), 30);
    assert_eq!(oldest["park"].age(), 25);
}

#[test]
fn max_by_tie_goes_to_later_record() {
    let records = vec![make_record("a", 5), make_record("a", 5)];
    let oldest = max_by_age_per_name(&records);
    assert_eq!(oldest.len(), 1);
    assert_eq!(oldest["a"], make_record("a", 5));
}

#[test]
fn partition_of_empty_input_is_two_empty_halves() {
    let (at_or_under, over) = partition_by_age_over(&[], 10);
    assert!(at_or_under.is_empty());
    assert!(over.is_empty());
}

#[test]
fn strict_map_reports_first_duplicate() {
    let records = vec![
        make_record("x", 1),
        make_record("y", 2),
        make_record("y", 3),
        make_record("x", 4),
    ];
    assert_eq!(
        records_by_name(&records),
        Err(PipelineError::DuplicateKey {
            key: "y".to_string()
        })
    );
}

#[test]
fn merge_function_resolves_duplicates() {
    let merged = Pipeline::from_source(sample_users()).collect_with(to_map_with(
        |record: &pipekit::Record| record.name().to_string(),
        |record: pipekit::Record| record.age(),
        |kept: u32, incoming: u32| kept + incoming,
    ));
    assert_eq!(merged["kim"], 51);
    assert_eq!(merged.len(), 4);
}

#[test]
fn grouping_by_keeps_encounter_order_within_groups() {
    let groups = Pipeline::from_source(sample_users())
        .collect_with(grouping_by(|record: &pipekit::Record| record.age()));
    assert_eq!(names(&groups[&25]), vec!["lee", "park"]);
    assert_eq!(names(&groups[&30]), vec!["kim", "choi"]);
}

#[test]
fn joining_with_affixes_wraps_even_empty_input() {
    let empty: Vec<&str> = Vec::new();
    let wrapped =
        Pipeline::from_source(empty).collect_with(Joining::with_affixes(", ", "[", "]"));
    assert_eq!(wrapped, "[]");

    let wrapped =
        Pipeline::from_source(vec!["a", "b"]).collect_with(Joining::with_affixes("; ", "<", ">"));
    assert_eq!(wrapped, "<a; b>");

    let plain = Pipeline::from_source(vec!["solo"]).collect_with(joining("-"));
    assert_eq!(plain, "solo");
}
