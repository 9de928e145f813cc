// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal reducers: the things a pipeline collects *into*.
//!
//! A `Reducer` sees each element exactly once, in pull order, and produces one
//! output at the end. It never sees an element a filtering stage rejected, and
//! it never sees elements past the point where a `take_while` stopped pulling.
//!
//! | Reducer          | Output                   | Collision policy                    |
//! |------------------|--------------------------|-------------------------------------|
//! | `ToVec`          | `Vec<T>`                 | n/a, order preserved                |
//! | `ToSortedSetBy`  | `Vec<T>` ascending by key| first element seen for a key wins   |
//! | `GroupingSum`    | `HashMap<K, u64>`        | values added                        |
//! | `GroupingMaxBy`  | `HashMap<K, T>`          | greater wins, tie goes to the later |
//! | `GroupingCount`  | `HashMap<K, u64>`        | counted                             |
//! | `GroupingBy`     | `HashMap<K, Vec<T>>`     | appended in pull order              |
//! | `ToMap`          | `HashMap<K, V>`          | `PipelineError::DuplicateKey`       |
//! | `ToMapWith`      | `HashMap<K, V>`          | caller-supplied merge               |
//! | `Joining`        | `String`                 | n/a                                 |
//! | `Partitioning`   | `Partitioned<T>`         | n/a, order preserved in each half   |

use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::error::PipelineError;

/// Folds a stream of elements into a single output. Cannot fail.
pub trait Reducer<T> {
    type Output;

    fn accumulate(&mut self, item: T);

    fn finish(self) -> Self::Output;
}

/// A reducer whose collision policy is to fail.
pub trait TryReducer<T> {
    type Output;

    fn try_accumulate(&mut self, item: T) -> Result<(), PipelineError>;

    fn finish(self) -> Self::Output;
}

/// Drive `reducer` over every element of `items`.
pub fn reduce_all<T, I, R>(items: I, mut reducer: R) -> R::Output
where
    I: IntoIterator<Item = T>,
    R: Reducer<T>,
{
    for item in items {
        reducer.accumulate(item);
    }
    reducer.finish()
}

/// Drive `reducer` over every element of `items`, stopping on the first error.
///
/// Elements after the failing one are never pulled.
pub fn try_reduce_all<T, I, R>(items: I, mut reducer: R) -> Result<R::Output, PipelineError>
where
    I: IntoIterator<Item = T>,
    R: TryReducer<T>,
{
    for item in items {
        reducer.try_accumulate(item)?;
    }
    Ok(reducer.finish())
}

// ============================================================================
// SEQUENCES AND SETS
// ============================================================================

/// Materialize into a `Vec` in pull order.
#[derive(Debug)]
pub struct ToVec<T> {
    items: Vec<T>,
}

pub fn to_vec<T>() -> ToVec<T> {
    ToVec { items: Vec::new() }
}

impl<T> Reducer<T> for ToVec<T> {
    type Output = Vec<T>;

    fn accumulate(&mut self, item: T) {
        self.items.push(item);
    }

    fn finish(self) -> Vec<T> {
        self.items
    }
}

/// Materialize into a set ordered and deduplicated by a key.
///
/// Two elements with the same key are the same element as far as this set is
/// concerned. The first one pulled stays; later ones are discarded, which is
/// how an ordered set treats a second insert of an equal element.
pub struct ToSortedSetBy<T, K, F> {
    key: F,
    entries: BTreeMap<K, T>,
}

pub fn to_sorted_set_by<T, K, F>(key: F) -> ToSortedSetBy<T, K, F>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    ToSortedSetBy {
        key,
        entries: BTreeMap::new(),
    }
}

impl<T, K, F> Reducer<T> for ToSortedSetBy<T, K, F>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    type Output = Vec<T>;

    fn accumulate(&mut self, item: T) {
        let key = (self.key)(&item);
        self.entries.entry(key).or_insert(item);
    }

    fn finish(self) -> Vec<T> {
        self.entries.into_values().collect()
    }
}

// ============================================================================
// GROUPING
// ============================================================================

/// Group by key and sum an integer projection of each element.
pub struct GroupingSum<T, K, KF, VF> {
    key: KF,
    value: VF,
    sums: HashMap<K, u64>,
    _item: PhantomData<fn(T)>,
}

pub fn grouping_sum<T, K, KF, VF>(key: KF, value: VF) -> GroupingSum<T, K, KF, VF>
where
    K: Eq + Hash,
    KF: FnMut(&T) -> K,
    VF: FnMut(&T) -> u64,
{
    GroupingSum {
        key,
        value,
        sums: HashMap::new(),
        _item: PhantomData,
    }
}

impl<T, K, KF, VF> Reducer<T> for GroupingSum<T, K, KF, VF>
where
    K: Eq + Hash,
    KF: FnMut(&T) -> K,
    VF: FnMut(&T) -> u64,
{
    type Output = HashMap<K, u64>;

    fn accumulate(&mut self, item: T) {
        let amount = (self.value)(&item);
        *self.sums.entry((self.key)(&item)).or_insert(0) += amount;
    }

    fn finish(self) -> HashMap<K, u64> {
        self.sums
    }
}

/// Group by key and keep the greatest element per key.
///
/// When the comparator calls two elements equal, the later one replaces the
/// earlier one. An element is only ever dropped in favour of one that compares
/// greater-or-equal.
pub struct GroupingMaxBy<T, K, KF, C> {
    key: KF,
    compare: C,
    best: HashMap<K, T>,
}

pub fn grouping_max_by<T, K, KF, C>(key: KF, compare: C) -> GroupingMaxBy<T, K, KF, C>
where
    K: Eq + Hash,
    KF: FnMut(&T) -> K,
    C: FnMut(&T, &T) -> Ordering,
{
    GroupingMaxBy {
        key,
        compare,
        best: HashMap::new(),
    }
}

impl<T, K, KF, C> Reducer<T> for GroupingMaxBy<T, K, KF, C>
where
    K: Eq + Hash,
    KF: FnMut(&T) -> K,
    C: FnMut(&T, &T) -> Ordering,
{
    type Output = HashMap<K, T>;

    fn accumulate(&mut self, item: T) {
        match self.best.entry((self.key)(&item)) {
            Entry::Occupied(mut slot) => {
                if (self.compare)(&item, slot.get()) != Ordering::Less {
                    slot.insert(item);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(item);
            }
        }
    }

    fn finish(self) -> HashMap<K, T> {
        self.best
    }
}

/// Count elements per key.
pub struct GroupingCount<T, K, F> {
    key: F,
    counts: HashMap<K, u64>,
    _item: PhantomData<fn(T)>,
}

pub fn grouping_count<T, K, F>(key: F) -> GroupingCount<T, K, F>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    GroupingCount {
        key,
        counts: HashMap::new(),
        _item: PhantomData,
    }
}

impl<T, K, F> Reducer<T> for GroupingCount<T, K, F>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    type Output = HashMap<K, u64>;

    fn accumulate(&mut self, item: T) {
        *self.counts.entry((self.key)(&item)).or_insert(0) += 1;
    }

    fn finish(self) -> HashMap<K, u64> {
        self.counts
    }
}

/// Group elements into per-key vectors, each in pull order.
pub struct GroupingBy<T, K, F> {
    key: F,
    groups: HashMap<K, Vec<T>>,
}

pub fn grouping_by<T, K, F>(key: F) -> GroupingBy<T, K, F>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    GroupingBy {
        key,
        groups: HashMap::new(),
    }
}

impl<T, K, F> Reducer<T> for GroupingBy<T, K, F>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    type Output = HashMap<K, Vec<T>>;

    fn accumulate(&mut self, item: T) {
        self.groups.entry((self.key)(&item)).or_default().push(item);
    }

    fn finish(self) -> HashMap<K, Vec<T>> {
        self.groups
    }
}

// ============================================================================
// MAPS
// ============================================================================

/// Collect into a map with no merge function. A repeated key is an error.
pub struct ToMap<T, K, V, KF, VF> {
    key: KF,
    value: VF,
    map: HashMap<K, V>,
    _item: PhantomData<fn(T)>,
}

pub fn to_map<T, K, V, KF, VF>(key: KF, value: VF) -> ToMap<T, K, V, KF, VF>
where
    K: Eq + Hash + Display,
    KF: FnMut(&T) -> K,
    VF: FnMut(T) -> V,
{
    ToMap {
        key,
        value,
        map: HashMap::new(),
        _item: PhantomData,
    }
}

impl<T, K, V, KF, VF> TryReducer<T> for ToMap<T, K, V, KF, VF>
where
    K: Eq + Hash + Display,
    KF: FnMut(&T) -> K,
    VF: FnMut(T) -> V,
{
    type Output = HashMap<K, V>;

    fn try_accumulate(&mut self, item: T) -> Result<(), PipelineError> {
        match self.map.entry((self.key)(&item)) {
            Entry::Occupied(slot) => Err(PipelineError::DuplicateKey {
                key: slot.key().to_string(),
            }),
            Entry::Vacant(slot) => {
                slot.insert((self.value)(item));
                Ok(())
            }
        }
    }

    fn finish(self) -> HashMap<K, V> {
        self.map
    }
}

/// Collect into a map, resolving repeated keys with `merge(existing, incoming)`.
pub struct ToMapWith<T, K, V, KF, VF, M> {
    key: KF,
    value: VF,
    merge: M,
    map: HashMap<K, V>,
    _item: PhantomData<fn(T)>,
}

pub fn to_map_with<T, K, V, KF, VF, M>(
    key: KF,
    value: VF,
    merge: M,
) -> ToMapWith<T, K, V, KF, VF, M>
where
    K: Eq + Hash,
    KF: FnMut(&T) -> K,
    VF: FnMut(T) -> V,
    M: FnMut(V, V) -> V,
{
    ToMapWith {
        key,
        value,
        merge,
        map: HashMap::new(),
        _item: PhantomData,
    }
}

impl<T, K, V, KF, VF, M> Reducer<T> for ToMapWith<T, K, V, KF, VF, M>
where
    K: Eq + Hash,
    KF: FnMut(&T) -> K,
    VF: FnMut(T) -> V,
    M: FnMut(V, V) -> V,
{
    type Output = HashMap<K, V>;

    fn accumulate(&mut self, item: T) {
        let key = (self.key)(&item);
        let incoming = (self.value)(item);
        let merged = match self.map.remove(&key) {
            Some(existing) => (self.merge)(existing, incoming),
            None => incoming,
        };
        self.map.insert(key, merged);
    }

    fn finish(self) -> HashMap<K, V> {
        self.map
    }
}

// ============================================================================
// TEXT AND PARTITIONS
// ============================================================================

/// Join string-like elements with a delimiter, wrapped in an optional prefix and suffix.
#[derive(Debug, Clone)]
pub struct Joining {
    delimiter: String,
    suffix: String,
    buffer: String,
    empty: bool,
}

pub fn joining(delimiter: &str) -> Joining {
    Joining::with_affixes(delimiter, "", "")
}

impl Joining {
    pub fn with_affixes(delimiter: &str, prefix: &str, suffix: &str) -> Self {
        Self {
            delimiter: delimiter.to_string(),
            suffix: suffix.to_string(),
            buffer: prefix.to_string(),
            empty: true,
        }
    }
}

impl<S: AsRef<str>> Reducer<S> for Joining {
    type Output = String;

    fn accumulate(&mut self, item: S) {
        if !self.empty {
            self.buffer.push_str(&self.delimiter);
        }
        self.buffer.push_str(item.as_ref());
        self.empty = false;
    }

    fn finish(mut self) -> String {
        self.buffer.push_str(&self.suffix);
        self.buffer
    }
}

/// The two halves of a partition, each in pull order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partitioned<T> {
    /// Elements for which the predicate held.
    pub matched: Vec<T>,
    /// Elements for which it did not.
    pub unmatched: Vec<T>,
}

/// Split elements into exactly two groups by a predicate.
pub struct Partitioning<T, P> {
    predicate: P,
    halves: Partitioned<T>,
}

pub fn partitioning<T, P>(predicate: P) -> Partitioning<T, P>
where
    P: FnMut(&T) -> bool,
{
    Partitioning {
        predicate,
        halves: Partitioned {
            matched: Vec::new(),
            unmatched: Vec::new(),
        },
    }
}

impl<T, P> Reducer<T> for Partitioning<T, P>
where
    P: FnMut(&T) -> bool,
{
    type Output = Partitioned<T>;

    fn accumulate(&mut self, item: T) {
        if (self.predicate)(&item) {
            self.halves.matched.push(item);
        } else {
            self.halves.unmatched.push(item);
        }
    }

    fn finish(self) -> Partitioned<T> {
        self.halves
    }
}
