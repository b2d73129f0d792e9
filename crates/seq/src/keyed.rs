//! Order statistics and deduplication over a projected key.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;

use tessera_common::{Result, SeqError};

/// Element with the smallest key. Ties keep the earliest element.
pub fn min_by_key<S, K, F>(source: S, key: F) -> Result<S::Item>
where
    S: IntoIterator,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    min_by_key_with(source, key, K::cmp)
}

/// Element with the smallest key under `compare`. Ties keep the earliest
/// element.
pub fn min_by_key_with<S, K, F, C>(source: S, key: F, mut compare: C) -> Result<S::Item>
where
    S: IntoIterator,
    F: FnMut(&S::Item) -> K,
    C: FnMut(&K, &K) -> Ordering,
{
    extremum(source, key, |candidate, best| {
        compare(candidate, best) == Ordering::Less
    })
}

/// Element with the largest key. Ties keep the earliest element.
pub fn max_by_key<S, K, F>(source: S, key: F) -> Result<S::Item>
where
    S: IntoIterator,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    max_by_key_with(source, key, K::cmp)
}

/// Element with the largest key under `compare`. Ties keep the earliest
/// element.
pub fn max_by_key_with<S, K, F, C>(source: S, key: F, mut compare: C) -> Result<S::Item>
where
    S: IntoIterator,
    F: FnMut(&S::Item) -> K,
    C: FnMut(&K, &K) -> Ordering,
{
    extremum(source, key, |candidate, best| {
        compare(candidate, best) == Ordering::Greater
    })
}

/// Single pass: the best so far is replaced only on strict improvement.
fn extremum<S, K, F, P>(source: S, mut key: F, mut improves: P) -> Result<S::Item>
where
    S: IntoIterator,
    F: FnMut(&S::Item) -> K,
    P: FnMut(&K, &K) -> bool,
{
    let mut iter = source.into_iter();
    let mut best = iter.next().ok_or(SeqError::EmptySequence)?;
    let mut best_key = key(&best);
    for candidate in iter {
        let candidate_key = key(&candidate);
        if improves(&candidate_key, &best_key) {
            best = candidate;
            best_key = candidate_key;
        }
    }
    Ok(best)
}

/// Lazily yields the first element seen for each distinct key.
pub fn distinct_by<S, K, F>(source: S, key: F) -> DistinctBy<S::IntoIter, K, F>
where
    S: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&S::Item) -> K,
{
    DistinctBy {
        iter: source.into_iter(),
        key,
        seen: HashSet::new(),
    }
}

/// Iterator returned by [`distinct_by`].
///
/// Keeps every key seen so far for the rest of the traversal.
pub struct DistinctBy<I, K, F> {
    iter: I,
    key: F,
    seen: HashSet<K>,
}

impl<I, K, F> DistinctBy<I, K, F> {
    /// Number of distinct keys yielded so far.
    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }
}

impl<I, K, F> Iterator for DistinctBy<I, K, F>
where
    I: Iterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let item = self.iter.next()?;
            if self.seen.insert((self.key)(&item)) {
                return Some(item);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, K, F> FusedIterator for DistinctBy<I, K, F>
where
    I: FusedIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
}

impl<I, K, F> fmt::Debug for DistinctBy<I, K, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DistinctBy")
            .field("seen", &self.seen.len())
            .finish_non_exhaustive()
    }
}
