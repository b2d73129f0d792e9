//! Smaller sequence and collection conveniences.

use std::collections::{BTreeSet, HashSet};
use std::fmt::{self, Display};
use std::hash::Hash;
use std::iter::{Fuse, FusedIterator};

use rand::Rng;
use rand::seq::{IteratorRandom, SliceRandom};
use tessera_common::{Result, SeqError};

/// Every element except the last, one element behind the source.
pub fn but_last<S: IntoIterator>(source: S) -> ButLast<S::IntoIter> {
    ButLast {
        iter: source.into_iter().fuse(),
        pending: None,
    }
}

/// Iterator returned by [`but_last`].
pub struct ButLast<I: Iterator> {
    iter: Fuse<I>,
    pending: Option<I::Item>,
}

impl<I: Iterator> Iterator for ButLast<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.pending.is_none() {
            self.pending = Some(self.iter.next()?);
        }
        let next = self.iter.next()?;
        self.pending.replace(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.iter.size_hint();
        let held = usize::from(self.pending.is_some());
        // One element (held or upcoming) is always withheld.
        let adjust = |n: usize| n.saturating_add(held).saturating_sub(1);
        (adjust(lo), hi.map(adjust))
    }
}

impl<I: Iterator> FusedIterator for ButLast<I> {}

impl<I: Iterator> fmt::Debug for ButLast<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButLast")
            .field("holding", &self.pending.is_some())
            .finish_non_exhaustive()
    }
}

/// Pass-through that emits a `debug!` event for every element as it is
/// pulled.
pub fn log_each<S: IntoIterator>(source: S) -> LogEach<S::IntoIter> {
    LogEach {
        iter: source.into_iter(),
        index: 0,
    }
}

/// Iterator returned by [`log_each`].
#[derive(Debug, Clone)]
pub struct LogEach<I> {
    iter: I,
    index: usize,
}

impl<I> Iterator for LogEach<I>
where
    I: Iterator,
    I::Item: fmt::Debug,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let item = self.iter.next()?;
        tracing::debug!(index = self.index, ?item, "sequence element");
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I> FusedIterator for LogEach<I>
where
    I: FusedIterator,
    I::Item: fmt::Debug,
{
}

/// Set difference: elements of `source` not in `excluded`, each reported
/// once, in first-seen order.
pub fn except<S, E>(source: S, excluded: E) -> Except<S::IntoIter>
where
    S: IntoIterator,
    S::Item: Eq + Hash + Clone,
    E: IntoIterator<Item = S::Item>,
{
    Except {
        iter: source.into_iter(),
        skip: excluded.into_iter().collect(),
    }
}

/// Iterator returned by [`except`].
pub struct Except<I: Iterator> {
    iter: I,
    // Excluded values plus everything already yielded.
    skip: HashSet<I::Item>,
}

impl<I> Iterator for Except<I>
where
    I: Iterator,
    I::Item: Eq + Hash + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let skip = &mut self.skip;
        self.iter.find(|item| skip.insert(item.clone()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I> FusedIterator for Except<I>
where
    I: FusedIterator,
    I::Item: Eq + Hash + Clone,
{
}

impl<I: Iterator> fmt::Debug for Except<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Except")
            .field("skipping", &self.skip.len())
            .finish_non_exhaustive()
    }
}

/// True when `source` yields nothing.
pub fn none<S: IntoIterator>(source: S) -> bool {
    source.into_iter().next().is_none()
}

/// True when no element satisfies `predicate`.
pub fn none_matching<S, P>(source: S, predicate: P) -> bool
where
    S: IntoIterator,
    P: FnMut(S::Item) -> bool,
{
    !source.into_iter().any(predicate)
}

/// One uniformly chosen element, in a single pass.
pub fn random_element<S, R>(source: S, rng: &mut R) -> Result<S::Item>
where
    S: IntoIterator,
    R: Rng + ?Sized,
{
    source
        .into_iter()
        .choose(rng)
        .ok_or(SeqError::EmptySequence)
}

/// All elements in a uniformly random order.
pub fn shuffled<S, R>(source: S, rng: &mut R) -> Vec<S::Item>
where
    S: IntoIterator,
    R: Rng + ?Sized,
{
    let mut items: Vec<S::Item> = source.into_iter().collect();
    items.shuffle(rng);
    items
}

/// Up to `count` elements drawn without replacement, in random order.
pub fn sample_random<S, R>(source: S, rng: &mut R, count: usize) -> Vec<S::Item>
where
    S: IntoIterator,
    R: Rng + ?Sized,
{
    let mut items = shuffled(source, rng);
    items.truncate(count);
    items
}

/// Renders `source` as `[a, b, c]`.
pub fn as_bracketed_string<S>(source: S) -> String
where
    S: IntoIterator,
    S::Item: Display,
{
    let parts: Vec<String> = source.into_iter().map(|v| v.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

/// Insertion helpers shared by the std collections.
pub trait CollectionExt<T> {
    /// Adds `item` unless an equal one is present. Returns whether it was
    /// added.
    fn add_if_absent(&mut self, item: T) -> bool;

    /// Adds every item of `items`, returning how many were actually added.
    fn add_range<I: IntoIterator<Item = T>>(&mut self, items: I) -> usize;
}

impl<T: PartialEq> CollectionExt<T> for Vec<T> {
    fn add_if_absent(&mut self, item: T) -> bool {
        if self.contains(&item) {
            return false;
        }
        self.push(item);
        true
    }

    fn add_range<I: IntoIterator<Item = T>>(&mut self, items: I) -> usize {
        let before = self.len();
        self.extend(items);
        self.len() - before
    }
}

impl<T: Eq + Hash> CollectionExt<T> for HashSet<T> {
    fn add_if_absent(&mut self, item: T) -> bool {
        self.insert(item)
    }

    fn add_range<I: IntoIterator<Item = T>>(&mut self, items: I) -> usize {
        let mut added = 0;
        for item in items {
            if self.insert(item) {
                added += 1;
            }
        }
        added
    }
}

impl<T: Ord> CollectionExt<T> for BTreeSet<T> {
    fn add_if_absent(&mut self, item: T) -> bool {
        self.insert(item)
    }

    fn add_range<I: IntoIterator<Item = T>>(&mut self, items: I) -> usize {
        let before = self.len();
        self.extend(items);
        self.len() - before
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tessera_gen::SplitMix64;

    use super::*;

    #[test]
    fn log_each_passes_elements_through() {
        let logged: Vec<&str> = log_each(["a", "b", "c"]).collect();
        assert_eq!(logged, vec!["a", "b", "c"]);
        assert_eq!(log_each(0..5).size_hint(), (5, Some(5)));
    }

    #[test]
    fn except_removes_excluded_and_duplicates() {
        let kept: Vec<i32> = except([3, 1, 4, 1, 5, 9, 2, 6, 5], [9, 4]).collect();
        assert_eq!(kept, vec![3, 1, 5, 2, 6]);
        assert_eq!(except([1, 2], [1, 2]).count(), 0);
        assert_eq!(except(Vec::<u8>::new(), []).count(), 0);
    }

    #[test]
    fn but_last_drops_final_element() {
        assert_eq!(but_last(1..=4).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(but_last([9]).count(), 0);
        assert_eq!(but_last(Vec::<u8>::new()).count(), 0);
    }

    #[test]
    fn but_last_size_hint() {
        let mut it = but_last(vec![1, 2, 3]);
        assert_eq!(it.size_hint(), (2, Some(2)));
        it.next();
        assert_eq!(it.size_hint(), (1, Some(1)));
        it.next();
        assert_eq!(it.size_hint(), (0, Some(0)));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn but_last_works_on_infinite_sources() {
        let v: Vec<u32> = but_last(0u32..).take(3).collect();
        assert_eq!(v, vec![0, 1, 2]);
    }

    #[test]
    fn none_checks() {
        assert!(none(Vec::<i32>::new()));
        assert!(!none([1]));
        assert!(none_matching([1, 3, 5], |v| v % 2 == 0));
        assert!(!none_matching([1, 4, 5], |v| v % 2 == 0));
    }

    #[test]
    fn random_element_comes_from_source() {
        let mut rng = StdRng::seed_from_u64(3);
        let source = [10, 20, 30, 40];
        for _ in 0..50 {
            let v = random_element(source, &mut rng).unwrap();
            assert!(source.contains(&v));
        }
    }

    #[test]
    fn random_element_of_empty_is_error() {
        let mut rng = SplitMix64::new(0);
        assert_eq!(
            random_element(Vec::<u8>::new(), &mut rng).unwrap_err(),
            SeqError::EmptySequence
        );
    }

    #[test]
    fn shuffled_is_a_permutation() {
        let mut rng = SplitMix64::new(12);
        let mut out = shuffled(0..50, &mut rng);
        assert_eq!(out.len(), 50);
        out.sort_unstable();
        assert_eq!(out, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn shuffled_reproducible_for_seed() {
        let a = shuffled(0..20, &mut SplitMix64::new(5));
        let b = shuffled(0..20, &mut SplitMix64::new(5));
        assert_eq!(a, b);
    }

    #[test]
    fn sample_random_is_distinct_subset() {
        let mut rng = StdRng::seed_from_u64(77);
        let picked = sample_random(0..30, &mut rng, 5);
        assert_eq!(picked.len(), 5);
        let unique: HashSet<_> = picked.iter().collect();
        assert_eq!(unique.len(), 5);
        assert!(picked.iter().all(|v| (0..30).contains(v)));
        assert_eq!(sample_random(0..3, &mut rng, 10).len(), 3);
    }

    #[test]
    fn bracketed_string() {
        assert_eq!(as_bracketed_string([1, 2, 3]), "[1, 2, 3]");
        assert_eq!(as_bracketed_string(Vec::<f32>::new()), "[]");
        assert_eq!(as_bracketed_string(["x"]), "[x]");
    }

    #[test]
    fn vec_add_if_absent() {
        let mut v = vec![1, 2];
        assert!(v.add_if_absent(3));
        assert!(!v.add_if_absent(2));
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn add_range_counts_new_items() {
        let mut v = vec![1];
        assert_eq!(v.add_range([1, 2]), 2);

        let mut set: HashSet<i32> = [1, 2].into_iter().collect();
        assert_eq!(set.add_range([2, 3, 4, 4]), 2);
        assert_eq!(set.len(), 4);

        let mut tree = BTreeSet::from([5]);
        assert!(!tree.add_if_absent(5));
        assert_eq!(tree.add_range(std::iter::empty()), 0);
        assert_eq!(tree.add_range([1, 5, 6]), 2);
    }
}
