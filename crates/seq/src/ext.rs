use std::cmp::Ordering;
use std::fmt::Display;
use std::hash::Hash;
use std::iter::Skip;

use rand::Rng;
use tessera_common::Result;

use crate::extras::{self, ButLast, Except, LogEach};
use crate::keyed::{self, DistinctBy};
use crate::partition::{self, Divide};

/// Method-call access to the sequence operations of this crate.
pub trait SeqExt: Iterator + Sized {
    /// See [`crate::divide`].
    fn divide(self, divisions: usize) -> Result<Divide<Self>>
    where
        Self: ExactSizeIterator,
    {
        partition::divide(self, divisions)
    }

    /// See [`crate::min_by_key`].
    fn find_min_by<K: Ord, F>(self, key: F) -> Result<Self::Item>
    where
        F: FnMut(&Self::Item) -> K,
    {
        keyed::min_by_key(self, key)
    }

    /// See [`crate::min_by_key_with`].
    fn find_min_by_with<K, F, C>(self, key: F, compare: C) -> Result<Self::Item>
    where
        F: FnMut(&Self::Item) -> K,
        C: FnMut(&K, &K) -> Ordering,
    {
        keyed::min_by_key_with(self, key, compare)
    }

    /// See [`crate::max_by_key`].
    fn find_max_by<K: Ord, F>(self, key: F) -> Result<Self::Item>
    where
        F: FnMut(&Self::Item) -> K,
    {
        keyed::max_by_key(self, key)
    }

    /// See [`crate::max_by_key_with`].
    fn find_max_by_with<K, F, C>(self, key: F, compare: C) -> Result<Self::Item>
    where
        F: FnMut(&Self::Item) -> K,
        C: FnMut(&K, &K) -> Ordering,
    {
        keyed::max_by_key_with(self, key, compare)
    }

    /// See [`crate::distinct_by`].
    fn distinct_by<K: Eq + Hash, F>(self, key: F) -> DistinctBy<Self, K, F>
    where
        F: FnMut(&Self::Item) -> K,
    {
        keyed::distinct_by(self, key)
    }

    fn but_first(self) -> Skip<Self> {
        self.skip(1)
    }

    fn but_last(self) -> ButLast<Self> {
        extras::but_last(self)
    }

    /// See [`crate::except`].
    fn except<E>(self, excluded: E) -> Except<Self>
    where
        Self::Item: Eq + Hash + Clone,
        E: IntoIterator<Item = Self::Item>,
    {
        extras::except(self, excluded)
    }

    /// See [`crate::log_each`].
    fn log_each(self) -> LogEach<Self> {
        extras::log_each(self)
    }

    fn none(self) -> bool {
        extras::none(self)
    }

    fn none_matching<P: FnMut(Self::Item) -> bool>(self, predicate: P) -> bool {
        extras::none_matching(self, predicate)
    }

    fn random_element<R: Rng + ?Sized>(self, rng: &mut R) -> Result<Self::Item> {
        extras::random_element(self, rng)
    }

    fn shuffled<R: Rng + ?Sized>(self, rng: &mut R) -> Vec<Self::Item> {
        extras::shuffled(self, rng)
    }

    fn sample_random<R: Rng + ?Sized>(self, rng: &mut R, count: usize) -> Vec<Self::Item> {
        extras::sample_random(self, rng, count)
    }

    fn as_bracketed_string(self) -> String
    where
        Self::Item: Display,
    {
        extras::as_bracketed_string(self)
    }
}

impl<I: Iterator> SeqExt for I {}
