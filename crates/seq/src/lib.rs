//! Sequence operations over plain Rust iterators.
//!
//! # Invariants
//! - Every operation pulls its source at most once, front to back.
//! - Lazy adapters ([`Partition`], [`DistinctBy`], [`ButLast`], [`Except`],
//!   [`LogEach`]) only advance the source when they are pulled.
//! - Failures are reported before the first element is produced.

mod ext;
mod extras;
mod keyed;
mod partition;

pub use ext::SeqExt;
pub use extras::{
    ButLast, CollectionExt, Except, LogEach, as_bracketed_string, but_last, except, log_each, none,
    none_matching, random_element, sample_random, shuffled,
};
pub use keyed::{DistinctBy, distinct_by, max_by_key, max_by_key_with, min_by_key, min_by_key_with};
pub use partition::{Divide, Partition, divide, divide_counted};

pub fn crate_info() -> &'static str {
    "tessera-seq v0.1.0"
}
