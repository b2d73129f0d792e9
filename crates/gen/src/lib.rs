//! Generators: lazy, pull-based sequences defined by a step function.
//!
//! # Invariants
//! - A generator advances only when its consumer pulls.
//! - Random streams draw from a source handed in by the caller; there is no
//!   hidden global generator.
//! - A fixed seed gives a reproducible stream.

mod generator;
mod random;
mod streams;

pub use generator::Generator;
pub use random::{RandomSource, RngConfig, SharedRng, SplitMix64};
pub use streams::{bounded_ints, bounded_ints_in, constant, gaussian_floats, uniform_floats, uniform_floats_in};

pub fn crate_info() -> &'static str {
    "tessera-gen v0.1.0"
}
