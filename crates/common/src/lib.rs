//! Shared types for the tessera crates.
//!
//! # Invariants
//! - Every fallible operation in the workspace reports a [`SeqError`].
//! - Errors are detected eagerly, before any element is produced.

mod error;
mod types;

pub use error::{Result, SeqError};
pub use types::{MinMaxFloat, MinMaxInt};

pub fn crate_info() -> &'static str {
    "tessera-common v0.1.0"
}
