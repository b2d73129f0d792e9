//! Range maps: turn a discrete run of values into a function over a real
//! domain by interpolating between control points.
//!
//! # Invariants
//! - Control-point positions are finite and strictly increasing.
//! - Queries outside the covered domain clamp to the nearest endpoint.

mod map;

pub use map::{ControlPoint, RangeMap, lerp, to_range_map};

pub fn crate_info() -> &'static str {
    "tessera-range v0.1.0"
}
