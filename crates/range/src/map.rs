use std::fmt;

use serde::{Deserialize, Serialize};
use tessera_common::{Result, SeqError};

/// A `(position, value)` pair anchoring a [`RangeMap`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint<T> {
    pub position: f32,
    pub value: T,
}

/// Linear interpolation for `f32`, usable as a range-map interpolation.
/// Exact at both ends and finite whenever `a` and `b` are.
pub fn lerp(a: &f32, b: &f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Sorted control points plus the function used to blend between them.
///
/// The interpolation `f(a, b, t)` is expected to return `a` at `t == 0` and
/// `b` at `t == 1`; the map does not check this.
///
/// Points are kept sorted by position: [`RangeMap::add`] finds its slot by
/// binary search and shifts the tail, queries use binary search. Positions
/// are always finite.
pub struct RangeMap<T, F> {
    points: Vec<ControlPoint<T>>,
    interpolate: F,
}

impl<T, F> RangeMap<T, F>
where
    T: Clone,
    F: Fn(&T, &T, f32) -> T,
{
    pub fn new(interpolate: F) -> Self {
        Self {
            points: Vec::new(),
            interpolate,
        }
    }

    /// Insert a control point. A point already at `position` has its value
    /// replaced so positions stay strictly increasing.
    ///
    /// Fails with `InvalidArgument` when `position` is NaN or infinite.
    pub fn add(&mut self, position: f32, value: T) -> Result<()> {
        if !position.is_finite() {
            return Err(SeqError::invalid(format!(
                "control point position must be finite, got {position}"
            )));
        }
        let idx = self.points.partition_point(|p| p.position < position);
        match self.points.get_mut(idx) {
            Some(existing) if existing.position == position => {
                tracing::trace!(position, "replacing control point");
                existing.value = value;
            }
            _ => self.points.insert(idx, ControlPoint { position, value }),
        }
        Ok(())
    }

    /// [`RangeMap::add`] for every pair, stopping at the first rejected one.
    /// Points added before the failure are kept.
    pub fn add_all<I>(&mut self, points: I) -> Result<()>
    where
        I: IntoIterator<Item = (f32, T)>,
    {
        for (position, value) in points {
            self.add(position, value)?;
        }
        Ok(())
    }

    /// Value at `position`.
    ///
    /// Between two control points the result is
    /// `interpolate(p0.value, p1.value, (position - p0.position) / (p1.position - p0.position))`.
    /// Before the first or after the last point the nearest endpoint's value
    /// is returned as is, and a single-point map answers every query with its
    /// value. Fails with `EmptySequence` when the map has no points and with
    /// `InvalidArgument` for a NaN position on a map with several points.
    pub fn query(&self, position: f32) -> Result<T> {
        let (first, last) = match self.points.as_slice() {
            [] => return Err(SeqError::EmptySequence),
            [only] => return Ok(only.value.clone()),
            [first, .., last] => (first, last),
        };
        if position.is_nan() {
            return Err(SeqError::invalid("cannot query a range map at NaN"));
        }
        if position <= first.position {
            return Ok(first.value.clone());
        }
        if position >= last.position {
            return Ok(last.value.clone());
        }
        // first.position < position < last.position, so 1 <= upper < len.
        let upper = self.points.partition_point(|p| p.position <= position);
        let p0 = &self.points[upper - 1];
        let p1 = &self.points[upper];
        let t = (position - p0.position) / (p1.position - p0.position);
        Ok((self.interpolate)(&p0.value, &p1.value, t))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Control points in increasing position order.
    pub fn points(&self) -> &[ControlPoint<T>] {
        &self.points
    }

    /// First and last control-point positions.
    pub fn domain(&self) -> Option<(f32, f32)> {
        Some((self.points.first()?.position, self.points.last()?.position))
    }
}

impl<T: fmt::Debug, F> fmt::Debug for RangeMap<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeMap")
            .field("points", &self.points)
            .finish_non_exhaustive()
    }
}

/// Position of the `k`-th of `count` evenly spaced values, `k / count`.
fn spaced_position(k: usize, count: usize) -> f32 {
    (k as f64 / count as f64) as f32
}

/// Appends a point at or after the current last position. A position equal
/// to the last one replaces its value, as [`RangeMap::add`] does.
fn push_in_order<T>(points: &mut Vec<ControlPoint<T>>, position: f32, value: T) {
    match points.last_mut() {
        Some(last) if last.position == position => last.value = value,
        _ => points.push(ControlPoint { position, value }),
    }
}

/// Spread `values` evenly over `[0, 1)`: the `k`-th of `K` values sits at
/// position `k / K`.
///
/// Past 2^24 values neighbouring positions can round to the same `f32`; the
/// later value then replaces the earlier one, so the map may hold fewer than
/// `K` points.
///
/// Fails with `EmptySequence` when `values` is empty.
pub fn to_range_map<S, T, F>(values: S, interpolate: F) -> Result<RangeMap<T, F>>
where
    S: IntoIterator<Item = T>,
    T: Clone,
    F: Fn(&T, &T, f32) -> T,
{
    let values: Vec<T> = values.into_iter().collect();
    if values.is_empty() {
        return Err(SeqError::EmptySequence);
    }
    let count = values.len();
    tracing::debug!(count, "building range map");
    let mut points = Vec::with_capacity(count);
    for (k, value) in values.into_iter().enumerate() {
        push_in_order(&mut points, spaced_position(k, count), value);
    }
    if points.len() < count {
        tracing::debug!(count, kept = points.len(), "merged coinciding positions");
    }
    Ok(RangeMap {
        points,
        interpolate,
    })
}
