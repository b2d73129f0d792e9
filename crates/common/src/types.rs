use serde::{Deserialize, Serialize};

use crate::{Result, SeqError};

/// Inclusive floating-point range `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinMaxFloat {
    pub min: f32,
    pub max: f32,
}

impl MinMaxFloat {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns the range if `min <= max`, otherwise `InvalidArgument`.
    pub fn validated(self) -> Result<Self> {
        // Written as a negated `<=` so NaN bounds are rejected too.
        if !(self.min <= self.max) {
            return Err(SeqError::invalid(format!(
                "range min {} is greater than max {}",
                self.min, self.max
            )));
        }
        Ok(self)
    }

    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f32) -> f32 {
        value.max(self.min).min(self.max)
    }

    /// Maps `t` in `[0, 1]` onto the range. Stays finite for ranges whose
    /// span overflows `f32`.
    pub fn lerp(&self, t: f32) -> f32 {
        self.min * (1.0 - t) + self.max * t
    }
}

impl Default for MinMaxFloat {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

/// Inclusive integer range `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MinMaxInt {
    pub min: i32,
    pub max: i32,
}

impl MinMaxInt {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Returns the range if `min <= max`, otherwise `InvalidArgument`.
    pub fn validated(self) -> Result<Self> {
        if self.min > self.max {
            return Err(SeqError::invalid(format!(
                "range min {} is greater than max {}",
                self.min, self.max
            )));
        }
        Ok(self)
    }

    /// Number of integers in the range. Zero for an inverted range.
    pub fn count(&self) -> u64 {
        if self.min > self.max {
            0
        } else {
            (i64::from(self.max) - i64::from(self.min) + 1) as u64
        }
    }

    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Default for MinMaxInt {
    fn default() -> Self {
        Self { min: 0, max: 1 }
    }
}
