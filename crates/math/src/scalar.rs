//! Scalar helpers.

use glam::Vec2;

/// Angle in degrees, in `[0, 360)`, of the direction from `center` to `point`.
pub fn angle_deg(center: Vec2, point: Vec2) -> f32 {
    let delta = point - center;
    let deg = delta.y.atan2(delta.x).to_degrees();
    if deg < 0.0 { deg + 360.0 } else { deg }
}

/// Modulo whose result takes the sign of the divisor.
///
/// `floor_mod(-1, 3) == 2`, where `-1 % 3 == -1`.
///
/// # Panics
/// When `n == 0`, like the `%` operator.
pub fn floor_mod(m: i32, n: i32) -> i32 {
    let r = m % n;
    if r != 0 && (r < 0) != (n < 0) { r + n } else { r }
}

/// Float modulo whose result takes the sign of the divisor.
pub fn floor_mod_f32(m: f32, n: f32) -> f32 {
    let r = m % n;
    if r != 0.0 && (r < 0.0) != (n < 0.0) { r + n } else { r }
}

/// Integer division rounding toward negative infinity.
///
/// # Panics
/// When `n == 0`, like the `/` operator.
pub fn floor_div(m: i32, n: i32) -> i32 {
    let q = m / n;
    if m % n != 0 && (m < 0) != (n < 0) { q - 1 } else { q }
}

/// Fractional part, `x - floor(x)`, always in `[0, 1)` for finite `x`.
pub fn frac(x: f32) -> f32 {
    x - x.floor()
}

/// `1` for positive, `-1` for negative, `0` for zero (and NaN).
pub fn sign(x: f32) -> i32 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}

pub fn sign_i32(x: i32) -> i32 {
    x.signum()
}

/// Linearly maps `x` from `[from_min, from_max]` onto `[to_min, to_max]`.
/// Values outside the source interval extrapolate.
pub fn remap(x: f32, from_min: f32, from_max: f32, to_min: f32, to_max: f32) -> f32 {
    to_min + (x - from_min) * (to_max - to_min) / (from_max - from_min)
}
