//! Point/line/half-plane queries in 2D and 3D.

use std::ops::{Add, Mul, Sub};

use glam::{Vec2, Vec3};

/// Vector types the line queries work over.
pub trait LinePoint:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<f32, Output = Self>
{
    fn dot(self, other: Self) -> f32;

    fn distance(self, other: Self) -> f32 {
        let d = self - other;
        d.dot(d).sqrt()
    }
}

impl LinePoint for Vec2 {
    fn dot(self, other: Self) -> f32 {
        Vec2::dot(self, other)
    }
}

impl LinePoint for Vec3 {
    fn dot(self, other: Self) -> f32 {
        Vec3::dot(self, other)
    }
}

/// Whether `point` lies in the 2D half plane through `plane_point` on the
/// left-hand side of `direction` (boundary included).
pub fn is_in_half_plane_2d(point: Vec2, plane_point: Vec2, direction: Vec2) -> bool {
    (point - plane_point).perp_dot(direction) <= 0.0
}

/// Whether `point` lies in the half space through `plane_point` that
/// `direction` points into (boundary included).
pub fn is_in_half_plane_3d(point: Vec3, plane_point: Vec3, direction: Vec3) -> bool {
    (point - plane_point).dot(direction) >= 0.0
}

/// Orthogonal projection of `point` onto the line through `line_point`
/// along `direction`. `direction` need not be normalized; a zero direction
/// projects everything onto `line_point`.
pub fn project_point_on_line<P: LinePoint>(point: P, line_point: P, direction: P) -> P {
    let len_sq = direction.dot(direction);
    if len_sq == 0.0 {
        return line_point;
    }
    let t = (point - line_point).dot(direction) / len_sq;
    line_point + direction * t
}

/// Projection onto the line through `first` and `second`.
pub fn project_point_on_line_through<P: LinePoint>(point: P, first: P, second: P) -> P {
    project_point_on_line(point, first, second - first)
}

/// Projection onto the segment `start..end`: the line projection, clamped to
/// `end` past the far end and to `start` behind the near end.
pub fn project_point_on_segment<P: LinePoint>(point: P, start: P, end: P) -> P {
    let direction = end - start;
    let len_sq = direction.dot(direction);
    if len_sq == 0.0 {
        return start;
    }
    let t = (point - start).dot(direction) / len_sq;
    if t > 1.0 {
        end
    } else if t < 0.0 {
        start
    } else {
        start + direction * t
    }
}

/// Distance from `point` to the line through `line_point` along `direction`.
pub fn distance_point_line<P: LinePoint>(point: P, line_point: P, direction: P) -> f32 {
    point.distance(project_point_on_line(point, line_point, direction))
}

/// Distance from `point` to the line through `first` and `second`.
pub fn distance_point_line_through<P: LinePoint>(point: P, first: P, second: P) -> f32 {
    distance_point_line(point, first, second - first)
}
