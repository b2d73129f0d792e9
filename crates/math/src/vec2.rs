//! Extra `Vec2` operations. Perp-dot, component-wise `*`/`/` and
//! min/max element come from glam itself.

use glam::{IVec2, Vec2, Vec3};

use crate::scalar::{floor_mod_f32, remap};

pub trait Vec2Ext {
    /// Component-wise floor modulo.
    fn hadamard_mod(self, other: Vec2) -> Vec2;

    /// Remaps both components from `[from_min, from_max]` to `[to_min, to_max]`.
    fn remap(self, from_min: f32, from_max: f32, to_min: f32, to_max: f32) -> Vec2;

    /// Rotates counter-clockwise by `angle` radians.
    fn rotated_to_angle(self, angle: f32) -> Vec2;

    /// Rotates by the heading of `direction` (its angle from +X).
    fn face_direction(self, direction: Vec2) -> Vec2;

    /// Rounds each component to the nearest integer, ties to even.
    fn round_to_ivec2(self) -> IVec2;

    /// `(x, y, self.y)`: lifts onto the XZ plane at height `y`.
    fn to_xz(self, y: f32) -> Vec3;

    /// `(self.x, self.y, z)`.
    fn to_xy(self, z: f32) -> Vec3;

    /// `(x, self.x, self.y)`.
    fn to_yz(self, x: f32) -> Vec3;
}

impl Vec2Ext for Vec2 {
    fn hadamard_mod(self, other: Vec2) -> Vec2 {
        Vec2::new(floor_mod_f32(self.x, other.x), floor_mod_f32(self.y, other.y))
    }

    fn remap(self, from_min: f32, from_max: f32, to_min: f32, to_max: f32) -> Vec2 {
        Vec2::new(
            remap(self.x, from_min, from_max, to_min, to_max),
            remap(self.y, from_min, from_max, to_min, to_max),
        )
    }

    fn rotated_to_angle(self, angle: f32) -> Vec2 {
        Vec2::from_angle(angle).rotate(self)
    }

    fn face_direction(self, direction: Vec2) -> Vec2 {
        self.rotated_to_angle(direction.y.atan2(direction.x))
    }

    fn round_to_ivec2(self) -> IVec2 {
        Vec2::new(self.x.round_ties_even(), self.y.round_ties_even()).as_ivec2()
    }

    fn to_xz(self, y: f32) -> Vec3 {
        Vec3::new(self.x, y, self.y)
    }

    fn to_xy(self, z: f32) -> Vec3 {
        Vec3::new(self.x, self.y, z)
    }

    fn to_yz(self, x: f32) -> Vec3 {
        Vec3::new(x, self.x, self.y)
    }
}
