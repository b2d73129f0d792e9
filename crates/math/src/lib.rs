//! Small math and geometry helpers over `glam` vectors.
//!
//! # Invariants
//! - Functions are pure; nothing here allocates.
//! - `floor_mod`/`floor_div` round toward negative infinity, unlike `%` and `/`.

pub mod geometry;
pub mod scalar;
pub mod vec2;

pub use geometry::{
    distance_point_line, distance_point_line_through, is_in_half_plane_2d, is_in_half_plane_3d,
    project_point_on_line, project_point_on_line_through, project_point_on_segment,
};
pub use scalar::{angle_deg, floor_div, floor_mod, floor_mod_f32, frac, remap, sign, sign_i32};
pub use vec2::Vec2Ext;

pub fn crate_info() -> &'static str {
    "tessera-math v0.1.0"
}
