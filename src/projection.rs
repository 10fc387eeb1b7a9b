//! The 3D-to-2D projection pipeline.
//!
//! A pure function from (world point, camera, viewport) to a screen point,
//! a perspective scale, and a depth. Deterministic for identical inputs;
//! the renderer and the hit-tester both go through it so picking always
//! agrees with what was drawn.

use crate::camera::Camera;
use crate::constants::{
    DENOMINATOR_FLOOR, PERSPECTIVE_FACTOR, PERSPECTIVE_MAX, PERSPECTIVE_MIN,
};
use crate::types::{Vec3, Viewport};

/// The result of projecting one world point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    /// Screen X in pixels
    pub x: f32,
    /// Screen Y in pixels
    pub y: f32,
    /// Perspective scale; farther points get smaller values
    pub scale: f32,
    /// View-space depth after rotation; larger means farther
    pub depth: f32,
}

/// Perspective distance adapted to the viewport, so apparent node size stays
/// stable across resizes. Scales with the smaller viewport dimension,
/// clamped to a sane range.
pub fn perspective_distance(viewport: Viewport) -> f32 {
    (viewport.width.min(viewport.height) * PERSPECTIVE_FACTOR)
        .clamp(PERSPECTIVE_MIN, PERSPECTIVE_MAX)
}

/// Projects a world point through the camera onto the viewport.
///
/// Steps: subtract the camera pan, rotate about Y by yaw, rotate about X by
/// pitch, then perspective-divide. The divide denominator is floored at
/// [`DENOMINATOR_FLOOR`] so points behind the focal plane clamp instead of
/// inverting or dividing by zero.
pub fn project(world: Vec3, camera: &Camera, viewport: Viewport) -> Projected {
    let (cx, cy) = viewport.center();
    let view = world - camera.pan;

    let (sin_yaw, cos_yaw) = camera.yaw.sin_cos();
    let x1 = view.x * cos_yaw - view.z * sin_yaw;
    let z1 = view.x * sin_yaw + view.z * cos_yaw;

    let (sin_pitch, cos_pitch) = camera.pitch.sin_cos();
    let y1 = view.y * cos_pitch - z1 * sin_pitch;
    let z2 = view.y * sin_pitch + z1 * cos_pitch;

    let dist = perspective_distance(viewport);
    let denom = (dist + z2).max(DENOMINATOR_FLOOR);
    let scale = dist / denom;

    Projected {
        x: cx + x1 * scale * camera.zoom,
        y: cy + y1 * scale * camera.zoom,
        scale,
        depth: z2,
    }
}
