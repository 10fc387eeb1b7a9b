//! Orbit camera state.
//!
//! The camera is parameterized by yaw/pitch rotation about the constellation
//! center, a pan offset, and a clamped zoom factor. It is mutated only by the
//! interaction layer; the projection pipeline reads it immutably.

use crate::constants::{AUTO_ORBIT_STEP, PITCH_LIMIT, ZOOM_MAX, ZOOM_MIN};
use crate::types::Vec3;
use serde::{Deserialize, Serialize};

/// Orbit camera: yaw/pitch rotation, pan offset, and zoom.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Camera {
    /// Rotation about the Y axis (radians), unbounded
    pub yaw: f32,
    /// Rotation about the X axis (radians), clamped to ±[`PITCH_LIMIT`]
    pub pitch: f32,
    /// Translation applied before rotation
    pub pan: Vec3,
    /// Zoom factor, clamped to [[`ZOOM_MIN`], [`ZOOM_MAX`]]
    pub zoom: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            pan: Vec3::ZERO,
            zoom: 1.0,
        }
    }
}

impl Camera {
    /// Accumulates an orbit rotation. Yaw is unbounded; pitch is clamped so
    /// a long vertical drag cannot tumble the view.
    pub fn orbit(&mut self, d_yaw: f32, d_pitch: f32) {
        self.yaw += d_yaw;
        self.pitch = (self.pitch + d_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Accumulates a pan offset.
    pub fn pan(&mut self, dx: f32, dy: f32, dz: f32) {
        self.pan = self.pan + Vec3::new(dx, dy, dz);
    }

    /// Sets the zoom factor, clamped to the valid range.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Restores the default view: yaw = pitch = 0, no pan, zoom 1.
    pub fn reset(&mut self) {
        *self = Camera::default();
    }

    /// Advances yaw by the fixed auto-orbit increment for one tick.
    pub fn auto_orbit_step(&mut self) {
        self.yaw += AUTO_ORBIT_STEP;
    }

    /// A read-only snapshot for the host-drawn HUD.
    pub fn snapshot(&self) -> CameraSnapshot {
        CameraSnapshot {
            yaw: self.yaw,
            pitch: self.pitch,
            pan: self.pan,
            zoom: self.zoom,
        }
    }
}

/// Immutable camera state exposed to the host for HUD rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSnapshot {
    /// Yaw in radians
    pub yaw: f32,
    /// Pitch in radians
    pub pitch: f32,
    /// Pan offset
    pub pan: Vec3,
    /// Zoom factor
    pub zoom: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camera_is_identity() {
        let camera = Camera::default();
        assert_eq!(camera.yaw, 0.0);
        assert_eq!(camera.pitch, 0.0);
        assert_eq!(camera.pan, Vec3::ZERO);
        assert_eq!(camera.zoom, 1.0);
    }

    #[test]
    fn test_orbit_accumulates() {
        let mut camera = Camera::default();
        camera.orbit(0.3, 0.1);
        camera.orbit(0.2, -0.05);

        assert!((camera.yaw - 0.5).abs() < 1e-6);
        assert!((camera.pitch - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_yaw_is_unbounded() {
        let mut camera = Camera::default();
        for _ in 0..100 {
            camera.orbit(1.0, 0.0);
        }
        assert!((camera.yaw - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut camera = Camera::default();
        camera.orbit(0.0, 10.0);
        assert_eq!(camera.pitch, PITCH_LIMIT);

        camera.orbit(0.0, -25.0);
        assert_eq!(camera.pitch, -PITCH_LIMIT);
    }

    #[test]
    fn test_zoom_clamped_to_range() {
        let mut camera = Camera::default();

        camera.set_zoom(10.0);
        assert_eq!(camera.zoom, ZOOM_MAX);

        camera.set_zoom(0.01);
        assert_eq!(camera.zoom, ZOOM_MIN);

        camera.set_zoom(1.7);
        assert_eq!(camera.zoom, 1.7);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut camera = Camera::default();
        camera.orbit(2.0, 0.8);
        camera.pan(10.0, -4.0, 2.5);
        camera.set_zoom(2.5);

        camera.reset();

        assert_eq!(camera, Camera::default());
    }

    #[test]
    fn test_auto_orbit_advances_yaw_only() {
        let mut camera = Camera::default();
        camera.auto_orbit_step();

        assert_eq!(camera.yaw, AUTO_ORBIT_STEP);
        assert_eq!(camera.pitch, 0.0);
        assert_eq!(camera.zoom, 1.0);
    }
}
