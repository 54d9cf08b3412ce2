//! Particle background scene state shared with the web renderer.
//!
//! Nothing here touches platform APIs; the web front-end feeds pointer and
//! viewport data in and reads matrices and particle positions out.

use crate::constants::*;
use glam::{Mat4, Vec2, Vec3};
use rand::Rng;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// The background camera: 75° vertical FOV at z = 1000, looking at the origin.
    pub fn background(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Camera that drifts toward a pointer-derived offset by a fixed fraction per frame.
#[derive(Clone, Debug)]
pub struct CameraRig {
    pub camera: Camera,
    pointer_offset: Vec2,
    half_viewport: Vec2,
}

impl CameraRig {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        let mut rig = Self {
            camera: Camera::background(1.0),
            pointer_offset: Vec2::ZERO,
            half_viewport: Vec2::ZERO,
        };
        rig.resize(viewport_width, viewport_height);
        rig
    }

    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) {
        self.half_viewport = Vec2::new(viewport_width, viewport_height) * 0.5;
        self.camera.aspect = viewport_width / viewport_height.max(1.0);
    }

    /// Pointer moved to viewport coordinates `(x, y)`.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer_offset = (Vec2::new(x, y) - self.half_viewport) * CAMERA_POINTER_SCALE;
    }

    /// Where the camera is heading in the XY plane (pointer Y is screen-down, so inverted).
    pub fn target(&self) -> Vec2 {
        Vec2::new(self.pointer_offset.x, -self.pointer_offset.y)
    }

    /// One frame of exponential follow. Moves `CAMERA_FOLLOW` of the remaining
    /// distance and keeps looking at the origin.
    pub fn step(&mut self) {
        let target = self.target();
        let eye = &mut self.camera.eye;
        eye.x += (target.x - eye.x) * CAMERA_FOLLOW;
        eye.y += (target.y - eye.y) * CAMERA_FOLLOW;
        self.camera.target = Vec3::ZERO;
    }
}

/// `count` points with every coordinate uniform in `[-half_extent, half_extent]`.
pub fn generate_particles<R: Rng + ?Sized>(rng: &mut R, count: usize, half_extent: f32) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-half_extent..=half_extent),
                rng.gen_range(-half_extent..=half_extent),
                rng.gen_range(-half_extent..=half_extent),
            )
        })
        .collect()
}

/// Y rotation of the particle cloud at wall-clock time `now_ms` (epoch milliseconds).
///
/// Reduced modulo a full turn in f64 so the f32 result keeps its precision.
pub fn cloud_rotation(now_ms: f64) -> f32 {
    (now_ms * PARTICLE_SPIN_PER_MS).rem_euclid(std::f64::consts::TAU) as f32
}

/// Canvas backing size for a viewport, with the device pixel ratio capped.
pub fn backing_size(viewport_width: f64, viewport_height: f64, device_pixel_ratio: f64) -> (u32, u32) {
    let ratio = if device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(MAX_PIXEL_RATIO)
    } else {
        1.0
    };
    let w = (viewport_width * ratio).floor().max(1.0) as u32;
    let h = (viewport_height * ratio).floor().max(1.0) as u32;
    (w, h)
}
