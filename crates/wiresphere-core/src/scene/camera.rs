//! Perspective camera.

/// Perspective camera looking down -Z from `position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
}

impl PerspectiveCamera {
    pub const NEAR: f32 = 0.1;
    pub const FAR: f32 = 1000.0;
    pub const DISTANCE: f32 = 5.0;

    /// Camera at `(0, 0, 5)` with the standard clip planes.
    pub fn new(fov_degrees: f32, aspect: f32) -> Self {
        Self {
            fov_degrees,
            aspect,
            near: Self::NEAR,
            far: Self::FAR,
            position: [0.0, 0.0, Self::DISTANCE],
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    pub fn fov_radians(&self) -> f32 {
        self.fov_degrees.to_radians()
    }
}
