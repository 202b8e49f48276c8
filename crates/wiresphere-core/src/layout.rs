//! Viewport-derived sizing for the sphere.

use wiresphere_common::Viewport;

use crate::geometry::Point2;

/// Fraction of the viewport's shorter side the sphere's bounding box uses.
pub const SIZE_FRACTION: f32 = 0.8;

/// Fraction of the viewport's shorter side used as the sphere radius.
pub const RADIUS_FRACTION: f32 = 0.35;

/// Placement of the sphere inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub viewport: Viewport,
    pub size: f32,
    pub radius: f32,
    pub center: Point2,
}

impl Layout {
    pub fn new(viewport: Viewport) -> Self {
        let min = viewport.min_side();
        let (cx, cy) = viewport.center();
        Self {
            viewport,
            size: min * SIZE_FRACTION,
            radius: min * RADIUS_FRACTION,
            center: Point2::new(cx, cy),
        }
    }

    /// Clamp a radius around `center` so it stays inside the `size` box.
    pub fn contain(&self, radius: f32) -> f32 {
        radius.min(self.size * 0.5)
    }
}
