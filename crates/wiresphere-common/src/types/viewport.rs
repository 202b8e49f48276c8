use serde::{Deserialize, Serialize};

/// Host surface dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Dimensions are floored at one pixel so aspect ratios stay finite.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.width * 0.5, self.height * 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_min_side_and_aspect() {
        let v = Viewport::new(390.0, 844.0);
        assert_eq!(v.min_side(), 390.0);
        assert!((v.aspect() - 390.0 / 844.0).abs() < 1e-6);
        assert_eq!(v.center(), (195.0, 422.0));
    }

    #[test]
    fn viewport_floors_degenerate_sizes() {
        let v = Viewport::new(0.0, -5.0);
        assert_eq!(v.width, 1.0);
        assert_eq!(v.height, 1.0);
        assert!(v.aspect().is_finite());
    }
}
