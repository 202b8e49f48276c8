//! Point and edge types shared by the geometry generators.

/// Object-space vertex.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance from the origin.
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// Screen-space point in logical pixels, y pointing down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Point at `t` along the segment from `self` to `other`.
    pub fn lerp(self, other: Point2, t: f32) -> Point2 {
        Point2 {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    pub fn distance(self, other: Point2) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A wireframe edge with its static base weight.
///
/// The weight is the per-line base opacity for the flat variant and
/// `1.0` for the projected sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub start: Point3,
    pub end: Point3,
    pub weight: f32,
}

impl Edge {
    pub const fn new(start: Point3, end: Point3, weight: f32) -> Self {
        Self { start, end, weight }
    }

    /// Mean depth of both endpoints in object space.
    pub fn mean_z(&self) -> f32 {
        (self.start.z + self.end.z) * 0.5
    }
}

/// Which wireframe to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryVariant {
    /// Meridians and latitude rings of a 3D sphere.
    Sphere,
    /// Flat rings and spokes in the z = 0 plane.
    Circle,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point3_length() {
        assert!((Point3::new(3.0, 4.0, 0.0).length() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn point2_lerp_midpoint() {
        let mid = Point2::new(0.0, 0.0).lerp(Point2::new(10.0, -4.0), 0.5);
        assert_eq!(mid, Point2::new(5.0, -2.0));
    }

    #[test]
    fn edge_mean_z() {
        let e = Edge::new(Point3::new(0.0, 0.0, -2.0), Point3::new(0.0, 0.0, 4.0), 1.0);
        assert!((e.mean_z() - 1.0).abs() < 1e-6);
    }
}
