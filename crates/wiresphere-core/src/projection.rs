//! Rotation and orthographic projection of object-space points.

use crate::geometry::{Edge, Point2, Point3};

/// Lowest opacity a back-facing edge fades to.
pub const MIN_DEPTH_OPACITY: f32 = 0.2;

/// Rotate about Y by `rot_y`, then about X by `rot_x`.
///
/// The order is fixed; swapping it changes the tumble.
pub fn rotate(p: Point3, rot_x: f32, rot_y: f32) -> Point3 {
    let (sin_y, cos_y) = rot_y.sin_cos();
    let (sin_x, cos_x) = rot_x.sin_cos();

    let x = p.x * cos_y + p.z * sin_y;
    let z = -p.x * sin_y + p.z * cos_y;

    Point3 {
        x,
        y: p.y * cos_x - z * sin_x,
        z: p.y * sin_x + z * cos_x,
    }
}

/// Rotate `p` and drop it orthographically onto the screen around `center`.
///
/// Returns the screen point and the rotated depth.
pub fn project(p: Point3, rot_x: f32, rot_y: f32, center: Point2) -> (Point2, f32) {
    let r = rotate(p, rot_x, rot_y);
    (Point2::new(center.x + r.x, center.y + r.y), r.z)
}

/// Map a depth in `[-radius, radius]` to an opacity in `[0.2, 1.0]`.
pub fn depth_opacity(z: f32, radius: f32) -> f32 {
    ((z + radius) / (2.0 * radius)).clamp(MIN_DEPTH_OPACITY, 1.0)
}

/// A projected edge ready for drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedEdge {
    pub from: Point2,
    pub to: Point2,
    pub depth_opacity: f32,
}

/// Project both endpoints of `edge`; depth opacity uses their mean z.
pub fn project_edge(
    edge: &Edge,
    rot_x: f32,
    rot_y: f32,
    center: Point2,
    radius: f32,
) -> ProjectedEdge {
    let (from, z1) = project(edge.start, rot_x, rot_y, center);
    let (to, z2) = project(edge.end, rot_x, rot_y, center);
    ProjectedEdge {
        from,
        to,
        depth_opacity: depth_opacity((z1 + z2) * 0.5, radius),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1e-5;

    #[test]
    fn zero_rotation_is_translation_by_center() {
        let center = Point2::new(156.0, 312.0);
        for p in [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, -20.0, 30.0),
            Point3::new(-5.5, 7.25, -100.0),
        ] {
            let (q, z) = project(p, 0.0, 0.0, center);
            assert!((q.x - (center.x + p.x)).abs() < EPS);
            assert!((q.y - (center.y + p.y)).abs() < EPS);
            assert!((z - p.z).abs() < EPS);
        }
    }

    #[test]
    fn quarter_turn_about_y_moves_z_into_x() {
        let r = rotate(Point3::new(0.0, 0.0, 1.0), 0.0, FRAC_PI_2);
        assert!((r.x - 1.0).abs() < EPS);
        assert!(r.z.abs() < EPS);
    }

    #[test]
    fn rotation_applies_y_before_x() {
        // Y first: (1,0,0) -> (0,0,-1); then X by 90deg: z=-1 -> y=1.
        let r = rotate(Point3::new(1.0, 0.0, 0.0), FRAC_PI_2, FRAC_PI_2);
        assert!(r.x.abs() < EPS);
        assert!((r.y - 1.0).abs() < EPS);
        assert!(r.z.abs() < EPS);
    }

    #[test]
    fn rotation_preserves_length() {
        let p = Point3::new(3.0, -4.0, 12.0);
        let r = rotate(p, 0.7, 2.1);
        assert!((r.length() - 13.0).abs() < 1e-4);
    }

    #[test]
    fn depth_opacity_is_clamped() {
        assert_eq!(depth_opacity(-100.0, 10.0), MIN_DEPTH_OPACITY);
        assert_eq!(depth_opacity(-10.0, 10.0), MIN_DEPTH_OPACITY);
        assert_eq!(depth_opacity(10.0, 10.0), 1.0);
        assert_eq!(depth_opacity(1000.0, 10.0), 1.0);
        assert!((depth_opacity(0.0, 10.0) - 0.5).abs() < EPS);
    }

    #[test]
    fn depth_opacity_is_monotonic() {
        let radius = 50.0;
        let mut last = 0.0;
        for i in -60..=60 {
            let o = depth_opacity(i as f32, radius);
            assert!(o >= last, "opacity decreased at z = {i}");
            assert!((MIN_DEPTH_OPACITY..=1.0).contains(&o));
            last = o;
        }
    }

    #[test]
    fn projected_edge_uses_mean_depth() {
        let edge = Edge::new(Point3::new(0.0, 0.0, -10.0), Point3::new(0.0, 0.0, 10.0), 1.0);
        let p = project_edge(&edge, 0.0, 0.0, Point2::default(), 10.0);
        assert!((p.depth_opacity - 0.5).abs() < EPS);
    }
}
