//! Wireframe edge generation for the flat and projected variants.

use std::f32::consts::{PI, TAU};

use super::types::{Edge, GeometryVariant, Point3};

/// Radius fractions of the flat variant's inner rings.
pub const INNER_RING_FRACTIONS: [f32; 4] = [0.3, 0.5, 0.7, 0.9];

/// Number of radial spokes in the flat variant.
pub const SPOKE_COUNT: usize = 16;

const OUTER_RING_WEIGHT: f32 = 0.8;
const INNER_RING_WEIGHT: f32 = 0.6;
const SPOKE_WEIGHT: f32 = 0.4;
const SPOKE_INNER_FRACTION: f32 = 0.3;

/// Generate the wireframe edges for `variant`.
///
/// Callers pass validated input (`radius > 0`, `segments >= 3`). The
/// output order is deterministic; the flat variant derives its staggered
/// entrance delays from each edge's index.
pub fn generate_edges(radius: f32, segments: u32, variant: GeometryVariant) -> Vec<Edge> {
    match variant {
        GeometryVariant::Sphere => sphere_edges(radius, segments),
        GeometryVariant::Circle => circle_edges(radius, segments),
    }
}

/// Number of edges `generate_edges` returns for the given input.
pub fn edge_count(segments: u32, variant: GeometryVariant) -> usize {
    let s = segments as usize;
    match variant {
        GeometryVariant::Sphere => s * s + (s - 1) * s,
        GeometryVariant::Circle => s + INNER_RING_FRACTIONS.len() * (s / 2) + SPOKE_COUNT,
    }
}

/// Meridians first (`segments` of them, `segments` pieces pole to pole),
/// then `segments - 1` latitude rings of `segments` pieces.
fn sphere_edges(radius: f32, segments: u32) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(edge_count(segments, GeometryVariant::Sphere));
    let n = segments as f32;

    for i in 0..segments {
        let phi = (i as f32 / n) * TAU;
        for j in 0..segments {
            let theta1 = (j as f32 / n) * PI;
            let theta2 = ((j + 1) as f32 / n) * PI;
            edges.push(Edge::new(
                sphere_point(radius, theta1, phi),
                sphere_point(radius, theta2, phi),
                1.0,
            ));
        }
    }

    for i in 1..segments {
        let theta = (i as f32 / n) * PI;
        for j in 0..segments {
            let phi1 = (j as f32 / n) * TAU;
            let phi2 = ((j + 1) as f32 / n) * TAU;
            edges.push(Edge::new(
                sphere_point(radius, theta, phi1),
                sphere_point(radius, theta, phi2),
                1.0,
            ));
        }
    }

    edges
}

/// Outer ring, then the dashed inner rings, then the spokes.
fn circle_edges(radius: f32, segments: u32) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(edge_count(segments, GeometryVariant::Circle));
    let n = segments as f32;

    for i in 0..segments {
        let a1 = (i as f32 / n) * TAU;
        let a2 = ((i + 1) as f32 / n) * TAU;
        edges.push(Edge::new(
            circle_point(radius, a1),
            circle_point(radius, a2),
            OUTER_RING_WEIGHT,
        ));
    }

    for fraction in INNER_RING_FRACTIONS {
        let r = radius * fraction;
        for k in 0..segments / 2 {
            let a1 = ((2 * k) as f32 / n) * TAU;
            let a2 = ((2 * k + 1) as f32 / n) * TAU;
            edges.push(Edge::new(
                circle_point(r, a1),
                circle_point(r, a2),
                INNER_RING_WEIGHT * fraction,
            ));
        }
    }

    for i in 0..SPOKE_COUNT {
        let a = (i as f32 / SPOKE_COUNT as f32) * TAU;
        edges.push(Edge::new(
            circle_point(radius * SPOKE_INNER_FRACTION, a),
            circle_point(radius, a),
            SPOKE_WEIGHT,
        ));
    }

    edges
}

/// Polar angle `theta` from +Y, azimuth `phi` in the XZ plane.
fn sphere_point(radius: f32, theta: f32, phi: f32) -> Point3 {
    let sin_theta = theta.sin();
    Point3::new(
        sin_theta * phi.cos() * radius,
        theta.cos() * radius,
        sin_theta * phi.sin() * radius,
    )
}

fn circle_point(radius: f32, angle: f32) -> Point3 {
    Point3::new(angle.cos() * radius, angle.sin() * radius, 0.0)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_edge_count_formula() {
        for segments in [3, 4, 16, 31] {
            let edges = generate_edges(10.0, segments, GeometryVariant::Sphere);
            let s = segments as usize;
            assert_eq!(edges.len(), s * s + (s - 1) * s);
            assert_eq!(edges.len(), edge_count(segments, GeometryVariant::Sphere));
        }
    }

    #[test]
    fn sphere_sixteen_segments_has_496_edges() {
        assert_eq!(generate_edges(1.0, 16, GeometryVariant::Sphere).len(), 496);
    }

    #[test]
    fn circle_edge_count_formula() {
        for segments in [3, 8, 32, 33] {
            let edges = generate_edges(10.0, segments, GeometryVariant::Circle);
            let s = segments as usize;
            assert_eq!(edges.len(), s + 4 * (s / 2) + 16);
            assert_eq!(edges.len(), edge_count(segments, GeometryVariant::Circle));
        }
    }

    #[test]
    fn circle_thirty_two_segments_has_112_edges() {
        assert_eq!(generate_edges(1.0, 32, GeometryVariant::Circle).len(), 112);
    }

    #[test]
    fn sphere_vertices_lie_on_radius() {
        let radius = 136.5;
        for edge in generate_edges(radius, 16, GeometryVariant::Sphere) {
            assert!((edge.start.length() - radius).abs() < 1e-3);
            assert!((edge.end.length() - radius).abs() < 1e-3);
            assert_eq!(edge.weight, 1.0);
        }
    }

    #[test]
    fn sphere_first_meridian_starts_at_north_pole() {
        let edges = generate_edges(2.0, 8, GeometryVariant::Sphere);
        let first = edges[0].start;
        assert!(first.x.abs() < 1e-6);
        assert!((first.y - 2.0).abs() < 1e-6);
        assert!(first.z.abs() < 1e-6);
    }

    #[test]
    fn circle_is_planar() {
        for edge in generate_edges(50.0, 32, GeometryVariant::Circle) {
            assert_eq!(edge.start.z, 0.0);
            assert_eq!(edge.end.z, 0.0);
        }
    }

    #[test]
    fn circle_weights_follow_section_order() {
        let edges = generate_edges(50.0, 32, GeometryVariant::Circle);
        assert!(edges[..32].iter().all(|e| e.weight == 0.8));
        // first inner ring at 0.3 of the radius
        assert!((edges[32].weight - 0.18).abs() < 1e-6);
        assert!((edges[32].start.length() - 15.0).abs() < 1e-4);
        assert!(edges[edges.len() - 16..].iter().all(|e| e.weight == 0.4));
    }

    #[test]
    fn circle_outer_ring_lies_on_radius() {
        let edges = generate_edges(80.0, 24, GeometryVariant::Circle);
        for edge in &edges[..24] {
            assert!((edge.start.length() - 80.0).abs() < 1e-3);
            assert!((edge.end.length() - 80.0).abs() < 1e-3);
        }
    }

    #[test]
    fn spokes_run_from_inner_fraction_to_rim() {
        let edges = generate_edges(100.0, 32, GeometryVariant::Circle);
        for spoke in &edges[edges.len() - 16..] {
            assert!((spoke.start.length() - 30.0).abs() < 1e-3);
            assert!((spoke.end.length() - 100.0).abs() < 1e-3);
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let a = generate_edges(7.0, 12, GeometryVariant::Sphere);
        let b = generate_edges(7.0, 12, GeometryVariant::Sphere);
        assert_eq!(a, b);
    }
}
