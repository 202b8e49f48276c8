//! Projected variant: a true sphere wireframe rotated in 3D and drawn
//! orthographically, with dashed arcs slicing around it.

use std::f32::consts::{PI, TAU};

use wiresphere_config::schema::ProjectedConfig;

use super::slices::{
    slice_opacity_timeline, slice_primitives, slice_progress_timeline, wireframe_opacity_timeline,
};
use super::Palette;
use crate::draw::{Dash, DrawList, Stroke};
use crate::geometry::{generate_edges, Edge, GeometryVariant, Point2};
use crate::layout::Layout;
use crate::projection::project_edge;
use crate::timeline::{interpolate, Easing, Extrapolate, ParamId, ParameterStore, Phase};

const EDGE_ALPHA: f32 = 0.8;
const EDGE_WIDTH: f32 = 1.0;

const ARC_RADIUS: f32 = 0.9;
const ARC_HALF_SPAN: f32 = 0.3;
const ARC_BULGE: f32 = 1.2;
const ARC_WIDTH: f32 = 3.0;
const ARC_DASH: f32 = 10.0;
const ARC_GAP: f32 = 5.0;
const ARC_DASH_TRAVEL: f32 = 100.0;

const GLOW_RING_SCALE: f32 = 1.1;
const GLOW_RING_WIDTH: f32 = 20.0;
const GLOW_RING_OPACITY: f32 = 0.1;

const CORE_RADIUS: f32 = 4.0;
const CORE_WOBBLE: f32 = 2.0;
const CORE_OPACITY: f32 = 0.8;

/// Projected variant state.
#[derive(Debug)]
pub struct ProjectedSphere {
    segments: u32,
    slice_count: u32,
    radius: f32,
    edges: Vec<Edge>,
    rotation_x: ParamId,
    rotation_y: ParamId,
    slice_progress: ParamId,
    slice_opacity: ParamId,
    wireframe_opacity: ParamId,
}

impl ProjectedSphere {
    pub fn mount(
        config: &ProjectedConfig,
        slice_count: u32,
        layout: &Layout,
        params: &mut ParameterStore,
        now_ms: f64,
    ) -> Self {
        let cycle = f64::from(config.cycle_ms);
        let dim = config.wireframe_dim as f32;
        let max_tilt = config.max_tilt as f32;

        let rotation_y = params.add("rotation_y", 0.0, 0.0, TAU);
        let rotation_x = params.add("rotation_x", 0.0, 0.0, max_tilt);
        let slice_progress = params.add("slice_progress", 0.0, 0.0, 1.0);
        let slice_opacity = params.add("slice_opacity", 0.0, 0.0, 1.0);
        let wireframe_opacity = params.add("wireframe_opacity", 1.0, dim, 1.0);

        params.animate(
            rotation_y,
            Phase::timed(TAU, f64::from(config.rotation_period_ms), Easing::Linear).looped(),
            now_ms,
        );
        params.animate(
            rotation_x,
            Phase::timed(max_tilt, f64::from(config.tilt_period_ms), Easing::SineInOut)
                .ping_pong(),
            now_ms,
        );
        params.animate(slice_progress, slice_progress_timeline(cycle), now_ms);
        params.animate(slice_opacity, slice_opacity_timeline(cycle), now_ms);
        params.animate(
            wireframe_opacity,
            wireframe_opacity_timeline(dim, cycle),
            now_ms,
        );

        Self {
            segments: config.segments,
            slice_count,
            radius: layout.radius,
            edges: generate_edges(layout.radius, config.segments, GeometryVariant::Sphere),
            rotation_x,
            rotation_y,
            slice_progress,
            slice_opacity,
            wireframe_opacity,
        }
    }

    pub fn resize(&mut self, layout: &Layout) {
        if layout.radius != self.radius {
            self.radius = layout.radius;
            self.edges = generate_edges(self.radius, self.segments, GeometryVariant::Sphere);
        }
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Current `(rot_x, rot_y)` in radians.
    pub fn rotation(&self, params: &ParameterStore) -> (f32, f32) {
        (params.value(self.rotation_x), params.value(self.rotation_y))
    }

    pub fn compose(&self, params: &ParameterStore, layout: &Layout, palette: &Palette) -> DrawList {
        let center = layout.center;
        let (rot_x, rot_y) = self.rotation(params);
        let wire_opacity = params.value(self.wireframe_opacity);
        let progress = params.value(self.slice_progress);
        let slice_opacity = params.value(self.slice_opacity);

        let mut list = DrawList::new(palette.background);
        list.stroke_circle(
            center,
            layout.contain(self.radius * GLOW_RING_SCALE),
            Stroke::new(palette.wireframe, GLOW_RING_OPACITY, GLOW_RING_WIDTH),
        );

        for edge in &self.edges {
            let p = project_edge(edge, rot_x, rot_y, center, self.radius);
            list.line(
                p.from,
                p.to,
                Stroke::new(
                    palette.wireframe,
                    p.depth_opacity * EDGE_ALPHA * edge.weight * wire_opacity,
                    EDGE_WIDTH,
                ),
            );
        }

        let arc_opacity = interpolate(progress, &[0.0, 0.3, 1.0], &[0.0, 0.0, 1.0], Extrapolate::Clamp);
        let dash = Dash {
            on: ARC_DASH,
            off: ARC_GAP,
            offset: interpolate(progress, &[0.0, 1.0], &[ARC_DASH_TRAVEL, 0.0], Extrapolate::Extend),
        };
        for slice in slice_primitives(self.slice_count, self.radius * ARC_RADIUS, progress) {
            let at = |angle: f32, r: f32| {
                let (s, c) = angle.sin_cos();
                Point2::new(center.x + c * r, center.y + s * r)
            };
            list.quad_path(
                at(slice.angle - ARC_HALF_SPAN, slice.radius),
                at(slice.angle, slice.radius * ARC_BULGE),
                at(slice.angle + ARC_HALF_SPAN, slice.radius),
                Stroke::new(palette.slice, arc_opacity * slice_opacity, ARC_WIDTH),
                Some(dash),
            );
        }

        let core_radius = CORE_RADIUS + (progress * PI * 4.0).sin() * CORE_WOBBLE;
        list.fill_circle(center, core_radius, palette.core, CORE_OPACITY);
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::DrawCommand;
    use wiresphere_common::Viewport;

    fn mounted() -> (ProjectedSphere, ParameterStore, Layout) {
        let layout = Layout::new(Viewport::new(390.0, 844.0));
        let mut params = ParameterStore::new();
        let sphere =
            ProjectedSphere::mount(&ProjectedConfig::default(), 8, &layout, &mut params, 0.0);
        (sphere, params, layout)
    }

    #[test]
    fn mount_generates_sphere_geometry() {
        let (sphere, params, _) = mounted();
        assert_eq!(sphere.edges().len(), 16 * 16 + 15 * 16);
        assert_eq!(params.len(), 5);
    }

    #[test]
    fn compose_emits_ring_edges_arcs_and_core() {
        let (sphere, mut params, layout) = mounted();
        params.tick(1234.0);
        let list = sphere.compose(&params, &layout, &Palette::default());
        assert_eq!(list.len(), 1 + 496 + 8 + 1);
        assert_eq!(list.paths().count(), 8);
    }

    #[test]
    fn at_rest_frame_is_unrotated_projection() {
        let (sphere, mut params, layout) = mounted();
        params.tick(0.0);
        assert_eq!(sphere.rotation(&params), (0.0, 0.0));
        let list = sphere.compose(&params, &layout, &Palette::default());
        let DrawCommand::Line { from, .. } = &list.commands[1] else {
            panic!("expected first edge");
        };
        let first = sphere.edges()[0].start;
        assert!((from.x - (layout.center.x + first.x)).abs() < 1e-4);
        assert!((from.y - (layout.center.y + first.y)).abs() < 1e-4);
    }

    #[test]
    fn edge_opacity_stays_within_depth_bounds() {
        let (sphere, mut params, layout) = mounted();
        params.tick(0.0);
        let list = sphere.compose(&params, &layout, &Palette::default());
        for line in list.lines() {
            let o = line.opacity();
            assert!((0.2 * 0.8 - 1e-6..=0.8 + 1e-6).contains(&o), "opacity {o}");
        }
    }

    #[test]
    fn arcs_hidden_at_rest_and_solid_at_peak() {
        let (sphere, mut params, layout) = mounted();
        params.tick(0.0);
        let rest = sphere.compose(&params, &layout, &Palette::default());
        assert!(rest.paths().all(|p| p.opacity() == 0.0));

        params.tick(3000.0);
        let peak = sphere.compose(&params, &layout, &Palette::default());
        for path in peak.paths() {
            let DrawCommand::QuadPath { stroke, dash, .. } = path else {
                unreachable!();
            };
            assert_eq!(stroke.opacity, 1.0);
            assert_eq!(dash.map(|d| d.offset), Some(0.0));
        }
    }

    #[test]
    fn wireframe_dims_while_sliced() {
        let (sphere, mut params, layout) = mounted();
        params.tick(3000.0);
        let list = sphere.compose(&params, &layout, &Palette::default());
        let max = list.lines().map(DrawCommand::opacity).fold(0.0, f32::max);
        assert!(max <= 0.3 * 0.8 + 1e-5);
    }

    #[test]
    fn core_radius_wobbles_with_progress() {
        let (sphere, mut params, layout) = mounted();
        params.tick(0.0);
        let list = sphere.compose(&params, &layout, &Palette::default());
        let Some(DrawCommand::Circle { radius, .. }) = list.commands.last() else {
            panic!("expected core circle last");
        };
        assert!((radius - 4.0).abs() < 1e-6);
    }

    #[test]
    fn tilt_ping_pongs() {
        let (sphere, mut params, _) = mounted();
        params.tick(4000.0 - 1e-6);
        let (peak, _) = sphere.rotation(&params);
        assert!((peak - PI * 0.2).abs() < 1e-3);
        params.tick(8000.0 - 1e-6);
        let (back, _) = sphere.rotation(&params);
        assert!(back < 1e-3);
    }
}
