//! Flat variant: a 2D ring-and-spoke approximation of the sphere that
//! spins and breathes as a whole, with bars sweeping out of the center.

use wiresphere_config::schema::FlatConfig;

use super::slices::{slice_primitives, slice_progress_timeline, wireframe_opacity_timeline};
use super::Palette;
use crate::draw::{DrawList, Stroke};
use crate::geometry::{generate_edges, Edge, GeometryVariant, Point2, Point3};
use crate::layout::Layout;
use crate::timeline::{interpolate, Easing, Extrapolate, ParamId, ParameterStore, Phase};

const LINE_WIDTH: f32 = 2.0;
const ENTRY_MS: f64 = 1000.0;

const PULSE_HIGH: f32 = 1.1;
const PULSE_LOW: f32 = 0.9;
const SCALE_RANGE: [f32; 2] = [0.95, 1.05];

const BAR_REACH: f32 = 0.8;
const BAR_THICKNESS: f32 = 4.0;
const BAR_SCALE: [f32; 2] = [0.5, 1.2];

const CORE_RADIUS: f32 = 6.0;
const CORE_HALO_RADIUS: f32 = 16.0;
const CORE_HALO_OPACITY: f32 = 0.25;

const GLOW_SCALE: f32 = 1.25;
const GLOW_OPACITY: f32 = 0.1;

/// Flat variant state: cached geometry plus the ids of its parameters.
#[derive(Debug)]
pub struct FlatSphere {
    segments: u32,
    slice_count: u32,
    stagger_ms: f64,
    radius: f32,
    edges: Vec<Edge>,
    entry: Phase,
    rotation: ParamId,
    pulse: ParamId,
    slice_progress: ParamId,
    wireframe_opacity: ParamId,
}

impl FlatSphere {
    /// Generate geometry and start every timeline at `now_ms`.
    pub fn mount(
        config: &FlatConfig,
        slice_count: u32,
        layout: &Layout,
        params: &mut ParameterStore,
        now_ms: f64,
    ) -> Self {
        let cycle = f64::from(config.cycle_ms);
        let dim = config.wireframe_dim as f32;

        let rotation = params.add("rotation", 0.0, 0.0, 1.0);
        let pulse = params.add("pulse", 1.0, PULSE_LOW, PULSE_HIGH);
        let slice_progress = params.add("slice_progress", 0.0, 0.0, 1.0);
        let wireframe_opacity = params.add("wireframe_opacity", 1.0, dim, 1.0);

        params.animate(
            rotation,
            Phase::timed(1.0, f64::from(config.rotation_period_ms), Easing::Linear).looped(),
            now_ms,
        );
        let half = f64::from(config.pulse_period_ms);
        params.animate(
            pulse,
            Phase::sequence([
                Phase::timed(PULSE_HIGH, half, Easing::SineInOut),
                Phase::timed(PULSE_LOW, half, Easing::SineInOut),
            ])
            .looped(),
            now_ms,
        );
        params.animate(slice_progress, slice_progress_timeline(cycle), now_ms);
        params.animate(
            wireframe_opacity,
            wireframe_opacity_timeline(dim, cycle),
            now_ms,
        );

        Self {
            segments: config.segments,
            slice_count,
            stagger_ms: f64::from(config.stagger_ms),
            radius: layout.radius,
            edges: generate_edges(layout.radius, config.segments, GeometryVariant::Circle),
            entry: Phase::timed(1.0, ENTRY_MS, Easing::ExpOut),
            rotation,
            pulse,
            slice_progress,
            wireframe_opacity,
        }
    }

    /// Regenerate geometry only if the radius changed.
    pub fn resize(&mut self, layout: &Layout) {
        if layout.radius != self.radius {
            self.radius = layout.radius;
            self.edges = generate_edges(self.radius, self.segments, GeometryVariant::Circle);
        }
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Entrance progress of line `index`, `0..=1`.
    pub fn entry_progress(&self, index: usize, elapsed_ms: f64) -> f32 {
        self.entry
            .value_at(0.0, elapsed_ms - index as f64 * self.stagger_ms)
    }

    /// Container rotation in degrees.
    pub fn rotation_degrees(&self, params: &ParameterStore) -> f32 {
        interpolate(
            params.value(self.rotation),
            &[0.0, 1.0],
            &[0.0, 360.0],
            Extrapolate::Extend,
        )
    }

    /// Container scale derived from the pulse.
    pub fn scale(&self, params: &ParameterStore) -> f32 {
        interpolate(
            params.value(self.pulse),
            &[PULSE_LOW, PULSE_HIGH],
            &SCALE_RANGE,
            Extrapolate::Clamp,
        )
    }

    pub fn compose(
        &self,
        params: &ParameterStore,
        layout: &Layout,
        palette: &Palette,
        elapsed_ms: f64,
    ) -> DrawList {
        let center = layout.center;
        let theta = self.rotation_degrees(params).to_radians();
        let scale = self.scale(params);
        let (sin_t, cos_t) = theta.sin_cos();
        let place = |x: f32, y: f32| {
            let (x, y) = (x * scale, y * scale);
            Point2::new(
                center.x + x * cos_t - y * sin_t,
                center.y + x * sin_t + y * cos_t,
            )
        };
        let place3 = |p: Point3| place(p.x, p.y);

        let wire_opacity = params.value(self.wireframe_opacity);
        let progress = params.value(self.slice_progress);

        let mut list = DrawList::new(palette.background);
        list.fill_circle(
            center,
            layout.contain(self.radius * GLOW_SCALE),
            palette.wireframe,
            GLOW_OPACITY,
        );

        for (i, edge) in self.edges.iter().enumerate() {
            let entry = self.entry_progress(i, elapsed_ms);
            let from = place3(edge.start);
            let to = from.lerp(place3(edge.end), entry);
            list.line(
                from,
                to,
                Stroke::new(
                    palette.wireframe,
                    edge.weight * entry * wire_opacity,
                    LINE_WIDTH * scale,
                ),
            );
        }

        let bar_scale = interpolate(progress, &[0.0, 1.0], &BAR_SCALE, Extrapolate::Extend);
        let half_length = self.radius * BAR_REACH * bar_scale;
        for slice in slice_primitives(self.slice_count, half_length, progress) {
            let (dy, dx) = slice.angle.sin_cos();
            list.line(
                place(-dx * slice.radius, -dy * slice.radius),
                place(dx * slice.radius, dy * slice.radius),
                Stroke::new(palette.slice, slice.progress, BAR_THICKNESS * bar_scale * scale),
            );
        }

        let core = place(0.0, 0.0);
        list.fill_circle(core, CORE_HALO_RADIUS * scale, palette.core, CORE_HALO_OPACITY);
        list.fill_circle(core, CORE_RADIUS * scale, palette.core, 1.0);
        list
    }
}
