use wiresphere_common::Color;
use wiresphere_core::{Dash, DrawCommand, DrawList, Point2, Stroke};

use super::types::CanvasVertex;

/// Segments used for every circle fill and outline.
pub const CIRCLE_SEGMENTS: usize = 64;

/// Straight pieces a quadratic path is flattened into.
pub const PATH_SEGMENTS: usize = 32;

const MIN_OPACITY: f32 = 1.0 / 512.0;

/// Convert a draw list into a triangle list, preserving command order.
///
/// Commands that are fully transparent or degenerate emit nothing.
pub fn tessellate(list: &DrawList) -> Vec<CanvasVertex> {
    let mut out = Vec::with_capacity(list.len() * 6);
    for command in &list.commands {
        match *command {
            DrawCommand::Line { from, to, stroke } => {
                if visible(stroke.opacity) {
                    push_segment(&mut out, from, to, &stroke);
                }
            }
            DrawCommand::Circle {
                center,
                radius,
                fill,
                stroke,
            } => {
                if let Some((color, opacity)) = fill {
                    if visible(opacity) {
                        push_disc(&mut out, center, radius, color, opacity);
                    }
                }
                if let Some(stroke) = stroke {
                    if visible(stroke.opacity) {
                        push_ring(&mut out, center, radius, &stroke);
                    }
                }
            }
            DrawCommand::QuadPath {
                from,
                control,
                to,
                stroke,
                dash,
            } => {
                if visible(stroke.opacity) {
                    push_path(&mut out, from, control, to, &stroke, dash);
                }
            }
        }
    }
    out
}

fn visible(opacity: f32) -> bool {
    opacity >= MIN_OPACITY
}

fn vertex(p: Point2, color: [f32; 4]) -> CanvasVertex {
    CanvasVertex {
        position: [p.x, p.y],
        color,
    }
}

/// One stroked segment as a quad of two triangles.
fn push_segment(out: &mut Vec<CanvasVertex>, from: Point2, to: Point2, stroke: &Stroke) {
    let len = from.distance(to);
    if len <= f32::EPSILON || stroke.width <= 0.0 {
        return;
    }
    let half = stroke.width * 0.5;
    let nx = -(to.y - from.y) / len * half;
    let ny = (to.x - from.x) / len * half;
    let color = stroke.color.to_f32_with_opacity(stroke.opacity);

    let a = Point2::new(from.x + nx, from.y + ny);
    let b = Point2::new(from.x - nx, from.y - ny);
    let c = Point2::new(to.x - nx, to.y - ny);
    let d = Point2::new(to.x + nx, to.y + ny);
    out.extend([a, b, c, a, c, d].map(|p| vertex(p, color)));
}

fn circle_point(center: Point2, radius: f32, i: usize) -> Point2 {
    let angle = i as f32 / CIRCLE_SEGMENTS as f32 * std::f32::consts::TAU;
    Point2::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

fn push_disc(out: &mut Vec<CanvasVertex>, center: Point2, radius: f32, color: Color, opacity: f32) {
    if radius <= 0.0 {
        return;
    }
    let color = color.to_f32_with_opacity(opacity);
    for i in 0..CIRCLE_SEGMENTS {
        out.push(vertex(center, color));
        out.push(vertex(circle_point(center, radius, i), color));
        out.push(vertex(circle_point(center, radius, i + 1), color));
    }
}

/// Annulus centered on `radius`, `stroke.width` wide.
fn push_ring(out: &mut Vec<CanvasVertex>, center: Point2, radius: f32, stroke: &Stroke) {
    if radius <= 0.0 || stroke.width <= 0.0 {
        return;
    }
    let half = stroke.width * 0.5;
    let inner = (radius - half).max(0.0);
    let outer = radius + half;
    let color = stroke.color.to_f32_with_opacity(stroke.opacity);
    for i in 0..CIRCLE_SEGMENTS {
        let a = circle_point(center, outer, i);
        let b = circle_point(center, inner, i);
        let c = circle_point(center, inner, i + 1);
        let d = circle_point(center, outer, i + 1);
        out.extend([a, b, c, a, c, d].map(|p| vertex(p, color)));
    }
}

/// Point on the quadratic Bezier `from → control → to` at `t`.
pub fn quad_point(from: Point2, control: Point2, to: Point2, t: f32) -> Point2 {
    let u = 1.0 - t;
    Point2::new(
        u * u * from.x + 2.0 * u * t * control.x + t * t * to.x,
        u * u * from.y + 2.0 * u * t * control.y + t * t * to.y,
    )
}

/// Polyline with cumulative arc length at each vertex.
struct Polyline {
    points: Vec<Point2>,
    lengths: Vec<f32>,
}

impl Polyline {
    fn flatten(from: Point2, control: Point2, to: Point2) -> Self {
        let points: Vec<Point2> = (0..=PATH_SEGMENTS)
            .map(|i| quad_point(from, control, to, i as f32 / PATH_SEGMENTS as f32))
            .collect();
        let mut lengths = Vec::with_capacity(points.len());
        let mut total = 0.0;
        lengths.push(0.0);
        for pair in points.windows(2) {
            total += pair[0].distance(pair[1]);
            lengths.push(total);
        }
        Self { points, lengths }
    }

    fn total(&self) -> f32 {
        self.lengths.last().copied().unwrap_or(0.0)
    }

    fn point_at(&self, s: f32) -> Point2 {
        let i = self.lengths.partition_point(|&l| l < s).clamp(1, self.points.len() - 1);
        let (l0, l1) = (self.lengths[i - 1], self.lengths[i]);
        let t = if l1 > l0 { (s - l0) / (l1 - l0) } else { 0.0 };
        self.points[i - 1].lerp(self.points[i], t.clamp(0.0, 1.0))
    }

    /// Vertices covering arc length `start..end`, endpoints interpolated.
    fn slice(&self, start: f32, end: f32) -> Vec<Point2> {
        let mut pts = vec![self.point_at(start)];
        for (p, &l) in self.points.iter().zip(&self.lengths) {
            if l > start && l < end {
                pts.push(*p);
            }
        }
        pts.push(self.point_at(end));
        pts
    }
}

/// Visible `(start, end)` arc-length spans of a dashed stroke of `total`
/// length, in SVG `stroke-dasharray` / `stroke-dashoffset` semantics.
pub fn dash_spans(total: f32, dash: Option<Dash>) -> Vec<(f32, f32)> {
    let Some(dash) = dash else {
        return vec![(0.0, total)];
    };
    if dash.on <= 0.0 {
        return Vec::new();
    }
    if dash.off <= 0.0 {
        return vec![(0.0, total)];
    }
    let period = dash.on + dash.off;
    let mut spans = Vec::new();
    let mut s = -dash.offset.rem_euclid(period);
    while s < total {
        let a = s.max(0.0);
        let b = (s + dash.on).min(total);
        if b > a {
            spans.push((a, b));
        }
        s += period;
    }
    spans
}

fn push_path(
    out: &mut Vec<CanvasVertex>,
    from: Point2,
    control: Point2,
    to: Point2,
    stroke: &Stroke,
    dash: Option<Dash>,
) {
    let line = Polyline::flatten(from, control, to);
    for (start, end) in dash_spans(line.total(), dash) {
        for pair in line.slice(start, end).windows(2) {
            push_segment(out, pair[0], pair[1], stroke);
        }
    }
}
