//! Backend-agnostic 2D draw primitives.

use wiresphere_common::Color;

use crate::geometry::Point2;

/// Stroke style for lines, outlines and paths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub opacity: f32,
    pub width: f32,
}

impl Stroke {
    pub const fn new(color: Color, opacity: f32, width: f32) -> Self {
        Self {
            color,
            opacity,
            width,
        }
    }
}

/// Dash pattern: `on` drawn, `off` skipped, shifted by `offset` along the path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dash {
    pub on: f32,
    pub off: f32,
    pub offset: f32,
}

/// A single primitive in screen space.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Point2,
        to: Point2,
        stroke: Stroke,
    },
    Circle {
        center: Point2,
        radius: f32,
        fill: Option<(Color, f32)>,
        stroke: Option<Stroke>,
    },
    /// Quadratic Bezier from `from` to `to` bent towards `control`.
    QuadPath {
        from: Point2,
        control: Point2,
        to: Point2,
        stroke: Stroke,
        dash: Option<Dash>,
    },
}

impl DrawCommand {
    /// Effective opacity of the primitive's most visible part.
    pub fn opacity(&self) -> f32 {
        match self {
            DrawCommand::Line { stroke, .. } | DrawCommand::QuadPath { stroke, .. } => {
                stroke.opacity
            }
            DrawCommand::Circle { fill, stroke, .. } => {
                let f = fill.map_or(0.0, |(_, o)| o);
                let s = stroke.map_or(0.0, |s| s.opacity);
                f.max(s)
            }
        }
    }
}

/// Ordered list of primitives for one frame, back to front.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    pub clear: Color,
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new(clear: Color) -> Self {
        Self {
            clear,
            commands: Vec::new(),
        }
    }

    pub fn line(&mut self, from: Point2, to: Point2, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }

    pub fn fill_circle(&mut self, center: Point2, radius: f32, color: Color, opacity: f32) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            fill: Some((color, opacity)),
            stroke: None,
        });
    }

    pub fn stroke_circle(&mut self, center: Point2, radius: f32, stroke: Stroke) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            fill: None,
            stroke: Some(stroke),
        });
    }

    pub fn quad_path(
        &mut self,
        from: Point2,
        control: Point2,
        to: Point2,
        stroke: Stroke,
        dash: Option<Dash>,
    ) {
        self.commands.push(DrawCommand::QuadPath {
            from,
            control,
            to,
            stroke,
            dash,
        });
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn paths(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::QuadPath { .. }))
    }
}
