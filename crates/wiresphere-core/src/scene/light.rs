//! Scene lights.
//!
//! Basic materials are unlit, so lights are carried for hosts whose
//! backend shades them; the built-in GPU backend ignores them.

use wiresphere_common::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Ambient {
        color: Color,
        intensity: f32,
    },
    Point {
        color: Color,
        intensity: f32,
        /// Falloff distance; zero means no falloff.
        distance: f32,
        position: [f32; 3],
    },
}

impl Light {
    pub fn intensity(&self) -> f32 {
        match self {
            Light::Ambient { intensity, .. } | Light::Point { intensity, .. } => *intensity,
        }
    }
}
