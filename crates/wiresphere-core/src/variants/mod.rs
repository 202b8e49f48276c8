//! The three renderings of the sliced sphere.
//!
//! `flat` and `projected` produce a [`DrawList`](crate::DrawList) every
//! frame from animation parameters; `mesh` drives a retained
//! [`Scene`](crate::Scene).

mod flat;
mod mesh;
mod projected;
mod slices;

pub use flat::*;
pub use mesh::*;
pub use projected::*;
pub use slices::*;

use tracing::warn;
use wiresphere_common::Color;
use wiresphere_config::schema::ColorConfig;

/// Parsed palette shared by every variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub wireframe: Color,
    pub slice: Color,
    pub core: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            wireframe: Color::from_rgb_u32(0x0096ff),
            slice: Color::from_rgb_u32(0xff6b35),
            core: Color::from_rgb_u32(0x00ff88),
        }
    }
}

impl Palette {
    /// Parse the configured colors, keeping the default for any entry
    /// that fails to parse.
    pub fn from_config(colors: &ColorConfig) -> Self {
        let defaults = Self::default();
        Self {
            background: parse_or("background", &colors.background, defaults.background),
            wireframe: parse_or("wireframe", &colors.wireframe, defaults.wireframe),
            slice: parse_or("slice", &colors.slice, defaults.slice),
            core: parse_or("core", &colors.core, defaults.core),
        }
    }
}

fn parse_or(name: &str, hex: &str, fallback: Color) -> Color {
    Color::from_hex(hex).unwrap_or_else(|| {
        warn!("colors.{name} = {hex:?} is not a hex color, using {}", fallback.to_hex());
        fallback
    })
}
