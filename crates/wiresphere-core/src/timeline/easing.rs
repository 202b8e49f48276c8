//! Easing curves mapping normalized time to normalized progress.

use std::f32::consts::PI;

/// Easing curve. Every curve maps `0 -> 0` and `1 -> 1` and stays inside
/// `[0, 1]` in between, so interpolating between in-range endpoints never
/// leaves the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Default curve for timed transitions that don't name one.
    #[default]
    QuadInOut,
    SineInOut,
    ExpIn,
    ExpOut,
}

impl Easing {
    /// Evaluate the curve at `t`, clamped to `[0, 1]` first.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = 1.0 - t;
                    1.0 - 2.0 * u * u
                }
            }
            Easing::SineInOut => -((PI * t).cos() - 1.0) * 0.5,
            Easing::ExpIn => {
                if t == 0.0 {
                    0.0
                } else {
                    2f32.powf(10.0 * (t - 1.0))
                }
            }
            Easing::ExpOut => {
                if t == 1.0 {
                    1.0
                } else {
                    1.0 - 2f32.powf(-10.0 * t)
                }
            }
        }
    }
}
