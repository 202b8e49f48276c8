//! The slicing effect shared by the 2D variants: its timelines and the
//! radial slice primitives.
//!
//! All three timelines open with the same one-second delay and are padded
//! to the same cycle, so slice progress and wireframe opacity stay
//! phase-locked: the slices are fully out exactly while the wireframe is
//! fully dimmed.

use std::f32::consts::TAU;

use crate::timeline::{Easing, Phase};

/// Delay before every cycle's slice-in.
pub const SLICE_LEAD_MS: f64 = 1000.0;
pub const SLICE_IN_MS: f64 = 2000.0;
pub const SLICE_HOLD_MS: f64 = 1000.0;
pub const SLICE_OUT_MS: f64 = 1000.0;

/// Length of the slice sequence before padding.
pub const SLICE_SEQUENCE_MS: f64 = SLICE_LEAD_MS + SLICE_IN_MS + SLICE_HOLD_MS + SLICE_OUT_MS;

const DIM_MS: f64 = 500.0;
const DIM_HOLD_MS: f64 = 2500.0;
const RESTORE_MS: f64 = 1000.0;

/// Slice progress: 0 -> 1 (exp-out), hold, 1 -> 0 (exp-in), repeated
/// every `cycle_ms` from a hard reset.
pub fn slice_progress_timeline(cycle_ms: f64) -> Phase {
    Phase::sequence([
        Phase::delay(SLICE_LEAD_MS),
        Phase::timed(1.0, SLICE_IN_MS, Easing::ExpOut),
        Phase::delay(SLICE_HOLD_MS),
        Phase::timed(0.0, SLICE_OUT_MS, Easing::ExpIn),
    ])
    .padded_to(cycle_ms)
    .looped()
}

/// Wireframe opacity: dims to `dim` while the slices are out.
pub fn wireframe_opacity_timeline(dim: f32, cycle_ms: f64) -> Phase {
    fade_timeline(dim, 1.0, cycle_ms)
}

/// Slice layer opacity: the mirror image of the wireframe dimming.
pub fn slice_opacity_timeline(cycle_ms: f64) -> Phase {
    fade_timeline(1.0, 0.0, cycle_ms)
}

fn fade_timeline(during: f32, after: f32, cycle_ms: f64) -> Phase {
    Phase::sequence([
        Phase::delay(SLICE_LEAD_MS),
        Phase::to(during, DIM_MS),
        Phase::delay(DIM_HOLD_MS),
        Phase::to(after, RESTORE_MS),
    ])
    .padded_to(cycle_ms)
    .looped()
}

/// One radial slice element, derived from the shared progress value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlicePrimitive {
    /// Direction from the center, radians.
    pub angle: f32,
    pub radius: f32,
    pub progress: f32,
}

/// `count` evenly spaced slices starting at angle zero.
pub fn slice_primitives(count: u32, radius: f32, progress: f32) -> Vec<SlicePrimitive> {
    (0..count)
        .map(|i| SlicePrimitive {
            angle: i as f32 / count as f32 * TAU,
            radius,
            progress,
        })
        .collect()
}
