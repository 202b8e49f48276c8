//! Per-variant timing, segment and opacity validation.

use crate::schema::WireSphereConfig;

use super::helpers::{validate_range, validate_range_f64};

/// Length of the slice sequence (delay, grow, hold, shrink) in ms.
/// Cycles shorter than this would truncate the sequence.
pub(crate) const MIN_CYCLE_MS: u32 = 5000;
const MAX_CYCLE_MS: u32 = 600_000;
const MAX_SEGMENTS: u32 = 256;

pub(crate) fn validate_sphere(errors: &mut Vec<String>, config: &WireSphereConfig) {
    validate_range(errors, "sphere.slice_count", config.sphere.slice_count, 1, 64);
}

pub(crate) fn validate_flat(errors: &mut Vec<String>, config: &WireSphereConfig) {
    let flat = &config.flat;
    validate_range(errors, "flat.segments", flat.segments, 3, MAX_SEGMENTS);
    validate_range(errors, "flat.cycle_ms", flat.cycle_ms, MIN_CYCLE_MS, MAX_CYCLE_MS);
    validate_range_f64(errors, "flat.wireframe_dim", flat.wireframe_dim, 0.0, 1.0);
    validate_range(errors, "flat.stagger_ms", flat.stagger_ms, 0, 1000);
    validate_range(
        errors,
        "flat.rotation_period_ms",
        flat.rotation_period_ms,
        1,
        MAX_CYCLE_MS,
    );
    validate_range(
        errors,
        "flat.pulse_period_ms",
        flat.pulse_period_ms,
        1,
        MAX_CYCLE_MS,
    );
}

pub(crate) fn validate_projected(errors: &mut Vec<String>, config: &WireSphereConfig) {
    let projected = &config.projected;
    validate_range(errors, "projected.segments", projected.segments, 3, MAX_SEGMENTS);
    validate_range(
        errors,
        "projected.cycle_ms",
        projected.cycle_ms,
        MIN_CYCLE_MS,
        MAX_CYCLE_MS,
    );
    validate_range_f64(
        errors,
        "projected.wireframe_dim",
        projected.wireframe_dim,
        0.0,
        1.0,
    );
    validate_range(
        errors,
        "projected.rotation_period_ms",
        projected.rotation_period_ms,
        1,
        MAX_CYCLE_MS,
    );
    validate_range(
        errors,
        "projected.tilt_period_ms",
        projected.tilt_period_ms,
        1,
        MAX_CYCLE_MS,
    );
    validate_range_f64(
        errors,
        "projected.max_tilt",
        projected.max_tilt,
        0.0,
        std::f64::consts::FRAC_PI_2,
    );
}

pub(crate) fn validate_mesh(errors: &mut Vec<String>, config: &WireSphereConfig) {
    let mesh = &config.mesh;
    validate_range(errors, "mesh.cycle_ms", mesh.cycle_ms, MIN_CYCLE_MS, MAX_CYCLE_MS);
    validate_range_f64(
        errors,
        "mesh.slice_window_start",
        mesh.slice_window_start,
        0.0,
        1.0,
    );
    validate_range_f64(
        errors,
        "mesh.slice_window_end",
        mesh.slice_window_end,
        0.0,
        1.0,
    );
    if mesh.slice_window_start >= mesh.slice_window_end {
        errors.push(format!(
            "mesh.slice_window_start ({}) must be below mesh.slice_window_end ({})",
            mesh.slice_window_start, mesh.slice_window_end
        ));
    }
    validate_range_f64(errors, "mesh.wireframe_peak", mesh.wireframe_peak, 0.0, 1.0);
    validate_range_f64(errors, "mesh.wireframe_dim", mesh.wireframe_dim, 0.0, 1.0);
    validate_range_f64(errors, "mesh.fade_step", mesh.fade_step, 0.001, 1.0);
    validate_range_f64(errors, "mesh.fov_degrees", mesh.fov_degrees, 10.0, 170.0);
}
