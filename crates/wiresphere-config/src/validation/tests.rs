//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = WireSphereConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_zero_window_width() {
    let mut config = WireSphereConfig::default();
    config.window.width = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.width"));
}

#[test]
fn catches_too_few_segments() {
    let mut config = WireSphereConfig::default();
    config.flat.segments = 2;
    config.projected.segments = 1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("flat.segments"));
    assert!(err.contains("projected.segments"));
}

#[test]
fn minimum_segments_are_accepted() {
    let mut config = WireSphereConfig::default();
    config.flat.segments = 3;
    config.projected.segments = 3;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_cycle_shorter_than_slice_sequence() {
    let mut config = WireSphereConfig::default();
    config.projected.cycle_ms = 4999;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("projected.cycle_ms"));
}

#[test]
fn catches_inverted_slice_window() {
    let mut config = WireSphereConfig::default();
    config.mesh.slice_window_start = 0.8;
    config.mesh.slice_window_end = 0.3;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("must be below"));
}

#[test]
fn catches_opacity_out_of_range() {
    let mut config = WireSphereConfig::default();
    config.flat.wireframe_dim = 1.5;
    config.mesh.wireframe_peak = -0.1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("flat.wireframe_dim"));
    assert!(err.contains("mesh.wireframe_peak"));
}

#[test]
fn catches_nan_values() {
    let mut config = WireSphereConfig::default();
    config.mesh.fade_step = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("mesh.fade_step"));
}

#[test]
fn catches_bad_hex_color() {
    let mut config = WireSphereConfig::default();
    config.colors.slice = "orange".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("colors.slice"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = WireSphereConfig::default();
    config.window.height = 0;
    config.sphere.slice_count = 0;
    config.colors.core = "nope".into();
    let err = validate(&config).unwrap_err().to_string();
    assert_eq!(err.matches(';').count(), 2);
}
