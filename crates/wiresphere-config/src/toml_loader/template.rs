//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# wiresphere configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# width = 390            # 1-8192
# height = 844           # 1-8192
# title = "wiresphere"

[sphere]
variant = "projected"    # flat, projected, mesh
# slice_count = 8        # 1-64

[flat]
# segments = 32          # 3-256
# cycle_ms = 6000        # >= 5000
# wireframe_dim = 0.2    # 0.0-1.0
# stagger_ms = 50
# rotation_period_ms = 8000
# pulse_period_ms = 2000

[projected]
# segments = 16          # 3-256
# cycle_ms = 5000        # >= 5000
# wireframe_dim = 0.3    # 0.0-1.0
# rotation_period_ms = 8000
# tilt_period_ms = 4000
# max_tilt = 0.6283185307179586

[mesh]
# cycle_ms = 6000
# slice_window_start = 0.2
# slice_window_end = 0.7
# wireframe_peak = 0.8
# wireframe_dim = 0.3
# fade_step = 0.02
# fov_degrees = 75.0

[colors]
# background = "#000000"
# wireframe = "#0096ff"
# slice = "#ff6b35"
# core = "#00ff88"

[performance]
# vsync = true
# stats_interval_ms = 5000   # 0 disables frame statistics

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
    .to_string()
}
