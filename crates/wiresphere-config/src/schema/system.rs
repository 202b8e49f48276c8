//! System configuration types: performance and logging.

use serde::{Deserialize, Serialize};

/// Frame pacing and diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Present with vsync (FIFO) instead of immediate mode.
    pub vsync: bool,
    /// Interval between frame statistics log lines in ms (0 disables).
    pub stats_interval_ms: u32,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            vsync: true,
            stats_interval_ms: 5000,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing-subscriber` filter directive for this level.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "wiresphere=trace",
            LogLevel::Debug => "wiresphere=debug",
            LogLevel::Info => "wiresphere=info",
            LogLevel::Warn => "wiresphere=warn",
            LogLevel::Error => "wiresphere=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
