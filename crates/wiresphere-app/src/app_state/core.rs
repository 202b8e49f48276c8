//! WireSphereApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;
use wiresphere_config::WireSphereConfig;
use wiresphere_core::SphereView;
use wiresphere_renderer::{FrameTimer, RenderState};

/// Top-level application state.
pub struct WireSphereApp {
    pub(super) config: WireSphereConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) view: Option<SphereView<RenderState>>,

    // Frame clock
    pub(super) started: Instant,
    pub(super) timer: FrameTimer,

    pub(super) init_failed: bool,
    pub(super) should_exit: bool,
}

impl WireSphereApp {
    pub fn new(config: WireSphereConfig) -> Self {
        Self {
            config,
            window: None,
            view: None,
            started: Instant::now(),
            timer: FrameTimer::new(),
            init_failed: false,
            should_exit: false,
        }
    }

    /// Milliseconds since the app was created; the view's clock.
    pub(super) fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    /// Window or GPU setup failed and the loop exited early.
    pub fn init_failed(&self) -> bool {
        self.init_failed
    }
}
