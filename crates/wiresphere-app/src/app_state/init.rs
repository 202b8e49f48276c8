//! Window creation, renderer initialization and view mount.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;
use wiresphere_core::SphereView;
use wiresphere_renderer::RenderState;

use super::core::WireSphereApp;

impl WireSphereApp {
    /// Create the window, initialize the GPU and mount the sphere view.
    ///
    /// Returns `false` if any step failed and the event loop should exit.
    /// The failure is logged once here.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("failed to create window: {e}");
                return false;
            }
        };

        let vsync = self.config.performance.vsync;
        let render_state = match pollster::block_on(RenderState::new(window.clone(), vsync)) {
            Ok(rs) => rs,
            Err(e) => {
                tracing::error!("failed to initialize renderer: {e}");
                return false;
            }
        };

        let viewport = render_state.viewport();
        match SphereView::mount(&self.config, viewport, render_state, self.now_ms()) {
            Ok(view) => self.view = Some(view),
            Err(e) => {
                tracing::error!("failed to mount sphere view: {e}");
                return false;
            }
        }

        tracing::info!(
            "window ready ({}x{} logical, variant={})",
            viewport.width,
            viewport.height,
            self.config.sphere.variant.as_str(),
        );
        self.window = Some(window);
        true
    }

    /// Forward a DPI change to the backend; a `Resized` event follows.
    pub(super) fn set_scale_factor(&mut self, scale_factor: f64) {
        if let Some(rs) = self.view.as_mut().and_then(SphereView::backend_mut) {
            rs.set_scale_factor(scale_factor);
        }
    }
}
