//! Graceful shutdown: unmount the view, then drop the window.

use super::core::WireSphereApp;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl WireSphereApp {
    /// Tear everything down. Safe to call more than once.
    ///
    /// Order matters:
    /// 1. Unmount the view (cancels the redraw loop, stops the timelines,
    ///    releases GPU resources in reverse order)
    /// 2. Drop the window the surface was created from
    pub(super) fn shutdown(&mut self) {
        if self.should_exit {
            return;
        }
        self.should_exit = true;
        tracing::info!("initiating graceful shutdown");

        if let Some(mut view) = self.view.take() {
            view.unmount();
        }
        self.window = None;

        tracing::info!("graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================
