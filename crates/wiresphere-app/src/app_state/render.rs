//! Per-frame driving of the sphere view.

use super::core::WireSphereApp;

impl WireSphereApp {
    /// Advance and draw one frame, logging stats when the view asks.
    pub(super) fn render_frame(&mut self) {
        let now = self.now_ms();
        let Some(view) = self.view.as_mut() else {
            return;
        };

        match view.frame(now) {
            Ok(Some(tick)) => {
                self.timer.begin_frame();
                if tick.report_stats {
                    let stats = self.timer.stats();
                    tracing::debug!(
                        fps = format_args!("{:.1}", stats.fps),
                        frame_ms = format_args!("{:.2}", stats.frame_time_ms),
                        frames = stats.frames_total,
                        elapsed_s = format_args!("{:.1}", tick.elapsed_ms / 1000.0),
                        "frame stats"
                    );
                }
            }
            Ok(None) => {}
            Err(e) => tracing::error!("render error: {e}"),
        }
    }
}
