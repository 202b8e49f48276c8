//! Frame timing for the periodic stats log.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

const MAX_SAMPLES: usize = 120;

/// Rolling window of frame durations.
pub struct FrameTimer {
    frame_times: VecDeque<Duration>,
    last_frame: Option<Instant>,
    frames_total: u64,
}

/// Snapshot of the rolling window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub fps: f64,
    pub frame_time_ms: f64,
    pub frames_total: u64,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::with_capacity(MAX_SAMPLES),
            last_frame: None,
            frames_total: 0,
        }
    }

    /// Mark the start of a frame. The first call only sets the baseline.
    pub fn begin_frame(&mut self) {
        let now = Instant::now();
        if let Some(last) = self.last_frame.replace(now) {
            self.record(now - last);
        }
        self.frames_total += 1;
    }

    /// Push one frame duration into the window.
    pub fn record(&mut self, dt: Duration) {
        self.frame_times.push_back(dt);
        if self.frame_times.len() > MAX_SAMPLES {
            self.frame_times.pop_front();
        }
    }

    fn total_secs(&self) -> f64 {
        self.frame_times.iter().map(Duration::as_secs_f64).sum()
    }

    pub fn fps(&self) -> f64 {
        let total = self.total_secs();
        if total <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f64 / total
    }

    pub fn frame_time_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        self.total_secs() / self.frame_times.len() as f64 * 1000.0
    }

    pub fn sample_count(&self) -> usize {
        self.frame_times.len()
    }

    pub fn stats(&self) -> FrameStats {
        FrameStats {
            fps: self.fps(),
            frame_time_ms: self.frame_time_ms(),
            frames_total: self.frames_total,
        }
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_fps_is_zero() {
        let timer = FrameTimer::new();
        assert_eq!(timer.fps(), 0.0);
        assert_eq!(timer.frame_time_ms(), 0.0);
    }

    #[test]
    fn steady_sixty_hz() {
        let mut timer = FrameTimer::new();
        for _ in 0..10 {
            timer.record(Duration::from_micros(16_667));
        }
        assert!((timer.fps() - 60.0).abs() < 0.1);
        assert!((timer.frame_time_ms() - 16.667).abs() < 0.01);
    }

    #[test]
    fn first_frame_only_sets_baseline() {
        let mut timer = FrameTimer::new();
        timer.begin_frame();
        assert_eq!(timer.sample_count(), 0);
        std::thread::sleep(Duration::from_millis(1));
        timer.begin_frame();
        assert_eq!(timer.sample_count(), 1);
        assert!(timer.fps() > 0.0);
        assert_eq!(timer.stats().frames_total, 2);
    }

    #[test]
    fn max_samples_respected() {
        let mut timer = FrameTimer::new();
        for _ in 0..200 {
            timer.record(Duration::from_millis(5));
        }
        timer.record(Duration::from_millis(10));
        assert_eq!(timer.sample_count(), MAX_SAMPLES);
        // Oldest samples dropped, newest kept.
        assert!(timer.frame_time_ms() > 5.0);
    }
}
