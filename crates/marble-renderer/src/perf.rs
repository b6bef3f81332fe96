//! Frame timing: per-frame delta time and rolling FPS.

use std::collections::VecDeque;

/// Converts a monotonically increasing timestamp (seconds) into per-frame
/// deltas and tracks average frame rate.
///
/// Time is fed in by the caller so the same clock drives both a real
/// window loop and a headless simulation.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: f64,
    previous: f64,
    frame_times: VecDeque<f64>,
    max_samples: usize,
}

impl FrameClock {
    /// Create a clock starting at `now` with a 120-sample rolling window.
    pub fn new(now: f64) -> Self {
        Self {
            start: now,
            previous: now,
            frame_times: VecDeque::new(),
            max_samples: 120,
        }
    }

    /// Advance to `now`, returning the elapsed seconds since the last
    /// accepted tick. Returns `None` (and keeps the previous timestamp)
    /// when no time has passed, so the camera is never updated with a zero
    /// or negative delta.
    pub fn tick(&mut self, now: f64) -> Option<f32> {
        let delta = now - self.previous;
        if delta <= 0.0 {
            return None;
        }
        self.previous = now;
        self.frame_times.push_back(delta);
        if self.frame_times.len() > self.max_samples {
            self.frame_times.pop_front();
        }
        Some(delta as f32)
    }

    /// Seconds between construction and the last accepted tick.
    pub fn elapsed(&self) -> f64 {
        self.previous - self.start
    }

    /// Average frames per second over the sample window.
    pub fn fps(&self) -> f64 {
        let total: f64 = self.frame_times.iter().sum();
        if total <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f64 / total
    }

    /// Average frame time in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let total: f64 = self.frame_times.iter().sum();
        (total / self.frame_times.len() as f64) * 1000.0
    }

    /// Number of frame samples currently stored.
    pub fn sample_count(&self) -> usize {
        self.frame_times.len()
    }
}
