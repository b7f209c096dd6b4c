use web_time::{Duration, Instant};

/// Per-frame clock for the viewer loop. Logs a smoothed FPS periodically.
pub struct FrameTiming {
    /// Timestamp of the last `tick`.
    last_frame: Instant,
    /// Exponential moving average of instantaneous FPS.
    smoothed_fps: f32,
    /// Weight given to each new sample (0.0-1.0).
    smoothing: f32,
    /// When FPS was last reported through the log.
    last_report: Instant,
    /// Interval between FPS log lines.
    report_every: Duration,
}

impl FrameTiming {
    /// Create a timer starting at `now`.
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            last_frame: now,
            smoothed_fps: 60.0,
            smoothing: 0.05,
            last_report: now,
            report_every: Duration::from_secs(5),
        }
    }

    /// Advance to `now`.
    pub fn tick(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + (1.0 / frame_time) * self.smoothing;
        }

        if now.saturating_duration_since(self.last_report) >= self.report_every
        {
            self.last_report = now;
            log::debug!("{:.1} fps", self.smoothed_fps);
        }
    }
}
