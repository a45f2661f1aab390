//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::config::FRAME_DURATION;

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Fixed-rate deadline tracker.
///
/// Every tick moves the deadline forward by exactly one frame period,
/// independent of how long the frame took to process, so processing jitter
/// never accumulates into drift. A frame that overruns its slot gets a zero
/// sleep and the following frames catch up.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(Instant::now());
///
/// loop {
///     render_frame();
///     let result = scheduler.tick(Instant::now());
///     Timer::at(result.next_deadline).await;
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FrameScheduler {
    next_frame: Instant,
    frame_duration: Duration,
}

impl FrameScheduler {
    /// Create a new frame scheduler.
    ///
    /// Uses [`FRAME_DURATION`] for frame timing.
    pub const fn new(start: Instant) -> Self {
        Self::with_frame_duration(start, FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub const fn with_frame_duration(start: Instant, frame_duration: Duration) -> Self {
        Self {
            next_frame: start,
            frame_duration,
        }
    }

    /// Close the current frame and return timing information.
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// starting the next frame.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame > now {
            self.next_frame - now
        } else {
            Duration::from_ticks(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    /// Instant the next tick is due.
    pub const fn next_deadline(&self) -> Instant {
        self.next_frame
    }

    pub const fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Restart the schedule from `now`.
    pub fn reset(&mut self, now: Instant) {
        #[cfg(feature = "esp32-log")]
        println!("[FrameScheduler.reset] restarting schedule at {}ms", now.as_millis());
        self.next_frame = now;
    }
}
