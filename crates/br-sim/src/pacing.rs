//! Frame-rate cap for the realtime loop.

use std::thread;
use std::time::{Duration, Instant};

/// Sleeps out the remainder of a fixed frame interval.
///
/// Each iteration records its start instant; after stepping and rendering,
/// [`wait`][Self::wait] blocks until `frame_start + interval`.  An iteration
/// that already overran its budget does not sleep at all, and the overrun is
/// not carried into the next frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameLimiter {
    interval: Option<Duration>,
}

impl FrameLimiter {
    /// Cap at `target_fps` frames per second.  `0` (or any non-positive or
    /// non-finite value) disables the cap.
    pub fn new(target_fps: f64) -> Self {
        let interval = if target_fps.is_finite() && target_fps > 0.0 {
            Duration::try_from_secs_f64(1.0 / target_fps).ok()
        } else {
            None
        };
        Self { interval }
    }

    /// A limiter that never sleeps.
    pub fn uncapped() -> Self {
        Self { interval: None }
    }

    /// Minimum time between frame starts, if capped.
    #[inline]
    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// Time left in the frame that started at `frame_start`.
    pub fn remaining(&self, frame_start: Instant) -> Duration {
        match self.interval {
            Some(interval) => interval.saturating_sub(frame_start.elapsed()),
            None => Duration::ZERO,
        }
    }

    /// Block until the frame that started at `frame_start` has used its full
    /// interval.  Returns how long it slept.
    pub fn wait(&self, frame_start: Instant) -> Duration {
        let remaining = self.remaining(frame_start);
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
        remaining
    }
}
