//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Step` counter.  Each completed motion
//! update advances it by one.  `SimClock` maps steps to simulated seconds:
//!
//!   sim_time = step * time_step_secs
//!
//! Simulated time is independent of wall-clock time.  The real-time runner
//! paces steps against a wall clock, but the trajectory only ever sees steps.

use std::fmt;

// ── Step ─────────────────────────────────────────────────────────────────────

/// An absolute step index.  `Step(0)` is the start position, before any update.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step(pub u64);

impl Step {
    pub const ZERO: Step = Step(0);

    /// Steps elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Step) -> u64 {
        self.0 - earlier.0
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current step and converts it to simulated seconds.
///
/// `SimClock` is cheap to copy and holds no heap data.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Simulated seconds covered by one step (the motion `timeStep`).
    pub time_step_secs: f64,
    /// The current step — advanced by `SimClock::advance()` after each update.
    pub current_step: Step,
}

impl SimClock {
    pub fn new(time_step_secs: f64) -> Self {
        Self {
            time_step_secs,
            current_step: Step::ZERO,
        }
    }

    /// Advance the clock by one step and return the new step.
    #[inline]
    pub fn advance(&mut self) -> Step {
        self.current_step = Step(self.current_step.0 + 1);
        self.current_step
    }

    /// Simulated seconds at `step`.
    #[inline]
    pub fn secs_at(&self, step: Step) -> f64 {
        step.0 as f64 * self.time_step_secs
    }

    /// Simulated seconds elapsed since step 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.secs_at(self.current_step)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (t={:.2}s)", self.current_step, self.elapsed_secs())
    }
}
