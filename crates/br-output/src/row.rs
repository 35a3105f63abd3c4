//! Plain data row types written by output backends.

use br_sim::{RunSummary, StepEvent};

/// The agent's state after one step (step 0 = start position).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryRow {
    pub step:      u64,
    /// Simulated seconds.
    pub time_secs: f64,
    pub x:         f64,
    pub y:         f64,
    /// Radians in `[0, 2π)`.
    pub heading:   f64,
    pub collided:  bool,
}

impl From<&StepEvent> for TrajectoryRow {
    fn from(e: &StepEvent) -> Self {
        Self {
            step:      e.step.0,
            time_secs: e.time_secs,
            x:         e.position.x,
            y:         e.position.y,
            heading:   e.heading,
            collided:  e.collided,
        }
    }
}

/// One line per run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummaryRow {
    pub steps:        u64,
    pub collisions:   u64,
    pub sim_secs:     f64,
    pub elapsed_secs: f64,
    pub cancelled:    bool,
}

impl From<&RunSummary> for RunSummaryRow {
    fn from(s: &RunSummary) -> Self {
        Self {
            steps:        s.steps,
            collisions:   s.collisions,
            sim_secs:     s.sim_secs,
            elapsed_secs: s.elapsed.as_secs_f64(),
            cancelled:    s.cancelled,
        }
    }
}
