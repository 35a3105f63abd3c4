//! The two run loops.  Both borrow the agent rather than own it, so callers
//! that keep their own `Agent` (tests, embedders) can drive it directly;
//! [`Runner`][crate::Runner] wraps them for the common owned case.

use std::time::{Duration, Instant};

use br_core::{SimClock, SimRng, Step};
use br_motion::{Agent, CollisionPolicy, MotionEngine};
use log::{debug, trace};

use crate::{FrameLimiter, SimError, SimResult, StepEvent, StepObserver, Trajectory};

/// Upper bound on the positions reserved up front by `run_fixed`; longer runs
/// grow the buffer as they go.
const MAX_PREALLOC_STEPS: usize = 1 << 20;

// ── Options and summary ───────────────────────────────────────────────────────

/// Parameters of a wall-clock-bounded run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RealtimeOptions {
    /// Simulated seconds per step.
    pub time_step: f64,
    /// Wall-clock budget in seconds.
    pub max_duration: f64,
    /// Frame-rate cap.  `0` runs uncapped.
    pub target_fps: f64,
}

impl RealtimeOptions {
    pub const DEFAULT_FPS: f64 = 60.0;

    pub fn new(time_step: f64, max_duration: f64) -> Self {
        Self {
            time_step,
            max_duration,
            target_fps: Self::DEFAULT_FPS,
        }
    }

    pub fn target_fps(mut self, fps: f64) -> Self {
        self.target_fps = fps;
        self
    }

    /// Caller-side check: `time_step` and `max_duration` finite and > 0,
    /// `target_fps` finite and ≥ 0.
    pub fn validate(&self) -> SimResult<()> {
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(SimError::InvalidTimeStep(self.time_step));
        }
        if !(self.max_duration.is_finite() && self.max_duration > 0.0) {
            return Err(SimError::InvalidDuration(self.max_duration));
        }
        if !(self.target_fps.is_finite() && self.target_fps >= 0.0) {
            return Err(SimError::InvalidFrameRate(self.target_fps));
        }
        Ok(())
    }

    fn budget(&self) -> Duration {
        // NaN.max(0.0) is 0.0; +∞ does not fit a Duration and means "no budget".
        Duration::try_from_secs_f64(self.max_duration.max(0.0)).unwrap_or(Duration::MAX)
    }
}

/// Caller-side check for the fixed-mode time step: finite and ≥ 0.
pub fn validate_time_step(time_step: f64) -> SimResult<f64> {
    if time_step.is_finite() && time_step >= 0.0 {
        Ok(time_step)
    } else {
        Err(SimError::InvalidTimeStep(time_step))
    }
}

/// What a finished run did.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RunSummary {
    /// Completed steps (excluding the start position).
    pub steps:      u64,
    /// Steps that hit at least one wall.
    pub collisions: u64,
    /// Simulated seconds covered.
    pub sim_secs:   f64,
    /// Wall-clock time the loop took.
    pub elapsed:    Duration,
    /// `true` if the run stopped because `is_cancelled` returned `true`.
    pub cancelled:  bool,
}

// ── Fixed-step-count mode ─────────────────────────────────────────────────────

/// Step `agent` exactly `steps` times and return the `steps + 1` positions
/// visited, starting with its position at call time.
///
/// `steps = 0` returns just the start position and leaves `agent` untouched.
pub fn run_fixed<P, O>(
    engine:    &MotionEngine<P>,
    agent:     &mut Agent,
    rng:       &mut SimRng,
    steps:     u64,
    time_step: f64,
    observer:  &mut O,
) -> Trajectory
where
    P: CollisionPolicy,
    O: StepObserver,
{
    let started = Instant::now();
    let mut clock = SimClock::new(time_step);
    let capacity = usize::try_from(steps).unwrap_or(usize::MAX).min(MAX_PREALLOC_STEPS);
    let mut trajectory = Trajectory::with_capacity(agent.position, capacity);

    debug!("fixed run: {steps} steps, dt={time_step}, start {}", agent.position);
    observer.on_run_start(&event(&clock, agent, false));

    for _ in 0..steps {
        let collided = engine.step(agent, time_step, rng);
        let step = clock.advance();
        if collided {
            trace!("{step}: wall contact at {}, new heading {:.4}", agent.position, agent.heading);
        }
        trajectory.push(agent.position, collided);
        observer.on_step(&event(&clock, agent, collided));
    }

    let summary = RunSummary {
        steps,
        collisions: trajectory.collisions(),
        sim_secs:   clock.elapsed_secs(),
        elapsed:    started.elapsed(),
        cancelled:  false,
    };
    debug!(
        "fixed run done: {} steps, {} collisions, end {}",
        summary.steps, summary.collisions, agent.position,
    );
    observer.on_run_end(&summary);
    trajectory
}

// ── Wall-clock-bounded mode ───────────────────────────────────────────────────

/// Step `agent` at a paced cadence until `opts.max_duration` wall-clock
/// seconds have elapsed or `is_cancelled` returns `true`.
///
/// `is_cancelled` is polled once per iteration, before the step; a step in
/// progress is never interrupted.  `observer.on_step` runs right after each
/// step on the same thread, so it always sees the committed state.
pub fn run_realtime<P, C, O>(
    engine:           &MotionEngine<P>,
    agent:            &mut Agent,
    rng:              &mut SimRng,
    opts:             &RealtimeOptions,
    mut is_cancelled: C,
    observer:         &mut O,
) -> RunSummary
where
    P: CollisionPolicy,
    C: FnMut() -> bool,
    O: StepObserver,
{
    let started = Instant::now();
    let budget = opts.budget();
    let limiter = FrameLimiter::new(opts.target_fps);
    let mut clock = SimClock::new(opts.time_step);
    let mut collisions = 0u64;
    let mut cancelled = false;

    debug!(
        "realtime run: dt={}, budget {:?}, frame interval {:?}",
        opts.time_step,
        budget,
        limiter.interval(),
    );
    observer.on_run_start(&event(&clock, agent, false));

    loop {
        let frame_start = Instant::now();
        if started.elapsed() >= budget {
            break;
        }
        if is_cancelled() {
            cancelled = true;
            break;
        }

        let collided = engine.step(agent, opts.time_step, rng);
        let step = clock.advance();
        if collided {
            collisions += 1;
            trace!("{step}: wall contact at {}, new heading {:.4}", agent.position, agent.heading);
        }
        observer.on_step(&event(&clock, agent, collided));

        limiter.wait(frame_start);
    }

    let summary = RunSummary {
        steps: clock.current_step.since(Step::ZERO),
        collisions,
        sim_secs: clock.elapsed_secs(),
        elapsed: started.elapsed(),
        cancelled,
    };
    debug!(
        "realtime run done: {} steps in {:?}{}",
        summary.steps,
        summary.elapsed,
        if cancelled { " (cancelled)" } else { "" },
    );
    observer.on_run_end(&summary);
    summary
}

fn event(clock: &SimClock, agent: &Agent, collided: bool) -> StepEvent {
    StepEvent {
        step:      clock.current_step,
        time_secs: clock.elapsed_secs(),
        position:  agent.position,
        heading:   agent.heading,
        collided,
    }
}
