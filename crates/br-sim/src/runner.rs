//! The `Runner` struct: owns the state of one simulation.

use br_core::SimRng;
use br_motion::{Agent, CollisionPolicy, MotionEngine, RandomReversal};

use crate::{run_fixed, run_realtime, RealtimeOptions, RunSummary, StepObserver, Trajectory};

/// Owns one [`Agent`], its [`MotionEngine`], and the [`SimRng`] that feeds
/// the collision policy.
///
/// The agent is mutated in place by every run; a second `run_fixed` call
/// continues from where the first stopped.  Create via
/// [`RunBuilder`][crate::RunBuilder] (validated) or [`Runner::new`] (not).
pub struct Runner<P: CollisionPolicy = RandomReversal> {
    pub agent:  Agent,
    pub engine: MotionEngine<P>,
    pub rng:    SimRng,
}

impl<P: CollisionPolicy> Runner<P> {
    /// Assemble a runner from parts without validation.
    pub fn new(agent: Agent, engine: MotionEngine<P>, rng: SimRng) -> Self {
        Self { agent, engine, rng }
    }

    /// Run exactly `steps` steps; see [`run_fixed`].
    pub fn run_fixed<O: StepObserver>(
        &mut self,
        steps:     u64,
        time_step: f64,
        observer:  &mut O,
    ) -> Trajectory {
        // Split borrow: engine shared, agent and rng exclusive.
        let Self { agent, engine, rng } = self;
        run_fixed(engine, agent, rng, steps, time_step, observer)
    }

    /// Run against the wall clock; see [`run_realtime`].
    pub fn run_realtime<C, O>(
        &mut self,
        opts:         &RealtimeOptions,
        is_cancelled: C,
        observer:     &mut O,
    ) -> RunSummary
    where
        C: FnMut() -> bool,
        O: StepObserver,
    {
        let Self { agent, engine, rng } = self;
        run_realtime(engine, agent, rng, opts, is_cancelled, observer)
    }
}
