//! Step observer trait for rendering, output, and progress reporting.

use br_core::{Step, Vec2};

use crate::RunSummary;

/// State of the agent right after one step (or at the start of a run).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StepEvent {
    /// `Step(0)` for the start position.
    pub step:      Step,
    /// Simulated seconds at `step`.
    pub time_secs: f64,
    pub position:  Vec2,
    pub heading:   f64,
    /// `true` if this step clamped at least one axis.  Always `false` at
    /// `Step(0)`.
    pub collided:  bool,
}

/// Callbacks invoked by [`run_fixed`][crate::run_fixed] and
/// [`run_realtime`][crate::run_realtime].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Observers only get read access: they
/// cannot perturb agent state.
///
/// # Example — collision counter
///
/// ```rust,ignore
/// struct Bumps(u64);
///
/// impl StepObserver for Bumps {
///     fn on_step(&mut self, event: &StepEvent) {
///         if event.collided {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait StepObserver {
    /// Called once with the start position before the first step.
    fn on_run_start(&mut self, _start: &StepEvent) {}

    /// Called after every completed step.
    fn on_step(&mut self, _event: &StepEvent) {}

    /// Called once after the last step.
    fn on_run_end(&mut self, _summary: &RunSummary) {}
}

/// A [`StepObserver`] that does nothing.
pub struct NoopObserver;

impl StepObserver for NoopObserver {}

/// Adapts a closure into a [`StepObserver`] that only sees `on_step`.
///
/// ```rust,ignore
/// runner.run_realtime(&opts, || false, &mut OnStep(|e: &StepEvent| {
///     draw(e.position, e.collided);
/// }));
/// ```
pub struct OnStep<F>(pub F);

impl<F: FnMut(&StepEvent)> StepObserver for OnStep<F> {
    fn on_step(&mut self, event: &StepEvent) {
        (self.0)(event)
    }
}
