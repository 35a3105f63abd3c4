//! `br-sim` — drives the motion engine and collects trajectories.
//!
//! # Two run modes, one step primitive
//!
//! ```text
//! fixed (run_fixed):
//!   record start position
//!   repeat `steps` times:
//!     ① step     — MotionEngine::step
//!     ② record   — append position, notify observer
//!
//! realtime (run_realtime):
//!   record start position
//!   loop:
//!     ① budget   — stop once wall-clock elapsed ≥ max_duration
//!     ② cancel   — stop if is_cancelled() returns true
//!     ③ step     — MotionEngine::step
//!     ④ render   — observer.on_step (same thread, read-after-write)
//!     ⑤ pace     — sleep out the rest of the frame interval
//! ```
//!
//! Both modes are deterministic for a fixed `SimRng` seed; only the number of
//! realtime steps depends on the wall clock.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use br_sim::{NoopObserver, RunBuilder};
//!
//! let mut runner = RunBuilder::new(100.0, 2.0, 2.0).seed(42).build()?;
//! let trajectory = runner.run_fixed(1_000, 0.5, &mut NoopObserver);
//! assert_eq!(trajectory.len(), 1_001);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod pacing;
pub mod run;
pub mod runner;
pub mod trajectory;

#[cfg(test)]
mod tests;

pub use builder::RunBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, OnStep, StepEvent, StepObserver};
pub use pacing::FrameLimiter;
pub use run::{run_fixed, run_realtime, validate_time_step, RealtimeOptions, RunSummary};
pub use runner::Runner;
pub use trajectory::Trajectory;
