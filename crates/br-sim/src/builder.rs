//! Fluent builder for constructing a [`Runner`].

use br_core::{BrError, SimRng, Vec2};
use br_motion::{Agent, Arena, CollisionPolicy, MotionEngine, RandomReversal};

use crate::{Runner, SimError, SimResult};

/// Fluent builder for [`Runner<P>`].
///
/// This is where parameter validation lives; the motion engine itself accepts
/// any real input.
///
/// # Required inputs
///
/// - `arena_size`, `radius`, `speed` — all finite and > 0, with
///   `radius < arena_size / 2`.
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                                   |
/// |-------------------------|-------------------------------------------|
/// | `.seed(s)`              | OS entropy                                |
/// | `.start_position(p)`    | Arena center                              |
/// | `.heading(h)`           | Uniform in `[0, 2π)` from the run's RNG   |
/// | `.policy(p)`            | [`RandomReversal`]                        |
///
/// # Example
///
/// ```rust,ignore
/// let mut runner = RunBuilder::new(100.0, 2.0, 2.0)
///     .seed(42)
///     .build()?;
/// let trajectory = runner.run_fixed(1_000, 0.5, &mut NoopObserver);
/// ```
pub struct RunBuilder<P: CollisionPolicy = RandomReversal> {
    arena_size: f64,
    radius:     f64,
    speed:      f64,
    seed:       Option<u64>,
    position:   Option<Vec2>,
    heading:    Option<f64>,
    policy:     P,
}

impl RunBuilder<RandomReversal> {
    /// Create a builder with all required inputs.
    pub fn new(arena_size: f64, radius: f64, speed: f64) -> Self {
        Self {
            arena_size,
            radius,
            speed,
            seed:     None,
            position: None,
            heading:  None,
            policy:   RandomReversal,
        }
    }
}

impl<P: CollisionPolicy> RunBuilder<P> {
    /// Seed the run's RNG for a reproducible trajectory.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Like [`seed`][Self::seed] but accepts an optional value (config files).
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Start somewhere other than the arena center.
    pub fn start_position(mut self, position: Vec2) -> Self {
        self.position = Some(position);
        self
    }

    /// Fix the initial heading instead of drawing it from the RNG.
    pub fn heading(mut self, heading: f64) -> Self {
        self.heading = Some(heading);
        self
    }

    /// Swap the collision policy.
    pub fn policy<Q: CollisionPolicy>(self, policy: Q) -> RunBuilder<Q> {
        RunBuilder {
            arena_size: self.arena_size,
            radius:     self.radius,
            speed:      self.speed,
            seed:       self.seed,
            position:   self.position,
            heading:    self.heading,
            policy,
        }
    }

    /// Validate inputs, create the agent, and return a ready-to-run [`Runner`].
    ///
    /// The RNG is seeded before the agent is created, so the initial heading
    /// is part of the seeded stream.
    pub fn build(self) -> SimResult<Runner<P>> {
        // ── Validate parameters ───────────────────────────────────────────
        let arena_size = BrError::ensure_positive("arena_size", self.arena_size)?;
        let radius     = BrError::ensure_positive("robot_radius", self.radius)?;
        let speed      = BrError::ensure_positive("speed", self.speed)?;
        if radius >= arena_size / 2.0 {
            return Err(SimError::RadiusTooLarge { radius, arena_size });
        }

        let arena = Arena::new(arena_size);
        if let Some(position) = self.position {
            if !position.is_finite() || !arena.contains(position, radius) {
                return Err(SimError::StartOutsideArena { position, radius });
            }
        }
        if let Some(heading) = self.heading {
            if !heading.is_finite() {
                return Err(SimError::InvalidHeading(heading));
            }
        }

        // ── Create the agent ──────────────────────────────────────────────
        let mut rng = match self.seed {
            Some(seed) => SimRng::new(seed),
            None       => SimRng::from_entropy(),
        };
        let mut agent = Agent::new(&arena, radius, speed, &mut rng);
        if let Some(position) = self.position {
            agent.position = position;
        }
        if let Some(heading) = self.heading {
            agent = Agent::placed(agent.position, heading, radius, speed);
        }

        Ok(Runner::new(agent, MotionEngine::with_policy(arena, self.policy), rng))
    }
}
