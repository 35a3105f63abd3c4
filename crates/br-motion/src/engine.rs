//! The motion engine: advances one agent by one discrete time step.

use br_core::{SimRng, Vec2};

use crate::{Agent, Arena, CollisionPolicy, RandomReversal, WallHits};

/// Holds the arena and the collision policy, and applies the update rule.
///
/// The engine is stateless between steps; all mutable state lives in the
/// [`Agent`] and the [`SimRng`] passed to [`step`][Self::step].
///
/// # Type parameter
///
/// `P` must implement [`CollisionPolicy`].  Defaults to [`RandomReversal`].
#[derive(Clone, Debug)]
pub struct MotionEngine<P: CollisionPolicy = RandomReversal> {
    pub arena:  Arena,
    pub policy: P,
}

impl MotionEngine<RandomReversal> {
    /// Engine with the default random-reversal collision policy.
    pub fn new(arena: Arena) -> Self {
        Self { arena, policy: RandomReversal }
    }
}

impl<P: CollisionPolicy> MotionEngine<P> {
    pub fn with_policy(arena: Arena, policy: P) -> Self {
        Self { arena, policy }
    }

    /// Advance `agent` by `time_step` and report whether it hit a wall.
    ///
    /// `time_step = 0` is legal and produces no displacement.
    #[inline]
    pub fn step(&self, agent: &mut Agent, time_step: f64, rng: &mut SimRng) -> bool {
        self.step_with_hits(agent, time_step, rng).any()
    }

    /// Like [`step`][Self::step] but returns which walls were struck.
    pub fn step_with_hits(&self, agent: &mut Agent, time_step: f64, rng: &mut SimRng) -> WallHits {
        let candidate = agent.position + agent.velocity() * time_step;

        let (x, hit_x) = self.arena.clamp_axis(candidate.x, agent.radius);
        let (y, hit_y) = self.arena.clamp_axis(candidate.y, agent.radius);
        let hits = WallHits { x: hit_x, y: hit_y };

        if hits.any() {
            agent.heading = self.policy.deflect(agent.heading, hits, rng);
        }
        agent.position = Vec2::new(x, y);
        hits
    }
}
