//! Collision policies: how the heading changes when the agent hits a wall.
//!
//! # Pluggability
//!
//! [`MotionEngine`][crate::MotionEngine] is generic over [`CollisionPolicy`],
//! so a different rule can be swapped in at compile time with no runtime
//! overhead.  [`RandomReversal`] is the default and defines the simulated
//! process; [`SpecularReflection`] is an opt-in, physically exact variant.

use std::f64::consts::{FRAC_PI_2, PI};

use br_core::SimRng;

use crate::{normalize_heading, WallHits};

/// Chooses a new heading after a step that clamped at least one axis.
///
/// Only called when `hits.any()` is `true`.  Implementations must return a
/// heading in `[0, 2π)`.
pub trait CollisionPolicy {
    fn deflect(&self, heading: f64, hits: WallHits, rng: &mut SimRng) -> f64;
}

// ── RandomReversal ────────────────────────────────────────────────────────────

/// Turn around by `π + δ` with `δ` drawn uniformly from `[-π/2, π/2]`.
///
/// The struck wall is ignored: a hit on the x wall, the y wall, or a corner
/// all use the same formula.  The result is an approximate "bounce away"
/// with up to ±90° of noise, not a mirror reflection.
#[derive(Copy, Clone, Debug, Default)]
pub struct RandomReversal;

impl RandomReversal {
    /// Half-width of the perturbation interval.
    pub const MAX_PERTURBATION: f64 = FRAC_PI_2;
}

impl CollisionPolicy for RandomReversal {
    #[inline]
    fn deflect(&self, heading: f64, _hits: WallHits, rng: &mut SimRng) -> f64 {
        let delta = rng.gen_range(-Self::MAX_PERTURBATION..=Self::MAX_PERTURBATION);
        normalize_heading(heading + PI + delta)
    }
}

// ── SpecularReflection ────────────────────────────────────────────────────────

/// Mirror reflection off the struck wall(s): negate the velocity component of
/// every clamped axis.  Deterministic; draws nothing from the RNG.
#[derive(Copy, Clone, Debug, Default)]
pub struct SpecularReflection;

impl CollisionPolicy for SpecularReflection {
    fn deflect(&self, heading: f64, hits: WallHits, _rng: &mut SimRng) -> f64 {
        let mut h = heading;
        if hits.x.is_some() {
            // (cos, sin) → (-cos, sin)
            h = PI - h;
        }
        if hits.y.is_some() {
            // (cos, sin) → (cos, -sin)
            h = -h;
        }
        normalize_heading(h)
    }
}
