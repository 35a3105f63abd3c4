//! Agent motion state.

use std::f64::consts::TAU;

use br_core::{SimRng, Vec2};

use crate::Arena;

/// The simulated point-mass robot.
///
/// `radius` and `speed` are fixed for the agent's lifetime.  `position` and
/// `heading` are mutated in place by [`MotionEngine::step`][crate::MotionEngine::step].
///
/// After every engine step the bounding circle (center `position`, radius
/// `radius`) lies within the arena, provided `radius < arena.size / 2`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    /// Center of the agent's bounding circle.
    pub position: Vec2,

    /// Direction of travel in radians, kept in `[0, 2π)`.
    pub heading: f64,

    /// Clearance kept from the arena walls.
    pub radius: f64,

    /// Displacement per unit of simulated time.
    pub speed: f64,
}

impl Agent {
    /// Create an agent at the arena center with a uniformly random heading in
    /// `[0, 2π)` drawn from `rng`.
    pub fn new(arena: &Arena, radius: f64, speed: f64, rng: &mut SimRng) -> Self {
        Self {
            position: arena.center(),
            heading:  rng.gen_range(0.0..TAU),
            radius,
            speed,
        }
    }

    /// Construct an agent at an explicit state.  `heading` is normalised into
    /// `[0, 2π)`; `position` is taken as-is (it is not clamped).
    pub fn placed(position: Vec2, heading: f64, radius: f64, speed: f64) -> Self {
        Self {
            position,
            heading: normalize_heading(heading),
            radius,
            speed,
        }
    }

    /// Displacement per unit time: `(speed·cos θ, speed·sin θ)`.
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        Vec2::from_polar(self.speed, self.heading)
    }

    /// `true` if the bounding circle lies inside `arena`.
    #[inline]
    pub fn is_contained(&self, arena: &Arena) -> bool {
        arena.contains(self.position, self.radius)
    }
}

/// Wrap an angle into `[0, 2π)`.
///
/// `rem_euclid` can round a tiny negative input up to exactly `2π`; that case
/// maps to `0`.
#[inline]
pub fn normalize_heading(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU { 0.0 } else { wrapped }
}
