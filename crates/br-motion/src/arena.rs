//! The square arena and per-axis wall contact.

use br_core::Vec2;

/// A square `[0, size] × [0, size]`.  Purely a boundary constraint; it holds
/// no state beyond its side length.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arena {
    pub size: f64,
}

impl Arena {
    #[inline]
    pub fn new(size: f64) -> Self {
        Self { size }
    }

    /// The arena center, where every run starts.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.size / 2.0, self.size / 2.0)
    }

    /// `true` if a circle of `radius` centred at `position` lies within the
    /// arena (touching a wall counts as inside).
    pub fn contains(&self, position: Vec2, radius: f64) -> bool {
        let lo = radius;
        let hi = self.size - radius;
        (lo..=hi).contains(&position.x) && (lo..=hi).contains(&position.y)
    }

    /// Clamp one coordinate of a candidate position so the circle stays
    /// inside the arena on that axis.
    ///
    /// Returns the (possibly clamped) coordinate and the wall struck, if any.
    /// The low wall is tested first; with `radius >= size / 2` both tests can
    /// fail and the low-wall clamp wins.
    #[inline]
    pub fn clamp_axis(&self, value: f64, radius: f64) -> (f64, Option<Wall>) {
        if value - radius < 0.0 {
            (radius, Some(Wall::Low))
        } else if value + radius > self.size {
            (self.size - radius, Some(Wall::High))
        } else {
            (value, None)
        }
    }
}

/// Which wall of an axis was struck.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Wall {
    /// The `0` wall (left for x, bottom for y).
    Low,
    /// The `size` wall (right for x, top for y).
    High,
}

/// Per-axis wall contact for one step.  Both axes may be hit at a corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallHits {
    pub x: Option<Wall>,
    pub y: Option<Wall>,
}

impl WallHits {
    pub const NONE: WallHits = WallHits { x: None, y: None };

    /// `true` if any wall was struck — the step's `collided` flag.
    #[inline]
    pub fn any(&self) -> bool {
        self.x.is_some() || self.y.is_some()
    }

    /// `true` if both axes were clamped in the same step.
    #[inline]
    pub fn is_corner(&self) -> bool {
        self.x.is_some() && self.y.is_some()
    }
}
