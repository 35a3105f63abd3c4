//! The append-only position sequence produced by a run.

use std::ops::Index;

use br_core::Vec2;

/// Ordered agent positions, one per completed step.
///
/// Index 0 is the position before any update, so a run of `n` steps yields
/// `n + 1` positions.  Only the runner appends; consumers get a read-only
/// view or take ownership with [`into_positions`][Self::into_positions].
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    positions:  Vec<Vec2>,
    collisions: u64,
}

// A trajectory always holds its start position, so there is no `is_empty`.
#[allow(clippy::len_without_is_empty)]
impl Trajectory {
    /// A trajectory holding only `start`, with room for `steps` more points.
    pub fn with_capacity(start: Vec2, steps: usize) -> Self {
        let mut positions = Vec::with_capacity(steps.saturating_add(1));
        positions.push(start);
        Self { positions, collisions: 0 }
    }

    pub fn new(start: Vec2) -> Self {
        Self::with_capacity(start, 0)
    }

    pub(crate) fn push(&mut self, position: Vec2, collided: bool) {
        self.positions.push(position);
        if collided {
            self.collisions += 1;
        }
    }

    /// All positions, start first.
    #[inline]
    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    /// The start position (index 0).
    #[inline]
    pub fn start(&self) -> Vec2 {
        self.positions[0]
    }

    /// The most recent position.
    #[inline]
    pub fn last(&self) -> Vec2 {
        self.positions[self.positions.len() - 1]
    }

    /// Number of positions (`steps() + 1`).
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Number of completed steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.positions.len() - 1
    }

    /// Number of steps that hit a wall.
    #[inline]
    pub fn collisions(&self) -> u64 {
        self.collisions
    }

    /// The last `n` positions (or all of them if shorter).  Used for trails.
    pub fn tail(&self, n: usize) -> &[Vec2] {
        let start = self.positions.len().saturating_sub(n);
        &self.positions[start..]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec2> {
        self.positions.iter()
    }

    pub fn into_positions(self) -> Vec<Vec2> {
        self.positions
    }
}

impl Index<usize> for Trajectory {
    type Output = Vec2;
    #[inline]
    fn index(&self, i: usize) -> &Vec2 {
        &self.positions[i]
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Vec2;
    type IntoIter = std::slice::Iter<'a, Vec2>;
    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter()
    }
}
