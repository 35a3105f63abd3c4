//! ASCII rendering of the arena, the trail, and the robot.

use std::fmt::Write as _;

use br_core::Vec2;

const BORDER_H: char = '-';
const BORDER_V: char = '|';
const CORNER:   char = '+';
const TRAIL:    char = '.';
const ROBOT:    char = 'O';

/// Terminal cells are roughly twice as tall as wide, so the canvas uses
/// twice as many columns as rows to keep the arena square on screen.
pub struct Canvas {
    arena_size: f64,
    cols:       usize,
    rows:       usize,
}

impl Canvas {
    pub fn new(arena_size: f64, rows: usize) -> Self {
        let rows = rows.max(2);
        Self { arena_size, cols: rows * 2, rows }
    }

    /// Map an arena position to a `(row, col)` cell.  Row 0 is the top
    /// (high `y`).  Positions outside the arena land on the nearest edge.
    fn cell(&self, p: Vec2) -> (usize, usize) {
        let fx = (p.x / self.arena_size).clamp(0.0, 1.0);
        let fy = (p.y / self.arena_size).clamp(0.0, 1.0);
        let col = ((fx * self.cols as f64) as usize).min(self.cols - 1);
        let row = self.rows - 1 - ((fy * self.rows as f64) as usize).min(self.rows - 1);
        (row, col)
    }

    /// Draw one frame: bordered arena, `trail` as dots, the robot on top, and
    /// a status line.
    pub fn frame(&self, trail: impl IntoIterator<Item = Vec2>, robot: Vec2, status: &str) -> String {
        let mut grid = vec![vec![' '; self.cols]; self.rows];
        for p in trail {
            let (r, c) = self.cell(p);
            grid[r][c] = TRAIL;
        }
        let (r, c) = self.cell(robot);
        grid[r][c] = ROBOT;

        let mut out = String::with_capacity((self.cols + 3) * (self.rows + 3));
        let edge: String = std::iter::once(CORNER)
            .chain(std::iter::repeat_n(BORDER_H, self.cols))
            .chain(std::iter::once(CORNER))
            .collect();
        out.push_str(&edge);
        out.push('\n');
        for line in &grid {
            out.push(BORDER_V);
            out.extend(line.iter());
            out.push(BORDER_V);
            out.push('\n');
        }
        out.push_str(&edge);
        out.push('\n');
        let _ = writeln!(out, "{status}");
        out
    }
}

/// The trail shown at playback frame `frame`: up to `len` positions ending at
/// (and including) `positions[frame]`.  Grows from one point until it
/// reaches `len`.
pub fn trail_window(positions: &[Vec2], frame: usize, len: usize) -> &[Vec2] {
    if positions.is_empty() || len == 0 {
        return &[];
    }
    let end = frame.min(positions.len() - 1) + 1;
    &positions[end.saturating_sub(len)..end]
}

/// ANSI: move the cursor home and clear the screen.
pub const CLEAR: &str = "\x1b[H\x1b[2J";
