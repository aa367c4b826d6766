//! The four line axes through a cell, and rays walked along them.

use crate::coord::Move;

/// A line through a cell. Each axis has a positive and a negative direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Axis {
    /// Along a column; positive direction is increasing `y`.
    Vertical = 0,
    /// Along a row; positive direction is increasing `x`.
    Horizontal = 1,
    /// Up-right / down-left; positive direction is `(+1, -1)`.
    Rising = 2,
    /// Down-right / up-left; positive direction is `(+1, +1)`.
    Falling = 3,
}

impl Axis {
    /// All axes in index order.
    pub const ALL: [Axis; 4] = [Axis::Vertical, Axis::Horizontal, Axis::Rising, Axis::Falling];

    /// Step of the positive direction.
    #[inline]
    pub const fn step(self) -> (isize, isize) {
        match self {
            Axis::Vertical => (0, 1),
            Axis::Horizontal => (1, 0),
            Axis::Rising => (1, -1),
            Axis::Falling => (1, 1),
        }
    }

    /// Both directions, positive first.
    #[inline]
    pub const fn directions(self) -> [(isize, isize); 2] {
        let (dx, dy) = self.step();
        [(dx, dy), (-dx, -dy)]
    }
}

/// Cells visited walking away from an origin in one direction, origin excluded.
///
/// Each item carries `true` when it is the last cell before the grid edge.
#[derive(Debug, Clone)]
pub struct Ray {
    next: Option<Move>,
    step: (isize, isize),
    size: usize,
}

impl Ray {
    /// Start a ray at `origin` heading in `step`.
    pub fn new(origin: Move, step: (isize, isize), size: usize) -> Ray {
        Ray {
            next: origin.offset(step.0, step.1, size),
            step,
            size,
        }
    }
}

impl Iterator for Ray {
    type Item = (Move, bool);

    fn next(&mut self) -> Option<(Move, bool)> {
        let current = self.next?;
        self.next = current.offset(self.step.0, self.step.1, self.size);
        Some((current, self.next.is_none()))
    }
}
