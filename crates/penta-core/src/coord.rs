//! Grid coordinates for a single stone placement.

use std::fmt;

/// A placement at column `x`, row `y` (row 0 is the top row in grid notation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub x: usize,
    pub y: usize,
}

impl Move {
    /// Create a move at `(x, y)`. Range is checked against a board, not here.
    #[inline]
    pub const fn new(x: usize, y: usize) -> Move {
        Move { x, y }
    }

    /// Return `true` if the move lies on an `size × size` grid.
    #[inline]
    pub const fn in_bounds(self, size: usize) -> bool {
        self.x < size && self.y < size
    }

    /// Row-major cell index on an `size × size` grid.
    #[inline]
    pub const fn index(self, size: usize) -> usize {
        self.y * size + self.x
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub const fn from_index(index: usize, size: usize) -> Move {
        Move {
            x: index % size,
            y: index / size,
        }
    }

    /// Step by `(dx, dy)`, returning `None` if the result leaves the grid.
    #[inline]
    pub fn offset(self, dx: isize, dy: isize, size: usize) -> Option<Move> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        let mv = Move { x, y };
        mv.in_bounds(size).then_some(mv)
    }

    /// Return `true` if the move is in the first or last column.
    #[inline]
    pub const fn on_side_edge(self, size: usize) -> bool {
        self.x == 0 || self.x + 1 == size
    }

    /// Return `true` if the move is in the first or last row.
    #[inline]
    pub const fn on_end_edge(self, size: usize) -> bool {
        self.y == 0 || self.y + 1 == size
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
