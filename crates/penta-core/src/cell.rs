//! Grid cell contents.

use std::fmt;

use crate::mover::Mover;

/// The contents of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Stone(Mover),
}

impl Cell {
    /// Return `true` if no stone occupies the cell.
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Return `true` if the cell holds a stone of `mover`.
    #[inline]
    pub fn is(self, mover: Mover) -> bool {
        self == Cell::Stone(mover)
    }

    /// The owner of the stone, if any.
    #[inline]
    pub const fn mover(self) -> Option<Mover> {
        match self {
            Cell::Empty => None,
            Cell::Stone(m) => Some(m),
        }
    }

    /// Grid notation character: `*` for empty, otherwise the mover's symbol.
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '*',
            Cell::Stone(m) => m.symbol(),
        }
    }

    /// Parse a grid notation character.
    pub fn from_symbol(c: char) -> Option<Cell> {
        match c {
            '*' | '.' => Some(Cell::Empty),
            _ => Mover::from_symbol(c).map(Cell::Stone),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
