//! The two sides of a five-in-a-row game.

use std::fmt;
use std::ops::Not;

/// A side: Cross (`X`, moves first, maximizes) or Nought (`O`, minimizes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Mover {
    Cross = 0,
    Nought = 1,
}

impl Mover {
    /// Both movers, Cross first.
    pub const ALL: [Mover; 2] = [Mover::Cross, Mover::Nought];

    /// Return the opposite side.
    #[inline]
    pub const fn flip(self) -> Mover {
        match self {
            Mover::Cross => Mover::Nought,
            Mover::Nought => Mover::Cross,
        }
    }

    /// The side that places the next stone on the position at `ply`.
    #[inline]
    pub const fn to_move(ply: usize) -> Mover {
        if ply % 2 == 0 {
            Mover::Cross
        } else {
            Mover::Nought
        }
    }

    /// The side whose stone produced the position at `ply`, or `None` for the
    /// empty starting position.
    #[inline]
    pub const fn produced(ply: usize) -> Option<Mover> {
        if ply == 0 {
            None
        } else {
            Some(Mover::to_move(ply - 1))
        }
    }

    /// Return `true` for the side whose scores are taken as-is.
    #[inline]
    pub const fn is_maximizing(self) -> bool {
        matches!(self, Mover::Cross)
    }

    /// The grid symbol for this side.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Mover::Cross => 'X',
            Mover::Nought => 'O',
        }
    }

    /// Parse a grid symbol (case-insensitive).
    pub fn from_symbol(c: char) -> Option<Mover> {
        match c {
            'X' | 'x' => Some(Mover::Cross),
            'O' | 'o' => Some(Mover::Nought),
            _ => None,
        }
    }
}

impl Not for Mover {
    type Output = Mover;

    #[inline]
    fn not(self) -> Mover {
        self.flip()
    }
}

impl fmt::Display for Mover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::Mover;

    #[test]
    fn flip_roundtrip() {
        assert_eq!(Mover::Cross.flip(), Mover::Nought);
        assert_eq!(!Mover::Nought, Mover::Cross);
        assert_eq!(Mover::Cross.flip().flip(), Mover::Cross);
    }

    #[test]
    fn ply_parity() {
        assert_eq!(Mover::to_move(0), Mover::Cross);
        assert_eq!(Mover::to_move(1), Mover::Nought);
        assert_eq!(Mover::to_move(6), Mover::Cross);
        assert_eq!(Mover::produced(0), None);
        assert_eq!(Mover::produced(1), Some(Mover::Cross));
        assert_eq!(Mover::produced(2), Some(Mover::Nought));
        assert_eq!(Mover::produced(7), Some(Mover::Cross));
    }

    #[test]
    fn symbols() {
        assert_eq!(format!("{}", Mover::Cross), "X");
        assert_eq!(format!("{}", Mover::Nought), "O");
        assert_eq!(Mover::from_symbol('o'), Some(Mover::Nought));
        assert_eq!(Mover::from_symbol('*'), None);
    }

    #[test]
    fn only_cross_maximizes() {
        assert!(Mover::Cross.is_maximizing());
        assert!(!Mover::Nought.is_maximizing());
    }
}
