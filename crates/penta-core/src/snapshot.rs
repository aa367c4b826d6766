//! One position of the game: the N×N grid after a given number of plies.

use std::fmt;

use crate::cell::Cell;
use crate::coord::Move;
use crate::error::{LedgerError, Rejection};
use crate::mover::Mover;

/// Smallest grid on which five in a row fits.
pub const MIN_GRID_SIZE: usize = 5;

/// Complete grid state for one ply.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Snapshot {
    /// Side length of the grid.
    size: usize,
    /// Cells in row-major order, indexed by [`Move::index`].
    cells: Vec<Cell>,
    /// Number of non-empty cells, equal to the ply of the position.
    stones: usize,
}

impl Snapshot {
    /// An empty `size × size` grid.
    pub fn empty(size: usize) -> Snapshot {
        Snapshot {
            size,
            cells: vec![Cell::Empty; size * size],
            stones: 0,
        }
    }

    /// Side length of the grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells, which is also the largest possible ply.
    #[inline]
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Number of stones on the grid.
    #[inline]
    pub fn stones(&self) -> usize {
        self.stones
    }

    /// Return `true` if every cell holds a stone.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stones == self.cells.len()
    }

    /// Return the cell at `mv`.
    ///
    /// # Panics
    ///
    /// Panics if `mv` is off the grid.
    #[inline]
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.index(self.size)]
    }

    /// Return the cell at `(x, y)`, or `None` if off the grid.
    #[inline]
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        let mv = Move::new(x, y);
        mv.in_bounds(self.size).then(|| self.get(mv))
    }

    /// Number of stones belonging to `mover`.
    pub fn count(&self, mover: Mover) -> usize {
        self.cells.iter().filter(|c| c.is(mover)).count()
    }

    /// Iterate over every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Move, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| (Move::from_index(i, size), c))
    }

    /// Check that `mv` is on the grid and empty.
    pub fn check_placement(&self, mv: Move) -> Result<(), LedgerError> {
        let reason = if !mv.in_bounds(self.size) {
            Rejection::OffGrid
        } else if !self.get(mv).is_empty() {
            Rejection::Occupied
        } else {
            return Ok(());
        };
        Err(LedgerError::InvalidMove {
            x: mv.x,
            y: mv.y,
            reason,
        })
    }

    /// Put a stone of `mover` on an empty cell.
    pub fn place(&mut self, mv: Move, mover: Mover) -> Result<(), LedgerError> {
        self.check_placement(mv)?;
        let idx = mv.index(self.size);
        self.cells[idx] = Cell::Stone(mover);
        self.stones += 1;
        Ok(())
    }

    /// Return a pretty-printable wrapper with coordinate labels.
    pub fn pretty(&self) -> PrettySnapshot<'_> {
        PrettySnapshot(self)
    }
}

impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Snapshot(\"{}\")", self.to_notation())
    }
}

/// Wrapper for printing a snapshot with column and row numbers.
pub struct PrettySnapshot<'a>(&'a Snapshot);

impl fmt::Display for PrettySnapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.0;
        let size = snapshot.size();
        write!(f, "   ")?;
        for x in 0..size {
            write!(f, "{x:<3}")?;
        }
        for y in 0..size {
            writeln!(f)?;
            write!(f, "{y:<3}")?;
            for x in 0..size {
                write!(f, "{:<3}", snapshot.get(Move::new(x, y)).symbol())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Snapshot;
    use crate::cell::Cell;
    use crate::coord::Move;
    use crate::error::{LedgerError, Rejection};
    use crate::mover::Mover;

    #[test]
    fn empty_grid() {
        let snap = Snapshot::empty(6);
        assert_eq!(snap.size(), 6);
        assert_eq!(snap.area(), 36);
        assert_eq!(snap.stones(), 0);
        assert!(snap.iter().all(|(_, c)| c.is_empty()));
    }

    #[test]
    fn place_updates_count() {
        let mut snap = Snapshot::empty(6);
        snap.place(Move::new(2, 3), Mover::Cross).unwrap();
        snap.place(Move::new(3, 3), Mover::Nought).unwrap();
        assert_eq!(snap.stones(), 2);
        assert_eq!(snap.get(Move::new(2, 3)), Cell::Stone(Mover::Cross));
        assert_eq!(snap.cell(3, 3), Some(Cell::Stone(Mover::Nought)));
        assert_eq!(snap.cell(6, 0), None);
        assert_eq!(snap.count(Mover::Cross), 1);
    }

    #[test]
    fn place_rejects_occupied_and_off_grid() {
        let mut snap = Snapshot::empty(5);
        snap.place(Move::new(0, 0), Mover::Cross).unwrap();
        assert_eq!(
            snap.place(Move::new(0, 0), Mover::Nought),
            Err(LedgerError::InvalidMove {
                x: 0,
                y: 0,
                reason: Rejection::Occupied
            })
        );
        assert_eq!(
            snap.place(Move::new(5, 1), Mover::Nought),
            Err(LedgerError::InvalidMove {
                x: 5,
                y: 1,
                reason: Rejection::OffGrid
            })
        );
        assert_eq!(snap.stones(), 1);
    }

    #[test]
    fn iter_is_row_major() {
        let snap = Snapshot::empty(5);
        let order: Vec<Move> = snap.iter().map(|(mv, _)| mv).take(6).collect();
        assert_eq!(order[4], Move::new(4, 0));
        assert_eq!(order[5], Move::new(0, 1));
    }

    #[test]
    fn pretty_print() {
        let mut snap = Snapshot::empty(5);
        snap.place(Move::new(1, 2), Mover::Nought).unwrap();
        let output = format!("{}", snap.pretty());
        assert!(output.starts_with("   0  1  2  3  4"));
        assert!(output.contains("2  *  O  *"));
    }
}
