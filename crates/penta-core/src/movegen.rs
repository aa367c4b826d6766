//! Candidate move generation.

use crate::coord::Move;
use crate::snapshot::Snapshot;

/// Ordered list of candidate moves.
///
/// Order is row-major (y ascending, then x ascending) and decides ties in the
/// search, so it must never be shuffled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Create an empty move list with room for `capacity` moves.
    pub fn with_capacity(capacity: usize) -> MoveList {
        MoveList {
            moves: Vec::with_capacity(capacity),
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Position of `mv` in the list.
    pub fn position(&self, mv: Move) -> Option<usize> {
        self.moves.iter().position(|&m| m == mv)
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// Which empty cells count as candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CandidatePolicy {
    /// Every empty cell.
    #[default]
    All,
    /// Empty cells touching at least one stone, orthogonally or diagonally.
    ///
    /// Cuts the branching factor on sparse boards. With no stones on the
    /// board it falls back to every empty cell.
    Adjacent,
}

impl CandidatePolicy {
    /// Generate the candidates for `snapshot` in row-major order.
    pub fn generate(self, snapshot: &Snapshot) -> MoveList {
        let filter = self == CandidatePolicy::Adjacent && snapshot.stones() > 0;
        let mut list = MoveList::with_capacity(snapshot.area() - snapshot.stones());
        for (mv, cell) in snapshot.iter() {
            if !cell.is_empty() {
                continue;
            }
            if filter && !has_neighbor(snapshot, mv) {
                continue;
            }
            list.push(mv);
        }
        list
    }
}

/// Generate every empty cell of `snapshot` in row-major order.
pub fn generate_candidates(snapshot: &Snapshot) -> MoveList {
    CandidatePolicy::All.generate(snapshot)
}

/// Return `true` if any of the 8 cells around `mv` holds a stone.
fn has_neighbor(snapshot: &Snapshot, mv: Move) -> bool {
    const NEIGHBORS: [(isize, isize); 8] = [
        (-1, -1),
        (0, -1),
        (1, -1),
        (-1, 0),
        (1, 0),
        (-1, 1),
        (0, 1),
        (1, 1),
    ];
    NEIGHBORS.iter().any(|&(dx, dy)| {
        mv.offset(dx, dy, snapshot.size())
            .is_some_and(|n| !snapshot.get(n).is_empty())
    })
}
