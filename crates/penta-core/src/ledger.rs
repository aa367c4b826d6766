//! Ply-indexed history of snapshots with a scratch region for search.
//!
//! Slot `p` holds the position after `p` stones. Slots `0..=current_ply` are
//! committed history and never change once written. Slots past
//! `current_ply` are scratch: the search rewrites them for every node it
//! visits, and nothing outside a search may rely on their contents.

use tracing::debug;

use crate::coord::Move;
use crate::error::LedgerError;
use crate::mover::Mover;
use crate::snapshot::Snapshot;

/// Snapshot storage for one game.
#[derive(Debug, Clone)]
pub struct Ledger {
    /// One slot per ply, `0..=max_ply`.
    slots: Vec<Snapshot>,
    /// Ply of the latest committed position.
    current_ply: usize,
}

impl Ledger {
    /// Create a ledger for a `size × size` game with an empty snapshot at ply 0.
    pub fn new(size: usize) -> Ledger {
        let empty = Snapshot::empty(size);
        Ledger {
            slots: vec![empty; size * size + 1],
            current_ply: 0,
        }
    }

    /// Rebuild a ledger whose latest committed position is `target`.
    ///
    /// Stones are replayed in row-major order, alternating `X` and `O`, which
    /// produces a legal history for any grid reachable by alternating play.
    pub fn replay(target: &Snapshot) -> Result<Ledger, LedgerError> {
        let crosses = target.count(Mover::Cross);
        let noughts = target.count(Mover::Nought);
        if crosses != noughts && crosses != noughts + 1 {
            return Err(LedgerError::InvalidPosition { crosses, noughts });
        }

        let stones_of = move |mover: Mover| {
            target
                .iter()
                .filter(move |&(_, cell)| cell.is(mover))
                .map(|(mv, _)| mv)
        };
        let mut ledger = Ledger::new(target.size());
        let mut noughts_iter = stones_of(Mover::Nought);
        for cross in stones_of(Mover::Cross) {
            ledger.commit_move(cross)?;
            if let Some(nought) = noughts_iter.next() {
                ledger.commit_move(nought)?;
            }
        }
        debug!(ply = ledger.current_ply, "ledger replayed from grid");
        Ok(ledger)
    }

    /// Side length of the grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.slots[0].size()
    }

    /// Largest reachable ply (the number of cells).
    #[inline]
    pub fn max_ply(&self) -> usize {
        self.slots.len() - 1
    }

    /// Ply of the latest committed position.
    #[inline]
    pub fn current_ply(&self) -> usize {
        self.current_ply
    }

    /// The latest committed position.
    #[inline]
    pub fn current(&self) -> &Snapshot {
        &self.slots[self.current_ply]
    }

    /// The snapshot in slot `ply`, committed or scratch.
    pub fn snapshot_at(&self, ply: usize) -> Result<&Snapshot, LedgerError> {
        self.slots.get(ply).ok_or(LedgerError::OutOfRange {
            ply,
            limit: self.max_ply(),
        })
    }

    /// A committed snapshot; scratch slots are refused.
    pub fn committed(&self, ply: usize) -> Result<&Snapshot, LedgerError> {
        if ply > self.current_ply {
            return Err(LedgerError::OutOfRange {
                ply,
                limit: self.current_ply,
            });
        }
        Ok(&self.slots[ply])
    }

    /// Validate `mv` against the current position and commit it as the next ply.
    ///
    /// Returns the new current ply.
    pub fn commit_move(&mut self, mv: Move) -> Result<usize, LedgerError> {
        let ply = self.current_ply;
        self.derive(ply, mv)?;
        self.current_ply = ply + 1;
        debug!(ply = self.current_ply, mv = %mv, "move committed");
        Ok(self.current_ply)
    }

    /// Write the position after `mv` from `parent_ply` into slot `parent_ply + 1`
    /// without moving the cursor.
    ///
    /// `parent_ply` must be at or past the current ply, so committed history
    /// is never overwritten.
    pub fn materialize_scratch(
        &mut self,
        parent_ply: usize,
        mv: Move,
    ) -> Result<&Snapshot, LedgerError> {
        if parent_ply < self.current_ply {
            return Err(LedgerError::OutOfRange {
                ply: parent_ply,
                limit: self.current_ply,
            });
        }
        self.derive(parent_ply, mv)?;
        Ok(&self.slots[parent_ply + 1])
    }

    /// Copy slot `parent` into slot `parent + 1` and place the next stone.
    fn derive(&mut self, parent: usize, mv: Move) -> Result<(), LedgerError> {
        let child = parent + 1;
        if child > self.max_ply() {
            return Err(LedgerError::OutOfRange {
                ply: child,
                limit: self.max_ply(),
            });
        }
        self.slots[parent].check_placement(mv)?;

        let (head, tail) = self.slots.split_at_mut(child);
        let slot = &mut tail[0];
        slot.clone_from(&head[parent]);
        slot.place(mv, Mover::to_move(parent))
    }
}

#[cfg(test)]
mod tests {
    use super::Ledger;
    use crate::cell::Cell;
    use crate::coord::Move;
    use crate::error::{LedgerError, Rejection};
    use crate::mover::Mover;
    use crate::snapshot::Snapshot;

    /// Cells that differ between two snapshots of the same size.
    fn diff(a: &Snapshot, b: &Snapshot) -> Vec<Move> {
        a.iter()
            .zip(b.iter())
            .filter(|((_, x), (_, y))| x != y)
            .map(|((mv, _), _)| mv)
            .collect()
    }

    #[test]
    fn starts_empty_at_ply_zero() {
        let ledger = Ledger::new(6);
        assert_eq!(ledger.current_ply(), 0);
        assert_eq!(ledger.max_ply(), 36);
        assert_eq!(ledger.current().stones(), 0);
    }

    #[test]
    fn commit_alternates_movers() {
        let mut ledger = Ledger::new(6);
        assert_eq!(ledger.commit_move(Move::new(2, 2)).unwrap(), 1);
        assert_eq!(ledger.commit_move(Move::new(3, 3)).unwrap(), 2);
        let snap = ledger.committed(2).unwrap();
        assert_eq!(snap.get(Move::new(2, 2)), Cell::Stone(Mover::Cross));
        assert_eq!(snap.get(Move::new(3, 3)), Cell::Stone(Mover::Nought));
    }

    #[test]
    fn every_ply_differs_by_one_stone() {
        let moves = [(0, 0), (5, 5), (2, 3), (3, 2), (4, 1), (1, 4), (0, 5)];
        let mut ledger = Ledger::new(6);
        for (x, y) in moves {
            ledger.commit_move(Move::new(x, y)).unwrap();
        }
        for p in 1..=ledger.current_ply() {
            let prev = ledger.committed(p - 1).unwrap();
            let next = ledger.committed(p).unwrap();
            assert_eq!(next.stones(), p);
            let changed = diff(prev, next);
            assert_eq!(changed.len(), 1);
            assert_eq!(prev.get(changed[0]), Cell::Empty);
            assert_eq!(next.get(changed[0]), Cell::Stone(Mover::to_move(p - 1)));
        }
    }

    #[test]
    fn commit_then_read_reproduces_grid_plus_stone() {
        let mut ledger = Ledger::new(6);
        ledger.commit_move(Move::new(1, 1)).unwrap();
        let before = ledger.current().clone();
        let ply = ledger.commit_move(Move::new(4, 2)).unwrap();
        let after = ledger.committed(ply).unwrap();
        assert_eq!(diff(&before, after), vec![Move::new(4, 2)]);
        assert_eq!(after.get(Move::new(4, 2)), Cell::Stone(Mover::Nought));
    }

    #[test]
    fn commit_rejects_occupied_and_off_grid() {
        let mut ledger = Ledger::new(5);
        ledger.commit_move(Move::new(2, 2)).unwrap();
        assert_eq!(
            ledger.commit_move(Move::new(2, 2)),
            Err(LedgerError::InvalidMove {
                x: 2,
                y: 2,
                reason: Rejection::Occupied
            })
        );
        assert_eq!(
            ledger.commit_move(Move::new(0, 5)),
            Err(LedgerError::InvalidMove {
                x: 0,
                y: 5,
                reason: Rejection::OffGrid
            })
        );
        assert_eq!(ledger.current_ply(), 1);
    }

    #[test]
    fn snapshot_at_bounds() {
        let ledger = Ledger::new(5);
        assert!(ledger.snapshot_at(25).is_ok());
        assert_eq!(
            ledger.snapshot_at(26).unwrap_err(),
            LedgerError::OutOfRange { ply: 26, limit: 25 }
        );
    }

    #[test]
    fn committed_refuses_scratch() {
        let ledger = Ledger::new(5);
        assert_eq!(
            ledger.committed(1).unwrap_err(),
            LedgerError::OutOfRange { ply: 1, limit: 0 }
        );
    }

    #[test]
    fn scratch_does_not_advance_cursor() {
        let mut ledger = Ledger::new(5);
        ledger.commit_move(Move::new(0, 0)).unwrap();
        let scratch = ledger.materialize_scratch(1, Move::new(1, 1)).unwrap();
        assert_eq!(scratch.stones(), 2);
        assert_eq!(scratch.get(Move::new(1, 1)), Cell::Stone(Mover::Nought));
        assert_eq!(ledger.current_ply(), 1);

        // Overwrite the same slot with a sibling.
        let scratch = ledger.materialize_scratch(1, Move::new(2, 2)).unwrap();
        assert_eq!(scratch.get(Move::new(1, 1)), Cell::Empty);
        assert_eq!(scratch.get(Move::new(2, 2)), Cell::Stone(Mover::Nought));
    }

    #[test]
    fn scratch_cannot_touch_history() {
        let mut ledger = Ledger::new(5);
        ledger.commit_move(Move::new(0, 0)).unwrap();
        ledger.commit_move(Move::new(1, 0)).unwrap();
        assert_eq!(
            ledger.materialize_scratch(0, Move::new(3, 3)).unwrap_err(),
            LedgerError::OutOfRange { ply: 0, limit: 2 }
        );
    }

    #[test]
    fn commit_after_search_discards_scratch() {
        let mut ledger = Ledger::new(5);
        ledger.materialize_scratch(0, Move::new(4, 4)).unwrap();
        ledger.commit_move(Move::new(0, 0)).unwrap();
        let snap = ledger.committed(1).unwrap();
        assert_eq!(snap.get(Move::new(4, 4)), Cell::Empty);
        assert_eq!(snap.get(Move::new(0, 0)), Cell::Stone(Mover::Cross));
    }

    #[test]
    fn full_board_cannot_grow() {
        let mut ledger = Ledger::new(5);
        for i in 0..25 {
            ledger.commit_move(Move::from_index(i, 5)).unwrap();
        }
        assert_eq!(ledger.current_ply(), 25);
        assert_eq!(
            ledger.commit_move(Move::new(0, 0)).unwrap_err(),
            LedgerError::OutOfRange { ply: 26, limit: 25 }
        );
    }

    #[test]
    fn replay_rebuilds_history() {
        let target: Snapshot = "******/******/*O*OO*/******/*XXX**/X*****".parse().unwrap();
        let ledger = Ledger::replay(&target).unwrap();
        assert_eq!(ledger.current_ply(), 7);
        assert_eq!(ledger.current(), &target);
        for p in 0..=7 {
            assert_eq!(ledger.committed(p).unwrap().stones(), p);
        }
    }

    #[test]
    fn replay_rejects_unbalanced_grid() {
        let target: Snapshot = "XX***/*****/*****/*****/*****".parse().unwrap();
        assert_eq!(
            Ledger::replay(&target).unwrap_err(),
            LedgerError::InvalidPosition {
                crosses: 2,
                noughts: 0
            }
        );
    }
}
