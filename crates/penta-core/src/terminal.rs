//! Win and tie detection.

use crate::axis::{Axis, Ray};
use crate::cell::Cell;
use crate::coord::Move;
use crate::mover::Mover;
use crate::snapshot::Snapshot;

/// Stones in a row needed to win.
pub const WIN_LENGTH: usize = 5;

/// Return `true` if `mover` has five or more consecutive stones on any axis.
///
/// Every stone of `mover` is tried, not just the last one placed, so the
/// answer is correct for grids injected from notation.
pub fn has_five_in_a_row(snapshot: &Snapshot, mover: Mover) -> bool {
    snapshot
        .iter()
        .filter(|&(_, cell)| cell.is(mover))
        .any(|(mv, _)| {
            Axis::ALL
                .iter()
                .any(|&axis| run_length(snapshot, mv, axis, mover) >= WIN_LENGTH)
        })
}

/// Return `true` if the side that produced `ply` has five in a row.
pub fn is_win(snapshot: &Snapshot, ply: usize) -> bool {
    Mover::produced(ply).is_some_and(|mover| has_five_in_a_row(snapshot, mover))
}

/// Return `true` if neither side can ever complete five in a row.
///
/// A full board (`ply_count` equal to the cell count) is dead regardless of
/// content.
pub fn is_dead_board(snapshot: &Snapshot, ply_count: usize) -> bool {
    if ply_count == snapshot.area() {
        return true;
    }
    !snapshot
        .iter()
        .filter(|&(_, cell)| cell.is_empty())
        .any(|(mv, _)| {
            Mover::ALL.iter().any(|&mover| {
                Axis::ALL
                    .iter()
                    .any(|&axis| open_span(snapshot, mv, axis, mover) >= WIN_LENGTH)
            })
        })
}

/// Length of the run of `mover` stones through `origin` along `axis`.
fn run_length(snapshot: &Snapshot, origin: Move, axis: Axis, mover: Mover) -> usize {
    1 + axis
        .directions()
        .iter()
        .map(|&step| {
            Ray::new(origin, step, snapshot.size())
                .take_while(|&(mv, _)| snapshot.get(mv).is(mover))
                .count()
        })
        .sum::<usize>()
}

/// Cells through `origin` along `axis` that `mover` could still fill, looking
/// at most four cells each way. Opponent stones end the span.
fn open_span(snapshot: &Snapshot, origin: Move, axis: Axis, mover: Mover) -> usize {
    let blocker = Cell::Stone(mover.flip());
    1 + axis
        .directions()
        .iter()
        .map(|&step| {
            Ray::new(origin, step, snapshot.size())
                .take(WIN_LENGTH - 1)
                .take_while(|&(mv, _)| snapshot.get(mv) != blocker)
                .count()
        })
        .sum::<usize>()
}
