//! Heuristic scoring of a single placed stone.
//!
//! Scores are always from Cross's point of view: positive favours `X`,
//! negative favours `O`.

pub(crate) mod lines;
pub mod weights;

use penta_core::{Move, Mover, Snapshot};

use lines::Family;
use weights::MAXIMUM_SCORE;

/// Heuristic score type.
pub type Score = f32;

/// Score the stone that `mover` placed at `mv` in `snapshot`.
///
/// The snapshot is expected to already hold the stone. Only the lines
/// through `mv` are examined. A move that completes five in a row scores
/// exactly [`MAXIMUM_SCORE`] for Cross and its negation for Nought. The
/// other families are not added on top, so a winning stone that also blocks
/// a four or extends a second four scores no more than a plain win.
pub fn score_move(snapshot: &Snapshot, mover: Mover, mv: Move) -> Score {
    let mut total = 0.0;
    for family in Family::ALL {
        match family.score(snapshot, mover, mv) {
            Ok(score) => total += score,
            Err(_) => {
                total = MAXIMUM_SCORE;
                break;
            }
        }
    }
    match mover {
        Mover::Cross => total,
        Mover::Nought => -total,
    }
}
