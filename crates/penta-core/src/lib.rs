//! Core five-in-a-row types: grid snapshots, the ply ledger, candidate
//! generation, and win/tie detection.

mod axis;
mod cell;
mod coord;
mod error;
mod ledger;
mod movegen;
mod mover;
mod notation;
mod snapshot;
mod terminal;

pub use axis::{Axis, Ray};
pub use cell::Cell;
pub use coord::Move;
pub use error::{LedgerError, NotationError, Rejection};
pub use ledger::Ledger;
pub use movegen::{CandidatePolicy, MoveList, generate_candidates};
pub use mover::Mover;
pub use snapshot::{MIN_GRID_SIZE, PrettySnapshot, Snapshot};
pub use terminal::{WIN_LENGTH, has_five_in_a_row, is_dead_board, is_win};
