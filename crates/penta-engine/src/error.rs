//! Engine error types.

use penta_core::LedgerError;

/// Errors that end a search without a result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The root position has no empty cell to play.
    #[error("no candidate moves at ply {ply}")]
    Exhausted {
        /// Ply of the root position.
        ply: usize,
    },

    /// The stop flag was raised or the time limit ran out.
    #[error("search aborted after {nodes} nodes")]
    Aborted {
        /// Nodes visited before the abort.
        nodes: u64,
    },

    /// A search must look at least one ply ahead.
    #[error("search depth must be at least 1")]
    ZeroDepth,

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Errors surfaced by a [`Game`](crate::Game).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The configured grid is smaller than the game allows.
    #[error("grid size {size} is below the minimum of {min}")]
    GridTooSmall {
        /// Requested side length.
        size: usize,
        /// Smallest supported side length.
        min: usize,
    },

    /// A requested or configured search depth of zero.
    #[error("search depth must be at least 1")]
    ZeroDepth,

    /// The caller's view of the game is behind or ahead of the ledger.
    #[error("stale ply: game is at ply {expected}, caller passed {found}")]
    StalePly {
        /// Current ply of the game.
        expected: usize,
        /// Ply the caller passed.
        found: usize,
    },

    /// The position is already won or tied.
    #[error("game is over at ply {ply}")]
    GameOver {
        /// Ply of the final position.
        ply: usize,
    },

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Search(#[from] SearchError),
}
