//! Error types for grid notation and ledger operations.

/// Why a placement was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The coordinates are outside the grid.
    OffGrid,
    /// The cell already holds a stone.
    Occupied,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::OffGrid => write!(f, "off the grid"),
            Rejection::Occupied => write!(f, "cell is occupied"),
        }
    }
}

/// Errors from the ply ledger.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    /// A placement is off the grid or onto an occupied cell.
    #[error("invalid move ({x}, {y}): {reason}")]
    InvalidMove {
        /// Column of the rejected move.
        x: usize,
        /// Row of the rejected move.
        y: usize,
        /// What was wrong with it.
        reason: Rejection,
    },
    /// A ply index past what the ledger holds or allows.
    #[error("ply {ply} is out of range (limit {limit})")]
    OutOfRange {
        /// The requested ply.
        ply: usize,
        /// The largest ply accepted by the operation.
        limit: usize,
    },
    /// A grid whose stone counts cannot arise from alternating play.
    #[error("unreachable position: {crosses} crosses vs {noughts} noughts")]
    InvalidPosition {
        /// Number of `X` stones.
        crosses: usize,
        /// Number of `O` stones.
        noughts: usize,
    },
}

/// Errors that occur when parsing grid notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    /// No rows were given.
    #[error("empty grid")]
    Empty,
    /// A row's length differs from the number of rows.
    #[error("row {row} has {length} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Number of cells found.
        length: usize,
        /// Number of rows, which every row must match.
        expected: usize,
    },
    /// An unrecognized character appeared in a row.
    #[error("invalid cell character: '{character}'")]
    InvalidCell {
        /// The invalid character.
        character: char,
    },
    /// The grid is too small for five in a row.
    #[error("grid size {size} is below the minimum of 5")]
    TooSmall {
        /// Side length found.
        size: usize,
    },
}
