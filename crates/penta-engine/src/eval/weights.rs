//! Heuristic weights, ordered from most to least important.
//!
//! The search compares raw sums of these values, so the exact numbers matter,
//! not just their ranking.

use super::Score;

/// A move that completes five in a row.
pub const MAXIMUM_SCORE: Score = 1_000_000_000.0;

/// Blocking an opponent line that has reached four stones.
pub const PROTECTION_SCORE: Score = 1_000_000.0;

/// Extending one's own run to exactly four.
pub const FOUR_IN_A_ROW_SCORE: Score = 100_000.0;

/// Capping an opponent three that is still open at the far end.
pub const PREVENT_FOUR_IN_A_ROW_SCORE: Score = 1_000.0;

/// Per own stone in an unbroken run from the placed stone.
pub const FRIENDLY_NEIGHBOR_SCORE: Score = 2.0;

/// A line with room for fewer than five own stones.
pub const UNABLE_TO_BUILD_FIVE_SCORE: Score = -2.0;

/// A line with room for five own stones.
pub const ABLE_TO_BUILD_FIVE_SCORE: Score = 1.0;

/// Per opponent stone in an unbroken run from the placed stone.
pub const HOSTILE_NEIGHBOR_SCORE: Score = 0.5;

/// Runs that end on the border, and stones placed on the border.
pub const END_OF_GRID_SCORE: Score = -0.5;
