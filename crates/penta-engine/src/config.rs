//! Engine configuration.

use std::time::Duration;

use penta_core::{CandidatePolicy, MIN_GRID_SIZE};

use crate::error::EngineError;

/// Settings for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Side length of the square grid.
    pub grid_size: usize,
    /// Plies searched by [`Game::play_engine_move`](crate::Game::play_engine_move).
    pub search_depth: u8,
    /// Which empty cells the search expands.
    pub candidates: CandidatePolicy,
    /// Hard limit per engine move; `None` searches to completion.
    pub move_time: Option<Duration>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid_size: 6,
            search_depth: 3,
            candidates: CandidatePolicy::All,
            move_time: None,
        }
    }
}

impl EngineConfig {
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    pub fn with_search_depth(mut self, search_depth: u8) -> Self {
        self.search_depth = search_depth;
        self
    }

    pub fn with_candidates(mut self, candidates: CandidatePolicy) -> Self {
        self.candidates = candidates;
        self
    }

    pub fn with_move_time(mut self, move_time: Duration) -> Self {
        self.move_time = Some(move_time);
        self
    }

    /// Reject grids below the minimum size and a zero search depth.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.grid_size < MIN_GRID_SIZE {
            return Err(EngineError::GridTooSmall {
                size: self.grid_size,
                min: MIN_GRID_SIZE,
            });
        }
        if self.search_depth == 0 {
            return Err(EngineError::ZeroDepth);
        }
        Ok(())
    }
}
