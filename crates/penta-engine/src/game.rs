//! One game session: the ledger, its configuration, and the engine.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use penta_core::{Ledger, Move, Mover, Snapshot, has_five_in_a_row, is_dead_board, is_win};
use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::eval::Score;
use crate::search::Searcher;
use crate::search::control::SearchControl;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Mover),
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win(mover) => write!(f, "{mover} wins"),
            Outcome::Tie => f.write_str("tie"),
        }
    }
}

/// A move chosen and committed by the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineMove {
    /// Ply after the move was committed.
    pub ply: usize,
    pub mv: Move,
    /// Minimax score on Cross's scale.
    pub score: Score,
    pub nodes: u64,
    /// Position of `mv` among the root candidates.
    pub index: usize,
}

/// A five-in-a-row game that accepts external moves and plays engine moves.
///
/// Every mutating call takes the ply the caller believes is current, so a
/// caller working from a stale view is refused instead of silently playing
/// on the wrong position.
pub struct Game {
    config: EngineConfig,
    ledger: Ledger,
    searcher: Searcher,
    stop: Arc<AtomicBool>,
}

impl Game {
    /// Start an empty game.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self::with_ledger(config, Ledger::new(config.grid_size)))
    }

    /// Continue from `snapshot`; the grid size is taken from the snapshot.
    pub fn from_snapshot(config: EngineConfig, snapshot: &Snapshot) -> Result<Self, EngineError> {
        let config = config.with_grid_size(snapshot.size());
        config.validate()?;
        let ledger = Ledger::replay(snapshot)?;
        Ok(Self::with_ledger(config, ledger))
    }

    fn with_ledger(config: EngineConfig, ledger: Ledger) -> Self {
        Self {
            config,
            ledger,
            searcher: Searcher::new(config.candidates),
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn current_ply(&self) -> usize {
        self.ledger.current_ply()
    }

    /// Shared flag that aborts a running engine move when raised.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// Commit a move from a human or any other outside player.
    ///
    /// Returns the new ply.
    pub fn apply_external_move(
        &mut self,
        ply: usize,
        x: usize,
        y: usize,
    ) -> Result<usize, EngineError> {
        self.check_ply(ply)?;
        self.ledger.commit_move(Move::new(x, y)).map_err(|err| {
            warn!(ply, x, y, %err, "external move rejected");
            EngineError::from(err)
        })
    }

    /// Search `depth` plies from `ply` and commit the best move.
    pub fn compute_and_apply_engine_move(
        &mut self,
        ply: usize,
        depth: u8,
    ) -> Result<EngineMove, EngineError> {
        self.check_ply(ply)?;
        if depth == 0 {
            return Err(EngineError::ZeroDepth);
        }
        if self.outcome().is_some() {
            return Err(EngineError::GameOver { ply });
        }

        self.stop.store(false, Ordering::Relaxed);
        let control = match self.config.move_time {
            Some(limit) => SearchControl::new_timed(Arc::clone(&self.stop), limit),
            None => SearchControl::new_infinite(Arc::clone(&self.stop)),
        };
        let result = self.searcher.search(&mut self.ledger, depth, &control)?;
        let ply = self.ledger.commit_move(result.best_move)?;

        info!(
            ply,
            mv = %result.best_move,
            score = result.score,
            nodes = result.nodes,
            "engine move"
        );
        Ok(EngineMove {
            ply,
            mv: result.best_move,
            score: result.score,
            nodes: result.nodes,
            index: result.best_index,
        })
    }

    /// Play an engine move at the current ply with the configured depth.
    pub fn play_engine_move(&mut self) -> Result<EngineMove, EngineError> {
        self.compute_and_apply_engine_move(self.current_ply(), self.config.search_depth)
    }

    /// Return `true` if the side that produced `ply` has five in a row.
    pub fn is_win(&self, ply: usize) -> Result<bool, EngineError> {
        Ok(is_win(self.ledger.committed(ply)?, ply))
    }

    /// Return `true` if no five can ever be completed from `ply`.
    pub fn is_tie(&self, ply: usize) -> Result<bool, EngineError> {
        Ok(is_dead_board(self.ledger.committed(ply)?, ply))
    }

    /// The committed position at `ply`.
    pub fn read_snapshot(&self, ply: usize) -> Result<&Snapshot, EngineError> {
        Ok(self.ledger.committed(ply)?)
    }

    /// How the latest committed position ends the game, if it does.
    ///
    /// A five for either side counts, so positions loaded from a snapshot
    /// are judged correctly too. A win takes precedence over a full board.
    pub fn outcome(&self) -> Option<Outcome> {
        let ply = self.ledger.current_ply();
        let snapshot = self.ledger.current();
        if let Some(mover) = Mover::ALL
            .into_iter()
            .find(|&mover| has_five_in_a_row(snapshot, mover))
        {
            return Some(Outcome::Win(mover));
        }
        is_dead_board(snapshot, ply).then_some(Outcome::Tie)
    }

    fn check_ply(&self, ply: usize) -> Result<(), EngineError> {
        let expected = self.ledger.current_ply();
        if ply != expected {
            return Err(EngineError::StalePly { expected, found: ply });
        }
        Ok(())
    }
}
