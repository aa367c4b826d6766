//! Fixed-depth move search.

pub mod control;
pub(crate) mod minimax;

use penta_core::{CandidatePolicy, Ledger, Move};
use tracing::debug;

use crate::error::SearchError;
use crate::eval::Score;
use control::SearchControl;
use minimax::{SearchContext, expand};

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Position of the chosen move among the root candidates.
    pub best_index: usize,
    /// The chosen move.
    pub best_move: Move,
    /// Minimax score of the chosen move, on Cross's scale.
    pub score: Score,
    /// Nodes visited below the root.
    pub nodes: u64,
    /// Depth searched.
    pub depth: u8,
}

/// Full-width minimax searcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct Searcher {
    policy: CandidatePolicy,
}

impl Searcher {
    /// Create a searcher that expands candidates chosen by `policy`.
    pub fn new(policy: CandidatePolicy) -> Self {
        Self { policy }
    }

    /// Search `depth` plies from the ledger's current position.
    ///
    /// Only scratch slots are written; the committed history and the cursor
    /// are untouched whether the search succeeds or not.
    pub fn search(
        &self,
        ledger: &mut Ledger,
        depth: u8,
        control: &SearchControl,
    ) -> Result<SearchResult, SearchError> {
        if depth == 0 {
            return Err(SearchError::ZeroDepth);
        }

        let root_ply = ledger.current_ply();
        let candidates = self.policy.generate(ledger.current());
        if candidates.is_empty() {
            return Err(SearchError::Exhausted { ply: root_ply });
        }

        let mut ctx = SearchContext {
            ledger,
            policy: self.policy,
            control,
            nodes: 0,
            root_ply,
        };
        let (best_index, score) = expand(&mut ctx, root_ply, depth, &candidates)?;
        let best_move = candidates[best_index];

        debug!(
            ply = root_ply,
            depth,
            mv = %best_move,
            score,
            nodes = ctx.nodes,
            elapsed_ms = control.elapsed().as_millis() as u64,
            "search finished"
        );

        Ok(SearchResult {
            best_index,
            best_move,
            score,
            nodes: ctx.nodes,
            depth,
        })
    }
}
