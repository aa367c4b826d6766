//! Full-width minimax over the ledger's scratch slots.

use penta_core::{CandidatePolicy, Ledger, Move, MoveList, Mover, is_win};
use tracing::trace;

use crate::error::SearchError;
use crate::eval::{Score, score_move};
use crate::search::control::SearchControl;

/// Mutable state threaded through one search.
pub(crate) struct SearchContext<'a> {
    pub ledger: &'a mut Ledger,
    pub policy: CandidatePolicy,
    pub control: &'a SearchControl,
    pub nodes: u64,
    pub root_ply: usize,
}

/// Score the position in slot `ply`, produced by `last`, with `depth` plies left.
///
/// `ply` is always past the root, so the producing mover is known.
pub(crate) fn minimax(
    ctx: &mut SearchContext<'_>,
    ply: usize,
    depth: u8,
    last: Move,
) -> Result<Score, SearchError> {
    ctx.nodes += 1;
    if ctx.control.should_stop(ctx.nodes) {
        return Err(SearchError::Aborted { nodes: ctx.nodes });
    }

    let snapshot = ctx.ledger.snapshot_at(ply)?;
    let producer = Mover::to_move(ply).flip();
    if depth == 0 || is_win(snapshot, ply) {
        return Ok(score_move(snapshot, producer, last));
    }

    let candidates = ctx.policy.generate(snapshot);
    if candidates.is_empty() {
        // Full board below the root: nothing left to look at.
        return Ok(score_move(snapshot, producer, last));
    }

    let (_, score) = expand(ctx, ply, depth, &candidates)?;
    Ok(score)
}

/// Try every candidate from slot `ply` and return the best child's index and score.
///
/// Cross keeps a child only if it scores strictly higher, Nought only if it
/// scores strictly lower, so ties go to the earliest candidate.
pub(crate) fn expand(
    ctx: &mut SearchContext<'_>,
    ply: usize,
    depth: u8,
    candidates: &MoveList,
) -> Result<(usize, Score), SearchError> {
    let maximizing = Mover::to_move(ply).is_maximizing();
    let mut best: Option<(usize, Score)> = None;

    for (index, &mv) in candidates.into_iter().enumerate() {
        ctx.ledger.materialize_scratch(ply, mv)?;
        let score = minimax(ctx, ply + 1, depth - 1, mv)?;

        if ply == ctx.root_ply {
            trace!(index, mv = %mv, score, "root child");
        }

        let improves = match best {
            None => true,
            Some((_, held)) if maximizing => score > held,
            Some((_, held)) => score < held,
        };
        if improves {
            best = Some((index, score));
        }
    }

    best.ok_or(SearchError::Exhausted { ply })
}
