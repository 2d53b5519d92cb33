//! Full-width minimax
//!
//! Visits every legal move to the configured depth. Cost grows as b^d, so it
//! is practical only for shallow depths, but it is the reference the pruned
//! search must agree with.

use super::make_unmake::MoveGuard;
use super::strategy::{finish_report, improves, select_root_move, Strategy};
use super::{SearchContext, SearchDepth, SearchReport};
use crate::board::GameBoard;
use crate::constants::*;
use crate::error::EngineResult;
use crate::evaluation::{Evaluator, MaterialEvaluator};
use instant::Instant;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Plain minimax to a fixed depth
#[derive(Debug, Clone)]
pub struct MinimaxStrategy<E = MaterialEvaluator> {
    name: String,
    depth: SearchDepth,
    evaluator: E,
    stop: Option<Arc<AtomicBool>>,
}

impl<E> MinimaxStrategy<E> {
    pub fn new(depth: SearchDepth, evaluator: E) -> Self {
        Self {
            name: format!("Minimax(depth={})", depth),
            depth,
            evaluator,
            stop: None,
        }
    }

    /// Abort the search with [`crate::EngineError::Cancelled`] once `stop` is set
    pub fn with_stop_flag(mut self, stop: Arc<AtomicBool>) -> Self {
        self.stop = Some(stop);
        self
    }

    pub fn depth(&self) -> SearchDepth {
        self.depth
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }
}

impl Default for MinimaxStrategy {
    fn default() -> Self {
        Self::new(SearchDepth::default(), MaterialEvaluator::default())
    }
}

impl<B, E> Strategy<B> for MinimaxStrategy<E>
where
    B: GameBoard,
    E: Evaluator<B>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn search(&self, board: &mut B) -> EngineResult<SearchReport<B::Move>> {
        let started = Instant::now();
        let mut ctx = SearchContext::new(&self.evaluator, self.stop.as_deref());
        let remaining = self.depth.get() - 1;

        let outcome = select_root_move(&mut ctx, board, |ctx, child| {
            minimax(ctx, child, remaining)
        })?;

        Ok(finish_report(
            &self.name,
            self.depth,
            &ctx,
            outcome,
            started.elapsed(),
        ))
    }
}

/// Minimax value of `board` searched `depth` plies deep
///
/// Positions without legal moves are scored by the evaluator, which knows
/// about mate and stalemate.
pub(crate) fn minimax<B, E>(
    ctx: &mut SearchContext<'_, E>,
    board: &mut B,
    depth: u32,
) -> EngineResult<Score>
where
    B: GameBoard,
    E: Evaluator<B> + ?Sized,
{
    ctx.enter_node()?;
    if depth == 0 {
        return Ok(ctx.evaluate(board));
    }

    let moves = board.legal_moves();
    if moves.is_empty() {
        return Ok(ctx.evaluate(board));
    }

    let maximizing = board.side_to_move().is_maximizing();
    let mut best = if maximizing {
        -SCORE_INFINITY
    } else {
        SCORE_INFINITY
    };

    for mv in &moves {
        let score = {
            let mut child = MoveGuard::apply(board, mv)?;
            minimax(ctx, &mut *child, depth - 1)?
        };
        if improves(maximizing, score, best) {
            best = score;
        }
    }

    Ok(best)
}
