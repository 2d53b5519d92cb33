//! Alpha-beta search
//!
//! Same tree shape as minimax, carrying the window `[alpha, beta]`:
//!
//! - `alpha` is the best score White can already force on the current path
//! - `beta` is the best score Black can already force
//!
//! Once `alpha >= beta` the remaining siblings cannot change the decision above
//! and are skipped. At the horizon the static evaluation is replaced by a
//! quiescence search so that positions in the middle of an exchange are not
//! scored as if the exchange were over.
//!
//! Every root move is searched with a full window, so the score attached to
//! each root move is its exact value and root selection matches minimax move
//! for move.

use super::make_unmake::MoveGuard;
use super::quiescence::quiescence;
use super::strategy::{finish_report, select_root_move, Strategy};
use super::{SearchContext, SearchDepth, SearchReport};
use crate::board::GameBoard;
use crate::constants::*;
use crate::error::EngineResult;
use crate::evaluation::{Evaluator, MaterialEvaluator};
use instant::Instant;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Alpha-beta to a fixed depth, extended by quiescence search
#[derive(Debug, Clone)]
pub struct AlphaBetaStrategy<E = MaterialEvaluator> {
    name: String,
    depth: SearchDepth,
    evaluator: E,
    quiescence: bool,
    stop: Option<Arc<AtomicBool>>,
}

impl<E> AlphaBetaStrategy<E> {
    pub fn new(depth: SearchDepth, evaluator: E) -> Self {
        Self {
            name: format!("AlphaBeta(depth={})", depth),
            depth,
            evaluator,
            quiescence: true,
            stop: None,
        }
    }

    /// Score horizon nodes statically instead of running quiescence
    ///
    /// The result then equals plain minimax at the same depth.
    pub fn without_quiescence(mut self) -> Self {
        self.quiescence = false;
        self.name = format!("AlphaBeta(depth={}, no quiescence)", self.depth);
        self
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

impl Default for AlphaBetaStrategy {
    fn default() -> Self {
        Self::new(SearchDepth::default(), MaterialEvaluator::default())
    }
}

impl<B, E> Strategy<B> for AlphaBetaStrategy<E>
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
        let quiesce = self.quiescence;

        let outcome = select_root_move(&mut ctx, board, |ctx, child| {
            alphabeta(ctx, child, remaining, -SCORE_INFINITY, SCORE_INFINITY, quiesce)
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

/// Alpha-beta value of `board` searched `depth` plies deep
pub(crate) fn alphabeta<B, E>(
    ctx: &mut SearchContext<'_, E>,
    board: &mut B,
    depth: u32,
    mut alpha: Score,
    mut beta: Score,
    quiesce: bool,
) -> EngineResult<Score>
where
    B: GameBoard,
    E: Evaluator<B> + ?Sized,
{
    if depth == 0 && quiesce {
        return quiescence(ctx, board, alpha, beta, 0);
    }

    ctx.enter_node()?;
    if depth == 0 {
        return Ok(ctx.evaluate(board));
    }

    let moves = board.legal_moves();
    if moves.is_empty() {
        return Ok(ctx.evaluate(board));
    }

    if board.side_to_move().is_maximizing() {
        let mut best = -SCORE_INFINITY;
        for mv in &moves {
            let score = {
                let mut child = MoveGuard::apply(board, mv)?;
                alphabeta(ctx, &mut *child, depth - 1, alpha, beta, quiesce)?
            };
            best = best.max(score);
            alpha = alpha.max(best);
            if alpha >= beta {
                ctx.record_cutoff();
                break;
            }
        }
        Ok(best)
    } else {
        let mut best = SCORE_INFINITY;
        for mv in &moves {
            let score = {
                let mut child = MoveGuard::apply(board, mv)?;
                alphabeta(ctx, &mut *child, depth - 1, alpha, beta, quiesce)?
            };
            best = best.min(score);
            beta = beta.min(best);
            if beta <= alpha {
                ctx.record_cutoff();
                break;
            }
        }
        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Side;
    use crate::error::EngineError;
    use crate::search::MinimaxStrategy;
    use crate::test_support::{LeafValue, TreeBoard};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_prunes_refuted_sibling() {
        // White: first move is worth 3. Under the second move Black's first reply
        // already scores 1, so Black's remaining replies need not be looked at.
        let mut tree = TreeBoard::new(Side::White);
        let a = tree.add(0, 0.0);
        tree.add(a, 3.0);
        tree.add(a, 5.0);
        let b = tree.add(0, 0.0);
        tree.add(b, 1.0);
        tree.add(b, 8.0);
        tree.add(b, 9.0);

        let evaluator = LeafValue;
        let mut ctx = SearchContext::new(&evaluator, None);
        let score = alphabeta(&mut ctx, &mut tree, 2, -SCORE_INFINITY, SCORE_INFINITY, false)
            .unwrap();

        assert_eq!(score, 3.0);
        assert_eq!(ctx.cutoffs(), 1);
        assert_eq!(ctx.nodes(), 6, "Two of Black's replies under b are pruned");
        assert!(tree.path().is_empty());
    }

    #[test]
    fn test_matches_minimax_on_random_trees() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for round in 0..50 {
            let root_side = if round % 2 == 0 { Side::White } else { Side::Black };
            let mut tree = TreeBoard::random(&mut rng, root_side, 4, 1..=4);

            let plain = MinimaxStrategy::new(SearchDepth::new(4), LeafValue)
                .search(&mut tree)
                .unwrap();
            let pruned = AlphaBetaStrategy::new(SearchDepth::new(4), LeafValue)
                .without_quiescence()
                .search(&mut tree)
                .unwrap();

            assert_eq!(pruned.score, plain.score, "round {}", round);
            assert_eq!(pruned.best_move, plain.best_move, "round {}", round);
            assert!(pruned.nodes <= plain.nodes, "round {}", round);
            assert!(tree.path().is_empty());
        }
    }

    #[test]
    fn test_cutoff_break_restores_board() {
        let mut tree = TreeBoard::new(Side::Black);
        let a = tree.add(0, 0.0);
        let a1 = tree.add(a, 0.0);
        tree.add(a1, 2.0);
        let a2 = tree.add(a, 0.0);
        tree.add(a2, 1.0);
        tree.add(a2, 7.0);
        tree.add(0, 5.0);

        let strategy = AlphaBetaStrategy::new(SearchDepth::new(3), LeafValue).without_quiescence();
        let report = strategy.search(&mut tree).unwrap();

        assert_eq!(report.best_move, Some(a));
        assert_eq!(report.score, 2.0);
        assert_eq!(report.cutoffs, 1, "Black's 7.0 reply under a2 is never needed");
        assert_eq!(report.nodes, 7);
        assert!(tree.path().is_empty());
        assert_eq!(tree.applied, tree.undone);
    }

    #[test]
    fn test_rejected_move_inside_tree_restores_board() {
        let mut tree = TreeBoard::new(Side::White);
        let a = tree.add(0, 0.0);
        let deep = tree.add(a, 1.0);
        tree.fail_on = Some(deep);

        let err = AlphaBetaStrategy::new(SearchDepth::new(3), LeafValue)
            .search(&mut tree)
            .unwrap_err();

        assert!(matches!(err, EngineError::IllegalMove { .. }));
        assert!(tree.path().is_empty());
        assert_eq!(tree.applied, tree.undone);
    }

    #[test]
    fn test_default_strategy_uses_default_depth() {
        let strategy = AlphaBetaStrategy::default();
        assert_eq!(strategy.depth().get(), DEFAULT_SEARCH_DEPTH);
        assert_eq!(
            Strategy::<TreeBoard>::name(&AlphaBetaStrategy::new(SearchDepth::new(2), LeafValue)),
            "AlphaBeta(depth=2)"
        );
    }
}
