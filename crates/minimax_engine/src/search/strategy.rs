//! Strategy interface and root move selection
//!
//! Both search variants choose the root move the same way. Every legal move
//! is tried in generation order and scored by the variant's recursion. The
//! strictly best score wins, so ties keep the earliest move.

use super::make_unmake::MoveGuard;
use super::{AlphaBetaStrategy, MinimaxStrategy, SearchContext, SearchDepth, SearchReport};
use crate::board::GameBoard;
use crate::constants::*;
use crate::error::{EngineError, EngineResult};
use crate::evaluation::Evaluator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

/// Something that picks a move for the side to move
pub trait Strategy<B: GameBoard> {
    /// Human readable label, e.g. `Minimax(depth=4)`
    fn name(&self) -> &str;

    /// Search the position and report the chosen move with statistics
    ///
    /// The board is borrowed mutably for the duration of the call and is
    /// structurally identical to its initial state when the call returns,
    /// whether it returns `Ok` or `Err`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::IllegalMove`] if the board rejects one of its own
    /// legal moves, or [`EngineError::Cancelled`] if the stop flag was raised.
    fn search(&self, board: &mut B) -> EngineResult<SearchReport<B::Move>>;

    /// Best move for the side to move
    ///
    /// Returns `Ok(None)` when the position has no legal moves. Callers should
    /// check for mate or draw before asking.
    fn find_best_move(&self, board: &mut B) -> EngineResult<Option<B::Move>> {
        self.search(board).map(|report| report.best_move)
    }
}

impl<B: GameBoard, S: Strategy<B> + ?Sized> Strategy<B> for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn search(&self, board: &mut B) -> EngineResult<SearchReport<B::Move>> {
        (**self).search(board)
    }

    fn find_best_move(&self, board: &mut B) -> EngineResult<Option<B::Move>> {
        (**self).find_best_move(board)
    }
}

/// Closed set of available strategies, selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// Full-width minimax
    Minimax,
    /// Alpha-beta with quiescence
    #[default]
    AlphaBeta,
}

impl StrategyKind {
    /// Build a boxed strategy of this kind
    pub fn build<B, E>(self, depth: SearchDepth, evaluator: E) -> Box<dyn Strategy<B>>
    where
        B: GameBoard + 'static,
        E: Evaluator<B> + 'static,
    {
        match self {
            StrategyKind::Minimax => Box::new(MinimaxStrategy::new(depth, evaluator)),
            StrategyKind::AlphaBeta => Box::new(AlphaBetaStrategy::new(depth, evaluator)),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Minimax => f.write_str("minimax"),
            StrategyKind::AlphaBeta => f.write_str("alpha-beta"),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" | "simple" => Ok(StrategyKind::Minimax),
            "alpha-beta" | "alphabeta" | "advanced" => Ok(StrategyKind::AlphaBeta),
            other => Err(EngineError::InvalidConfiguration {
                message: format!("unknown strategy '{}'", other),
            }),
        }
    }
}

#[inline]
pub(crate) fn improves(maximizing: bool, candidate: Score, best: Score) -> bool {
    if maximizing {
        candidate > best
    } else {
        candidate < best
    }
}

/// Try every root move and keep the strictly best one
///
/// `score_child` scores the position reached after each root move. On a
/// position with no legal moves the evaluator's score is reported with no move.
pub(crate) fn select_root_move<B, E, F>(
    ctx: &mut SearchContext<'_, E>,
    board: &mut B,
    mut score_child: F,
) -> EngineResult<(Option<B::Move>, Score)>
where
    B: GameBoard,
    E: Evaluator<B> + ?Sized,
    F: FnMut(&mut SearchContext<'_, E>, &mut B) -> EngineResult<Score>,
{
    ctx.enter_node()?;
    let moves = board.legal_moves();
    if moves.is_empty() {
        return Ok((None, ctx.evaluate(board)));
    }

    let maximizing = board.side_to_move().is_maximizing();
    let mut best_move = None;
    let mut best_score = if maximizing {
        -SCORE_INFINITY
    } else {
        SCORE_INFINITY
    };

    for mv in moves {
        let score = {
            let mut child = MoveGuard::apply(board, &mv)?;
            score_child(&mut *ctx, &mut *child)?
        };
        if best_move.is_none() || improves(maximizing, score, best_score) {
            best_score = score;
            best_move = Some(mv);
        }
    }

    Ok((best_move, best_score))
}

pub(crate) fn finish_report<M: fmt::Debug, E: ?Sized>(
    name: &str,
    depth: SearchDepth,
    ctx: &SearchContext<'_, E>,
    (best_move, score): (Option<M>, Score),
    elapsed: Duration,
) -> SearchReport<M> {
    debug!(
        strategy = name,
        depth = depth.get(),
        nodes = ctx.nodes(),
        cutoffs = ctx.cutoffs(),
        score,
        best_move = ?best_move,
        elapsed_ms = elapsed.as_millis() as u64,
        "Search finished"
    );
    SearchReport {
        best_move,
        score,
        depth: depth.get(),
        nodes: ctx.nodes(),
        cutoffs: ctx.cutoffs(),
        elapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Side;
    use crate::test_support::{LeafValue, TreeBoard};

    #[test]
    fn test_strategy_kind_parses_aliases() {
        assert_eq!("minimax".parse::<StrategyKind>().unwrap(), StrategyKind::Minimax);
        assert_eq!("Simple".parse::<StrategyKind>().unwrap(), StrategyKind::Minimax);
        assert_eq!("alpha-beta".parse::<StrategyKind>().unwrap(), StrategyKind::AlphaBeta);
        assert_eq!("advanced".parse::<StrategyKind>().unwrap(), StrategyKind::AlphaBeta);
        assert!("mcts".parse::<StrategyKind>().is_err());
    }

    #[test]
    fn test_strategy_kind_display_parses_back() {
        for kind in [StrategyKind::Minimax, StrategyKind::AlphaBeta] {
            assert_eq!(kind.to_string().parse::<StrategyKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_built_strategies_are_interchangeable() {
        let mut tree = TreeBoard::new(Side::White);
        tree.add(0, 1.0);
        let best = tree.add(0, 4.0);
        tree.add(0, 2.0);

        for kind in [StrategyKind::Minimax, StrategyKind::AlphaBeta] {
            let strategy: Box<dyn Strategy<TreeBoard>> = kind.build(SearchDepth::new(1), LeafValue);
            assert_eq!(strategy.find_best_move(&mut tree).unwrap(), Some(best), "{}", kind);
        }
    }

    #[test]
    fn test_root_selection_keeps_first_of_equal_moves() {
        let mut tree = TreeBoard::new(Side::Black);
        let first = tree.add(0, -3.0);
        tree.add(0, -3.0);
        tree.add(0, 5.0);

        let evaluator = LeafValue;
        let mut ctx = SearchContext::new(&evaluator, None);
        let (mv, score) =
            select_root_move(&mut ctx, &mut tree, |ctx, child| Ok(ctx.evaluate(child))).unwrap();

        assert_eq!(mv, Some(first));
        assert_eq!(score, -3.0);
    }

    #[test]
    fn test_root_without_moves_reports_evaluation() {
        let mut tree = TreeBoard::new(Side::White);
        tree.set_value(0, 7.5);

        let evaluator = LeafValue;
        let mut ctx = SearchContext::new(&evaluator, None);
        let (mv, score) =
            select_root_move(&mut ctx, &mut tree, |_, _| unreachable!("no children")).unwrap();

        assert_eq!(mv, None);
        assert_eq!(score, 7.5);
    }
}
