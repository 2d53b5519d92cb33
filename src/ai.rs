//! Computer player
//!
//! [`ChessAi`] holds one strategy and forwards move requests to it. The
//! strategy can be swapped between moves, e.g. to change difficulty mid-game.

use crate::config::EngineConfig;
use anyhow::Result;
use chess_rules::ShakmatyBoard;
use minimax_engine::{EngineResult, GameBoard, MinimaxStrategy, SearchReport, Strategy};
use tracing::info;

/// Engine opponent with a replaceable search strategy
pub struct ChessAi<B: GameBoard = ShakmatyBoard> {
    strategy: Box<dyn Strategy<B>>,
}

impl<B: GameBoard + 'static> Default for ChessAi<B> {
    /// Plain minimax at the default depth
    fn default() -> Self {
        Self::new(Box::new(MinimaxStrategy::default()))
    }
}

impl<B: GameBoard> ChessAi<B> {
    pub fn new(strategy: Box<dyn Strategy<B>>) -> Self {
        Self { strategy }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn Strategy<B>>) {
        info!(from = self.strategy.name(), to = strategy.name(), "Switching strategy");
        self.strategy = strategy;
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// Best move for the side to move, `None` if there is none
    ///
    /// # Errors
    ///
    /// Propagates search failures from the strategy.
    pub fn find_best_move(&self, board: &mut B) -> EngineResult<Option<B::Move>> {
        self.strategy.find_best_move(board)
    }

    /// Full search report for the side to move
    pub fn search(&self, board: &mut B) -> EngineResult<SearchReport<B::Move>> {
        self.strategy.search(board)
    }
}

impl ChessAi<ShakmatyBoard> {
    /// Engine built from configuration
    ///
    /// # Errors
    ///
    /// Fails if the configured weights are invalid.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let ai = Self::new(config.build_strategy()?);
        info!(strategy = ai.strategy_name(), "Engine ready");
        Ok(ai)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minimax_engine::{AlphaBetaStrategy, MaterialEvaluator, SearchDepth, StrategyKind};

    #[test]
    fn test_default_ai_uses_minimax() {
        let ai: ChessAi = ChessAi::default();
        assert_eq!(ai.strategy_name(), "Minimax(depth=4)");
    }

    #[test]
    fn test_set_strategy_replaces_search() {
        let mut ai: ChessAi = ChessAi::default();
        ai.set_strategy(Box::new(AlphaBetaStrategy::new(
            SearchDepth::new(2),
            MaterialEvaluator::default(),
        )));
        assert_eq!(ai.strategy_name(), "AlphaBeta(depth=2)");
    }

    #[test]
    fn test_from_config_finds_a_move_in_start_position() {
        let config = EngineConfig {
            depth: 2,
            strategy: StrategyKind::AlphaBeta,
            ..Default::default()
        };
        let ai = ChessAi::from_config(&config).unwrap();
        let mut board = ShakmatyBoard::new();

        let mv = ai.find_best_move(&mut board).unwrap();
        assert!(mv.is_some());
        assert_eq!(board.history_len(), 0, "Search must leave the board as it was");
    }
}
