//! Material evaluation
//!
//! Sums the signed weight of every piece on the board. Terminal positions are
//! scored before material is looked at, so a mating line is never judged by
//! what is left on the board after the mate.

use super::weights::WeightTable;
use super::Evaluator;
use crate::board::BoardView;
use crate::constants::*;
use std::sync::Arc;

/// Evaluator that counts material and recognises mate and draw
#[derive(Debug, Clone, Default)]
pub struct MaterialEvaluator {
    weights: Arc<WeightTable>,
}

impl MaterialEvaluator {
    pub fn new(weights: Arc<WeightTable>) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    /// Sum of piece weights on the board, ignoring terminal state
    pub fn material<B: BoardView + ?Sized>(&self, board: &B) -> Score {
        board
            .piece_grid()
            .iter()
            .flatten()
            .filter_map(|&code| self.weights.weight_of_code(code))
            .sum()
    }
}

impl<B: BoardView + ?Sized> Evaluator<B> for MaterialEvaluator {
    fn evaluate(&self, board: &B) -> Score {
        if board.is_checkmate() {
            // The side to move is the one that got mated
            return board.side_to_move().flip().sign() * MATE_SCORE;
        }
        if board.is_draw() {
            return DRAW_SCORE;
        }
        self.material(board)
    }
}
