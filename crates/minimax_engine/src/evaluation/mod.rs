//! Position evaluation
//!
//! An [`Evaluator`] turns a position into a [`Score`] from White's point of
//! view. Evaluators only read the position, so one instance can be shared by
//! any number of searches.
//!
//! ## Module Organization
//!
//! - `weights` - Immutable piece weight table
//! - `material` - Material summation with terminal-state scoring

mod material;
mod weights;

pub use material::MaterialEvaluator;
pub use weights::{PieceWeights, WeightTable};

use crate::constants::Score;
use std::sync::Arc;

/// Static scoring of a position, positive favours White
pub trait Evaluator<B: ?Sized> {
    fn evaluate(&self, board: &B) -> Score;
}

impl<B: ?Sized, E: Evaluator<B> + ?Sized> Evaluator<B> for &E {
    fn evaluate(&self, board: &B) -> Score {
        (**self).evaluate(board)
    }
}

impl<B: ?Sized, E: Evaluator<B> + ?Sized> Evaluator<B> for Box<E> {
    fn evaluate(&self, board: &B) -> Score {
        (**self).evaluate(board)
    }
}

impl<B: ?Sized, E: Evaluator<B> + ?Sized> Evaluator<B> for Arc<E> {
    fn evaluate(&self, board: &B) -> Score {
        (**self).evaluate(board)
    }
}
