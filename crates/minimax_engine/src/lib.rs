//! Chess move search over a pluggable board and evaluator
//!
//! The crate knows nothing about chess rules. A position is anything that
//! implements [`GameBoard`]: it lists legal moves, applies and reverts them,
//! and exposes a piece grid for evaluation. Searches borrow one position
//! mutably and leave it exactly as they found it.
//!
//! ## Module Organization
//!
//! - `board` - Board traits, sides and piece codes
//! - `constants` - Score scale, piece weights and search limits
//! - `error` - Error types
//! - `evaluation` - `Evaluator` trait and the material evaluator
//! - `search` - `Strategy` trait, minimax and alpha-beta with quiescence
//!
//! ## Example
//!
//! ```ignore
//! use minimax_engine::{AlphaBetaStrategy, SearchDepth, MaterialEvaluator, Strategy};
//!
//! let strategy = AlphaBetaStrategy::new(SearchDepth::new(4), MaterialEvaluator::default());
//! let best = strategy.find_best_move(&mut board)?;
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod search;

#[cfg(test)]
mod test_support;

pub use board::{BoardView, GameBoard, PieceGrid, PieceKind, Side, EMPTY_GRID};
pub use constants::{
    Score, DEFAULT_SEARCH_DEPTH, DRAW_SCORE, MATE_SCORE, MAX_QUIESCENCE_PLY, SCORE_INFINITY,
};
pub use error::{EngineError, EngineResult};
pub use evaluation::{Evaluator, MaterialEvaluator, PieceWeights, WeightTable};
pub use search::{
    AlphaBetaStrategy, MinimaxStrategy, SearchDepth, SearchReport, Strategy, StrategyKind,
};
