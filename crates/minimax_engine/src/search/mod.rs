//! Fixed-depth game tree search
//!
//! This module implements the engine's move selection using:
//! - Plain minimax over every legal move to a fixed depth
//! - Alpha-beta pruning with a capture-only quiescence extension at the horizon
//! - A scoped make/unmake guard so every applied move is reverted on every exit
//!   path, including cutoffs, errors, cancellation and panics
//!
//! Both searches run on one shared, mutable position borrowed from the caller.
//! Recursion depth equals ply count, so stack use is bounded by the configured
//! depth plus [`MAX_QUIESCENCE_PLY`](crate::constants::MAX_QUIESCENCE_PLY).
//!
//! ## Module Organization
//!
//! - `depth` - Validated search depth
//! - `make_unmake` - Move guard that undoes on drop
//! - `strategy` - `Strategy` trait and shared root move selection
//! - `minimax` - Full-width minimax
//! - `alphabeta` - Alpha-beta search
//! - `quiescence` - Capture search below the horizon

mod alphabeta;
mod depth;
mod make_unmake;
mod minimax;
mod quiescence;
mod strategy;

pub use alphabeta::AlphaBetaStrategy;
pub use depth::SearchDepth;
pub use minimax::MinimaxStrategy;
pub use strategy::{Strategy, StrategyKind};

use crate::constants::Score;
use crate::error::{EngineError, EngineResult};
use crate::evaluation::Evaluator;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Outcome of one search call
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport<M> {
    /// `None` only when the root position has no legal moves
    pub best_move: Option<M>,
    /// Score of `best_move` at the searched depth
    pub score: Score,
    pub depth: u32,
    /// Positions visited, quiescence nodes included
    pub nodes: u64,
    /// Sibling loops cut short by alpha-beta
    pub cutoffs: u64,
    pub elapsed: Duration,
}

/// Per-call bookkeeping threaded through the recursion
pub(crate) struct SearchContext<'a, E: ?Sized> {
    evaluator: &'a E,
    stop: Option<&'a AtomicBool>,
    nodes: u64,
    cutoffs: u64,
}

impl<'a, E: ?Sized> SearchContext<'a, E> {
    pub(crate) fn new(evaluator: &'a E, stop: Option<&'a AtomicBool>) -> Self {
        Self {
            evaluator,
            stop,
            nodes: 0,
            cutoffs: 0,
        }
    }

    /// Count a visited node and honour the stop flag
    #[inline]
    pub(crate) fn enter_node(&mut self) -> EngineResult<()> {
        self.nodes += 1;
        match self.stop {
            Some(stop) if stop.load(Ordering::Relaxed) => {
                Err(EngineError::Cancelled { nodes: self.nodes })
            }
            _ => Ok(()),
        }
    }

    #[inline]
    pub(crate) fn evaluate<B: ?Sized>(&self, board: &B) -> Score
    where
        E: Evaluator<B>,
    {
        self.evaluator.evaluate(board)
    }

    #[inline]
    pub(crate) fn record_cutoff(&mut self) {
        self.cutoffs += 1;
    }

    pub(crate) fn nodes(&self) -> u64 {
        self.nodes
    }

    pub(crate) fn cutoffs(&self) -> u64 {
        self.cutoffs
    }
}
