//! Move making and unmaking for search
//!
//! [`MoveGuard`] owns the mutable borrow of the board for as long as a move is
//! applied. Dropping it undoes the move, so a `break`, an early `return`, a `?`
//! or a panic unwinding through a search frame all leave the board as it was.

use crate::board::GameBoard;
use crate::error::EngineResult;
use std::ops::{Deref, DerefMut};

/// A move applied to the board, reverted when the guard goes out of scope
pub(crate) struct MoveGuard<'a, B: GameBoard> {
    board: &'a mut B,
}

impl<'a, B: GameBoard> MoveGuard<'a, B> {
    /// Apply `mv` and hand back the guard that will revert it
    ///
    /// # Errors
    ///
    /// Propagates the board's rejection. Nothing was applied in that case, so
    /// there is nothing to revert.
    pub(crate) fn apply(board: &'a mut B, mv: &B::Move) -> EngineResult<Self> {
        board.do_move(mv)?;
        Ok(Self { board })
    }
}

impl<B: GameBoard> Deref for MoveGuard<'_, B> {
    type Target = B;

    fn deref(&self) -> &B {
        self.board
    }
}

impl<B: GameBoard> DerefMut for MoveGuard<'_, B> {
    fn deref_mut(&mut self) -> &mut B {
        self.board
    }
}

impl<B: GameBoard> Drop for MoveGuard<'_, B> {
    fn drop(&mut self) {
        self.board.undo_move();
    }
}
