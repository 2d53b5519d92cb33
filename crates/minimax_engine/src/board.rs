//! # Board Abstractions - What the Search Consumes From the Rules
//!
//! The engine never generates moves or decides legality itself. Everything it
//! knows about a position comes through two traits implemented by a rules
//! collaborator:
//!
//! - [`BoardView`] is the read-only surface used by evaluators: side to move,
//!   terminal predicates and a snapshot of piece placement.
//! - [`GameBoard`] extends it with the make/unmake protocol the search drives:
//!   ordered legal moves, capture detection, `do_move` and `undo_move`.
//!
//! ## Piece Grid
//!
//! Evaluators read placement as an 8x8 grid of single-character codes, one row
//! per rank starting from rank 8. Uppercase letters are White pieces, lowercase
//! are Black, and [`EMPTY_SQUARE`] marks an empty square. The grid carries no
//! metadata, so side to move and castling rights never leak into material sums.
//!
//! ## Move Order
//!
//! `legal_moves` must return the same sequence every time for the same position.
//! Both searches break ties by keeping the first move in that order, so the order
//! is part of the engine's determinism.

use crate::constants::EMPTY_SQUARE;
use crate::error::EngineResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of piece placement, rank 8 first
pub type PieceGrid = [[char; 8]; 8];

/// Grid with no pieces on it
pub const EMPTY_GRID: PieceGrid = [[EMPTY_SQUARE; 8]; 8];

/// The two players. White maximizes, Black minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// +1 for White, -1 for Black
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Side::White => 1.0,
            Side::Black => -1.0,
        }
    }

    #[inline]
    pub fn flip(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Whether this side picks the highest score at its nodes
    #[inline]
    pub fn is_maximizing(self) -> bool {
        self == Side::White
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => f.write_str("White"),
            Side::Black => f.write_str("Black"),
        }
    }
}

/// Piece types, independent of colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Decode a grid character into kind and colour
    ///
    /// Returns `None` for empty squares and anything that is not a piece letter.
    pub fn from_code(code: char) -> Option<(PieceKind, Side)> {
        let kind = match code.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        let side = if code.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        Some((kind, side))
    }

    /// Grid character for this kind and colour
    pub fn code(self, side: Side) -> char {
        let lower = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match side {
            Side::White => lower.to_ascii_uppercase(),
            Side::Black => lower,
        }
    }
}

/// Read-only view of a position, enough to evaluate it
pub trait BoardView {
    fn side_to_move(&self) -> Side;

    /// The side to move is in check and has no legal move
    fn is_checkmate(&self) -> bool;

    /// Stalemate or any other draw the rules can see from the position alone
    fn is_draw(&self) -> bool;

    fn piece_grid(&self) -> PieceGrid;
}

/// Mutable position driven by the search through make/unmake
///
/// Implementations must uphold the protocol the search relies on:
///
/// - `do_move` either applies the move completely or returns an error and
///   leaves the position untouched.
/// - `undo_move` reverts the most recent successful `do_move`. The search calls
///   it exactly once per applied move, in LIFO order.
pub trait GameBoard: BoardView {
    type Move: Clone + fmt::Debug;

    /// Legal moves for the side to move, in a stable generation order
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Whether the destination square of `mv` is occupied before `mv` is played
    fn is_capture(&self, mv: &Self::Move) -> bool;

    /// Apply `mv`
    ///
    /// # Errors
    ///
    /// Returns [`crate::EngineError::IllegalMove`] if the board rejects the move.
    fn do_move(&mut self, mv: &Self::Move) -> EngineResult<()>;

    /// Revert the most recent applied move
    fn undo_move(&mut self);
}
