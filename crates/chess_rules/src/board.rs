//! # ShakmatyBoard - Standard Chess for the Search Engine
//!
//! Wraps a [`shakmaty::Chess`] position and implements the engine's
//! [`GameBoard`] protocol on top of it.
//!
//! ## Make/Unmake
//!
//! shakmaty positions are small copyable values without an undo operation, so
//! `do_move` pushes the position it is about to replace onto a history stack
//! and `undo_move` pops it back. Reverting is exact: every field of the
//! position (castling rights, en passant square, clocks) comes back with it.
//!
//! ## Captures
//!
//! A move counts as a capture when its destination square holds a piece before
//! the move. shakmaty encodes castling as the king moving onto its own rook, so
//! castling is excluded explicitly. En passant lands on an empty square and is
//! therefore not a capture under this rule.

use crate::error::{RulesError, RulesResult};
use minimax_engine::{BoardView, EngineError, EngineResult, GameBoard, PieceGrid, Side, EMPTY_GRID};
use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, File, Move, Position, Rank, Square};
use tracing::warn;

/// Standard chess position with a make/unmake history
#[derive(Debug, Clone, Default)]
pub struct ShakmatyBoard {
    position: Chess,
    history: Vec<Chess>,
}

impl ShakmatyBoard {
    /// Standard starting position
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a position from FEN
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::InvalidFen`] if the text does not parse, or
    /// [`RulesError::IllegalPosition`] if it describes an impossible position.
    pub fn from_fen(fen: &str) -> RulesResult<Self> {
        let parsed: Fen = fen.trim().parse().map_err(|err| RulesError::InvalidFen {
            fen: fen.to_string(),
            message: format!("{}", err),
        })?;
        let position: Chess =
            parsed
                .into_position(CastlingMode::Standard)
                .map_err(|err| RulesError::IllegalPosition {
                    message: format!("{}", err),
                })?;
        Ok(Self::from_position(position))
    }

    pub fn from_position(position: Chess) -> Self {
        Self {
            position,
            history: Vec::new(),
        }
    }

    /// The current shakmaty position
    pub fn position(&self) -> &Chess {
        &self.position
    }

    /// Number of moves that can still be undone
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Current position as FEN
    pub fn fen(&self) -> String {
        Fen::from_position(self.position.clone(), EnPassantMode::Legal).to_string()
    }

    /// Render `mv` in UCI notation, e.g. `e2e4`, `e1g1`, `e7e8q`
    pub fn move_to_uci(mv: &Move) -> String {
        mv.to_uci(CastlingMode::Standard).to_string()
    }

    /// Find the legal move written as `uci`
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::InvalidUci`] for text that is not a UCI move and
    /// [`RulesError::IllegalUci`] for a move that is not legal here.
    pub fn parse_uci(&self, uci: &str) -> RulesResult<Move> {
        let text = uci.trim().to_ascii_lowercase();
        if !is_uci_shaped(&text) {
            return Err(RulesError::InvalidUci {
                uci: uci.to_string(),
            });
        }
        self.position
            .legal_moves()
            .into_iter()
            .find(|mv| Self::move_to_uci(mv) == text)
            .ok_or_else(|| RulesError::IllegalUci {
                uci: uci.to_string(),
                fen: self.fen(),
            })
    }

    /// Parse `uci` and play it
    ///
    /// The move is recorded in the history like any other `do_move`.
    ///
    /// # Errors
    ///
    /// Same as [`ShakmatyBoard::parse_uci`].
    pub fn play_uci(&mut self, uci: &str) -> RulesResult<Move> {
        let mv = self.parse_uci(uci)?;
        self.history.push(self.position.clone());
        self.position.play_unchecked(&mv);
        Ok(mv)
    }

    pub fn is_stalemate(&self) -> bool {
        self.position.is_stalemate()
    }

    pub fn is_insufficient_material(&self) -> bool {
        self.position.is_insufficient_material()
    }

    pub fn is_check(&self) -> bool {
        self.position.is_check()
    }

    /// Mate or draw, no further moves will be searched
    pub fn is_game_over(&self) -> bool {
        self.is_checkmate() || self.is_draw()
    }
}

/// Two squares and an optional promotion letter
fn is_uci_shaped(text: &str) -> bool {
    let square = |range: std::ops::Range<usize>| {
        text.get(range)
            .map(|s| s.parse::<Square>().is_ok())
            .unwrap_or(false)
    };
    match text.len() {
        4 => square(0..2) && square(2..4),
        5 => square(0..2) && square(2..4) && text.ends_with(['n', 'b', 'r', 'q']),
        _ => false,
    }
}

impl BoardView for ShakmatyBoard {
    fn side_to_move(&self) -> Side {
        match self.position.turn() {
            Color::White => Side::White,
            Color::Black => Side::Black,
        }
    }

    fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    fn is_draw(&self) -> bool {
        self.position.is_stalemate() || self.position.is_insufficient_material()
    }

    fn piece_grid(&self) -> PieceGrid {
        let board = self.position.board();
        let mut grid = EMPTY_GRID;
        for (row, rank) in Rank::ALL.iter().rev().enumerate() {
            for (col, file) in File::ALL.iter().enumerate() {
                if let Some(piece) = board.piece_at(Square::from_coords(*file, *rank)) {
                    grid[row][col] = piece.char();
                }
            }
        }
        grid
    }
}

impl GameBoard for ShakmatyBoard {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        self.position.legal_moves().into_iter().collect()
    }

    fn is_capture(&self, mv: &Move) -> bool {
        !mv.is_castle() && self.position.board().piece_at(mv.to()).is_some()
    }

    fn do_move(&mut self, mv: &Move) -> EngineResult<()> {
        if !self.position.is_legal(mv) {
            return Err(EngineError::IllegalMove {
                message: format!("{} in {}", Self::move_to_uci(mv), self.fen()),
            });
        }
        self.history.push(self.position.clone());
        self.position.play_unchecked(mv);
        Ok(())
    }

    fn undo_move(&mut self) {
        match self.history.pop() {
            Some(previous) => self.position = previous,
            None => warn!("undo_move called with empty history, ignoring"),
        }
    }
}
