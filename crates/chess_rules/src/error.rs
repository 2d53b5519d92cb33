//! Error types for position and move notation handling

use thiserror::Error;

/// Errors raised while loading positions or reading moves from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// The text is not valid FEN
    #[error("Invalid FEN '{fen}': {message}")]
    InvalidFen { fen: String, message: String },

    /// The FEN parses but describes an impossible position
    #[error("Illegal position: {message}")]
    IllegalPosition { message: String },

    /// The text is not a UCI move
    #[error("Invalid UCI move '{uci}'")]
    InvalidUci { uci: String },

    /// Well-formed UCI move that is not legal in the current position
    #[error("Illegal move '{uci}' in position {fen}")]
    IllegalUci { uci: String, fen: String },
}

/// Result type alias for rules operations
pub type RulesResult<T> = Result<T, RulesError>;
