//! Error types for the search engine
//!
//! Covers move application failures reported by the board, rejected
//! configuration values and cooperative cancellation of a running search.

use thiserror::Error;

/// Errors that can occur while configuring or running a search
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// The board refused to apply a move
    #[error("Illegal move: {message}")]
    IllegalMove { message: String },

    /// A configuration value could not be used
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// The stop flag was raised while the search was running
    #[error("Search cancelled after {nodes} nodes")]
    Cancelled { nodes: u64 },
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
