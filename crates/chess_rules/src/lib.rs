//! Standard chess rules for the search engine
//!
//! Move generation, legality, mate and draw detection all come from
//! [`shakmaty`]. This crate adapts a shakmaty position to the engine's
//! `GameBoard` protocol and adds the FEN and UCI handling the driver needs.
//!
//! ## Module Organization
//!
//! - `board` - `ShakmatyBoard`, the make/unmake adapter
//! - `error` - Error types for FEN and UCI input

pub mod board;
pub mod error;

pub use board::ShakmatyBoard;
pub use error::{RulesError, RulesResult};

/// Move type produced by [`ShakmatyBoard`]
pub use shakmaty::Move;
