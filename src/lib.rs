//! Command line driver for the minimax chess engine
//!
//! The search itself lives in `minimax_engine` and the chess rules in
//! `chess_rules`. This crate wires them together: configuration, the
//! computer player and the game loops behind the `xfminimax` binary.
//!
//! ## Module Organization
//!
//! - `ai` - `ChessAi`, a computer player holding a replaceable strategy
//! - `cli` - Command line arguments
//! - `config` - `EngineConfig`, loaded from JSON and overridden by flags
//! - `game` - Best-move, self-play and interactive play loops

pub mod ai;
pub mod cli;
pub mod config;
pub mod game;

pub use ai::ChessAi;
pub use config::EngineConfig;
pub use game::GameOutcome;
