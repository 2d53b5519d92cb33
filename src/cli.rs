//! Command line interface

use clap::{Parser, Subcommand, ValueEnum};
use minimax_engine::{Side, StrategyKind};
use std::path::PathBuf;

/// Standard starting position
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Debug, Parser)]
#[command(name = "xfminimax", version, about = "Minimax and alpha-beta chess move search")]
pub struct Cli {
    /// JSON engine configuration file
    #[arg(long, global = true, env = "XFMINIMAX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Search depth in plies, overrides the config file
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub depth: Option<i64>,

    /// Search strategy (minimax or alpha-beta), overrides the config file
    #[arg(long, global = true)]
    pub strategy: Option<StrategyKind>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the engine's move for a position
    Bestmove {
        #[arg(long, default_value = START_FEN)]
        fen: String,
    },
    /// Let the engine play against itself
    Selfplay {
        /// Maximum number of plies to play
        #[arg(long, default_value_t = 20)]
        plies: usize,
        #[arg(long, default_value = START_FEN)]
        fen: String,
    },
    /// Play against the engine on stdin/stdout
    Play {
        /// Side the human plays
        #[arg(long, value_enum, default_value_t = Colour::White)]
        side: Colour,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Colour {
    White,
    Black,
}

impl From<Colour> for Side {
    fn from(colour: Colour) -> Self {
        match colour {
            Colour::White => Side::White,
            Colour::Black => Side::Black,
        }
    }
}
