use anyhow::{Context, Result};
use chess_rules::ShakmatyBoard;
use clap::Parser;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;
use xfminimax::cli::{Cli, Command};
use xfminimax::{game, ChessAi, EngineConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    }
    .with_overrides(cli.depth, cli.strategy);
    let ai = ChessAi::from_config(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Bestmove { fen } => {
            let mut board = ShakmatyBoard::from_fen(&fen).context("Invalid --fen")?;
            let mv = game::best_move(&ai, &mut board)?;
            writeln!(out, "{}", mv.as_deref().unwrap_or("(none)"))?;
        }
        Command::Selfplay { plies, fen } => {
            let mut board = ShakmatyBoard::from_fen(&fen).context("Invalid --fen")?;
            game::self_play(&ai, &mut board, plies, &mut out)?;
        }
        Command::Play { side } => {
            let mut board = ShakmatyBoard::new();
            let stdin = io::stdin();
            game::play(&ai, &mut board, side.into(), &mut stdin.lock(), &mut out)?;
        }
    }

    Ok(())
}
