//! Turn-taking driver
//!
//! Runs the engine against a position until the game ends or a limit is hit.
//! Input and output are plain readers and writers so the loops can be driven
//! from tests as easily as from a terminal.

use crate::ai::ChessAi;
use anyhow::{Context, Result};
use chess_rules::ShakmatyBoard;
use minimax_engine::{BoardView, GameBoard, Side};
use std::fmt;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// How a driven game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Side },
    Draw,
    /// Stopped before the game was decided
    Unfinished,
}

impl GameOutcome {
    /// Outcome of the position as it stands
    pub fn of(board: &ShakmatyBoard) -> Self {
        if board.is_checkmate() {
            GameOutcome::Checkmate {
                winner: board.side_to_move().flip(),
            }
        } else if board.is_draw() {
            GameOutcome::Draw
        } else {
            GameOutcome::Unfinished
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Checkmate { winner } => write!(f, "Checkmate! {} wins!", winner),
            GameOutcome::Draw => f.write_str("It's a draw!"),
            GameOutcome::Unfinished => f.write_str("Game unfinished"),
        }
    }
}

/// Engine's move in UCI notation, `None` on a finished position
pub fn best_move(ai: &ChessAi, board: &mut ShakmatyBoard) -> Result<Option<String>> {
    let report = ai.search(board).context("Search failed")?;
    info!(
        strategy = ai.strategy_name(),
        score = report.score,
        nodes = report.nodes,
        elapsed_ms = report.elapsed.as_millis() as u64,
        "Best move found"
    );
    Ok(report.best_move.as_ref().map(ShakmatyBoard::move_to_uci))
}

/// Let the engine play both sides for up to `plies` moves
///
/// Each move is written on its own line as `<ply>. <uci>`.
pub fn self_play<W: Write>(
    ai: &ChessAi,
    board: &mut ShakmatyBoard,
    plies: usize,
    out: &mut W,
) -> Result<(Vec<String>, GameOutcome)> {
    let mut played = Vec::with_capacity(plies);

    for ply in 1..=plies {
        if board.is_game_over() {
            break;
        }
        let Some(mv) = ai.find_best_move(board).context("Search failed")? else {
            break;
        };
        board
            .do_move(&mv)
            .context("Engine produced a move the board rejected")?;

        let uci = ShakmatyBoard::move_to_uci(&mv);
        writeln!(out, "{}. {}", ply, uci)?;
        debug!(ply, mv = %uci, fen = %board.fen(), "Self-play move");
        played.push(uci);
    }

    let outcome = GameOutcome::of(board);
    writeln!(out, "{}", outcome)?;
    Ok((played, outcome))
}

/// Interactive game: the user plays `user_side`, the engine the other side
///
/// Moves are read one per line in UCI notation. Whitespace inside a move is
/// ignored. Illegal or unreadable input is reported and asked for again. The
/// game stops at mate, at a draw, or when input runs out.
pub fn play<R: BufRead, W: Write>(
    ai: &ChessAi,
    board: &mut ShakmatyBoard,
    user_side: Side,
    input: &mut R,
    out: &mut W,
) -> Result<GameOutcome> {
    writeln!(out, "To input a move, use the following format: e2e4")?;

    while !board.is_game_over() {
        if board.side_to_move() == user_side {
            if board.is_check() {
                writeln!(out, "Heads up! You're in check!")?;
            }
            write!(out, "Enter your move: ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line).context("Failed to read move")? == 0 {
                info!("Input closed, ending game");
                return Ok(GameOutcome::Unfinished);
            }
            let text: String = line.chars().filter(|c| !c.is_whitespace()).collect();
            if let Err(err) = board.play_uci(&text) {
                debug!(%err, "Rejected user move");
                writeln!(out, "Sorry, I was unable to parse your move, or it was illegal. Please try again.")?;
            }
        } else {
            writeln!(out, "The opponent is thinking...")?;
            let Some(mv) = ai.find_best_move(board).context("Search failed")? else {
                break;
            };
            board
                .do_move(&mv)
                .context("Engine produced a move the board rejected")?;
            writeln!(out, "The opponent has moved: {}", ShakmatyBoard::move_to_uci(&mv))?;
        }
    }

    let outcome = GameOutcome::of(board);
    writeln!(out, "{}", outcome)?;
    Ok(outcome)
}
