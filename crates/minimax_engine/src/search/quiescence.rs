//! Quiescence search to avoid horizon effect
//!
//! Below the nominal depth only captures are followed, until the position is
//! quiet or the window closes. A capture is a move whose destination square is
//! occupied before the move is played, as reported by the board.
//!
//! The side to move may always decline to capture, so the static evaluation
//! (the stand-pat score) bounds the result from its side: White never scores
//! below stand-pat and Black never above it.

use super::make_unmake::MoveGuard;
use super::SearchContext;
use crate::board::GameBoard;
use crate::constants::*;
use crate::error::EngineResult;
use crate::evaluation::Evaluator;

/// Capture-only search inside the window `[alpha, beta]`
///
/// Returns `alpha` from White's nodes and `beta` from Black's, each tightened
/// by stand-pat and by the captures examined.
pub(crate) fn quiescence<B, E>(
    ctx: &mut SearchContext<'_, E>,
    board: &mut B,
    mut alpha: Score,
    mut beta: Score,
    ply: u32,
) -> EngineResult<Score>
where
    B: GameBoard,
    E: Evaluator<B> + ?Sized,
{
    ctx.enter_node()?;

    let stand_pat = ctx.evaluate(board);
    let maximizing = board.side_to_move().is_maximizing();

    if maximizing {
        if stand_pat >= beta {
            return Ok(beta);
        }
        alpha = alpha.max(stand_pat);
    } else {
        if stand_pat <= alpha {
            return Ok(alpha);
        }
        beta = beta.min(stand_pat);
    }

    if ply >= MAX_QUIESCENCE_PLY {
        return Ok(if maximizing { alpha } else { beta });
    }

    let captures: Vec<B::Move> = board
        .legal_moves()
        .into_iter()
        .filter(|mv| board.is_capture(mv))
        .collect();

    for mv in &captures {
        let score = {
            let mut child = MoveGuard::apply(board, mv)?;
            quiescence(ctx, &mut *child, alpha, beta, ply + 1)?
        };

        if maximizing {
            if score >= beta {
                ctx.record_cutoff();
                return Ok(beta);
            }
            alpha = alpha.max(score);
        } else {
            if score <= alpha {
                ctx.record_cutoff();
                return Ok(alpha);
            }
            beta = beta.min(score);
        }
    }

    Ok(if maximizing { alpha } else { beta })
}
