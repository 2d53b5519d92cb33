//! # Search Constants
//!
//! Scores are plain `f64` values from White's point of view: positive numbers
//! favour White (the maximizing side), negative numbers favour Black.
//!
//! - `SCORE_INFINITY` bounds an alpha-beta window before anything is known.
//! - `MATE_SCORE` is a finite sentinel far above any material sum, so a forced
//!   mate always outranks a material advantage.
//! - A drawn or stalemated position scores exactly `DRAW_SCORE`.
//!
//! Piece magnitudes follow the conventional mid-game point system
//! (Heisman's "Everyone's 2nd Chess Book"), with minor pieces at 3.25.

/// Heuristic score, positive favours White
pub type Score = f64;

/// Unbounded alpha-beta window edge
pub const SCORE_INFINITY: Score = f64::INFINITY;

/// Score of a checkmate, signed towards the side that delivered it
pub const MATE_SCORE: Score = 1e6;

/// Score of a stalemate or other draw
pub const DRAW_SCORE: Score = 0.0;

/// Depth used when a non-positive depth is requested
pub const DEFAULT_SEARCH_DEPTH: u32 = 4;

/// Hard ceiling on capture-only plies explored below the search horizon
pub const MAX_QUIESCENCE_PLY: u32 = 8;

pub const PAWN_WEIGHT: Score = 1.0;
pub const KNIGHT_WEIGHT: Score = 3.25;
pub const BISHOP_WEIGHT: Score = 3.25;
pub const ROOK_WEIGHT: Score = 5.0;
pub const QUEEN_WEIGHT: Score = 10.0;
pub const KING_WEIGHT: Score = 100.0;

/// Grid code for an empty square
pub const EMPTY_SQUARE: char = '.';
