//! Piece weight table
//!
//! Stores one magnitude per piece kind. The colour sign is applied on lookup,
//! so a White piece is always worth exactly the negation of its Black twin.

use crate::board::{PieceKind, Side};
use crate::constants::*;
use crate::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};

/// Per-kind magnitudes as they appear in configuration files
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieceWeights {
    pub pawn: Score,
    pub knight: Score,
    pub bishop: Score,
    pub rook: Score,
    pub queen: Score,
    pub king: Score,
}

impl Default for PieceWeights {
    fn default() -> Self {
        Self {
            pawn: PAWN_WEIGHT,
            knight: KNIGHT_WEIGHT,
            bishop: BISHOP_WEIGHT,
            rook: ROOK_WEIGHT,
            queen: QUEEN_WEIGHT,
            king: KING_WEIGHT,
        }
    }
}

/// Immutable mapping from piece kind and colour to a signed weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PieceWeights", into = "PieceWeights")]
pub struct WeightTable {
    magnitudes: [Score; 6],
}

impl WeightTable {
    /// Build a table from per-kind magnitudes
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] if any magnitude is NaN or infinite.
    pub fn new(weights: PieceWeights) -> EngineResult<Self> {
        let magnitudes = [
            weights.pawn,
            weights.knight,
            weights.bishop,
            weights.rook,
            weights.queen,
            weights.king,
        ];
        if let Some((kind, value)) = PieceKind::ALL
            .iter()
            .zip(magnitudes)
            .find(|(_, value)| !value.is_finite())
        {
            return Err(EngineError::InvalidConfiguration {
                message: format!("weight for {:?} must be finite, got {}", kind, value),
            });
        }
        Ok(Self { magnitudes })
    }

    /// Weight of a piece, positive for White and negative for Black
    #[inline]
    pub fn weight(&self, kind: PieceKind, side: Side) -> Score {
        side.sign() * self.magnitudes[kind as usize]
    }

    /// Weight of a grid character, `None` if it is not a piece
    #[inline]
    pub fn weight_of_code(&self, code: char) -> Option<Score> {
        PieceKind::from_code(code).map(|(kind, side)| self.weight(kind, side))
    }

    pub fn piece_weights(&self) -> PieceWeights {
        let [pawn, knight, bishop, rook, queen, king] = self.magnitudes;
        PieceWeights {
            pawn,
            knight,
            bishop,
            rook,
            queen,
            king,
        }
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        let d = PieceWeights::default();
        Self {
            magnitudes: [d.pawn, d.knight, d.bishop, d.rook, d.queen, d.king],
        }
    }
}

impl TryFrom<PieceWeights> for WeightTable {
    type Error = EngineError;

    fn try_from(weights: PieceWeights) -> EngineResult<Self> {
        Self::new(weights)
    }
}

impl From<WeightTable> for PieceWeights {
    fn from(table: WeightTable) -> Self {
        table.piece_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_weight_is_negated_black_weight() {
        let table = WeightTable::default();
        for kind in PieceKind::ALL {
            assert_eq!(
                table.weight(kind, Side::White),
                -table.weight(kind, Side::Black),
                "asymmetric weight for {:?}",
                kind
            );
        }
    }

    #[test]
    fn test_uppercase_code_mirrors_lowercase_code() {
        let table = WeightTable::default();
        for code in ['p', 'n', 'b', 'r', 'q', 'k'] {
            let black = table.weight_of_code(code).unwrap();
            let white = table.weight_of_code(code.to_ascii_uppercase()).unwrap();
            assert_eq!(white, -black, "code {}", code);
            assert!(white > 0.0);
        }
    }

    #[test]
    fn test_standard_values() {
        let table = WeightTable::default();
        assert_eq!(table.weight(PieceKind::Pawn, Side::White), 1.0);
        assert_eq!(table.weight(PieceKind::Knight, Side::White), 3.25);
        assert_eq!(table.weight(PieceKind::Bishop, Side::Black), -3.25);
        assert_eq!(table.weight(PieceKind::Rook, Side::White), 5.0);
        assert_eq!(table.weight(PieceKind::Queen, Side::Black), -10.0);
        assert_eq!(table.weight(PieceKind::King, Side::White), 100.0);
        assert_eq!(table.weight_of_code(EMPTY_SQUARE), None);
    }

    #[test]
    fn test_non_finite_weight_is_rejected() {
        let weights = PieceWeights {
            queen: f64::NAN,
            ..PieceWeights::default()
        };
        let err = WeightTable::new(weights).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("Queen"));
    }

    #[test]
    fn test_deserialize_fills_missing_kinds_with_defaults() {
        let table: WeightTable = serde_json::from_str(r#"{ "queen": 9.0 }"#).unwrap();
        assert_eq!(table.weight(PieceKind::Queen, Side::White), 9.0);
        assert_eq!(table.weight(PieceKind::Rook, Side::White), ROOK_WEIGHT);
    }
}
