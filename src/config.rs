//! Engine configuration
//!
//! Loaded from a JSON file and then overridden by command line flags:
//!
//! ```json
//! {
//!   "depth": 4,
//!   "strategy": "alpha-beta",
//!   "weights": { "pawn": 1.0, "knight": 3.25, "bishop": 3.25, "rook": 5.0, "queen": 10.0, "king": 100.0 }
//! }
//! ```
//!
//! Every field is optional. Missing fields take the defaults: depth 4, the
//! alpha-beta strategy and the standard weight table.

use anyhow::{Context, Result};
use chess_rules::ShakmatyBoard;
use minimax_engine::{
    MaterialEvaluator, PieceWeights, SearchDepth, Strategy, StrategyKind, WeightTable,
    DEFAULT_SEARCH_DEPTH,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Settings that decide how the engine searches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Plies to search. Values below 1 fall back to the default with a warning.
    pub depth: i64,
    pub strategy: StrategyKind,
    pub weights: PieceWeights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: i64::from(DEFAULT_SEARCH_DEPTH),
            strategy: StrategyKind::default(),
            weights: PieceWeights::default(),
        }
    }
}

impl EngineConfig {
    /// Read a configuration file
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not valid configuration JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_json(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        info!(path = %path.display(), "Loaded engine configuration");
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply command line overrides on top of file values
    pub fn with_overrides(mut self, depth: Option<i64>, strategy: Option<StrategyKind>) -> Self {
        if let Some(depth) = depth {
            self.depth = depth;
        }
        if let Some(strategy) = strategy {
            self.strategy = strategy;
        }
        self
    }

    /// Material evaluator for the configured weights
    ///
    /// # Errors
    ///
    /// Fails if any weight is not a finite number.
    pub fn evaluator(&self) -> Result<MaterialEvaluator> {
        let table = WeightTable::new(self.weights).context("Invalid piece weights")?;
        Ok(MaterialEvaluator::new(Arc::new(table)))
    }

    /// Build the configured strategy for standard chess
    pub fn build_strategy(&self) -> Result<Box<dyn Strategy<ShakmatyBoard>>> {
        let evaluator = self.evaluator()?;
        Ok(self.strategy.build(SearchDepth::new(self.depth), evaluator))
    }
}
