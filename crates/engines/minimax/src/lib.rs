//! Minimax Amazons Engine
//!
//! Alpha-beta search over the full move list with a mobility evaluation.
//! Search depth grows as the board fills up and branching shrinks.

mod config;
mod eval;
mod search;

use amazons_core::{Board, Engine, Move, SearchResult};
use tracing::debug;

pub use config::{ConfigError, DepthPolicy, EngineConfig};
pub use eval::{static_score, WINNING_VALUE};
pub use search::{alpha_beta, pick_best_move, INFINITY};

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;

/// Amazons engine using minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Alpha-beta search with a last-generated-move tie-break
/// - Mobility evaluation (white moves minus black moves)
/// - A depth policy driven by the number of moves played
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    config: EngineConfig,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            nodes: 0,
        }
    }

    /// Builds an engine from `config`, rejecting configs that fail
    /// [`EngineConfig::validate`] (e.g. a fixed depth of 0).
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(?config, "minimax engine configured");
        Ok(Self { config, nodes: 0 })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Best move for the side to move, or `None` if it cannot move.
    pub fn select_move(&mut self, board: &Board) -> Option<Move> {
        self.search(board).best_move
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &Board) -> SearchResult {
        self.nodes = 0;
        let depth = self.config.depth.depth_for(board.num_moves());

        let outcome = search::pick_best_move(board, depth, &mut self.nodes);

        SearchResult {
            best_move: outcome.map(|(mv, _)| mv),
            score: outcome.map(|(_, s)| s).unwrap_or(0),
            depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

/// Picks a move with the default depth policy.
pub fn select_move(board: &Board) -> Option<Move> {
    MinimaxEngine::new().select_move(board)
}
