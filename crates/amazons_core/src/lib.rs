pub mod board;
pub mod error;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod square;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use movegen::*;
pub use notation::*;
pub use perft::perft;
pub use square::*;
pub use types::*;

// =============================================================================
// Engine trait: implemented by the minimax and random engines
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found (None if the side to move has no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation score, positive favouring white
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
}

/// Trait that all Amazons engines must implement.
///
/// The orchestrator owns the authoritative board and hands engines a
/// snapshot; engines must leave it untouched and search on their own copy.
pub trait Engine: Send {
    /// Choose a move for the side to move on `board`.
    fn search(&mut self, board: &Board) -> SearchResult;

    /// Returns the engine's name for display
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "ML-chess"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
