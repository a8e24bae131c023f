//! Random Move Amazons Engine
//!
//! Selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Driving self-play games without search cost
//! - Baseline comparisons (the minimax engine should easily beat this)
//! - Stress testing move generation

use amazons_core::{legal_moves_into, Board, Engine, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, SeedableRng};
use tracing::trace;


/// An Amazons engine that plays random legal moves.
///
/// Without a seed it draws from the thread RNG. A seeded engine replays
/// the same choices for the same sequence of positions.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine {
    rng: Option<StdRng>,
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self { rng: None, nodes: 0 }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Some(StdRng::seed_from_u64(seed)),
            nodes: 0,
        }
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board) -> SearchResult {
        let mut moves = Vec::with_capacity(2048);
        legal_moves_into(board, board.turn(), &mut moves);
        self.nodes = moves.len() as u64;

        let best_move = match self.rng.as_mut() {
            Some(rng) => moves.choose(rng).copied(),
            None => moves.choose(&mut thread_rng()).copied(),
        };
        trace!(candidates = moves.len(), ?best_move, "random pick");

        SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
