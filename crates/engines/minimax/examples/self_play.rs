//! Plays the minimax engine against the random engine and prints the result.
//!
//! Usage:
//!   cargo run --release --example self_play -p minimax_engine -- [config.toml] [seed]
//!
//! Set `RUST_LOG=minimax_engine=debug` to see one line per search.

use amazons_core::{Board, Color, Engine};
use minimax_engine::{EngineConfig, MinimaxEngine};
use random_engine::RandomEngine;
use std::env;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        Some(path) => EngineConfig::load(path),
        None => Ok(EngineConfig::default()),
    };
    let mut white = match config.and_then(MinimaxEngine::with_config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    let seed: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(1);

    let mut black = RandomEngine::with_seed(seed);
    let mut board = Board::new();

    loop {
        let engine: &mut dyn Engine = match board.turn() {
            Color::White => &mut white,
            Color::Black => &mut black,
        };
        let result = engine.search(&board);
        let Some(mv) = result.best_move else {
            break;
        };
        println!(
            "{:>3}. {:<6} {:<12} score {:>11} depth {} nodes {}",
            board.num_moves() + 1,
            board.turn(),
            mv,
            result.score,
            result.depth,
            result.nodes
        );
        board.apply_move(mv);
    }

    println!("\n{board}");
    match board.winner() {
        Some(winner) => println!("{winner} wins after {} moves", board.num_moves()),
        None => println!("Neither side can move after {} moves", board.num_moves()),
    }
}
