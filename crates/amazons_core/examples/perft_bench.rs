//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p amazons_core -- [depth] [dump-file]
//!
//! Without a dump file every built-in line is timed at `depth` (default 2).
//! With one, that position is timed and split per root move like a `divide`.

use amazons_core::{legal_moves_into, perft, Board, Color};
use std::env;
use std::time::{Duration, Instant};

/// Move sequences played from the opening before counting.
const TEST_LINES: &[(&str, &[&str])] = &[
    ("Opening", &[]),
    ("Centre queens", &["d1-d7(g7)", "g10-g8(e8)"]),
    (
        "Crowded",
        &["d1-d7(g7)", "g10-g8(e8)", "j4-f4(f8)", "a7-c7(c2)", "g1-g5(b5)"],
    ),
];

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(2);

    let result = match args.get(2) {
        Some(path) => divide_dump(path, depth),
        None => {
            suite(depth);
            Ok(())
        }
    };
    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn timed(board: &mut Board, depth: u8) -> (u64, Duration) {
    let start = Instant::now();
    let nodes = perft(board, depth);
    (nodes, start.elapsed())
}

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 { nodes as f64 / secs } else { 0.0 }
}

fn divide_dump(path: &str, depth: u8) -> Result<(), Box<dyn std::error::Error>> {
    let mut board = Board::from_dump(&std::fs::read_to_string(path)?)?;
    println!("{board}");
    println!(
        "{} to move, mobility white {} black {}, depth {depth}\n",
        board.turn(),
        board.mobility(Color::White),
        board.mobility(Color::Black)
    );

    let mut roots = Vec::new();
    legal_moves_into(&board, board.turn(), &mut roots);

    let start = Instant::now();
    let mut total = 0u64;
    for mv in roots {
        let nodes = board.with_move(mv, |b| perft(b, depth.saturating_sub(1)));
        println!("{mv:<14} {nodes}");
        total += nodes;
    }
    let elapsed = start.elapsed();
    println!("\n{total} nodes in {elapsed:.3?} ({:.0} nps)", nps(total, elapsed));
    Ok(())
}

fn suite(depth: u8) {
    println!("perft depth {depth}\n");

    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;
    for (name, line) in TEST_LINES {
        let mut board = Board::new();
        for txt in line.iter() {
            let mv = txt.parse().expect("benchmark line is well-formed");
            board.try_apply_move(mv).expect("benchmark line is legal");
        }

        let (nodes, elapsed) = timed(&mut board, depth);
        total_nodes += nodes;
        total_time += elapsed;
        println!(
            "{name:<16} {nodes:>14} {elapsed:>10.3?} {:>12.0} nps",
            nps(nodes, elapsed)
        );
    }

    println!(
        "{:<16} {total_nodes:>14} {total_time:>10.3?} {:>12.0} nps",
        "total",
        nps(total_nodes, total_time)
    );
}
