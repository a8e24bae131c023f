use super::*;
use amazons_core::{Color, Piece, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

/// White queen at a1 walled in, black queen free at j10.
fn boxed_white() -> Board {
    let mut board = Board::empty();
    board.put(Piece::White, sq("a1"));
    for s in ["a2", "b2", "b1"] {
        board.put(Piece::Spear, sq(s));
    }
    board.put(Piece::Black, sq("j10"));
    board
}

#[test]
fn minimax_engine_returns_legal_move() {
    let mut engine = MinimaxEngine::new();
    let board = Board::new();

    let result = engine.search(&board);

    assert!(board.is_legal(result.best_move.unwrap()));
    assert_eq!(result.depth, 1);
    assert_eq!(result.nodes, 2176);
}

#[test]
fn minimax_engine_takes_the_win() {
    let mut engine = MinimaxEngine::with_config(EngineConfig::fixed_depth(2)).unwrap();
    let board = Board::from_dump(
        "B S - - - - - - - -
         - S - - - - - - - -
         W S - - - - - - - -
         - - - - - - - - - -
         - - - - - - - - - -
         - - - - - - - - - -
         - - - - - - - - - -
         - - - - - - - - - -
         - - - - - - - - - -
         - - - - - - - - - -",
    )
    .unwrap();

    let result = engine.search(&board);

    assert_eq!(result.best_move, Some("a8-a1(a9)".parse().unwrap()));
    assert_eq!(result.score, WINNING_VALUE);
    assert_eq!(result.depth, 2);
}

#[test]
fn minimax_engine_handles_stuck_side() {
    let mut engine = MinimaxEngine::new();
    let board = boxed_white();

    let result = engine.search(&board);

    assert!(result.best_move.is_none());
    assert_eq!(result.score, 0);
    assert_eq!(result.nodes, 0);
    assert!(select_move(&board).is_none());
}

#[test]
fn select_move_plays_a_full_game() {
    let mut engine = MinimaxEngine::with_config(EngineConfig::fixed_depth(1)).unwrap();
    let mut board = Board::new();
    for _ in 0..4 {
        let mv = engine.select_move(&board).unwrap();
        board.try_apply_move(mv).unwrap();
    }
    assert_eq!(board.num_moves(), 4);
    assert_eq!(board.turn(), Color::White);
}

#[test]
fn static_score_is_mobility_difference() {
    assert_eq!(static_score(&Board::new()), 0);

    // Black to move: white is stuck but has not lost yet.
    let mut board = boxed_white();
    board.set_turn(Color::Black);
    assert_eq!(board.winner(), None);
    assert_eq!(
        static_score(&board),
        -(board.mobility(Color::Black) as i32)
    );
}

#[test]
fn static_score_of_decided_games() {
    let board = boxed_white();
    assert_eq!(board.winner(), Some(Color::Black));
    assert_eq!(static_score(&board), -WINNING_VALUE);

    let mut mirrored = Board::empty();
    for s in Square::all() {
        let piece = match board.get(s) {
            Piece::White => Piece::Black,
            Piece::Black => Piece::White,
            p => p,
        };
        mirrored.put(piece, s);
    }
    mirrored.set_turn(Color::Black);
    assert_eq!(static_score(&mirrored), WINNING_VALUE);
}

#[test]
fn engine_reports_config() {
    let engine = MinimaxEngine::with_config(EngineConfig::fixed_depth(3)).unwrap();
    assert_eq!(engine.config().depth.depth_for(0), 3);
    assert_eq!(engine.name(), "Minimax v1.0");
    assert_eq!(engine.author(), "ML-chess");
}

#[test]
fn engine_rejects_zero_depth() {
    let result = MinimaxEngine::with_config(EngineConfig::fixed_depth(0));
    assert!(matches!(result, Err(ConfigError::Invalid { .. })));

    let unsorted = EngineConfig {
        depth: DepthPolicy::Adaptive {
            thresholds: [40, 30, 44, 50],
        },
    };
    assert!(MinimaxEngine::with_config(unsorted).is_err());
}

#[test]
fn default_engine_searches_at_least_one_ply() {
    let engine = MinimaxEngine::new();
    assert!(engine.config().validate().is_ok());
    for moves in [0, 30, 31, 90] {
        assert!(engine.config().depth.depth_for(moves) >= 1);
    }
}

#[test]
fn alpha_beta_full_window_matches_root_score() {
    let board = Board::new();
    let mut work = board.clone();
    let mut nodes = 0;
    let value = alpha_beta(&mut work, 1, -INFINITY, INFINITY, &mut nodes);

    let mut root_nodes = 0;
    let (_, score) = pick_best_move(&board, 1, &mut root_nodes).unwrap();
    assert_eq!(value, score);
    assert_eq!(work, board);
}
