//! Minimax search with alpha-beta pruning
//!
//! White maximizes and black minimizes the white-relative score from
//! [`static_score`]. All recursion runs on one working copy of the board;
//! each child is visited through [`Board::with_move`], so the copy is back in
//! its previous state whenever a call returns.

use amazons_core::{legal_moves_into, Board, Color, Move};
use tracing::{debug, trace};

use crate::eval::{static_score, winning_score};

/// Bound wider than any score, used for the initial alpha-beta window.
pub const INFINITY: i32 = i32::MAX;

/// Searches the position and returns the best move for the side to move
/// with its score.
///
/// # Arguments
/// * `board` - The position to search (left untouched; a copy is searched)
/// * `depth` - Search depth in plies
/// * `nodes` - Counter for nodes searched (for statistics)
///
/// # Returns
/// `None` when the side to move has no legal move, otherwise the chosen
/// move and its value. Among moves of equal value the last one generated
/// wins.
pub fn pick_best_move(board: &Board, depth: u8, nodes: &mut u64) -> Option<(Move, i32)> {
    let mut work = board.clone();
    let mut moves = Vec::with_capacity(2048);
    legal_moves_into(&work, work.turn(), &mut moves);

    let maximizing = work.turn() == Color::White;
    let mut best = *moves.first()?;
    let mut best_score = if maximizing { -INFINITY } else { INFINITY };
    let mut alpha = -INFINITY;
    let mut beta = INFINITY;

    for mv in moves {
        *nodes += 1;
        // Widen the window by one so a sibling that only ties the best score
        // gets an exact value rather than a bound. With the unwidened window
        // a fail-low bound equal to the best can displace it, so the move
        // picked here can differ from that variant's pick on equal scores.
        let (lo, hi) = if maximizing {
            (alpha.saturating_sub(1), beta)
        } else {
            (alpha, beta.saturating_add(1))
        };
        let score = work.with_move(mv, |b| alpha_beta(b, depth.saturating_sub(1), lo, hi, nodes));
        trace!(%mv, score, "root move");

        if maximizing {
            if score >= best_score {
                best_score = score;
                best = mv;
                alpha = alpha.max(score);
            }
        } else if score <= best_score {
            best_score = score;
            best = mv;
            beta = beta.min(score);
        }
        if beta <= alpha {
            break;
        }
    }

    debug!(
        depth,
        nodes = *nodes,
        score = best_score,
        best = %best,
        side = %board.turn(),
        "search finished"
    );
    Some((best, best_score))
}

/// Recursive minimax with alpha-beta pruning.
///
/// `alpha` is the best value the maximizer is already guaranteed, `beta` the
/// best the minimizer is. Remaining siblings are skipped once they cross.
pub fn alpha_beta(board: &mut Board, depth: u8, mut alpha: i32, mut beta: i32, nodes: &mut u64) -> i32 {
    if depth == 0 {
        return static_score(board);
    }
    if let Some(winner) = board.winner() {
        return winning_score(winner);
    }

    let mut moves = Vec::with_capacity(2048);
    legal_moves_into(board, board.turn(), &mut moves);

    // Both sides stuck: `winner` stays silent, but the side to move loses.
    if moves.is_empty() {
        return winning_score(board.turn().other());
    }

    if board.turn() == Color::White {
        let mut best = -INFINITY;
        for mv in moves {
            *nodes += 1;
            let score = board.with_move(mv, |b| alpha_beta(b, depth - 1, alpha, beta, nodes));
            if score >= best {
                best = score;
                alpha = alpha.max(score);
                if beta <= alpha {
                    break; // Beta cutoff
                }
            }
        }
        best
    } else {
        let mut best = INFINITY;
        for mv in moves {
            *nodes += 1;
            let score = board.with_move(mv, |b| alpha_beta(b, depth - 1, alpha, beta, nodes));
            if score <= best {
                best = score;
                beta = beta.min(score);
                if beta <= alpha {
                    break; // Alpha cutoff
                }
            }
        }
        best
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
