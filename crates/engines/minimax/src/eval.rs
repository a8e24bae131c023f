//! Mobility-based position evaluation

use amazons_core::{Board, Color};

/// Score magnitude of a decided game: positive if white has won, negative
/// if black has. Larger than any mobility difference can be.
pub const WINNING_VALUE: i32 = i32::MAX - 1;

/// Evaluates the position from white's perspective.
///
/// Returns:
/// - `WINNING_VALUE` / `-WINNING_VALUE` once the game is decided
/// - otherwise white's legal move count minus black's
pub fn static_score(board: &Board) -> i32 {
    if let Some(winner) = board.winner() {
        return winning_score(winner);
    }
    let white = board.mobility(Color::White) as i32;
    let black = board.mobility(Color::Black) as i32;
    white - black
}

/// Signed score of a game won by `winner`.
#[inline]
pub fn winning_score(winner: Color) -> i32 {
    match winner {
        Color::White => WINNING_VALUE,
        Color::Black => -WINNING_VALUE,
    }
}
