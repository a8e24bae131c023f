use crate::{board::Board, movegen::legal_moves_into, types::Move};

/// Pure perft node count.
/// Counts all positions reachable from the current one in exactly `depth`
/// plies, the side to move alternating as in play.
pub fn perft(board: &mut Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(board: &mut Board, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 1 {
            return board.mobility(board.turn()) as u64;
        }

        let (buf, rest) = layers
            .split_first_mut()
            .expect("perft requires one buffer per remaining ply");

        legal_moves_into(board, board.turn(), buf);

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            nodes += board.with_move(mv, |b| inner(b, depth - 1, rest));
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(2048); depth as usize];
    inner(board, depth, &mut layers[..])
}
