use crate::{board::Board, square::Square, types::*};

/// Squares reachable from one square by an unblocked queen move.
///
/// Walks direction 0 through 7, each outward until the board edge or the
/// first occupied square. A square equal to `as_empty` is passed through as
/// if it were empty.
#[derive(Clone, Debug)]
pub struct ReachableSquares<'a> {
    board: &'a Board,
    from: Square,
    as_empty: Option<Square>,
    dir: usize,
    steps: i32,
}

impl Iterator for ReachableSquares<'_> {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        while self.dir < 8 {
            self.steps += 1;
            match self.from.queen_step(self.dir, self.steps) {
                Some(s) if Some(s) == self.as_empty || self.board.get(s).is_empty() => {
                    return Some(s);
                }
                _ => {
                    self.dir += 1;
                    self.steps = 0;
                }
            }
        }
        None
    }
}

/// All legal moves for one side, generated lazily.
///
/// Queens are taken in ascending square order; for each queen every
/// destination from [`Board::reachable_from`], and for each destination
/// every spear square reachable from it with the origin treated as empty.
#[derive(Clone, Debug)]
pub struct LegalMoves<'a> {
    board: &'a Board,
    queens: Vec<Square>,
    next_queen: usize,
    from: Option<Square>,
    destinations: Option<ReachableSquares<'a>>,
    to: Option<Square>,
    spears: Option<ReachableSquares<'a>>,
}

impl Iterator for LegalMoves<'_> {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        loop {
            if let (Some(from), Some(to), Some(spears)) =
                (self.from, self.to, self.spears.as_mut())
            {
                if let Some(spear) = spears.next() {
                    return Some(Move::new(from, to, spear));
                }
            }

            if let (Some(from), Some(dests)) = (self.from, self.destinations.as_mut()) {
                if let Some(to) = dests.next() {
                    self.to = Some(to);
                    self.spears = Some(self.board.reachable_from(to, Some(from)));
                    continue;
                }
            }

            let from = *self.queens.get(self.next_queen)?;
            self.next_queen += 1;
            self.from = Some(from);
            self.destinations = Some(self.board.reachable_from(from, None));
            self.to = None;
            self.spears = None;
        }
    }
}

impl Board {
    /// Iterator over squares reachable from `from` by an unblocked queen
    /// move, treating `as_empty` (if any) as empty. Ignores whatever is on
    /// `from` itself.
    pub fn reachable_from(&self, from: Square, as_empty: Option<Square>) -> ReachableSquares<'_> {
        ReachableSquares {
            board: self,
            from,
            as_empty,
            dir: 0,
            steps: 0,
        }
    }

    /// Iterator over all legal moves for `side`, whoever is to move.
    pub fn legal_moves(&self, side: Color) -> LegalMoves<'_> {
        LegalMoves {
            board: self,
            queens: self.queens(side),
            next_queen: 0,
            from: None,
            destinations: None,
            to: None,
            spears: None,
        }
    }

    /// Legal moves for the side to move.
    pub fn legal_moves_for_turn(&self) -> LegalMoves<'_> {
        self.legal_moves(self.turn())
    }

    /// Number of legal moves for `side`.
    ///
    /// Counts spear squares per destination instead of building each move.
    pub fn mobility(&self, side: Color) -> usize {
        self.queens(side)
            .into_iter()
            .map(|from| {
                self.reachable_from(from, None)
                    .map(|to| self.reachable_from(to, Some(from)).count())
                    .sum::<usize>()
            })
            .sum()
    }

    /// True iff `side` has at least one legal move.
    ///
    /// A queen that can step anywhere can always throw back to where it
    /// came from, so one reachable square is enough.
    pub fn has_legal_move(&self, side: Color) -> bool {
        self.queens(side)
            .into_iter()
            .any(|from| self.reachable_from(from, None).next().is_some())
    }
}

/// Collects the legal moves for `side` into `out`, reusing its allocation.
pub fn legal_moves_into(board: &Board, side: Color, out: &mut Vec<Move>) {
    out.clear();
    out.extend(board.legal_moves(side));
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
