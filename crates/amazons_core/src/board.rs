use std::fmt;

use crate::error::{AmazonsError, AmazonsResult};
use crate::square::{NUM_SQUARES, SIZE, Square};
use crate::types::*;

/// State of an Amazons game: the grid, the side to move and the stack of
/// moves played so far.
///
/// During play the board changes only through [`Board::apply_move`] and
/// [`Board::undo`], which keeps the queen counts fixed, never removes a
/// spear that a later move relies on and keeps `num_moves() == history().len()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Piece; NUM_SQUARES],
    turn: Color,
    history: Vec<Move>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Board in the standard starting position, white to move.
    pub fn new() -> Self {
        let mut b = Self::empty();
        for (col, row) in [(0, 3), (9, 3), (3, 0), (6, 0)] {
            b.cells[row * SIZE + col] = Piece::White;
        }
        for (col, row) in [(0, 6), (9, 6), (3, 9), (6, 9)] {
            b.cells[row * SIZE + col] = Piece::Black;
        }
        b
    }

    /// Board with no pieces at all, white to move. Setup scaffolding.
    pub fn empty() -> Self {
        Board {
            cells: [Piece::Empty; NUM_SQUARES],
            turn: Color::White,
            history: Vec::new(),
        }
    }

    /// Parses the text produced by `Display`: ten rows from row 10 down to
    /// row 1, each holding ten of `- W B S` separated by whitespace.
    /// Leading indentation and blank lines are ignored. The result has white
    /// to move and no history.
    pub fn from_dump(text: &str) -> AmazonsResult<Self> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if rows.len() != SIZE {
            return Err(AmazonsError::InvalidDump {
                reason: format!("expected {SIZE} rows, found {}", rows.len()),
            });
        }

        let mut b = Self::empty();
        for (i, line) in rows.iter().enumerate() {
            let row = SIZE - 1 - i;
            let symbols: Vec<&str> = line.split_whitespace().collect();
            if symbols.len() != SIZE {
                return Err(AmazonsError::InvalidDump {
                    reason: format!("row {} has {} cells", row + 1, symbols.len()),
                });
            }
            for (col, sym) in symbols.iter().enumerate() {
                let mut chars = sym.chars();
                let piece = match (chars.next(), chars.next()) {
                    (Some(c), None) => Piece::from_symbol(c),
                    _ => None,
                }
                .ok_or_else(|| AmazonsError::InvalidDump {
                    reason: format!("unknown cell {sym:?} in row {}", row + 1),
                })?;
                b.cells[row * SIZE + col] = piece;
            }
        }
        Ok(b)
    }

    #[inline]
    pub fn get(&self, s: Square) -> Piece {
        self.cells[s.index()]
    }

    /// Overwrites one cell. Only for setting up positions; play goes through
    /// `apply_move`/`undo`.
    #[inline]
    pub fn put(&mut self, p: Piece, s: Square) {
        self.cells[s.index()] = p;
    }

    pub fn cells(&self) -> &[Piece; NUM_SQUARES] {
        &self.cells
    }

    /// Side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Overrides the side to move. Setup scaffolding, like `put`.
    pub fn set_turn(&mut self, c: Color) {
        self.turn = c;
    }

    /// Number of moves played and not undone.
    pub fn num_moves(&self) -> usize {
        self.history.len()
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Number of cells holding `p`.
    pub fn count(&self, p: Piece) -> usize {
        self.cells.iter().filter(|&&c| c == p).count()
    }

    /// Squares holding `side`'s queens, in ascending index order.
    pub fn queens(&self, side: Color) -> Vec<Square> {
        let marker = side.piece();
        Square::all().filter(|&s| self.get(s) == marker).collect()
    }

    /// True iff `from -> to` is a queen move whose squares, other than
    /// `from` and `as_empty`, are all empty. The destination counts.
    pub fn is_unblocked_move(&self, from: Square, to: Square, as_empty: Option<Square>) -> bool {
        if !from.is_queen_move(to) {
            return false;
        }
        let dir = from.direction(to);
        (1..=from.distance(to)).all(|steps| match from.queen_step(dir, steps) {
            Some(s) => Some(s) == as_empty || self.get(s).is_empty(),
            None => false,
        })
    }

    /// True iff `from` is a valid starting square. Every constructed
    /// `Square` is on the board, so this reduces to a bounds check.
    pub fn is_legal_from(&self, from: Square) -> bool {
        Square::exists(from.col(), from.row())
    }

    /// True iff `from -> to` is a valid first half of a move, ignoring the
    /// spear.
    pub fn is_legal_step(&self, from: Square, to: Square) -> bool {
        self.is_legal_from(from)
            && self.is_legal_from(to)
            && self.get(to).is_empty()
            && self.is_unblocked_move(from, to, None)
    }

    /// True iff `from-to(spear)` is legal in the current position.
    pub fn is_legal_parts(&self, from: Square, to: Square, spear: Square) -> bool {
        self.is_legal_step(from, to) && self.is_unblocked_move(to, spear, Some(from))
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        self.is_legal_parts(mv.from, mv.to, mv.spear)
    }

    /// Plays `mv` for the side to move.
    ///
    /// The move must be legal; moves from `legal_moves` always are. Use
    /// [`Board::try_apply_move`] for untrusted input.
    pub fn apply_move(&mut self, mv: Move) {
        debug_assert!(self.is_legal(mv), "illegal move {mv} on\n{self}");
        self.history.push(mv);
        self.put(Piece::Empty, mv.from);
        self.put(self.turn.piece(), mv.to);
        self.put(Piece::Spear, mv.spear);
        self.turn = self.turn.other();
    }

    /// Checked version of `apply_move`. On error the board is unchanged.
    pub fn try_apply_move(&mut self, mv: Move) -> AmazonsResult<()> {
        if !self.is_legal(mv) {
            return Err(AmazonsError::IllegalMove { mv });
        }
        self.apply_move(mv);
        Ok(())
    }

    /// Takes back the last move. No effect on a board with no history.
    pub fn undo(&mut self) {
        let Some(mv) = self.history.pop() else {
            return;
        };
        // Spear first: it may sit on `from`.
        self.put(Piece::Empty, mv.spear);
        let queen = self.get(mv.to);
        self.put(Piece::Empty, mv.to);
        self.put(queen, mv.from);
        self.turn = self.turn.other();
    }

    /// Plays `mv`, runs `f` on the resulting board and takes the move back
    /// before returning, whatever `f` does with the board in between.
    pub fn with_move<R>(&mut self, mv: Move, f: impl FnOnce(&mut Board) -> R) -> R {
        struct Restore<'a> {
            board: &'a mut Board,
            depth: usize,
        }
        impl Drop for Restore<'_> {
            fn drop(&mut self) {
                while self.board.history.len() > self.depth {
                    self.board.undo();
                }
            }
        }

        let depth = self.history.len();
        self.apply_move(mv);
        let mut guard = Restore { board: self, depth };
        f(&mut *guard.board)
    }

    /// The winner, if the game is over.
    ///
    /// Only the side to move can lose: if it has no legal move while its
    /// opponent still has one, the opponent wins.
    pub fn winner(&self) -> Option<Color> {
        let mover = self.turn;
        if !self.has_legal_move(mover) && self.has_legal_move(mover.other()) {
            Some(mover.other())
        } else {
            None
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..SIZE).rev() {
            f.write_str("   ")?;
            for col in 0..SIZE {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", self.cells[row * SIZE + col].symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
