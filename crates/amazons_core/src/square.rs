//! Board geometry: square identity and queen-move vector math.

use std::fmt;
use std::str::FromStr;

use crate::error::{AmazonsError, AmazonsResult};

/// Number of squares on a side of the board.
pub const SIZE: usize = 10;
/// Total number of squares.
pub const NUM_SQUARES: usize = SIZE * SIZE;

/// Unit vectors `(dcol, drow)` for the eight queen directions.
/// 0 is north, increasing clockwise to 7 (northwest).
pub const DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

const COLUMNS: &[u8; SIZE] = b"abcdefghij";

/// One of the 100 cells, numbered from 0 (a1, lower-left) to 99 (j10).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Square at `(col, row)`, both 0-indexed from the bottom-left.
    pub fn new(col: i32, row: i32) -> AmazonsResult<Self> {
        Self::at(col, row).ok_or(AmazonsError::InvalidSquare { col, row })
    }

    /// Square with index `col + 10 * row`.
    pub fn from_index(index: usize) -> AmazonsResult<Self> {
        if index < NUM_SQUARES {
            Ok(Square(index as u8))
        } else {
            Err(AmazonsError::InvalidIndex { index })
        }
    }

    /// Like [`Square::new`] but for probing: `None` off the board.
    #[inline]
    pub fn at(col: i32, row: i32) -> Option<Self> {
        if Self::exists(col, row) {
            Some(Square((row as usize * SIZE + col as usize) as u8))
        } else {
            None
        }
    }

    /// True iff `(col, row)` lies on the board.
    #[inline]
    pub fn exists(col: i32, row: i32) -> bool {
        (0..SIZE as i32).contains(&col) && (0..SIZE as i32).contains(&row)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn col(self) -> i32 {
        (self.0 as usize % SIZE) as i32
    }

    #[inline]
    pub fn row(self) -> i32 {
        (self.0 as usize / SIZE) as i32
    }

    /// All squares in ascending index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_SQUARES as u8).map(Square)
    }

    /// The square `steps` squares away in direction `dir`, or `None` if that
    /// leaves the board or `dir` is not in `0..8`.
    #[inline]
    pub fn queen_step(self, dir: usize, steps: i32) -> Option<Square> {
        let (dc, dr) = *DIRECTIONS.get(dir)?;
        Square::at(
            self.col() + dc as i32 * steps,
            self.row() + dr as i32 * steps,
        )
    }

    /// True iff `self -> to` runs along a row, column or diagonal.
    pub fn is_queen_move(self, to: Square) -> bool {
        let dc = (to.col() - self.col()).abs();
        let dr = (to.row() - self.row()).abs();
        self != to && (dc == 0 || dr == 0 || dc == dr)
    }

    /// Direction index of the queen move `self -> to`.
    ///
    /// # Panics
    /// If `self -> to` is not a queen move.
    pub fn direction(self, to: Square) -> usize {
        assert!(
            self.is_queen_move(to),
            "{self}-{to} is not a queen move"
        );
        let dc = (to.col() - self.col()).signum() as i8;
        let dr = (to.row() - self.row()).signum() as i8;
        DIRECTIONS
            .iter()
            .position(|&d| d == (dc, dr))
            .expect("every queen move has a unit direction")
    }

    /// Number of single steps between `self` and `to` along a queen line.
    pub fn distance(self, to: Square) -> i32 {
        (to.col() - self.col())
            .abs()
            .max((to.row() - self.row()).abs())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = COLUMNS[self.col() as usize] as char;
        write!(f, "{}{}", c, self.row() + 1)
    }
}

impl FromStr for Square {
    type Err = AmazonsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || AmazonsError::InvalidNotation {
            text: s.to_string(),
        };
        let b = s.as_bytes();
        if b.len() < 2 || b.len() > 3 {
            return Err(bad());
        }
        let col = COLUMNS.iter().position(|&c| c == b[0]).ok_or_else(bad)?;
        let digits = &s[1..];
        if digits.starts_with('0') || !digits.bytes().all(|d| d.is_ascii_digit()) {
            return Err(bad());
        }
        let row: i32 = digits.parse().map_err(|_| bad())?;
        Square::at(col as i32, row - 1).ok_or_else(bad)
    }
}

#[cfg(test)]
#[path = "square_tests.rs"]
mod square_tests;
