use std::fmt;

use crate::square::Square;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
    /// The board marker for this side's queens.
    pub fn piece(self) -> Piece {
        match self {
            Color::White => Piece::White,
            Color::Black => Piece::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::White => "white",
            Color::Black => "black",
        })
    }
}

/// Contents of a board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Piece {
    #[default]
    Empty,
    White,
    Black,
    Spear,
}

impl Piece {
    /// The side owning this marker, if it is a queen.
    pub fn color(self) -> Option<Color> {
        match self {
            Piece::White => Some(Color::White),
            Piece::Black => Some(Color::Black),
            Piece::Empty | Piece::Spear => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Piece::Empty
    }

    /// Single-character form used by the board dump.
    pub fn symbol(self) -> char {
        match self {
            Piece::Empty => '-',
            Piece::White => 'W',
            Piece::Black => 'B',
            Piece::Spear => 'S',
        }
    }

    pub fn from_symbol(c: char) -> Option<Piece> {
        match c {
            '-' => Some(Piece::Empty),
            'W' => Some(Piece::White),
            'B' => Some(Piece::Black),
            'S' => Some(Piece::Spear),
            _ => None,
        }
    }
}

impl From<Color> for Piece {
    fn from(c: Color) -> Self {
        c.piece()
    }
}

/// A queen move `from -> to` followed by a spear thrown from `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub spear: Square,
}

impl Move {
    pub fn new(from: Square, to: Square, spear: Square) -> Self {
        Self { from, to, spear }
    }
}
