//! Text forms for moves: `<from>-<to>(<spear>)`, e.g. `a4-c4(e6)`.

use std::fmt;
use std::str::FromStr;

use crate::{board::Board, error::*, square::Square, types::Move};

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}({})", self.from, self.to, self.spear)
    }
}

impl FromStr for Move {
    type Err = AmazonsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_move(s)
    }
}

/// Text form of `mv`, same as its `Display`.
pub fn move_to_text(mv: Move) -> String {
    mv.to_string()
}

/// Parses `<from>-<to>(<spear>)`. Surrounding whitespace is ignored; the
/// squares need not form a queen move (use [`parse_legal_move`] for that).
pub fn parse_move(txt: &str) -> AmazonsResult<Move> {
    let t = txt.trim();
    let bad = || AmazonsError::InvalidNotation {
        text: txt.to_string(),
    };

    let (from, rest) = t.split_once('-').ok_or_else(bad)?;
    let (to, rest) = rest.split_once('(').ok_or_else(bad)?;
    let spear = rest.strip_suffix(')').ok_or_else(bad)?;

    let square = |s: &str| s.parse::<Square>().map_err(|_| bad());
    Ok(Move::new(square(from)?, square(to)?, square(spear)?))
}

/// True iff `txt` has the shape of a move, legal or not.
pub fn is_grammatical_move(txt: &str) -> bool {
    parse_move(txt).is_ok()
}

/// Parses `txt` and checks it against `board`.
pub fn parse_legal_move(board: &Board, txt: &str) -> AmazonsResult<Move> {
    let mv = parse_move(txt)?;
    if board.is_legal(mv) && board.get(mv.from) == board.turn().piece() {
        Ok(mv)
    } else {
        Err(AmazonsError::IllegalMove { mv })
    }
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
