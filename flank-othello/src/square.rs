//! Disc colors and the contents of a single board cell.

use derive_more::Display;
use std::fmt;

/// One of the two sides in a game. Black moves first.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum Color {
    #[display(fmt = "BLACK")]
    Black,
    #[display(fmt = "WHITE")]
    White,
}

impl Default for Color {
    /// Gets the starting color (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    /// Gets the other color.
    fn not(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// The contents of one cell on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Square {
    Empty,
    Black,
    White,
}

impl Default for Square {
    fn default() -> Self {
        Self::Empty
    }
}

impl Square {
    /// Gets the square holding the opposing disc. Empty stays empty.
    pub fn opposite(self) -> Self {
        match self {
            Square::Black => Square::White,
            Square::White => Square::Black,
            Square::Empty => Square::Empty,
        }
    }

    /// The color of the disc on this square, if any.
    pub fn color(self) -> Option<Color> {
        match self {
            Square::Black => Some(Color::Black),
            Square::White => Some(Color::White),
            Square::Empty => None,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

impl From<Color> for Square {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Square::Black,
            Color::White => Square::White,
        }
    }
}

/// Single-character cell form used by the board renderer.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Square::Black => "B",
            Square::White => "W",
            Square::Empty => " ",
        })
    }
}
