//! Code for working with [`Location`]s on the board.

use derive_more::{Display, Error};
use std::fmt::{self, Formatter, Write};

const COLUMN_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A (row, column) coordinate on the board, zero-based, row 0 at the top.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

impl Location {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Convert from a row-major square index on a board `cols` wide.
    #[inline]
    pub fn from_index(index: usize, cols: usize) -> Self {
        Self {
            row: index / cols,
            col: index % cols,
        }
    }

    /// Convert into a row-major square index on a board `cols` wide.
    #[inline]
    pub fn to_index(self, cols: usize) -> usize {
        self.row * cols + self.col
    }
}

impl From<(usize, usize)> for Location {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Convert this [`Location`] into string notation ("D3").
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col_str = COLUMN_LETTERS.chars().nth(self.col).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        write!(f, "{}", self.row + 1)
    }
}

#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from a 1-indexed string notation ("D3", "h8").
/// Bounds are not checked here: the board decides what is on it.
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = COLUMN_LETTERS.find(col_str).ok_or(ParseLocationError)?;
        let row: usize = chars
            .as_str()
            .parse()
            .map_err(|_| ParseLocationError)?;

        if row == 0 {
            return Err(ParseLocationError);
        }

        Ok(Self::new(row - 1, col))
    }
}
