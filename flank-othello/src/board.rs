//! A checked grid of [`Square`]s.
//!
//! Cells are stored row-major in a flat vector, so a cell's position in the
//! vector is also its linear index. Every coordinate-taking operation checks
//! bounds and reports [`BoardError::OutOfBounds`] instead of touching memory
//! off the grid.

use crate::location::Location;
use crate::square::{Color, Square};
use crate::{utils, EDGE_LENGTH};
use arrayvec::ArrayVec;
use derive_more::{Display, Error};
use std::fmt;

/// An Othello board: `rows * cols` squares.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Square>,
}

#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
pub enum BoardError {
    #[display(fmt = "location ({}, {}) is off the board", row, col)]
    OutOfBounds { row: usize, col: usize },
    #[display(fmt = "index {} is off the board", index)]
    IndexOutOfBounds { index: usize },
}

impl Default for Board {
    /// The standard 8x8 starting position.
    fn default() -> Self {
        Self::new(EDGE_LENGTH, EDGE_LENGTH)
    }
}

impl Board {
    /// Build a starting board: empty except for the four centre discs,
    /// white on the main diagonal and black on the anti-diagonal.
    ///
    /// Panics if either dimension is odd or smaller than 2, since such a
    /// board has no centre square block.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows >= 2 && cols >= 2 && rows % 2 == 0 && cols % 2 == 0);
        let mut board = Self::empty(rows, cols);
        let (mid_row, mid_col) = (rows / 2, cols / 2);

        let centre = [
            (mid_row - 1, mid_col - 1, Color::White),
            (mid_row - 1, mid_col, Color::Black),
            (mid_row, mid_col - 1, Color::Black),
            (mid_row, mid_col, Color::White),
        ];
        for &(row, col, color) in centre.iter() {
            let index = board.to_index(row, col);
            board.cells[index] = color.into();
        }
        board
    }

    /// Build a board with every cell empty, for constructing contrived positions.
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Square::Empty; rows * cols],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns whether `(row, col)` lies on the board.
    /// Takes signed coordinates so that direction scans can step off any edge.
    #[inline]
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && (row as usize) < self.rows && col >= 0 && (col as usize) < self.cols
    }

    /// Convert row and column coordinates into a row-major index.
    /// Does not check bounds.
    #[inline]
    pub fn to_index(&self, row: usize, col: usize) -> usize {
        Location::new(row, col).to_index(self.cols)
    }

    /// Convert a row-major index into `(row, col)`.
    /// Does not check bounds.
    #[inline]
    pub fn to_coords(&self, index: usize) -> (usize, usize) {
        let loc = Location::from_index(index, self.cols);
        (loc.row, loc.col)
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if row < self.rows && col < self.cols {
            Ok(self.to_index(row, col))
        } else {
            Err(BoardError::OutOfBounds { row, col })
        }
    }

    /// Get the square at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Square, BoardError> {
        let index = self.checked_index(row, col)?;
        Ok(self.cells[index])
    }

    /// Get the square at a row-major index.
    pub fn get_index(&self, index: usize) -> Result<Square, BoardError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(BoardError::IndexOutOfBounds { index })
    }

    /// Put a `color` disc at `(row, col)`. Does nothing if the cell is occupied.
    pub fn place(&mut self, row: usize, col: usize, color: Color) -> Result<(), BoardError> {
        let index = self.checked_index(row, col)?;
        if self.cells[index].is_empty() {
            self.cells[index] = color.into();
        }
        Ok(())
    }

    /// Force the cell at `(row, col)` back to empty.
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        let index = self.checked_index(row, col)?;
        self.cells[index] = Square::Empty;
        Ok(())
    }

    /// Turn over the disc at `index`. Empty cells stay empty.
    pub fn flip(&mut self, index: usize) -> Result<(), BoardError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(BoardError::IndexOutOfBounds { index })?;
        *cell = cell.opposite();
        Ok(())
    }

    /// Returns whether no cell is empty.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_empty())
    }

    /// Count the cells holding `square`.
    pub fn count(&self, square: Square) -> usize {
        self.cells.iter().filter(|&&cell| cell == square).count()
    }

    /// Count the discs of one color.
    #[inline]
    pub fn count_discs(&self, color: Color) -> usize {
        self.count(color.into())
    }

    /// Indices of the four corners, ascending. Empty for a board with no cells.
    pub fn corners(&self) -> ArrayVec<[usize; 4]> {
        let mut corners = ArrayVec::new();
        if self.cells.is_empty() {
            return corners;
        }
        let last_row = self.rows - 1;
        let last_col = self.cols - 1;
        corners.push(self.to_index(0, 0));
        corners.push(self.to_index(0, last_col));
        corners.push(self.to_index(last_row, 0));
        corners.push(self.to_index(last_row, last_col));
        corners
    }

    /// Iterate over all squares, row-major.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.cells.iter().copied()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(self.rows, self.cols, self.squares(), f)
    }
}

#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "invalid board diagram")]
pub struct ParseBoardError;

/// Parse a board diagram: one line per row, `B`/`X` for black, `W`/`O` for
/// white, `.`/`-` for empty. Whitespace inside a line is ignored and blank
/// lines are skipped.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(diagram: &str) -> Result<Self, Self::Err> {
        let mut rows = 0;
        let mut cols = None;
        let mut cells = Vec::new();

        for line in diagram.lines() {
            let row: Vec<Square> = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| match c.to_ascii_uppercase() {
                    'B' | 'X' => Ok(Square::Black),
                    'W' | 'O' => Ok(Square::White),
                    '.' | '-' => Ok(Square::Empty),
                    _ => Err(ParseBoardError),
                })
                .collect::<Result<_, _>>()?;

            if row.is_empty() {
                continue;
            }

            match cols {
                None => cols = Some(row.len()),
                Some(width) if width != row.len() => return Err(ParseBoardError),
                Some(_) => {}
            }
            rows += 1;
            cells.extend(row);
        }

        let cols = cols.ok_or(ParseBoardError)?;
        Ok(Self { rows, cols, cells })
    }
}
