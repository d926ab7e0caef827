//! Miscellaneous project utilities.

use itertools::Itertools;
use std::fmt::{self, Display, Formatter};
use std::iter::Iterator;

/// Gap between the board grid and the index guide.
const GUTTER: &str = "     ";

/// Format `rows * cols` cells into a ruled grid, with a guide of linear
/// indices printed beside each row.
/// `cell_iter` must yield exactly `rows * cols` items, row-major.
pub fn format_grid<T, I>(rows: usize, cols: usize, mut cell_iter: I, f: &mut Formatter) -> fmt::Result
where
    T: Display,
    I: Iterator<Item = T>,
{
    let label_width = (rows * cols).saturating_sub(1).to_string().len().max(2);
    let ruler = (0..cols).map(|_| "---").join("+");

    for row in 0..rows {
        let mut cells = Vec::with_capacity(cols);
        for _ in 0..cols {
            cells.push(format!(" {} ", cell_iter.next().ok_or(fmt::Error)?));
        }
        let labels = (0..cols)
            .map(|col| format!("{:>3}", format!("{:0w$}", row * cols + col, w = label_width)))
            .join("|");

        write!(f, "{}{}{}", cells.join("|"), GUTTER, labels)?;
        if row + 1 < rows {
            write!(f, "\n{}{}{}\n", ruler, GUTTER, ruler)?;
        }
    }

    match cell_iter.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}
