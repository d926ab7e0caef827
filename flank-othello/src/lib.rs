//! `flank-othello` is a small, safe Othello rules engine for console front ends.
//!
//! The crate is layered bottom-up:
//!
//!  - [`Square`] and [`Color`] describe what a cell holds and who owns a disc.
//!  - [`Board`] is a checked grid of squares with index conversion, counting and rendering.
//!    Out-of-range access returns a [`BoardError`] instead of wrapping.
//!  - [`Game`] owns a board and two [`Player`]s and implements the rules:
//!    the eight-direction capture scan, move legality and application, passing,
//!    turn switching and end-of-game detection.
//!  - [`recommend()`] picks a move for a color by a capture-count heuristic.

pub mod test_utils;

mod board;
mod game;
mod location;
mod recommend;
mod square;
mod utils;

pub use board::*;
pub use game::*;
pub use location::*;
pub use recommend::*;
pub use square::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
