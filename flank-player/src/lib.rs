//! `flank-player` drives games of `flank-othello` from a terminal.
//!
//! Moves are decided by [`Agent`]s: a [`HumanAgent`] reading the console or a
//! [`RandomAgent`] sampling legal moves. All console traffic goes through an
//! explicit [`Console`] value, so whole sessions can be scripted in tests.

pub mod agents;
pub mod cli;
pub mod session;

mod console;
mod error;

pub use agents::{Agent, HumanAgent, RandomAgent};
pub use console::{Console, Transcript};
pub use error::PlayError;
