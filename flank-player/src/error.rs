use derive_more::{Display, Error};
use flank_othello::MoveError;
use std::io;

/// Failures talking to the console, or an agent that keeps choosing rejected moves.
/// A human's bad input is never an error: the agent re-prompts.
#[derive(Debug, Display, Error)]
pub enum PlayError {
    #[display(fmt = "console I/O failed: {}", _0)]
    Io(#[error(source)] io::Error),
    #[display(fmt = "input closed")]
    InputClosed,
    #[display(fmt = "agent kept choosing rejected moves: {}", _0)]
    RejectedMove(#[error(source)] MoveError),
}

impl From<io::Error> for PlayError {
    fn from(err: io::Error) -> Self {
        PlayError::Io(err)
    }
}
