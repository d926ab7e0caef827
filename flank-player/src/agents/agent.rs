use crate::{Console, PlayError};
use flank_othello::{Color, Game, Move};

/// A player-facing interface to a way of choosing moves.
pub trait Agent {
    fn name(&self) -> &str;

    /// The color this agent plays for the whole game.
    fn color(&self) -> Color;

    /// Choose a move for [`Agent::color`] in `game`. Only called on this agent's turn.
    /// The returned move is legal: a valid placement, or a pass when there is none.
    fn decide_move(&mut self, game: &Game, console: &mut Console) -> Result<Move, PlayError>;
}
