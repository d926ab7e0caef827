//! [`Agent`] that plays a uniformly random legal move.

use super::Agent;
use crate::{Console, PlayError};
use flank_othello::{Color, Game, Move};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

pub struct RandomAgent<R: Rng = StdRng> {
    name: String,
    color: Color,
    rng: R,
}

impl RandomAgent<StdRng> {
    /// A reproducible agent: the same seed always picks the same moves.
    pub fn from_seed(name: impl Into<String>, color: Color, seed: u64) -> Self {
        Self::new(name, color, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(name: impl Into<String>, color: Color) -> Self {
        Self::new(name, color, StdRng::from_entropy())
    }
}

impl<R: Rng> RandomAgent<R> {
    pub fn new(name: impl Into<String>, color: Color, rng: R) -> Self {
        Self {
            name: name.into(),
            color,
            rng,
        }
    }
}

impl<R: Rng> Agent for RandomAgent<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn color(&self) -> Color {
        self.color
    }

    fn decide_move(&mut self, game: &Game, console: &mut Console) -> Result<Move, PlayError> {
        let moves = game.legal_moves(self.color);
        match moves.choose(&mut self.rng) {
            Some(&index) => {
                debug!(player = %self.name, index, "random move");
                Ok(Move::at_index(index, game.board().cols(), self.color))
            }
            None => {
                console.say("Should pass")?;
                Ok(Move::pass(self.color))
            }
        }
    }
}
