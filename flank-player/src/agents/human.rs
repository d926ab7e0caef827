//! [`Agent`] for a person typing at the console.

use super::Agent;
use crate::{Console, PlayError};
use flank_othello::{recommend, Color, Game, Location, Move};
use tracing::debug;

const PASS_INPUT: i64 = -1;

pub struct HumanAgent {
    name: String,
    color: Color,
}

impl HumanAgent {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    /// Turn a line of input into a linear index.
    /// Accepts a number (`19`, `-1`) or board notation (`D3`).
    fn parse_index(input: &str, cols: usize) -> Option<i64> {
        if let Ok(number) = input.parse::<i64>() {
            return Some(number);
        }
        let loc: Location = input.parse().ok()?;
        if loc.col >= cols {
            return None;
        }
        Some(loc.to_index(cols) as i64)
    }
}

impl Agent for HumanAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn color(&self) -> Color {
        self.color
    }

    fn decide_move(&mut self, game: &Game, console: &mut Console) -> Result<Move, PlayError> {
        let board = game.board();
        let cols = board.cols();

        loop {
            let input =
                console.prompt("Type best if you want to get the best available move")?;

            if input.eq_ignore_ascii_case("best") {
                let best = recommend(game, self.color);
                debug!(player = %self.name, %best, "hint requested");
                match best.index(cols) {
                    Some(index) => console.say(format!("Your best move is: {}", index))?,
                    None => console.say("Your best move is to pass your turn! So -1!")?,
                }
                continue;
            }

            let number = match Self::parse_index(&input, cols) {
                Some(number) => number,
                None => {
                    console.say("Please enter a valid input or type best for the best move!")?;
                    continue;
                }
            };

            if number == PASS_INPUT {
                if game.legal_moves(self.color).is_empty() {
                    return Ok(Move::pass(self.color));
                }
                console.say("There are valid moves to play. -1 represents a pass turn.")?;
                continue;
            }

            if number < 0 || number as usize >= board.len() {
                console.say("Invalid index, please try again!")?;
                continue;
            }

            let mv = Move::at_index(number as usize, cols, self.color);
            if game.is_valid_move(&mv) {
                return Ok(mv);
            }
            console.say("Move is not valid!")?;
        }
    }
}
