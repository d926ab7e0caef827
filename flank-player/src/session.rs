//! The console match loop: seat players, play games, offer a rematch.

use crate::agents::{Agent, HumanAgent, RandomAgent};
use crate::cli::Options;
use crate::{Console, PlayError};
use flank_othello::{Color, Game, Outcome};
use itertools::Itertools;
use tracing::{info, warn};

/// Seat order: the first seat plays black.
const SEATS: [Color; 2] = [Color::Black, Color::White];

/// Consecutive rejected moves tolerated from one agent before the match is abandoned.
pub const MAX_REJECTIONS: usize = 3;

fn seat(color: Color) -> usize {
    match color {
        Color::Black => 0,
        Color::White => 1,
    }
}

/// Play matches until the user declines another.
pub fn run(console: &mut Console, options: &Options) -> Result<(), PlayError> {
    let mut match_number: u64 = 0;

    loop {
        let mut agents = seat_agents(console, options, match_number)?;
        let game = Game::new(agents[0].name(), agents[1].name());
        let game = play_match(game, &mut agents, console)?;
        announce(&game, console)?;

        let again = console.choose(
            "Would you like to play a new game (Y/N).",
            &["y", "n"],
            "Please enter y/n",
        )?;
        if again == "n" {
            console.say("Thanks for playing, goodbye!")?;
            return Ok(());
        }
        match_number += 1;
    }
}

/// Ask for each seat's name and kind of player.
pub fn seat_agents(
    console: &mut Console,
    options: &Options,
    match_number: u64,
) -> Result<[Box<dyn Agent>; 2], PlayError> {
    Ok([
        seat_agent(console, options, match_number, SEATS[0])?,
        seat_agent(console, options, match_number, SEATS[1])?,
    ])
}

fn seat_agent(
    console: &mut Console,
    options: &Options,
    match_number: u64,
    color: Color,
) -> Result<Box<dyn Agent>, PlayError> {
    let position = seat(color);
    let name = console.prompt(format!("Enter Player {}'s name:", position + 1))?;
    let kind = console.choose(
        "Please choose 1 if you would like to play with human player or \
         2 if you would like to play with the computer player",
        &["1", "2"],
        "Invalid input. Please enter 1 for a human player or 2 for a computer player.",
    )?;

    if kind == "1" {
        return Ok(Box::new(HumanAgent::new(name, color)));
    }
    Ok(match options.seed {
        // Distinct, reproducible streams per seat and per match.
        Some(seed) => {
            let seed = seed.wrapping_add(2 * match_number + position as u64);
            Box::new(RandomAgent::from_seed(name, color, seed))
        }
        None => Box::new(RandomAgent::from_entropy(name, color)),
    })
}

/// Play `game` to the end with `agents` (black first) and return the final position.
pub fn play_match(
    mut game: Game,
    agents: &mut [Box<dyn Agent>; 2],
    console: &mut Console,
) -> Result<Game, PlayError> {
    info!(
        black = %game.player(Color::Black).name(),
        white = %game.player(Color::White).name(),
        "match started"
    );

    let mut rejections = 0;
    while !game.is_game_over() {
        console.say(game.board())?;
        console.say(format!("Current score is: \n{}", score_lines(&game)))?;

        let color = game.turn_color();
        let moves = game.legal_moves(color);
        let agent = &mut agents[seat(color)];
        if moves.is_empty() {
            console.say("There are no valid moves for you to play. Type -1 to pass your turn.")?;
        } else {
            console.say(format!(
                "{}, enter number for your move(e.g.{}):",
                agent.name(),
                moves
            ))?;
        }

        let mv = agent.decide_move(&game, console)?;
        match game.try_apply(mv) {
            Ok(_) => {
                rejections = 0;
                if let Some(index) = mv.index(game.board().cols()) {
                    console.say(format!("Player {} played: {}.", agent.name(), index))?;
                }
                game.switch_turn();
            }
            Err(err) => {
                warn!(player = %agent.name(), %mv, %err, "agent chose a rejected move");
                console.say(err)?;
                rejections += 1;
                if rejections >= MAX_REJECTIONS {
                    return Err(PlayError::RejectedMove(err));
                }
            }
        }
    }

    Ok(game)
}

fn score_lines(game: &Game) -> String {
    game.players()
        .iter()
        .map(|player| format!("{} ({}): {}", player.name(), player.color(), game.score_of(player)))
        .join("\n")
}

/// Print the result of a finished game.
pub fn announce(game: &Game, console: &mut Console) -> Result<(), PlayError> {
    match game.outcome() {
        Some(Outcome::Draw) => {
            info!("match drawn");
            console.say("Game was draw")
        }
        Some(Outcome::Win(color)) => {
            let winner = game.player(color);
            info!(winner = %winner.name(), "match won");
            console.say(game.board())?;
            console.say(format!(
                "Game over. Player : {} ({}) won.",
                winner.name(),
                winner.color()
            ))?;
            console.say(format!(
                "Score of the game finished at: \n{}",
                score_lines(game)
            ))
        }
        None => Ok(()),
    }
}
