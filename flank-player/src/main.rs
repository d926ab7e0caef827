use clap::Parser;
use flank_player::cli::{self, Options};
use flank_player::{session, Console, PlayError};
use tracing::info;

fn main() -> Result<(), PlayError> {
    let options = Options::parse();
    cli::init_logging(&options.log);
    info!(seed = ?options.seed, "starting");

    let mut console = Console::stdio();
    console.say("Welcome to the othello game")?;

    match session::run(&mut console, &options) {
        // Closing stdin mid-game just quits.
        Err(PlayError::InputClosed) => Ok(()),
        result => result,
    }
}
