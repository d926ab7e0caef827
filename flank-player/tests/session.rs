//! Scripted runs of the whole console program.

use flank_player::cli::Options;
use flank_player::{session, Console, PlayError};

fn seeded(seed: u64) -> Options {
    Options {
        seed: Some(seed),
        ..Options::default()
    }
}

#[test]
fn computer_match_then_quit() {
    let (mut console, transcript) = Console::scripted("Ann\n2\nBo\n2\nn\n");
    session::run(&mut console, &seeded(5)).unwrap();

    let output = transcript.contents();
    assert!(output.starts_with("Enter Player 1's name:\n"));
    assert!(output.contains("Enter Player 2's name:"));
    assert!(output.contains("Current score is: \nAnn (BLACK): 2\nBo (WHITE): 2"));
    assert!(output.contains("Player Ann played: "));
    assert!(output.contains("Game over. Player : ") || output.contains("Game was draw"));
    assert!(output.contains("Would you like to play a new game (Y/N)."));
    assert!(output.ends_with("Thanks for playing, goodbye!\n"));
}

#[test]
fn rematch_loops_without_recursion() {
    let script = "Ann\n2\nBo\n2\nmaybe\ny\nCy\n2\nDee\n2\nN\n";
    let (mut console, transcript) = Console::scripted(script);
    session::run(&mut console, &seeded(9)).unwrap();

    let output = transcript.contents();
    assert!(output.contains("Please enter y/n"));
    assert_eq!(output.matches("Would you like to play a new game (Y/N).").count(), 2);
    assert!(output.contains("Player Cy played: "));
    assert_eq!(output.matches("Thanks for playing, goodbye!").count(), 1);
}

#[test]
fn same_seed_same_transcript() {
    let play = |seed| {
        let (mut console, transcript) = Console::scripted("Ann\n2\nBo\n2\nn\n");
        session::run(&mut console, &seeded(seed)).unwrap();
        transcript.contents()
    };
    assert_eq!(play(11), play(11));
}

#[test]
fn closed_input_stops_the_session() {
    let (mut console, _) = Console::scripted("Ann\n1\nBo\n2\n19\n");
    match session::run(&mut console, &seeded(1)) {
        Err(PlayError::InputClosed) => {}
        other => panic!("expected InputClosed, got {:?}", other),
    }
}
