//! "Perft" test: count the number of leaves at a given depth.
//! Exercises move generation, flipping and turn handling together.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::game::{Game, Move};

pub fn run_perft(depth: u64) -> u64 {
    leaves_below(&Game::default(), depth, false)
}

fn leaves_below(game: &Game, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let color = game.turn_color();
    let cols = game.board().cols();
    let all_moves = game.legal_moves(color);
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        let mut next = game.clone();
        next.apply_move(Move::pass(color), true);
        next.switch_turn();
        return leaves_below(&next, depth - 1, true);
    }

    all_moves
        .iter()
        .map(|&index| {
            let mut next = game.clone();
            next.apply_move(Move::at_index(index, cols, color), true);
            next.switch_turn();
            leaves_below(&next, depth - 1, false)
        })
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}
