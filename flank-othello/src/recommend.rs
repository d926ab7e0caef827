//! A cheap move recommender for hints and simple computer play.

use crate::game::{Game, Move, Player};
use crate::square::Color;
use tracing::debug;

/// Recommend a move for `color` in `game`.
///
/// Preference order: pass when there is nothing to play; otherwise the first
/// corner (by ascending index) among the legal moves; otherwise the only
/// legal move; otherwise the move capturing the most discs. Ties on capture
/// count go to the move latest in row-major order.
pub fn recommend(game: &Game, color: Color) -> Move {
    let board = game.board();
    let cols = board.cols();
    let moves = game.legal_moves(color);

    if moves.is_empty() {
        debug!(%color, "recommending pass");
        return Move::pass(color);
    }

    if let Some(&corner) = board.corners().iter().find(|&c| moves.contains(c)) {
        debug!(%color, corner, "recommending corner");
        return Move::at_index(corner, cols, color);
    }

    if moves.len() == 1 {
        return Move::at_index(moves[0], cols, color);
    }

    let mut best = Move::at_index(moves[0], cols, color);
    let mut best_captures = 0;
    for &index in moves.iter() {
        let candidate = Move::at_index(index, cols, color);
        // Scored by position alone, like `legal_moves`, so off-turn hints work.
        let captures = game.captures(&candidate).len();
        if captures >= best_captures {
            best_captures = captures;
            best = candidate;
        }
    }

    debug!(%color, best = %best, captures = best_captures, "recommending greedy move");
    best
}

/// Recommend a move for `player`'s color.
pub fn recommend_for(game: &Game, player: &Player) -> Move {
    recommend(game, player.color())
}
