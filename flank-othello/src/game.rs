//! Implements game-level Othello logic.
//!
//! [`Game`] is the only way the board changes during play: moves go through
//! [`Game::try_apply`] (or the lenient [`Game::apply_move`]) and turns change
//! through [`Game::switch_turn`]. Every query here is read-only.

use crate::board::{Board, BoardError};
use crate::location::Location;
use crate::square::{Color, Square};
use derive_more::{Deref, Display, Error, From, Into};
use itertools::Itertools;
use std::fmt;
use tracing::{debug, info, warn};

/// Unit steps for the capture scan, in the order flips are accumulated:
/// right, left, up, down, then up-right, up-left, down-right, down-left.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (-1, -1),
    (1, 1),
    (1, -1),
];

/// A named participant, bound to one color for the whole game.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Player {
    name: String,
    color: Color,
}

impl Player {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}\nColor: {}", self.name, self.color)
    }
}

/// What a move does: put a disc somewhere, or decline to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Place(Location),
    Pass,
}

impl From<Location> for Action {
    fn from(loc: Location) -> Self {
        Self::Place(loc)
    }
}

/// An action taken by one color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub color: Color,
    pub action: Action,
}

impl Move {
    /// A placement at `(row, col)`.
    pub fn place(row: usize, col: usize, color: Color) -> Self {
        Self {
            color,
            action: Action::Place(Location::new(row, col)),
        }
    }

    /// A placement at a linear index on a board `cols` wide.
    pub fn at_index(index: usize, cols: usize, color: Color) -> Self {
        Self {
            color,
            action: Action::Place(Location::from_index(index, cols)),
        }
    }

    pub fn pass(color: Color) -> Self {
        Self {
            color,
            action: Action::Pass,
        }
    }

    #[inline]
    pub fn is_pass(&self) -> bool {
        self.action == Action::Pass
    }

    /// The target location, or `None` for a pass.
    #[inline]
    pub fn location(&self) -> Option<Location> {
        match self.action {
            Action::Place(loc) => Some(loc),
            Action::Pass => None,
        }
    }

    /// The linear index of the target on a board `cols` wide, or `None` for a pass.
    pub fn index(&self, cols: usize) -> Option<usize> {
        self.location().map(|loc| loc.to_index(cols))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.action {
            Action::Place(loc) => write!(f, "{} {}", self.color, loc),
            Action::Pass => write!(f, "{} PASS", self.color),
        }
    }
}

/// Row-major ascending linear indices of legal placements.
#[derive(Clone, Debug, Default, PartialEq, Eq, From, Into, Deref)]
pub struct MoveList(Vec<usize>);

impl fmt::Display for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().join(", "))
    }
}

/// Why a move was rejected. The game is unchanged whenever one of these is returned.
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
pub enum MoveError {
    #[display(fmt = "move is off the board")]
    OutOfBounds,
    #[display(fmt = "square is already occupied")]
    Occupied,
    #[display(fmt = "it is not this color's turn")]
    WrongTurn,
    #[display(fmt = "move captures no discs")]
    NoCaptures,
    #[display(fmt = "cannot pass turn because there are valid moves to be played")]
    IllegalPass,
    #[display(fmt = "board error: {}", _0)]
    Board(#[error(source)] BoardError),
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        MoveError::Board(err)
    }
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win(Color),
    Draw,
}

/// The complete state of an Othello game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    turn: Color,
}

impl Game {
    /// Start a standard game. The first player takes black and moves first.
    pub fn new(black_name: impl Into<String>, white_name: impl Into<String>) -> Self {
        Self::from_board(Board::default(), black_name, white_name, Color::Black)
    }

    /// Build a game around an existing position, with `turn` to move.
    pub fn from_board(
        board: Board,
        black_name: impl Into<String>,
        white_name: impl Into<String>,
        turn: Color,
    ) -> Self {
        Self {
            board,
            players: [
                Player::new(black_name, Color::Black),
                Player::new(white_name, Color::White),
            ],
            turn,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The player holding `color`.
    pub fn player(&self, color: Color) -> &Player {
        match color {
            Color::Black => &self.players[0],
            Color::White => &self.players[1],
        }
    }

    /// The player whose turn it is.
    #[inline]
    pub fn turn(&self) -> &Player {
        self.player(self.turn)
    }

    #[inline]
    pub fn turn_color(&self) -> Color {
        self.turn
    }

    /// Hand the turn to the other player. Does not check that the outgoing player moved.
    pub fn switch_turn(&mut self) {
        self.turn = !self.turn;
        debug!(turn = %self.turn, "switched turn");
    }

    /// Walk from `(row, col)` along `(d_row, d_col)` and collect the opposing
    /// discs that a `color` disc at the origin would capture in that direction.
    fn scan_direction(
        &self,
        row: usize,
        col: usize,
        (d_row, d_col): (isize, isize),
        color: Color,
    ) -> Vec<usize> {
        let own = Square::from(color);
        let opposing = own.opposite();
        let mut run = Vec::new();

        let mut r = row as isize + d_row;
        let mut c = col as isize + d_col;
        while self.board.in_bounds(r, c) {
            let index = self.board.to_index(r as usize, c as usize);
            match self.board.get_index(index) {
                Ok(square) if square == opposing => run.push(index),
                Ok(square) if square == own => return run,
                _ => break,
            }
            r += d_row;
            c += d_col;
        }

        // Hit an empty cell or ran off the edge before closing the line.
        Vec::new()
    }

    /// The discs a placement would flip, in direction order, ignoring whose
    /// turn it is. Empty for passes, off-board targets and occupied targets.
    pub fn captures(&self, mv: &Move) -> Vec<usize> {
        let loc = match mv.location() {
            Some(loc) => loc,
            None => return Vec::new(),
        };
        match self.board.get(loc.row, loc.col) {
            Ok(Square::Empty) => {}
            _ => return Vec::new(),
        }

        DIRECTIONS
            .iter()
            .flat_map(|&dir| self.scan_direction(loc.row, loc.col, dir, mv.color))
            .collect()
    }

    fn has_captures(&self, row: usize, col: usize, color: Color) -> bool {
        DIRECTIONS
            .iter()
            .any(|&dir| !self.scan_direction(row, col, dir, color).is_empty())
    }

    /// Check a placement and report the first rule it breaks.
    fn check_placement(&self, mv: &Move) -> Result<Location, MoveError> {
        let loc = mv.location().ok_or(MoveError::OutOfBounds)?;
        if !self.board.in_bounds(loc.row as isize, loc.col as isize) {
            return Err(MoveError::OutOfBounds);
        }
        if !self.board.get(loc.row, loc.col)?.is_empty() {
            return Err(MoveError::Occupied);
        }
        if mv.color != self.turn {
            return Err(MoveError::WrongTurn);
        }
        if !self.has_captures(loc.row, loc.col, mv.color) {
            return Err(MoveError::NoCaptures);
        }
        Ok(loc)
    }

    /// Returns whether `mv` is a legal placement for the color to move.
    /// Passes are never "valid moves"; see [`Game::try_apply`] for pass rules.
    pub fn is_valid_move(&self, mv: &Move) -> bool {
        !mv.is_pass() && self.check_placement(mv).is_ok()
    }

    /// Linear indices, ascending, of every cell where `color` could place a
    /// disc with at least one capture. Does not depend on whose turn it is.
    pub fn legal_moves(&self, color: Color) -> MoveList {
        let cols = self.board.cols();
        (0..self.board.len())
            .filter(|&index| {
                let (row, col) = (index / cols, index % cols);
                self.board.get_index(index) == Ok(Square::Empty)
                    && self.has_captures(row, col, color)
            })
            .collect::<Vec<_>>()
            .into()
    }

    pub fn has_legal_move(&self, color: Color) -> bool {
        let cols = self.board.cols();
        (0..self.board.len()).any(|index| {
            self.board.get_index(index) == Ok(Square::Empty)
                && self.has_captures(index / cols, index % cols, color)
        })
    }

    /// How many discs `mv` would capture if played now; 0 if it is not legal.
    /// Never changes the game.
    pub fn evaluate_capture(&self, mv: &Move) -> usize {
        if self.is_valid_move(mv) {
            self.captures(mv).len()
        } else {
            0
        }
    }

    /// Play `mv` and return how many discs it captured.
    ///
    /// A pass is only accepted from the color to move when it has no legal
    /// placement, and captures nothing. On error nothing changes.
    pub fn try_apply(&mut self, mv: Move) -> Result<usize, MoveError> {
        if mv.is_pass() {
            if mv.color != self.turn {
                return Err(MoveError::WrongTurn);
            }
            if self.has_legal_move(mv.color) {
                return Err(MoveError::IllegalPass);
            }
            info!(player = %self.player(mv.color).name(), color = %mv.color, "player passed");
            return Ok(0);
        }

        let loc = self.check_placement(&mv)?;
        let flips = self.captures(&mv);
        for &index in flips.iter() {
            self.board.flip(index)?;
        }
        self.board.place(loc.row, loc.col, mv.color)?;

        info!(
            player = %self.player(mv.color).name(),
            color = %mv.color,
            index = loc.to_index(self.board.cols()),
            captured = flips.len(),
            "player played"
        );
        Ok(flips.len())
    }

    /// Apply or simulate `mv`, returning the number of discs captured.
    ///
    /// With `commit` set this plays the move; rejected moves (including
    /// illegal passes) capture 0 and leave the game untouched. Without
    /// `commit` this is [`Game::evaluate_capture`].
    pub fn apply_move(&mut self, mv: Move, commit: bool) -> usize {
        if !commit {
            return self.evaluate_capture(&mv);
        }

        match self.try_apply(mv) {
            Ok(captured) => captured,
            Err(MoveError::IllegalPass) => {
                warn!(color = %mv.color, "{}", MoveError::IllegalPass);
                0
            }
            Err(err) => {
                debug!(%mv, %err, "rejected move");
                0
            }
        }
    }

    /// The game ends when the board is full or neither color can move.
    pub fn is_game_over(&self) -> bool {
        self.board.is_full()
            || (!self.has_legal_move(Color::Black) && !self.has_legal_move(Color::White))
    }

    pub fn is_draw(&self) -> bool {
        self.is_game_over() && self.score(Color::Black) == self.score(Color::White)
    }

    /// The player with strictly more discs, or `None` on equal counts.
    /// This does not check that the game is over; see [`Game::outcome`].
    pub fn winner(&self) -> Option<&Player> {
        let black = self.score(Color::Black);
        let white = self.score(Color::White);
        if black > white {
            Some(self.player(Color::Black))
        } else if white > black {
            Some(self.player(Color::White))
        } else {
            None
        }
    }

    /// `None` while the game is running.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_game_over() {
            return None;
        }
        Some(match self.winner() {
            Some(player) => Outcome::Win(player.color()),
            None => Outcome::Draw,
        })
    }

    /// Number of discs `color` has on the board.
    #[inline]
    pub fn score(&self, color: Color) -> usize {
        self.board.count_discs(color)
    }

    #[inline]
    pub fn score_of(&self, player: &Player) -> usize {
        self.score(player.color())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new("Black", "White")
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(
            f,
            "{} to move ({}: {}, {}: {})",
            self.turn,
            Color::Black,
            self.score(Color::Black),
            Color::White,
            self.score(Color::White)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn game_from(diagram: &str, turn: Color) -> Game {
        Game::from_board(Board::from_str(diagram).unwrap(), "Black", "White", turn)
    }

    #[test]
    fn opening_moves() {
        let game = Game::default();
        assert_eq!(*game.legal_moves(Color::Black), vec![19, 26, 37, 44]);
        assert_eq!(*game.legal_moves(Color::White), vec![20, 29, 34, 43]);
    }

    #[test]
    fn opening_move_flips_one() {
        let mut game = Game::default();
        let captured = game.apply_move(Move::place(2, 3, Color::Black), true);

        assert_eq!(captured, 1);
        assert_eq!(game.board().get(3, 3), Ok(Square::Black));
        assert_eq!(game.board().get(2, 3), Ok(Square::Black));
        assert_eq!(game.score(Color::Black), 4);
        assert_eq!(game.score(Color::White), 1);
    }

    #[test]
    fn scan_stops_on_empty_and_edge() {
        // Row 0: black at col 0, whites to the edge: no capture rightwards from col 0.
        let game = game_from(
            "
            .WWW
            ....
            ....
            B...
            ",
            Color::Black,
        );
        assert!(game.scan_direction(0, 0, (0, 1), Color::Black).is_empty());
        // Empty gap between the run and the origin.
        assert!(game.scan_direction(2, 0, (-1, 0), Color::Black).is_empty());
    }

    #[test]
    fn scan_needs_opposing_run() {
        let game = game_from(
            "
            .BW.
            ....
            ....
            ....
            ",
            Color::Black,
        );
        // Adjacent own disc: nothing between, no capture.
        assert!(game.scan_direction(0, 0, (0, 1), Color::Black).is_empty());
        assert_eq!(game.scan_direction(0, 3, (0, -1), Color::Black), vec![2]);
    }

    #[test]
    fn captures_follow_direction_order() {
        // Black at the centre captures right, left, up and down-left.
        let game = game_from(
            "
            ..B..
            ..W..
            BW.WB
            .W...
            B....
            ",
            Color::Black,
        );
        let mv = Move::place(2, 2, Color::Black);
        assert_eq!(game.captures(&mv), vec![13, 11, 7, 16]);
        assert_eq!(game.evaluate_capture(&mv), 4);
    }

    #[test]
    fn direction_runs_are_disjoint() {
        let game = game_from(
            "
            B.B.B
            .WWW.
            BW.WB
            .WWW.
            B.B.B
            ",
            Color::Black,
        );
        let mut seen = Vec::new();
        for &dir in DIRECTIONS.iter() {
            for index in game.scan_direction(2, 2, dir, Color::Black) {
                assert!(!seen.contains(&index));
                seen.push(index);
            }
        }
        assert_eq!(seen.len(), 8);
        assert_eq!(seen, game.captures(&Move::place(2, 2, Color::Black)));
    }

    #[test]
    fn invalid_moves() {
        let mut game = Game::default();
        let before = game.clone();

        assert_eq!(
            game.try_apply(Move::place(3, 3, Color::Black)),
            Err(MoveError::Occupied)
        );
        assert_eq!(
            game.try_apply(Move::place(8, 0, Color::Black)),
            Err(MoveError::OutOfBounds)
        );
        assert_eq!(
            game.try_apply(Move::place(2, 4, Color::White)),
            Err(MoveError::WrongTurn)
        );
        assert_eq!(
            game.try_apply(Move::place(0, 0, Color::Black)),
            Err(MoveError::NoCaptures)
        );
        assert_eq!(game.apply_move(Move::place(3, 3, Color::Black), true), 0);
        assert_eq!(game, before);
    }

    #[test]
    fn valid_move_requires_turn() {
        let mut game = Game::default();
        let white_opening = Move::place(2, 4, Color::White);
        assert!(!game.is_valid_move(&white_opening));
        assert_eq!(game.evaluate_capture(&white_opening), 0);

        game.switch_turn();
        assert!(game.is_valid_move(&white_opening));
        assert_eq!(game.evaluate_capture(&white_opening), 1);
    }

    #[test]
    fn simulate_does_not_mutate() {
        let mut game = Game::default();
        let before = game.clone();
        assert_eq!(game.apply_move(Move::place(2, 3, Color::Black), false), 1);
        assert_eq!(game, before);
    }

    #[test]
    fn pass_rejected_while_moves_exist() {
        let mut game = Game::default();
        let before = game.clone();
        assert_eq!(
            game.try_apply(Move::pass(Color::Black)),
            Err(MoveError::IllegalPass)
        );
        assert_eq!(game.apply_move(Move::pass(Color::Black), true), 0);
        assert_eq!(game, before);
    }

    #[test]
    fn pass_accepted_without_moves() {
        // White has no capture anywhere; black still does.
        let mut game = game_from(
            "
            BBB.
            BW..
            ....
            ....
            ",
            Color::White,
        );
        assert!(game.legal_moves(Color::White).is_empty());
        assert!(!game.legal_moves(Color::Black).is_empty());
        assert!(!game.is_game_over());

        let before = game.clone();
        assert_eq!(game.try_apply(Move::pass(Color::White)), Ok(0));
        assert_eq!(game, before);
        assert_eq!(
            game.try_apply(Move::pass(Color::Black)),
            Err(MoveError::WrongTurn)
        );
    }

    #[test]
    fn switch_turn_alternates() {
        let mut game = Game::new("Ann", "Bo");
        assert_eq!(game.turn().name(), "Ann");
        game.switch_turn();
        assert_eq!(game.turn().name(), "Bo");
        assert_eq!(game.turn_color(), Color::White);
        game.switch_turn();
        assert_eq!(game.turn().color(), Color::Black);
    }

    #[test]
    fn stalemate_ends_game() {
        let game = game_from(
            "
            B...
            ....
            ....
            ...W
            ",
            Color::Black,
        );
        assert!(!game.board().is_full());
        assert!(game.is_game_over());
        assert!(game.is_draw());
        assert_eq!(game.winner(), None);
        assert_eq!(game.outcome(), Some(Outcome::Draw));
    }

    #[test]
    fn running_game_has_no_outcome() {
        let game = Game::default();
        assert!(!game.is_game_over());
        assert!(!game.is_draw());
        assert_eq!(game.winner(), None);
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn full_board_winner() {
        let game = game_from(
            "
            WWWW
            WWWW
            WWBB
            BBBB
            ",
            Color::Black,
        );
        assert!(game.is_game_over());
        assert!(!game.is_draw());
        assert_eq!(game.winner().map(Player::name), Some("White"));
        assert_eq!(game.outcome(), Some(Outcome::Win(Color::White)));
        assert_eq!(game.score_of(game.player(Color::Black)), 6);
    }

    #[test]
    fn move_list_display() {
        assert_eq!(
            Game::default().legal_moves(Color::Black).to_string(),
            "[19, 26, 37, 44]"
        );
        assert_eq!(MoveList::default().to_string(), "[]");
    }

    #[test]
    fn move_index() {
        assert_eq!(Move::place(2, 3, Color::Black).index(8), Some(19));
        assert_eq!(Move::at_index(44, 8, Color::White).location(), Some(Location::new(5, 4)));
        assert_eq!(Move::pass(Color::Black).index(8), None);
        assert_eq!(Move::place(2, 3, Color::Black).to_string(), "BLACK D3");
        assert_eq!(Move::pass(Color::White).to_string(), "WHITE PASS");
    }
}
