//! Game session state.
//!
//! Holds the board and the side to move, and gates every mutation: a
//! submitted move is validated and applied as one unit, and the turn passes
//! to the other player only on success. Turn order is strict alternation
//! with no pass rule, and the game ends only when the board is full; a
//! position where the side to move is blocked is the session loop's concern,
//! not the core's.

use serde::Serialize;

use crate::board::{Board, Player, Square};
use crate::rules::{self, MoveError};

/// The result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    WhiteWins,
    BlackWins,
    Draw,
}

/// A serializable view of the session for external renderers.
#[derive(Debug, Serialize)]
pub struct Snapshot {
    /// The position as an OFEN string.
    pub position: String,
    pub to_move: Player,
    pub white: u32,
    pub black: u32,
    pub over: bool,
    pub outcome: Option<Outcome>,
}

/// Holds the mutable state of one game session.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Player,
}

impl Game {
    /// Creates a session at the opening position. White moves first.
    pub fn new() -> Game {
        Game {
            board: Board::new(),
            to_move: Player::White,
        }
    }

    /// Creates a session from an arbitrary position.
    pub fn from_parts(board: Board, to_move: Player) -> Game {
        Game { board, to_move }
    }

    /// Resets the session to the opening position.
    pub fn new_game(&mut self) {
        *self = Game::new();
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Validates and applies a move for the side to move, then passes the
    /// turn. Returns the number of discs flipped. On error the board and
    /// the turn are unchanged.
    pub fn submit(&mut self, sq: Square) -> Result<u32, MoveError> {
        let flipped = rules::apply(&mut self.board, self.to_move, sq)?;
        self.to_move = self.to_move.opponent();
        Ok(flipped)
    }

    /// Returns true if the side to move has at least one legal placement.
    pub fn can_move(&self) -> bool {
        Board::squares().any(|sq| rules::is_legal(&self.board, self.to_move, sq))
    }

    /// Returns true when the game is over (every interior cell holds a
    /// disc).
    pub fn is_over(&self) -> bool {
        self.board.is_full()
    }

    /// Current disc counts: `(white, black)`.
    pub fn score(&self) -> (u32, u32) {
        self.board.count()
    }

    /// Returns the result once the game is over, `None` while in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_over() {
            return None;
        }
        let (white, black) = self.score();
        Some(if white > black {
            Outcome::WhiteWins
        } else if black > white {
            Outcome::BlackWins
        } else {
            Outcome::Draw
        })
    }

    /// Builds a serializable view of the session.
    pub fn snapshot(&self) -> Snapshot {
        let (white, black) = self.score();
        Snapshot {
            position: crate::protocol::ofen::encode_ofen(&self.board, self.to_move),
            to_move: self.to_move,
            white,
            black,
            over: self.is_over(),
            outcome: self.outcome(),
        }
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}
