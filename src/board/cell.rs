//! Cell and player types.
//!
//! A cell is one of the two disc colors, an empty playable square, or the
//! sentinel border that rings the playable area. The border never matches
//! either color during a directional scan, so it terminates every walk
//! without an explicit bounds check.

use serde::{Deserialize, Serialize};

/// The contents of one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Sentinel ring cell; never a legal placement target.
    Border,
    Empty,
    White,
    Black,
}

impl Cell {
    /// Returns true if this cell holds a disc of either color.
    pub const fn is_disc(self) -> bool {
        matches!(self, Cell::White | Cell::Black)
    }
}

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    White,
    Black,
}

/// Both players, White first (White opens the game).
pub const ALL_PLAYERS: [Player; 2] = [Player::White, Player::Black];

impl Player {
    /// Returns the other player.
    pub const fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Returns the cell holding this player's disc.
    pub const fn disc(self) -> Cell {
        match self {
            Player::White => Cell::White,
            Player::Black => Cell::Black,
        }
    }

    /// Returns the single-character side-to-move abbreviation used in OFEN.
    pub const fn ofen_char(self) -> char {
        match self {
            Player::White => 'w',
            Player::Black => 'b',
        }
    }

    /// Parses a player from its single-character OFEN abbreviation.
    pub fn from_ofen_char(c: char) -> Option<Player> {
        match c {
            'w' => Some(Player::White),
            'b' => Some(Player::Black),
            _ => None,
        }
    }
}
