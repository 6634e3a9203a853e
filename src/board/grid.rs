//! The playing board.
//!
//! An 8x8 playable interior stored inside a 10x10 grid whose outer ring is
//! all `Cell::Border`. Directional walks read through `get`, which resolves
//! any coordinate outside the interior to the border sentinel, so a scan
//! stepping one cell at a time never needs a bounds check.
//!
//! Interior coordinate (x, y) maps to storage `cells[y + 1][x + 1]`.

use serde::{Deserialize, Serialize};

use super::cell::{Cell, Player};
use super::direction::Direction;

/// Width and height of the playable interior.
pub const BOARD_SIZE: i32 = 8;

/// Full grid dimension including the sentinel ring.
const GRID_SIZE: usize = (BOARD_SIZE + 2) as usize;

/// An interior coordinate pair: column `x` and row `y`, each in `0..=7`
/// when the square is playable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub x: i32,
    pub y: i32,
}

impl Square {
    /// Creates a square from column and row coordinates.
    pub const fn new(x: i32, y: i32) -> Square {
        Square { x, y }
    }

    /// Returns true if this square lies inside the playable interior.
    pub const fn is_interior(self) -> bool {
        self.x >= 0 && self.x < BOARD_SIZE && self.y >= 0 && self.y < BOARD_SIZE
    }

    /// Returns the neighboring square one step along `dir`.
    pub const fn step(self, dir: Direction) -> Square {
        Square {
            x: self.x + dir.dx as i32,
            y: self.y + dir.dy as i32,
        }
    }
}

/// Errors raised by direct board mutation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("coordinate ({0}, {1}) is outside the playable area")]
    OutOfBounds(i32, i32),
}

/// The board state: 64 playable cells inside an immutable border ring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Board {
    /// Creates a board with every interior cell empty.
    pub fn empty() -> Board {
        let mut cells = [[Cell::Border; GRID_SIZE]; GRID_SIZE];
        for row in cells.iter_mut().take(GRID_SIZE - 1).skip(1) {
            for cell in row.iter_mut().take(GRID_SIZE - 1).skip(1) {
                *cell = Cell::Empty;
            }
        }
        Board { cells }
    }

    /// Creates a board holding the canonical opening position: White on
    /// (3,3) and (4,4), Black on (4,3) and (3,4).
    pub fn new() -> Board {
        let mut board = Board::empty();
        board.cells[4][4] = Cell::White;
        board.cells[5][5] = Cell::White;
        board.cells[4][5] = Cell::Black;
        board.cells[5][4] = Cell::Black;
        board
    }

    /// Returns the cell at `sq`.
    ///
    /// Any coordinate outside the interior resolves to `Cell::Border`, so a
    /// directional walk may read one step past the interior freely.
    pub fn get(&self, sq: Square) -> Cell {
        if sq.x < -1 || sq.x > BOARD_SIZE || sq.y < -1 || sq.y > BOARD_SIZE {
            return Cell::Border;
        }
        self.cells[(sq.y + 1) as usize][(sq.x + 1) as usize]
    }

    /// Returns the cell one step from `sq` along `dir`.
    pub fn get_offset(&self, sq: Square, dir: Direction) -> Cell {
        self.get(sq.step(dir))
    }

    /// Overwrites an interior cell with the player's disc.
    ///
    /// Rejects non-interior coordinates so the border ring can never be
    /// touched, even by a caller that bypasses move validation.
    pub fn set(&mut self, sq: Square, player: Player) -> Result<(), BoardError> {
        if !sq.is_interior() {
            return Err(BoardError::OutOfBounds(sq.x, sq.y));
        }
        self.cells[(sq.y + 1) as usize][(sq.x + 1) as usize] = player.disc();
        Ok(())
    }

    /// Tallies the discs of each color: `(white, black)`.
    ///
    /// Recomputed on every call; the interior is only 64 cells.
    pub fn count(&self) -> (u32, u32) {
        let mut white = 0;
        let mut black = 0;
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                match self.get(Square::new(x, y)) {
                    Cell::White => white += 1,
                    Cell::Black => black += 1,
                    Cell::Empty | Cell::Border => {}
                }
            }
        }
        (white, black)
    }

    /// Returns true when no interior cell is empty.
    pub fn is_full(&self) -> bool {
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                if self.get(Square::new(x, y)) == Cell::Empty {
                    return false;
                }
            }
        }
        true
    }

    /// Iterates over every interior square in row-major order.
    pub fn squares() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Square::new(x, y)))
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}
