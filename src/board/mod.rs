//! Board representation and core state types.
//!
//! Contains the cell and player enums, the eight-direction scan table, and
//! the sentinel-bordered grid itself.

pub mod cell;
pub mod direction;
pub mod grid;

pub use cell::{Cell, Player, ALL_PLAYERS};
pub use direction::{Direction, ALL_DIRECTIONS};
pub use grid::{Board, BoardError, Square, BOARD_SIZE};
