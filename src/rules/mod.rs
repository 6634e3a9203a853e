//! Move legality and application.
//!
//! `legality` scans the eight directions for flanked runs; `apply` re-runs
//! the same scan and performs the placement plus all flips atomically.

pub mod apply;
pub mod legality;

use rand::Rng;

use crate::board::{Board, Player, Square};

pub use apply::{apply, MoveError};
pub use legality::{is_legal, legal_moves};

/// Picks a uniformly random legal placement for `player`, or `None` if the
/// player has no legal move.
pub fn random_move(board: &Board, player: Player, rng: &mut impl Rng) -> Option<Square> {
    let moves = legal_moves(board, player);
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.gen_range(0..moves.len())])
}
