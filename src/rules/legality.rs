//! Move legality checking.
//!
//! A placement is legal iff the target cell is empty and at least one of the
//! eight directions holds a flanked run: one or more opposing discs
//! immediately adjacent, terminated by a disc of the placing player before
//! any empty cell or the border sentinel.

use crate::board::{Board, Cell, Direction, Player, Square, ALL_DIRECTIONS};

/// Walks outward from `origin` along `dir` and returns the square of the
/// anchor disc if this direction flanks a flippable run.
///
/// The walk passes over opposing discs only; the first cell that is not an
/// opposing disc decides the outcome. The player's own disc anchors the run
/// (provided at least one opposing disc was passed), while `Empty` and
/// `Border` terminate the walk with no flip.
pub(crate) fn flank_anchor(
    board: &Board,
    player: Player,
    origin: Square,
    dir: Direction,
) -> Option<Square> {
    let own = player.disc();
    let opposing = player.opponent().disc();

    let mut sq = origin.step(dir);
    let mut passed = 0;
    loop {
        let cell = board.get(sq);
        if cell == opposing {
            passed += 1;
            sq = sq.step(dir);
            continue;
        }
        if cell == own && passed > 0 {
            return Some(sq);
        }
        return None;
    }
}

/// Returns true if `player` may place a disc on `sq`.
///
/// Fails closed: occupied targets, non-interior coordinates, and squares
/// with no supporting direction are all simply illegal.
pub fn is_legal(board: &Board, player: Player, sq: Square) -> bool {
    if !sq.is_interior() || board.get(sq) != Cell::Empty {
        return false;
    }
    ALL_DIRECTIONS
        .iter()
        .any(|&dir| flank_anchor(board, player, sq, dir).is_some())
}

/// Enumerates every legal placement for `player` in row-major order.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Square> {
    Board::squares()
        .filter(|&sq| is_legal(board, player, sq))
        .collect()
}
