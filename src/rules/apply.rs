//! Move application (the flip engine).
//!
//! Re-runs the flanking scan independently for each of the eight directions,
//! collects every flippable run, and only then mutates the board: the target
//! cell and all collected runs are overwritten in one pass. A rejected move
//! leaves the board untouched; there is no observable partially-flipped
//! state.

use crate::board::{Board, BoardError, Cell, Player, Square, ALL_DIRECTIONS};

use super::legality::flank_anchor;

/// Errors raised when applying a move.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MoveError {
    /// No direction flanks a run from the target cell, or the cell is
    /// occupied. Applying such a move is a caller-contract violation;
    /// callers are expected to check legality first.
    #[error("illegal move for {player:?} at ({x}, {y})")]
    IllegalMove { player: Player, x: i32, y: i32 },

    /// The target coordinate lies outside the playable interior.
    #[error("coordinate ({0}, {1}) is outside the playable area")]
    OutOfBounds(i32, i32),

    /// An internal invariant was violated. Fatal to the game session.
    #[error("board consistency violated: {0}")]
    Consistency(String),
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> MoveError {
        // Board-level rejection after our own bounds check means the
        // engine's invariants no longer hold.
        MoveError::Consistency(err.to_string())
    }
}

/// Places `player`'s disc on `sq` and flips every flanked run.
///
/// Returns the number of discs flipped (always at least 1 for a legal
/// move). The caller is expected to have confirmed legality; an illegal
/// target is rejected with `MoveError::IllegalMove` and no mutation.
pub fn apply(board: &mut Board, player: Player, sq: Square) -> Result<u32, MoveError> {
    if !sq.is_interior() {
        return Err(MoveError::OutOfBounds(sq.x, sq.y));
    }
    if board.get(sq) != Cell::Empty {
        return Err(MoveError::IllegalMove {
            player,
            x: sq.x,
            y: sq.y,
        });
    }

    let opposing = player.opponent().disc();
    let mut flips: Vec<Square> = Vec::new();
    for dir in ALL_DIRECTIONS {
        let Some(anchor) = flank_anchor(board, player, sq, dir) else {
            continue;
        };
        let mut cur = sq.step(dir);
        while cur != anchor {
            if board.get(cur) != opposing {
                return Err(MoveError::Consistency(format!(
                    "run cell ({}, {}) changed under the scan",
                    cur.x, cur.y
                )));
            }
            flips.push(cur);
            cur = cur.step(dir);
        }
    }

    if flips.is_empty() {
        return Err(MoveError::IllegalMove {
            player,
            x: sq.x,
            y: sq.y,
        });
    }

    board.set(sq, player)?;
    for &flip in &flips {
        board.set(flip, player)?;
    }
    Ok(flips.len() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_move_flips_one_disc() {
        let mut board = Board::new();
        let flipped = apply(&mut board, Player::White, Square::new(5, 3)).unwrap();
        assert_eq!(flipped, 1);
        assert_eq!(board.get(Square::new(5, 3)), Cell::White);
        assert_eq!(board.get(Square::new(4, 3)), Cell::White);
        assert_eq!(board.count(), (4, 1));
    }

    #[test]
    fn single_backed_disc_flips_exactly_once() {
        let mut board = Board::empty();
        board.set(Square::new(2, 2), Player::Black).unwrap();
        board.set(Square::new(3, 2), Player::White).unwrap();
        // Unrelated white disc that must survive.
        board.set(Square::new(6, 6), Player::White).unwrap();

        let flipped = apply(&mut board, Player::Black, Square::new(4, 2)).unwrap();
        assert_eq!(flipped, 1);
        assert_eq!(board.get(Square::new(3, 2)), Cell::Black);
        assert_eq!(board.get(Square::new(6, 6)), Cell::White);
        assert_eq!(board.count(), (1, 3));
    }

    #[test]
    fn two_directions_flip_in_one_call() {
        let mut board = Board::empty();
        // East run: W at (4,3) anchored by B at (5,3).
        board.set(Square::new(4, 3), Player::White).unwrap();
        board.set(Square::new(5, 3), Player::Black).unwrap();
        // South run: W at (3,4) anchored by B at (3,5).
        board.set(Square::new(3, 4), Player::White).unwrap();
        board.set(Square::new(3, 5), Player::Black).unwrap();

        let flipped = apply(&mut board, Player::Black, Square::new(3, 3)).unwrap();
        assert_eq!(flipped, 2);
        assert_eq!(board.get(Square::new(4, 3)), Cell::Black);
        assert_eq!(board.get(Square::new(3, 4)), Cell::Black);
        assert_eq!(board.count(), (0, 5));
    }

    #[test]
    fn long_run_flips_entirely() {
        let mut board = Board::empty();
        for x in 1..=6 {
            board.set(Square::new(x, 0), Player::Black).unwrap();
        }
        board.set(Square::new(0, 0), Player::White).unwrap();

        let flipped = apply(&mut board, Player::White, Square::new(7, 0)).unwrap();
        assert_eq!(flipped, 6);
        assert_eq!(board.count(), (8, 0));
    }

    #[test]
    fn anchor_is_not_flipped() {
        let mut board = Board::new();
        apply(&mut board, Player::White, Square::new(5, 3)).unwrap();
        // The anchor at (3,3) was already white and stays white.
        assert_eq!(board.get(Square::new(3, 3)), Cell::White);
    }

    #[test]
    fn unsupported_move_rejected_without_mutation() {
        let mut board = Board::new();
        let before = board.clone();
        let err = apply(&mut board, Player::White, Square::new(0, 0)).unwrap_err();
        assert!(matches!(err, MoveError::IllegalMove { .. }));
        assert_eq!(board, before);
    }

    #[test]
    fn occupied_target_rejected_without_mutation() {
        let mut board = Board::new();
        let before = board.clone();
        let err = apply(&mut board, Player::Black, Square::new(3, 3)).unwrap_err();
        assert!(matches!(err, MoveError::IllegalMove { .. }));
        assert_eq!(board, before);
    }

    #[test]
    fn out_of_bounds_target_rejected() {
        let mut board = Board::new();
        let before = board.clone();
        assert_eq!(
            apply(&mut board, Player::White, Square::new(8, 0)),
            Err(MoveError::OutOfBounds(8, 0))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn unsupporting_directions_are_untouched() {
        let mut board = Board::new();
        apply(&mut board, Player::White, Square::new(5, 3)).unwrap();
        // The black disc at (3,4) sits on a non-supporting direction.
        assert_eq!(board.get(Square::new(3, 4)), Cell::Black);
    }
}
