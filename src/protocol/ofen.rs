//! OFEN (Othello FEN) encoding and decoding.
//!
//! OFEN is a compact one-line notation for a full board position plus the
//! side to move, in the spirit of chess FEN. The interior is written as
//! eight `/`-separated rows of eight characters each, row 0 first, using
//! `.` for empty, `W` for white, and `B` for black. A single space and a
//! `w` or `b` side-to-move character follow.
//!
//! Example (the opening position):
//! `......../......../......../...WB.../...BW.../......../......../........ w`

use crate::board::{Board, Cell, Player, Square, BOARD_SIZE};

/// Errors that can occur during OFEN parsing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OfenError {
    #[error("expected '<rows> <side>', got {0} space-separated fields")]
    WrongFieldCount(usize),

    #[error("expected 8 rows separated by '/', got {0}")]
    WrongRowCount(usize),

    #[error("row {0} has {1} cells, expected 8")]
    WrongRowWidth(i32, usize),

    #[error("invalid cell character: '{0}'")]
    InvalidCell(char),

    #[error("invalid side-to-move: '{0}'")]
    InvalidSideToMove(String),
}

/// Returns the OFEN character for an interior cell.
fn cell_char(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::White => 'W',
        Cell::Black => 'B',
        // The border ring is never encoded.
        Cell::Border => '.',
    }
}

/// Parses an OFEN cell character. `None` marks an empty cell.
fn parse_cell(c: char) -> Result<Option<Player>, OfenError> {
    match c {
        '.' => Ok(None),
        'W' => Ok(Some(Player::White)),
        'B' => Ok(Some(Player::Black)),
        _ => Err(OfenError::InvalidCell(c)),
    }
}

/// Encodes a board and the side to move as an OFEN string.
pub fn encode_ofen(board: &Board, to_move: Player) -> String {
    let mut out = String::with_capacity(73);
    for y in 0..BOARD_SIZE {
        if y > 0 {
            out.push('/');
        }
        for x in 0..BOARD_SIZE {
            out.push(cell_char(board.get(Square::new(x, y))));
        }
    }
    out.push(' ');
    out.push(to_move.ofen_char());
    out
}

/// Parses an OFEN string into a board and the side to move.
pub fn parse_ofen(ofen: &str) -> Result<(Board, Player), OfenError> {
    let fields: Vec<&str> = ofen.trim().split(' ').collect();
    if fields.len() != 2 {
        return Err(OfenError::WrongFieldCount(fields.len()));
    }

    let rows: Vec<&str> = fields[0].split('/').collect();
    if rows.len() != BOARD_SIZE as usize {
        return Err(OfenError::WrongRowCount(rows.len()));
    }

    let mut board = Board::empty();
    for (y, row) in rows.iter().enumerate() {
        let cells: Vec<char> = row.chars().collect();
        if cells.len() != BOARD_SIZE as usize {
            return Err(OfenError::WrongRowWidth(y as i32, cells.len()));
        }
        for (x, &c) in cells.iter().enumerate() {
            if let Some(player) = parse_cell(c)? {
                // Interior coordinates by construction; set cannot fail.
                let _ = board.set(Square::new(x as i32, y as i32), player);
            }
        }
    }

    let to_move = Player::from_ofen_char(fields[1].chars().next().unwrap_or('?'))
        .filter(|_| fields[1].len() == 1)
        .ok_or_else(|| OfenError::InvalidSideToMove(fields[1].to_string()))?;

    Ok((board, to_move))
}
