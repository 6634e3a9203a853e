//! Text rendering of the board.
//!
//! Renders the full 10x10 grid, drawing the border ring as coordinate
//! labels: column letters across the top and bottom, row digits down both
//! sides. Display glyphs are chosen here; the cell enum itself carries no
//! display identity.

use crate::board::{Board, Cell, Square, BOARD_SIZE};

/// Returns the display glyph for an interior cell.
fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Empty => ' ',
        Cell::White => 'W',
        Cell::Black => 'B',
        // Interior cells are never Border; the ring is drawn as labels.
        Cell::Border => ' ',
    }
}

/// Renders the board as a bordered text block, one line per grid row.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    let mut labels = String::from(" ");
    for x in 0..BOARD_SIZE {
        labels.push((b'a' + x as u8) as char);
    }
    labels.push(' ');

    out.push_str(&labels);
    out.push('\n');
    for y in 0..BOARD_SIZE {
        let digit = (b'0' + y as u8) as char;
        out.push(digit);
        for x in 0..BOARD_SIZE {
            out.push(glyph(board.get(Square::new(x, y))));
        }
        out.push(digit);
        out.push('\n');
    }
    out.push_str(&labels);
    out.push('\n');

    out
}
