//! Square notation.
//!
//! A square is written as a column letter `a`..`h` followed by a row digit
//! `0`..`7`, e.g. `d3`. Column letters are case-insensitive on input and
//! lowercase on output.

use crate::board::Square;

/// Errors that can occur while parsing square notation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("expected a column letter and a row digit, got '{0}'")]
    WrongLength(String),

    #[error("invalid column letter: '{0}' (expected a-h)")]
    InvalidColumn(char),

    #[error("invalid row digit: '{0}' (expected 0-7)")]
    InvalidRow(char),
}

/// Parses a square from notation like `d3`.
pub fn parse_square(s: &str) -> Result<Square, NotationError> {
    let mut chars = s.chars();
    let (col, row) = match (chars.next(), chars.next(), chars.next()) {
        (Some(col), Some(row), None) => (col, row),
        _ => return Err(NotationError::WrongLength(s.to_string())),
    };

    let col = col.to_ascii_lowercase();
    if !('a'..='h').contains(&col) {
        return Err(NotationError::InvalidColumn(col));
    }
    if !('0'..='7').contains(&row) {
        return Err(NotationError::InvalidRow(row));
    }

    Ok(Square::new(col as i32 - 'a' as i32, row as i32 - '0' as i32))
}

/// Formats an interior square as notation like `d3`.
pub fn format_square(sq: Square) -> String {
    debug_assert!(sq.is_interior());
    let col = (b'a' + sq.x as u8) as char;
    let row = (b'0' + sq.y as u8) as char;
    format!("{}{}", col, row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_corners() {
        assert_eq!(parse_square("a0"), Ok(Square::new(0, 0)));
        assert_eq!(parse_square("h7"), Ok(Square::new(7, 7)));
    }

    #[test]
    fn column_is_case_insensitive() {
        assert_eq!(parse_square("D3"), Ok(Square::new(3, 3)));
        assert_eq!(parse_square("d3"), Ok(Square::new(3, 3)));
    }

    #[test]
    fn rejects_bad_length() {
        assert_eq!(
            parse_square(""),
            Err(NotationError::WrongLength(String::new()))
        );
        assert_eq!(
            parse_square("d"),
            Err(NotationError::WrongLength("d".to_string()))
        );
        assert_eq!(
            parse_square("d33"),
            Err(NotationError::WrongLength("d33".to_string()))
        );
    }

    #[test]
    fn rejects_bad_column() {
        assert_eq!(parse_square("i3"), Err(NotationError::InvalidColumn('i')));
        assert_eq!(parse_square("13"), Err(NotationError::InvalidColumn('1')));
    }

    #[test]
    fn rejects_bad_row() {
        assert_eq!(parse_square("d8"), Err(NotationError::InvalidRow('8')));
        assert_eq!(parse_square("dx"), Err(NotationError::InvalidRow('x')));
    }

    #[test]
    fn formats_all_interior_squares() {
        use crate::board::Board;
        for sq in Board::squares() {
            let s = format_square(sq);
            assert_eq!(parse_square(&s), Ok(sq));
        }
    }
}
