//! Session command parser.
//!
//! Parses lines typed at the terminal into structured `Command` variants the
//! session loop can dispatch on. A bare square token such as `d3` is a
//! placement for the side to move; everything else is a named command.

use crate::board::Square;

use super::notation::parse_square;

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Place a disc for the side to move.
    Place(Square),

    /// Set the board from an OFEN string: `position <ofen>`.
    Position { ofen: String },

    /// Print the board.
    Show,

    /// Print the current disc counts.
    Score,

    /// Print the legal placements for the side to move.
    Legal,

    /// Print a JSON snapshot of the session.
    Json,

    /// Start a new game.
    New,

    /// End the session.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines and unrecognized input, after logging the
/// rejection to stderr.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    match tokens[0] {
        "show" => Some(Command::Show),
        "score" => Some(Command::Score),
        "legal" => Some(Command::Legal),
        "json" => Some(Command::Json),
        "new" => Some(Command::New),
        "quit" => Some(Command::Quit),

        "position" => {
            if tokens.len() < 2 {
                eprintln!("position: missing OFEN string");
                return None;
            }
            Some(Command::Position {
                ofen: tokens[1..].join(" "),
            })
        }

        square => match parse_square(square) {
            Ok(sq) if tokens.len() == 1 => Some(Command::Place(sq)),
            Ok(_) => {
                eprintln!("unexpected input after square: {}", trimmed);
                None
            }
            Err(e) => {
                eprintln!("{}", e);
                None
            }
        },
    }
}
