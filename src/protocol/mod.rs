//! Text surfaces consumed and produced at the session boundary.
//!
//! Square notation, OFEN position strings, and the session command parser.

pub mod notation;
pub mod ofen;
pub mod parser;

pub use notation::{format_square, parse_square, NotationError};
pub use ofen::{encode_ofen, parse_ofen, OfenError};
pub use parser::{parse_command, Command};
