//! Iago -- an Othello rules engine with a terminal play loop.
//!
//! Reads commands from stdin and writes responses to stdout. Prompts go to
//! stderr so that piped output stays clean. A bare square such as `d3`
//! places a disc for the side to move; see `protocol::parser` for the
//! command set.

use std::io::{self, BufRead, Write};

use iago::board::Player;
use iago::game::{Game, Outcome};
use iago::protocol::parser::{parse_command, Command};
use iago::protocol::{format_square, parse_ofen};
use iago::render::render_board;
use iago::rules::{legal_moves, MoveError};

/// Writes the board to `out`.
fn show_board<W: Write>(game: &Game, out: &mut W) {
    write!(out, "{}", render_board(game.board())).unwrap();
    out.flush().unwrap();
}

/// Writes the running disc counts to `out`.
fn show_score<W: Write>(game: &Game, out: &mut W) {
    let (white, black) = game.score();
    writeln!(out, "white score: {}", white).unwrap();
    writeln!(out, "black score: {}", black).unwrap();
    out.flush().unwrap();
}

/// Writes the final result to `out`.
fn show_result<W: Write>(game: &Game, out: &mut W) {
    show_score(game, out);
    let line = match game.outcome() {
        Some(Outcome::WhiteWins) => "white wins",
        Some(Outcome::BlackWins) => "black wins",
        Some(Outcome::Draw) => "draw",
        None => "game unfinished",
    };
    writeln!(out, "{}", line).unwrap();
    out.flush().unwrap();
}

/// Prompts on stderr with the active color.
fn prompt(game: &Game) {
    let side = match game.to_move() {
        Player::White => 'W',
        Player::Black => 'B',
    };
    eprint!("{}> ", side);
}

/// Runs the terminal session loop.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut game = Game::new();

    show_board(&game, &mut out);
    prompt(&game);

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => {
                prompt(&game);
                continue;
            }
        };

        match cmd {
            Command::Place(sq) => match game.submit(sq) {
                Ok(_) => {
                    show_board(&game, &mut out);
                    if game.is_over() {
                        show_result(&game, &mut out);
                        break;
                    }
                    if !game.can_move() {
                        // Strict alternation with no pass rule: a blocked
                        // side ends the session.
                        writeln!(out, "no legal move remains; game blocked").unwrap();
                        show_result(&game, &mut out);
                        break;
                    }
                    show_score(&game, &mut out);
                }
                Err(e @ MoveError::Consistency(_)) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("{}", e);
                }
            },
            Command::Position { ofen } => match parse_ofen(&ofen) {
                Ok((board, to_move)) => {
                    game = Game::from_parts(board, to_move);
                    show_board(&game, &mut out);
                }
                Err(e) => {
                    eprintln!("failed to parse OFEN: {}", e);
                }
            },
            Command::Show => {
                show_board(&game, &mut out);
            }
            Command::Score => {
                show_score(&game, &mut out);
            }
            Command::Legal => {
                let moves = legal_moves(game.board(), game.to_move());
                if moves.is_empty() {
                    writeln!(out, "(none)").unwrap();
                } else {
                    let squares: Vec<String> =
                        moves.into_iter().map(format_square).collect();
                    writeln!(out, "{}", squares.join(" ")).unwrap();
                }
                out.flush().unwrap();
            }
            Command::Json => {
                let snapshot = game.snapshot();
                writeln!(out, "{}", serde_json::to_string(&snapshot).unwrap()).unwrap();
                out.flush().unwrap();
            }
            Command::New => {
                game.new_game();
                show_board(&game, &mut out);
            }
            Command::Quit => {
                break;
            }
        }

        prompt(&game);
    }
}
