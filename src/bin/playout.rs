//! Random playout CLI.
//!
//! Plays Othello games with uniformly random legal moves and outputs one
//! JSON record per game. Useful as a smoke test of the rules engine: every
//! game either fills the board or reaches a position where the side to move
//! is blocked (there is no pass rule).
//!
//! Usage:
//!   cargo run --release --bin playout -- [OPTIONS]
//!
//! Options:
//!   --games N   Number of games to play (default: 10)
//!   --seed N    Random seed, 0 for entropy (default: 0)
//!   --quiet     Suppress the summary on stderr

use std::env;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

use iago::game::{Game, Outcome};
use iago::protocol::encode_ofen;
use iago::rules::random_move;

/// One finished playout.
#[derive(Serialize)]
struct GameRecord {
    game: usize,
    moves: u32,
    white: u32,
    black: u32,
    /// True if the game ended with a full board rather than a blocked side.
    filled: bool,
    outcome: Option<Outcome>,
    final_position: String,
}

/// Plays one random game to completion or blockage.
fn play_one(game_index: usize, rng: &mut SmallRng) -> GameRecord {
    let mut game = Game::new();
    let mut moves = 0;

    while !game.is_over() {
        let Some(sq) = random_move(game.board(), game.to_move(), rng) else {
            break;
        };
        // Random moves come from the legal set; submit cannot reject them.
        game.submit(sq).expect("random legal move rejected");
        moves += 1;
    }

    let (white, black) = game.score();
    GameRecord {
        game: game_index,
        moves,
        white,
        black,
        filled: game.is_over(),
        outcome: game.outcome(),
        final_position: encode_ofen(game.board(), game.to_move()),
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut num_games: usize = 10;
    let mut seed: u64 = 0;
    let mut quiet = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" => {
                i += 1;
                num_games = args[i].parse().expect("invalid --games value");
            }
            "--seed" => {
                i += 1;
                seed = args[i].parse().expect("invalid --seed value");
            }
            "--quiet" => {
                quiet = true;
            }
            other => {
                eprintln!("unknown option: {}", other);
                std::process::exit(2);
            }
        }
        i += 1;
    }

    let mut rng = if seed == 0 {
        SmallRng::from_entropy()
    } else {
        SmallRng::seed_from_u64(seed)
    };

    let mut filled = 0;
    let mut total_moves: u64 = 0;
    for n in 0..num_games {
        let record = play_one(n, &mut rng);
        if record.filled {
            filled += 1;
        }
        total_moves += u64::from(record.moves);
        println!("{}", serde_json::to_string(&record).unwrap());
    }

    if !quiet && num_games > 0 {
        eprintln!(
            "{} games, {} filled, {} blocked, {:.1} moves/game",
            num_games,
            filled,
            num_games - filled,
            total_moves as f64 / num_games as f64
        );
    }
}
