//! End-to-end games over the library API.
//!
//! Plays seeded random games and checks the invariants that must hold for
//! any move sequence: the border ring never changes, disc counts grow by
//! exactly one per placement plus the flips, and every game ends either
//! with a full board or with the side to move blocked.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use iago::board::{Board, Cell, Player, Square, BOARD_SIZE};
use iago::game::Game;
use iago::rules::{is_legal, legal_moves, random_move};

/// Asserts that every ring cell still reads as the border sentinel.
fn assert_border_intact(board: &Board) {
    for i in -1..=BOARD_SIZE {
        assert_eq!(board.get(Square::new(i, -1)), Cell::Border);
        assert_eq!(board.get(Square::new(i, BOARD_SIZE)), Cell::Border);
        assert_eq!(board.get(Square::new(-1, i)), Cell::Border);
        assert_eq!(board.get(Square::new(BOARD_SIZE, i)), Cell::Border);
    }
}

#[test]
fn random_games_preserve_invariants() {
    for seed in 1..=8u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = Game::new();
        let mut moves: u32 = 0;

        while !game.is_over() {
            let Some(sq) = random_move(game.board(), game.to_move(), &mut rng) else {
                break;
            };
            assert!(is_legal(game.board(), game.to_move(), sq));

            let mover = game.to_move();
            let (white_before, black_before) = game.score();
            let flipped = game.submit(sq).expect("legal move rejected");
            moves += 1;

            assert!(flipped >= 1, "a legal move must flip at least one disc");
            assert_eq!(game.to_move(), mover.opponent());

            // One disc placed, `flipped` discs changed color.
            let (white, black) = game.score();
            assert_eq!(white + black, white_before + black_before + 1);
            match mover {
                Player::White => {
                    assert_eq!(white, white_before + 1 + flipped);
                    assert_eq!(black, black_before - flipped);
                }
                Player::Black => {
                    assert_eq!(black, black_before + 1 + flipped);
                    assert_eq!(white, white_before - flipped);
                }
            }

            assert_border_intact(game.board());
        }

        // Every move after the opening four discs added exactly one disc.
        let (white, black) = game.score();
        assert_eq!(white + black, 4 + moves);

        if game.is_over() {
            assert_eq!(white + black, 64);
            assert!(game.outcome().is_some());
        } else {
            assert!(legal_moves(game.board(), game.to_move()).is_empty());
            assert_eq!(game.outcome(), None);
        }
    }
}

#[test]
fn fixed_seed_playout_is_deterministic() {
    let play = |seed: u64| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = Game::new();
        while !game.is_over() {
            let Some(sq) = random_move(game.board(), game.to_move(), &mut rng) else {
                break;
            };
            game.submit(sq).unwrap();
        }
        (game.score(), game.board().clone())
    };

    let (score_a, board_a) = play(1234);
    let (score_b, board_b) = play(1234);
    assert_eq!(score_a, score_b);
    assert_eq!(board_a, board_b);
}

#[test]
fn scripted_opening_sequence() {
    // A known short sequence from the opening: White f3, Black f2,
    // White e2, Black d2.
    let mut game = Game::new();
    for (sq, mover) in [
        (Square::new(5, 3), Player::White),
        (Square::new(5, 2), Player::Black),
        (Square::new(4, 2), Player::White),
        (Square::new(3, 2), Player::Black),
    ] {
        assert_eq!(game.to_move(), mover);
        game.submit(sq).unwrap();
    }

    let (white, black) = game.score();
    assert_eq!(white + black, 8);
    assert_border_intact(game.board());
}
