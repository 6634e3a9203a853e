//! Iago engine library.
//!
//! Exposes the board representation, rules engine, game session, text
//! renderer, and protocol modules for use by integration tests and the
//! binary entry point.

pub mod board;
pub mod game;
pub mod protocol;
pub mod render;
pub mod rules;
