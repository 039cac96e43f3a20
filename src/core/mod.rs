//! Core types: owner identity, turn records, game configuration.
//!
//! These are the plain-data building blocks the scoring engine operates on.
//! None of them carry rules; the rules live in [`crate::scoring`].

pub mod config;
pub mod player;
pub mod turn;

pub use config::GameConfig;
pub use player::PlayerId;
pub use turn::{Turn, DARTS_PER_TURN, MAX_TURN_SCORE};
