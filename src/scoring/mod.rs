//! The scoring engine: checkout legality, feedback, the game state machine,
//! and derived statistics.

pub mod checkout;
pub mod feedback;
pub mod game;
pub mod stats;

pub use checkout::{is_checkout_reachable, IMPOSSIBLE_CHECKOUTS, MAX_CHECKOUT, MIN_CHECKOUT};
pub use feedback::{Feedback, Status};
pub use game::{Game, GameBuilder};
pub use stats::GameStats;
