//! # oche
//!
//! An x01 darts scoring engine (501, 301, or any positive start) designed to
//! be embedded in a hosting application.
//!
//! ## Design Principles
//!
//! 1. **Engine, not app**: Accounts, authentication, persistence, and
//!    rendering belong to the host. The engine owns exactly one thing — a
//!    player's progress through one leg — and hands back value-typed
//!    feedback for the host to display or store.
//!
//! 2. **Feedback over failure**: Every input, valid or not, produces a
//!    [`Feedback`]. Malformed scores are reported, never thrown; the engine
//!    has no I/O and nothing to panic about once a game is built.
//!
//! 3. **Append-only history**: Each mutating call appends exactly one
//!    [`Turn`]. The remaining score is always derivable from the history and
//!    never goes negative — a turn that would overshoot is recorded as a
//!    zero-score turn instead.
//!
//! ## Modules
//!
//! - `core`: Owner identity, turn records, game configuration
//! - `scoring`: Checkout legality, feedback taxonomy, the `Game` state
//!   machine, derived statistics
//!
//! ## Example
//!
//! ```
//! use oche::{GameBuilder, PlayerId, Status};
//!
//! let mut game = GameBuilder::new(PlayerId::new(7)).build();
//!
//! let feedback = game.record_turn(60);
//! assert_eq!(feedback.status, Status::Ok);
//! assert_eq!(game.remaining_score(), 441);
//! ```

pub mod core;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{GameConfig, PlayerId, Turn, DARTS_PER_TURN, MAX_TURN_SCORE};

pub use crate::scoring::{
    is_checkout_reachable, Feedback, Game, GameBuilder, GameStats, Status, IMPOSSIBLE_CHECKOUTS,
    MAX_CHECKOUT, MIN_CHECKOUT,
};
