//! The x01 game state machine.
//!
//! A `Game` tracks one player's countdown through one leg. It validates each
//! proposed turn score, appends exactly one [`Turn`] per accepted call, and
//! reports the outcome as a [`Feedback`].
//!
//! ## Turn precedence
//!
//! A proposed score is classified in this order:
//!
//! 1. Out of `0..=180`, or `darts_used` out of `1..=3` — invalid, nothing
//!    recorded.
//! 2. Would leave exactly 1 — bust. No single dart scores 1 while ending on
//!    a double, so a remaining score of 1 is never allowed to exist.
//! 3. Would overshoot zero — bust.
//! 4. Hits exactly zero with a finishable score — completed.
//! 5. Hits exactly zero with an unfinishable score — the attempt is voided.
//! 6. Otherwise accepted; flagged as checkout-reachable when the new
//!    remaining score can be taken out.
//!
//! Busts and voided finishes append a zero-score turn, so the remaining
//! score never drops below zero and the darts thrown still count toward the
//! per-dart statistics.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::config::GameConfig;
use crate::core::player::PlayerId;
use crate::core::turn::{Turn, DARTS_PER_TURN, MAX_TURN_SCORE};
use crate::scoring::checkout::is_checkout_reachable;
use crate::scoring::feedback::Feedback;
use crate::scoring::stats::GameStats;

/// One player's progress through one x01 leg.
///
/// Owned by exactly one session; the engine performs no I/O and holds no
/// shared state. Callers serialize access per instance.
///
/// ## Example
///
/// ```
/// use oche::{Game, GameConfig, PlayerId, Status};
///
/// let mut game = Game::new(PlayerId::new(1), GameConfig::default());
///
/// assert_eq!(game.record_turn(180).status, Status::Ok);
/// assert_eq!(game.record_turn(180).status, Status::Checkout);
/// assert_eq!(game.record_turn(141).status, Status::Completed);
/// assert!(game.is_complete());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    owner: PlayerId,
    starting_score: u16,
    turns: Vector<Turn>,
}

/// Builder for creating a [`Game`].
pub struct GameBuilder {
    owner: PlayerId,
    starting_score: u16,
}

impl GameBuilder {
    /// Start building a game for `owner`, defaulting to 501.
    #[must_use]
    pub fn new(owner: PlayerId) -> Self {
        Self {
            owner,
            starting_score: GameConfig::default().starting_score,
        }
    }

    /// Set the starting score (e.g. 301).
    #[must_use]
    pub fn starting_score(mut self, score: u16) -> Self {
        assert!(score > 0, "Starting score must be positive");
        self.starting_score = score;
        self
    }

    /// Build the game.
    #[must_use]
    pub fn build(self) -> Game {
        Game::new(self.owner, GameConfig::new(self.starting_score))
    }
}

impl Game {
    /// Create a game for `owner` with the given configuration.
    ///
    /// Panics if `config.starting_score` is zero; building a game that is
    /// already finished is a host programming error, not a turn outcome.
    #[must_use]
    pub fn new(owner: PlayerId, config: GameConfig) -> Self {
        assert!(config.starting_score > 0, "Starting score must be positive");

        Self {
            owner,
            starting_score: config.starting_score,
            turns: Vector::new(),
        }
    }

    /// Builder with the standard 501 default.
    #[must_use]
    pub fn builder(owner: PlayerId) -> GameBuilder {
        GameBuilder::new(owner)
    }

    // === Queries ===

    /// The player this game belongs to.
    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    /// The score the countdown started from.
    #[must_use]
    pub fn starting_score(&self) -> u16 {
        self.starting_score
    }

    /// Recorded turns, in throw order.
    #[must_use]
    pub fn turns(&self) -> &Vector<Turn> {
        &self.turns
    }

    /// Points still required, `starting_score - total_score`.
    #[must_use]
    pub fn remaining_score(&self) -> u16 {
        self.starting_score - self.total_score()
    }

    /// Sum of recorded turn scores. Voided turns count as 0.
    #[must_use]
    pub fn total_score(&self) -> u16 {
        // Never exceeds starting_score: overshooting turns are voided.
        self.turns
            .iter()
            .map(|turn| u32::from(turn.score))
            .sum::<u32>() as u16
    }

    /// Total darts thrown, including those of voided turns.
    #[must_use]
    pub fn darts_thrown(&self) -> u32 {
        self.turns
            .iter()
            .map(|turn| u32::from(turn.darts_used))
            .sum()
    }

    /// Whether the leg has been checked out.
    ///
    /// Zero is only reachable through a legal double-out finish, so this is
    /// equivalent to "a turn returned `Completed`".
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.remaining_score() == 0
    }

    // === Recording ===

    /// Record a full three-dart turn. See [`Game::record_turn_with_darts`].
    pub fn record_turn(&mut self, score: i32) -> Feedback {
        self.record_turn_with_darts(score, DARTS_PER_TURN)
    }

    /// Record a turn of `darts_used` darts totalling `score`.
    ///
    /// Classifies the turn per the precedence order in the module docs and
    /// appends at most one [`Turn`]. Never panics; malformed input is
    /// reported as [`Status::Invalid`](crate::Status::Invalid).
    pub fn record_turn_with_darts(&mut self, score: i32, darts_used: u8) -> Feedback {
        if darts_used == 0 || darts_used > DARTS_PER_TURN {
            return Feedback::invalid();
        }
        if score < 0 || score > i32::from(MAX_TURN_SCORE) {
            return Feedback::invalid();
        }
        let score = score as u16;
        let remaining = self.remaining_score();

        // Leaving exactly 1 busts regardless of anything else.
        if remaining == score + 1 {
            self.turns.push_back(Turn::voided(darts_used));
            return Feedback::bust(remaining);
        }

        if score > remaining {
            self.turns.push_back(Turn::voided(darts_used));
            return Feedback::bust(remaining);
        }

        if score == remaining {
            if is_checkout_reachable(score) {
                self.turns.push_back(Turn::new(score, darts_used));
                return Feedback::completed();
            }
            // Finish attempt voided, score stands.
            self.turns.push_back(Turn::voided(darts_used));
            return Feedback::invalid_checkout(remaining);
        }

        self.turns.push_back(Turn::new(score, darts_used));
        let remaining = self.remaining_score();
        if is_checkout_reachable(remaining) {
            Feedback::checkout(remaining)
        } else {
            Feedback::ok(remaining)
        }
    }

    // === Statistics ===

    /// Points per dart, rounded to one decimal. `0.0` before any turn.
    #[must_use]
    pub fn points_per_dart(&self) -> f64 {
        self.stats().points_per_dart
    }

    /// Three-dart average, rounded to one decimal. `0.0` before any turn.
    #[must_use]
    pub fn three_dart_average(&self) -> f64 {
        self.stats().three_dart_average
    }

    /// Snapshot of the derived performance statistics.
    #[must_use]
    pub fn stats(&self) -> GameStats {
        GameStats::new(self.total_score(), self.darts_thrown(), self.turns.len() as u32)
    }

    // === Snapshots ===

    /// Encode the whole game to bytes for the hosting layer to store.
    ///
    /// # Errors
    ///
    /// Returns the underlying encoding error; with in-memory buffers this
    /// does not happen in practice.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode a game previously encoded with [`Game::to_bytes`].
    ///
    /// # Errors
    ///
    /// Returns a decoding error if the bytes are truncated or not a game
    /// snapshot.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}
