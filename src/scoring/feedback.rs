//! Turn feedback: status taxonomy and user-facing messages.
//!
//! Every call to [`crate::Game::record_turn`] returns a `Feedback` — there
//! is no other error channel. The host decides how to render it (inline
//! warning, retry prompt, scoreboard update).

use serde::{Deserialize, Serialize};

/// Outcome of one recorded turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Turn accepted; game continues.
    Ok,
    /// Turn forfeited: it would have overshot zero or left exactly 1.
    Bust,
    /// Turn accepted and the new remaining score is finishable.
    /// Advisory only — the game is still ongoing.
    Checkout,
    /// The finishing throw hit exactly zero with a legal double-out.
    Completed,
    /// The proposed score was malformed; nothing was recorded.
    Invalid,
    /// The throw reached exactly zero but the finish was not a legal
    /// double-out. The attempt is voided.
    InvalidCheckout,
}

impl Status {
    /// Whether a turn was appended to the history for this outcome.
    ///
    /// False only for [`Status::Invalid`]; busts and voided checkout
    /// attempts still record a zero-score turn.
    #[must_use]
    pub const fn records_turn(self) -> bool {
        !matches!(self, Status::Invalid)
    }

    /// Whether this outcome ends the game.
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Status::Completed)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Status::Ok => "OK",
            Status::Bust => "BUST",
            Status::Checkout => "CHECKOUT",
            Status::Completed => "COMPLETED",
            Status::Invalid => "INVALID",
            Status::InvalidCheckout => "INVALID_CHECKOUT",
        };
        write!(f, "{name}")
    }
}

/// Status plus a ready-to-display message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    /// Machine-readable outcome.
    pub status: Status,

    /// Human-readable message, embedding the remaining score where relevant.
    pub message: String,
}

impl Feedback {
    /// Turn accepted, `remaining` left.
    #[must_use]
    pub fn ok(remaining: u16) -> Self {
        Self {
            status: Status::Ok,
            message: format!("{remaining} left"),
        }
    }

    /// Turn accepted and `remaining` is finishable.
    #[must_use]
    pub fn checkout(remaining: u16) -> Self {
        Self {
            status: Status::Checkout,
            message: format!("You have checkout! {remaining} left"),
        }
    }

    /// Turn forfeited; the score stays at `remaining`.
    #[must_use]
    pub fn bust(remaining: u16) -> Self {
        Self {
            status: Status::Bust,
            message: format!("You busted! {remaining} left"),
        }
    }

    /// Leg finished with a legal double-out.
    #[must_use]
    pub fn completed() -> Self {
        Self {
            status: Status::Completed,
            message: "Game shot! You checked out".to_string(),
        }
    }

    /// Malformed input; nothing recorded.
    #[must_use]
    pub fn invalid() -> Self {
        Self {
            status: Status::Invalid,
            message: "Invalid score, please enter your score again".to_string(),
        }
    }

    /// Finish attempt voided; the score stays at `remaining`.
    #[must_use]
    pub fn invalid_checkout(remaining: u16) -> Self {
        Self {
            status: Status::InvalidCheckout,
            message: format!("Score reset to {remaining}."),
        }
    }
}
