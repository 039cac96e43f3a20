//! Turn records.
//!
//! A turn is up to three darts thrown in sequence, recorded as a single
//! `{score, darts_used}` pair. The engine appends exactly one `Turn` per
//! accepted call; busts and illegal checkout attempts are recorded as
//! zero-score turns so the history still accounts for the darts thrown.

use serde::{Deserialize, Serialize};

/// Maximum score achievable with three darts (treble 20, three times).
pub const MAX_TURN_SCORE: u16 = 180;

/// Darts thrown in a full turn.
pub const DARTS_PER_TURN: u8 = 3;

/// One recorded turn: the score that counted and the darts it took.
///
/// `darts_used` feeds the per-dart statistics only; it never affects the
/// validity of the score itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    /// Points scored this turn, `0..=180`.
    pub score: u16,

    /// Darts thrown this turn, `1..=3`.
    pub darts_used: u8,
}

impl Turn {
    /// Create a turn record.
    #[must_use]
    pub const fn new(score: u16, darts_used: u8) -> Self {
        Self { score, darts_used }
    }

    /// A voided turn: the darts were thrown but the score is forfeited.
    ///
    /// Recorded on busts and on finishes that fail the double-out check.
    #[must_use]
    pub const fn voided(darts_used: u8) -> Self {
        Self {
            score: 0,
            darts_used,
        }
    }
}
