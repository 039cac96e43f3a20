//! Player identification.
//!
//! ## PlayerId
//!
//! Opaque reference to the player who owns a game. The hosting application
//! authenticates the player and passes the identity in explicitly at game
//! creation; the engine stores it and never interprets its value.

use serde::{Deserialize, Serialize};

/// Opaque identifier for the player owning a game.
///
/// Typically the host's account id. No scoring behavior depends on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

impl From<u32> for PlayerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}
