//! Game configuration.
//!
//! x01 games differ only in their starting score (501 standard, 301 for
//! shorter legs). Double-out is always enforced; there is no flag for it.

use serde::{Deserialize, Serialize};

/// Configuration for one x01 game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Score each player counts down from. Must be positive.
    pub starting_score: u16,
}

impl GameConfig {
    /// Create a configuration with the given starting score.
    #[must_use]
    pub const fn new(starting_score: u16) -> Self {
        Self { starting_score }
    }
}

impl Default for GameConfig {
    /// Standard 501.
    fn default() -> Self {
        Self {
            starting_score: 501,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_501() {
        assert_eq!(GameConfig::default().starting_score, 501);
    }

    #[test]
    fn test_custom_starting_score() {
        assert_eq!(GameConfig::new(301).starting_score, 301);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::new(701);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
