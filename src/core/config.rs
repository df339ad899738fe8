//! Session configuration.
//!
//! `SessionConfig` carries the tunables of a play-through: how many lives
//! the player starts with and how long a placement result stays on screen
//! before the next card is drawn.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Lives at the start of every session.
pub const DEFAULT_STARTING_LIVES: u32 = 3;

/// How long a placement outcome is shown before it resolves.
pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_millis(1000);

/// Configuration shared by every session a controller deals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Lives at session start. Must be at least 1.
    pub starting_lives: u32,

    /// Feedback window after each placement.
    #[serde(with = "millis")]
    pub feedback_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            starting_lives: DEFAULT_STARTING_LIVES,
            feedback_delay: DEFAULT_FEEDBACK_DELAY,
        }
    }
}

impl SessionConfig {
    /// Create the default configuration (3 lives, 1 second feedback).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of starting lives.
    #[must_use]
    pub fn with_starting_lives(mut self, lives: u32) -> Self {
        self.starting_lives = lives;
        self
    }

    /// Set the feedback delay.
    #[must_use]
    pub fn with_feedback_delay(mut self, delay: Duration) -> Self {
        self.feedback_delay = delay;
        self
    }

    /// Check the configuration can produce a playable session.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_lives == 0 {
            return Err(ConfigError::NoLives);
        }
        Ok(())
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(delay: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(ms)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::new();
        assert_eq!(config.starting_lives, 3);
        assert_eq!(config.feedback_delay, Duration::from_secs(1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = SessionConfig::new()
            .with_starting_lives(5)
            .with_feedback_delay(Duration::from_millis(250));

        assert_eq!(config.starting_lives, 5);
        assert_eq!(config.feedback_delay, Duration::from_millis(250));
    }

    #[test]
    fn test_zero_lives_rejected() {
        let config = SessionConfig::new().with_starting_lives(0);
        assert!(matches!(config.validate(), Err(ConfigError::NoLives)));
    }

    #[test]
    fn test_serde_uses_milliseconds() {
        let config = SessionConfig::new().with_feedback_delay(Duration::from_millis(1500));

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"starting_lives":3,"feedback_delay":1500}"#);

        let back: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
