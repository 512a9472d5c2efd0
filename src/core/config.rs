//! Game configuration.
//!
//! Defaults reproduce the standard table: eight cards each and a short
//! "thinking" pause before the computer moves. Every field can be set with a
//! `with_*` builder or overlaid from the environment with `from_env`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::error::ConfigError;

/// Largest hand size that still leaves five cards after dealing.
///
/// There are only four eights, so five remaining cards always include a
/// non-eight to open the discard pile.
pub const MAX_HAND_SIZE: usize = (Card::DECK_SIZE - OPENING_RESERVE) / 2;

const OPENING_RESERVE: usize = Suit::ALL.len() + 1;

/// Environment variable names read by `GameConfig::from_env`.
pub const ENV_HAND_SIZE: &str = "EIGHTS_HAND_SIZE";
pub const ENV_AI_DELAY_MS: &str = "EIGHTS_AI_DELAY_MS";
pub const ENV_FORFEIT_DELAY_MS: &str = "EIGHTS_FORFEIT_DELAY_MS";
pub const ENV_SEED: &str = "EIGHTS_SEED";

/// Table configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards dealt to each seat.
    pub hand_size: usize,

    /// Pause before the computer takes its turn.
    pub ai_delay: Duration,

    /// Pause before a human draw from an empty deck passes the turn.
    pub forfeit_delay: Duration,

    /// Root seed. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: 8,
            ai_delay: Duration::from_millis(800),
            forfeit_delay: Duration::from_millis(800),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of cards dealt to each seat.
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set the computer's thinking delay.
    pub fn with_ai_delay(mut self, delay: Duration) -> Self {
        self.ai_delay = delay;
        self
    }

    /// Set the empty-deck forfeit delay.
    pub fn with_forfeit_delay(mut self, delay: Duration) -> Self {
        self.forfeit_delay = delay;
        self
    }

    /// Fix the root seed for reproducible deals.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Remove all delays. Useful for tests and headless play.
    pub fn without_delays(self) -> Self {
        self.with_ai_delay(Duration::ZERO)
            .with_forfeit_delay(Duration::ZERO)
    }

    /// Check that a deal with this configuration can always succeed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hand_size == 0 || self.hand_size > MAX_HAND_SIZE {
            return Err(ConfigError::InvalidHandSize(self.hand_size));
        }
        Ok(())
    }

    /// Defaults overlaid with `EIGHTS_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from `lookup`.
    ///
    /// Split out of `from_env` so tests do not touch the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(size) = parse_var(&lookup, ENV_HAND_SIZE)? {
            config.hand_size = usize::try_from(size).map_err(|_| ConfigError::InvalidEnv {
                key: ENV_HAND_SIZE.to_string(),
                value: size.to_string(),
            })?;
        }
        if let Some(ms) = parse_var(&lookup, ENV_AI_DELAY_MS)? {
            config.ai_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = parse_var(&lookup, ENV_FORFEIT_DELAY_MS)? {
            config.forfeit_delay = Duration::from_millis(ms);
        }
        if let Some(seed) = parse_var(&lookup, ENV_SEED)? {
            config.seed = Some(seed);
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_var(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<u64>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv {
                key: key.to_string(),
                value: raw,
            }),
    }
}
