//! Error types.
//!
//! `Rejection` is the everyday case: a seat asked for something the rules
//! do not allow. A rejected action never changes the session.

use thiserror::Error;

use crate::cards::{Card, CardId};
use crate::core::Seat;

/// Why an action was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("the game is over")]
    GameOver,

    #[error("the session has not been dealt")]
    NotDealt,

    #[error("it is not {0}'s turn")]
    OutOfTurn(Seat),

    #[error("a suit must be chosen before anything else")]
    AwaitingSuit,

    #[error("no suit selection is pending")]
    NoSuitPending,

    #[error("{0} is not in the acting hand")]
    CardNotInHand(CardId),

    #[error("{card} cannot be played on {top}")]
    IllegalCard { card: Card, top: Card },

    #[error("scheduled task from generation {0} is stale")]
    StaleTask(u64),

    #[error("waiting for a scheduled turn to finish")]
    Busy,
}

/// Invalid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("hand size {0} must be between 1 and {max}", max = crate::core::config::MAX_HAND_SIZE)]
    InvalidHandSize(usize),

    #[error("environment variable {key} has invalid value {value:?}")]
    InvalidEnv { key: String, value: String },
}

/// Dealing failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    #[error("no non-eight card left to open the discard pile")]
    NoOpeningCard,
}

/// Any error the crate can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Rejected(#[from] Rejection),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Deal(#[from] DealError),

    #[error("session does not hold each of the 52 cards exactly once")]
    InconsistentSession,
}
