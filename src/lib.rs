//! # crazy-eights
//!
//! A Crazy Eights rules engine for one human against a computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: `RulesEngine::apply(session, seat, action)`
//!    returns the successor session and leaves the input untouched.
//!    Sessions clone in O(1) thanks to `im-rs`.
//!
//! 2. **Reject, never half-apply**: an illegal or out-of-turn action is
//!    returned as a `Rejection` and the session is not modified.
//!
//! 3. **Deterministic**: a seeded `GameRng` reproduces every deal, so whole
//!    games replay from their action history.
//!
//! ## Turn Flow
//!
//! The human drives `GameController` (or the async `Table`). When the
//! computer must move, the controller issues a `Ticket` carrying the
//! configured thinking delay. Tickets belong to a session generation;
//! resetting the game makes outstanding tickets stale.
//!
//! ## Modules
//!
//! - `core`: seats, session state, actions, RNG, configuration
//! - `cards`: cards and the deck factory
//! - `rules`: move validation, the `RulesEngine` trait, events
//! - `games`: the Crazy Eights rule set and headless self-play
//! - `ai`: computer opponent policies
//! - `session`: the action API, delayed turns and status messages

pub mod core;
pub mod cards;
pub mod rules;
pub mod games;
pub mod ai;
pub mod session;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Seat, SeatMap,
    GameRng,
    GameConfig,
    Action, ActionRecord,
    GameSession, Status,
};

pub use crate::cards::{Card, CardId, Rank, Suit, create_deck, deal, shuffle};

pub use crate::rules::{RulesEngine, GameResult, GameEvent, is_valid_move};

pub use crate::games::eights::{CrazyEights, SelfPlay, SelfPlayConfig, SelfPlayOutcome};

pub use crate::ai::{AiPolicy, Decision, GreedyPolicy, choose_suit};

pub use crate::session::{GameController, Snapshot, Table, TaskKind, Ticket};

pub use crate::error::{ConfigError, DealError, Error, Rejection};
