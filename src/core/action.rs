//! Action representation and history records.
//!
//! An `Action` is what a seat asks the rules engine to do. Accepted actions
//! are recorded on the session as `ActionRecord`s, which is enough to replay
//! a game from its deal.

use serde::{Deserialize, Serialize};

use super::player::Seat;
use crate::cards::{CardId, Suit};

/// A move request from one seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Discard the card with this id from the acting hand.
    PlayCard(CardId),
    /// Take the front card of the draw deck (a forfeit if the deck is empty).
    Draw,
    /// Declare the required suit after playing an eight.
    SelectSuit(Suit),
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that took this action.
    pub seat: Seat,

    /// The action taken.
    pub action: Action,

    /// Zero-based position in the session's history.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(seat: Seat, action: Action, sequence: u32) -> Self {
        Self {
            seat,
            action,
            sequence,
        }
    }
}
