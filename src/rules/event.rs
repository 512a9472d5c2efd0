//! Events produced by accepted actions.
//!
//! Each accepted action yields exactly one `GameEvent` describing what
//! happened. The session controller turns these into status messages.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::core::Seat;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A non-eight was discarded and the turn passed.
    Played { seat: Seat, card: Card },

    /// An eight was discarded; the same seat must now declare a suit.
    AwaitingSuit { seat: Seat, card: Card },

    /// A suit was declared after an eight and the turn passed.
    SuitDeclared { seat: Seat, suit: Suit },

    /// A card was drawn and the turn passed.
    Drew { seat: Seat, card: Card },

    /// The deck was empty; the turn passed without a draw.
    Forfeited { seat: Seat },

    /// The seat discarded its last card.
    Won { seat: Seat, card: Card },
}

impl GameEvent {
    /// The seat that acted.
    #[must_use]
    pub fn seat(&self) -> Seat {
        match *self {
            GameEvent::Played { seat, .. }
            | GameEvent::AwaitingSuit { seat, .. }
            | GameEvent::SuitDeclared { seat, .. }
            | GameEvent::Drew { seat, .. }
            | GameEvent::Forfeited { seat }
            | GameEvent::Won { seat, .. } => seat,
        }
    }

    /// Does this event hand the turn to the other seat?
    #[must_use]
    pub fn passes_turn(&self) -> bool {
        !matches!(self, GameEvent::AwaitingSuit { .. } | GameEvent::Won { .. })
    }
}
