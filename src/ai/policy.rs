//! Computer opponent policy seam.
//!
//! The session controller asks an `AiPolicy` what to do whenever the
//! computer is to move. Policies only read the session; the controller
//! applies the decision through the rules engine.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::core::{GameSession, Seat};

/// What the computer wants to do this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// Discard `card`. `declare` is the suit to name if it is an eight.
    Play { card: Card, declare: Option<Suit> },
    /// Draw from the deck, or forfeit if it is empty.
    Draw,
}

/// Decision policy for a computer seat.
pub trait AiPolicy: Send + Sync {
    /// Choose a move for `seat`, which is the seat to act.
    fn decide(&self, session: &GameSession, seat: Seat) -> Decision;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}
