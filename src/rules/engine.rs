//! Rules engine trait.
//!
//! Implementations define:
//! - What actions are legal
//! - How actions modify state
//! - When the game is over
//!
//! `apply_action` must validate completely before it mutates anything, so
//! a rejected action leaves the session exactly as it was.

use crate::core::{Action, GameSession, Seat};
use crate::error::Rejection;

use super::event::GameEvent;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(Seat),
}

impl GameResult {
    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, seat: Seat) -> bool {
        match self {
            GameResult::Winner(s) => *s == seat,
        }
    }
}

/// Rules engine trait.
pub trait RulesEngine {
    /// Every action `seat` may take right now. Empty if it cannot act.
    fn legal_actions(&self, state: &GameSession, seat: Seat) -> Vec<Action>;

    /// Apply an action in place.
    ///
    /// Must be deterministic, and must not touch `state` when it returns `Err`.
    fn apply_action(
        &self,
        state: &mut GameSession,
        seat: Seat,
        action: &Action,
    ) -> Result<GameEvent, Rejection>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameSession) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Pure transition: returns the successor session and leaves `state` as is.
    fn apply(
        &self,
        state: &GameSession,
        seat: Seat,
        action: &Action,
    ) -> Result<(GameSession, GameEvent), Rejection> {
        let mut next = state.clone();
        let event = self.apply_action(&mut next, seat, action)?;
        Ok((next, event))
    }

    /// Is `action` currently legal for `seat`?
    fn is_legal(&self, state: &GameSession, seat: Seat, action: &Action) -> bool {
        self.legal_actions(state, seat).contains(action)
    }
}
