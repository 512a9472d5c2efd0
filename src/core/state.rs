//! Game session state.
//!
//! `GameSession` is the complete, authoritative state of one deal: the draw
//! deck, both hands, the discard pile, whose turn it is, the status, the
//! winner and any active suit override.
//!
//! Card sequences use `im::Vector`, so cloning a session is O(1). The rules
//! engine relies on that to offer a pure `apply(session) -> session'`.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::player::{Seat, SeatMap};
use crate::cards::{Card, Suit};

/// Session status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Cards are being dealt. Only seen before `deal` returns.
    Dealing,
    /// The seat in `current_turn` must play or draw.
    Playing,
    /// The seat in `current_turn` just played an eight and must pick a suit.
    SuitSelection,
    /// A hand is empty. Terminal.
    GameOver,
}

/// Complete state of one deal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    /// Draw deck. Front is drawn next.
    pub deck: Vector<Card>,

    /// Hands, in arrival order.
    pub hands: SeatMap<Vector<Card>>,

    /// Discard pile. Last element is the top card.
    pub discard_pile: Vector<Card>,

    pub current_turn: Seat,

    pub status: Status,

    /// Set exactly once, when a hand empties.
    pub winner: Option<Seat>,

    /// Suit declared with the last eight. Cleared by the next non-eight play.
    pub suit_override: Option<Suit>,

    /// Accepted actions in order.
    pub history: Vector<ActionRecord>,
}

impl GameSession {
    /// Create an empty session in the `Dealing` status.
    #[must_use]
    pub fn new() -> Self {
        Self {
            deck: Vector::new(),
            hands: SeatMap::with_default(),
            discard_pile: Vector::new(),
            current_turn: Seat::Player,
            status: Status::Dealing,
            winner: None,
            suit_override: None,
            history: Vector::new(),
        }
    }

    /// The human's hand.
    #[must_use]
    pub fn player_hand(&self) -> &Vector<Card> {
        &self.hands[Seat::Player]
    }

    /// The computer's hand.
    #[must_use]
    pub fn ai_hand(&self) -> &Vector<Card> {
        &self.hands[Seat::Ai]
    }

    #[must_use]
    pub fn hand(&self, seat: Seat) -> &Vector<Card> {
        &self.hands[seat]
    }

    /// Last card of the discard pile.
    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.discard_pile.last()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status == Status::GameOver
    }

    /// Total cards across deck, hands and discard pile.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len()
            + self.hands.iter().map(|(_, hand)| hand.len()).sum::<usize>()
            + self.discard_pile.len()
    }

    /// Check that every one of the 52 cards is held exactly once.
    #[must_use]
    pub fn conserves_cards(&self) -> bool {
        if self.card_count() != Card::DECK_SIZE {
            return false;
        }

        let mut seen = FxHashSet::default();
        let all = self
            .deck
            .iter()
            .chain(self.player_hand().iter())
            .chain(self.ai_hand().iter())
            .chain(self.discard_pile.iter());

        for card in all {
            if *card != Card::new(card.suit, card.rank) || !seen.insert(card.id) {
                return false;
            }
        }

        seen.len() == Card::DECK_SIZE
    }

    /// Append an accepted action to the history.
    pub fn record_action(&mut self, seat: Seat, action: Action) {
        let sequence = self.history.len() as u32;
        self.history.push_back(ActionRecord::new(seat, action, sequence));
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
