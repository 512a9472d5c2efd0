//! Greedy computer opponent.
//!
//! No lookahead and no card counting: play the first legal non-eight in hand
//! order, fall back to an eight, otherwise draw. When an eight is played,
//! name the suit the rest of the hand holds most of.

use crate::cards::{Card, Suit};
use crate::core::{GameSession, Seat};
use crate::rules::legal_cards;

use super::policy::{AiPolicy, Decision};

/// Suit named when the remaining hand is empty.
pub const DEFAULT_SUIT: Suit = Suit::Hearts;

#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPolicy;

impl GreedyPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl AiPolicy for GreedyPolicy {
    fn decide(&self, session: &GameSession, seat: Seat) -> Decision {
        let Some(top) = session.top_card() else {
            return Decision::Draw;
        };
        let hand = session.hand(seat);
        let candidates = legal_cards(hand, top, session.suit_override);

        let Some(card) = candidates
            .iter()
            .find(|card| !card.is_eight())
            .or_else(|| candidates.first())
            .copied()
        else {
            return Decision::Draw;
        };

        let declare = card.is_eight().then(|| {
            choose_suit(hand.iter().filter(|held| held.id != card.id))
        });

        Decision::Play { card, declare }
    }

    fn name(&self) -> &'static str {
        "greedy"
    }
}

/// The most common suit in `hand`.
///
/// Ties go to the suit listed first in `Suit::ALL`. An empty hand yields
/// `DEFAULT_SUIT`.
pub fn choose_suit<'a>(hand: impl IntoIterator<Item = &'a Card>) -> Suit {
    let mut counts = [0usize; 4];
    for card in hand {
        counts[card.suit.index()] += 1;
    }

    let mut best = DEFAULT_SUIT;
    let mut best_count = 0;
    for suit in Suit::ALL {
        if counts[suit.index()] > best_count {
            best = suit;
            best_count = counts[suit.index()];
        }
    }
    best
}
