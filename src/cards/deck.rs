//! Deck construction, shuffling and the opening deal.

use im::Vector;
use tracing::debug;

use super::card::{Card, Rank, Suit};
use crate::core::{GameConfig, GameRng, GameSession, Seat, Status};
use crate::error::DealError;

/// Build the 52-card deck, suits in `Suit::ALL` order, ace to king.
#[must_use]
pub fn create_deck() -> Vec<Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(suit, rank)))
        .collect()
}

/// Return a uniformly random permutation of `cards`.
///
/// The input is left untouched. All randomness comes from `rng`.
#[must_use]
pub fn shuffle(cards: &[Card], rng: &mut GameRng) -> Vec<Card> {
    let mut shuffled = cards.to_vec();
    rng.shuffle(&mut shuffled);
    shuffled
}

/// Shuffle a fresh deck and deal a session.
///
/// The first `hand_size` cards go to the player, the next `hand_size` to the
/// computer. The first non-eight among the rest opens the discard pile and
/// everything else, in order, becomes the draw deck. The player moves first.
pub fn deal(config: &GameConfig, rng: &mut GameRng) -> Result<GameSession, DealError> {
    let shuffled = shuffle(&create_deck(), rng);
    deal_from(shuffled, config.hand_size)
}

/// Deal from an already ordered deck.
pub fn deal_from(cards: Vec<Card>, hand_size: usize) -> Result<GameSession, DealError> {
    let mut session = GameSession::new();
    let mut remaining: Vector<Card> = cards.into_iter().collect();

    for seat in Seat::ALL {
        let rest = remaining.split_off(hand_size.min(remaining.len()));
        session.hands[seat] = remaining;
        remaining = rest;
    }

    let opening = remaining
        .iter()
        .position(|card| !card.is_eight())
        .ok_or(DealError::NoOpeningCard)?;
    let opening_card = remaining.remove(opening);

    session.discard_pile.push_back(opening_card);
    session.deck = remaining;
    session.status = Status::Playing;

    debug!(
        top = %opening_card,
        deck = session.deck.len(),
        hand_size,
        "dealt new session"
    );

    Ok(session)
}
