//! Move legality.

use smallvec::SmallVec;

use crate::cards::{Card, Suit};

/// Can `card` be placed on `top`?
///
/// Eights are always legal. Otherwise an active override requires its suit,
/// and without one the card must match the top card's suit or rank.
///
/// ```
/// use crazy_eights::cards::{Card, Rank, Suit};
/// use crazy_eights::rules::is_valid_move;
///
/// let top = Card::new(Suit::Hearts, Rank::Nine);
/// assert!(is_valid_move(&Card::new(Suit::Hearts, Rank::Two), &top, None));
/// assert!(is_valid_move(&Card::new(Suit::Clubs, Rank::Nine), &top, None));
/// assert!(!is_valid_move(&Card::new(Suit::Clubs, Rank::Two), &top, None));
///
/// // An override replaces top-card matching.
/// assert!(!is_valid_move(&Card::new(Suit::Hearts, Rank::Two), &top, Some(Suit::Spades)));
/// assert!(is_valid_move(&Card::new(Suit::Clubs, Rank::Eight), &top, Some(Suit::Spades)));
/// ```
#[must_use]
pub fn is_valid_move(card: &Card, top: &Card, suit_override: Option<Suit>) -> bool {
    if card.is_eight() {
        return true;
    }
    match suit_override {
        Some(suit) => card.suit == suit,
        None => card.suit == top.suit || card.rank == top.rank,
    }
}

/// Cards from `hand` that may be played, in hand order.
pub fn legal_cards<'a>(
    hand: impl IntoIterator<Item = &'a Card>,
    top: &Card,
    suit_override: Option<Suit>,
) -> SmallVec<[Card; 8]> {
    hand.into_iter()
        .filter(|card| is_valid_move(card, top, suit_override))
        .copied()
        .collect()
}
