//! Playing cards and the deck factory.
//!
//! - `card`: `Suit`, `Rank`, `CardId` and the immutable `Card`
//! - `deck`: building, shuffling and dealing the 52-card deck

pub mod card;
pub mod deck;

pub use card::{Card, CardId, Rank, Suit};
pub use deck::{create_deck, deal, deal_from, shuffle};
