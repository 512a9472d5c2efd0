//! Human-readable status lines.
//!
//! Cosmetic only; nothing in the engine reads them back.

use crate::core::Seat;
use crate::rules::GameEvent;

pub const NEW_GAME: &str = "New game! Your turn.";
pub const EMPTY_DECK_PENDING: &str = "The deck is empty. Passing your turn...";

/// Describe one turn's events as a single status line.
pub fn describe(events: &[GameEvent]) -> String {
    match events {
        [GameEvent::AwaitingSuit { seat: Seat::Ai, card }, GameEvent::SuitDeclared { suit, .. }] => {
            format!("AI played {card} and chose {suit}. Your turn.")
        }
        [.., last] => describe_one(last),
        [] => String::new(),
    }
}

fn describe_one(event: &GameEvent) -> String {
    match *event {
        GameEvent::Played { seat: Seat::Player, card } => {
            format!("You played {card}. AI's turn.")
        }
        GameEvent::Played { seat: Seat::Ai, card } => format!("AI played {card}. Your turn."),
        GameEvent::AwaitingSuit { seat: Seat::Player, card } => {
            format!("You played {card}! Choose a suit.")
        }
        GameEvent::AwaitingSuit { seat: Seat::Ai, card } => format!("AI played {card}."),
        GameEvent::SuitDeclared { seat: Seat::Player, suit } => {
            format!("You chose {suit}. AI's turn.")
        }
        GameEvent::SuitDeclared { seat: Seat::Ai, suit } => {
            format!("AI chose {suit}. Your turn.")
        }
        GameEvent::Drew { seat: Seat::Player, card } => format!("You drew {card}. AI's turn."),
        GameEvent::Drew { seat: Seat::Ai, .. } => "AI drew a card. Your turn.".to_string(),
        GameEvent::Forfeited { seat: Seat::Player } => {
            "The deck is empty. You pass. AI's turn.".to_string()
        }
        GameEvent::Forfeited { seat: Seat::Ai } => {
            "The deck is empty. AI passes. Your turn.".to_string()
        }
        GameEvent::Won { seat: Seat::Player, .. } => "You win!".to_string(),
        GameEvent::Won { seat: Seat::Ai, card } => format!("AI played {card} and wins!"),
    }
}
