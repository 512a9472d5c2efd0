//! Shared helpers for integration tests.

#![allow(dead_code)]

use crazy_eights::{create_deck, Card, GameSession, Seat, Status};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once per binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// A playing session with chosen hands and top card.
///
/// Every other card is placed in the deck in factory order.
pub fn rigged(player: &[Card], ai: &[Card], top: Card, turn: Seat) -> GameSession {
    rigged_with_deck(player, ai, top, turn, true)
}

/// Like `rigged`, but leftover cards go under the top card instead of into
/// the deck, leaving the deck empty.
pub fn rigged_empty_deck(player: &[Card], ai: &[Card], top: Card, turn: Seat) -> GameSession {
    rigged_with_deck(player, ai, top, turn, false)
}

fn rigged_with_deck(
    player: &[Card],
    ai: &[Card],
    top: Card,
    turn: Seat,
    fill_deck: bool,
) -> GameSession {
    let rest: Vec<Card> = create_deck()
        .into_iter()
        .filter(|c| !player.contains(c) && !ai.contains(c) && *c != top)
        .collect();

    let mut session = GameSession::new();
    session.hands[Seat::Player] = player.iter().copied().collect();
    session.hands[Seat::Ai] = ai.iter().copied().collect();
    if fill_deck {
        session.deck = rest.into_iter().collect();
    } else {
        session.discard_pile = rest.into_iter().collect();
    }
    session.discard_pile.push_back(top);
    session.current_turn = turn;
    session.status = Status::Playing;
    assert!(session.conserves_cards());
    session
}
