//! End-to-end scenarios through the rules engine and the controller.

mod common;

use common::{init_logging, rigged, rigged_empty_deck};
use crazy_eights::{
    Action, Card, CrazyEights, GameConfig, GameController, GameEvent, GameResult, GameRng,
    GreedyPolicy, Rank, Rejection, RulesEngine, Seat, Status, Suit, TaskKind,
};

fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn fast_config(seed: u64) -> GameConfig {
    GameConfig::new().with_seed(seed).without_delays()
}

// =============================================================================
// Dealing
// =============================================================================

/// A default deal always leaves 8/8/1/35 and a non-eight on top.
#[test]
fn test_fresh_deal_layout() {
    init_logging();
    let rules = CrazyEights::new();

    for seed in 0..200 {
        let session = rules
            .new_session(&GameConfig::default(), &mut GameRng::new(seed))
            .unwrap();

        assert_eq!(session.player_hand().len(), 8);
        assert_eq!(session.ai_hand().len(), 8);
        assert_eq!(session.discard_pile.len(), 1);
        assert_eq!(session.deck.len(), 35);
        assert!(!session.top_card().unwrap().is_eight());
        assert_eq!(session.status, Status::Playing);
        assert_eq!(session.current_turn, Seat::Player);
        assert!(session.suit_override.is_none());
        assert!(session.winner.is_none());
        assert!(session.history.is_empty());
        assert!(session.conserves_cards());
    }
}

/// Custom hand sizes deal the requested number of cards.
#[test]
fn test_custom_hand_size() {
    let mut ctl = GameController::new(fast_config(3).with_hand_size(5)).unwrap();
    assert_eq!(ctl.session().player_hand().len(), 5);
    assert_eq!(ctl.session().ai_hand().len(), 5);
    assert_eq!(ctl.session().deck.len(), 52 - 11);

    ctl.reset_game().unwrap();
    assert_eq!(ctl.session().player_hand().len(), 5);
}

/// An out-of-range hand size is refused up front.
#[test]
fn test_invalid_config_rejected() {
    assert!(GameController::new(fast_config(1).with_hand_size(0)).is_err());
    assert!(GameController::new(fast_config(1).with_hand_size(24)).is_err());
}

// =============================================================================
// Winning
// =============================================================================

/// A lone eight wins outright and no suit is asked for.
#[test]
fn test_lone_eight_wins() {
    init_logging();
    let rules = CrazyEights::new();
    let eight = card(Suit::Hearts, Rank::Eight);
    let session = rigged(
        &[eight],
        &[card(Suit::Clubs, Rank::Two), card(Suit::Spades, Rank::Four)],
        card(Suit::Diamonds, Rank::King),
        Seat::Player,
    );

    let (after, event) = rules
        .apply(&session, Seat::Player, &Action::PlayCard(eight.id))
        .unwrap();

    assert_eq!(event, GameEvent::Won { seat: Seat::Player, card: eight });
    assert_eq!(after.status, Status::GameOver);
    assert_eq!(after.winner, Some(Seat::Player));
    assert_eq!(rules.is_terminal(&after), Some(GameResult::Winner(Seat::Player)));
    assert_eq!(after.top_card(), Some(&eight));

    // Nothing is accepted once the game is over.
    assert_eq!(
        rules.apply(&after, Seat::Ai, &Action::Draw).unwrap_err(),
        Rejection::GameOver
    );
    assert_eq!(
        rules.apply(&after, Seat::Player, &Action::SelectSuit(Suit::Clubs)).unwrap_err(),
        Rejection::GameOver
    );
    assert!(rules.legal_actions(&after, Seat::Ai).is_empty());
}

/// The controller reports the win and schedules nothing afterwards.
#[test]
fn test_controller_player_win() {
    let five = card(Suit::Spades, Rank::Five);
    let session = rigged(
        &[five],
        &[card(Suit::Hearts, Rank::Two)],
        card(Suit::Spades, Rank::Jack),
        Seat::Player,
    );
    let mut ctl =
        GameController::with_session(fast_config(1), Box::new(GreedyPolicy::new()), session)
            .unwrap();

    assert_eq!(ctl.play_card(five.id), Ok(None));
    assert_eq!(ctl.message(), "You win!");
    assert_eq!(ctl.session().winner, Some(Seat::Player));
    assert_eq!(ctl.draw_card(), Err(Rejection::GameOver));
}

// =============================================================================
// Computer opponent
// =============================================================================

/// With only an eight playable, the computer plays it and names the suit it
/// holds most of.
#[test]
fn test_ai_plays_eight_and_names_majority_suit() {
    init_logging();
    let eight = card(Suit::Spades, Rank::Eight);
    let session = rigged(
        &[card(Suit::Hearts, Rank::Two), card(Suit::Hearts, Rank::Three)],
        &[
            card(Suit::Clubs, Rank::Four),
            eight,
            card(Suit::Diamonds, Rank::Five),
            card(Suit::Diamonds, Rank::Six),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Diamonds, Rank::Queen),
        ],
        card(Suit::Hearts, Rank::King),
        Seat::Ai,
    );
    let mut ctl =
        GameController::with_session(fast_config(1), Box::new(GreedyPolicy::new()), session)
            .unwrap();

    let ticket = ctl.pending().unwrap();
    assert_eq!(ticket.kind, TaskKind::AiTurn);
    assert_eq!(ctl.fire(ticket), Ok(None));

    let session = ctl.session();
    assert_eq!(session.top_card(), Some(&eight));
    assert_eq!(session.suit_override, Some(Suit::Diamonds));
    assert_eq!(session.status, Status::Playing);
    assert_eq!(session.current_turn, Seat::Player);
    assert_eq!(session.ai_hand().len(), 5);
    assert_eq!(
        ctl.message(),
        "AI played 8 of spades and chose diamonds. Your turn."
    );
}

/// After an eight, only the declared suit or another eight may follow.
#[test]
fn test_declared_suit_binds_next_play() {
    let rules = CrazyEights::new();
    let eight = card(Suit::Clubs, Rank::Eight);
    let heart = card(Suit::Hearts, Rank::Four);
    let club = card(Suit::Clubs, Rank::Four);
    let spade = card(Suit::Spades, Rank::Ten);
    let session = rigged(
        &[eight, spade, card(Suit::Diamonds, Rank::Two)],
        &[heart, club, card(Suit::Spades, Rank::Eight)],
        card(Suit::Clubs, Rank::Ace),
        Seat::Player,
    );

    let (session, event) = rules
        .apply(&session, Seat::Player, &Action::PlayCard(eight.id))
        .unwrap();
    assert_eq!(event, GameEvent::AwaitingSuit { seat: Seat::Player, card: eight });
    assert_eq!(session.status, Status::SuitSelection);
    assert_eq!(session.current_turn, Seat::Player);
    assert_eq!(
        rules.apply(&session, Seat::Player, &Action::Draw).unwrap_err(),
        Rejection::AwaitingSuit
    );

    let (session, _) = rules
        .apply(&session, Seat::Player, &Action::SelectSuit(Suit::Hearts))
        .unwrap();
    assert_eq!(session.suit_override, Some(Suit::Hearts));
    assert_eq!(session.current_turn, Seat::Ai);

    // The club matches the eight's suit but not the declaration.
    assert_eq!(
        rules.apply(&session, Seat::Ai, &Action::PlayCard(club.id)).unwrap_err(),
        Rejection::IllegalCard { card: club, top: eight }
    );

    let (session, _) = rules
        .apply(&session, Seat::Ai, &Action::PlayCard(heart.id))
        .unwrap();
    assert!(session.suit_override.is_none());
    assert_eq!(session.current_turn, Seat::Player);
}

// =============================================================================
// Empty deck
// =============================================================================

/// Drawing from an empty deck passes the turn and moves no cards.
#[test]
fn test_empty_deck_forfeit_keeps_hands() {
    init_logging();
    let rules = CrazyEights::new();
    let session = rigged_empty_deck(
        &[card(Suit::Clubs, Rank::Two), card(Suit::Clubs, Rank::Three)],
        &[card(Suit::Spades, Rank::Two)],
        card(Suit::Hearts, Rank::King),
        Seat::Player,
    );

    let (after, event) = rules.apply(&session, Seat::Player, &Action::Draw).unwrap();

    assert_eq!(event, GameEvent::Forfeited { seat: Seat::Player });
    assert_eq!(after.current_turn, Seat::Ai);
    assert_eq!(after.player_hand(), session.player_hand());
    assert_eq!(after.ai_hand(), session.ai_hand());
    assert_eq!(after.discard_pile, session.discard_pile);
    assert!(after.deck.is_empty());
    assert!(after.conserves_cards());
}

/// The controller defers the forfeit to a ticket, then hands the computer
/// its turn.
#[test]
fn test_controller_empty_deck_forfeit() {
    let session = rigged_empty_deck(
        &[card(Suit::Clubs, Rank::Two), card(Suit::Clubs, Rank::Three)],
        &[card(Suit::Spades, Rank::Two), card(Suit::Diamonds, Rank::Jack)],
        card(Suit::Hearts, Rank::King),
        Seat::Player,
    );
    let mut ctl = GameController::with_session(
        fast_config(1),
        Box::new(GreedyPolicy::new()),
        session.clone(),
    )
    .unwrap();

    let forfeit = ctl.draw_card().unwrap().unwrap();
    assert_eq!(forfeit.kind, TaskKind::Forfeit);
    assert_eq!(ctl.session(), &session);
    assert_eq!(ctl.message(), "The deck is empty. Passing your turn...");
    assert_eq!(ctl.play_card(session.player_hand()[0].id), Err(Rejection::Busy));

    let ai_turn = ctl.fire(forfeit).unwrap().unwrap();
    assert_eq!(ai_turn.kind, TaskKind::AiTurn);
    assert_eq!(ctl.session().current_turn, Seat::Ai);
    assert_eq!(ctl.session().player_hand(), session.player_hand());

    // The computer cannot play on a king of hearts either, so it passes back.
    assert_eq!(ctl.fire(ai_turn), Ok(None));
    assert_eq!(ctl.session().current_turn, Seat::Player);
    assert_eq!(ctl.session().ai_hand(), session.ai_hand());
    assert_eq!(ctl.message(), "The deck is empty. AI passes. Your turn.");
}

// =============================================================================
// Turn order
// =============================================================================

/// Acting out of turn is refused without touching the session.
#[test]
fn test_out_of_turn_rejected() {
    let mut ctl = GameController::new(fast_config(11)).unwrap();
    let before = ctl.session().clone();
    let rules = CrazyEights::new();

    assert_eq!(
        rules.apply(&before, Seat::Ai, &Action::Draw).unwrap_err(),
        Rejection::OutOfTurn(Seat::Ai)
    );
    assert_eq!(ctl.select_suit(Suit::Clubs), Err(Rejection::NoSuitPending));
    assert_eq!(ctl.session(), &before);
}

/// Whole games driven through the controller keep every card accounted for.
#[test]
fn test_controller_plays_to_completion() {
    init_logging();

    for seed in 0..20 {
        let mut ctl = GameController::new(fast_config(seed)).unwrap();
        let rules = CrazyEights::new();
        let mut turns = 0;

        while !ctl.session().is_over() && turns < 500 {
            let action = rules
                .legal_actions(ctl.session(), Seat::Player)
                .into_iter()
                .next()
                .unwrap();
            match action {
                Action::PlayCard(id) => ctl.play_card(id).unwrap(),
                Action::Draw => ctl.draw_card().unwrap(),
                Action::SelectSuit(suit) => ctl.select_suit(suit).unwrap(),
            };
            ctl.run_pending().unwrap();
            assert!(ctl.session().conserves_cards());
            turns += 1;
        }

        if let Some(winner) = ctl.session().winner {
            assert!(ctl.session().hand(winner).is_empty());
        }
    }
}
