//! Crazy Eights rules.

use smallvec::{smallvec, SmallVec};
use tracing::{debug, warn};

use crate::ai::{choose_suit, AiPolicy, Decision};
use crate::cards::{deal, CardId, Suit};
use crate::core::{Action, GameConfig, GameRng, GameSession, Seat, Status};
use crate::error::{Error, Rejection};
use crate::rules::{is_valid_move, legal_cards, GameEvent, GameResult, RulesEngine};

/// The Crazy Eights state machine.
///
/// Stateless: everything lives in the `GameSession` passed to each call.
#[derive(Clone, Copy, Debug, Default)]
pub struct CrazyEights;

impl CrazyEights {
    pub fn new() -> Self {
        Self
    }

    /// Validate `config` and deal a fresh session.
    pub fn new_session(&self, config: &GameConfig, rng: &mut GameRng) -> Result<GameSession, Error> {
        config.validate()?;
        Ok(deal(config, rng)?)
    }

    /// Let `policy` take `seat`'s whole turn.
    ///
    /// An eight and its suit declaration happen in one call, so the
    /// `SuitSelection` status is never left behind for a policy-driven seat.
    /// A decision the rules refuse is logged and replaced by a draw.
    pub fn play_turn(
        &self,
        state: &mut GameSession,
        seat: Seat,
        policy: &dyn AiPolicy,
    ) -> Result<SmallVec<[GameEvent; 2]>, Rejection> {
        Self::check_turn(state, seat)?;

        if state.status == Status::SuitSelection {
            let suit = choose_suit(state.hand(seat));
            let event = self.apply_action(state, seat, &Action::SelectSuit(suit))?;
            return Ok(smallvec![event]);
        }

        let decision = policy.decide(state, seat);
        let (card, declare) = match decision {
            Decision::Play { card, declare } => (card, declare),
            Decision::Draw => {
                let event = self.apply_action(state, seat, &Action::Draw)?;
                return Ok(smallvec![event]);
            }
        };

        let played = match self.apply_action(state, seat, &Action::PlayCard(card.id)) {
            Ok(event) => event,
            Err(rejection) => {
                warn!(
                    policy = policy.name(),
                    %seat,
                    %card,
                    %rejection,
                    "policy chose a refused card, drawing instead"
                );
                let event = self.apply_action(state, seat, &Action::Draw)?;
                return Ok(smallvec![event]);
            }
        };

        let mut events: SmallVec<[GameEvent; 2]> = smallvec![played];
        if let GameEvent::AwaitingSuit { .. } = played {
            let suit = declare.unwrap_or_else(|| choose_suit(state.hand(seat)));
            events.push(self.apply_action(state, seat, &Action::SelectSuit(suit))?);
        }
        Ok(events)
    }

    fn check_turn(state: &GameSession, seat: Seat) -> Result<(), Rejection> {
        match state.status {
            Status::GameOver => return Err(Rejection::GameOver),
            Status::Dealing => return Err(Rejection::NotDealt),
            Status::Playing | Status::SuitSelection => {}
        }
        if state.current_turn != seat {
            return Err(Rejection::OutOfTurn(seat));
        }
        Ok(())
    }

    fn play_card(
        state: &mut GameSession,
        seat: Seat,
        action: &Action,
        id: CardId,
    ) -> Result<GameEvent, Rejection> {
        if state.status == Status::SuitSelection {
            return Err(Rejection::AwaitingSuit);
        }

        let index = state.hands[seat]
            .iter()
            .position(|card| card.id == id)
            .ok_or(Rejection::CardNotInHand(id))?;
        let card = state.hands[seat][index];
        let top = *state.top_card().ok_or(Rejection::NotDealt)?;

        if !is_valid_move(&card, &top, state.suit_override) {
            return Err(Rejection::IllegalCard { card, top });
        }

        state.hands[seat].remove(index);
        state.discard_pile.push_back(card);
        state.record_action(seat, *action);

        if !card.is_eight() {
            state.suit_override = None;
        }

        if state.hands[seat].is_empty() {
            state.status = Status::GameOver;
            state.winner = Some(seat);
            debug!(%seat, %card, "hand emptied");
            return Ok(GameEvent::Won { seat, card });
        }

        if card.is_eight() {
            state.status = Status::SuitSelection;
            return Ok(GameEvent::AwaitingSuit { seat, card });
        }

        state.current_turn = seat.opponent();
        Ok(GameEvent::Played { seat, card })
    }

    fn draw(state: &mut GameSession, seat: Seat, action: &Action) -> Result<GameEvent, Rejection> {
        if state.status == Status::SuitSelection {
            return Err(Rejection::AwaitingSuit);
        }

        let drawn = state.deck.pop_front();
        state.record_action(seat, *action);
        state.current_turn = seat.opponent();

        Ok(match drawn {
            Some(card) => {
                state.hands[seat].push_back(card);
                GameEvent::Drew { seat, card }
            }
            None => {
                debug!(%seat, "deck empty, turn forfeited");
                GameEvent::Forfeited { seat }
            }
        })
    }

    fn select_suit(
        state: &mut GameSession,
        seat: Seat,
        action: &Action,
        suit: Suit,
    ) -> Result<GameEvent, Rejection> {
        if state.status != Status::SuitSelection {
            return Err(Rejection::NoSuitPending);
        }

        state.suit_override = Some(suit);
        state.status = Status::Playing;
        state.record_action(seat, *action);
        state.current_turn = seat.opponent();

        Ok(GameEvent::SuitDeclared { seat, suit })
    }
}

impl RulesEngine for CrazyEights {
    fn legal_actions(&self, state: &GameSession, seat: Seat) -> Vec<Action> {
        if Self::check_turn(state, seat).is_err() {
            return vec![];
        }

        if state.status == Status::SuitSelection {
            return Suit::ALL.into_iter().map(Action::SelectSuit).collect();
        }

        let mut actions: Vec<Action> = match state.top_card() {
            Some(top) => legal_cards(&state.hands[seat], top, state.suit_override)
                .into_iter()
                .map(|card| Action::PlayCard(card.id))
                .collect(),
            None => Vec::new(),
        };
        actions.push(Action::Draw);
        actions
    }

    fn apply_action(
        &self,
        state: &mut GameSession,
        seat: Seat,
        action: &Action,
    ) -> Result<GameEvent, Rejection> {
        Self::check_turn(state, seat)?;

        match *action {
            Action::PlayCard(id) => Self::play_card(state, seat, action, id),
            Action::Draw => Self::draw(state, seat, action),
            Action::SelectSuit(suit) => Self::select_suit(state, seat, action, suit),
        }
    }

    fn is_terminal(&self, state: &GameSession) -> Option<GameResult> {
        state.winner.map(GameResult::Winner)
    }
}
