//! The action API a presentation layer drives.
//!
//! `GameController` owns the current session and applies human intents to
//! it. Whenever something has to happen later (the computer's turn, or the
//! pass after drawing from an empty deck) it hands back a `Ticket`. The
//! caller waits `ticket.delay` and passes the ticket to `fire`.
//!
//! Tickets are keyed to a generation that `reset_game` bumps, so a ticket
//! that outlives its session is refused instead of acting on the new one.

use std::time::Duration;

use serde::Serialize;
use smallvec::smallvec;
use tracing::{debug, info};

use crate::ai::{AiPolicy, GreedyPolicy};
use crate::cards::{Card, CardId, Suit};
use crate::core::{Action, GameConfig, GameRng, GameSession, Seat, Status};
use crate::error::{Error, Rejection};
use crate::games::eights::CrazyEights;
use crate::rules::{GameEvent, RulesEngine};

use super::message::{self, describe};

/// What a ticket does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// The computer takes its turn.
    AiTurn,
    /// The human's draw from an empty deck passes the turn.
    Forfeit,
}

/// A deferred step, valid only for the generation that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    pub generation: u64,
    pub id: u64,
    pub kind: TaskKind,
    pub delay: Duration,
}

/// Everything a presentation layer needs to render.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub session: GameSession,
    pub top_card: Option<Card>,
    pub message: String,
    pub generation: u64,
    pub pending: Option<TaskKind>,
}

impl Snapshot {
    /// Is the computer about to move?
    #[must_use]
    pub fn ai_thinking(&self) -> bool {
        self.pending == Some(TaskKind::AiTurn)
    }
}

/// Owns one session at a time and the human-facing action API.
pub struct GameController {
    config: GameConfig,
    rules: CrazyEights,
    policy: Box<dyn AiPolicy>,
    rng: GameRng,
    session: GameSession,
    generation: u64,
    next_ticket: u64,
    pending: Option<Ticket>,
    message: String,
}

impl GameController {
    /// Controller with the greedy computer opponent.
    pub fn new(config: GameConfig) -> Result<Self, Error> {
        Self::with_policy(config, Box::new(GreedyPolicy::new()))
    }

    /// Controller with a custom computer policy.
    pub fn with_policy(config: GameConfig, policy: Box<dyn AiPolicy>) -> Result<Self, Error> {
        config.validate()?;

        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let rules = CrazyEights::new();
        let session = rules.new_session(&config, &mut rng.fork())?;

        info!(seed = rng.seed(), policy = policy.name(), "game controller ready");

        Ok(Self {
            config,
            rules,
            policy,
            rng,
            session,
            generation: 0,
            next_ticket: 0,
            pending: None,
            message: message::NEW_GAME.to_string(),
        })
    }

    /// Start from a prepared session instead of a fresh deal.
    ///
    /// Later resets deal normally. If the session is waiting on the
    /// computer, the returned controller already has a pending ticket.
    /// An undealt session or one that loses or duplicates cards is refused.
    pub fn with_session(
        config: GameConfig,
        policy: Box<dyn AiPolicy>,
        session: GameSession,
    ) -> Result<Self, Error> {
        if session.status == Status::Dealing {
            return Err(Rejection::NotDealt.into());
        }
        if !session.conserves_cards() {
            return Err(Error::InconsistentSession);
        }

        let mut controller = Self::with_policy(config, policy)?;
        controller.session = session;
        controller.schedule_if_ai_turn();
        Ok(controller)
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Bumped by every reset.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn pending(&self) -> Option<Ticket> {
        self.pending
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            session: self.session.clone(),
            top_card: self.session.top_card().copied(),
            message: self.message.clone(),
            generation: self.generation,
            pending: self.pending.map(|ticket| ticket.kind),
        }
    }

    // === Action API ===

    /// Play a card from the human hand.
    pub fn play_card(&mut self, id: CardId) -> Result<Option<Ticket>, Rejection> {
        self.player_action(Action::PlayCard(id))
    }

    /// Draw for the human. An empty deck schedules a forfeit instead.
    pub fn draw_card(&mut self) -> Result<Option<Ticket>, Rejection> {
        if self.session.deck.is_empty() {
            self.ensure_idle()?;
            // Validate now; the forfeit itself is applied when the ticket fires.
            self.rules.apply(&self.session, Seat::Player, &Action::Draw)?;
            self.message = message::EMPTY_DECK_PENDING.to_string();
            return Ok(Some(self.schedule(TaskKind::Forfeit)));
        }
        self.player_action(Action::Draw)
    }

    /// Declare the suit after the human played an eight.
    pub fn select_suit(&mut self, suit: Suit) -> Result<Option<Ticket>, Rejection> {
        self.player_action(Action::SelectSuit(suit))
    }

    /// Discard the current session and deal a new one.
    ///
    /// Any outstanding ticket becomes stale.
    pub fn reset_game(&mut self) -> Result<Option<Ticket>, Error> {
        let mut rng = self.rng.fork();
        let session = self.rules.new_session(&self.config, &mut rng)?;

        self.session = session;
        self.generation += 1;
        self.pending = None;
        self.message = message::NEW_GAME.to_string();

        info!(generation = self.generation, "game reset");
        Ok(self.schedule_if_ai_turn())
    }

    /// Carry out a ticket previously returned by this controller.
    ///
    /// Reads the session as it is now. Returns the follow-up ticket, if any.
    pub fn fire(&mut self, ticket: Ticket) -> Result<Option<Ticket>, Rejection> {
        if ticket.generation != self.generation || self.pending != Some(ticket) {
            debug!(
                ticket_generation = ticket.generation,
                generation = self.generation,
                kind = ?ticket.kind,
                "ignoring stale ticket"
            );
            return Err(Rejection::StaleTask(ticket.generation));
        }
        self.pending = None;

        let events = match ticket.kind {
            TaskKind::AiTurn => {
                self.rules
                    .play_turn(&mut self.session, Seat::Ai, self.policy.as_ref())?
            }
            TaskKind::Forfeit => {
                smallvec![self
                    .rules
                    .apply_action(&mut self.session, Seat::Player, &Action::Draw)?]
            }
        };

        self.after(&events);
        Ok(self.schedule_if_ai_turn())
    }

    /// Fire tickets back to back until none is pending.
    ///
    /// For headless play where no delay is wanted.
    pub fn run_pending(&mut self) -> Result<(), Rejection> {
        while let Some(ticket) = self.pending {
            self.fire(ticket)?;
        }
        Ok(())
    }

    // === Internals ===

    fn ensure_idle(&self) -> Result<(), Rejection> {
        match self.pending {
            Some(_) => Err(Rejection::Busy),
            None => Ok(()),
        }
    }

    fn player_action(&mut self, action: Action) -> Result<Option<Ticket>, Rejection> {
        self.ensure_idle()?;
        let event = self
            .rules
            .apply_action(&mut self.session, Seat::Player, &action)?;
        self.after(&[event]);
        Ok(self.schedule_if_ai_turn())
    }

    fn after(&mut self, events: &[GameEvent]) {
        for event in events {
            debug!(generation = self.generation, ?event, "action applied");
        }
        debug_assert!(self.session.conserves_cards());
        self.message = describe(events);
    }

    fn schedule_if_ai_turn(&mut self) -> Option<Ticket> {
        if self.session.status == Status::Playing && self.session.current_turn == Seat::Ai {
            Some(self.schedule(TaskKind::AiTurn))
        } else {
            None
        }
    }

    fn schedule(&mut self, kind: TaskKind) -> Ticket {
        let delay = match kind {
            TaskKind::AiTurn => self.config.ai_delay,
            TaskKind::Forfeit => self.config.forfeit_delay,
        };
        self.next_ticket += 1;
        let ticket = Ticket {
            generation: self.generation,
            id: self.next_ticket,
            kind,
            delay,
        };
        self.pending = Some(ticket);
        ticket
    }
}
