//! Headless self-play.
//!
//! Runs whole games with a policy in both seats. Used for soak-testing the
//! rules and for comparing policies without any presentation layer.

use tracing::debug;

use crate::ai::AiPolicy;
use crate::core::{GameConfig, GameRng, GameSession, Seat, SeatMap};
use crate::error::Error;
use crate::rules::{GameResult, RulesEngine};

use super::game::CrazyEights;

/// Configuration for self-play.
#[derive(Clone, Debug)]
pub struct SelfPlayConfig {
    /// Table settings. Delays are ignored.
    pub game: GameConfig,

    /// Maximum turns per game. Two seats that can neither play nor draw
    /// would otherwise forfeit forever.
    pub max_turns: usize,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            max_turns: 500,
        }
    }
}

impl SelfPlayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum turns per game.
    pub fn with_max_turns(mut self, max: usize) -> Self {
        self.max_turns = max;
        self
    }

    /// Set the table configuration.
    pub fn with_game(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }
}

/// How one self-play game ended.
#[derive(Clone, Debug)]
pub struct SelfPlayOutcome {
    /// `None` if the turn cap was reached first.
    pub result: Option<GameResult>,

    /// Turns taken. An eight and its declaration count as one turn.
    pub turns: usize,

    /// Final session.
    pub session: GameSession,
}

/// Plays policy against policy.
pub struct SelfPlay<'a> {
    rules: CrazyEights,
    policies: SeatMap<&'a dyn AiPolicy>,
    config: SelfPlayConfig,
}

impl<'a> SelfPlay<'a> {
    /// Same policy in both seats.
    pub fn new(policy: &'a dyn AiPolicy, config: SelfPlayConfig) -> Self {
        Self::with_policies(policy, policy, config)
    }

    /// Separate policies for the player and computer seats.
    pub fn with_policies(
        player: &'a dyn AiPolicy,
        ai: &'a dyn AiPolicy,
        config: SelfPlayConfig,
    ) -> Self {
        Self {
            rules: CrazyEights::new(),
            policies: SeatMap::new(|seat| match seat {
                Seat::Player => player,
                Seat::Ai => ai,
            }),
            config,
        }
    }

    /// Deal with `seed` and play to the end or the turn cap.
    pub fn play_game(&self, seed: u64) -> Result<SelfPlayOutcome, Error> {
        self.play_game_with(seed, |_| {})
    }

    /// Like `play_game`, calling `observe` after the deal and after every turn.
    pub fn play_game_with(
        &self,
        seed: u64,
        mut observe: impl FnMut(&GameSession),
    ) -> Result<SelfPlayOutcome, Error> {
        let mut rng = GameRng::new(seed);
        let mut session = self.rules.new_session(&self.config.game, &mut rng)?;
        observe(&session);

        let mut turns = 0;
        while self.rules.is_terminal(&session).is_none() && turns < self.config.max_turns {
            let seat = session.current_turn;
            self.rules
                .play_turn(&mut session, seat, self.policies[seat])?;
            turns += 1;
            observe(&session);
        }

        let result = self.rules.is_terminal(&session);
        debug!(seed, turns, ?result, "self-play game finished");

        Ok(SelfPlayOutcome {
            result,
            turns,
            session,
        })
    }
}
