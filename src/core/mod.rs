//! Core engine types: seats, session state, actions, RNG, configuration.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{Seat, SeatMap};
pub use rng::GameRng;
pub use config::GameConfig;
pub use action::{Action, ActionRecord};
pub use state::{GameSession, Status};
