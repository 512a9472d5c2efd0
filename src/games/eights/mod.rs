//! Crazy Eights.
//!
//! Two seats, eight cards each. Match the top card's suit or rank; eights
//! are wild and let their player name the next suit. First to empty their
//! hand wins.

mod game;
pub mod sim;

pub use game::CrazyEights;
pub use sim::{SelfPlay, SelfPlayConfig, SelfPlayOutcome};
