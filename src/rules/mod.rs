//! Game rules.
//!
//! - `validator`: the pure move-legality predicate
//! - `engine`: the `RulesEngine` trait every rule set implements
//! - `event`: what an accepted action did
//!
//! The concrete Crazy Eights rules live in `games::eights`.

pub mod engine;
pub mod event;
pub mod validator;

pub use engine::{GameResult, RulesEngine};
pub use event::GameEvent;
pub use validator::{is_valid_move, legal_cards};
