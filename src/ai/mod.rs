//! Computer opponent.
//!
//! - `policy`: the `AiPolicy` trait and its `Decision`
//! - `greedy`: the default greedy policy and suit choice

pub mod greedy;
pub mod policy;

pub use greedy::{choose_suit, GreedyPolicy, DEFAULT_SUIT};
pub use policy::{AiPolicy, Decision};
