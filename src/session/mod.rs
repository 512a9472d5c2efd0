//! Session control for a human against the computer.
//!
//! - `controller`: synchronous action API, tickets for deferred turns
//! - `table`: tokio driver that waits out ticket delays
//! - `message`: status lines shown to the human

pub mod controller;
pub mod message;
pub mod table;

pub use controller::{GameController, Snapshot, TaskKind, Ticket};
pub use table::Table;
