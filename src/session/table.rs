//! Async driver that gives the computer its thinking pause.
//!
//! `Table` wraps a `GameController` and runs every ticket it issues on a
//! tokio task that sleeps for the ticket's delay and then fires it. Follow-up
//! tickets run on the same task, so at most one task is ever live and its
//! handle is the one stored. Each new snapshot is published on a `watch`
//! channel for the presentation layer.
//!
//! Must be used from inside a tokio runtime.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::cards::{CardId, Suit};
use crate::error::{Error, Rejection};

use super::controller::{GameController, Snapshot, Ticket};

struct Shared {
    controller: Mutex<GameController>,
    task: Mutex<Option<JoinHandle<()>>>,
    snapshots: watch::Sender<Snapshot>,
    /// Set under the controller lock when the table is dropped.
    closed: AtomicBool,
}

impl Shared {
    fn publish(&self, controller: &GameController) {
        self.snapshots.send_replace(controller.snapshot());
    }

    fn cancel_task(&self) {
        if let Some(handle) = self.task.lock().take() {
            handle.abort();
        }
    }
}

/// A controller plus the timers for its deferred turns.
pub struct Table {
    shared: Arc<Shared>,
}

impl Table {
    pub fn new(controller: GameController) -> Self {
        let (snapshots, _) = watch::channel(controller.snapshot());
        let pending = controller.pending();
        let table = Self {
            shared: Arc::new(Shared {
                controller: Mutex::new(controller),
                task: Mutex::new(None),
                snapshots,
                closed: AtomicBool::new(false),
            }),
        };
        if let Some(ticket) = pending {
            schedule(&table.shared, ticket);
        }
        table
    }

    /// Receive every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.shared.snapshots.subscribe()
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.shared.controller.lock().snapshot()
    }

    pub fn play_card(&self, id: CardId) -> Result<(), Rejection> {
        self.dispatch(|controller| controller.play_card(id))
    }

    pub fn draw_card(&self) -> Result<(), Rejection> {
        self.dispatch(GameController::draw_card)
    }

    pub fn select_suit(&self, suit: Suit) -> Result<(), Rejection> {
        self.dispatch(|controller| controller.select_suit(suit))
    }

    /// Cancel any pending turn and deal a new game.
    pub fn reset_game(&self) -> Result<(), Error> {
        self.shared.cancel_task();
        let ticket = {
            let mut controller = self.shared.controller.lock();
            let ticket = controller.reset_game()?;
            self.shared.publish(&controller);
            ticket
        };
        if let Some(ticket) = ticket {
            schedule(&self.shared, ticket);
        }
        Ok(())
    }

    fn dispatch<E>(
        &self,
        action: impl FnOnce(&mut GameController) -> Result<Option<Ticket>, E>,
    ) -> Result<(), E> {
        let ticket = {
            let mut controller = self.shared.controller.lock();
            let ticket = action(&mut controller)?;
            self.shared.publish(&controller);
            ticket
        };
        if let Some(ticket) = ticket {
            schedule(&self.shared, ticket);
        }
        Ok(())
    }
}

impl Drop for Table {
    fn drop(&mut self) {
        {
            // A task already past its sleep sees the flag once it gets the lock.
            let _controller = self.shared.controller.lock();
            self.shared.closed.store(true, Ordering::Release);
        }
        self.shared.cancel_task();
    }
}

/// Start a task for `ticket` and its follow-ups, replacing any previous one.
fn schedule(shared: &Arc<Shared>, ticket: Ticket) {
    let mut task = shared.task.lock();
    if let Some(previous) = task.take() {
        previous.abort();
    }
    *task = Some(tokio::spawn(run_tickets(Arc::clone(shared), ticket)));
}

async fn run_tickets(shared: Arc<Shared>, mut ticket: Ticket) {
    loop {
        tokio::time::sleep(ticket.delay).await;

        let next = {
            let mut controller = shared.controller.lock();
            if shared.closed.load(Ordering::Acquire) {
                return;
            }
            match controller.fire(ticket) {
                Ok(next) => {
                    shared.publish(&controller);
                    next
                }
                Err(rejection) => {
                    debug!(%rejection, "scheduled task dropped");
                    None
                }
            }
        };

        match next {
            Some(next) => ticket = next,
            None => return,
        }
    }
}
