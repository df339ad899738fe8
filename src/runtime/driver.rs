//! Single-owner game loop.
//!
//! The driver task is the only place the controller is touched. It
//! serialises player commands and expired feedback timers with
//! `tokio::select!`, so a placement can never be evaluated against a
//! half-resolved session and no locking is needed.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::scheduler::FeedbackScheduler;
use crate::core::Shuffler;
use crate::error::PlacementError;
use crate::session::{FeedbackResolution, FeedbackTicket, GameSession, Outcome, SessionController};

/// Requests from the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Place the current card at this timeline slot.
    Place(usize),
    /// Abandon the current session and deal a new one.
    NewGame,
    /// Stop the driver and hand the controller back.
    Shutdown,
}

/// Notifications for the presentation layer. Every variant that changes
/// state carries a snapshot taken right after the change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Update {
    /// A session was dealt.
    Started(GameSession),
    /// A placement was judged; the feedback window is now open.
    Placed {
        /// How the card was judged.
        outcome: Outcome,
        /// Session after the judgement.
        session: GameSession,
    },
    /// A placement request was refused; nothing changed.
    Rejected(PlacementError),
    /// A feedback window closed.
    Resolved {
        /// What the resolution did.
        resolution: FeedbackResolution,
        /// Session after the resolution.
        session: GameSession,
    },
}

/// Owns a controller and runs it against command and timer channels.
pub struct GameDriver<S> {
    controller: SessionController<S>,
    commands: mpsc::Receiver<Command>,
    updates: mpsc::UnboundedSender<Update>,
    scheduler: FeedbackScheduler,
    expired: mpsc::UnboundedReceiver<FeedbackTicket>,
}

/// Presentation-side ends of a running driver.
#[derive(Debug)]
pub struct DriverHandle {
    commands: mpsc::Sender<Command>,
    updates: mpsc::UnboundedReceiver<Update>,
}

impl DriverHandle {
    /// Send a command. Fails only if the driver has stopped.
    pub async fn send(&self, command: Command) -> Result<(), mpsc::error::SendError<Command>> {
        self.commands.send(command).await
    }

    /// Next update, or `None` once the driver has stopped.
    pub async fn recv(&mut self) -> Option<Update> {
        self.updates.recv().await
    }

    /// Next update if one is already queued.
    pub fn try_recv(&mut self) -> Result<Update, mpsc::error::TryRecvError> {
        self.updates.try_recv()
    }
}

/// Command channel capacity. The update channel is unbounded: the driver
/// never waits to publish.
const COMMAND_CAPACITY: usize = 32;

impl<S: Shuffler> GameDriver<S> {
    /// Wrap a controller, returning the driver and the handle that talks to it.
    pub fn new(controller: SessionController<S>) -> (Self, DriverHandle) {
        let (command_tx, command_rx) = mpsc::channel(COMMAND_CAPACITY);
        let (update_tx, update_rx) = mpsc::unbounded_channel();
        let (scheduler, expired) = FeedbackScheduler::channel();

        let driver = Self {
            controller,
            commands: command_rx,
            updates: update_tx,
            scheduler,
            expired,
        };
        let handle = DriverHandle {
            commands: command_tx,
            updates: update_rx,
        };
        (driver, handle)
    }

    /// Run until `Shutdown`, until every handle is dropped, or until the
    /// update receiver goes away. Returns the controller.
    ///
    /// Publishes the already-dealt session as `Update::Started` first.
    pub async fn run(mut self) -> SessionController<S> {
        if !publish(&self.updates, Update::Started(self.controller.snapshot())) {
            return self.controller;
        }

        loop {
            let update = tokio::select! {
                command = self.commands.recv() => match command {
                    Some(Command::Place(position)) => self.place(position),
                    Some(Command::NewGame) => {
                        self.controller.start_session();
                        Some(Update::Started(self.controller.snapshot()))
                    }
                    Some(Command::Shutdown) | None => break,
                },
                Some(ticket) = self.expired.recv() => self.resolve(&ticket),
            };

            if let Some(update) = update {
                if !publish(&self.updates, update) {
                    break;
                }
            }
        }

        debug!("driver stopped");
        self.controller
    }

    fn place(&mut self, position: usize) -> Option<Update> {
        match self.controller.attempt_placement(position) {
            Ok(ticket) => {
                let outcome = ticket.outcome();
                self.scheduler.schedule(ticket);
                Some(Update::Placed {
                    outcome,
                    session: self.controller.snapshot(),
                })
            }
            Err(err) => {
                debug!(position, error = %err, "placement rejected");
                Some(Update::Rejected(err))
            }
        }
    }

    fn resolve(&mut self, ticket: &FeedbackTicket) -> Option<Update> {
        match self.controller.resolve_feedback(ticket) {
            FeedbackResolution::Ignored => None,
            resolution => Some(Update::Resolved {
                resolution,
                session: self.controller.snapshot(),
            }),
        }
    }
}

fn publish(updates: &mpsc::UnboundedSender<Update>, update: Update) -> bool {
    if updates.send(update).is_err() {
        warn!("update receiver dropped, stopping driver");
        return false;
    }
    true
}

/// Spawn a driver task for `controller`.
///
/// The join handle yields the controller once the driver stops.
pub fn spawn<S>(controller: SessionController<S>) -> (DriverHandle, JoinHandle<SessionController<S>>)
where
    S: Shuffler + Send + 'static,
{
    let (driver, handle) = GameDriver::new(controller);
    (handle, tokio::spawn(driver.run()))
}
