//! Feedback timers.
//!
//! Each judged placement gets a tokio task that sleeps for the ticket's
//! delay and then hands the ticket back over a channel. Timers are never
//! cancelled: a ticket that outlives its session is discarded by the
//! controller's generation check.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::session::FeedbackTicket;

/// Spawns feedback timers that report to a single receiver.
#[derive(Clone, Debug)]
pub struct FeedbackScheduler {
    expired: mpsc::UnboundedSender<FeedbackTicket>,
}

impl FeedbackScheduler {
    /// Create a scheduler and the receiver its expired tickets arrive on.
    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<FeedbackTicket>) {
        let (expired, rx) = mpsc::unbounded_channel();
        (Self { expired }, rx)
    }

    /// Deliver `ticket` once its delay has elapsed.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&self, ticket: FeedbackTicket) -> JoinHandle<()> {
        let expired = self.expired.clone();
        tokio::spawn(async move {
            tokio::time::sleep(ticket.delay()).await;
            let sequence = ticket.sequence();
            if expired.send(ticket).is_err() {
                debug!(sequence, "feedback receiver closed before timer fired");
            }
        })
    }
}
