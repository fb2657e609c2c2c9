//! Async glue between [`DateNavigator`] and a [`PapersApi`].
//!
//! Each ticket is fetched on its own tokio task; completions come back over
//! one channel and are applied in arrival order, with the navigator discarding
//! anything superseded.

use std::sync::Arc;

use tokio::sync::mpsc;

use super::{DateNavigator, Direction, FetchTicket, Outcome};
use crate::client::PapersApi;
use crate::error::ClientResult;
use crate::models::DailyPapers;

struct Completion {
    ticket: FetchTicket,
    result: ClientResult<DailyPapers>,
}

/// Drives a [`DateNavigator`] against a papers API.
pub struct FeedDriver<A> {
    api: Arc<A>,
    navigator: DateNavigator,
    limit: u32,
    tx: mpsc::UnboundedSender<Completion>,
    rx: mpsc::UnboundedReceiver<Completion>,
}

impl<A> FeedDriver<A>
where
    A: PapersApi + 'static,
{
    /// Create a driver around an idle navigator.
    #[must_use]
    pub fn new(api: Arc<A>, navigator: DateNavigator, limit: u32) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            api,
            navigator,
            limit,
            tx,
            rx,
        }
    }

    /// The navigator state.
    #[must_use]
    pub const fn navigator(&self) -> &DateNavigator {
        &self.navigator
    }

    /// Load the current date.
    pub fn load(&mut self) {
        let ticket = self.navigator.load();
        self.spawn(ticket);
    }

    /// Navigate one day. Returns `false` if rejected at a bound.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        match self.navigator.navigate(direction) {
            Some(ticket) => {
                self.spawn(ticket);
                true
            }
            None => false,
        }
    }

    /// Pull-to-refresh.
    pub fn refresh(&mut self) {
        let ticket = self.navigator.refresh();
        self.spawn(ticket);
    }

    /// Retry after a failure.
    pub fn retry(&mut self) {
        let ticket = self.navigator.retry();
        self.spawn(ticket);
    }

    /// Wait for the next completion and apply it.
    ///
    /// Auto-skip continuations are fetched automatically. Cancel-safe: the
    /// only await point is the channel receive.
    pub async fn next_outcome(&mut self) -> Outcome {
        let Some(completion) = self.rx.recv().await else {
            // The driver holds a sender, so the channel never closes.
            return Outcome::Stale;
        };

        let outcome = match completion.result {
            Ok(daily) => self.navigator.on_loaded(&completion.ticket, daily.papers),
            Err(err) => {
                tracing::debug!(error = %err, date = %completion.ticket.date, "Fetch error");
                self.navigator.on_failed(&completion.ticket, err.to_user_message())
            }
        };

        if let Outcome::Skipped(ticket) = &outcome {
            self.spawn(ticket.clone());
        }

        outcome
    }

    /// Apply completions until nothing is in flight.
    ///
    /// Returns the last applied outcome, or `None` if nothing was in flight.
    pub async fn settle(&mut self) -> Option<Outcome> {
        let mut last = None;
        while self.navigator.in_flight().is_some() {
            let outcome = self.next_outcome().await;
            if outcome != Outcome::Stale {
                last = Some(outcome);
            }
        }
        last
    }

    fn spawn(&self, ticket: FetchTicket) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        let limit = self.limit;

        tracing::debug!(id = ticket.id, date = %ticket.date, kind = ?ticket.kind, "Issuing fetch");
        tokio::spawn(async move {
            let result = api.daily_papers(Some(ticket.date), limit).await;
            // Receiver gone means the driver was dropped; nothing to deliver to.
            let _ = tx.send(Completion { ticket, result });
        });
    }
}

impl<A> std::fmt::Debug for FeedDriver<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedDriver")
            .field("navigator", &self.navigator)
            .field("limit", &self.limit)
            .finish()
    }
}
