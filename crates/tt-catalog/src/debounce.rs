//! Debounced, cancelable catalog search.
//!
//! [`LatestRequest`] keeps at most one search outstanding. Issuing a new
//! query aborts the previous task, whether it is still waiting out the
//! debounce window or already talking to the API. Every issue bumps a
//! generation counter; outcomes tagged with an older generation are
//! dropped on receipt, so a slow stale response can never overwrite a
//! newer one.
//!
//! ```text
//!           issue                 outcome
//!   Idle ──────────▶ Pending ───────────────▶ Settled
//!     ▲                │  ▲                     │
//!     │ clear          │  │ issue               │ issue
//!     │                ▼  │                     ▼
//!     └──────────── Canceled ◀──────────────  Pending
//! ```

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::client::CatalogSearch;
use crate::error::CatalogError;
use crate::projection::CatalogTechnology;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    Pending { query: String, generation: u64 },
    Settled { query: String, generation: u64 },
    Canceled,
}

/// A finished search for the current generation.
#[derive(Debug)]
pub struct SearchOutcome {
    pub generation: u64,
    pub query: String,
    pub result: Result<Vec<CatalogTechnology>, CatalogError>,
}

pub struct LatestRequest<S> {
    source: Arc<S>,
    window: Duration,
    generation: u64,
    state: RequestState,
    task: Option<JoinHandle<()>>,
    tx: mpsc::UnboundedSender<SearchOutcome>,
    rx: mpsc::UnboundedReceiver<SearchOutcome>,
}

impl<S: CatalogSearch> LatestRequest<S> {
    #[must_use]
    pub fn new(source: Arc<S>, window: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            source,
            window,
            generation: 0,
            state: RequestState::Idle,
            task: None,
            tx,
            rx,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &RequestState {
        &self.state
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Schedule a search for `query` after the debounce window, replacing
    /// any outstanding one. A blank query behaves like [`Self::clear`].
    ///
    /// Must be called from within a tokio runtime.
    pub fn issue(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            self.clear();
            return;
        }

        self.abort_task();
        self.generation += 1;
        let generation = self.generation;
        let query = query.to_string();

        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        let window = self.window;
        let task_query = query.clone();
        self.task = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            let result = source.search_catalog(task_query.clone()).await;
            // The receiver only goes away with the register itself.
            let _ = tx.send(SearchOutcome {
                generation,
                query: task_query,
                result,
            });
        }));

        tracing::debug!(generation, %query, "search scheduled");
        self.state = RequestState::Pending { query, generation };
    }

    /// Abort the outstanding search, if any.
    pub fn cancel(&mut self) {
        if self.abort_task() {
            self.state = RequestState::Canceled;
        }
    }

    /// Abort the outstanding search and return to idle.
    pub fn clear(&mut self) {
        self.abort_task();
        self.generation += 1;
        self.state = RequestState::Idle;
    }

    /// Wait for the outcome of the current generation.
    ///
    /// Returns `None` immediately when nothing is pending. Cancel safe: if the
    /// returned future is dropped, the pending search keeps running.
    pub async fn next_outcome(&mut self) -> Option<SearchOutcome> {
        while matches!(self.state, RequestState::Pending { .. }) {
            let outcome = self.rx.recv().await?;
            if outcome.generation != self.generation {
                tracing::warn!(
                    stale = outcome.generation,
                    current = self.generation,
                    "discarding stale search outcome"
                );
                continue;
            }
            self.task = None;
            self.state = RequestState::Settled {
                query: outcome.query.clone(),
                generation: outcome.generation,
            };
            return Some(outcome);
        }
        None
    }

    /// Returns whether a pending task was aborted.
    fn abort_task(&mut self) -> bool {
        let Some(task) = self.task.take() else {
            return false;
        };
        task.abort();
        if let RequestState::Pending { generation, .. } = self.state {
            tracing::debug!(generation, "search canceled");
            return true;
        }
        false
    }
}

impl<S> Drop for LatestRequest<S> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
