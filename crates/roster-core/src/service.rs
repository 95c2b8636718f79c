//! Observable load surface: one cancellable load at a time.
//!
//! `RosterService` owns the gate → retry → map pipeline and publishes the
//! current state through a watch channel. Each load runs as one tokio task;
//! starting a new load (or dropping the service) aborts the in-flight task
//! at its current await point, so a cancelled load never publishes a result.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::connectivity::{require_connectivity, ConnectivityProbe};
use crate::message::{user_message, UserMessage};
use crate::outcome::FetchError;
use crate::retry::{run_with_retry_observed, RetryPolicy};
use crate::source::UserSource;
use crate::user::User;

/// Current state of the user-directory load.
#[derive(Debug, Clone)]
pub enum LoadState {
    /// No load started yet.
    Initial,
    /// A load is in flight.
    Loading,
    /// Final payload. An empty-but-well-formed response lands here as an
    /// empty list, not as an error.
    Success(Vec<User>),
    /// Final failure, already mapped to user copy. `cause` keeps the typed
    /// failure for diagnostics.
    Error {
        message: String,
        can_retry: bool,
        cause: Arc<FetchError>,
    },
}

impl LoadState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, LoadState::Success(_) | LoadState::Error { .. })
    }
}

/// State container driving the full fetch pipeline.
pub struct RosterService {
    source: UserSource,
    policy: Arc<RetryPolicy>,
    probe: Arc<dyn ConnectivityProbe + Send + Sync>,
    tx: Arc<watch::Sender<LoadState>>,
    rx: watch::Receiver<LoadState>,
    task: Option<JoinHandle<()>>,
}

impl RosterService {
    pub fn new(
        source: UserSource,
        policy: RetryPolicy,
        probe: Arc<dyn ConnectivityProbe + Send + Sync>,
    ) -> Self {
        let (tx, rx) = watch::channel(LoadState::Initial);
        Self {
            source,
            policy: Arc::new(policy),
            probe,
            tx: Arc::new(tx),
            rx,
            task: None,
        }
    }

    /// Receiver over the current state; updated on every transition.
    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.rx.clone()
    }

    /// Snapshot of the current state.
    pub fn current(&self) -> LoadState {
        self.rx.borrow().clone()
    }

    /// Starts a load, aborting any load still in flight.
    ///
    /// Publishes `Loading` synchronously, then runs gate → retry executor →
    /// message mapping in a spawned task and publishes the terminal state.
    pub fn load_users(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.tx.send_replace(LoadState::Loading);

        let source = self.source.clone();
        let policy = Arc::clone(&self.policy);
        let probe = Arc::clone(&self.probe);
        let tx = Arc::clone(&self.tx);
        self.task = Some(tokio::spawn(async move {
            let state = run_load(&source, &policy, probe.as_ref()).await;
            tx.send_replace(state);
        }));
    }

    /// Re-runs the load from the beginning with a fresh attempt budget.
    pub fn retry(&mut self) {
        self.load_users();
    }

    /// Waits for the in-flight load to finish and returns the final state.
    ///
    /// A load task that died without publishing (a defect, not a designed
    /// path) is surfaced as the fallback error state.
    pub async fn wait(&mut self) -> LoadState {
        if let Some(task) = self.task.take() {
            if let Err(err) = task.await {
                if err.is_panic() {
                    let UserMessage { text, can_retry } = UserMessage::fallback();
                    self.tx.send_replace(LoadState::Error {
                        message: text,
                        can_retry,
                        cause: Arc::new(FetchError::Unknown {
                            message: format!("load task failed: {}", err),
                            source: None,
                        }),
                    });
                }
            }
        }
        self.current()
    }
}

impl Drop for RosterService {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn run_load(
    source: &UserSource,
    policy: &RetryPolicy,
    probe: &(dyn ConnectivityProbe + Send + Sync),
) -> LoadState {
    if let Err(err) = require_connectivity(probe) {
        return error_state(err);
    }

    let result = run_with_retry_observed(policy, || source.fetch_users(), |event| {
        tracing::warn!(
            attempt = event.attempt,
            delay_ms = event.delay.as_millis() as u64,
            error = %event.error,
            "fetch attempt failed, retrying"
        );
    })
    .await;

    match result {
        Ok(users) => LoadState::Success(users),
        // Vacuous success: the caller sees an empty directory, not an error.
        Err(FetchError::EmptyData { .. }) => LoadState::Success(Vec::new()),
        Err(err) => error_state(err),
    }
}

fn error_state(err: FetchError) -> LoadState {
    // EmptyData is folded before this point, so a message always exists.
    let UserMessage { text, can_retry } =
        user_message(&err).unwrap_or_else(UserMessage::fallback);
    LoadState::Error {
        message: text,
        can_retry,
        cause: Arc::new(err),
    }
}
