//! Server sync use case
//!
//! [`SyncQuotesUseCase`] reconciles the session's store with a server batch.
//! A sync is a linear pipeline:
//!
//! 1. **Fetch** the server batch through [`RemoteQuoteSource`]
//! 2. **Merge** it into the store (server wins on exact text match)
//! 3. **Persist** the merged store and refresh categories
//! 4. **Re-render** a random quote from the current selection
//! 5. **Push** the merged list back (detached, best-effort)
//!
//! A failed fetch leaves the store untouched and is only reported on the
//! status line; the next attempt is the next scheduled tick.
//!
//! [`SyncQuotesUseCase::run_periodic`] drives syncs from a timer and an
//! optional manual trigger channel. Syncs never overlap: the loop awaits
//! each one before handling the next tick or trigger.

use crate::config::SyncParams;
use crate::messages;
use crate::ports::quote_display::QuoteDisplay;
use crate::ports::remote_source::{RemoteError, RemoteQuoteSource};
use crate::use_cases::session::QuoteSession;
use quotebook_domain::{QuoteRecord, SyncReport, SyncState, to_quote_batch};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that can occur during a sync
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Failed to fetch quotes from server: {0}")]
    Fetch(#[from] RemoteError),
}

/// Periodic reconciliation of the local store with the server
pub struct SyncQuotesUseCase {
    remote: Arc<dyn RemoteQuoteSource>,
    params: SyncParams,
    state: SyncState,
    last_report: Option<SyncReport>,
    pending_push: Option<JoinHandle<()>>,
}

impl SyncQuotesUseCase {
    pub fn new(remote: Arc<dyn RemoteQuoteSource>) -> Self {
        Self {
            remote,
            params: SyncParams::default(),
            state: SyncState::Idle,
            last_report: None,
            pending_push: None,
        }
    }

    pub fn with_params(mut self, params: SyncParams) -> Self {
        self.params = params;
        self
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    pub fn last_report(&self) -> Option<&SyncReport> {
        self.last_report.as_ref()
    }

    /// Run one sync against the session.
    pub async fn execute(
        &mut self,
        session: &mut QuoteSession,
        display: &dyn QuoteDisplay,
    ) -> Result<SyncReport, SyncError> {
        self.state = SyncState::Syncing;
        display.show_status(messages::SYNCING);
        debug!("Sync started");

        let result = self.sync(session, display).await;

        match &result {
            Ok(report) => {
                info!(
                    "Sync complete: {} fetched, {} conflicts, {} total",
                    report.fetched, report.conflicts, report.total
                );
                display.show_status(&messages::sync_succeeded(report));
                self.last_report = Some(report.clone());
            }
            Err(SyncError::Fetch(e)) => {
                warn!("Sync failed: {}", e);
                display.show_status(&messages::sync_failed(e));
            }
        }

        self.state = SyncState::Idle;
        result
    }

    async fn sync(
        &mut self,
        session: &mut QuoteSession,
        display: &dyn QuoteDisplay,
    ) -> Result<SyncReport, SyncError> {
        let posts = self.remote.fetch_batch().await?;
        let batch = to_quote_batch(&posts);
        let fetched = batch.len();

        let conflicts = session.apply_remote_batch(batch, display);
        session.show_random(display);

        if self.params.push_after_sync {
            self.spawn_push(session.store().all().to_vec());
        }

        Ok(SyncReport::new(fetched, conflicts, session.store().len()))
    }

    fn spawn_push(&mut self, quotes: Vec<QuoteRecord>) {
        let remote = Arc::clone(&self.remote);
        let handle = tokio::spawn(async move {
            match remote.push_batch(&quotes).await {
                Ok(()) => debug!("Pushed {} quotes to server", quotes.len()),
                Err(e) => warn!("Pushing quotes to server failed: {}", e),
            }
        });

        // A push still in flight from the previous sync is left to finish
        self.pending_push = Some(handle);
    }

    /// Wait for the most recent push to finish (e.g. before process exit).
    pub async fn wait_for_push(&mut self) {
        if let Some(handle) = self.pending_push.take()
            && let Err(e) = handle.await
        {
            warn!("Push task did not complete: {}", e);
        }
    }

    /// Sync on every interval tick and every manual trigger until cancelled.
    ///
    /// The first tick fires immediately, so a sync runs on start. Ticks that
    /// come due while a sync is in progress are delayed, not queued.
    pub async fn run_periodic(
        &mut self,
        session: &mut QuoteSession,
        display: &dyn QuoteDisplay,
        mut manual: Option<mpsc::Receiver<()>>,
        cancellation: CancellationToken,
    ) {
        let mut ticker = tokio::time::interval(self.params.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            let manual_trigger = async {
                match manual.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            };

            tokio::select! {
                _ = cancellation.cancelled() => {
                    debug!("Periodic sync cancelled");
                    break;
                }
                _ = ticker.tick() => {
                    self.execute_reported(session, display, "Scheduled").await;
                }
                trigger = manual_trigger => {
                    match trigger {
                        Some(()) => {
                            self.execute_reported(session, display, "Manual").await;
                        }
                        None => manual = None,
                    }
                }
            }
        }

        self.wait_for_push().await;
    }

    /// Run one sync whose failure has already been shown on the status line
    async fn execute_reported(
        &mut self,
        session: &mut QuoteSession,
        display: &dyn QuoteDisplay,
        trigger: &str,
    ) {
        if let Err(e) = self.execute(session, display).await {
            debug!("{} sync failed, retrying on next tick: {}", trigger, e);
        }
    }
}
