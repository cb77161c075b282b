//! Sync parameters for periodic reconciliation

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Controls how [`SyncQuotesUseCase`](crate::use_cases::sync_quotes::SyncQuotesUseCase)
/// schedules and finishes a sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncParams {
    /// Time between timer-driven syncs.
    pub interval: Duration,
    /// Upload the merged list after each successful sync (best-effort).
    pub push_after_sync: bool,
}

impl Default for SyncParams {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(60),
            push_after_sync: true,
        }
    }
}

impl SyncParams {
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_interval_secs(self, secs: u64) -> Self {
        self.with_interval(Duration::from_secs(secs))
    }

    pub fn with_push_after_sync(mut self, push: bool) -> Self {
        self.push_after_sync = push;
        self
    }
}
