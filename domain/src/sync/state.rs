//! Sync state machine and outcome

use chrono::{DateTime, Utc};

/// Reconciler state.
///
/// `Idle -> Syncing` on a manual trigger or timer tick; `Syncing -> Idle`
/// unconditionally when the attempt completes or fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncState {
    #[default]
    Idle,
    Syncing,
}

impl SyncState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncState::Idle => "idle",
            SyncState::Syncing => "syncing",
        }
    }
}

impl std::fmt::Display for SyncState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a successful sync
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Quotes received from the server
    pub fetched: usize,
    /// Local quotes replaced by a server quote with the same text
    pub conflicts: usize,
    /// Store size after the merge
    pub total: usize,
    /// When the merge completed
    pub synced_at: DateTime<Utc>,
}

impl SyncReport {
    pub fn new(fetched: usize, conflicts: usize, total: usize) -> Self {
        Self {
            fetched,
            conflicts,
            total,
            synced_at: Utc::now(),
        }
    }

    pub fn has_conflicts(&self) -> bool {
        self.conflicts > 0
    }
}
