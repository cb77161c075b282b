//! Sync configuration from TOML (`[sync]` section)

use quotebook_application::SyncParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw sync configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSyncConfig {
    /// Server endpoint for fetch and push
    pub endpoint: String,
    /// Seconds between periodic syncs
    pub interval_secs: u64,
    /// Posts requested per fetch
    pub fetch_limit: usize,
    /// Upload the merged list after each sync
    pub push: bool,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for FileSyncConfig {
    fn default() -> Self {
        Self {
            endpoint: crate::remote::DEFAULT_ENDPOINT.to_string(),
            interval_secs: 60,
            fetch_limit: crate::remote::DEFAULT_FETCH_LIMIT,
            push: true,
            timeout_secs: crate::remote::DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl FileSyncConfig {
    pub fn to_sync_params(&self) -> SyncParams {
        SyncParams::default()
            .with_interval_secs(self.interval_secs.max(1))
            .with_push_after_sync(self.push)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}
