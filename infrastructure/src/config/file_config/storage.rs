//! Storage configuration from TOML (`[storage]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name of the durable store inside the data directory
pub const STORAGE_FILE_NAME: &str = "storage.json";

/// Raw storage configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Directory for durable storage (default: `<data_dir>/quotebook`)
    pub data_dir: Option<String>,
    /// Directory for session files (default: `<temp_dir>/quotebook`)
    pub session_dir: Option<String>,
    /// Fixed session id (default: `QUOTEBOOK_SESSION` or the parent process id)
    pub session_id: Option<String>,
}

impl FileStorageConfig {
    /// Path of the durable store file, `None` if no data directory is known
    pub fn durable_path(&self) -> Option<PathBuf> {
        let dir = match &self.data_dir {
            Some(dir) => expand_home(dir),
            None => dirs::data_dir()?.join("quotebook"),
        };
        Some(dir.join(STORAGE_FILE_NAME))
    }

    /// Directory holding session files
    pub fn session_dir(&self) -> PathBuf {
        self.session_dir
            .as_deref()
            .map(expand_home)
            .unwrap_or_else(crate::storage::default_session_dir)
    }
}

/// Expand a leading `~/` to the home directory
fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path)),
        None => PathBuf::from(path),
    }
}
