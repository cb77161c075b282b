//! Session-scoped storage location
//!
//! Session storage lives in a per-session file under the temp directory.
//! A session is identified by, in order: the configured id, the
//! `QUOTEBOOK_SESSION` environment variable, or the parent process id (the
//! invoking shell), so consecutive commands from one terminal share it.

use std::path::{Path, PathBuf};

/// Environment variable that overrides the session id
pub const SESSION_ENV: &str = "QUOTEBOOK_SESSION";

/// Resolve the session id.
pub fn session_id(configured: Option<&str>) -> String {
    configured
        .filter(|id| !id.trim().is_empty())
        .map(str::to_string)
        .or_else(|| {
            std::env::var(SESSION_ENV)
                .ok()
                .filter(|id| !id.trim().is_empty())
        })
        .unwrap_or_else(parent_process_id)
}

/// Default directory for session files
pub fn default_session_dir() -> PathBuf {
    std::env::temp_dir().join("quotebook")
}

/// Path of the session file for `id` under `dir`.
///
/// Characters outside `[A-Za-z0-9_-]` are replaced so the id cannot escape
/// the directory.
pub fn session_store_path(dir: &Path, id: &str) -> PathBuf {
    let safe: String = id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    dir.join(format!("session-{}.json", safe))
}

#[cfg(unix)]
fn parent_process_id() -> String {
    std::os::unix::process::parent_id().to_string()
}

#[cfg(not(unix))]
fn parent_process_id() -> String {
    std::process::id().to_string()
}
