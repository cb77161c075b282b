//! User-visible message strings, passed verbatim to the display

use quotebook_domain::SyncReport;

pub const NO_QUOTES_FOR_CATEGORY: &str = "No quotes available for this category.";
pub const MISSING_FIELDS: &str = "Please enter both a quote and a category.";
pub const QUOTE_ADDED: &str = "New quote added successfully!";
pub const IMPORT_SUCCEEDED: &str = "Quotes imported successfully!";
pub const INVALID_FILE_FORMAT: &str = "Invalid file format.";
pub const PARSE_FAILED: &str = "Error parsing JSON file.";
pub const EXPORT_FAILED: &str = "Could not export quotes.";
pub const SYNCING: &str = "Syncing with server...";
pub const SYNC_SUCCEEDED: &str = "Quotes synced with server!";
pub const NO_LAST_VIEWED: &str = "No quote viewed in this session yet.";
pub const READ_FAILED: &str = "Could not read the import file.";

/// Status line shown after a successful sync
pub fn sync_succeeded(report: &SyncReport) -> String {
    if report.has_conflicts() {
        format!(
            "{} {} conflict(s) resolved (server data used).",
            SYNC_SUCCEEDED, report.conflicts
        )
    } else {
        SYNC_SUCCEEDED.to_string()
    }
}

/// Summary shown when periodic sync stops
pub fn last_synced(report: &SyncReport) -> String {
    format!(
        "Last synced at {} UTC ({} quotes).",
        report.synced_at.format("%H:%M:%S"),
        report.total
    )
}

/// Status line shown when fetching from the server fails
pub fn sync_failed(error: &impl std::fmt::Display) -> String {
    format!("Error syncing with server: {}", error)
}

/// Message shown when a mutation could not be persisted
pub fn save_failed(error: &impl std::fmt::Display) -> String {
    format!("Could not save quotes: {}", error)
}
