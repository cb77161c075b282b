//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types where
//! appropriate.

mod logging;
mod output;
mod storage;
mod sync;

pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use storage::{FileStorageConfig, STORAGE_FILE_NAME};
pub use sync::FileSyncConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("sync.endpoint cannot be empty")]
    EmptyEndpoint,

    #[error("sync.interval_secs cannot be 0")]
    InvalidInterval,

    #[error("sync.fetch_limit cannot be 0")]
    InvalidFetchLimit,

    #[error("sync.timeout_secs cannot be 0")]
    InvalidTimeout,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Durable and session storage locations
    pub storage: FileStorageConfig,
    /// Server sync settings
    pub sync: FileSyncConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Log file settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration, returning every detected problem.
    ///
    /// None of these are fatal: zero durations are clamped when converted,
    /// and a bad endpoint surfaces as a sync error.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.sync.endpoint.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyEndpoint);
        }
        if self.sync.interval_secs == 0 {
            issues.push(ConfigValidationError::InvalidInterval);
        }
        if self.sync.fetch_limit == 0 {
            issues.push(ConfigValidationError::InvalidFetchLimit);
        }
        if self.sync.timeout_secs == 0 {
            issues.push(ConfigValidationError::InvalidTimeout);
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[storage]
data_dir = "/tmp/quotebook-data"
session_id = "tab-7"

[sync]
endpoint = "http://localhost:8080/posts"
interval_secs = 15
fetch_limit = 3
push = false
timeout_secs = 2

[output]
color = false

[logging]
file = "/tmp/quotebook.log"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.storage.data_dir.as_deref(), Some("/tmp/quotebook-data"));
        assert_eq!(config.storage.session_id.as_deref(), Some("tab-7"));
        assert_eq!(config.sync.endpoint, "http://localhost:8080/posts");
        assert_eq!(config.sync.interval_secs, 15);
        assert_eq!(config.sync.fetch_limit, 3);
        assert!(!config.sync.push);
        assert_eq!(config.sync.timeout_secs, 2);
        assert!(!config.output.color);
        assert_eq!(config.logging.file.as_deref(), Some("/tmp/quotebook.log"));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[sync]
interval_secs = 30
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.sync.interval_secs, 30);
        assert_eq!(config.sync.fetch_limit, 5);
        assert!(config.sync.push);
        assert!(config.output.color);
        assert!(config.storage.data_dir.is_none());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_reports_all_issues() {
        let mut config = FileConfig::default();
        config.sync.endpoint = "  ".to_string();
        config.sync.interval_secs = 0;
        config.sync.fetch_limit = 0;

        assert_eq!(
            config.validate(),
            vec![
                ConfigValidationError::EmptyEndpoint,
                ConfigValidationError::InvalidInterval,
                ConfigValidationError::InvalidFetchLimit,
            ]
        );
    }
}
