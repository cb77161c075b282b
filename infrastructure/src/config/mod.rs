//! Configuration file loading for quotebook
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QUOTEBOOK_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./quotebook.toml` or `./.quotebook.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/quotebook/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLoggingConfig, FileOutputConfig, FileStorageConfig,
    FileSyncConfig, STORAGE_FILE_NAME,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
