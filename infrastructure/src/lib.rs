//! Infrastructure layer for quotebook
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod remote;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileStorageConfig, FileSyncConfig,
};
pub use remote::HttpQuoteSource;
pub use storage::JsonFileStore;
