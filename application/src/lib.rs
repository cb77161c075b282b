//! Application layer for quotebook
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod messages;
pub mod persistence;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SyncParams;
pub use persistence::PersistenceGateway;
pub use ports::{
    quote_display::{NoDisplay, QuoteDisplay},
    remote_source::{RemoteError, RemoteQuoteSource},
    storage::{InMemoryStore, KeyValueStore, StorageError},
};
pub use use_cases::session::{AddQuoteInput, QuoteSession, SessionError};
pub use use_cases::sync_quotes::{SyncError, SyncQuotesUseCase};
