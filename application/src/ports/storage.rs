//! Key-value storage port
//!
//! Durable storage (survives across sessions) and ephemeral storage (scoped
//! to the current session) share this interface; which is which is decided
//! when the [`PersistenceGateway`](crate::persistence::PersistenceGateway) is
//! built.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;

/// Errors that can occur in a storage backend
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage data is corrupt: {0}")]
    Corrupt(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// String key-value store
///
/// Writes are immediate: a successful `set` is visible to the next `get`
/// and, for durable backends, to the next process.
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` if the key was never written
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Process-local store, used for tests and as the session store when no
/// session file can be created.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Unavailable("in-memory store lock poisoned".to_string()))
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
