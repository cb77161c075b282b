//! Persistence gateway
//!
//! Maps session state onto the two key-value stores:
//!
//! | Key                | Store     | Value                          |
//! |--------------------|-----------|--------------------------------|
//! | `quotes`           | durable   | JSON array of the full store   |
//! | `selectedCategory` | durable   | plain category string or `all` |
//! | `lastViewedQuote`  | ephemeral | JSON object of one quote       |
//!
//! Unreadable or malformed values are treated as absent and logged, never
//! returned as errors.

use crate::ports::storage::{KeyValueStore, StorageError};
use quotebook_domain::{CategoryFilter, QuoteRecord, QuoteStore};
use std::sync::Arc;
use tracing::{debug, warn};

pub const QUOTES_KEY: &str = "quotes";
pub const SELECTED_CATEGORY_KEY: &str = "selectedCategory";
pub const LAST_VIEWED_KEY: &str = "lastViewedQuote";

/// Saves and loads session state through the storage ports
#[derive(Clone)]
pub struct PersistenceGateway {
    durable: Arc<dyn KeyValueStore>,
    ephemeral: Arc<dyn KeyValueStore>,
}

impl PersistenceGateway {
    pub fn new(durable: Arc<dyn KeyValueStore>, ephemeral: Arc<dyn KeyValueStore>) -> Self {
        Self { durable, ephemeral }
    }

    /// Overwrite the persisted snapshot with the full store
    pub fn save_snapshot(&self, store: &QuoteStore) -> Result<(), StorageError> {
        let json = serde_json::to_string(store.all())
            .map_err(|e| StorageError::Corrupt(e.to_string()))?;
        self.durable.set(QUOTES_KEY, &json)?;
        debug!("Saved {} quotes", store.len());
        Ok(())
    }

    /// The persisted snapshot, or `None` if never saved or unreadable
    pub fn load_snapshot(&self) -> Option<Vec<QuoteRecord>> {
        let raw = read_key(self.durable.as_ref(), QUOTES_KEY)?;
        match serde_json::from_str::<Vec<QuoteRecord>>(&raw) {
            Ok(quotes) => {
                debug!("Loaded {} quotes from storage", quotes.len());
                Some(quotes)
            }
            Err(e) => {
                warn!("Ignoring malformed quote snapshot: {}", e);
                None
            }
        }
    }

    pub fn save_last_viewed(&self, quote: &QuoteRecord) -> Result<(), StorageError> {
        let json =
            serde_json::to_string(quote).map_err(|e| StorageError::Corrupt(e.to_string()))?;
        self.ephemeral.set(LAST_VIEWED_KEY, &json)
    }

    pub fn load_last_viewed(&self) -> Option<QuoteRecord> {
        let raw = read_key(self.ephemeral.as_ref(), LAST_VIEWED_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(quote) => Some(quote),
            Err(e) => {
                warn!("Ignoring malformed last viewed quote: {}", e);
                None
            }
        }
    }

    pub fn save_selected_category(&self, filter: &CategoryFilter) -> Result<(), StorageError> {
        self.durable.set(SELECTED_CATEGORY_KEY, filter.as_str())
    }

    /// The persisted filter, [`CategoryFilter::All`] when absent
    pub fn load_selected_category(&self) -> CategoryFilter {
        read_key(self.durable.as_ref(), SELECTED_CATEGORY_KEY)
            .map(|raw| CategoryFilter::parse(&raw))
            .unwrap_or_default()
    }
}

fn read_key(store: &dyn KeyValueStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            warn!("Could not read '{}' from storage: {}", key, e);
            None
        }
    }
}
