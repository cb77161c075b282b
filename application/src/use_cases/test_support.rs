//! Shared test doubles for use case tests

use crate::ports::quote_display::QuoteDisplay;
use crate::ports::storage::{KeyValueStore, StorageError};
use quotebook_domain::{CategoryFilter, QuoteRecord};
use std::sync::Mutex;

/// Display that records everything it is asked to show
#[derive(Default)]
pub struct RecordingDisplay {
    quotes: Mutex<Vec<QuoteRecord>>,
    messages: Mutex<Vec<String>>,
    statuses: Mutex<Vec<String>>,
    categories: Mutex<Option<Vec<String>>>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quotes(&self) -> Vec<QuoteRecord> {
        self.quotes.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn statuses(&self) -> Vec<String> {
        self.statuses.lock().unwrap().clone()
    }

    pub fn last_categories(&self) -> Option<Vec<String>> {
        self.categories.lock().unwrap().clone()
    }
}

impl QuoteDisplay for RecordingDisplay {
    fn show_quote(&self, quote: &QuoteRecord) {
        self.quotes.lock().unwrap().push(quote.clone());
    }

    fn show_message(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn show_status(&self, status: &str) {
        self.statuses.lock().unwrap().push(status.to_string());
    }

    fn show_categories(&self, categories: &[String], _selected: &CategoryFilter) {
        *self.categories.lock().unwrap() = Some(categories.to_vec());
    }
}

/// Store whose every operation fails
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("disk gone".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disk gone".to_string()))
    }
}
