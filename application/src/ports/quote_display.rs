//! Rendering port
//!
//! The presentation layer implements [`QuoteDisplay`] to show quotes and
//! messages. Message strings are passed through verbatim.

use quotebook_domain::{CategoryFilter, QuoteRecord};

/// Receives everything the user should see
pub trait QuoteDisplay: Send + Sync {
    /// Show a quote
    fn show_quote(&self, quote: &QuoteRecord);

    /// Show a result message (no match, validation prompt, import outcome)
    fn show_message(&self, message: &str);

    /// Show a sync status line
    fn show_status(&self, status: &str);

    /// Called whenever the category list may have changed
    fn show_categories(&self, _categories: &[String], _selected: &CategoryFilter) {}
}

/// Display that discards everything, for tests and quiet runs
pub struct NoDisplay;

impl QuoteDisplay for NoDisplay {
    fn show_quote(&self, _quote: &QuoteRecord) {}
    fn show_message(&self, _message: &str) {}
    fn show_status(&self, _status: &str) {}
}
