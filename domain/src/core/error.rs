//! Domain error types

use thiserror::Error;

/// Errors raised by quote construction and selection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    /// A required field was empty after trimming surrounding whitespace
    #[error("Quote {field} cannot be empty")]
    Validation { field: &'static str },

    /// No quote matched the current filter
    #[error("No quotes available for this category.")]
    NotFound,
}

/// Errors raised by the JSON import/export format
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The payload is not well-formed JSON
    #[error("Error parsing JSON file: {0}")]
    Parse(String),

    /// The payload is JSON but not an array of quotes
    #[error("Invalid file format: {0}")]
    Format(String),

    /// The quote list could not be serialized
    #[error("Failed to encode quotes: {0}")]
    Encode(String),
}
