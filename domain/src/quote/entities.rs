//! Quote record entity

use crate::core::error::QuoteError;
use serde::{Deserialize, Serialize};

/// A single quote (Entity)
///
/// Text and category are required and never blank. Records are immutable
/// once built; two records are considered the same quote during
/// reconciliation when their `text` matches exactly (see [`QuoteRecord::same_text`]).
///
/// The serialized form is `{ "text", "author"?, "category" }` in that key
/// order, which keeps exports byte-stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuoteRecord")]
pub struct QuoteRecord {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<String>,
    category: String,
}

impl QuoteRecord {
    /// Create a new record, rejecting blank text or category.
    ///
    /// Values are stored as given; callers that accept user input trim
    /// first (see [`crate::QuoteStore::add`]).
    pub fn new(
        text: impl Into<String>,
        author: Option<String>,
        category: impl Into<String>,
    ) -> Result<Self, QuoteError> {
        let text = text.into();
        let category = category.into();

        if text.trim().is_empty() {
            return Err(QuoteError::Validation { field: "text" });
        }
        if category.trim().is_empty() {
            return Err(QuoteError::Validation { field: "category" });
        }

        Ok(Self {
            text,
            author,
            category,
        })
    }

    /// Build a record from values known to be valid (seed data).
    pub(crate) fn from_static(text: &str, category: &str) -> Self {
        Self {
            text: text.to_string(),
            author: None,
            category: category.to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Exact, case- and whitespace-sensitive text comparison used by merge
    pub fn same_text(&self, other: &QuoteRecord) -> bool {
        self.text == other.text
    }
}

impl std::fmt::Display for QuoteRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.author {
            Some(author) => write!(f, "\"{}\" - {} ({})", self.text, author, self.category),
            None => write!(f, "\"{}\" - ({})", self.text, self.category),
        }
    }
}

/// Wire shape accepted on deserialization before validation
#[derive(Deserialize)]
struct RawQuoteRecord {
    text: String,
    #[serde(default)]
    author: Option<String>,
    category: String,
}

impl TryFrom<RawQuoteRecord> for QuoteRecord {
    type Error = QuoteError;

    fn try_from(raw: RawQuoteRecord) -> Result<Self, Self::Error> {
        QuoteRecord::new(raw.text, raw.author, raw.category)
    }
}
