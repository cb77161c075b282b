//! Category filter and category index derivation

use super::entities::QuoteRecord;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

/// Sentinel filter value meaning "every category"
pub const ALL_CATEGORIES: &str = "all";

/// The currently selected category (Value Object)
///
/// Persisted as a plain string: [`ALL_CATEGORIES`] or a category name.
/// A name that no longer exists in the store is kept as-is; filtering on it
/// simply yields nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// Parse a stored or user-supplied filter value.
    ///
    /// Blank input falls back to [`CategoryFilter::All`].
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Named(name) => name,
        }
    }

    /// Whether a record passes this filter (exact category match)
    pub fn matches(&self, quote: &QuoteRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => quote.category() == name,
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CategoryFilter::parse(s))
    }
}

impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        CategoryFilter::parse(s)
    }
}

impl From<String> for CategoryFilter {
    fn from(s: String) -> Self {
        CategoryFilter::parse(&s)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.as_str().to_string()
    }
}

/// Derive the category list shown to the user.
///
/// Returns [`ALL_CATEGORIES`] followed by each distinct category in the
/// order it is first seen. Pure function of the records; callers recompute
/// it after every mutation.
pub fn categories(quotes: &[QuoteRecord]) -> Vec<String> {
    let mut result = vec![ALL_CATEGORIES.to_string()];
    for quote in quotes {
        if !result[1..].iter().any(|c| c == quote.category()) {
            result.push(quote.category().to_string());
        }
    }
    result
}
