//! Quote store: the ordered collection of quotes owned by a session

use super::category::{self, CategoryFilter};
use super::entities::QuoteRecord;
use super::selection;
use crate::core::error::QuoteError;

/// Seed quotes used when nothing has been persisted yet
const DEFAULT_QUOTES: &[(&str, &str)] = &[
    (
        "The best way to predict the future is to create it.",
        "Motivation",
    ),
    (
        "Life is 10% what happens to us and 90% how we react to it.",
        "Life",
    ),
    (
        "The only limit to our realization of tomorrow is our doubts of today.",
        "Inspiration",
    ),
    ("Don't let yesterday take up too much of today.", "Wisdom"),
];

/// Ordered collection of quotes.
///
/// Insertion order is preserved and duplicate texts are allowed. The store
/// is the only mutator of its records; persisting after a mutation is the
/// caller's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteStore {
    records: Vec<QuoteRecord>,
}

impl QuoteStore {
    /// Adopt a persisted snapshot, or fall back to the seed list when absent.
    pub fn load(snapshot: Option<Vec<QuoteRecord>>) -> Self {
        match snapshot {
            Some(records) => Self { records },
            None => Self::with_defaults(),
        }
    }

    pub fn with_defaults() -> Self {
        Self {
            records: Self::default_quotes(),
        }
    }

    pub fn from_records(records: Vec<QuoteRecord>) -> Self {
        Self { records }
    }

    /// The built-in seed list
    pub fn default_quotes() -> Vec<QuoteRecord> {
        DEFAULT_QUOTES
            .iter()
            .map(|(text, category)| QuoteRecord::from_static(text, category))
            .collect()
    }

    /// Append a quote built from user input.
    ///
    /// Text, category and author are trimmed; a blank author is stored as
    /// absent. Fails without touching the store if text or category is blank.
    pub fn add(
        &mut self,
        text: &str,
        author: Option<&str>,
        category: &str,
    ) -> Result<&QuoteRecord, QuoteError> {
        let author = author
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string);
        let record = QuoteRecord::new(text.trim(), author, category.trim())?;

        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }

    /// Append already-validated records (import path). Returns how many were added.
    pub fn append_all(&mut self, records: impl IntoIterator<Item = QuoteRecord>) -> usize {
        let before = self.records.len();
        self.records.extend(records);
        self.records.len() - before
    }

    /// Reconcile with a remote batch, remote wins on text match.
    ///
    /// The store becomes the remote batch followed by every local record
    /// whose text matches no remote record. Returns the number of local
    /// records dropped as duplicates.
    pub fn merge(&mut self, remote: Vec<QuoteRecord>) -> usize {
        let local = std::mem::take(&mut self.records);
        let before = local.len();

        let survivors: Vec<QuoteRecord> = local
            .into_iter()
            .filter(|local| !remote.iter().any(|r| r.same_text(local)))
            .collect();
        let conflicts = before - survivors.len();

        self.records = remote;
        self.records.extend(survivors);
        conflicts
    }

    pub fn all(&self) -> &[QuoteRecord] {
        &self.records
    }

    pub fn filter(&self, category: &CategoryFilter) -> Vec<&QuoteRecord> {
        selection::filter(&self.records, category)
    }

    pub fn categories(&self) -> Vec<String> {
        category::categories(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<QuoteRecord> {
        self.records
    }
}
