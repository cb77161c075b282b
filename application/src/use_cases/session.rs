//! Quote session use case
//!
//! [`QuoteSession`] owns the [`QuoteStore`] for the lifetime of one session
//! and is the entry point for every user-facing operation: showing a random
//! quote, adding, importing, exporting and changing the category filter.
//!
//! Every mutation is persisted immediately through the
//! [`PersistenceGateway`]. Nothing here is fatal: failures are rendered as
//! messages on the [`QuoteDisplay`] and leave the store untouched.
//!
//! # Example
//!
//! ```ignore
//! let mut session = QuoteSession::open(persistence);
//! session.add_quote(&AddQuoteInput::new("Stay hungry", "Life"), &display)?;
//! session.show_random(&display);
//! ```

use crate::messages;
use crate::persistence::PersistenceGateway;
use crate::ports::quote_display::QuoteDisplay;
use quotebook_domain::{
    CategoryFilter, CodecError, EntropyRandom, QuoteError, QuoteRecord, QuoteStore, RandomSource,
    export, import, pick_random,
};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors returned by session operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Quote(#[from] QuoteError),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl SessionError {
    /// The message shown to the user for this error
    pub fn user_message(&self) -> &'static str {
        match self {
            SessionError::Quote(QuoteError::Validation { .. }) => messages::MISSING_FIELDS,
            SessionError::Quote(QuoteError::NotFound) => messages::NO_QUOTES_FOR_CATEGORY,
            SessionError::Codec(CodecError::Parse(_)) => messages::PARSE_FAILED,
            SessionError::Codec(CodecError::Format(_)) => messages::INVALID_FILE_FORMAT,
            SessionError::Codec(CodecError::Encode(_)) => messages::EXPORT_FAILED,
        }
    }
}

/// Input for [`QuoteSession::add_quote`], as typed by the user
#[derive(Debug, Clone, Default)]
pub struct AddQuoteInput {
    pub text: String,
    pub author: Option<String>,
    pub category: String,
}

impl AddQuoteInput {
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: None,
            category: category.into(),
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

/// One running session: the store plus its collaborators
pub struct QuoteSession {
    store: QuoteStore,
    selected: CategoryFilter,
    persistence: PersistenceGateway,
    random: Box<dyn RandomSource>,
}

impl QuoteSession {
    /// Load the persisted store (or the seed list) and the saved filter.
    pub fn open(persistence: PersistenceGateway) -> Self {
        let snapshot = persistence.load_snapshot();
        if snapshot.is_none() {
            debug!("No saved quotes, starting from defaults");
        }
        let store = QuoteStore::load(snapshot);
        let selected = persistence.load_selected_category();

        Self {
            store,
            selected,
            persistence,
            random: Box::new(EntropyRandom::new()),
        }
    }

    /// Replace the random source (deterministic selection in tests)
    pub fn with_random(mut self, random: Box<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }

    pub fn store(&self) -> &QuoteStore {
        &self.store
    }

    pub fn selected_category(&self) -> &CategoryFilter {
        &self.selected
    }

    pub fn persistence(&self) -> &PersistenceGateway {
        &self.persistence
    }

    /// `"all"` followed by the distinct categories, recomputed from the store
    pub fn categories(&self) -> Vec<String> {
        self.store.categories()
    }

    /// Quotes matching the given filter, or the selected one when `None`
    pub fn filtered(&self, category: Option<&CategoryFilter>) -> Vec<&QuoteRecord> {
        self.store.filter(category.unwrap_or(&self.selected))
    }

    /// Change and persist the selected category.
    pub fn select_category(&mut self, filter: CategoryFilter, display: &dyn QuoteDisplay) {
        if let Err(e) = self.persistence.save_selected_category(&filter) {
            warn!("Could not save selected category: {}", e);
            display.show_message(&messages::save_failed(&e));
        }
        self.selected = filter;
        display.show_categories(&self.categories(), &self.selected);
    }

    /// Show a random quote from the selected category.
    pub fn show_random(&mut self, display: &dyn QuoteDisplay) -> Option<QuoteRecord> {
        let filter = self.selected.clone();
        self.show_random_in(&filter, display)
    }

    /// Show a random quote from `filter` and remember it as last viewed.
    ///
    /// An empty match is not an error: the no-results message is shown and
    /// `None` returned.
    pub fn show_random_in(
        &mut self,
        filter: &CategoryFilter,
        display: &dyn QuoteDisplay,
    ) -> Option<QuoteRecord> {
        let candidates = self.store.filter(filter);
        let picked = match pick_random(&candidates, self.random.as_mut()) {
            Ok(quote) => (*quote).clone(),
            Err(e) => {
                debug!("Nothing to show for category '{}'", filter);
                display.show_message(&e.to_string());
                return None;
            }
        };

        display.show_quote(&picked);
        if let Err(e) = self.persistence.save_last_viewed(&picked) {
            warn!("Could not save last viewed quote: {}", e);
        }
        Some(picked)
    }

    /// Show the quote last displayed in this session, if any.
    pub fn restore_last_viewed(&self, display: &dyn QuoteDisplay) -> Option<QuoteRecord> {
        let quote = self.persistence.load_last_viewed()?;
        display.show_quote(&quote);
        Some(quote)
    }

    /// Validate and append a quote, then persist.
    pub fn add_quote(
        &mut self,
        input: &AddQuoteInput,
        display: &dyn QuoteDisplay,
    ) -> Result<QuoteRecord, SessionError> {
        let added = match self
            .store
            .add(&input.text, input.author.as_deref(), &input.category)
        {
            Ok(quote) => quote.clone(),
            Err(e) => {
                let error = SessionError::from(e);
                display.show_message(error.user_message());
                return Err(error);
            }
        };

        info!("Added quote in category '{}'", added.category());
        self.persist(display);
        display.show_categories(&self.categories(), &self.selected);
        display.show_message(messages::QUOTE_ADDED);
        Ok(added)
    }

    /// Parse an exported list and append it to the store, then persist.
    ///
    /// Imported quotes are appended, not merged by text. On any parse or
    /// format error the store is left unchanged.
    pub fn import_quotes(
        &mut self,
        text: &str,
        display: &dyn QuoteDisplay,
    ) -> Result<usize, SessionError> {
        let imported = match import(text) {
            Ok(quotes) => quotes,
            Err(e) => {
                warn!("Import rejected: {}", e);
                let error = SessionError::from(e);
                display.show_message(error.user_message());
                return Err(error);
            }
        };

        let count = self.store.append_all(imported);
        info!("Imported {} quotes", count);
        self.persist(display);
        display.show_categories(&self.categories(), &self.selected);
        display.show_message(messages::IMPORT_SUCCEEDED);
        Ok(count)
    }

    /// Pretty JSON of the full store.
    pub fn export_quotes(&self) -> Result<String, SessionError> {
        Ok(export(self.store.all())?)
    }

    /// Merge a server batch (server wins on text), persist, and refresh
    /// the category list. Returns the number of local quotes replaced.
    pub fn apply_remote_batch(
        &mut self,
        batch: Vec<QuoteRecord>,
        display: &dyn QuoteDisplay,
    ) -> usize {
        let conflicts = self.store.merge(batch);
        self.persist(display);
        display.show_categories(&self.categories(), &self.selected);
        conflicts
    }

    fn persist(&self, display: &dyn QuoteDisplay) {
        if let Err(e) = self.persistence.save_snapshot(&self.store) {
            warn!("Could not save quotes: {}", e);
            display.show_message(&messages::save_failed(&e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::storage::{InMemoryStore, KeyValueStore};
    use crate::use_cases::test_support::{FailingStore, RecordingDisplay};
    use quotebook_domain::FixedRandom;
    use std::sync::Arc;

    fn quote(text: &str, category: &str) -> QuoteRecord {
        QuoteRecord::new(text, None, category).unwrap()
    }

    fn persistence() -> PersistenceGateway {
        PersistenceGateway::new(
            Arc::new(InMemoryStore::new()),
            Arc::new(InMemoryStore::new()),
        )
    }

    fn session_with(quotes: Vec<QuoteRecord>) -> QuoteSession {
        let persistence = persistence();
        persistence
            .save_snapshot(&QuoteStore::from_records(quotes))
            .unwrap();
        QuoteSession::open(persistence).with_random(Box::new(FixedRandom(0.0)))
    }

    #[test]
    fn test_open_without_snapshot_uses_defaults() {
        let session = QuoteSession::open(persistence());
        assert_eq!(session.store().all(), QuoteStore::default_quotes().as_slice());
        assert_eq!(session.selected_category(), &CategoryFilter::All);
    }

    #[test]
    fn test_open_restores_snapshot_and_filter() {
        let persistence = persistence();
        persistence
            .save_snapshot(&QuoteStore::from_records(vec![quote("A", "X")]))
            .unwrap();
        persistence
            .save_selected_category(&CategoryFilter::parse("X"))
            .unwrap();

        let session = QuoteSession::open(persistence);
        assert_eq!(session.store().all(), &[quote("A", "X")]);
        assert_eq!(session.selected_category(), &CategoryFilter::parse("X"));
    }

    #[test]
    fn test_add_quote_persists_and_reports() {
        let mut session = session_with(vec![quote("A", "X")]);
        let display = RecordingDisplay::new();

        let added = session
            .add_quote(&AddQuoteInput::new(" B ", "Y").with_author("Ann"), &display)
            .unwrap();

        assert_eq!(added.text(), "B");
        assert_eq!(session.store().len(), 2);
        assert_eq!(session.store().all().last(), Some(&added));
        assert_eq!(
            session.persistence().load_snapshot().unwrap(),
            session.store().all()
        );
        assert_eq!(display.messages(), vec![messages::QUOTE_ADDED]);
        assert_eq!(
            display.last_categories(),
            Some(vec!["all".to_string(), "X".to_string(), "Y".to_string()])
        );
    }

    #[test]
    fn test_add_blank_quote_is_rejected() {
        let mut session = session_with(vec![quote("A", "X")]);
        let display = RecordingDisplay::new();

        let result = session.add_quote(&AddQuoteInput::new("   ", "Y"), &display);

        assert!(matches!(
            result,
            Err(SessionError::Quote(QuoteError::Validation { .. }))
        ));
        assert_eq!(session.store().len(), 1);
        assert_eq!(display.messages(), vec![messages::MISSING_FIELDS]);
    }

    #[test]
    fn test_show_random_saves_last_viewed() {
        let mut session = session_with(vec![quote("A", "X"), quote("B", "Y")]);
        let display = RecordingDisplay::new();

        let shown = session.show_random(&display).unwrap();

        assert_eq!(shown, quote("A", "X"));
        assert_eq!(display.quotes(), vec![shown.clone()]);
        assert_eq!(session.persistence().load_last_viewed(), Some(shown));
    }

    #[test]
    fn test_show_random_respects_selected_category() {
        let mut session = session_with(vec![quote("A", "X"), quote("B", "Y")]);
        let display = RecordingDisplay::new();

        session.select_category(CategoryFilter::parse("Y"), &display);
        let shown = session.show_random(&display).unwrap();

        assert_eq!(shown, quote("B", "Y"));
        assert_eq!(
            session.persistence().load_selected_category(),
            CategoryFilter::parse("Y")
        );
    }

    #[test]
    fn test_show_random_unknown_category_shows_message() {
        let mut session = session_with(vec![quote("A", "X")]);
        let display = RecordingDisplay::new();

        let shown = session.show_random_in(&CategoryFilter::parse("Nope"), &display);

        assert_eq!(shown, None);
        assert!(display.quotes().is_empty());
        assert_eq!(display.messages(), vec![messages::NO_QUOTES_FOR_CATEGORY]);
        assert_eq!(session.persistence().load_last_viewed(), None);
    }

    #[test]
    fn test_restore_last_viewed() {
        let mut session = session_with(vec![quote("A", "X")]);
        let display = RecordingDisplay::new();
        assert_eq!(session.restore_last_viewed(&display), None);

        session.show_random(&display);
        let restored = session.restore_last_viewed(&display);
        assert_eq!(restored, Some(quote("A", "X")));
        assert_eq!(display.quotes().len(), 2);
    }

    #[test]
    fn test_import_appends_and_persists() {
        let mut session = session_with(vec![quote("A", "X")]);
        let display = RecordingDisplay::new();

        let count = session
            .import_quotes(
                r#"[{"text":"A","category":"Z"},{"text":"B","category":"Y"}]"#,
                &display,
            )
            .unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            session.store().all(),
            &[quote("A", "X"), quote("A", "Z"), quote("B", "Y")]
        );
        assert_eq!(session.persistence().load_snapshot().unwrap().len(), 3);
        assert_eq!(display.messages(), vec![messages::IMPORT_SUCCEEDED]);
    }

    #[test]
    fn test_import_non_array_leaves_store_unchanged() {
        let mut session = session_with(vec![quote("A", "X"), quote("B", "Y")]);
        let display = RecordingDisplay::new();

        let result = session.import_quotes("\"not an array\"", &display);

        assert!(matches!(result, Err(SessionError::Codec(CodecError::Format(_)))));
        assert_eq!(session.store().len(), 2);
        assert_eq!(display.messages(), vec![messages::INVALID_FILE_FORMAT]);
    }

    #[test]
    fn test_import_malformed_json_reports_parse_error() {
        let mut session = session_with(vec![quote("A", "X")]);
        let display = RecordingDisplay::new();

        let result = session.import_quotes("not an array", &display);

        assert!(matches!(result, Err(SessionError::Codec(CodecError::Parse(_)))));
        assert_eq!(session.store().len(), 1);
        assert_eq!(display.messages(), vec![messages::PARSE_FAILED]);
    }

    #[test]
    fn test_export_then_import_round_trip() {
        let quotes = vec![quote("A", "X"), quote("B", "Y")];
        let source = session_with(quotes.clone());
        let exported = source.export_quotes().unwrap();

        let mut target = session_with(Vec::new());
        target.import_quotes(&exported, &RecordingDisplay::new()).unwrap();

        assert_eq!(target.store().all(), quotes.as_slice());
    }

    #[test]
    fn test_apply_remote_batch_merges_and_persists() {
        let mut session = session_with(vec![quote("A", "X"), quote("B", "Y")]);
        let display = RecordingDisplay::new();

        let conflicts = session.apply_remote_batch(vec![quote("A", "Z")], &display);

        assert_eq!(conflicts, 1);
        assert_eq!(session.store().all(), &[quote("A", "Z"), quote("B", "Y")]);
        assert_eq!(
            session.persistence().load_snapshot().unwrap(),
            session.store().all()
        );
    }

    #[test]
    fn test_save_failure_is_reported_not_fatal() {
        let durable: Arc<dyn KeyValueStore> = Arc::new(FailingStore);
        let persistence = PersistenceGateway::new(durable, Arc::new(InMemoryStore::new()));
        let mut session = QuoteSession::open(persistence);
        let display = RecordingDisplay::new();

        let result = session.add_quote(&AddQuoteInput::new("B", "Y"), &display);

        assert!(result.is_ok());
        let shown = display.messages();
        assert!(shown[0].starts_with("Could not save quotes"));
        assert_eq!(shown[1], messages::QUOTE_ADDED);
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            SessionError::Quote(QuoteError::Validation { field: "text" }).user_message(),
            messages::MISSING_FIELDS
        );
        assert_eq!(
            SessionError::Codec(CodecError::Format("x".into())).user_message(),
            messages::INVALID_FILE_FORMAT
        );
        assert_eq!(
            SessionError::Codec(CodecError::Parse("x".into())).user_message(),
            messages::PARSE_FAILED
        );
    }
}
