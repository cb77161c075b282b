//! Domain layer for quotebook
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Quote store
//!
//! A session owns one [`QuoteStore`]: an ordered list of [`QuoteRecord`]s
//! that only grows by `add`/import and is rewritten by server `merge`.
//!
//! ## Selection
//!
//! The category index and the random picker are pure derivations over the
//! store; nothing about them is stored.
//!
//! ## Reconciliation
//!
//! Server batches win over local quotes with the same exact text.

pub mod core;
pub mod quote;
pub mod sync;

// Re-export commonly used types
pub use crate::core::error::{CodecError, QuoteError};
pub use quote::{
    category::{ALL_CATEGORIES, CategoryFilter, categories},
    codec::{EXPORT_FILE_NAME, export, import},
    entities::QuoteRecord,
    selection::{EntropyRandom, FixedRandom, RandomSource, filter, pick_random},
    store::QuoteStore,
};
pub use sync::{
    remote::{EVEN_POSITION_CATEGORY, ODD_POSITION_CATEGORY, RemotePost, to_quote_batch},
    state::{SyncReport, SyncState},
};
