//! Remote batch payload and its mapping to quotes

use crate::quote::entities::QuoteRecord;
use serde::{Deserialize, Serialize};

/// Category given to remote items at even positions
pub const EVEN_POSITION_CATEGORY: &str = "Server";

/// Category given to remote items at odd positions
pub const ODD_POSITION_CATEGORY: &str = "Remote";

/// One item of a fetched remote batch.
///
/// Only `id` and `title` are read; any other fields the server sends are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemotePost {
    #[serde(default)]
    pub id: u64,
    pub title: String,
}

impl RemotePost {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }

    /// Synthesized author label for quotes that came from the server
    pub fn author_label(&self) -> String {
        format!("Server #{}", self.id)
    }
}

/// Map a fetched batch to quotes.
///
/// The category alternates by the item's position in the batch (even
/// positions get [`EVEN_POSITION_CATEGORY`]). Items with a blank title are
/// skipped; positions are counted before skipping.
pub fn to_quote_batch(posts: &[RemotePost]) -> Vec<QuoteRecord> {
    posts
        .iter()
        .enumerate()
        .filter_map(|(position, post)| {
            let category = if position % 2 == 0 {
                EVEN_POSITION_CATEGORY
            } else {
                ODD_POSITION_CATEGORY
            };
            QuoteRecord::new(post.title.clone(), Some(post.author_label()), category).ok()
        })
        .collect()
}
