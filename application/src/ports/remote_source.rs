//! Remote quote source port
//!
//! Defines how the sync use case talks to the server. Transport, auth and
//! retries belong to the adapter.

use async_trait::async_trait;
use quotebook_domain::{QuoteRecord, RemotePost};
use thiserror::Error;

/// Errors that can occur while talking to the server
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Server returned HTTP {status}")]
    Status { status: u16 },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,
}

/// Server endpoint that quotes are synced with
#[async_trait]
pub trait RemoteQuoteSource: Send + Sync {
    /// Fetch the current server batch
    async fn fetch_batch(&self) -> Result<Vec<RemotePost>, RemoteError>;

    /// Upload the full local list; callers treat this as best-effort
    async fn push_batch(&self, quotes: &[QuoteRecord]) -> Result<(), RemoteError>;
}
