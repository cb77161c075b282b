//! Use cases (application services)
//!
//! - [`session::QuoteSession`]: show, add, import, export, filter
//! - [`sync_quotes::SyncQuotesUseCase`]: server reconciliation, one-shot or periodic

pub mod session;
pub mod sync_quotes;

#[cfg(test)]
pub(crate) mod test_support;
