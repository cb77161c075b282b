//! Remote sync adapters

mod http_source;

pub use http_source::{DEFAULT_ENDPOINT, DEFAULT_FETCH_LIMIT, DEFAULT_TIMEOUT, HttpQuoteSource};
