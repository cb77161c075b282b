//! Core domain concepts shared across all subdomains.
//!
//! - [`error::QuoteError`]: validation and lookup failures on quotes
//! - [`error::CodecError`]: failures of the JSON interchange format

pub mod error;
