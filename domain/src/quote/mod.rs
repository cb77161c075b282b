//! Quote domain.
//!
//! - [`entities::QuoteRecord`]: one quote: text, optional author, category
//! - [`store::QuoteStore`]: the ordered collection and its mutations
//! - [`category`]: the selected-category filter and category index
//! - [`selection`]: filtering and uniform random selection
//! - [`codec`]: JSON import/export

pub mod category;
pub mod codec;
pub mod entities;
pub mod selection;
pub mod store;
