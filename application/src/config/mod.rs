//! Application-level configuration.
//!
//! - [`SyncParams`]: sync interval and push behavior

pub mod sync_params;

pub use sync_params::SyncParams;
