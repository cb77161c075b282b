//! Storage adapters for the [`KeyValueStore`](quotebook_application::KeyValueStore) port
//!
//! - [`JsonFileStore`]: durable storage and session storage files
//! - [`session`]: where the session file lives

mod json_file_store;
pub mod session;

pub use json_file_store::JsonFileStore;
pub use session::{SESSION_ENV, default_session_dir, session_id, session_store_path};
