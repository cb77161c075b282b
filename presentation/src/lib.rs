//! Presentation layer for quotebook
//!
//! This crate contains CLI definitions, console formatting,
//! and the terminal adapter for the display port.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use config::OutputConfig;
pub use output::{console::ConsoleFormatter, display::ConsoleDisplay};
pub use progress::reporter::SyncSpinner;
