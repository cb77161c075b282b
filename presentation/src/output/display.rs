//! Console adapter for the [`QuoteDisplay`] port

use crate::config::OutputConfig;
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::SyncSpinner;
use quotebook_application::{QuoteDisplay, messages};
use quotebook_domain::{CategoryFilter, QuoteRecord};

/// Prints quotes to stdout and messages/status to stderr.
///
/// The "Syncing with server..." status starts a spinner (unless quiet); the
/// next status line stops it.
pub struct ConsoleDisplay {
    config: OutputConfig,
    spinner: SyncSpinner,
}

impl ConsoleDisplay {
    pub fn new(config: OutputConfig) -> Self {
        Self {
            config,
            spinner: SyncSpinner::new(),
        }
    }
}

impl QuoteDisplay for ConsoleDisplay {
    fn show_quote(&self, quote: &QuoteRecord) {
        let line = ConsoleFormatter::format_quote(quote);
        self.spinner.suspend(|| println!("{}", line));
    }

    fn show_message(&self, message: &str) {
        let line = ConsoleFormatter::format_message(message);
        self.spinner.suspend(|| eprintln!("{}", line));
    }

    fn show_status(&self, status: &str) {
        if self.config.quiet {
            return;
        }

        if status == messages::SYNCING {
            self.spinner.start(status);
            return;
        }

        let success = status.starts_with(messages::SYNC_SUCCEEDED);
        if !self.spinner.finish(status, success) {
            eprintln!("{}", ConsoleFormatter::format_status(status));
        }
    }

    fn show_categories(&self, categories: &[String], selected: &CategoryFilter) {
        if self.config.echo_categories {
            let block = ConsoleFormatter::format_categories(categories, selected);
            self.spinner.suspend(|| print!("{}", block));
        }
    }
}
