//! Console output formatter for quotes

use colored::Colorize;
use quotebook_domain::{CategoryFilter, QuoteRecord};

/// Formats quotes and quote lists for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// One quote: `"text" - author (category)`, author omitted when absent
    pub fn format_quote(quote: &QuoteRecord) -> String {
        let text = format!("\"{}\"", quote.text()).bold();
        let category = format!("({})", quote.category()).dimmed();
        match quote.author() {
            Some(author) => format!("{} - {} {}", text, author.italic(), category),
            None => format!("{} - {}", text, category),
        }
    }

    /// Numbered list of quotes
    pub fn format_list(quotes: &[&QuoteRecord]) -> String {
        if quotes.is_empty() {
            return format!("{}\n", "(no quotes)".dimmed());
        }

        let width = quotes.len().to_string().len();
        let mut output = String::new();
        for (i, quote) in quotes.iter().enumerate() {
            output.push_str(&format!(
                "{:>width$}. {}\n",
                (i + 1).to_string().cyan(),
                Self::format_quote(quote),
                width = width
            ));
        }
        output
    }

    /// Category list with the selected entry marked
    pub fn format_categories(categories: &[String], selected: &CategoryFilter) -> String {
        let mut output = String::new();
        for category in categories {
            if category == selected.as_str() {
                output.push_str(&format!("{} {}\n", "*".green(), category.green().bold()));
            } else {
                output.push_str(&format!("  {}\n", category));
            }
        }
        output
    }

    pub fn format_message(message: &str) -> String {
        message.yellow().to_string()
    }

    pub fn format_status(status: &str) -> String {
        format!("{} {}", "~".cyan(), status)
    }
}
