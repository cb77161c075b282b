//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for quotebook
#[derive(Parser, Debug)]
#[command(name = "quotebook")]
#[command(author, version, about = "Random quotes by category, kept in sync with a server")]
#[command(long_about = r#"
Quotebook keeps a local collection of quotes, shows a random one from the
selected category, and periodically reconciles the collection with a server.

Running without a subcommand shows the last viewed quote of this session,
or a random quote from the selected category if there is none.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./quotebook.toml    Project-level config
3. ~/.config/quotebook/config.toml   Global config

Example:
  quotebook show -c Wisdom
  quotebook add "Stay hungry, stay foolish." -c Life -a "Steve Jobs"
  quotebook export -o backup.json
  quotebook watch --interval 30
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress status lines and spinners
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show a random quote (from the selected category unless overridden)
    Show {
        /// Category to draw from for this call only ("all" for every category)
        #[arg(short, long, value_name = "CATEGORY")]
        category: Option<String>,
    },

    /// Show the last quote viewed in this session
    Last,

    /// Add a new quote
    Add {
        /// Quote text
        text: String,

        /// Category of the quote
        #[arg(short, long, value_name = "CATEGORY", default_value = "")]
        category: String,

        /// Author of the quote
        #[arg(short, long, value_name = "AUTHOR")]
        author: Option<String>,
    },

    /// List quotes, optionally limited to one category
    List {
        #[arg(short, long, value_name = "CATEGORY")]
        category: Option<String>,
    },

    /// List known categories and mark the selected one
    Categories,

    /// Select the category used by `show` ("all" clears the selection)
    Select { category: String },

    /// Export all quotes as a JSON file
    Export {
        /// Output path
        #[arg(short, long, value_name = "PATH", default_value = quotebook_domain::EXPORT_FILE_NAME)]
        output: PathBuf,
    },

    /// Import quotes from a JSON file
    Import { path: PathBuf },

    /// Sync once with the server
    Sync,

    /// Sync periodically until interrupted; press Enter to sync immediately
    Watch {
        /// Seconds between syncs (overrides configuration)
        #[arg(long, value_name = "SECS")]
        interval: Option<u64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["quotebook"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_add_with_options() {
        let cli = Cli::try_parse_from([
            "quotebook", "add", "Be kind.", "-c", "Life", "-a", "Anon", "-vv",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Some(Command::Add {
                text: "Be kind.".to_string(),
                category: "Life".to_string(),
                author: Some("Anon".to_string()),
            })
        );
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_export_default_path() {
        let cli = Cli::try_parse_from(["quotebook", "export"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Export {
                output: PathBuf::from("quotes.json")
            })
        );
    }

    #[test]
    fn test_watch_interval() {
        let cli = Cli::try_parse_from(["quotebook", "watch", "--interval", "5"]).unwrap();
        assert_eq!(cli.command, Some(Command::Watch { interval: Some(5) }));
    }
}
