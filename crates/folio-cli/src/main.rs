//! # Folio CLI
//!
//! Command-line interface for the Folio terminal book reader.
//!
//! ## Commands
//!
//! - `folio read` - Open the interactive reading TUI
//! - `folio show <page>` - Print one page to stdout
//! - `folio search <query>` - List pages matching a query
//! - `folio themes` - List the book's themes
//! - `folio info` - Show book metadata and statistics
//!
//! ## Example Usage
//!
//! ```bash
//! # Open the reader on a book file
//! folio --book charitra.json read
//!
//! # Show page 12
//! folio --book charitra.json show 12
//!
//! # Search within one theme
//! folio --book charitra.json search "theme:सेवा शिकागो"
//! ```

mod app;
mod commands;
mod tui;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Folio - filterable, paginated book reading
#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the book file (overrides the configured book)
    #[arg(short, long, global = true)]
    book: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive reading TUI
    #[command(alias = "r")]
    Read,

    /// Print one page to stdout
    Show {
        /// Page number (clamped to the book's range)
        page: i64,

        /// Restrict to one theme before resolving the page
        #[arg(short, long)]
        theme: Option<String>,

        /// Apply a search term before resolving the page
        #[arg(short, long)]
        search: Option<String>,
    },

    /// List pages matching a query
    Search {
        /// Search query (words and an optional theme:<label> token)
        query: String,

        /// Restrict to one theme (shorthand for a theme: token)
        #[arg(short, long)]
        theme: Option<String>,

        /// Maximum number of pages to list
        #[arg(short, long, default_value = "50")]
        limit: usize,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// List the book's themes with page counts
    Themes,

    /// Show book metadata and statistics
    Info,
}

#[derive(Clone, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)))
        .init();

    // Load configuration
    let config = match &cli.config {
        Some(path) => folio_core::Config::load_from(path)?,
        None => folio_core::Config::load()?,
    };

    let app = app::App::new(config, cli.book.clone())?;

    // Execute command
    match cli.command {
        Commands::Read => tui::run(app),
        Commands::Show {
            page,
            theme,
            search,
        } => commands::show::run(app, page, theme, search),
        Commands::Search {
            query,
            theme,
            limit,
            output,
        } => commands::search::run(app, &query, theme, limit, output),
        Commands::Themes => commands::themes::run(app),
        Commands::Info => commands::info::run(app),
    }
}
