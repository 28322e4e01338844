//! Application state management.

use anyhow::Context;
use folio_core::{Book, Config, ContentSource, JsonSource};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Shared application state.
pub struct App {
    /// Configuration
    pub config: Config,

    /// The loaded book
    pub book: Arc<Book>,

    /// Where the book was loaded from
    pub source_description: String,
}

impl App {
    /// Create a new application instance.
    ///
    /// The book path is taken from the command line when given, otherwise
    /// from the configuration; having neither is an error.
    pub fn new(config: Config, book_override: Option<PathBuf>) -> anyhow::Result<Self> {
        let book_path = book_override
            .or_else(|| config.general.book_path.clone())
            .context(
                "no book configured: pass --book <file> or set general.book_path in folio.toml",
            )?;

        let source = JsonSource::new(&book_path);
        let book = Arc::new(
            source
                .load()
                .with_context(|| format!("failed to load book from {}", book_path.display()))?,
        );

        info!(
            source = %source.describe(),
            pages = book.total_pages(),
            "Application initialized"
        );

        Ok(App {
            config,
            book,
            source_description: source.describe(),
        })
    }
}
