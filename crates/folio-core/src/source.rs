//! Content source abstraction.
//!
//! The book collection is supplied by an external content source at
//! startup. This module defines the trait the rest of the system loads
//! through, plus the JSON file implementation used by the CLI.
//!
//! Loading happens exactly once: sources return an owned, validated
//! `Book`, and nothing downstream ever writes back.

use crate::book::Book;
use crate::error::{FolioError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A provider of book content.
///
/// Implementations validate the collection (dense 1..=N page numbering)
/// and initialize search caches before returning it.
pub trait ContentSource {
    /// Load the complete book.
    fn load(&self) -> Result<Book>;

    /// Human-readable description of where the content comes from,
    /// for logs and status output.
    fn describe(&self) -> String;
}

/// Content source reading a JSON book document from disk.
#[derive(Debug, Clone)]
pub struct JsonSource {
    path: PathBuf,
}

impl JsonSource {
    /// Create a source for the given book file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonSource { path: path.into() }
    }

    /// The file this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContentSource for JsonSource {
    fn load(&self) -> Result<Book> {
        if !self.path.exists() {
            return Err(FolioError::BookNotFound {
                path: self.path.clone(),
            });
        }

        debug!(path = %self.path.display(), "Reading book file");
        let contents = fs::read_to_string(&self.path)?;
        let book = Book::from_json_str(&contents)?;

        info!(
            path = %self.path.display(),
            pages = book.total_pages(),
            "Book loaded from file"
        );

        Ok(book)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    const MINIMAL_BOOK: &str = r#"{
        "metadata": { "title": "t", "subtitle": "", "author": "", "description": "",
                      "dedication": "", "version": "", "lastUpdated": "", "compiledBy": "" },
        "pages": [
            { "number": 1, "theme": "अ", "title": "first", "summary": "s", "paragraphs": ["p"],
              "quote": "q", "callToAction": "c", "insights": [], "year": "",
              "location": "", "event": "", "mentor": "" }
        ]
    }"#;

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.json");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(MINIMAL_BOOK.as_bytes()).unwrap();

        let source = JsonSource::new(&path);
        let book = source.load().unwrap();

        assert_eq!(book.total_pages(), 1);
        assert_eq!(source.describe(), path.display().to_string());
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let source = JsonSource::new(dir.path().join("absent.json"));

        assert!(matches!(
            source.load(),
            Err(FolioError::BookNotFound { .. })
        ));
    }

    #[test]
    fn test_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();

        let source = JsonSource::new(&path);
        assert!(matches!(
            source.load(),
            Err(FolioError::Serialization(_))
        ));
    }
}
