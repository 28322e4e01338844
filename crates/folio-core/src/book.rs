//! The loaded book collection.
//!
//! A `Book` is the static, read-only content the rest of the system works
//! over: descriptive metadata plus an ordered collection of pages. It is
//! loaded once at startup and never mutated afterwards, which keeps every
//! downstream consumer (filtering, navigation, rendering) a pure function
//! of the collection and the current navigator state.
//!
//! ## Architecture
//!
//! Pages are stored in a `Vec<PageRecord>` in page-number order. Because
//! page numbers are validated to be exactly 1..=N, lookup by page number
//! is a direct index into the vector.

use crate::error::{FolioError, Result};
use crate::types::{BookMetadata, BookStats, PageNumber, PageRecord};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A complete, immutable book: metadata plus ordered pages.
///
/// ## Example
///
/// ```rust,ignore
/// use folio_core::Book;
///
/// let book = Book::from_json_str(&contents)?;
/// println!("{}: {} pages", book.metadata().title, book.total_pages());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    /// Book-level metadata
    metadata: BookMetadata,

    /// All pages, in page-number order (validated to be 1..=N)
    pages: Vec<PageRecord>,
}

impl Book {
    /// Build a book from metadata and pages, validating the collection.
    ///
    /// Pages must be numbered exactly 1..=N in order. The search haystack
    /// of every page is initialized here so callers always receive pages
    /// ready for matching.
    pub fn new(metadata: BookMetadata, mut pages: Vec<PageRecord>) -> Result<Self> {
        for (i, page) in pages.iter_mut().enumerate() {
            let expected = PageNumber::new(i as u32 + 1);
            if page.number != expected {
                return Err(FolioError::invalid_book(format!(
                    "page at position {} is numbered {}, expected {}",
                    i, page.number, expected
                )));
            }
            page.init_search_text();
        }

        debug!(pages = pages.len(), "Book validated");

        Ok(Book { metadata, pages })
    }

    /// Parse a book from its JSON document representation.
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let raw: Book = serde_json::from_str(contents)?;
        let book = Book::new(raw.metadata, raw.pages)?;

        info!(
            title = %book.metadata.title,
            pages = book.total_pages(),
            "Book loaded"
        );

        Ok(book)
    }

    /// Book-level metadata.
    pub fn metadata(&self) -> &BookMetadata {
        &self.metadata
    }

    /// All pages in page-number order.
    pub fn pages(&self) -> &[PageRecord] {
        &self.pages
    }

    /// Total number of pages.
    pub fn total_pages(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Check if the book has no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Look up a page by its page number.
    pub fn get(&self, number: PageNumber) -> Option<&PageRecord> {
        // Page numbers are dense and 1-based, so this is a direct index.
        self.pages.get(number.as_u32().checked_sub(1)? as usize)
    }

    /// The first page, if any.
    pub fn first(&self) -> Option<&PageRecord> {
        self.pages.first()
    }

    /// The last page, if any.
    pub fn last(&self) -> Option<&PageRecord> {
        self.pages.last()
    }

    /// Distinct theme labels in order of first appearance.
    ///
    /// This is the option list a theme selector presents (with the "all"
    /// sentinel prepended by the caller).
    pub fn themes(&self) -> Vec<&str> {
        let mut themes: Vec<&str> = Vec::new();
        for page in &self.pages {
            if !themes.contains(&page.theme.as_str()) {
                themes.push(&page.theme);
            }
        }
        themes
    }

    /// Number of pages carrying the given theme label.
    pub fn theme_page_count(&self, theme: &str) -> u32 {
        self.pages.iter().filter(|p| p.theme == theme).count() as u32
    }

    /// Aggregate statistics over the collection.
    pub fn stats(&self) -> BookStats {
        BookStats {
            total_pages: self.total_pages(),
            theme_count: self.themes().len() as u32,
            total_paragraphs: self.pages.iter().map(|p| p.paragraphs.len() as u64).sum(),
            total_insights: self.pages.iter().map(|p| p.insights.len() as u64).sum(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{make_book, make_page};
    use super::*;

    #[test]
    fn test_valid_book() {
        let book = make_book(&[(1, "अ", "one"), (2, "ब", "two"), (3, "अ", "three")]);

        assert_eq!(book.total_pages(), 3);
        assert!(!book.is_empty());
        assert_eq!(book.get(PageNumber::new(2)).unwrap().title, "two");
        assert_eq!(book.first().unwrap().number, PageNumber::new(1));
        assert_eq!(book.last().unwrap().number, PageNumber::new(3));
    }

    #[test]
    fn test_get_out_of_range() {
        let book = make_book(&[(1, "अ", "one")]);

        assert!(book.get(PageNumber::new(0)).is_none());
        assert!(book.get(PageNumber::new(2)).is_none());
    }

    #[test]
    fn test_invalid_numbering_rejected() {
        let pages = vec![make_page(1, "अ", "one"), make_page(3, "ब", "three")];
        let result = Book::new(BookMetadata::default(), pages);

        assert!(matches!(result, Err(FolioError::BookInvalid { .. })));
    }

    #[test]
    fn test_themes_in_first_appearance_order() {
        let book = make_book(&[
            (1, "सेवा", "one"),
            (2, "बालपण", "two"),
            (3, "सेवा", "three"),
            (4, "प्रवास", "four"),
        ]);

        assert_eq!(book.themes(), vec!["सेवा", "बालपण", "प्रवास"]);
        assert_eq!(book.theme_page_count("सेवा"), 2);
        assert_eq!(book.theme_page_count("प्रवास"), 1);
        assert_eq!(book.theme_page_count("missing"), 0);
    }

    #[test]
    fn test_stats() {
        let book = make_book(&[(1, "अ", "one"), (2, "ब", "two")]);
        let stats = book.stats();

        assert_eq!(stats.total_pages, 2);
        assert_eq!(stats.theme_count, 2);
        assert_eq!(stats.total_paragraphs, 2);
        assert_eq!(stats.total_insights, 0);
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "metadata": {
                "title": "चरित्र",
                "subtitle": "प्रेरणा",
                "author": "लेखक",
                "description": "वर्णन",
                "dedication": "समर्पण",
                "version": "१.०",
                "lastUpdated": "२०२४",
                "compiledBy": "संकलक"
            },
            "pages": [
                {
                    "number": 1,
                    "theme": "बालपण",
                    "title": "पहिले पृष्ठ",
                    "summary": "सारांश",
                    "paragraphs": ["परिच्छेद"],
                    "quote": "उद्धरण",
                    "callToAction": "वाचा",
                    "insights": ["सूत्र"],
                    "year": "१९५०",
                    "location": "पुणे",
                    "event": "जन्म",
                    "mentor": "आई"
                }
            ]
        }"#;

        let book = Book::from_json_str(json).unwrap();
        assert_eq!(book.metadata().title, "चरित्र");
        assert_eq!(book.total_pages(), 1);

        // Haystack is initialized during load
        let page = book.get(PageNumber::FIRST).unwrap();
        assert!(page.contains_term("पुणे"));
    }

    #[test]
    fn test_from_json_str_invalid_numbering() {
        let json = r#"{
            "metadata": { "title": "t", "subtitle": "", "author": "", "description": "",
                          "dedication": "", "version": "", "lastUpdated": "", "compiledBy": "" },
            "pages": [
                { "number": 2, "theme": "अ", "title": "t", "summary": "", "paragraphs": [],
                  "quote": "", "callToAction": "", "insights": [], "year": "",
                  "location": "", "event": "", "mentor": "" }
            ]
        }"#;

        assert!(matches!(
            Book::from_json_str(json),
            Err(FolioError::BookInvalid { .. })
        ));
    }
}
