//! Core data types for Folio.
//!
//! This module defines the fundamental data structures of the content model.
//! These types are designed to be:
//!
//! - **Serializable**: The book collection is loaded from a JSON document
//! - **Immutable**: Pages are never mutated after loading
//! - **Search-friendly**: Lowercased search text is pre-computed per page

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequential page number within a book, starting at 1.
///
/// Page numbers are dense: a valid book contains exactly the pages
/// 1..=N in order, and `PageNumber` is the stable identity of a page
/// across filtering and navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageNumber(pub u32);

impl PageNumber {
    /// The first page of any non-empty book
    pub const FIRST: PageNumber = PageNumber(1);

    /// Create a new page number
    pub fn new(n: u32) -> Self {
        PageNumber(n)
    }

    /// Get the raw page number value
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PageNumber {
    fn from(n: u32) -> Self {
        PageNumber(n)
    }
}

/// A single page of the book.
///
/// This is the core content unit: one themed page with its prose,
/// a quote, and descriptive metadata about the period it covers.
///
/// ## Design Notes
///
/// - `search_text` is a pre-computed lowercase concatenation of every
///   searchable field, built once after deserialization so that repeated
///   substring searches never re-lowercase page content
/// - The searchable fields are: title, summary, paragraphs, quote,
///   mentor, location, and event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
    /// Sequential page number (1..=N)
    pub number: PageNumber,

    /// Theme label used for coarse filtering (e.g. "बालपण")
    pub theme: String,

    /// Page title
    pub title: String,

    /// One-paragraph summary shown above the body text
    pub summary: String,

    /// Body text, in reading order
    pub paragraphs: Vec<String>,

    /// A quote associated with this page
    pub quote: String,

    /// Closing call-to-action line
    pub call_to_action: String,

    /// Key insights, in display order
    pub insights: Vec<String>,

    /// Year or period the page covers (opaque text, may use local numerals)
    pub year: String,

    /// Location the page covers
    pub location: String,

    /// Event the page covers
    pub event: String,

    /// Mentor or key figure of the page
    pub mentor: String,

    /// Pre-computed lowercase search haystack
    #[serde(skip)]
    pub search_text: String,
}

impl PageRecord {
    /// Initialize the lowercase search haystack after deserialization.
    ///
    /// Joins the searchable fields with spaces so a term never matches
    /// across a field boundary.
    pub fn init_search_text(&mut self) {
        if self.search_text.is_empty() {
            let mut parts: Vec<&str> = Vec::with_capacity(self.paragraphs.len() + 6);
            parts.push(&self.title);
            parts.push(&self.summary);
            parts.extend(self.paragraphs.iter().map(String::as_str));
            parts.push(&self.quote);
            parts.push(&self.mentor);
            parts.push(&self.location);
            parts.push(&self.event);
            self.search_text = parts.join(" ").to_lowercase();
        }
    }

    /// Check if this page contains the given lowercase term in any
    /// searchable field.
    ///
    /// The caller is expected to pass an already-lowercased, trimmed term;
    /// an empty term matches every page.
    pub fn contains_term(&self, term_lower: &str) -> bool {
        term_lower.is_empty() || self.search_text.contains(term_lower)
    }
}

impl PartialEq for PageRecord {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for PageRecord {}

/// Descriptive metadata about the book as a whole.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookMetadata {
    /// Book title
    pub title: String,

    /// Subtitle or writing inspiration
    pub subtitle: String,

    /// Author name
    pub author: String,

    /// Short description shown on the landing surface
    pub description: String,

    /// Dedication line
    pub dedication: String,

    /// Edition/version label
    pub version: String,

    /// Last-updated label (opaque text)
    pub last_updated: String,

    /// Compiler/editor credit
    pub compiled_by: String,
}

/// Statistics about a loaded book.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookStats {
    /// Total number of pages
    pub total_pages: u32,

    /// Number of distinct themes
    pub theme_count: u32,

    /// Total number of body paragraphs across all pages
    pub total_paragraphs: u64,

    /// Total number of insight entries across all pages
    pub total_insights: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_page() -> PageRecord {
        let mut page = PageRecord {
            number: PageNumber::new(1),
            theme: "बालपण".to_string(),
            title: "Early Years".to_string(),
            summary: "A summary of the early years".to_string(),
            paragraphs: vec!["First paragraph".to_string(), "Second paragraph".to_string()],
            quote: "A memorable Quote".to_string(),
            call_to_action: "Read on".to_string(),
            insights: vec!["insight one".to_string()],
            year: "१९७४".to_string(),
            location: "Chicago".to_string(),
            event: "Founding".to_string(),
            mentor: "Guruji".to_string(),
            search_text: String::new(),
        };
        page.init_search_text();
        page
    }

    #[test]
    fn test_search_text_covers_searchable_fields() {
        let page = sample_page();

        assert!(page.contains_term("early years"));
        assert!(page.contains_term("second paragraph"));
        assert!(page.contains_term("memorable quote"));
        assert!(page.contains_term("guruji"));
        assert!(page.contains_term("chicago"));
        assert!(page.contains_term("founding"));
    }

    #[test]
    fn test_search_text_excludes_non_searchable_fields() {
        let page = sample_page();

        // call_to_action and insights are not part of the haystack
        assert!(!page.contains_term("read on"));
        assert!(!page.contains_term("insight one"));
    }

    #[test]
    fn test_empty_term_matches() {
        let page = sample_page();
        assert!(page.contains_term(""));
    }

    #[test]
    fn test_term_does_not_match_across_fields() {
        let page = sample_page();
        // "years" ends the title and "a summary" starts the summary
        assert!(!page.contains_term("yearsa"));
    }

    #[test]
    fn test_page_number_display() {
        let n = PageNumber::new(42);
        assert_eq!(n.as_u32(), 42);
        assert_eq!(format!("{}", n), "42");
    }

    #[test]
    fn test_init_search_text_is_idempotent() {
        let mut page = sample_page();
        let before = page.search_text.clone();
        page.init_search_text();
        assert_eq!(page.search_text, before);
    }
}
