//! Page filtering for Folio.
//!
//! This module computes the visible subset of a book for a given theme
//! selection and search term:
//!
//! - Theme filtering restricts pages to one theme label (or all of them)
//! - Term filtering keeps pages whose searchable text contains the term,
//!   case-insensitively
//!
//! Results always keep the original page-number order; there is no ranking.
//! An empty subset is a normal outcome, not an error.

use crate::book::Book;
use crate::error::{FolioError, Result};
use crate::types::PageRecord;

/// Theme selection: either the "all themes" sentinel or one theme label.
///
/// The sentinel is a dedicated variant rather than a reserved label string,
/// so content is free to use any theme names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ThemeFilter {
    /// Show pages of every theme
    #[default]
    All,

    /// Show only pages carrying this theme label (exact match)
    Theme(String),
}

impl ThemeFilter {
    /// Check if a page passes this theme selection.
    pub fn matches(&self, page: &PageRecord) -> bool {
        match self {
            ThemeFilter::All => true,
            ThemeFilter::Theme(label) => page.theme == *label,
        }
    }

    /// The selected label, if one theme is selected.
    pub fn label(&self) -> Option<&str> {
        match self {
            ThemeFilter::All => None,
            ThemeFilter::Theme(label) => Some(label),
        }
    }
}

/// A page filter combining a theme selection with a free-text search term.
///
/// The term is trimmed and lowercased once at construction; matching is a
/// case-insensitive substring test against each page's pre-computed
/// search text.
#[derive(Debug, Clone, Default)]
pub struct PageQuery {
    /// Theme selection
    theme: ThemeFilter,

    /// Trimmed, lowercased search term (empty = match everything)
    term_lower: String,
}

impl PageQuery {
    /// Create a query from a theme selection and a raw search term.
    pub fn new(theme: ThemeFilter, term: &str) -> Self {
        PageQuery {
            theme,
            term_lower: term.trim().to_lowercase(),
        }
    }

    /// Query matching every page.
    pub fn all() -> Self {
        PageQuery::default()
    }

    /// Replace the theme selection, keeping the search term.
    pub fn with_theme(mut self, theme: ThemeFilter) -> Self {
        self.theme = theme;
        self
    }

    /// Check if a page matches this query.
    pub fn matches(&self, page: &PageRecord) -> bool {
        self.theme.matches(page) && page.contains_term(&self.term_lower)
    }

    /// Check if this query would match every page.
    pub fn matches_all(&self) -> bool {
        self.theme == ThemeFilter::All && self.term_lower.is_empty()
    }

    /// Run the query over a book, yielding matches in page order.
    pub fn filter<'a>(&self, book: &'a Book) -> Vec<&'a PageRecord> {
        book.pages().iter().filter(|p| self.matches(p)).collect()
    }
}

/// Parse a query string into a `PageQuery`.
///
/// # Query Syntax
///
/// - `term words` - Search for pages containing "term words" (case-insensitive)
/// - `theme:सेवा` - Restrict to one theme label
/// - `theme:सेवा शिकागो` - Theme restriction plus a search term
///
/// A `theme:` token with an empty label is rejected; everything that is not
/// a `theme:` token joins the search term.
pub fn parse_query(input: &str) -> Result<PageQuery> {
    let input = input.trim();

    let mut theme = ThemeFilter::All;
    let mut term_parts = Vec::new();

    for part in input.split_whitespace() {
        if let Some(label) = part.strip_prefix("theme:") {
            if label.is_empty() {
                return Err(FolioError::InvalidQuery {
                    query: input.to_string(),
                    reason: "theme: requires a label".to_string(),
                });
            }
            theme = ThemeFilter::Theme(label.to_string());
        } else {
            term_parts.push(part);
        }
    }

    Ok(PageQuery::new(theme, &term_parts.join(" ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::test_support::{make_book, make_page};

    #[test]
    fn test_theme_filter() {
        let page = make_page(1, "सेवा", "one");

        assert!(ThemeFilter::All.matches(&page));
        assert!(ThemeFilter::Theme("सेवा".to_string()).matches(&page));
        assert!(!ThemeFilter::Theme("बालपण".to_string()).matches(&page));
    }

    #[test]
    fn test_term_match_is_case_insensitive() {
        let mut page = make_page(1, "अ", "The Journey Begins");
        page.init_search_text();

        let query = PageQuery::new(ThemeFilter::All, "JOURNEY");
        assert!(query.matches(&page));

        let query = PageQuery::new(ThemeFilter::All, "missing");
        assert!(!query.matches(&page));
    }

    #[test]
    fn test_term_is_trimmed() {
        let mut page = make_page(1, "अ", "one");
        page.init_search_text();

        // Whitespace-only terms match everything
        let query = PageQuery::new(ThemeFilter::All, "   ");
        assert!(query.matches_all());
        assert!(query.matches(&page));

        let query = PageQuery::new(ThemeFilter::All, "  one  ");
        assert!(query.matches(&page));
    }

    #[test]
    fn test_filter_keeps_page_order() {
        let book = make_book(&[
            (1, "सेवा", "alpha"),
            (2, "बालपण", "beta"),
            (3, "सेवा", "gamma"),
        ]);

        let query = PageQuery::new(ThemeFilter::Theme("सेवा".to_string()), "");
        let pages = query.filter(&book);

        let numbers: Vec<u32> = pages.iter().map(|p| p.number.as_u32()).collect();
        assert_eq!(numbers, vec![1, 3]);
    }

    #[test]
    fn test_filter_combines_theme_and_term() {
        let book = make_book(&[
            (1, "सेवा", "chicago visit"),
            (2, "सेवा", "village work"),
            (3, "प्रवास", "chicago again"),
        ]);

        let query = PageQuery::new(ThemeFilter::Theme("सेवा".to_string()), "chicago");
        let pages = query.filter(&book);

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].number.as_u32(), 1);
    }

    #[test]
    fn test_empty_result_is_normal() {
        let book = make_book(&[(1, "अ", "one")]);

        let query = PageQuery::new(ThemeFilter::Theme("सेवा".to_string()), "");
        assert!(query.filter(&book).is_empty());
    }

    #[test]
    fn test_parse_query_plain_term() {
        let query = parse_query("chicago visit").unwrap();
        assert_eq!(query.theme, ThemeFilter::All);

        let mut page = make_page(1, "अ", "the chicago visit");
        page.init_search_text();
        assert!(query.matches(&page));
    }

    #[test]
    fn test_parse_query_theme_token() {
        let query = parse_query("theme:सेवा शिकागो").unwrap();
        assert_eq!(query.theme, ThemeFilter::Theme("सेवा".to_string()));

        let mut page = make_page(1, "सेवा", "शिकागो भेट");
        page.init_search_text();
        assert!(query.matches(&page));

        let mut other = make_page(1, "प्रवास", "शिकागो भेट");
        other.init_search_text();
        assert!(!query.matches(&other));
    }

    #[test]
    fn test_parse_query_empty_theme_label() {
        assert!(matches!(
            parse_query("theme: word"),
            Err(FolioError::InvalidQuery { .. })
        ));
    }

    #[test]
    fn test_parse_query_empty_input() {
        let query = parse_query("  ").unwrap();
        assert!(query.matches_all());
    }
}
