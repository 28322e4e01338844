//! Reading-position state and navigation over a filtered book.
//!
//! The `Navigator` holds the three pieces of browsing state (current page
//! number, selected theme, search term) and keeps the filtered subset of
//! the book derived from them. Every state change recomputes the subset
//! synchronously; all derived values (displayed page, progress, visible
//! pages) read from that cache.
//!
//! ## Invariants
//!
//! - The current page number is always within [1, total pages]
//! - When the filtered subset is non-empty, the displayed page is a member
//!   of it; when it is empty, no page is displayed and progress is 0
//! - Filtering never reorders pages

use crate::book::Book;
use crate::search::{PageQuery, ThemeFilter};
use crate::types::{PageNumber, PageRecord};
use std::sync::Arc;
use tracing::debug;

/// Navigation state over a book: current page, theme filter, search term,
/// and the filtered subset they imply.
///
/// ## Example
///
/// ```rust,ignore
/// use folio_core::{Navigator, ThemeFilter};
///
/// let mut nav = Navigator::new(book);
/// nav.set_theme(ThemeFilter::Theme("सेवा".to_string()));
/// nav.next();
/// if let Some(page) = nav.displayed() {
///     println!("page {} ({:.0}%)", page.number, nav.progress());
/// }
/// ```
pub struct Navigator {
    /// The book being browsed
    book: Arc<Book>,

    /// Current page number, clamped to [1, total pages]
    page: PageNumber,

    /// Selected theme
    theme: ThemeFilter,

    /// Raw search term as entered
    term: String,

    /// Page numbers of the current filtered subset, in page order
    visible: Vec<PageNumber>,
}

impl Navigator {
    /// Create a navigator positioned at page 1 with no filters.
    pub fn new(book: Arc<Book>) -> Self {
        let mut nav = Navigator {
            book,
            page: PageNumber::FIRST,
            theme: ThemeFilter::All,
            term: String::new(),
            visible: Vec::new(),
        };
        nav.refilter();
        nav
    }

    /// The book being browsed.
    pub fn book(&self) -> &Book {
        &self.book
    }

    /// Current page number (may be unshown when the subset is empty).
    pub fn page(&self) -> PageNumber {
        self.page
    }

    /// Selected theme.
    pub fn theme(&self) -> &ThemeFilter {
        &self.theme
    }

    /// Current search term as entered.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Recompute the filtered subset from the current theme and term.
    fn refilter(&mut self) {
        let query = PageQuery::new(self.theme.clone(), &self.term);
        self.visible = self
            .book
            .pages()
            .iter()
            .filter(|p| query.matches(p))
            .map(|p| p.number)
            .collect();

        debug!(
            visible = self.visible.len(),
            total = self.book.total_pages(),
            "Filter recomputed"
        );
    }

    /// After a filter change, snap to the first page of the new subset.
    /// An empty subset leaves the stored page number untouched.
    fn snap_to_first_visible(&mut self) {
        if let Some(first) = self.visible.first() {
            self.page = *first;
        }
    }

    /// Replace the theme selection.
    pub fn set_theme(&mut self, theme: ThemeFilter) {
        self.theme = theme;
        self.refilter();
        self.snap_to_first_visible();
    }

    /// Replace the search term.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.term = term.into();
        self.refilter();
        self.snap_to_first_visible();
    }

    /// Clamp an arbitrary page request to [1, total pages].
    fn clamp(&self, requested: i64) -> PageNumber {
        let total = self.book.total_pages().max(1) as i64;
        PageNumber::new(requested.clamp(1, total) as u32)
    }

    /// Jump to a page by number.
    ///
    /// The request is clamped to [1, total pages]. If the clamped page is
    /// in the filtered subset it becomes current; otherwise the subset's
    /// first page does. With an empty subset the clamped number is stored
    /// but nothing is displayed.
    pub fn jump_to(&mut self, requested: i64) {
        let clamped = self.clamp(requested);

        if self.visible.is_empty() {
            self.page = clamped;
            return;
        }

        if self.visible.contains(&clamped) {
            self.page = clamped;
        } else {
            self.page = self.visible[0];
        }
    }

    /// Advance one page past the displayed page.
    pub fn next(&mut self) {
        let base = self.displayed_number().unwrap_or(self.page);
        self.jump_to(base.as_u32() as i64 + 1);
    }

    /// Step one page back from the displayed page.
    pub fn previous(&mut self) {
        let base = self.displayed_number().unwrap_or(self.page);
        self.jump_to(base.as_u32() as i64 - 1);
    }

    /// Clear all filters and return to page 1.
    pub fn reset(&mut self) {
        self.theme = ThemeFilter::All;
        self.term.clear();
        self.page = PageNumber::FIRST;
        self.refilter();
    }

    /// The page currently shown: the subset member with the current page
    /// number, else the subset's first member, else none.
    pub fn displayed(&self) -> Option<&PageRecord> {
        self.displayed_number().and_then(|n| self.book.get(n))
    }

    fn displayed_number(&self) -> Option<PageNumber> {
        if self.visible.contains(&self.page) {
            Some(self.page)
        } else {
            self.visible.first().copied()
        }
    }

    /// Reading progress through the whole book, in percent.
    ///
    /// Progress is relative to the full collection, not the filtered
    /// subset; no displayed page means 0.
    pub fn progress(&self) -> f64 {
        match (self.displayed_number(), self.book.total_pages()) {
            (Some(n), total) if total > 0 => f64::from(n.as_u32()) / f64::from(total) * 100.0,
            _ => 0.0,
        }
    }

    /// The filtered subset, in page order.
    pub fn visible_pages(&self) -> impl Iterator<Item = &PageRecord> {
        self.visible.iter().filter_map(|n| self.book.get(*n))
    }

    /// Number of pages in the filtered subset.
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// True when the current filters match nothing.
    pub fn is_view_empty(&self) -> bool {
        self.visible.is_empty()
    }
}
