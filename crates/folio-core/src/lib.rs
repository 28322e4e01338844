//! # Folio Core Library
//!
//! This crate provides the content model, filtering, and navigation
//! functionality for the Folio terminal book reader. The book collection
//! is static and read-only; everything here is a synchronous, pure
//! derivation over it.
//!
//! ## Architecture
//!
//! - **Types** (`types`): Page records, book metadata, statistics
//! - **Book** (`book`): The loaded, immutable page collection
//! - **Search** (`search`): Theme and free-text filtering
//! - **Navigator** (`navigator`): Reading position, clamped jumps, progress
//! - **Source** (`source`): Content-source trait and the JSON file loader
//! - **Config** (`config`): Configuration management
//!
//! ## Example
//!
//! ```rust,ignore
//! use folio_core::{ContentSource, JsonSource, Navigator, ThemeFilter};
//! use std::sync::Arc;
//!
//! let book = Arc::new(JsonSource::new("book.json").load()?);
//! let mut nav = Navigator::new(book);
//!
//! nav.set_search("शिकागो");
//! if let Some(page) = nav.displayed() {
//!     println!("{} — {}", page.number, page.title);
//! }
//! ```

pub mod book;
pub mod config;
pub mod error;
pub mod navigator;
pub mod search;
pub mod source;
pub mod types;

// Re-export commonly used types
pub use book::Book;
pub use config::Config;
pub use error::{FolioError, Result};
pub use navigator::Navigator;
pub use search::{parse_query, PageQuery, ThemeFilter};
pub use source::{ContentSource, JsonSource};
pub use types::{BookMetadata, BookStats, PageNumber, PageRecord};
