//! Error types for Folio core operations.
//!
//! This module defines well-structured error types using `thiserror` for
//! library-level errors, while higher-level code can use `anyhow` for
//! convenient error handling.
//!
//! Note that an empty filter result is *not* an error anywhere in Folio:
//! it is a normal state surfaced to the rendering layer. Out-of-range page
//! numbers are clamped, never rejected.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using FolioError
pub type Result<T> = std::result::Result<T, FolioError>;

/// Core error types for Folio operations.
#[derive(Error, Debug)]
pub enum FolioError {
    // === Content Errors ===
    /// The book file is missing or could not be found
    #[error("book not found at {}", .path.display())]
    BookNotFound { path: PathBuf },

    /// The book file exists but its content is invalid
    #[error("book is invalid: {reason}")]
    BookInvalid { reason: String },

    // === Search Errors ===
    /// Invalid search query (e.g., malformed filter token)
    #[error("invalid search query: {query}: {reason}")]
    InvalidQuery { query: String, reason: String },

    // === Configuration Errors ===
    /// Configuration file parsing failed
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    // === I/O Errors ===
    /// Generic I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// Serialization/deserialization failed
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl FolioError {
    /// Create an invalid-book error
    pub fn invalid_book(reason: impl Into<String>) -> Self {
        FolioError::BookInvalid {
            reason: reason.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(reason: impl Into<String>) -> Self {
        FolioError::Serialization(reason.into())
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        FolioError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FolioError::BookNotFound {
            path: PathBuf::from("/missing/book.json"),
        };
        assert_eq!(err.to_string(), "book not found at /missing/book.json");

        let err = FolioError::invalid_book("page 3 is numbered 7");
        assert_eq!(err.to_string(), "book is invalid: page 3 is numbered 7");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: FolioError = json_err.into();
        assert!(matches!(err, FolioError::Serialization(_)));
    }
}
