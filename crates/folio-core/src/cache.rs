//! Reading-position cache
//!
//! Reads the cache file written by the reader shell on exit. The shape is
//! `{"books": {<book_path>: {"scrollbar": [top, bottom]}}}`. This module only
//! reads the file; writing and pruning are owned by the caller side.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CacheError;

/// Vertical position within a book, as fractions of total content height.
///
/// `top` and `bottom` bound the visible window; both are in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollFraction {
    pub top: f64,
    pub bottom: f64,
}

impl ScrollFraction {
    /// Full-document view (nothing scrolled, everything visible)
    pub fn full() -> Self {
        Self { top: 0.0, bottom: 1.0 }
    }
}

impl Default for ScrollFraction {
    fn default() -> Self {
        Self::full()
    }
}

/// Per-book cache record
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BookRecord {
    /// Last scrollbar position as `[top, bottom]` fractions
    scrollbar: [f64; 2],
}

/// The reading-position cache, keyed by book path
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReadingCache {
    books: HashMap<String, BookRecord>,
}

impl ReadingCache {
    /// Load the cache from disk.
    ///
    /// A missing or unreadable file and malformed JSON are both hard errors;
    /// callers decide how to surface them. An absent book key is not.
    pub fn load(path: &Path) -> Result<Self, CacheError> {
        let contents = fs::read_to_string(path)?;
        let cache: ReadingCache = serde_json::from_str(&contents)?;
        tracing::debug!(books = cache.books.len(), "loaded reading cache");
        Ok(cache)
    }

    /// Look up the stored scroll position for a book.
    ///
    /// Present key -> position; absent key -> `None`, by design not an error.
    pub fn position(&self, book_path: &str) -> Option<ScrollFraction> {
        self.books.get(book_path).map(|record| ScrollFraction {
            top: record.scrollbar[0],
            bottom: record.scrollbar[1],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn cache_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write");
        file
    }

    #[test]
    fn test_load_and_lookup() {
        let file = cache_file(
            r#"{"books": {"books/moby_dick.txt": {"scrollbar": [0.25, 0.5]}}}"#,
        );
        let cache = ReadingCache::load(file.path()).expect("load");

        let pos = cache.position("books/moby_dick.txt").expect("present");
        assert_eq!(pos.top, 0.25);
        assert_eq!(pos.bottom, 0.5);
    }

    #[test]
    fn test_missing_key_is_none_not_error() {
        let file = cache_file(r#"{"books": {}}"#);
        let cache = ReadingCache::load(file.path()).expect("load");
        assert!(cache.position("books/missing.txt").is_none());
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let err = ReadingCache::load(Path::new("/nonexistent/cache.json"))
            .expect_err("should fail");
        assert!(matches!(err, CacheError::Unavailable(_)));
    }

    #[test]
    fn test_malformed_json_is_malformed() {
        let file = cache_file("{not json");
        let err = ReadingCache::load(file.path()).expect_err("should fail");
        assert!(matches!(err, CacheError::Malformed(_)));
    }
}
