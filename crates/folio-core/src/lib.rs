//! Folio Core - Shared library for the Folio terminal book reader
//!
//! This crate provides the non-UI functionality for the Folio TUI:
//! - Reading-position cache (read-only access)
//! - Text style configuration
//! - Well-known paths under the user's home directory

pub mod cache;
pub mod config;
pub mod constants;
pub mod error;
pub mod paths;

// Re-exports for convenience
pub use cache::{ReadingCache, ScrollFraction};
pub use config::TextStyle;
pub use error::CacheError;
