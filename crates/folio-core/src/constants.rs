//! Application constants and configuration defaults
//!
//! Centralized location for magic numbers and default values

/// Filesystem layout
pub mod fs {
    /// Config directory name under the user's home
    pub const CONFIG_DIR_NAME: &str = ".folio";

    /// Cache file name inside the config directory
    pub const CACHE_FILE_NAME: &str = "cache.json";

    /// Books subdirectory name
    pub const BOOKS_DIR_NAME: &str = "books";
}

/// Text area defaults
pub mod text {
    /// Horizontal inset in cells (the original reader padded 20px per side)
    pub const PADDING: u16 = 2;

    /// Blank lines above a heading
    pub const HEADING_GAP: u16 = 1;
}

/// Reader shell defaults
pub mod reader {
    /// Lines moved per arrow-key press
    pub const SCROLL_STEP: usize = 1;

    /// Lines of overlap kept when paging
    pub const PAGE_OVERLAP: usize = 2;
}
