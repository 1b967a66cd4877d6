//! Well-known paths under the user's home directory

use std::path::PathBuf;

use crate::constants::fs as fs_names;

/// Folio config directory (`~/.folio`)
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(fs_names::CONFIG_DIR_NAME)
}

/// Default reading-position cache file (`~/.folio/cache.json`)
pub fn default_cache_file() -> PathBuf {
    config_dir().join(fs_names::CACHE_FILE_NAME)
}

/// Default books directory (`~/.folio/books`)
pub fn default_books_dir() -> PathBuf {
    config_dir().join(fs_names::BOOKS_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_file_lives_in_config_dir() {
        let cache = default_cache_file();
        assert!(cache.starts_with(config_dir()));
        assert_eq!(cache.file_name().unwrap(), "cache.json");
    }
}
