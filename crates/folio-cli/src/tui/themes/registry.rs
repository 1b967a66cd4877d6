//! Theme registry for discovering and accessing themes

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::Theme;

/// Global theme registry, built once on first access
pub static THEME_REGISTRY: Lazy<ThemeRegistry> = Lazy::new(ThemeRegistry::new);

/// Registry of all available themes
pub struct ThemeRegistry {
    themes: HashMap<String, Theme>,
    ordered_names: Vec<String>,
}

impl ThemeRegistry {
    /// Create a new registry with all built-in themes
    pub fn new() -> Self {
        let mut registry = Self {
            themes: HashMap::new(),
            ordered_names: Vec::new(),
        };

        use super::definitions::*;

        registry.register(folio());
        registry.register(paper());
        registry.register(terminal());

        registry
    }

    fn register(&mut self, theme: Theme) {
        self.ordered_names.push(theme.name.clone());
        self.themes.insert(theme.name.clone(), theme);
    }

    /// Get a theme by name, or the default theme
    pub fn get_or_default(&self, name: &str) -> &Theme {
        self.themes
            .get(name)
            .unwrap_or_else(|| self.themes.get("folio").expect("Default theme must exist"))
    }

    /// List all theme names in registration order
    pub fn names(&self) -> &[String] {
        &self.ordered_names
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        let registry = ThemeRegistry::new();
        assert_eq!(registry.get_or_default("no-such-theme").name, "folio");
        assert_eq!(registry.get_or_default("paper").name, "paper");
    }
}
