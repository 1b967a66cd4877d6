//! Text style configuration
//!
//! Construction-time display settings for the text area. Passed explicitly
//! at widget construction; there is no ambient global configuration.

use crate::constants::text;

/// Display settings consumed by the styled text area at construction
#[derive(Debug, Clone)]
pub struct TextStyle {
    /// Horizontal inset, in cells, applied to both edges of the text area
    pub padding: u16,
    /// Wrap at word boundaries (long words still break at the margin)
    pub word_wrap: bool,
    /// Blank lines inserted above a heading line when rendering
    pub heading_gap: u16,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            padding: text::PADDING,
            word_wrap: true,
            heading_gap: text::HEADING_GAP,
        }
    }
}
