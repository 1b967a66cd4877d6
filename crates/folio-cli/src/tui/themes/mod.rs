//! Color themes for the reader

mod definitions;
mod registry;

pub use registry::{ThemeRegistry, THEME_REGISTRY};

use ratatui::style::{Color, Modifier, Style};

/// A named set of colors for the reader UI.
///
/// The original desktop reader configured a font family and two point sizes;
/// in a cell grid those become color and emphasis choices carried here.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    /// Body text color
    pub text_color: Color,
    /// Heading (h1) color
    pub heading_color: Color,
    /// De-emphasized UI text (status line)
    pub dim_color: Color,
    /// Scrollbar thumb
    pub scrollbar_thumb_color: Color,
    /// Scrollbar track
    pub scrollbar_track_color: Color,
    /// Background, if the theme overrides the terminal's own
    pub background_color: Option<Color>,
}

impl Theme {
    /// Style for body text
    pub fn body_style(&self) -> Style {
        Style::default().fg(self.text_color)
    }

    /// Style for heading text (bold stands in for the larger heading font)
    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.heading_color)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the status line
    pub fn dim_style(&self) -> Style {
        Style::default().fg(self.dim_color)
    }
}
