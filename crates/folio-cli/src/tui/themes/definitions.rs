//! Built-in theme definitions

use ratatui::style::Color;

use super::Theme;

/// Default dark theme
pub fn folio() -> Theme {
    Theme {
        name: "folio".to_string(),
        text_color: Color::Rgb(220, 215, 201),
        heading_color: Color::Rgb(250, 189, 47),
        dim_color: Color::Rgb(124, 111, 100),
        scrollbar_thumb_color: Color::Rgb(250, 189, 47),
        scrollbar_track_color: Color::Rgb(60, 56, 54),
        background_color: Some(Color::Rgb(29, 32, 33)),
    }
}

/// Light theme for reading in daylight
pub fn paper() -> Theme {
    Theme {
        name: "paper".to_string(),
        text_color: Color::Rgb(60, 56, 54),
        heading_color: Color::Rgb(175, 58, 3),
        dim_color: Color::Rgb(146, 131, 116),
        scrollbar_thumb_color: Color::Rgb(175, 58, 3),
        scrollbar_track_color: Color::Rgb(213, 196, 161),
        background_color: Some(Color::Rgb(251, 241, 199)),
    }
}

/// Uses the terminal's native colors
pub fn terminal() -> Theme {
    Theme {
        name: "terminal".to_string(),
        text_color: Color::Reset,
        heading_color: Color::Yellow,
        dim_color: Color::DarkGray,
        scrollbar_thumb_color: Color::White,
        scrollbar_track_color: Color::DarkGray,
        background_color: None,
    }
}
