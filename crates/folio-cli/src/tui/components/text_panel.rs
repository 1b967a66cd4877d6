//! Scrollable text panel
//!
//! Owns one styled text area and one scrollbar, joined through a shared
//! `ScrollView`. All text operations forward to the text area; the panel adds
//! reading-position restore from the cache file and the error display
//! convenience.

use std::path::PathBuf;

use ratatui::layout::Rect;
use ratatui::text::Text;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use folio_core::{CacheError, ReadingCache, TextStyle};

use crate::tui::components::scrollbars::render_scrollbar;
use crate::tui::components::text_area::{Pos, StyledTextArea, Tag};
use crate::tui::state::ScrollView;
use crate::tui::themes::Theme;

/// Text display with an attached scrollbar and cache-backed position restore
pub struct ScrollableTextPanel {
    text: StyledTextArea,
    view: ScrollView,
    style: TextStyle,
    cache_path: PathBuf,
}

impl ScrollableTextPanel {
    /// Build the panel with a fresh text area and scrollbar
    pub fn new(style: TextStyle, cache_path: PathBuf) -> Self {
        Self {
            text: StyledTextArea::new(style.clone()),
            view: ScrollView::new(),
            style,
            cache_path,
        }
    }

    pub fn text(&self) -> &StyledTextArea {
        &self.text
    }

    pub fn view(&self) -> &ScrollView {
        &self.view
    }

    /// Move the view to the position last used for this book.
    ///
    /// Present key: set the thumb and move the view to the stored top
    /// fraction. Absent key: no-op. Unreadable or malformed cache: error for
    /// the caller to surface.
    pub fn restore_scroll_position(&mut self, book_path: &str) -> Result<(), CacheError> {
        let cache = ReadingCache::load(&self.cache_path)?;
        if let Some(pos) = cache.position(book_path) {
            tracing::debug!(book = book_path, top = pos.top, "restoring scroll position");
            self.view.set_fraction(pos.top, pos.bottom);
        }
        Ok(())
    }

    /// Discard the text area and scrollbar and start fresh.
    ///
    /// Prior content and scroll position are gone; used when switching the
    /// displayed book wholesale.
    pub fn reset(&mut self) {
        self.text = StyledTextArea::new(self.style.clone());
        self.view = ScrollView::new();
    }

    pub fn clear_text(&mut self) {
        self.text.clear();
    }

    pub fn insert_text(&mut self, text: &str, tag: Option<Tag>, pos: Pos) {
        self.text.write(text, tag, pos);
    }

    pub fn append_text(
        &mut self,
        text: &str,
        tag: Option<Tag>,
        add_space: bool,
        add_newline: bool,
    ) {
        self.text.append(text, tag, add_space, add_newline);
    }

    pub fn toggle_center(&mut self) {
        self.text.toggle_center();
    }

    pub fn refresh(&mut self) {
        self.text.refresh();
    }

    pub fn refresh_at(&mut self, row: u16, col: u16) {
        self.text.refresh_at(row, col);
    }

    /// Replace everything on screen with one heading-styled error line.
    ///
    /// The displayed text is exactly `"{kind}: {message}"`; callers rely on
    /// that shape verbatim.
    pub fn show_error(&mut self, kind: &str, message: &str) {
        self.clear_text();
        self.append_text(&format!("{kind}: {message}"), Some(Tag::H1), false, false);
        self.refresh();
    }

    /// Scroll by whole lines (negative = up)
    pub fn scroll_lines(&mut self, delta: isize) {
        self.view.scroll_lines(delta);
    }

    pub fn scroll_to_start(&mut self) {
        self.view.scroll_to_start();
    }

    pub fn scroll_to_end(&mut self) {
        self.view.scroll_to_end();
    }

    /// Lay out and draw the text area plus its scrollbar column
    pub fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let (slot_row, slot_col) = self.text.layout_slot();
        let area = Rect {
            x: area.x.saturating_add(slot_col),
            y: area.y.saturating_add(slot_row),
            width: area.width.saturating_sub(slot_col),
            height: area.height.saturating_sub(slot_row),
        };
        if area.width < 2 || area.height == 0 {
            return;
        }

        // rightmost column is the scrollbar; the rest is text with padding
        let bar_area = Rect {
            x: area.x + area.width - 1,
            width: 1,
            ..area
        };
        let pad = self.style.padding.min((area.width - 1) / 2);
        let text_area = Rect {
            x: area.x + pad,
            width: area.width - 1 - pad * 2,
            ..area
        };

        let lines = self.text.display_lines(text_area.width as usize, theme);
        self.view.sync_layout(lines.len(), text_area.height as usize);

        let scroll = u16::try_from(self.view.offset()).unwrap_or(u16::MAX);
        let paragraph = Paragraph::new(Text::from(lines)).scroll((scroll, 0));
        f.render_widget(paragraph, text_area);

        render_scrollbar(
            f.buffer_mut(),
            bar_area,
            self.view.fraction(),
            theme.scrollbar_thumb_color,
            theme.scrollbar_track_color,
        );
    }
}
