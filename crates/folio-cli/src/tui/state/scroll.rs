//! Scroll state shared between the text view and the scrollbar
//!
//! One `ScrollView` is written through from both sides: scroll keys move the
//! line offset and the thumb fractions follow; a restored thumb position sets
//! the fractions and the line offset follows at the next layout. Neither side
//! talks to the other directly.

use folio_core::ScrollFraction;

/// Viewport into the text content
#[derive(Debug, Clone)]
pub struct ScrollView {
    /// First visible display line
    offset: usize,
    /// Total display lines at the current width
    total: usize,
    /// Lines that fit on screen
    visible: usize,
    /// Thumb position mirrored for the scrollbar
    fraction: ScrollFraction,
}

impl ScrollView {
    pub fn new() -> Self {
        Self {
            offset: 0,
            total: 0,
            visible: 0,
            fraction: ScrollFraction::full(),
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn fraction(&self) -> ScrollFraction {
        self.fraction
    }

    /// Scrollbar side: jump the view to the given fractions.
    ///
    /// Usable before the first layout; the line offset is derived once the
    /// layout is known.
    pub fn set_fraction(&mut self, top: f64, bottom: f64) {
        self.fraction = ScrollFraction {
            top: top.clamp(0.0, 1.0),
            bottom: bottom.clamp(0.0, 1.0),
        };
        self.offset = self.line_for_top();
    }

    /// Text side: the content was laid out at `total` lines with `visible`
    /// lines on screen. Re-derives the offset from the current fractions and
    /// mirrors the thumb back.
    pub fn sync_layout(&mut self, total: usize, visible: usize) {
        self.total = total;
        self.visible = visible;
        self.offset = self.line_for_top().min(self.max_offset());
        self.mirror_thumb();
    }

    /// Text side: move by whole lines (negative = up)
    pub fn scroll_lines(&mut self, delta: isize) {
        let max = self.max_offset();
        self.offset = self.offset.saturating_add_signed(delta).min(max);
        self.mirror_thumb();
    }

    /// Text side: jump to the top
    pub fn scroll_to_start(&mut self) {
        self.offset = 0;
        self.mirror_thumb();
    }

    /// Text side: jump to the bottom
    pub fn scroll_to_end(&mut self) {
        self.offset = self.max_offset();
        self.mirror_thumb();
    }

    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.visible)
    }

    fn line_for_top(&self) -> usize {
        (self.fraction.top * self.total as f64).round() as usize
    }

    fn mirror_thumb(&mut self) {
        if self.total == 0 {
            self.fraction = ScrollFraction::full();
            return;
        }
        self.fraction = ScrollFraction {
            top: self.offset as f64 / self.total as f64,
            bottom: ((self.offset + self.visible) as f64 / self.total as f64).min(1.0),
        };
    }
}

impl Default for ScrollView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_survives_until_layout() {
        let mut view = ScrollView::new();
        view.set_fraction(0.25, 0.5);
        assert_eq!(view.fraction().top, 0.25);

        view.sync_layout(100, 20);
        assert_eq!(view.offset(), 25);
        assert_eq!(view.fraction().top, 0.25);
        assert_eq!(view.fraction().bottom, 0.45);
    }

    #[test]
    fn test_line_scroll_moves_thumb() {
        let mut view = ScrollView::new();
        view.sync_layout(100, 20);

        view.scroll_lines(10);
        assert_eq!(view.offset(), 10);
        assert_eq!(view.fraction().top, 0.1);

        view.scroll_lines(-30);
        assert_eq!(view.offset(), 0);
    }

    #[test]
    fn test_scroll_clamps_to_content() {
        let mut view = ScrollView::new();
        view.sync_layout(30, 20);

        view.scroll_lines(500);
        assert_eq!(view.offset(), 10);

        view.scroll_to_end();
        assert_eq!(view.offset(), 10);
        view.scroll_to_start();
        assert_eq!(view.offset(), 0);
    }

    #[test]
    fn test_short_content_shows_full_view() {
        let mut view = ScrollView::new();
        view.sync_layout(5, 20);
        assert_eq!(view.offset(), 0);
        assert_eq!(view.fraction(), ScrollFraction::full());
    }
}
