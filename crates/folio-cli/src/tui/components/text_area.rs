//! Styled text display surface
//!
//! Holds the displayed characters plus a set of style tags over absolute
//! character ranges, and renders them to Ratatui lines. User edits are
//! locked out; the lock drops only for the duration of a programmatic write.

use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use folio_core::TextStyle;

use crate::tui::themes::Theme;

/// The static tag set, configured once at construction. No dynamic tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Bold,
    Italic,
    /// Heading: heading color + bold, centered by default
    H1,
    /// Alignment only
    Center,
    /// Alignment only
    Left,
}

/// A tag applied over an absolute character range.
///
/// Ranges are valid at the moment of insertion and are never re-indexed by
/// later edits elsewhere in the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagRange {
    pub start: usize,
    pub end: usize,
    pub tag: Tag,
}

/// An insertion address. Lines are 1-based, columns 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pos {
    Start,
    End,
    LineCol { line: usize, col: usize },
}

/// Read-mostly text area with styled tag ranges
pub struct StyledTextArea {
    content: String,
    tags: Vec<TagRange>,
    /// true = read-only; dropped only inside a single mutation
    edit_lock: bool,
    /// One flag for the whole content, not per paragraph
    centered: bool,
    /// Insertion cursor as a character index
    cursor: usize,
    style: TextStyle,
    /// Grid slot recorded by the last refresh
    layout_slot: (u16, u16),
}

impl StyledTextArea {
    pub fn new(style: TextStyle) -> Self {
        Self {
            content: String::new(),
            tags: Vec::new(),
            edit_lock: true,
            centered: false,
            cursor: 0,
            style,
            layout_slot: (0, 0),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn tags(&self) -> &[TagRange] {
        &self.tags
    }

    pub fn is_locked(&self) -> bool {
        self.edit_lock
    }

    pub fn is_centered(&self) -> bool {
        self.centered
    }

    pub fn layout_slot(&self) -> (u16, u16) {
        self.layout_slot
    }

    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Insert `text` at `pos`, optionally tagging the inserted span.
    ///
    /// With a tag, insertion happens at the current insertion cursor and the
    /// tag covers exactly the inserted characters. An address that does not
    /// resolve is a silent no-op; the lock is restored either way.
    pub fn write(&mut self, text: &str, tag: Option<Tag>, pos: Pos) {
        self.edit_lock = false;
        if let Some(tag) = tag {
            let start = self.cursor;
            self.insert_at(start, text);
            let end = self.cursor;
            self.tags.push(TagRange { start, end, tag });
        } else if let Some(idx) = self.resolve(pos) {
            self.insert_at(idx, text);
        }
        self.edit_lock = true;
    }

    /// Append `text` at content end with an optional separator prefix.
    ///
    /// Both flags produce `"\n "`, space alone `" "`, newline alone `"\n"`.
    /// A supplied tag covers the prefix and the text. Always refreshes.
    pub fn append(&mut self, text: &str, tag: Option<Tag>, add_space: bool, add_newline: bool) {
        let prefix = match (add_space, add_newline) {
            (true, true) => "\n ",
            (true, false) => " ",
            (false, true) => "\n",
            (false, false) => "",
        };
        // tagged writes go through the cursor; park it at the end first
        self.cursor = self.char_len();
        let combined = format!("{prefix}{text}");
        self.write(&combined, tag, Pos::End);
        self.refresh();
    }

    /// Delete all content and tags, then re-lock
    pub fn clear(&mut self) {
        self.edit_lock = false;
        self.content.clear();
        self.tags.clear();
        self.cursor = 0;
        self.refresh();
    }

    /// Toggle whole-content centering.
    ///
    /// Untoggling removes only `center` tags; a `left` tag that was present
    /// beforehand is not restored (matches the long-standing reader behavior).
    pub fn toggle_center(&mut self) {
        if !self.centered {
            self.tags.push(TagRange {
                start: 0,
                end: self.char_len(),
                tag: Tag::Center,
            });
        } else {
            self.tags.retain(|t| t.tag != Tag::Center);
        }
        self.centered = !self.centered;
    }

    /// Record the widget's grid slot and re-lock. Idempotent.
    pub fn refresh(&mut self) {
        self.refresh_at(0, 0);
    }

    pub fn refresh_at(&mut self, row: u16, col: u16) {
        self.layout_slot = (row, col);
        self.edit_lock = true;
    }

    fn resolve(&self, pos: Pos) -> Option<usize> {
        match pos {
            Pos::Start => Some(0),
            Pos::End => Some(self.char_len()),
            Pos::LineCol { line, col } => {
                if line == 0 {
                    return None;
                }
                let mut offset = 0usize;
                for (i, raw) in self.content.split('\n').enumerate() {
                    let len = raw.chars().count();
                    if i + 1 == line {
                        return (col <= len).then_some(offset + col);
                    }
                    offset += len + 1;
                }
                None
            }
        }
    }

    fn insert_at(&mut self, char_idx: usize, text: &str) {
        let byte_idx = match byte_index(&self.content, char_idx) {
            Some(b) => b,
            None => return,
        };
        self.content.insert_str(byte_idx, text);
        self.cursor = char_idx + text.chars().count();
    }

    /// Render the content to display lines wrapped at `width`.
    ///
    /// Wrapped segments of a logical line share its alignment. Headings get
    /// `heading_gap` blank lines above them.
    pub fn display_lines(&self, width: usize, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        let mut offset = 0usize;
        for raw in self.content.split('\n') {
            let len = raw.chars().count();
            let alignment = self.line_alignment(offset);
            if !lines.is_empty() && self.covered(offset, Tag::H1) {
                for _ in 0..self.style.heading_gap {
                    lines.push(Line::from(""));
                }
            }
            let spans = self.line_spans(raw, offset, theme);
            for wrapped in wrap_spans(spans, width, self.style.word_wrap) {
                lines.push(wrapped.alignment(alignment));
            }
            offset += len + 1;
        }
        lines
    }

    fn covered(&self, idx: usize, tag: Tag) -> bool {
        self.tags
            .iter()
            .any(|t| t.tag == tag && t.start <= idx && idx < t.end)
    }

    // Alignment precedence follows the tag configuration order: `left`
    // outranks `center`, which outranks the heading default.
    fn line_alignment(&self, first_char: usize) -> Alignment {
        if self.covered(first_char, Tag::Left) {
            Alignment::Left
        } else if self.covered(first_char, Tag::Center) || self.covered(first_char, Tag::H1) {
            Alignment::Center
        } else {
            Alignment::Left
        }
    }

    fn char_style(&self, idx: usize, theme: &Theme) -> Style {
        let mut style = theme.body_style();
        for t in &self.tags {
            if t.start <= idx && idx < t.end {
                match t.tag {
                    Tag::Bold => style = style.add_modifier(Modifier::BOLD),
                    Tag::Italic => style = style.add_modifier(Modifier::ITALIC),
                    Tag::H1 => style = style.patch(theme.heading_style()),
                    Tag::Center | Tag::Left => {}
                }
            }
        }
        style
    }

    fn line_spans(&self, raw: &str, offset: usize, theme: &Theme) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        let mut run = String::new();
        let mut run_style: Option<Style> = None;
        for (i, ch) in raw.chars().enumerate() {
            let style = self.char_style(offset + i, theme);
            match run_style {
                Some(current) if current == style => run.push(ch),
                Some(current) => {
                    spans.push(Span::styled(std::mem::take(&mut run), current));
                    run.push(ch);
                    run_style = Some(style);
                }
                None => {
                    run.push(ch);
                    run_style = Some(style);
                }
            }
        }
        if let Some(style) = run_style {
            spans.push(Span::styled(run, style));
        }
        spans
    }
}

fn byte_index(s: &str, char_idx: usize) -> Option<usize> {
    if char_idx == 0 {
        return Some(0);
    }
    s.char_indices()
        .map(|(b, _)| b)
        .chain(std::iter::once(s.len()))
        .nth(char_idx)
}

/// Greedy word wrap over styled spans.
///
/// Words wider than the line hard-break at the margin. Whitespace that would
/// start a wrapped line is dropped. With `word_wrap` off, lines break at the
/// margin regardless of word boundaries.
fn wrap_spans(spans: Vec<Span<'static>>, width: usize, word_wrap: bool) -> Vec<Line<'static>> {
    if width == 0 {
        return vec![Line::from(spans)];
    }

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut current_width = 0usize;

    let mut flush = |current: &mut Vec<Span<'static>>, current_width: &mut usize| {
        // wrapped line breaks swallow the whitespace they land on
        while let Some(last) = current.last_mut() {
            let trimmed = last.content.trim_end().len();
            if trimmed == 0 {
                current.pop();
            } else {
                if trimmed < last.content.len() {
                    last.content.to_mut().truncate(trimmed);
                }
                break;
            }
        }
        lines.push(Line::from(std::mem::take(current)));
        *current_width = 0;
    };

    let push_chunk = |text: &str, style: Style, current: &mut Vec<Span<'static>>| {
        match current.last_mut() {
            Some(last) if last.style == style => {
                last.content.to_mut().push_str(text);
            }
            _ => current.push(Span::styled(text.to_string(), style)),
        }
    };

    for span in spans {
        let style = span.style;
        for chunk in split_chunks(&span.content, word_wrap) {
            let chunk_width = chunk.width();
            let is_space = chunk.chars().all(char::is_whitespace);

            if current_width + chunk_width > width && current_width > 0 {
                flush(&mut current, &mut current_width);
                if is_space {
                    continue;
                }
            }

            if chunk_width > width {
                // hard-break an over-long word character by character
                for ch in chunk.chars() {
                    let ch_width = ch.to_string().width();
                    if current_width + ch_width > width && current_width > 0 {
                        flush(&mut current, &mut current_width);
                    }
                    push_chunk(&ch.to_string(), style, &mut current);
                    current_width += ch_width;
                }
            } else {
                push_chunk(chunk, style, &mut current);
                current_width += chunk_width;
            }
        }
    }

    flush(&mut current, &mut current_width);
    lines
}

/// Split into alternating whitespace and word chunks (or one chunk when word
/// wrapping is disabled).
fn split_chunks(text: &str, word_wrap: bool) -> Vec<&str> {
    if !word_wrap {
        return vec![text];
    }
    let mut chunks = Vec::new();
    let mut start = 0usize;
    let mut in_space: Option<bool> = None;
    for (idx, ch) in text.char_indices() {
        let space = ch.is_whitespace();
        match in_space {
            Some(prev) if prev == space => {}
            Some(_) => {
                chunks.push(&text[start..idx]);
                start = idx;
                in_space = Some(space);
            }
            None => in_space = Some(space),
        }
    }
    if start < text.len() {
        chunks.push(&text[start..]);
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::themes::THEME_REGISTRY;

    fn area() -> StyledTextArea {
        StyledTextArea::new(TextStyle::default())
    }

    #[test]
    fn test_locked_after_every_mutation() {
        let mut txt = area();
        assert!(txt.is_locked());

        txt.write("hello", None, Pos::Start);
        assert!(txt.is_locked());

        txt.append(" world", Some(Tag::Bold), false, false);
        assert!(txt.is_locked());

        txt.clear();
        assert!(txt.is_locked());
    }

    #[test]
    fn test_append_prefix_ordering() {
        let mut txt = area();
        txt.append("A", None, false, false);
        txt.append("B", None, true, true);
        assert_eq!(txt.content(), "A\n B");
    }

    #[test]
    fn test_append_space_only_and_newline_only() {
        let mut txt = area();
        txt.append("A", None, false, false);
        txt.append("B", None, true, false);
        txt.append("C", None, false, true);
        assert_eq!(txt.content(), "A B\nC");
    }

    #[test]
    fn test_clear_leaves_no_residue() {
        let mut txt = area();
        txt.append("chapter one", Some(Tag::H1), false, false);
        txt.clear();
        txt.write("fresh", None, Pos::Start);
        assert_eq!(txt.content(), "fresh");
        assert!(txt.tags().is_empty());
    }

    #[test]
    fn test_tagged_write_covers_exactly_the_inserted_span() {
        let mut txt = area();
        txt.append("plain ", None, false, false);
        txt.append("bold", Some(Tag::Bold), false, false);

        let tag = txt.tags().last().copied().expect("tag recorded");
        assert_eq!(tag.tag, Tag::Bold);
        assert_eq!(tag.start, 6);
        assert_eq!(tag.end, 10);
    }

    #[test]
    fn test_tag_ranges_are_not_reindexed_by_later_edits() {
        // ranges stay as recorded at insertion time, even when an earlier
        // edit shifts the characters they originally covered
        let mut txt = area();
        txt.append("intro ", None, false, false);
        txt.append("bold", Some(Tag::Bold), false, false);
        let before = txt.tags().last().copied().expect("tag recorded");

        txt.write("shifted ", None, Pos::Start);

        let after = txt.tags().last().copied().expect("tag still there");
        assert_eq!(after, before);
        assert_eq!(after.start, 6);
        assert_eq!(after.end, 10);
    }

    #[test]
    fn test_write_at_line_col() {
        let mut txt = area();
        txt.write("ab\ncd", None, Pos::Start);
        txt.write("X", None, Pos::LineCol { line: 2, col: 1 });
        assert_eq!(txt.content(), "ab\ncXd");
    }

    #[test]
    fn test_invalid_address_is_silent() {
        let mut txt = area();
        txt.write("ab", None, Pos::Start);
        txt.write("X", None, Pos::LineCol { line: 9, col: 0 });
        txt.write("Y", None, Pos::LineCol { line: 1, col: 99 });
        assert_eq!(txt.content(), "ab");
        assert!(txt.is_locked());
    }

    #[test]
    fn test_toggle_center_twice_restores_flag() {
        let mut txt = area();
        txt.append("some text", None, false, false);
        assert!(!txt.is_centered());

        txt.toggle_center();
        assert!(txt.is_centered());
        assert!(txt.tags().iter().any(|t| t.tag == Tag::Center));

        txt.toggle_center();
        assert!(!txt.is_centered());
        assert!(!txt.tags().iter().any(|t| t.tag == Tag::Center));
    }

    #[test]
    fn test_untoggle_does_not_restore_left_tag() {
        // removal only strips center tags; a prior left tag stays untouched
        let mut txt = area();
        txt.append("aligned", Some(Tag::Left), false, false);
        txt.toggle_center();
        txt.toggle_center();

        let lefts = txt.tags().iter().filter(|t| t.tag == Tag::Left).count();
        let centers = txt.tags().iter().filter(|t| t.tag == Tag::Center).count();
        assert_eq!(lefts, 1);
        assert_eq!(centers, 0);
    }

    #[test]
    fn test_heading_lines_render_centered() {
        let mut txt = area();
        txt.append("Title", Some(Tag::H1), false, false);
        txt.append("body text", None, false, true);

        let theme = THEME_REGISTRY.get_or_default("terminal");
        let lines = txt.display_lines(40, theme);
        assert_eq!(lines[0].alignment, Some(Alignment::Center));
        assert_eq!(
            lines.last().expect("body line").alignment,
            Some(Alignment::Left)
        );
    }

    #[test]
    fn test_wrap_keeps_words_whole() {
        let mut txt = area();
        txt.append("alpha beta gamma", None, false, false);

        let theme = THEME_REGISTRY.get_or_default("terminal");
        let lines = txt.display_lines(11, theme);
        let rendered: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert_eq!(rendered, vec!["alpha beta", "gamma"]);
    }

    #[test]
    fn test_refresh_is_idempotent() {
        let mut txt = area();
        txt.refresh_at(1, 2);
        txt.refresh_at(1, 2);
        assert_eq!(txt.layout_slot(), (1, 2));
        assert!(txt.is_locked());
    }
}
