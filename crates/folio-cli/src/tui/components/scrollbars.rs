//! Scrollbar rendering
//!
//! One-character-wide scrollbar with a filled track and a solid thumb,
//! positioned from the view's `(top, bottom)` fractions. Visual: ░ (track)
//! and █ (thumb).

use ratatui::{buffer::Buffer, layout::Rect, style::Color};

use folio_core::ScrollFraction;

/// Render a vertical scrollbar for the given view fractions.
///
/// The column is cleared first so stale glyphs never survive a view that no
/// longer needs a scrollbar.
pub fn render_scrollbar(
    buf: &mut Buffer,
    area: Rect,
    view: ScrollFraction,
    thumb_color: Color,
    track_color: Color,
) {
    for y in 0..area.height {
        if let Some(cell) = buf.cell_mut((area.x, area.y + y)) {
            cell.set_char(' ');
            cell.set_fg(Color::Reset);
        }
    }

    let height = area.height as usize;
    let Some((thumb_top, thumb_len)) = thumb_extent(view, height) else {
        return;
    };

    for y in 0..height {
        let is_thumb = y >= thumb_top && y < thumb_top + thumb_len;
        let (ch, color) = if is_thumb {
            ('█', thumb_color)
        } else {
            ('░', track_color)
        };
        if let Some(cell) = buf.cell_mut((area.x, area.y + y as u16)) {
            cell.set_char(ch);
            cell.set_fg(color);
        }
    }
}

/// Thumb placement as `(top_row, rows)`, or `None` when no scrollbar is
/// needed (whole content visible or zero-height area).
fn thumb_extent(view: ScrollFraction, height: usize) -> Option<(usize, usize)> {
    if height == 0 || view.bottom - view.top >= 1.0 {
        return None;
    }

    let span = (view.bottom - view.top).clamp(0.0, 1.0);
    let thumb_len = ((span * height as f64).round() as usize).clamp(1, height);
    let thumb_top = ((view.top.clamp(0.0, 1.0) * height as f64).round() as usize)
        .min(height - thumb_len);

    Some((thumb_top, thumb_len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_view_needs_no_scrollbar() {
        assert!(thumb_extent(ScrollFraction::full(), 10).is_none());
        assert!(thumb_extent(ScrollFraction { top: 0.0, bottom: 0.5 }, 0).is_none());
    }

    #[test]
    fn test_half_view_at_top() {
        let (top, len) =
            thumb_extent(ScrollFraction { top: 0.0, bottom: 0.5 }, 10).expect("thumb");
        assert_eq!(top, 0);
        assert_eq!(len, 5);
    }

    #[test]
    fn test_thumb_stays_inside_track_at_bottom() {
        let (top, len) =
            thumb_extent(ScrollFraction { top: 0.75, bottom: 1.0 }, 10).expect("thumb");
        assert_eq!(len, 3);
        assert!(top + len <= 10);
    }

    #[test]
    fn test_tiny_view_gets_minimum_thumb() {
        let (_, len) =
            thumb_extent(ScrollFraction { top: 0.5, bottom: 0.51 }, 10).expect("thumb");
        assert_eq!(len, 1);
    }
}
