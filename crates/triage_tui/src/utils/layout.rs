//! Layout helpers for Rects and alignment.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

use crate::utils::constants::HORIZONTAL_PADDING;

/// Apply horizontal padding to a Rect (symmetric left/right).
#[inline]
pub fn horizontal_padding(area: Rect) -> Rect {
    horizontal_padding_with(area, HORIZONTAL_PADDING)
}

/// Apply horizontal padding with a custom amount.
#[inline]
pub fn horizontal_padding_with(area: Rect, pad: u16) -> Rect {
    Rect {
        x: area.x.saturating_add(pad),
        y: area.y,
        width: area.width.saturating_sub(pad.saturating_mul(2)),
        height: area.height,
    }
}

/// Spaces needed to push content of the given display widths flush to the right
/// edge of a `width`-column line. Uses display width, not char count.
pub fn right_pad_width(content_widths: &[&str], width: usize) -> usize {
    let used: usize = content_widths.iter().map(|s| s.width()).sum();
    width.saturating_sub(used)
}

/// Clamp a scroll offset so content never scrolls past its end.
pub fn scroll_clamp(offset: usize, content_height: usize, viewport_height: usize) -> usize {
    let max_offset = content_height.saturating_sub(viewport_height);
    offset.min(max_offset)
}
