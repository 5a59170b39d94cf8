//! Shortcut hint line: fixed line below the input, muted, context-aware.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use super::input::INPUT_PADDING_H;
use super::style::text_muted_style;
use crate::theme::TriagePalette;

/// Horizontal inset so the hint aligns with the input content (border + padding).
const SHORTCUT_INSET_H: u16 = 1 + INPUT_PADDING_H;

/// Rect for the shortcut line, aligned with the input content above.
pub fn shortcut_inner_rect(area: Rect) -> Rect {
    let w = area.width.saturating_sub(SHORTCUT_INSET_H.saturating_mul(2));
    Rect {
        x: area.x.saturating_add(SHORTCUT_INSET_H),
        y: area.y,
        width: w,
        height: area.height,
    }
}

/// Build the hint line for the footer.
/// - Input has text: "Enter: send  Ctrl+U: clear  Ctrl+C: quit"
/// - Input empty: scroll/details/copy/quit hints.
pub fn shortcut_line(palette: &TriagePalette, input_has_text: bool) -> Line<'static> {
    let hint = if input_has_text {
        "Enter: send  ·  Ctrl+U: clear  ·  Ctrl+C: quit"
    } else {
        "↑↓: scroll  ·  d: details  ·  Ctrl+Y: copy reply  ·  q: quit"
    };
    Line::from(vec![Span::styled(
        hint.to_string(),
        text_muted_style(palette.text_muted),
    )])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_rect_zero_width() {
        assert_eq!(shortcut_inner_rect(Rect::new(0, 0, 0, 1)).width, 0);
    }

    #[test]
    fn hint_for_typing() {
        let palette = TriagePalette::dark();
        let line = shortcut_line(&palette, true);
        assert!(line.spans.iter().any(|s| s.content.contains("Enter")));
    }

    #[test]
    fn hint_for_idle_mentions_details_toggle() {
        let palette = TriagePalette::dark();
        let line = shortcut_line(&palette, false);
        assert!(line.spans.iter().any(|s| s.content.contains("details")));
    }
}
