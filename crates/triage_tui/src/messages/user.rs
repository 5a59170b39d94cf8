//! User message rendering.
//!
//! Layout (mirror of the assistant side):
//! - Lines are right-aligned; the bubble border (`│`) sits in the last column,
//!   toward the avatar glyph.
//! - First line, left to right: text, optional timestamp, avatar (`«`), border.
//! - Continuation lines: wrapped text, 2-space indent, border.
//! - Colors from crate::theme: user_accent (avatar, border), text (body),
//!   text_muted (timestamp).

use ratatui::text::{Line, Span};

use triage_core::{ChatMessage, ClockFormat, format_clock_time};

use crate::layouts::{text_muted_style, text_style};
use crate::theme::TriagePalette;
use crate::utils::{LEFT_PADDING, right_pad_width, wrap_preserving_newlines};

/// Avatar glyph shown after user message text (user accent color).
pub const USER_AVATAR: &str = "«";

/// Right border column for user messages.
const USER_BORDER: &str = "│";

/// Build lines for a user message, trailing-aligned with reversed element order.
pub fn user_message_lines(
    msg: &ChatMessage,
    palette: &TriagePalette,
    width: usize,
    clock: ClockFormat,
) -> Vec<Line<'static>> {
    let indent_len = LEFT_PADDING.len() + 2; // mirror of avatar-side border + glyph
    let wrap_width = width.saturating_sub(indent_len).max(1);
    let wrapped = wrap_preserving_newlines(&msg.content, wrap_width);
    let accent = text_style(palette.user_accent);

    let time_label = msg
        .timestamp
        .as_deref()
        .map(|ts| format_clock_time(ts, clock));

    let mut lines = Vec::with_capacity(wrapped.len());
    for (i, seg) in wrapped.iter().enumerate() {
        let mut parts: Vec<Span<'static>> = Vec::new();
        let mut widths: Vec<&str> = Vec::new();

        parts.push(Span::styled(seg.clone(), text_style(palette.text)));
        widths.push(seg);
        if i == 0 {
            parts.push(Span::raw(" "));
            widths.push(" ");
            if let Some(t) = &time_label {
                parts.push(Span::styled(format!("{} ", t), text_muted_style(palette.text_muted)));
                widths.push(t);
                widths.push(" ");
            }
            parts.push(Span::styled(format!("{} ", USER_AVATAR), accent));
            widths.push(USER_AVATAR);
            widths.push(" ");
        } else {
            parts.push(Span::raw(LEFT_PADDING));
            widths.push(LEFT_PADDING);
        }
        parts.push(Span::styled(USER_BORDER.to_string(), accent));
        widths.push(USER_BORDER);

        let pad = right_pad_width(&widths, width);
        let mut spans = vec![Span::raw(" ".repeat(pad))];
        spans.extend(parts);
        lines.push(Line::from(spans));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn first_line_has_avatar_and_border_trailing() {
        let msg = ChatMessage::user("Hello world");
        let palette = TriagePalette::dark();
        let lines = user_message_lines(&msg, &palette, 40, ClockFormat::default());
        let text = line_text(&lines[0]);
        assert!(text.trim_end().ends_with(USER_BORDER));
        assert!(text.contains(USER_AVATAR));
        // Trailing side: text starts after left padding, not at column 0.
        assert!(text.starts_with(' '));
    }

    #[test]
    fn border_sits_in_last_column() {
        let msg = ChatMessage::user("hi");
        let palette = TriagePalette::dark();
        let width = 30;
        let lines = user_message_lines(&msg, &palette, width, ClockFormat::default());
        use unicode_width::UnicodeWidthStr;
        assert_eq!(line_text(&lines[0]).width(), width);
    }

    #[test]
    fn preserves_embedded_newline() {
        let msg = ChatMessage::user("line1\nline2");
        let palette = TriagePalette::dark();
        let lines = user_message_lines(&msg, &palette, 40, ClockFormat::default());
        assert_eq!(lines.len(), 2);
        assert!(line_text(&lines[0]).contains("line1"));
        assert!(line_text(&lines[1]).contains("line2"));
    }

    #[test]
    fn wraps_long_text() {
        let msg = ChatMessage::user("one two three four five six seven");
        let palette = TriagePalette::dark();
        let lines = user_message_lines(&msg, &palette, 12, ClockFormat::default());
        assert!(lines.len() > 1);
    }

    #[test]
    fn timestamp_rendered_on_first_line_only() {
        let msg = ChatMessage::user("a\nb").with_timestamp("2024-01-01T09:15:00Z");
        let palette = TriagePalette::dark();
        let lines = user_message_lines(&msg, &palette, 40, ClockFormat::default());
        assert!(line_text(&lines[0]).contains("09:15"));
        assert!(!line_text(&lines[1]).contains("09:15"));
    }

    #[test]
    fn no_timestamp_no_label() {
        let msg = ChatMessage::user("hello");
        let palette = TriagePalette::dark();
        let lines = user_message_lines(&msg, &palette, 40, ClockFormat::default());
        assert!(!line_text(&lines[0]).contains(':'));
    }

    #[test]
    fn empty_text_still_renders_avatar() {
        let msg = ChatMessage::user("");
        let palette = TriagePalette::dark();
        let lines = user_message_lines(&msg, &palette, 40, ClockFormat::default());
        assert_eq!(lines.len(), 1);
        assert!(line_text(&lines[0]).contains(USER_AVATAR));
    }

    #[test]
    fn emoji_content() {
        let msg = ChatMessage::user("Hello 🌍🎉");
        let palette = TriagePalette::dark();
        let lines = user_message_lines(&msg, &palette, 40, ClockFormat::default());
        assert!(!lines.is_empty());
    }
}
