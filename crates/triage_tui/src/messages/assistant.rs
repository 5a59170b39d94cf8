//! Assistant message rendering: bubble, disclosure control, disclosure panel.
//!
//! Layout:
//! - First line: bubble border (`│`) + avatar (`▸`) + optional timestamp + text.
//! - Continuation: border + 2-space indent, wrapped text.
//! - When the message carries a raw payload, a chevron control line follows the
//!   bubble; when the panel is open, the payload renders verbatim below it in
//!   muted style behind a dotted border.
//! - Colors from crate::theme: assistant_accent (avatar, border), text (body),
//!   text_muted (timestamp), detail_foreground (panel).

use ratatui::text::{Line, Span};

use triage_core::{ChatMessage, ClockFormat, format_clock_time};

use crate::layouts::{text_muted_style, text_style};
use crate::locale::Locale;
use crate::theme::TriagePalette;
use crate::utils::{LEFT_PADDING, wrap_preserving_newlines};

/// Avatar glyph shown before assistant message text (assistant accent color).
pub const ASSISTANT_AVATAR: &str = "▸";

/// Left border for assistant messages.
const ASSISTANT_BORDER: &str = "│ ";

/// Dotted border for the disclosure panel.
const DETAIL_BORDER: &str = "┊ ";

/// Chevron on the disclosure control line, keyed to the panel state.
const CHEVRON_CLOSED: &str = "▸";
const CHEVRON_OPEN: &str = "▾";

/// Build lines for an assistant message: bubble, then (when the raw payload is
/// present and non-empty) the disclosure control, then the open panel.
pub fn assistant_message_lines(
    msg: &ChatMessage,
    visible: bool,
    palette: &TriagePalette,
    width: usize,
    locale: Locale,
    clock: ClockFormat,
) -> Vec<Line<'static>> {
    let mut lines = bubble_lines(msg, palette, width, clock);
    if msg.has_details() {
        lines.push(control_line(visible, palette, locale));
        if visible {
            if let Some(raw) = msg.raw_model_response.as_deref() {
                lines.extend(panel_lines(raw, palette));
            }
        }
    }
    lines
}

/// Bubble only: border + avatar + optional timestamp + wrapped text.
fn bubble_lines(
    msg: &ChatMessage,
    palette: &TriagePalette,
    width: usize,
    clock: ClockFormat,
) -> Vec<Line<'static>> {
    let accent = text_style(palette.assistant_accent);
    let border_span = Span::styled(ASSISTANT_BORDER.to_string(), accent);
    let indent_len = LEFT_PADDING.len() + ASSISTANT_BORDER.len();
    let wrap_width = width.saturating_sub(indent_len).max(1);
    let wrapped = wrap_preserving_newlines(&msg.content, wrap_width);

    let mut lines = Vec::with_capacity(wrapped.len());
    let mut first_spans = vec![
        border_span.clone(),
        Span::styled(ASSISTANT_AVATAR.to_string(), accent),
        Span::raw(" "),
    ];
    if let Some(ts) = msg.timestamp.as_deref() {
        first_spans.push(Span::styled(
            format!("{} ", format_clock_time(ts, clock)),
            text_muted_style(palette.text_muted),
        ));
    }
    first_spans.push(Span::styled(wrapped[0].clone(), text_style(palette.text)));
    lines.push(Line::from(first_spans));

    for seg in wrapped.iter().skip(1) {
        lines.push(Line::from(vec![
            border_span.clone(),
            Span::raw(LEFT_PADDING),
            Span::styled(seg.clone(), text_style(palette.text)),
        ]));
    }
    lines
}

/// Disclosure control: chevron + localized show/hide label.
fn control_line(visible: bool, palette: &TriagePalette, locale: Locale) -> Line<'static> {
    let (chevron, label) = if visible {
        (CHEVRON_OPEN, locale.hide_details())
    } else {
        (CHEVRON_CLOSED, locale.show_details())
    };
    Line::from(vec![
        Span::raw(LEFT_PADDING),
        Span::styled(format!("{} ", chevron), text_style(palette.assistant_accent)),
        Span::styled(label.to_string(), text_muted_style(palette.text_muted)),
    ])
}

/// Disclosure panel: the raw payload verbatim, line for line, muted behind a
/// dotted border. No word wrap; the surrounding paragraph soft-wraps overflow.
fn panel_lines(raw: &str, palette: &TriagePalette) -> Vec<Line<'static>> {
    let style = text_muted_style(palette.detail_foreground);
    raw.split('\n')
        .map(|l| {
            Line::from(vec![
                Span::raw(LEFT_PADDING),
                Span::styled(DETAIL_BORDER.to_string(), style),
                Span::styled(l.to_string(), style),
            ])
        })
        .collect()
}
