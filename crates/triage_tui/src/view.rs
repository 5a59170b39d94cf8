//! TUI view: header (fixed top), scrollable chat body, shortcut + input (fixed bottom).

use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::layouts::{
    CHAT_MESSAGE_SPACING, ChatsLayout, HEADER_TITLE, INPUT_ICON, block_for_input_bordered,
    main_splits, render_header, shortcut_inner_rect, shortcut_line, text_muted_style, text_style,
    vertical_split,
};
use crate::messages::message_lines;
use crate::state::{ChatItem, Screen, TuiState};

/// Draw the full TUI: main chat or debug traces depending on state.screen.
pub fn draw(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    match state.screen {
        Screen::DebugTraces => draw_debug_traces(frame, state, area),
        Screen::Main => draw_main(frame, state, area),
    }
}

/// Runtime logs screen: scrollable list of tracing output. Ctrl+D to close.
fn draw_debug_traces(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    use ratatui::widgets::{Block, Borders};

    let palette = &state.palette;
    let title = " Runtime logs (Ctrl+D to close) ";
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(crate::layouts::border_style(palette.border))
        .style(crate::layouts::background_style(palette.background));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let content_height = state.trace_lines.len();
    let viewport_height = inner.height as usize;
    let max_scroll = content_height.saturating_sub(viewport_height);
    state.trace_scroll = state.trace_scroll.min(max_scroll);
    let offset = state.trace_scroll;

    let lines: Vec<Line> = state
        .trace_lines
        .iter()
        .skip(offset)
        .take(viewport_height)
        .map(|s| {
            Line::from(ratatui::text::Span::styled(
                s.clone(),
                text_muted_style(palette.text_muted),
            ))
        })
        .collect();
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

/// Main chat view: header, scrollable chat body, shortcut + input fixed bottom.
fn draw_main(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    let splits = main_splits(area);
    let palette = &state.palette;

    // ---- Header (fixed at top) ----
    let status = if state.status.is_empty() {
        state.locale.status_ready()
    } else {
        state.status.as_str()
    };
    render_header(
        frame,
        splits.header,
        palette,
        HEADER_TITLE,
        status,
        state.has_error,
    );

    // ---- Body: scrollable chat ----
    let chat = ChatsLayout::new(splits.body);
    let width = chat.inner.width as usize;
    let viewport_height = chat.inner.height as usize;

    let all_lines: Vec<Line> = if state.cache_dirty {
        let mut lines = Vec::new();
        for item in &state.messages {
            if !lines.is_empty() {
                for _ in 0..CHAT_MESSAGE_SPACING {
                    lines.push(Line::from(""));
                }
            }
            let (msg, visible) = match item {
                ChatItem::User(m) => (m, false),
                ChatItem::Assistant(ai) => (&ai.message, ai.details_visible),
            };
            lines.extend(message_lines(
                msg,
                visible,
                palette,
                width,
                state.locale,
                state.clock,
            ));
        }
        state.cached_lines = lines.clone();
        state.cache_dirty = false;
        lines
    } else {
        state.cached_lines.clone()
    };

    let content_height = all_lines.len();

    // Scroll clamp: state.scroll is "lines scrolled UP from bottom" (0 = at bottom).
    let max_scroll = content_height.saturating_sub(viewport_height);
    state.scroll = chat.clamp_scroll(state.scroll, content_height);
    state.last_content_height = content_height;
    state.last_viewport_height = viewport_height;

    // Convert to offset from top: scroll=0 → show last lines, scroll=max → show first lines.
    let offset_from_top = max_scroll.saturating_sub(state.scroll);
    let visible: Vec<Line> = all_lines
        .into_iter()
        .skip(offset_from_top)
        .take(viewport_height)
        .collect();

    if state.messages.is_empty() {
        let title_line = Line::from(vec![ratatui::text::Span::styled(
            HEADER_TITLE.to_string(),
            text_style(palette.text),
        )]);
        let sub_line = Line::from(vec![ratatui::text::Span::styled(
            state.locale.empty_state().to_string(),
            text_muted_style(palette.text_muted),
        )]);
        let para = Paragraph::new(vec![Line::from(""), title_line, Line::from(""), sub_line])
            .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(para, chat.inner);
    } else {
        let paragraph = Paragraph::new(visible).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, chat.inner);
    }

    // Scrollbar when content exceeds viewport
    if content_height > viewport_height && !state.messages.is_empty() {
        let track = palette.scrollbar_track;
        let thumb = palette.scrollbar_thumb;
        let thumb_height = (((viewport_height as f64) * (viewport_height as f64)
            / (content_height as f64).max(1.0))
            .ceil() as u16)
            .max(1);
        // scroll=0 is bottom, scroll=max is top. Thumb sits at the bottom when
        // scroll=0 and at the top when scroll=max.
        let scroll_ratio = if max_scroll == 0 {
            1.0
        } else {
            offset_from_top as f64 / max_scroll as f64
        };
        let thumb_y =
            (scroll_ratio * (viewport_height as f64 - thumb_height as f64)).round() as u16;
        let scrollbar_rect = Rect {
            x: chat.inner.x + chat.inner.width.saturating_sub(1),
            y: chat.inner.y,
            width: 1,
            height: chat.inner.height,
        };
        let track_style = ratatui::style::Style::default().bg(crate::layouts::rgb_to_color(track));
        frame.render_widget(
            ratatui::widgets::Block::default().style(track_style),
            scrollbar_rect,
        );
        let thumb_rect = Rect {
            x: scrollbar_rect.x,
            y: scrollbar_rect.y + thumb_y,
            width: 1,
            height: thumb_height,
        };
        let thumb_style = ratatui::style::Style::default().bg(crate::layouts::rgb_to_color(thumb));
        frame.render_widget(
            ratatui::widgets::Block::default().style(thumb_style),
            thumb_rect,
        );
    }

    // ---- Footer: input block + shortcut ----
    let (input_rect, shortcut_rect) = vertical_split(splits.footer, 3);

    let block = block_for_input_bordered(palette, true);
    let inner = block.inner(input_rect);
    frame.render_widget(block, input_rect);

    let (icon_style, content_style) = if state.input_buffer.is_empty() {
        (
            text_style(palette.accent),
            text_style(palette.text_placeholder),
        )
    } else {
        (text_style(palette.success), text_style(palette.text))
    };
    let input_line = Line::from(vec![
        ratatui::text::Span::styled(INPUT_ICON.to_string(), icon_style),
        ratatui::text::Span::styled(
            if state.input_buffer.is_empty() {
                state.locale.input_placeholder().to_string()
            } else {
                state.input_buffer.clone()
            },
            content_style,
        ),
    ]);
    frame.render_widget(Paragraph::new(input_line), inner);

    // Cursor: display width (unicode-width) for position
    let icon_width = INPUT_ICON.width();
    let before_cursor = &state.input_buffer[..state.input_cursor.min(state.input_buffer.len())];
    let cursor_col_offset = before_cursor.width();
    let cursor_col =
        (inner.x + icon_width as u16 + cursor_col_offset as u16).min(inner.x + inner.width);
    frame.set_cursor_position((cursor_col, inner.y));

    let shortcut_inner = shortcut_inner_rect(shortcut_rect);
    frame.render_widget(
        Paragraph::new(shortcut_line(palette, !state.input_buffer.is_empty())),
        shortcut_inner,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use triage_core::ChatMessage;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area();
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn draw_state(state: &mut TuiState) -> String {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                draw(frame, state, area);
            })
            .unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn empty_state_shows_prompt() {
        let mut state = TuiState::new();
        let out = draw_state(&mut state);
        assert!(out.contains(HEADER_TITLE));
        assert!(out.contains(state.locale.empty_state()));
    }

    #[test]
    fn user_and_assistant_messages_render() {
        let mut state = TuiState::new();
        state.push_message(ChatMessage::user("How are you?"));
        state.push_message(ChatMessage::assistant("Doing well."));
        let out = draw_state(&mut state);
        assert!(out.contains("How are you?"));
        assert!(out.contains("Doing well."));
    }

    #[test]
    fn collapsed_details_hidden_until_toggled() {
        let mut state = TuiState::new();
        state.push_message(ChatMessage::assistant("Hello").with_raw_response("raw-debug-data"));
        let out = draw_state(&mut state);
        assert!(out.contains(state.locale.show_details()));
        assert!(!out.contains("raw-debug-data"));

        state.toggle_last_details();
        let out = draw_state(&mut state);
        assert!(out.contains(state.locale.hide_details()));
        assert!(out.contains("raw-debug-data"));
    }

    #[test]
    fn toggle_back_hides_again() {
        let mut state = TuiState::new();
        state.push_message(ChatMessage::assistant("Hello").with_raw_response("raw-debug-data"));
        state.toggle_last_details();
        state.toggle_last_details();
        let out = draw_state(&mut state);
        assert!(out.contains(state.locale.show_details()));
        assert!(!out.contains("raw-debug-data"));
    }

    #[test]
    fn header_shows_ready_status() {
        let mut state = TuiState::new();
        let out = draw_state(&mut state);
        assert!(out.contains(state.locale.status_ready()));
    }

    #[test]
    fn input_buffer_replaces_placeholder() {
        let mut state = TuiState::new();
        for c in "hola".chars() {
            state.input_insert(c);
        }
        let out = draw_state(&mut state);
        assert!(out.contains("hola"));
        assert!(!out.contains(state.locale.input_placeholder()));
    }

    #[test]
    fn debug_traces_screen_shows_log_lines() {
        let mut state = TuiState::new();
        state.screen = Screen::DebugTraces;
        state.push_trace_line("INFO message submitted".to_string());
        let out = draw_state(&mut state);
        assert!(out.contains("Runtime logs"));
        assert!(out.contains("INFO message submitted"));
    }

    #[test]
    fn scroll_is_clamped_to_content() {
        let mut state = TuiState::new();
        for i in 0..40 {
            state.push_message(ChatMessage::user(format!("message {}", i)));
        }
        state.scroll = 10_000;
        draw_state(&mut state);
        assert!(state.scroll <= state.last_content_height);
        assert!(state.last_content_height > state.last_viewport_height);
    }
}
