//! Header strip: title left, right-aligned status with a colored dot.

use ratatui::Frame;
use ratatui::style::Modifier;
use ratatui::text::Span;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::style::{
    background_style, border_style, danger_style, success_style, text_muted_style, text_style,
};
use crate::theme::TriagePalette;
use crate::utils::{horizontal_padding, truncate_ellipsis};

/// Title shown in the header.
pub const HEADER_TITLE: &str = "triage chat";

/// Layout for the header: outer area and padded inner rect for content.
#[derive(Debug, Clone)]
pub struct HeadLayout {
    pub area: Rect,
    pub inner: Rect,
}

impl HeadLayout {
    pub fn new(area: Rect) -> Self {
        let inner = horizontal_padding(area);
        Self { area, inner }
    }
}

/// Build the header line: title (bold) left, right-aligned status with a dot.
/// has_error: red dot; else green dot.
pub fn header_line(
    title: &str,
    right: &str,
    has_error: bool,
    palette: &TriagePalette,
    width: u16,
) -> Line<'static> {
    let title_style = text_style(palette.text).add_modifier(Modifier::BOLD);
    let dot_style = if has_error {
        danger_style(palette.danger)
    } else {
        success_style(palette.success)
    };
    let right_style = text_muted_style(palette.text_muted);
    let left_len = title.chars().count() + 1;
    let avail = (width as usize).saturating_sub(left_len + 2);
    let right = truncate_ellipsis(right, avail);
    let right_len = 2 + right.chars().count(); // "● " + status
    let gap = (width as usize).saturating_sub(left_len + right_len);
    Line::from(vec![
        Span::styled(title.to_string(), title_style),
        Span::raw(" ".repeat(gap)),
        Span::styled("● ".to_string(), dot_style),
        Span::styled(right, right_style),
    ])
}

/// Block for the header bar: full-width background, bottom border.
pub fn block_for_head(palette: &TriagePalette) -> Block<'static> {
    Block::default()
        .borders(Borders::BOTTOM)
        .border_style(border_style(palette.border))
        .style(background_style(palette.status_bar_background))
}

/// Draw the header: title line over a bottom border, status with colored dot.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    palette: &TriagePalette,
    title: &str,
    status: &str,
    has_error: bool,
) {
    let layout = HeadLayout::new(area);
    let block = block_for_head(palette);
    let line = header_line(title, status, has_error, palette, layout.inner.width);
    let bg = background_style(palette.status_bar_background);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(line).style(bg), layout.inner);
}
