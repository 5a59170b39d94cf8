//! Split the terminal area into header, body, and footer regions.

use ratatui::layout::Rect;

use crate::utils::horizontal_padding;

/// Fixed height for the header (title line + bottom border).
pub const HEADER_HEIGHT: u16 = 2;

/// Fixed height for the footer: input block (3 lines) + shortcut line.
pub const FOOTER_HEIGHT: u16 = 4;

/// Regions for the main app layout: header, scrollable body, footer.
#[derive(Debug, Clone)]
pub struct MainSplits {
    pub header: Rect,
    /// Middle area; zero height when the terminal is too small.
    pub body: Rect,
    pub footer: Rect,
}

/// Split `area` into header (fixed top), body (middle), footer (fixed bottom).
/// The body is returned with horizontal padding already applied.
pub fn main_splits(area: Rect) -> MainSplits {
    let body_h = area.height.saturating_sub(HEADER_HEIGHT + FOOTER_HEIGHT);

    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: HEADER_HEIGHT,
    };
    let body = Rect {
        x: area.x,
        y: area.y.saturating_add(HEADER_HEIGHT),
        width: area.width,
        height: body_h,
    };
    let footer = Rect {
        x: area.x,
        y: area.y.saturating_add(HEADER_HEIGHT + body_h),
        width: area.width,
        height: FOOTER_HEIGHT,
    };

    MainSplits {
        header,
        body: horizontal_padding(body),
        footer,
    }
}

/// Split a vertical strip into top and bottom with a given top height.
pub fn vertical_split(area: Rect, top_height: u16) -> (Rect, Rect) {
    let top_h = top_height.min(area.height);
    let top = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: top_h,
    };
    let bottom = Rect {
        x: area.x,
        y: area.y.saturating_add(top_h),
        width: area.width,
        height: area.height.saturating_sub(top_h),
    };
    (top, bottom)
}
