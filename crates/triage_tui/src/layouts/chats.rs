//! Chat area layout: scrollable body region for the message list.

use ratatui::layout::Rect;

use crate::utils::{MESSAGE_SPACING_LINES, horizontal_padding, scroll_clamp};

/// Blank lines between messages.
pub const CHAT_MESSAGE_SPACING: usize = MESSAGE_SPACING_LINES;

/// Layout for the chat body: outer area and padded inner rect.
#[derive(Debug, Clone)]
pub struct ChatsLayout {
    pub area: Rect,
    /// Inner rect with horizontal padding for message content.
    pub inner: Rect,
}

impl ChatsLayout {
    pub fn new(area: Rect) -> Self {
        let inner = horizontal_padding(area);
        Self { area, inner }
    }

    /// Clamp a scroll offset against this layout's viewport.
    pub fn clamp_scroll(&self, offset: usize, content_height: usize) -> usize {
        scroll_clamp(offset, content_height, self.inner.height as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_has_padding() {
        let layout = ChatsLayout::new(Rect::new(0, 0, 80, 20));
        assert!(layout.inner.width < 80);
        assert_eq!(layout.inner.height, 20);
    }

    #[test]
    fn zero_size_area() {
        let layout = ChatsLayout::new(Rect::new(0, 0, 0, 0));
        assert_eq!(layout.inner.width, 0);
        assert_eq!(layout.inner.height, 0);
    }

    #[test]
    fn clamp_scroll_limits_offset() {
        let layout = ChatsLayout::new(Rect::new(0, 0, 80, 20));
        assert_eq!(layout.clamp_scroll(100, 50), 30);
        assert_eq!(layout.clamp_scroll(3, 10), 0);
    }
}
