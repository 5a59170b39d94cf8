//! TUI state: chat items, input buffer, scroll, theme.
//!
//! [TuiState] holds everything the view needs to render. [ChatItem] wraps
//! [ChatMessage] by role so assistant items can carry their own disclosure
//! flag.

use triage_core::{ChatMessage, ClockFormat, Role};

use crate::locale::Locale;
use crate::theme::{Appearance, TriagePalette};
use crate::utils::MAX_TRACE_LINES;

/// Which screen is currently shown (main chat vs debug traces).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Main,
    DebugTraces,
}

/// An assistant message plus the open/closed state of its raw-response panel.
///
/// The flag lives on the item, starts closed, and is never shared: two items
/// built from the same message toggle independently.
#[derive(Debug, Clone)]
pub struct AssistantItem {
    pub message: ChatMessage,
    pub details_visible: bool,
}

impl AssistantItem {
    pub fn new(message: ChatMessage) -> Self {
        Self { message, details_visible: false }
    }

    /// Flip the raw-response panel open/closed.
    pub fn toggle_details(&mut self) {
        self.details_visible = !self.details_visible;
    }
}

/// One item in the chat: user or assistant.
#[derive(Debug, Clone)]
pub enum ChatItem {
    User(ChatMessage),
    Assistant(AssistantItem),
}

/// TUI application state.
#[derive(Debug)]
pub struct TuiState {
    /// Ordered list of chat items to display.
    pub messages: Vec<ChatItem>,
    /// Current input line (footer).
    pub input_buffer: String,
    /// Cursor position within input_buffer (0..=len).
    pub input_cursor: usize,
    /// Vertical scroll offset (number of lines scrolled up).
    pub scroll: usize,
    /// When true, keep scroll at bottom on new content; when false, user scrolled up.
    pub auto_scroll: bool,
    /// Theme palette (dark/light).
    pub palette: TriagePalette,
    /// UI language for labels.
    pub locale: Locale,
    /// Clock format for message timestamps.
    pub clock: ClockFormat,
    /// Optional status text for header right side.
    pub status: String,
    /// True when the last submit failed (header dot turns red).
    pub has_error: bool,
    /// When set, status is transient and auto-clears after a few seconds.
    pub status_set_at: Option<std::time::Instant>,
    /// When true, next draw should run; cleared after draw. Redraw on any state change.
    pub needs_redraw: bool,
    /// Cached line list; invalidated by push/toggle/resize.
    pub cached_lines: Vec<ratatui::text::Line<'static>>,
    /// True when cached_lines is stale.
    pub cache_dirty: bool,
    /// Last content height from previous draw (for scroll clamp).
    pub last_content_height: usize,
    /// Last viewport height from previous draw (for scroll clamp).
    pub last_viewport_height: usize,
    /// Current screen (main chat or debug traces).
    pub screen: Screen,
    /// Debug trace lines (runtime log events). Newest at end.
    pub trace_lines: Vec<String>,
    /// Scroll offset for debug trace view (lines scrolled up).
    pub trace_scroll: usize,
}

impl Default for TuiState {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            input_buffer: String::new(),
            input_cursor: 0,
            scroll: 0,
            auto_scroll: true,
            palette: TriagePalette::dark(),
            locale: Locale::default(),
            clock: ClockFormat::default(),
            status: String::new(),
            has_error: false,
            status_set_at: None,
            needs_redraw: true,
            cached_lines: Vec::new(),
            cache_dirty: true,
            last_content_height: 0,
            last_viewport_height: 0,
            screen: Screen::Main,
            trace_lines: Vec::new(),
            trace_scroll: 0,
        }
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_appearance(appearance: Appearance) -> Self {
        Self {
            palette: TriagePalette::for_appearance(appearance),
            ..Self::default()
        }
    }

    /// Push a message, wrapped by role. Assistant items start with the
    /// raw-response panel closed.
    pub fn push_message(&mut self, message: ChatMessage) {
        let item = match message.role {
            Role::User => ChatItem::User(message),
            Role::Assistant => ChatItem::Assistant(AssistantItem::new(message)),
        };
        self.messages.push(item);
        self.cache_dirty = true;
        self.needs_redraw = true;
        if self.auto_scroll {
            self.scroll = 0;
        }
    }

    /// Push a user message built from text, stamped with the current time.
    pub fn push_user(&mut self, text: String) {
        let message = ChatMessage::user(text).with_timestamp(now_stamp());
        self.push_message(message);
    }

    /// Push an assistant message built from text and an optional raw payload.
    pub fn push_assistant(&mut self, text: String, raw: Option<String>) {
        let mut message = ChatMessage::assistant(text).with_timestamp(now_stamp());
        message.raw_model_response = raw;
        self.push_message(message);
    }

    /// Toggle the raw-response panel on the most recent assistant item that
    /// has one. Returns true if an item was toggled.
    pub fn toggle_last_details(&mut self) -> bool {
        for item in self.messages.iter_mut().rev() {
            if let ChatItem::Assistant(ai) = item {
                if ai.message.has_details() {
                    ai.toggle_details();
                    self.cache_dirty = true;
                    self.needs_redraw = true;
                    return true;
                }
            }
        }
        false
    }

    /// Toggle the raw-response panel on the item at `index`, if it is an
    /// assistant item with a payload. Returns true if toggled.
    pub fn toggle_details_at(&mut self, index: usize) -> bool {
        if let Some(ChatItem::Assistant(ai)) = self.messages.get_mut(index) {
            if ai.message.has_details() {
                ai.toggle_details();
                self.cache_dirty = true;
                self.needs_redraw = true;
                return true;
            }
        }
        false
    }

    /// Text of the most recent assistant message, for clipboard copy.
    pub fn last_assistant_text(&self) -> Option<&str> {
        self.messages.iter().rev().find_map(|item| match item {
            ChatItem::Assistant(ai) => Some(ai.message.content.as_str()),
            _ => None,
        })
    }

    /// Input buffer: insert character at cursor.
    pub fn input_insert(&mut self, c: char) {
        self.input_buffer.insert(self.input_cursor, c);
        self.input_cursor += c.len_utf8();
        self.needs_redraw = true;
    }

    /// Input buffer: delete character before cursor (UTF-8 safe).
    pub fn input_backspace(&mut self) {
        if self.input_cursor == 0 {
            return;
        }
        let mut start = self.input_cursor - 1;
        while start > 0 && (self.input_buffer.as_bytes()[start] & 0xC0) == 0x80 {
            start -= 1;
        }
        self.input_buffer.drain(start..self.input_cursor);
        self.input_cursor = start;
        self.needs_redraw = true;
    }

    /// Input buffer: delete character at cursor (forward delete, UTF-8 safe).
    pub fn input_delete(&mut self) {
        if self.input_cursor >= self.input_buffer.len() {
            return;
        }
        let mut end = self.input_cursor + 1;
        while end < self.input_buffer.len() && (self.input_buffer.as_bytes()[end] & 0xC0) == 0x80 {
            end += 1;
        }
        self.input_buffer.drain(self.input_cursor..end);
        self.needs_redraw = true;
    }

    /// Move cursor left one character (UTF-8 safe).
    pub fn input_cursor_left(&mut self) {
        if self.input_cursor == 0 {
            return;
        }
        let mut start = self.input_cursor - 1;
        while start > 0 && (self.input_buffer.as_bytes()[start] & 0xC0) == 0x80 {
            start -= 1;
        }
        self.input_cursor = start;
        self.needs_redraw = true;
    }

    /// Move cursor right one character (UTF-8 safe).
    pub fn input_cursor_right(&mut self) {
        if self.input_cursor >= self.input_buffer.len() {
            return;
        }
        let mut end = self.input_cursor + 1;
        while end < self.input_buffer.len() && (self.input_buffer.as_bytes()[end] & 0xC0) == 0x80 {
            end += 1;
        }
        self.input_cursor = end;
        self.needs_redraw = true;
    }

    /// Cursor to start of input.
    pub fn input_cursor_home(&mut self) {
        self.input_cursor = 0;
        self.needs_redraw = true;
    }

    /// Cursor to end of input; if empty, enable auto_scroll and scroll to bottom.
    pub fn input_cursor_end(&mut self) {
        self.input_cursor = self.input_buffer.len();
        if self.input_buffer.is_empty() {
            self.auto_scroll = true;
            self.scroll = 0;
        }
        self.needs_redraw = true;
    }

    /// Clear entire input buffer (Ctrl+U).
    pub fn input_clear_line(&mut self) {
        self.input_buffer.clear();
        self.input_cursor = 0;
        self.needs_redraw = true;
    }

    /// Delete from cursor to end of line (Ctrl+K).
    pub fn input_kill_to_end(&mut self) {
        self.input_buffer.truncate(self.input_cursor);
        self.needs_redraw = true;
    }

    /// Input buffer: clear and return current line (for submit).
    pub fn input_take(&mut self) -> String {
        let line = std::mem::take(&mut self.input_buffer);
        self.input_cursor = 0;
        self.needs_redraw = true;
        line
    }

    /// Scroll up (increase offset); disables auto_scroll.
    pub fn scroll_up(&mut self, delta: usize) {
        self.auto_scroll = false;
        self.scroll = self.scroll.saturating_add(delta);
        self.needs_redraw = true;
    }

    /// Scroll down (decrease offset); re-enables auto_scroll when at bottom.
    pub fn scroll_down(&mut self, delta: usize) {
        self.scroll = self.scroll.saturating_sub(delta);
        if self.scroll == 0 {
            self.auto_scroll = true;
        }
        self.needs_redraw = true;
    }

    /// Append a line to the debug trace buffer (for Ctrl+D debug screen).
    /// Drops oldest if over capacity.
    pub fn push_trace_line(&mut self, line: String) {
        self.trace_lines.push(line);
        if self.trace_lines.len() > MAX_TRACE_LINES {
            self.trace_lines.drain(0..self.trace_lines.len() - MAX_TRACE_LINES);
        }
        self.needs_redraw = true;
    }

    /// Scroll the trace view up.
    pub fn trace_scroll_up(&mut self, delta: usize) {
        self.trace_scroll = self.trace_scroll.saturating_add(delta);
        self.needs_redraw = true;
    }

    /// Scroll the trace view down.
    pub fn trace_scroll_down(&mut self, delta: usize) {
        self.trace_scroll = self.trace_scroll.saturating_sub(delta);
        self.needs_redraw = true;
    }
}

/// RFC 3339 stamp for newly created messages (local wall time with offset).
fn now_stamp() -> String {
    chrono::Local::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assistant_with_raw(text: &str, raw: &str) -> ChatMessage {
        ChatMessage::assistant(text).with_raw_response(raw)
    }

    #[test]
    fn push_message_wraps_by_role() {
        let mut s = TuiState::new();
        s.push_message(ChatMessage::user("hi"));
        s.push_message(ChatMessage::assistant("hello"));
        assert!(matches!(&s.messages[0], ChatItem::User(_)));
        assert!(matches!(&s.messages[1], ChatItem::Assistant(_)));
    }

    #[test]
    fn assistant_items_start_closed() {
        let mut s = TuiState::new();
        s.push_message(assistant_with_raw("hello", "raw"));
        assert!(matches!(&s.messages[0], ChatItem::Assistant(ai) if !ai.details_visible));
    }

    #[test]
    fn toggle_last_details_round_trip() {
        let mut s = TuiState::new();
        s.push_message(assistant_with_raw("hello", "raw"));
        assert!(s.toggle_last_details());
        assert!(matches!(&s.messages[0], ChatItem::Assistant(ai) if ai.details_visible));
        assert!(s.toggle_last_details());
        assert!(matches!(&s.messages[0], ChatItem::Assistant(ai) if !ai.details_visible));
    }

    #[test]
    fn toggle_last_details_skips_items_without_payload() {
        let mut s = TuiState::new();
        s.push_message(assistant_with_raw("first", "raw"));
        s.push_message(ChatMessage::assistant("second"));
        assert!(s.toggle_last_details());
        assert!(matches!(&s.messages[0], ChatItem::Assistant(ai) if ai.details_visible));
        assert!(matches!(&s.messages[1], ChatItem::Assistant(ai) if !ai.details_visible));
    }

    #[test]
    fn toggle_last_details_none_available() {
        let mut s = TuiState::new();
        s.push_message(ChatMessage::user("hi"));
        s.push_message(ChatMessage::assistant("no payload"));
        assert!(!s.toggle_last_details());
    }

    #[test]
    fn disclosure_state_is_per_item() {
        let mut s = TuiState::new();
        s.push_message(assistant_with_raw("a", "raw-a"));
        s.push_message(assistant_with_raw("b", "raw-b"));
        assert!(s.toggle_details_at(1));
        assert!(matches!(&s.messages[0], ChatItem::Assistant(ai) if !ai.details_visible));
        assert!(matches!(&s.messages[1], ChatItem::Assistant(ai) if ai.details_visible));
    }

    #[test]
    fn toggle_details_at_user_item_is_noop() {
        let mut s = TuiState::new();
        let mut msg = ChatMessage::user("hi");
        msg.raw_model_response = Some("carried but gated".to_string());
        s.push_message(msg);
        assert!(!s.toggle_details_at(0));
    }

    #[test]
    fn last_assistant_text_finds_most_recent() {
        let mut s = TuiState::new();
        s.push_message(ChatMessage::assistant("first"));
        s.push_message(ChatMessage::user("q"));
        s.push_message(ChatMessage::assistant("second"));
        assert_eq!(s.last_assistant_text(), Some("second"));
    }

    #[test]
    fn push_user_stamps_timestamp() {
        let mut s = TuiState::new();
        s.push_user("hi".to_string());
        assert!(matches!(&s.messages[0], ChatItem::User(m) if m.timestamp.is_some()));
    }

    #[test]
    fn cache_dirty_on_push_and_toggle() {
        let mut s = TuiState::new();
        s.cache_dirty = false;
        s.push_message(assistant_with_raw("a", "raw"));
        assert!(s.cache_dirty);
        s.cache_dirty = false;
        s.toggle_last_details();
        assert!(s.cache_dirty);
    }

    #[test]
    fn input_insert_ascii() {
        let mut s = TuiState::new();
        s.input_insert('a');
        s.input_insert('b');
        assert_eq!(s.input_buffer, "ab");
        assert_eq!(s.input_cursor, 2);
    }

    #[test]
    fn input_insert_utf8_arabic() {
        let mut s = TuiState::new();
        s.input_insert('م');
        s.input_insert('ر');
        assert_eq!(s.input_buffer, "مر");
        assert_eq!(s.input_cursor, "مر".len());
    }

    #[test]
    fn input_backspace_at_end() {
        let mut s = TuiState::new();
        s.input_buffer = "hi".to_string();
        s.input_cursor = 2;
        s.input_backspace();
        assert_eq!(s.input_buffer, "h");
        assert_eq!(s.input_cursor, 1);
    }

    #[test]
    fn input_backspace_at_zero_no_op() {
        let mut s = TuiState::new();
        s.input_buffer = "x".to_string();
        s.input_cursor = 0;
        s.input_backspace();
        assert_eq!(s.input_buffer, "x");
    }

    #[test]
    fn input_take_returns_and_resets() {
        let mut s = TuiState::new();
        s.input_buffer = "hello".to_string();
        s.input_cursor = 5;
        let line = s.input_take();
        assert_eq!(line, "hello");
        assert!(s.input_buffer.is_empty());
        assert_eq!(s.input_cursor, 0);
    }

    #[test]
    fn input_cursor_multibyte() {
        let mut s = TuiState::new();
        s.input_insert('你');
        s.input_insert('好');
        s.input_cursor_left();
        assert_eq!(s.input_cursor, "你".len());
        s.input_cursor_left();
        assert_eq!(s.input_cursor, 0);
        s.input_cursor_right();
        assert_eq!(s.input_cursor, "你".len());
    }

    #[test]
    fn input_delete_multibyte() {
        let mut s = TuiState::new();
        s.input_buffer = "你好".to_string();
        s.input_cursor = 0;
        s.input_delete();
        assert_eq!(s.input_buffer, "好");
    }

    #[test]
    fn input_clear_and_kill() {
        let mut s = TuiState::new();
        s.input_buffer = "hello world".to_string();
        s.input_cursor = 5;
        s.input_kill_to_end();
        assert_eq!(s.input_buffer, "hello");
        s.input_clear_line();
        assert!(s.input_buffer.is_empty());
        assert_eq!(s.input_cursor, 0);
    }

    #[test]
    fn scroll_up_disables_auto_scroll() {
        let mut s = TuiState::new();
        s.auto_scroll = true;
        s.scroll_up(3);
        assert!(!s.auto_scroll);
        assert_eq!(s.scroll, 3);
    }

    #[test]
    fn scroll_down_to_zero_enables_auto_scroll() {
        let mut s = TuiState::new();
        s.auto_scroll = false;
        s.scroll = 1;
        s.scroll_down(1);
        assert_eq!(s.scroll, 0);
        assert!(s.auto_scroll);
    }

    #[test]
    fn auto_scroll_off_preserves_scroll() {
        let mut s = TuiState::new();
        s.auto_scroll = false;
        s.scroll = 10;
        s.push_user("hi".to_string());
        assert_eq!(s.scroll, 10);
    }

    #[test]
    fn trace_lines_capped() {
        let mut s = TuiState::new();
        for i in 0..2500 {
            s.push_trace_line(format!("line {}", i));
        }
        assert!(s.trace_lines.len() <= MAX_TRACE_LINES);
    }
}
