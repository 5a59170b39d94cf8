//! Message rendering for the TUI. Uses crate::theme for colors.
//!
//! Each renderer is a pure function from a message (plus palette, width, and
//! for assistant messages the disclosure state) to styled lines. Orientation
//! mirrors by role: assistant messages align leading with the avatar glyph and
//! bubble border on the left; user messages align trailing with the element
//! order reversed.
//!
//! - **user** — User message lines (right-aligned, no disclosure ever).
//! - **assistant** — Assistant message lines plus disclosure control and panel.

pub mod assistant;
pub mod user;

use ratatui::text::Line;

use triage_core::{ChatMessage, ClockFormat, Role};

use crate::locale::Locale;
use crate::theme::TriagePalette;

/// Render any message by role. `visible` is the disclosure state and only
/// affects assistant messages that carry a raw payload.
pub fn message_lines(
    msg: &ChatMessage,
    visible: bool,
    palette: &TriagePalette,
    width: usize,
    locale: Locale,
    clock: ClockFormat,
) -> Vec<Line<'static>> {
    match msg.role {
        Role::User => user::user_message_lines(msg, palette, width, clock),
        Role::Assistant => {
            assistant::assistant_message_lines(msg, visible, palette, width, locale, clock)
        }
    }
}
