//! Layout components built from [crate::utils] and [crate::theme].
//!
//! - **[split]** — Split the screen into header, body, footer.
//! - **[style]** — Map palette [Rgb](crate::theme::Rgb) to ratatui styles.
//! - **[head]** — Header strip and styled header line.
//! - **[chats]** — Chat area layout and scroll helpers.
//! - **[input]** — Input bar layout and block.
//! - **[shortcut]** — Shortcut hint line (below input).

mod chats;
mod head;
mod input;
mod shortcut;
mod split;
mod style;

pub use chats::{CHAT_MESSAGE_SPACING, ChatsLayout};
pub use head::{HEADER_TITLE, HeadLayout, block_for_head, header_line, render_header};
pub use input::{INPUT_ICON, INPUT_PADDING_H, block_for_input_bordered};
pub use shortcut::{shortcut_inner_rect, shortcut_line};
pub use split::{FOOTER_HEIGHT, HEADER_HEIGHT, MainSplits, main_splits, vertical_split};
pub use style::{
    background_style, border_focused_style, border_style, danger_style, rgb_to_color,
    success_style, text_muted_style, text_style, warning_style,
};
