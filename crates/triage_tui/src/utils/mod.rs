//! Shared utilities for the triage TUI.
//!
//! - **[constants]** — Spacing, padding, and sizing constants.
//! - **[layout]** — Rect padding, right-alignment math, scroll clamp.
//! - **[format]** — Word wrap (newline-preserving) and truncation.

mod constants;
mod format;
mod layout;

pub use constants::*;
pub use format::{truncate_ellipsis, truncate_with_suffix, wrap_preserving_newlines};
pub use layout::{horizontal_padding, horizontal_padding_with, right_pad_width, scroll_clamp};
