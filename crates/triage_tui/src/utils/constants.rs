//! TUI spacing and sizing constants.
//!
//! Use these when building layout or rendering so padding and spacing stay
//! uniform across components.

/// Horizontal padding in characters (each side).
pub const HORIZONTAL_PADDING: u16 = 2;

/// Left indent for continuation lines and indented content (two spaces).
pub const LEFT_PADDING: &str = "  ";

/// Blank lines between message blocks.
pub const MESSAGE_SPACING_LINES: usize = 1;

/// Max trace lines kept for the runtime-logs screen (older lines dropped).
pub const MAX_TRACE_LINES: usize = 2000;
