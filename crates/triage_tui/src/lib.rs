//! triage-tui — terminal UI for the triage chat.
//!
//! Theming in `theme`; layout in `layouts`; messages in `messages`; state and
//! view in [state] and [view]. Run with [run_tui] or [run_tui_with_feed].

pub mod config;
pub mod layouts;
pub mod locale;
pub mod messages;
pub mod run;
pub mod state;
pub mod theme;
pub mod utils;
pub mod view;

pub use config::UiConfig;
pub use locale::Locale;
pub use run::{run_tui, run_tui_with_feed};
pub use state::{AssistantItem, ChatItem, Screen, TuiState};
pub use view::draw as draw_view;
