//! triage-core — shared view-model types for the triage chat client.
//!
//! [message] holds the message view model the UI renders; [timefmt] is the
//! single place locale/timezone policy for clock labels lives.

pub mod message;
pub mod timefmt;

pub use message::{ChatMessage, Role};
pub use timefmt::{ClockFormat, format_clock_time};
