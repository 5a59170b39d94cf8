//! Triage theme: semantic color palette for the chat TUI.
//!
//! Colors are semantic roles (surfaces, borders, text, per-role accents), never
//! raw values at call sites, so swapping the palette restyles every component.
//!
//! # Example
//!
//! ```ignore
//! use triage_tui::theme::{Appearance, TriagePalette};
//!
//! let palette = TriagePalette::for_appearance(Appearance::Dark);
//! let text = palette.text.tuple(); // (r, g, b) for ratatui
//! ```

mod appearance;
mod palette;
mod rgb;

pub use appearance::Appearance;
pub use palette::TriagePalette;
pub use rgb::Rgb;
