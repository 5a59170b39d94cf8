//! UI strings per locale. The product ships Arabic first; English is the fallback.

use serde::{Deserialize, Serialize};

/// Supported UI locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    /// Parse "en"/"ar" (case-insensitive); anything else falls back to English.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "ar" => Locale::Ar,
            _ => Locale::En,
        }
    }

    /// Disclosure control label when the panel is hidden.
    pub fn show_details(self) -> &'static str {
        match self {
            Locale::En => "Show details",
            Locale::Ar => "عرض التفاصيل",
        }
    }

    /// Disclosure control label when the panel is visible.
    pub fn hide_details(self) -> &'static str {
        match self {
            Locale::En => "Hide details",
            Locale::Ar => "إخفاء التفاصيل",
        }
    }

    /// Input bar placeholder.
    pub fn input_placeholder(self) -> &'static str {
        match self {
            Locale::En => "Describe your symptoms…",
            Locale::Ar => "صف الأعراض التي تشعر بها…",
        }
    }

    /// Empty-state hint shown before the first message.
    pub fn empty_state(self) -> &'static str {
        match self {
            Locale::En => "Type a message to begin.",
            Locale::Ar => "اكتب رسالة للبدء.",
        }
    }

    /// Header status when idle.
    pub fn status_ready(self) -> &'static str {
        match self {
            Locale::En => "Ready",
            Locale::Ar => "جاهز",
        }
    }
}
