//! Triage palette: semantic color roles for the chat view.
//!
//! Roles cover surfaces, borders, text levels, per-role message accents, and
//! window chrome. Message rendering reads `user_accent` / `assistant_accent`
//! instead of picking colors, so role treatment follows the theme.

use super::Appearance;
use super::rgb::Rgb;

/// One full palette for an appearance (dark or light). All colors are semantic roles.
#[derive(Clone, Debug, PartialEq)]
pub struct TriagePalette {
    // --- Surfaces
    /// App / window background.
    pub background: Rgb,
    /// Panels, status bar, input strip.
    pub surface_background: Rgb,

    // --- Borders
    pub border: Rgb,
    pub border_focused: Rgb,

    // --- Text
    pub text: Rgb,
    pub text_muted: Rgb,
    pub text_placeholder: Rgb,
    pub text_disabled: Rgb,

    // --- Message roles
    /// Avatar glyph and bubble border for user messages.
    pub user_accent: Rgb,
    /// Avatar glyph and bubble border for assistant messages.
    pub assistant_accent: Rgb,
    /// Disclosure panel text and dotted border (muted, behind the bubble).
    pub detail_foreground: Rgb,

    // --- Semantic
    pub accent: Rgb,
    pub danger: Rgb,
    pub success: Rgb,
    pub warning: Rgb,

    // --- Chrome
    pub status_bar_background: Rgb,
    pub scrollbar_thumb: Rgb,
    pub scrollbar_track: Rgb,
}

impl TriagePalette {
    /// Default dark palette: deep teal surfaces, warm user accent, cool assistant accent.
    pub fn dark() -> Self {
        Self {
            background: Rgb(10, 12, 14),
            surface_background: Rgb(17, 21, 24),
            border: Rgb(32, 40, 46),
            border_focused: Rgb(86, 182, 194),
            text: Rgb(214, 222, 228),
            text_muted: Rgb(96, 110, 120),
            text_placeholder: Rgb(96, 110, 120),
            text_disabled: Rgb(68, 78, 86),
            user_accent: Rgb(240, 180, 100),
            assistant_accent: Rgb(86, 182, 194),
            detail_foreground: Rgb(130, 144, 154),
            accent: Rgb(86, 182, 194),
            danger: Rgb(235, 100, 115),
            success: Rgb(125, 200, 140),
            warning: Rgb(235, 190, 110),
            status_bar_background: Rgb(17, 21, 24),
            scrollbar_thumb: Rgb(72, 84, 94),
            scrollbar_track: Rgb(20, 25, 29),
        }
    }

    /// Default light palette.
    pub fn light() -> Self {
        Self {
            background: Rgb(252, 252, 250),
            surface_background: Rgb(244, 245, 244),
            border: Rgb(222, 226, 228),
            border_focused: Rgb(32, 128, 140),
            text: Rgb(32, 40, 46),
            text_muted: Rgb(120, 132, 140),
            text_placeholder: Rgb(150, 160, 166),
            text_disabled: Rgb(186, 194, 198),
            user_accent: Rgb(186, 120, 36),
            assistant_accent: Rgb(32, 128, 140),
            detail_foreground: Rgb(106, 118, 126),
            accent: Rgb(32, 128, 140),
            danger: Rgb(196, 64, 80),
            success: Rgb(56, 148, 92),
            warning: Rgb(184, 134, 48),
            status_bar_background: Rgb(244, 245, 244),
            scrollbar_thumb: Rgb(186, 194, 198),
            scrollbar_track: Rgb(238, 240, 240),
        }
    }

    /// Palette for the given appearance.
    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Dark => Self::dark(),
            Appearance::Light => Self::light(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_accents_differ() {
        for palette in [TriagePalette::dark(), TriagePalette::light()] {
            assert_ne!(palette.user_accent, palette.assistant_accent);
        }
    }

    #[test]
    fn for_appearance_selects_palette() {
        assert_eq!(TriagePalette::for_appearance(Appearance::Dark), TriagePalette::dark());
        assert_eq!(TriagePalette::for_appearance(Appearance::Light), TriagePalette::light());
    }
}
