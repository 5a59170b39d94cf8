//! User config: appearance, clock format, locale.
//!
//! Loaded from `<config dir>/triage/config.json` (e.g. `~/.config/triage/` on
//! Linux). A missing file or missing fields fall back to defaults; a file that
//! exists but fails to parse is an error.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use triage_core::ClockFormat;

use crate::locale::Locale;
use crate::theme::Appearance;

/// UI settings persisted between runs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub appearance: Appearance,
    pub clock: ClockFormat,
    pub locale: Locale,
}

impl UiConfig {
    /// Parse config from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to parse config")
    }

    /// Load from the user config file; defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        let Some(path) = config_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("failed to parse {}", path.display()))
    }
}

/// Path of the config file, when a platform config dir exists.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("triage").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_empty_object() {
        let cfg = UiConfig::from_json("{}").unwrap();
        assert_eq!(cfg.appearance, Appearance::Dark);
        assert_eq!(cfg.clock, ClockFormat::TwentyFourHour);
        assert_eq!(cfg.locale, Locale::En);
    }

    #[test]
    fn full_config_parses() {
        let cfg = UiConfig::from_json(
            r#"{"appearance":"light","clock":"12h","locale":"ar"}"#,
        )
        .unwrap();
        assert_eq!(cfg.appearance, Appearance::Light);
        assert_eq!(cfg.clock, ClockFormat::TwelveHour);
        assert_eq!(cfg.locale, Locale::Ar);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let cfg = UiConfig::from_json(r#"{"locale":"ar"}"#).unwrap();
        assert_eq!(cfg.locale, Locale::Ar);
        assert_eq!(cfg.appearance, Appearance::Dark);
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(UiConfig::from_json("{not json").is_err());
    }
}
