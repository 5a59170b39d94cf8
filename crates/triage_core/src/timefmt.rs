//! Clock-time formatting for message timestamps.
//!
//! All locale/timezone policy for time labels lives here so layout code never
//! touches chrono directly. Wall time is taken from the timestamp's own offset;
//! there is no conversion to the local timezone.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Hour convention for rendered clock times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClockFormat {
    /// "13:05"
    #[default]
    #[serde(rename = "24h")]
    TwentyFourHour,
    /// "1:05 PM"
    #[serde(rename = "12h")]
    TwelveHour,
}

impl ClockFormat {
    fn strftime(self) -> &'static str {
        match self {
            ClockFormat::TwentyFourHour => "%H:%M",
            ClockFormat::TwelveHour => "%-I:%M %p",
        }
    }
}

/// Label rendered for timestamps that fail to parse. Malformed input is shown,
/// not suppressed, so a bad backend timestamp stays visible.
pub const INVALID_DATE_LABEL: &str = "invalid date";

/// Format an ISO-ish timestamp as an hour:minute label.
///
/// Accepts RFC 3339 ("2024-01-01T13:05:00Z", with or without offset) and naive
/// "YYYY-MM-DDTHH:MM:SS" / "YYYY-MM-DD HH:MM:SS" forms. Unparseable input
/// yields [INVALID_DATE_LABEL].
pub fn format_clock_time(raw: &str, clock: ClockFormat) -> String {
    match parse_timestamp(raw) {
        Some(t) => t.format(clock.strftime()).to_string(),
        None => INVALID_DATE_LABEL.to_string(),
    }
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    None
}
