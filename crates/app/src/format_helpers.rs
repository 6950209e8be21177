//! Display formatting for backend timestamps.

use chrono::{DateTime, NaiveDateTime};

const HUMAN_DATETIME: &str = "%b %-d, %Y %-I:%M %p";

/// Format an ISO-8601 timestamp as "Jan 20, 2026 9:35 PM", in the offset it
/// was written with. Unparseable input is returned unchanged.
pub fn format_datetime_human(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(HUMAN_DATETIME).to_string();
    }
    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(dt) => dt.format(HUMAN_DATETIME).to_string(),
        Err(_) => raw.to_string(),
    }
}
