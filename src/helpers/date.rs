//! Date helper functions

use chrono::{NaiveDate, NaiveDateTime};

/// Parse a human-readable publication date
///
/// Accepts the long English form used by post data ("April 1, 2025") as well
/// as the usual numeric forms.
///
/// # Examples
/// ```ignore
/// parse_display_date("March 15, 2025") // -> Some(2025-03-15)
/// ```
pub fn parse_display_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    let formats = [
        "%B %d, %Y",
        "%B %d %Y",
        "%d %B %Y",
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%m/%d/%Y",
    ];

    for fmt in formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    // Timestamps carry a date too
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    None
}

/// Format a date in ISO 8601 form (`YYYY-MM-DD`)
pub fn iso_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
