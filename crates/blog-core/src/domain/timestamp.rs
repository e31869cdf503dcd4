//! Timestamp helpers.
//!
//! Posts store their timestamps as text and hand them back untouched; chrono
//! is only used to produce new ones and to compare them.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

/// Layout SQLite uses for `CURRENT_TIMESTAMP` column defaults.
const SQLITE_DEFAULT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current time as ISO-8601, e.g. `2024-05-01T12:00:00.000Z`.
pub fn now() -> String {
    format(&Utc::now())
}

/// Render as ISO-8601 with millisecond precision and a `Z` suffix.
pub fn format(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse either an RFC 3339 string or SQLite's default timestamp layout.
pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, SQLITE_DEFAULT_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn format_uses_millis_and_zulu() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(format(&ts), "2024-05-01T12:00:00.000Z");
    }

    #[test]
    fn now_is_iso_and_parseable() {
        let stamp = now();
        assert!(stamp.ends_with('Z'));
        assert_eq!(stamp.len(), "2024-05-01T12:00:00.000Z".len());
        assert!(parse(&stamp).is_some());
    }

    #[test]
    fn parses_sqlite_default_layout() {
        let ts = parse("2024-05-01 12:30:45").unwrap();
        assert_eq!(format(&ts), "2024-05-01T12:30:45.000Z");
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse("yesterday").is_none());
        assert!(parse("").is_none());
    }
}
