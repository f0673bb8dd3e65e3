//! ISO-8601 text ⇄ date-time conversion.
//!
//! Parsing never fails loudly: anything that does not look like an ISO-8601
//! timestamp comes back as `None`, which callers treat as the invalid date.

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

pub type DateTime = chrono::DateTime<FixedOffset>;

const LOCAL_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Parse an ISO-8601 timestamp.
///
/// Accepted, in order:
/// - RFC 3339 (`2014-07-01T10:20:30Z`, `2014-07-01T10:20:30.5+02:00`)
/// - the same with a signed, wider year (`+10000-01-01T00:00:00Z`)
/// - no offset (`2014-07-01T10:20:30`), taken as UTC
/// - plain date (`2014-07-01`), midnight UTC
pub fn parse_iso8601(s: &str) -> Option<DateTime> {
    let s = s.trim();
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }
    if let Ok(dt) = s.parse::<DateTime>() {
        return Some(dt);
    }
    for fmt in LOCAL_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc().fixed_offset());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc().fixed_offset());
    }
    None
}

/// Format as RFC 3339, keeping sub-second digits when there are any.
///
/// A zero offset is written as `Z`. Offsets that are not whole minutes cannot
/// be spelled in RFC 3339, so those instants are written in UTC.
pub fn format_iso8601(dt: &DateTime) -> String {
    if dt.offset().local_minus_utc() % 60 != 0 {
        return dt.with_timezone(&Utc).to_rfc3339_opts(SecondsFormat::AutoSi, true);
    }
    dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    #[test]
    fn parses_utc_timestamp() {
        let dt = parse_iso8601("2014-07-01T10:20:30Z").unwrap();
        assert_eq!(dt.year(), 2014);
        assert_eq!(dt.hour(), 10);
        assert_eq!(dt.offset().local_minus_utc(), 0);
    }

    #[test]
    fn parses_offset_and_keeps_it() {
        let dt = parse_iso8601("2014-07-01T10:20:30+02:00").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), 2 * 3600);
        assert_eq!(format_iso8601(&dt), "2014-07-01T10:20:30+02:00");
    }

    #[test]
    fn timestamp_without_offset_is_utc() {
        let dt = parse_iso8601("2014-07-01T10:20:30").unwrap();
        assert_eq!(format_iso8601(&dt), "2014-07-01T10:20:30Z");
    }

    #[test]
    fn plain_date_is_midnight() {
        let dt = parse_iso8601("2014-07-01").unwrap();
        assert_eq!(format_iso8601(&dt), "2014-07-01T00:00:00Z");
    }

    #[test]
    fn garbage_is_none() {
        assert!(parse_iso8601("yesterday").is_none());
        assert!(parse_iso8601("").is_none());
        assert!(parse_iso8601("2014-13-01").is_none());
    }

    #[test]
    fn subseconds_survive_round_trip() {
        let dt = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 5, 6, 7, 8, 9)
            .unwrap()
            .with_nanosecond(123_000_000)
            .unwrap();
        let text = format_iso8601(&dt);
        assert_eq!(text, "2024-05-06T07:08:09.123Z");
        assert_eq!(parse_iso8601(&text), Some(dt));

        let dt = dt.with_nanosecond(123_456_789).unwrap();
        assert_eq!(parse_iso8601(&format_iso8601(&dt)), Some(dt));
    }

    #[test]
    fn whole_seconds_have_no_fraction() {
        let dt = parse_iso8601("2020-02-29T23:59:01Z").unwrap();
        assert_eq!(format_iso8601(&dt), "2020-02-29T23:59:01Z");
    }

    #[test]
    fn five_digit_year_round_trips() {
        let dt = Utc.with_ymd_and_hms(10000, 1, 1, 0, 0, 0).unwrap().fixed_offset();
        let text = format_iso8601(&dt);
        assert_eq!(text, "+10000-01-01T00:00:00Z");
        assert_eq!(parse_iso8601(&text), Some(dt));
    }

    #[test]
    fn sub_minute_offset_is_written_in_utc() {
        let dt = FixedOffset::east_opt(30)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 1, 12, 0, 30)
            .unwrap();
        let text = format_iso8601(&dt);
        assert_eq!(text, "2024-01-01T12:00:00Z");
        assert_eq!(parse_iso8601(&text), Some(dt));
    }
}
