// Date checkers

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

static ISO8601_CALENDAR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[+-]?\d{4}(?:-(?:0[1-9]|1[0-2])(?:-(?:0[1-9]|[12]\d|3[01]))?|(?:0[1-9]|1[0-2])(?:0[1-9]|[12]\d|3[01]))?",
        r"(?:[T ](?:[01]\d|2[0-4])(?::?[0-5]\d(?::?[0-5]\d(?:[.,]\d+)?)?)?",
        r"(?:Z|[+-](?:[01]\d|2[0-3])(?::?[0-5]\d)?)?)?$",
    ))
    .unwrap()
});

static ISO8601_WEEK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?\d{4}-?W(?:0[1-9]|[1-4]\d|5[0-3])(?:-?[1-7])?$").unwrap());

static ISO8601_ORDINAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?\d{4}-?(?:00[1-9]|0[1-9]\d|[12]\d{2}|3(?:[0-5]\d|6[0-6]))$").unwrap()
});

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Parse a date or date-time in one of the common textual forms.
///
/// Zoned values are normalised to UTC; values without an offset are taken
/// as UTC already.
pub fn parse_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(zoned) = DateTime::parse_from_rfc3339(value) {
        return Some(zoned.naive_utc());
    }
    if let Ok(zoned) = DateTime::parse_from_rfc2822(value) {
        return Some(zoned.naive_utc());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

pub fn is_date(value: &str) -> bool {
    parse_date(value).is_some()
}

/// ISO 8601 calendar, week or ordinal date, optionally with a time.
pub fn is_iso8601(value: &str) -> bool {
    ISO8601_CALENDAR_REGEX.is_match(value)
        || ISO8601_WEEK_REGEX.is_match(value)
        || ISO8601_ORDINAL_REGEX.is_match(value)
}

/// A date strictly before `reference`, or before now when none is given.
pub fn is_before(value: &str, reference: Option<NaiveDateTime>) -> bool {
    let reference = reference.unwrap_or_else(|| Utc::now().naive_utc());
    parse_date(value).is_some_and(|date| date < reference)
}

/// A date strictly after `reference`, or after now when none is given.
pub fn is_after(value: &str, reference: Option<NaiveDateTime>) -> bool {
    let reference = reference.unwrap_or_else(|| Utc::now().naive_utc());
    parse_date(value).is_some_and(|date| date > reference)
}
