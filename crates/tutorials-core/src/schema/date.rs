//! Coercion of front matter values into calendar dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::IssueKind;
use crate::front_matter::RawValue;

/// Local date-time layouts accepted besides plain dates and RFC 3339.
const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Coerces text, TOML date-times or epoch milliseconds into a date.
///
/// Date-times with an offset are normalized to UTC before the date is taken.
pub(super) fn coerce_date(value: &RawValue) -> Result<NaiveDate, IssueKind> {
    match value {
        RawValue::String(s) | RawValue::Datetime(s) => {
            parse_date_text(s.trim()).ok_or_else(|| IssueKind::InvalidDate(s.clone()))
        }
        RawValue::Integer(ms) => DateTime::<Utc>::from_timestamp_millis(*ms)
            .map(|dt| dt.date_naive())
            .ok_or_else(|| IssueKind::InvalidDate(ms.to_string())),
        other => Err(IssueKind::WrongType {
            expected: "date",
            found: other.type_name(),
        }),
    }
}

fn parse_date_text(s: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}
