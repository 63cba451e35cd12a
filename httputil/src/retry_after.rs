//! `Retry-After` header values.
//!
//! ref: https://www.rfc-editor.org/rfc/rfc9110#section-10.2.3
//!
//! The value is either a number of seconds or an HTTP-date.

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};

pub const RETRY_AFTER: &str = "Retry-After";

// RFC 850 and asctime are obsolete but still accepted by recipients.
const RFC850_FORMAT: &str = "%A, %d-%b-%y %H:%M:%S GMT";
const ASCTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Parses a `Retry-After` value relative to the current time.
pub fn parse_retry_after(value: &str) -> Option<TimeDelta> {
    parse_retry_after_at(value, Utc::now())
}

/// Parses a `Retry-After` value relative to `now`.
///
/// Returns `None` when the value is empty or malformed. A negative number of
/// seconds is clamped to zero. For an HTTP-date the distance between the
/// date and `now` is returned.
pub fn parse_retry_after_at(value: &str, now: DateTime<Utc>) -> Option<TimeDelta> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(seconds) = value.parse::<i64>() {
        return Some(TimeDelta::try_seconds(seconds.max(0)).unwrap_or(TimeDelta::MAX));
    }

    let date = parse_http_date(value)?;
    Some((date - now).abs())
}

/// Parses an HTTP-date in IMF-fixdate, RFC 850 or asctime form.
pub fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc2822(value) {
        return Some(date.with_timezone(&Utc));
    }
    [RFC850_FORMAT, ASCTIME_FORMAT]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}

/// Formats `delay` as a `Retry-After` value in whole seconds. Negative delays
/// are rendered as `0`.
pub fn format_retry_after(delay: TimeDelta) -> String {
    delay.num_seconds().max(0).to_string()
}
