//! # utc
//!
//! A lightweight instant stripped of time zone awareness: the number of
//! nanoseconds elapsed since 1970-01-01T00:00:00Z, stored in an `i64`.
//!
//! Known limitation: only instants between the years 1677 and 2262 can be
//! represented. Conversions from wider `chrono` values fail with
//! [`Error::OutOfRange`]; arithmetic saturates.

use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Sub};
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, TimeDelta};
use flatkey::DecodeText;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub mod error;
pub mod format;

pub use error::{Error, Result};
pub use format::{format_date_long, format_date_short, format_time_short};

const NANOS_PER_DAY: i64 = 24 * 60 * 60 * 1_000_000_000;

/// Nanoseconds since the Unix epoch, in UTC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Utc(i64);

fn delta_nanos(d: TimeDelta) -> i64 {
    d.num_nanoseconds()
        .unwrap_or(if d < TimeDelta::zero() { i64::MIN } else { i64::MAX })
}

impl Utc {
    pub const fn from_nanos(nanos: i64) -> Self {
        Utc(nanos)
    }

    pub const fn nanos(self) -> i64 {
        self.0
    }

    /// Converts a `chrono` instant.
    pub fn from_datetime<Tz: chrono::TimeZone>(t: &DateTime<Tz>) -> Result<Self> {
        t.timestamp_nanos_opt().map(Utc).ok_or(Error::OutOfRange)
    }

    /// The current time.
    pub fn now() -> Self {
        let now = chrono::Utc::now();
        Utc(now.timestamp_nanos_opt().unwrap_or(i64::MAX))
    }

    /// The current time plus `d`.
    pub fn after(d: TimeDelta) -> Self {
        Utc::now() + d
    }

    /// The latest instant of `list`, or the zero instant when it is empty.
    pub fn max(list: &[Utc]) -> Utc {
        list.iter().copied().max().unwrap_or_default()
    }

    /// The earliest instant of `list`, or the zero instant when it is empty.
    pub fn min(list: &[Utc]) -> Utc {
        list.iter().copied().min().unwrap_or_default()
    }

    /// Parses an RFC 3339 timestamp, with optional fractional seconds and
    /// any offset.
    pub fn parse(s: &str) -> Result<Self> {
        let t = DateTime::parse_from_rfc3339(s)?;
        Utc::from_datetime(&t)
    }

    /// Reports whether `self` is the Unix epoch.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn to_datetime(self) -> DateTime<chrono::Utc> {
        DateTime::from_timestamp_nanos(self.0)
    }

    /// RFC 3339 with whole seconds, e.g. `2027-12-20T14:00:00Z`.
    pub fn rfc3339(self) -> String {
        self.to_datetime().to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    /// RFC 3339 with the fractional seconds needed to represent the instant,
    /// trailing zeros removed, e.g. `2027-12-20T14:00:00.5Z`.
    pub fn rfc3339_nano(self) -> String {
        let full = self.to_datetime().to_rfc3339_opts(SecondsFormat::Nanos, true);
        match full.split_once('.') {
            Some((seconds, fraction)) => {
                let digits = fraction.trim_end_matches('Z').trim_end_matches('0');
                if digits.is_empty() {
                    format!("{seconds}Z")
                } else {
                    format!("{seconds}.{digits}Z")
                }
            }
            None => full,
        }
    }

    pub fn add(self, d: TimeDelta) -> Self {
        Utc(self.0.saturating_add(delta_nanos(d)))
    }

    pub fn sub(self, d: TimeDelta) -> Self {
        Utc(self.0.saturating_sub(delta_nanos(d)))
    }

    /// The duration `self - u`.
    pub fn distance(self, u: Utc) -> TimeDelta {
        TimeDelta::nanoseconds(self.0.saturating_sub(u.0))
    }

    /// Rounds down to a multiple of `precision` since the epoch, saturating
    /// at the earliest representable instant. A non-positive precision
    /// leaves the instant unchanged.
    pub fn floor(self, precision: TimeDelta) -> Self {
        let p = delta_nanos(precision);
        if p <= 0 {
            return self;
        }
        Utc(self.0.saturating_sub(self.0.rem_euclid(p)))
    }

    /// Rounds up to a multiple of `precision` since the epoch. A
    /// non-positive precision leaves the instant unchanged.
    pub fn ceil(self, precision: TimeDelta) -> Self {
        let p = delta_nanos(precision);
        if p <= 0 {
            return self;
        }
        match self.0.rem_euclid(p) {
            0 => self,
            rem => Utc(self.0.saturating_sub(rem).saturating_add(p)),
        }
    }

    /// Midnight of the same day.
    pub fn beginning_of_day(self) -> Self {
        self.floor(TimeDelta::nanoseconds(NANOS_PER_DAY))
    }

    /// The last nanosecond of the same day.
    pub fn end_of_day(self) -> Self {
        Utc(self.beginning_of_day().0.saturating_add(NANOS_PER_DAY - 1))
    }
}

impl Add<TimeDelta> for Utc {
    type Output = Utc;

    fn add(self, d: TimeDelta) -> Utc {
        Utc::add(self, d)
    }
}

impl Sub<TimeDelta> for Utc {
    type Output = Utc;

    fn sub(self, d: TimeDelta) -> Utc {
        Utc::sub(self, d)
    }
}

impl Sub<Utc> for Utc {
    type Output = TimeDelta;

    fn sub(self, u: Utc) -> TimeDelta {
        self.distance(u)
    }
}

impl<Tz: chrono::TimeZone> TryFrom<DateTime<Tz>> for Utc {
    type Error = Error;

    fn try_from(t: DateTime<Tz>) -> Result<Self> {
        Utc::from_datetime(&t)
    }
}

impl From<Utc> for DateTime<chrono::Utc> {
    fn from(u: Utc) -> Self {
        u.to_datetime()
    }
}

impl Display for Utc {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rfc3339_nano())
    }
}

impl FromStr for Utc {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Utc::parse(s)
    }
}

impl DecodeText for Utc {
    type Error = Error;

    fn decode_text(&mut self, text: &str) -> Result<()> {
        *self = Utc::parse(text)?;
        Ok(())
    }
}

impl Serialize for Utc {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Utc {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Utc::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeDelta};
    use flatkey::DecodeText;
    use rstest::rstest;

    use super::{Error, Utc};

    fn utc(s: &str) -> Utc {
        Utc::parse(s).unwrap()
    }

    #[rstest(
        input,
        expected,
        case("2006-01-02T15:04:05Z", "2006-01-02T15:04:05Z"),
        case("2017-03-09T00:00:00Z", "2017-03-09T00:00:00Z"),
        case("2053-03-09T00:00:00Z", "2053-03-09T00:00:00Z"),
        case("1970-01-01T00:00:00Z", "1970-01-01T00:00:00Z"),
        case("1900-12-31T00:00:00Z", "1900-12-31T00:00:00Z"),
        case("2018-01-17T00:00:00+01:00", "2018-01-16T23:00:00Z"),
        case("2027-12-20T14:00:00.500Z", "2027-12-20T14:00:00.5Z"),
        case("2027-12-20T14:00:00.000000001Z", "2027-12-20T14:00:00.000000001Z")
    )]
    fn test_parse(input: &str, expected: &str) {
        assert_eq!(expected, utc(input).to_string());
    }

    #[rstest(input, case("20"), case(""), case("2027-12-20"), case("2027-13-20T14:00:00Z"))]
    fn test_parse_invalid(input: &str) {
        assert!(matches!(Utc::parse(input), Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_out_of_range() {
        assert_eq!(Err(Error::OutOfRange), Utc::parse("1500-01-01T00:00:00Z"));
    }

    #[test]
    fn test_datetime_conversion() {
        let t = DateTime::parse_from_rfc3339("2006-01-02T15:04:05Z").unwrap();
        let u = Utc::try_from(t).unwrap();
        assert_eq!(t, u.to_datetime());
        assert_eq!("2006-01-02T15:04:05Z", u.rfc3339());
    }

    #[test]
    fn test_max_min() {
        let list = [
            utc("2006-01-02T15:04:05Z"),
            utc("2017-03-09T00:00:00Z"),
            utc("2053-03-09T00:00:00Z"),
        ];
        assert_eq!(utc("2053-03-09T00:00:00Z"), Utc::max(&list));
        assert_eq!(utc("2006-01-02T15:04:05Z"), Utc::min(&list));
        assert_eq!(Utc::default(), Utc::max(&[]));
        assert_eq!(Utc::default(), Utc::min(&[]));
        assert!(Utc::max(&[]).is_zero());
    }

    #[rstest(
        input,
        delta,
        expected,
        case("2006-01-02T15:04:05Z", TimeDelta::hours(1), "2006-01-02T16:04:05Z"),
        case("2017-03-09T23:59:59Z", TimeDelta::seconds(1), "2017-03-10T00:00:00Z"),
        case("2053-03-09T00:00:00Z", TimeDelta::minutes(1), "2053-03-09T00:01:00Z")
    )]
    fn test_add_sub(input: &str, delta: TimeDelta, expected: &str) {
        assert_eq!(utc(expected), utc(input) + delta);
        assert_eq!(utc(input), utc(expected) - delta);
        assert_eq!(delta, utc(expected).distance(utc(input)));
        assert_eq!(delta, utc(expected) - utc(input));
    }

    #[test]
    fn test_add_saturates() {
        assert_eq!(Utc::from_nanos(i64::MAX), Utc::from_nanos(i64::MAX - 1) + TimeDelta::hours(1));
        assert_eq!(Utc::from_nanos(i64::MIN), Utc::from_nanos(i64::MIN + 1) - TimeDelta::hours(1));
    }

    #[rstest(
        input,
        precision,
        floor,
        ceil,
        case("2017-03-09T12:34:56Z", TimeDelta::hours(1), "2017-03-09T12:00:00Z", "2017-03-09T13:00:00Z"),
        case("2017-03-09T12:00:00Z", TimeDelta::hours(1), "2017-03-09T12:00:00Z", "2017-03-09T12:00:00Z"),
        case("2017-03-09T12:34:56.789Z", TimeDelta::seconds(1), "2017-03-09T12:34:56Z", "2017-03-09T12:34:57Z"),
        case("1969-12-31T23:30:00Z", TimeDelta::hours(1), "1969-12-31T23:00:00Z", "1970-01-01T00:00:00Z")
    )]
    fn test_floor_ceil(input: &str, precision: TimeDelta, floor: &str, ceil: &str) {
        assert_eq!(utc(floor), utc(input).floor(precision));
        assert_eq!(utc(ceil), utc(input).ceil(precision));
    }

    #[test]
    fn test_floor_non_positive_precision() {
        let u = utc("2017-03-09T12:34:56Z");
        assert_eq!(u, u.floor(TimeDelta::zero()));
        assert_eq!(u, u.ceil(TimeDelta::seconds(-1)));
    }

    #[rstest(
        input,
        begin,
        end,
        case("2017-03-09T12:34:56Z", "2017-03-09T00:00:00Z", "2017-03-09T23:59:59.999999999Z"),
        case("2017-03-09T00:00:00Z", "2017-03-09T00:00:00Z", "2017-03-09T23:59:59.999999999Z"),
        case("1969-07-20T20:17:40Z", "1969-07-20T00:00:00Z", "1969-07-20T23:59:59.999999999Z")
    )]
    fn test_day_bounds(input: &str, begin: &str, end: &str) {
        assert_eq!(utc(begin), utc(input).beginning_of_day());
        assert_eq!(utc(end), utc(input).end_of_day());
    }

    #[test]
    fn test_rounding_saturates_at_representable_bounds() {
        let earliest = Utc::from_nanos(i64::MIN);
        assert_eq!(earliest, earliest.beginning_of_day());
        assert_eq!(earliest, earliest.floor(TimeDelta::seconds(1)));
        assert_eq!(earliest, (Utc::default() - TimeDelta::MAX).beginning_of_day());

        let latest = Utc::from_nanos(i64::MAX);
        assert_eq!(latest, latest.ceil(TimeDelta::seconds(1)));
        assert_eq!(latest, latest.end_of_day());
    }

    #[test]
    fn test_after_is_in_the_future() {
        let before = Utc::now();
        assert!(Utc::after(TimeDelta::hours(1)) > before);
    }

    #[test]
    fn test_decode_text() {
        let mut u = Utc::default();
        u.decode_text("2027-12-20T14:00:00Z").unwrap();
        assert_eq!(utc("2027-12-20T14:00:00Z"), u);
        assert!(u.decode_text("20").is_err());
    }

    #[rstest(input, case("2006-01-02T15:04:05Z"), case("2053-03-09T00:00:00.25Z"))]
    fn test_serde(input: &str) {
        let u = utc(input);
        let json = serde_json::to_string(&u).unwrap();
        assert_eq!(format!("\"{input}\""), json);
        assert_eq!(u, serde_json::from_str::<Utc>(&json).unwrap());
    }
}
