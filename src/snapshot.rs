//! Date snapshots and permissive date coercion
//!
//! A `DateSnapshot` is the set of fields extracted once per format call.
//! `DateInput` is the coercion layer for the `date` argument: anything that
//! cannot be read as a point in time falls back to the current instant.

use chrono::{
    DateTime, Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc,
};
use std::time::SystemTime;

/// Date/time fields extracted once per format call and never mutated.
///
/// Offset-carrying inputs keep their embedded offset; everything else is
/// read in the host-local zone, so `offset_minutes` is whatever the time
/// API reports, sign preserved (positive = ahead of UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSnapshot {
    pub year: i32,
    /// 1-12
    pub month: u32,
    /// 1-31
    pub day: u32,
    /// 0 = Sunday .. 6 = Saturday
    pub weekday: u32,
    /// 0-23
    pub hour24: u32,
    /// 1-12, hours 0 and 12 both map to 12
    pub hour12: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
    pub offset_minutes: i32,
}

impl DateSnapshot {
    pub fn new(dt: &DateTime<FixedOffset>) -> Self {
        let hour = dt.hour();
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            weekday: dt.weekday().num_days_from_sunday(),
            hour24: hour,
            hour12: match hour % 12 {
                0 => 12,
                h => h,
            },
            minute: dt.minute(),
            second: dt.second(),
            millisecond: dt.timestamp_subsec_millis(),
            offset_minutes: dt.offset().local_minus_utc() / 60,
        }
    }
}

/// A date argument for the format engine.
///
/// There is no error path for bad dates: an out-of-range timestamp or an
/// unparseable string resolves to the current instant.
#[derive(Debug, Clone, Default)]
pub enum DateInput {
    #[default]
    Now,
    Fixed(DateTime<FixedOffset>),
    /// Unix timestamp in seconds
    Timestamp(i64),
    Text(String),
}

impl DateInput {
    /// Resolves the input to a concrete date-time.
    pub fn resolve(&self) -> DateTime<FixedOffset> {
        match self {
            DateInput::Now => Local::now().fixed_offset(),
            DateInput::Fixed(dt) => *dt,
            DateInput::Timestamp(secs) => match DateTime::from_timestamp(*secs, 0) {
                Some(dt) => dt.with_timezone(&Local).fixed_offset(),
                None => Local::now().fixed_offset(),
            },
            DateInput::Text(text) => match parse_date_text(text) {
                Some(dt) => dt,
                None => Local::now().fixed_offset(),
            },
        }
    }

    /// Extracts the field snapshot for this input.
    pub fn snapshot(&self) -> DateSnapshot {
        DateSnapshot::new(&self.resolve())
    }
}

impl From<DateTime<FixedOffset>> for DateInput {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        DateInput::Fixed(dt)
    }
}

impl From<DateTime<Local>> for DateInput {
    fn from(dt: DateTime<Local>) -> Self {
        DateInput::Fixed(dt.fixed_offset())
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(dt: DateTime<Utc>) -> Self {
        DateInput::Fixed(dt.with_timezone(&Local).fixed_offset())
    }
}

impl From<SystemTime> for DateInput {
    fn from(time: SystemTime) -> Self {
        DateInput::Fixed(DateTime::<Local>::from(time).fixed_offset())
    }
}

impl From<i64> for DateInput {
    fn from(secs: i64) -> Self {
        DateInput::Timestamp(secs)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}

fn parse_date_text(input: &str) -> Option<DateTime<FixedOffset>> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt);
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return local_fixed(naive);
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        let naive = date.and_hms_opt(0, 0, 0)?;
        return local_fixed(naive);
    }

    if let Ok(secs) = trimmed.parse::<i64>() {
        let dt = DateTime::from_timestamp(secs, 0)?;
        return Some(dt.with_timezone(&Local).fixed_offset());
    }

    None
}

/// Reads a naive date-time in the host-local zone.
fn local_fixed(naive: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.fixed_offset())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fixed(text: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(text).unwrap()
    }

    #[test]
    fn test_snapshot_fields() {
        let snap = DateSnapshot::new(&fixed("2024-08-09T14:30:05.123+03:00"));
        assert_eq!(snap.year, 2024);
        assert_eq!(snap.month, 8);
        assert_eq!(snap.day, 9);
        assert_eq!(snap.weekday, 5, "2024-08-09 is a Friday");
        assert_eq!(snap.hour24, 14);
        assert_eq!(snap.hour12, 2);
        assert_eq!(snap.minute, 30);
        assert_eq!(snap.second, 5);
        assert_eq!(snap.millisecond, 123);
        assert_eq!(snap.offset_minutes, 180);
    }

    #[test]
    fn test_hour12_wraparound() {
        let midnight = DateSnapshot::new(&fixed("2024-08-09T00:15:00+00:00"));
        assert_eq!(midnight.hour12, 12);

        let noon = DateSnapshot::new(&fixed("2024-08-09T12:15:00+00:00"));
        assert_eq!(noon.hour12, 12);

        let afternoon = DateSnapshot::new(&fixed("2024-08-09T13:00:00+00:00"));
        assert_eq!(afternoon.hour12, 1);
    }

    #[test]
    fn test_negative_offset_minutes() {
        let snap = DateSnapshot::new(&fixed("2024-08-09T14:30:00-04:30"));
        assert_eq!(snap.offset_minutes, -270);
    }

    #[test]
    fn test_rfc3339_text_keeps_embedded_offset() {
        let input = DateInput::from("2024-08-09T14:30:05+03:00");
        let dt = input.resolve();
        assert_eq!(dt.offset().local_minus_utc(), 3 * 3600);
        assert_eq!(dt.hour(), 14);
    }

    #[test]
    fn test_timestamp_resolves_to_instant() {
        // 2022-01-01T00:00:00Z
        let input = DateInput::from(1640995200_i64);
        assert_eq!(input.resolve().timestamp(), 1640995200);
    }

    #[test]
    fn test_garbage_text_falls_back_to_now() {
        let snap = DateInput::from("not a date").snapshot();
        let now = Local::now();
        assert_eq!(snap.year, now.year());
    }

    #[test]
    fn test_out_of_range_timestamp_falls_back_to_now() {
        let snap = DateInput::from(i64::MAX).snapshot();
        let now = Local::now();
        assert_eq!(snap.year, now.year());
    }
}
