use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};

use crate::chart::error::ChartError;

pub const DEFAULT_UTC_OFFSET: &str = "+00:00";

/// Resolve a local date, clock time and fixed UTC offset into a UTC instant.
///
/// The offset is taken at face value: `+03:00` means local time runs three
/// hours ahead of UTC, so the result is `local - 3h`. Seconds in the clock
/// time are dropped.
pub fn resolve(date: &str, time: &str, utc_offset: &str) -> Result<DateTime<Utc>, ChartError> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|e| ChartError::invalid(format!("invalid date '{}': {}", date, e)))?;
    let time = parse_clock_time(time)?;
    let offset = parse_utc_offset(utc_offset)?;

    let local = NaiveDateTime::new(date, time);
    let utc = local
        .checked_sub_signed(Duration::seconds(i64::from(offset.local_minus_utc())))
        .ok_or_else(|| ChartError::invalid("date out of range"))?;

    Ok(utc.and_utc())
}

fn parse_clock_time(time: &str) -> Result<NaiveTime, ChartError> {
    let trimmed = time.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map(|t| t.with_second(0).unwrap_or(t))
        .map_err(|e| ChartError::invalid(format!("invalid time '{}': {}", time, e)))
}

/// Parse `±HH:MM`, `±HHMM` or `±HH`. A missing sign means ahead of UTC.
pub fn parse_utc_offset(offset: &str) -> Result<FixedOffset, ChartError> {
    let err = || ChartError::invalid(format!("invalid UTC offset '{}'", offset));

    let s = offset.trim();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };

    let (hours, minutes) = match rest.split_once(':') {
        Some((h, m)) => (h, m),
        None if rest.len() == 4 && rest.is_ascii() => rest.split_at(2),
        None => (rest, "0"),
    };

    let all_digits = |v: &str| !v.is_empty() && v.len() <= 2 && v.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(hours) || !all_digits(minutes) {
        return Err(err());
    }

    let hours: i32 = hours.parse().map_err(|_| err())?;
    let minutes: i32 = minutes.parse().map_err(|_| err())?;
    if hours >= 24 || minutes >= 60 {
        return Err(err());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(err)
}
