//! Date/time formatting for display, en-US style.

use chrono::{DateTime, Local, TimeZone, Utc};

const TIME_FMT: &str = "%-I:%M:%S %p";
const DATE_FMT: &str = "%-m/%-d/%Y";
const DATE_TIME_FMT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// `1:05:09 PM` in the given timezone.
pub fn format_time_in<Tz>(instant: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    instant.with_timezone(tz).format(TIME_FMT).to_string()
}

/// `1/15/2024` in the given timezone.
pub fn format_date_in<Tz>(instant: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    instant.with_timezone(tz).format(DATE_FMT).to_string()
}

/// `1/15/2024, 1:05:09 PM` in the given timezone.
pub fn format_date_time_in<Tz>(instant: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    instant.with_timezone(tz).format(DATE_TIME_FMT).to_string()
}

/// Time of day in the local timezone.
pub fn format_time(instant: &DateTime<Utc>) -> String {
    format_time_in(instant, &Local)
}

/// Calendar date in the local timezone.
pub fn format_date(instant: &DateTime<Utc>) -> String {
    format_date_in(instant, &Local)
}

/// Date and time in the local timezone.
pub fn format_date_time(instant: &DateTime<Utc>) -> String {
    format_date_time_in(instant, &Local)
}
