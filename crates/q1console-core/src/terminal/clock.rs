//! Local wall-clock timestamps

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};

/// Day-month-year, 24-hour clock
pub const TIME_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Current local time rendered with [`TIME_FORMAT`]
pub fn timestamp() -> String {
    format_time(&Local::now())
}

pub fn format_time<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.format(TIME_FORMAT).to_string()
}
