//! Date and time utility functions
//!
//! Calendar-date helpers for due dates plus human-readable formatting
//! ("yesterday", "today", "tomorrow", "in 5 days").

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// Standard date format for due dates and fixtures
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Current local wall-clock time
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// The instant a due date starts (midnight at the beginning of the day)
pub fn due_instant(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// True when `date` is the calendar day of `now`
pub fn is_same_day(date: NaiveDate, now: NaiveDateTime) -> bool {
    date == now.date()
}

/// True when the start of `date` is strictly after `now` and no later than `now + window`
pub fn is_within_window(date: NaiveDate, now: NaiveDateTime, window: Duration) -> bool {
    let instant = due_instant(date);
    now.checked_add_signed(window)
        .is_some_and(|end| instant > now && instant <= end)
}

/// Format a due date relative to `today`
pub fn format_human_date_from(date: NaiveDate, today: NaiveDate) -> String {
    let days_diff = (date - today).num_days();

    match days_diff {
        -1 => "yesterday".to_string(),
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        diff if diff > 1 && diff <= 7 => format!("next {}", weekday_name(date.weekday())),
        diff if (-7..-1).contains(&diff) => format!("last {}", weekday_name(date.weekday())),
        diff if diff > 7 && diff <= 30 => format!("in {} days", diff),
        diff if (-30..-7).contains(&diff) => format!("{} days ago", -diff),
        _ => {
            if date.year() == today.year() {
                date.format("%b %d").to_string()
            } else {
                date.format("%b %d, %Y").to_string()
            }
        }
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
