use chrono::{Duration, NaiveDate, NaiveDateTime};
use clinidash::utils::datetime::{format_human_date_from, format_ymd, is_same_day, is_within_window, parse_date};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(d: NaiveDate, h: u32, min: u32) -> NaiveDateTime {
    d.and_hms_opt(h, min, 0).unwrap()
}

#[test]
fn test_parse_and_format_ymd() {
    let parsed = parse_date("2025-10-25").unwrap();
    assert_eq!(parsed, date(2025, 10, 25));
    assert_eq!(format_ymd(parsed), "2025-10-25");
    assert!(parse_date("25/10/2025").is_err());
}

#[test]
fn test_format_human_date_relative_words() {
    // 2026-03-02 is a Monday
    let today = date(2026, 3, 2);
    assert_eq!(format_human_date_from(today, today), "today");
    assert_eq!(format_human_date_from(date(2026, 3, 3), today), "tomorrow");
    assert_eq!(format_human_date_from(date(2026, 3, 1), today), "yesterday");
    assert_eq!(format_human_date_from(date(2026, 3, 6), today), "next Friday");
    assert_eq!(format_human_date_from(date(2026, 2, 26), today), "last Thursday");
    assert_eq!(format_human_date_from(date(2026, 3, 16), today), "in 14 days");
    assert_eq!(format_human_date_from(date(2026, 2, 20), today), "10 days ago");
}

#[test]
fn test_format_human_date_far_dates() {
    let today = date(2026, 3, 2);
    assert_eq!(format_human_date_from(date(2026, 8, 15), today), "Aug 15");
    assert_eq!(format_human_date_from(date(2025, 10, 25), today), "Oct 25, 2025");
}

#[test]
fn test_same_day_ignores_time_of_day() {
    let today = date(2026, 3, 2);
    assert!(is_same_day(today, at(today, 0, 0)));
    assert!(is_same_day(today, at(today, 23, 59)));
    assert!(!is_same_day(date(2026, 3, 3), at(today, 23, 59)));
}

#[test]
fn test_within_window_boundaries() {
    let today = date(2026, 3, 2);
    let window = Duration::days(7);
    let now = at(today, 10, 0);

    // The start of today is already in the past
    assert!(!is_within_window(today, now, window));
    assert!(is_within_window(date(2026, 3, 3), now, window));
    assert!(is_within_window(date(2026, 3, 9), now, window));
    assert!(!is_within_window(date(2026, 3, 10), now, window));

    // At midnight the window end lands exactly on a day start
    let midnight = at(today, 0, 0);
    assert!(is_within_window(date(2026, 3, 9), midnight, window));
    assert!(!is_within_window(today, midnight, window));
}

#[test]
fn test_huge_window_does_not_overflow() {
    let now = at(date(2026, 3, 2), 10, 0);
    assert!(!is_within_window(date(2026, 3, 5), now, Duration::MAX));
    assert!(!is_within_window(date(2026, 3, 1), now, Duration::MAX));
}
