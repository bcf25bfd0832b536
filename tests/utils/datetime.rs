use chrono::{Duration, NaiveDate};
use taskdeck::utils::datetime::*;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_format_ymd() {
    assert_eq!(format_ymd(ymd(2025, 1, 15)), "2025-01-15");
}

#[test]
fn test_row_date_format() {
    assert_eq!(format_with(ymd(2024, 7, 10), ROW_DATE_FORMAT), "Wed Jul 10 2024");
}

#[test]
fn test_format_with_invalid_format_falls_back() {
    assert_eq!(format_with(ymd(2024, 7, 10), "%Q"), "2024-07-10");
}

#[test]
fn test_parse_date() {
    assert_eq!(parse_date(" 2024-07-10 ").unwrap(), ymd(2024, 7, 10));
    assert!(parse_date("2024-13-01").is_err());
    assert!(parse_date("next friday").is_err());
}

#[test]
fn test_relative_hint() {
    let today = ymd(2025, 1, 15); // Wednesday
    assert_eq!(relative_hint(today, today).as_deref(), Some("today"));
    assert_eq!(relative_hint(today + Duration::days(1), today).as_deref(), Some("tomorrow"));
    assert_eq!(relative_hint(today - Duration::days(1), today).as_deref(), Some("yesterday"));
    assert_eq!(relative_hint(ymd(2025, 1, 17), today).as_deref(), Some("next Friday"));
    assert_eq!(relative_hint(ymd(2025, 1, 13), today).as_deref(), Some("last Monday"));
    assert_eq!(relative_hint(ymd(2024, 12, 1), today).as_deref(), Some("overdue"));
    assert_eq!(relative_hint(ymd(2025, 3, 1), today), None);
}
