//! Date and time utility functions
//!
//! Parsing for the due-date form field and the display formats used by the
//! task rows ("Wed Jul 10 2024") and their relative hints ("tomorrow").

use chrono::{DateTime, Datelike, Local, NaiveDate, Utc, Weekday};

/// Date format accepted by the due-date field
pub const FORM_DATE_FORMAT: &str = "%Y-%m-%d";

/// Long date format used by task rows
pub const ROW_DATE_FORMAT: &str = "%a %b %d %Y";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
///
/// Surrounding whitespace is ignored.
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str.trim(), FORM_DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(FORM_DATE_FORMAT).to_string()
}

/// Format a date with a caller-provided chrono format string
///
/// Falls back to YYYY-MM-DD when the format string is invalid.
pub fn format_with(d: NaiveDate, format: &str) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    match write!(out, "{}", d.format(format)) {
        Ok(()) => out,
        Err(_) => format_ymd(d),
    }
}

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Current UTC timestamp, used for created/updated stamps
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Relative description of `date` compared to `today`
///
/// Dates more than a week in the past are "overdue". Returns `None` when the
/// date is more than a week ahead, so callers fall back to the absolute date.
pub fn relative_hint(date: NaiveDate, today: NaiveDate) -> Option<String> {
    let days_diff = (date - today).num_days();

    match days_diff {
        -1 => Some("yesterday".to_string()),
        0 => Some("today".to_string()),
        1 => Some("tomorrow".to_string()),
        diff if diff > 1 && diff <= 7 => Some(format!("next {}", weekday_name(date.weekday()))),
        diff if (-7..-1).contains(&diff) => Some(format!("last {}", weekday_name(date.weekday()))),
        diff if diff < -7 => Some("overdue".to_string()),
        _ => None,
    }
}

/// Get a human-readable weekday name
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
