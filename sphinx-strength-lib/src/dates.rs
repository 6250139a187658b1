//src/dates.rs
use crate::schedule::{CalendarDay, WorkoutSchedule};
use chrono::{Datelike, Duration, NaiveDate, Utc};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid date key: '{0}'. Expected YYYY-MM-DD.")]
    InvalidKey(String),
}

const SHORT_DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Canonical `YYYY-MM-DD` key used for schedule lookups and day equality.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Validated construction of a date from its canonical key. String input is
/// the only place an invalid date can enter the system, so this is the whole
/// error surface of the calendar unit.
pub fn parse_date_key(key: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(key.trim(), "%Y-%m-%d")
        .map_err(|_| DateError::InvalidKey(key.to_string()))
}

/// Short day name (Mon, Tue, etc.)
pub fn short_day_name(date: NaiveDate) -> &'static str {
    SHORT_DAY_NAMES[date.weekday().num_days_from_sunday() as usize]
}

/// Full month name.
pub fn month_name(date: NaiveDate) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}

/// Display string for the planner header, e.g. "August 2025".
pub fn formatted_month_year(date: NaiveDate) -> String {
    format!("{} {}", month_name(date), date.year())
}

pub fn is_same_day(a: NaiveDate, b: NaiveDate) -> bool {
    // NaiveDate equality is exactly canonical-key equality.
    a == b
}

pub fn is_today(date: NaiveDate) -> bool {
    is_same_day(date, Utc::now().date_naive())
}

/// Returns `date` shifted by `days` (which may be negative). Saturates at the
/// representable range rather than wrapping.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days)).unwrap_or(date)
}

/// Monday of the week containing `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let days_back = i64::from(date.weekday().num_days_from_monday());
    add_days(date, -days_back)
}

/// Builds the 3-day window around `center`: one `CalendarDay` per offset in
/// {-1, 0, +1}, with the workout looked up by canonical key. Deterministic
/// given identical inputs.
pub fn three_day_span(
    center: NaiveDate,
    selected: NaiveDate,
    schedule: &WorkoutSchedule,
) -> [CalendarDay; 3] {
    let today = Utc::now().date_naive();

    [-1i64, 0, 1].map(|offset| {
        let date = add_days(center, offset);
        CalendarDay {
            date,
            day_of_week: short_day_name(date),
            day_number: date.day(),
            is_today: is_same_day(date, today),
            is_selected: is_same_day(date, selected),
            workout: schedule.workout_for(date).cloned(),
        }
    })
}
