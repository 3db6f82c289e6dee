//! Upcoming-birthday calculation
//!
//! Pure calendar arithmetic. Nothing here reads the clock; the caller
//! supplies "today" so results are reproducible.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::value_objects::Birthday;

/// Days beyond today still covered by the greeting window
const WINDOW_DAYS: i64 = 6;

/// Result of running the calculator for one birthday
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreetingOutcome {
    /// The birthday's next occurrence; a birthday today counts as next
    pub next_occurrence: NaiveDate,
    /// Whether the occurrence falls within the 7-day window starting today
    pub is_within_week: bool,
    /// The day to deliver the greeting; weekends shift to the following Monday
    pub greeting_date: NaiveDate,
}

impl GreetingOutcome {
    /// Next occurrence rendered as `DD.MM.YYYY`
    #[must_use]
    pub fn next_occurrence_text(&self) -> String {
        self.next_occurrence.format(Birthday::DATE_FORMAT).to_string()
    }

    /// Greeting date rendered as `DD.MM.YYYY`
    #[must_use]
    pub fn greeting_date_text(&self) -> String {
        self.greeting_date.format(Birthday::DATE_FORMAT).to_string()
    }
}

/// One entry of the weekly greeting list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingEntry {
    /// Contact name as entered
    pub name: String,
    /// Greeting date rendered as `DD.MM.YYYY`
    pub congratulation_date: String,
}

impl GreetingEntry {
    /// Build an entry for a contact and its computed greeting date
    #[must_use]
    pub fn new(name: impl Into<String>, greeting_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            congratulation_date: greeting_date.format(Birthday::DATE_FORMAT).to_string(),
        }
    }
}

/// Compute next occurrence, window membership, and greeting date for one
/// birthday
///
/// The next occurrence is this year's anniversary unless (month, day) has
/// already passed, in which case it is next year's. A birthday exactly on
/// `today` stays in the current year. Saturday and Sunday occurrences are
/// greeted on the following Monday.
#[must_use]
pub fn compute_greeting(birthday: Birthday, today: NaiveDate) -> GreetingOutcome {
    let date = birthday.date();
    let year = if (today.month(), today.day()) > (date.month(), date.day()) {
        today.year() + 1
    } else {
        today.year()
    };
    let next_occurrence = occurrence_in(year, date.month(), date.day());
    let is_within_week = next_occurrence - today <= Duration::days(WINDOW_DAYS);
    let greeting_date = roll_off_weekend(next_occurrence);

    GreetingOutcome {
        next_occurrence,
        is_within_week,
        greeting_date,
    }
}

/// Place (month, day) in the given year
///
/// Feb 29 lands on Mar 1 in years without a leap day.
fn occurrence_in(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or_default()
}

/// Shift Saturday and Sunday to the following Monday
fn roll_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => {
            date + Duration::days(i64::from(7 - date.weekday().num_days_from_monday()))
        }
        _ => date,
    }
}
