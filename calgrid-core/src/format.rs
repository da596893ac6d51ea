//! Display formatting helpers for dates and weekday sets.

use chrono::NaiveDate;

use crate::weekday::{WEEKDAY_ABBREVS, WeekdaySet};

/// Format a date as fixed-width `YYYY-MM-DD`, suitable for round-tripping
/// into date-input fields.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format a weekday set as a comma-joined list of abbreviated names,
/// e.g. `"Mon, Wed, Fri"`. The empty set yields an empty string.
pub fn format_weekdays(days: &WeekdaySet) -> String {
    days.iter()
        .map(|index| WEEKDAY_ABBREVS[usize::from(index)])
        .collect::<Vec<_>>()
        .join(", ")
}
