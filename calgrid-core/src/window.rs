//! Month window computation.
//!
//! The presentation layer calls the expander once per visible month; this
//! module produces the inclusive first-day/last-day bounds for that call.

use chrono::NaiveDate;

use crate::error::{CalGridError, CalGridResult};

/// Inclusive calendar-day bounds of a month.
///
/// `month_index` is 0-based (0 = January), matching how month grids are
/// usually indexed by callers. Returns `(first_day, last_day)` of the
/// month; `InvalidMonth` for an index past 11 or an unrepresentable year.
pub fn month_window(year: i32, month_index: u32) -> CalGridResult<(NaiveDate, NaiveDate)> {
    if month_index > 11 {
        return Err(CalGridError::InvalidMonth(month_index));
    }
    let month = month_index + 1;

    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(CalGridError::InvalidMonth(month_index))?;

    // Last day of the month: day before the first of the next month.
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .ok_or(CalGridError::InvalidMonth(month_index))?;

    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_january_is_index_zero() {
        let (start, end) = month_window(2024, 0).unwrap();
        assert_eq!(start, day(2024, 1, 1));
        assert_eq!(end, day(2024, 1, 31));
    }

    #[test]
    fn test_february_leap_year() {
        let (start, end) = month_window(2024, 1).unwrap();
        assert_eq!(start, day(2024, 2, 1));
        assert_eq!(end, day(2024, 2, 29));
    }

    #[test]
    fn test_february_common_year() {
        let (_, end) = month_window(2023, 1).unwrap();
        assert_eq!(end, day(2023, 2, 28));
    }

    #[test]
    fn test_december_wraps_to_next_year() {
        let (start, end) = month_window(2024, 11).unwrap();
        assert_eq!(start, day(2024, 12, 1));
        assert_eq!(end, day(2024, 12, 31));
    }

    #[test]
    fn test_month_index_out_of_range() {
        assert!(matches!(
            month_window(2024, 12),
            Err(CalGridError::InvalidMonth(12))
        ));
    }
}
