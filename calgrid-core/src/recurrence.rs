//! Recurrence expansion for event definitions.
//!
//! Expands a definition into the ordered list of calendar-day occurrences
//! that fall inside an inclusive date window. All comparisons are
//! calendar-date comparisons; the expander never looks at time-of-day.
//!
//! Monthly policy: a month that lacks the anchor day-of-month (e.g. an
//! event anchored on the 31st, expanded over April) produces no occurrence
//! for that month. Anchor days are never clamped to the month's last day.

use chrono::{Datelike, NaiveDate};

use crate::error::{CalGridError, CalGridResult};
use crate::event::{EventDefinition, Frequency, Occurrence};

/// Expand `definition` into its occurrences within `[window_start, window_end]`.
///
/// Returns occurrences in ascending `display_date` order, at most one per
/// calendar day. A recurring definition with no recognized frequency, or a
/// weekly definition with an empty weekday set, yields zero occurrences
/// rather than an error. `window_start > window_end` is a caller contract
/// violation and fails fast with `InvalidWindow`.
pub fn expand(
    definition: &EventDefinition,
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> CalGridResult<Vec<Occurrence>> {
    if window_start > window_end {
        return Err(CalGridError::InvalidWindow {
            start: window_start,
            end: window_end,
        });
    }

    if !definition.is_recurring {
        let day = definition.start_date;
        if day >= window_start && day <= window_end {
            return Ok(vec![Occurrence::for_day(definition, day)]);
        }
        return Ok(Vec::new());
    }

    let Some(frequency) = definition.frequency else {
        return Ok(Vec::new());
    };

    let anchor_day = definition.anchor_day();
    let first = definition.start_date.max(window_start);
    let last = definition.end_date.min(window_end);

    let mut occurrences = Vec::new();
    let mut day = first;
    while day <= last {
        let matches = match frequency {
            Frequency::Daily => true,
            Frequency::Weekly => {
                let index = day.weekday().num_days_from_sunday() as u8;
                definition.days_of_week.contains(index)
            }
            Frequency::Monthly => day.day() == anchor_day,
        };

        if matches {
            occurrences.push(Occurrence::for_day(definition, day));
        }

        day = match day.succ_opt() {
            Some(next) => next,
            None => break, // end of representable time
        };
    }

    Ok(occurrences)
}
