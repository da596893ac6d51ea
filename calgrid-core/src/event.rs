//! Event definition and occurrence types.
//!
//! An `EventDefinition` is the persisted record describing one (possibly
//! recurring) event. An `Occurrence` is one concrete calendar-day instance
//! of a definition, derived on demand by the `recurrence` module and never
//! stored.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::weekday::WeekdaySet;

/// How often a recurring event repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    /// Parse a stored frequency string.
    ///
    /// Unrecognized values become `None` rather than an error; a recurring
    /// definition without a recognized frequency expands to zero
    /// occurrences. Lenient on purpose.
    pub fn parse(s: &str) -> Option<Frequency> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Some(Frequency::Daily),
            "weekly" => Some(Frequency::Weekly),
            "monthly" => Some(Frequency::Monthly),
            _ => None,
        }
    }

    /// Stable lowercase form used in storage and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
        }
    }
}

/// A calendar event definition, recurring or not.
///
/// All date fields are calendar dates: no time-of-day, no timezone. For a
/// non-recurring event `start_date` is the single occurrence's day; for a
/// recurring event it anchors the earliest possible occurrence (and the
/// day-of-month pattern for monthly events) while `end_date` is the last
/// day on which occurrences may exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDefinition {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_recurring: bool,
    /// Meaningful only when `is_recurring` is true. `None` means the stored
    /// frequency was missing or unrecognized.
    pub frequency: Option<Frequency>,
    /// Meaningful only when `frequency` is `Weekly`.
    #[serde(default)]
    pub days_of_week: WeekdaySet,
}

impl EventDefinition {
    /// Day-of-month of `start_date`, used to match monthly occurrences.
    pub fn anchor_day(&self) -> u32 {
        self.start_date.day()
    }
}

/// One concrete calendar-day instance of an event definition.
///
/// Derived transiently for a requested window, discarded after rendering or
/// export. Carries a value-copy of the definition's display-relevant fields
/// plus the day it falls on; it has no identity of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    pub event_id: String,
    pub title: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub display_date: NaiveDate,
}

impl Occurrence {
    /// Build the occurrence of `definition` that falls on `day`.
    pub fn for_day(definition: &EventDefinition, day: NaiveDate) -> Self {
        Occurrence {
            event_id: definition.id.clone(),
            title: definition.title.clone(),
            description: definition.description.clone(),
            start_date: definition.start_date,
            end_date: definition.end_date,
            display_date: day,
        }
    }
}
