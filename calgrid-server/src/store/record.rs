//! Storage record for event definitions.
//!
//! The on-disk record keeps the wire encoding inherited from the storage
//! schema: `frequency` as a plain string and `days_of_week` as a
//! comma-separated digit string (e.g. `"1,3,5"`). Both are decoded into
//! proper types the moment a record crosses into the application; nothing
//! past this module sees the encoded forms.

use calgrid_core::{EventDefinition, Frequency, WeekdaySet};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One event definition as stored in the events file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredEvent {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_of_week: Option<String>,
}

impl StoredEvent {
    /// Decode into the application type, parsing the string-encoded fields
    /// leniently: an unrecognized frequency becomes `None` and junk weekday
    /// entries are dropped.
    pub fn into_definition(self) -> EventDefinition {
        let frequency = self.frequency.as_deref().and_then(Frequency::parse);
        if self.is_recurring && frequency.is_none() {
            tracing::warn!(
                event_id = %self.id,
                stored = ?self.frequency,
                "recurring event has no recognized frequency; it will never expand"
            );
        }

        EventDefinition {
            id: self.id,
            title: self.title,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            is_recurring: self.is_recurring,
            frequency,
            days_of_week: self
                .days_of_week
                .as_deref()
                .map(WeekdaySet::parse_csv)
                .unwrap_or_default(),
        }
    }

    /// Encode an application definition back into the storage record shape.
    pub fn from_definition(definition: &EventDefinition) -> Self {
        StoredEvent {
            id: definition.id.clone(),
            title: definition.title.clone(),
            description: definition.description.clone(),
            start_date: definition.start_date,
            end_date: definition.end_date,
            is_recurring: definition.is_recurring,
            frequency: definition.frequency.map(|f| f.as_str().to_string()),
            days_of_week: if definition.days_of_week.is_empty() {
                None
            } else {
                Some(definition.days_of_week.to_csv())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record() -> StoredEvent {
        StoredEvent {
            id: "evt-1".to_string(),
            title: "Gym".to_string(),
            description: None,
            start_date: day(2024, 1, 15),
            end_date: day(2024, 12, 31),
            is_recurring: true,
            frequency: Some("weekly".to_string()),
            days_of_week: Some("1,3,5".to_string()),
        }
    }

    #[test]
    fn test_decode_weekly_record() {
        let definition = record().into_definition();
        assert_eq!(definition.frequency, Some(Frequency::Weekly));
        assert_eq!(
            definition.days_of_week.iter().collect::<Vec<_>>(),
            vec![1, 3, 5]
        );
    }

    #[test]
    fn test_decode_unknown_frequency_is_none() {
        let mut stored = record();
        stored.frequency = Some("yearly".to_string());
        let definition = stored.into_definition();
        assert_eq!(definition.frequency, None);
    }

    #[test]
    fn test_decode_missing_days_of_week_is_empty() {
        let mut stored = record();
        stored.days_of_week = None;
        let definition = stored.into_definition();
        assert!(definition.days_of_week.is_empty());
    }

    #[test]
    fn test_record_round_trip() {
        let definition = record().into_definition();
        let back = StoredEvent::from_definition(&definition);
        assert_eq!(back.frequency.as_deref(), Some("weekly"));
        assert_eq!(back.days_of_week.as_deref(), Some("1,3,5"));
        assert_eq!(back.start_date, day(2024, 1, 15));
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let json = serde_json::to_string(&record()).unwrap();
        assert!(json.contains("\"startDate\""), "got: {}", json);
        assert!(json.contains("\"daysOfWeek\":\"1,3,5\""), "got: {}", json);
    }
}
