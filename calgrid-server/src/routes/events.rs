//! Event definition endpoints: CRUD plus ICS export.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderName, StatusCode, header},
    routing::get,
};
use calgrid_core::{EventDefinition, Frequency, WeekdaySet, format, ics};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route(
            "/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
        .route("/events/{id}/ics", get(export_event_ics))
}

/// Request body for creating or replacing an event definition.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    pub title: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_recurring: bool,
    pub frequency: Option<Frequency>,
    #[serde(default)]
    pub days_of_week: WeekdaySet,
}

impl EventPayload {
    /// The form-layer validation the expander itself does not perform.
    fn validate(&self) -> Result<(), AppError> {
        if self.start_date > self.end_date {
            return Err(AppError::bad_request("startDate must not be after endDate"));
        }
        if self.is_recurring
            && self.frequency == Some(Frequency::Weekly)
            && self.days_of_week.is_empty()
        {
            return Err(AppError::bad_request(
                "A weekly event needs at least one weekday",
            ));
        }
        Ok(())
    }

    /// Build a definition with a placeholder id; the store assigns or keeps
    /// the real one.
    fn into_definition(self) -> EventDefinition {
        EventDefinition {
            id: String::new(),
            title: self.title,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            is_recurring: self.is_recurring,
            frequency: self.frequency,
            days_of_week: self.days_of_week,
        }
    }
}

/// GET /events - List all event definitions
async fn list_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<EventDefinition>>, AppError> {
    Ok(Json(state.store.list()?))
}

/// GET /events/:id - Fetch one event definition
async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EventDefinition>, AppError> {
    Ok(Json(state.store.get(&id)?))
}

/// POST /events - Create a new event definition
async fn create_event(
    State(state): State<AppState>,
    Json(payload): Json<EventPayload>,
) -> Result<(StatusCode, Json<EventDefinition>), AppError> {
    payload.validate()?;
    let created = state.store.create(payload.into_definition())?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /events/:id - Replace an event definition
async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<EventPayload>,
) -> Result<Json<EventDefinition>, AppError> {
    payload.validate()?;
    let updated = state.store.update(&id, payload.into_definition())?;
    Ok(Json(updated))
}

/// DELETE /events/:id - Delete an event definition
async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.store.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /events/:id/ics - Export one definition as an iCalendar block
async fn export_event_ics(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<([(HeaderName, String); 2], String), AppError> {
    let definition = state.store.get(&id)?;
    let content = ics::generate_ics(&definition)?;

    // Date-prefixed filename, e.g. 2024-03-20__team-sync.ics
    let filename = format!(
        "{}__{}.ics",
        format::format_date(definition.start_date),
        slugify(&definition.title)
    );

    Ok((
        [
            (
                header::CONTENT_TYPE,
                "text/calendar; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        content,
    ))
}

/// Convert a title to a filename-safe slug
fn slugify(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .take(50)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(is_recurring: bool, frequency: Option<Frequency>, days: &[u8]) -> EventPayload {
        EventPayload {
            title: "Gym".to_string(),
            description: None,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            is_recurring,
            frequency,
            days_of_week: WeekdaySet::from_indices(days.iter().copied()),
        }
    }

    #[test]
    fn test_weekly_payload_without_days_is_rejected() {
        let p = payload(true, Some(Frequency::Weekly), &[]);
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_weekly_payload_with_days_is_accepted() {
        let p = payload(true, Some(Frequency::Weekly), &[1, 3, 5]);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_daily_payload_without_days_is_accepted() {
        let p = payload(true, Some(Frequency::Daily), &[]);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_slugify_titles() {
        assert_eq!(slugify("Team Sync!"), "team-sync");
        assert_eq!(slugify("  Lunch, with friends "), "lunch-with-friends");
    }

    #[test]
    fn test_inverted_dates_are_rejected() {
        let mut p = payload(false, None, &[]);
        p.end_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(p.validate().is_err());
    }
}
