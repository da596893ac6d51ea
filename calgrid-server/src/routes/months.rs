//! Month-grid occurrence endpoint.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use calgrid_core::{Occurrence, recurrence, window::month_window};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/months/{year}/{month_index}/occurrences",
        get(month_occurrences),
    )
}

/// GET /months/:year/:month_index/occurrences
///
/// `month_index` is 0-based (0 = January), matching the month-grid helper.
/// Expands every stored definition over that month's window and returns the
/// merged occurrences, ascending by display date (ties broken by event id
/// so the grid is stable across requests).
async fn month_occurrences(
    State(state): State<AppState>,
    Path((year, month_index)): Path<(i32, u32)>,
) -> Result<Json<Vec<Occurrence>>, AppError> {
    let (window_start, window_end) = month_window(year, month_index)?;

    let mut occurrences = Vec::new();
    for definition in state.store.list()? {
        occurrences.extend(recurrence::expand(&definition, window_start, window_end)?);
    }

    occurrences.sort_by(|a, b| {
        a.display_date
            .cmp(&b.display_date)
            .then_with(|| a.event_id.cmp(&b.event_id))
    });

    Ok(Json(occurrences))
}
