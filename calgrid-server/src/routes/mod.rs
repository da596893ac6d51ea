pub mod events;
pub mod months;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use calgrid_core::CalGridError;
use serde::Serialize;

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error type returned by request handlers.
///
/// Core errors map onto HTTP statuses here; handlers can also reject bad
/// input directly with `bad_request`.
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<CalGridError> for AppError {
    fn from(err: CalGridError) -> Self {
        let status = match err {
            CalGridError::EventNotFound(_) => StatusCode::NOT_FOUND,
            CalGridError::InvalidWindow { .. } | CalGridError::InvalidMonth(_) => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        AppError {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, "{}", self.message);
        }
        let body = Json(ErrorResponse {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}
