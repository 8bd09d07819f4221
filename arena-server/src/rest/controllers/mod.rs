pub mod compare;
pub mod results;
pub mod settings;

pub use compare::CompareController;
pub use results::ResultsController;
pub use settings::SettingsController;

use arena_core::ArenaError;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Request-level failure returned to the UI as `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn from_arena(err: ArenaError, expose_details: bool) -> Self {
        if err.is_request_error() {
            return Self { status: StatusCode::BAD_REQUEST, message: err.to_string() };
        }
        let message =
            if expose_details { err.to_string() } else { "Internal server error".to_string() };
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, message }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self { status: StatusCode::NOT_FOUND, message: message.into() }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self { status: rejection.status(), message: rejection.body_text() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}
