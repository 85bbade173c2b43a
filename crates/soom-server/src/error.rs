use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use uuid::Uuid;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl ApiError {
    pub fn session_not_found(id: Uuid) -> Self {
        ApiError::NotFound(format!("session not found: {id}"))
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<soom_core::error::CoreError> for ApiError {
    fn from(e: soom_core::error::CoreError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<soom_gemini::error::GeminiError> for ApiError {
    fn from(e: soom_gemini::error::GeminiError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<soom_report::error::ReportError> for ApiError {
    fn from(e: soom_report::error::ReportError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        ApiError::Internal(format!("generation task failed: {e}"))
    }
}
