use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Wire shape shared by all error responses (internal errors and the routing
/// fallback alike).
#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        ErrorResponse {
            error: error.into(),
            message: message.into(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Custom error type for request handlers.
///
/// Every per-request failure is caught at the handler boundary and converted
/// into a response here; nothing a handler hits may take the process down.
#[derive(Debug)]
pub enum ApiError {
    /// Fixture file exists but could not be read or parsed
    Fixture(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Fixture(err) => (StatusCode::INTERNAL_SERVER_ERROR, format!("{err:#}")),
        };

        tracing::error!("request failed: {}", message);
        let body = Json(ErrorResponse::new("Internal Server Error", message));
        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Fixture(err)
    }
}
