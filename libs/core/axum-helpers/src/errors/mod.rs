pub mod handlers;
pub mod messages;
pub mod responses;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// Every error the API returns has this shape:
///
/// ```json
/// {
///   "error": "Validation Error",
///   "message": "Price must be a positive number"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Short error label
    pub error: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// This is the terminal error stage of every request: whatever a handler or
/// extractor fails with ends up here and is rendered as an [`ErrorResponse`].
/// Rendering never fails.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    /// Client-supplied data failed field constraints
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// A referenced entity does not exist.
    ///
    /// Rendered as `{"error": "<entity> not found", "message": "<entity> with id <id> does not exist"}`.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Anything unanticipated. The message is logged, never sent to the client.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::Validation(msg) => {
                tracing::info!("Validation error: {}", msg);
                ErrorResponse::new(messages::VALIDATION_ERROR, msg)
            }
            AppError::Unauthorized(msg) => {
                tracing::info!("Unauthorized: {}", msg);
                ErrorResponse::new(messages::UNAUTHORIZED, msg)
            }
            AppError::NotFound { entity, id } => {
                tracing::info!("Not found: {} {}", entity, id);
                ErrorResponse::new(
                    format!("{} not found", entity),
                    format!("{} with id {} does not exist", entity, id),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal server error: {}", msg);
                ErrorResponse::new(messages::INTERNAL_SERVER_ERROR, messages::INTERNAL_ERROR)
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Helper function to create error responses outside of the [`AppError`] flow.
pub fn error_response(status: StatusCode, error: &str, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(error, message))).into_response()
}
