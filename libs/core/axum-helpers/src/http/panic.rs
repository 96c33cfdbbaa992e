use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::errors::AppError;

/// Converts a handler panic into the generic 500 response.
///
/// Use with `tower_http::catch_panic::CatchPanicLayer::custom(handle_panic)`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Internal(format!("handler panicked: {}", details)).into_response()
}
