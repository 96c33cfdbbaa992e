use axum::{
    extract::OriginalUri,
    http::{Method, StatusCode, Uri},
    response::Response,
};

use super::{error_response, messages};

/// Fallback handler for unmatched routes.
pub async fn not_found(method: Method, uri: Uri) -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        messages::NOT_FOUND,
        format!("Cannot {} {}", method, uri.path()),
    )
}

/// Fallback for a known path hit with a method it does not serve.
pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> Response {
    error_response(
        StatusCode::METHOD_NOT_ALLOWED,
        messages::METHOD_NOT_ALLOWED,
        format!("Cannot {} {}", method, uri.path()),
    )
}
