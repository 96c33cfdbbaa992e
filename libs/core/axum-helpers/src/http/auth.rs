use axum::{
    extract::Request,
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};

use crate::errors::{AppError, messages};

const BEARER_PREFIX: &str = "Bearer ";

/// The raw token accepted by [`require_bearer_token`], stored in request extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(pub String);

/// Extract the token from an `Authorization: Bearer <token>` header.
///
/// The prefix match is case-sensitive and the token itself may be empty.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| auth.strip_prefix(BEARER_PREFIX))
}

/// Bearer token middleware.
///
/// Only checks that the header is present and well-formed; the token value is
/// not verified. Inserts [`BearerToken`] into request extensions on success.
///
/// # Example
///
/// ```ignore
/// let protected_routes = Router::new()
///     .route("/items", post(create_item))
///     .route_layer(axum::middleware::from_fn(require_bearer_token));
/// ```
pub async fn require_bearer_token(mut request: Request, next: Next) -> Result<Response, AppError> {
    let token = match bearer_token(request.headers()) {
        Some(t) => t.to_string(),
        None => {
            tracing::debug!("No bearer token in Authorization header");
            return Err(AppError::Unauthorized(messages::INVALID_TOKEN.to_string()));
        }
    };

    request.extensions_mut().insert(BearerToken(token));
    Ok(next.run(request).await)
}
