//! JSON body extractor that tolerates empty bodies and missing content types.

use crate::errors::{AppError, messages};
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// JSON extractor that reports malformed bodies as validation errors.
///
/// Unlike [`axum::Json`] it does not require a `Content-Type: application/json`
/// header, and an empty (or all-whitespace) body yields `T::default()`, so
/// missing fields surface through the handler's own validation instead of as
/// an extractor rejection.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::LenientJson;
///
/// #[derive(Default, Deserialize)]
/// struct Payload {
///     name: Option<String>,
/// }
///
/// async fn create(LenientJson(payload): LenientJson<Payload>) -> String {
///     payload.name.unwrap_or_default()
/// }
/// ```
pub struct LenientJson<T>(pub T);

impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(LenientJson(T::default()));
        }

        serde_json::from_slice(&bytes)
            .map(LenientJson)
            .map_err(|e| AppError::Validation(format!("{}: {}", messages::INVALID_JSON, e)))
    }
}
