use axum::{
    extract::Request,
    http::Method,
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, SecondsFormat, Utc};

/// Formats the access line emitted for each request: `[<timestamp>] <METHOD> <path>`.
pub fn request_log_line(timestamp: DateTime<Utc>, method: &Method, path: &str) -> String {
    format!(
        "[{}] {} {}",
        timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        method,
        path
    )
}

/// Middleware that logs every request before it reaches a handler.
///
/// Never alters or rejects the request.
pub async fn request_logger(request: Request, next: Next) -> Response {
    let line = request_log_line(Utc::now(), request.method(), request.uri().path());
    tracing::info!("{}", line);

    next.run(request).await
}
