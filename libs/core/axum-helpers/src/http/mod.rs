//! HTTP middleware module.
//!
//! This module provides the per-request middleware chain:
//! - Request logging
//! - Bearer token authentication
//! - Security headers
//! - Panic recovery
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::{request_logger, require_bearer_token, security_headers};
//!
//! let protected = Router::new()
//!     .route("/items", post(create_item))
//!     .route_layer(axum::middleware::from_fn(require_bearer_token));
//!
//! let app = Router::new()
//!     .merge(protected)
//!     .layer(axum::middleware::from_fn(security_headers))
//!     .layer(axum::middleware::from_fn(request_logger));
//! ```

pub mod auth;
pub mod logging;
pub mod panic;
pub mod security;

pub use auth::{BearerToken, bearer_token, require_bearer_token};
pub use logging::{request_log_line, request_logger};
pub use panic::handle_panic;
pub use security::security_headers;
