//! Server infrastructure module.
//!
//! This module provides:
//! - Router assembly with the shared middleware chain and OpenAPI document
//! - Health endpoint
//! - Graceful shutdown
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router, health_router};
//! use core_config::{server::ServerConfig, app_info};
//!
//! let routes = Router::new()
//!     .nest("/api", api_routes)
//!     .merge(health_router(app_info!()));
//!
//! let app = create_router::<ApiDoc>(routes);
//! create_app(app, &ServerConfig::default()).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{OPENAPI_JSON_PATH, create_app, create_router};
pub use health::{HealthResponse, health_router};
pub use shutdown::shutdown_signal;
