//! Products API - REST server over an in-memory product catalogue

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use axum::{Router, routing::get};
use axum_helpers::{create_router, health_router};

use state::AppState;

pub const WELCOME_MESSAGE: &str =
    "Welcome to the Product API! Go to /api/products to see all products.";

async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

/// Build the complete application router
///
/// `/` and `/health` sit beside `/api/products`; everything is wrapped in the
/// shared pipeline from [`create_router`].
pub fn build_router(state: &AppState) -> Router {
    let routes = Router::new()
        .route("/", get(welcome))
        .nest("/api", api::routes(state))
        .merge(health_router(state.config.app));

    create_router::<openapi::ApiDoc>(routes)
}
