//! Products API routes

use axum::Router;
use domain_products::{ProductService, handlers};

use crate::state::AppState;

/// Create products router over the shared in-memory store
pub fn router(state: &AppState) -> Router {
    let service = ProductService::new(state.products.clone());
    handlers::router(service)
}
