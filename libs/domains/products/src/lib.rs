//! Products Domain
//!
//! CRUD over an in-memory, insertion-ordered product catalogue.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, bearer auth on writes
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, business rules
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │    Store    │  ← Ordered product list
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, InMemoryProductRepository, ProductService};
//!
//! let repository = InMemoryProductRepository::with_sample_data();
//! let service = ProductService::new(repository);
//!
//! // Mount under /api/products
//! let router = axum::Router::new().nest("/api/products", handlers::router(service));
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{NewProduct, Product, ProductChanges, ProductPayload, ProductResponse};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
pub use store::{ProductStore, sample_products};
