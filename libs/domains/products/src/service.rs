//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductPayload};
use crate::repository::ProductRepository;
use crate::validation::{validate_create, validate_update};

/// Product service providing business logic operations
///
/// The service layer runs validation and orchestrates repository operations.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all products
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Create a new product
    #[instrument(skip(self, input))]
    pub async fn create_product(&self, input: ProductPayload) -> ProductResult<Product> {
        let input = validate_create(input)?;
        self.repository.create(input).await
    }

    /// Update an existing product
    ///
    /// An unknown id is reported before any validation failure.
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: &str, input: ProductPayload) -> ProductResult<Product> {
        if self.repository.get_by_id(id).await?.is_none() {
            return Err(ProductError::NotFound(id.to_string()));
        }

        let changes = validate_update(input)?;
        self.repository.update(id, changes).await
    }

    /// Delete a product, returning the removed record
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<Product> {
        self.repository.delete(id).await
    }
}
