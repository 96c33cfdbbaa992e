use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{NewProduct, Product, ProductChanges};
use crate::store::ProductStore;

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List all products in insertion order
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by ID
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    /// Create a new product with a generated ID
    async fn create(&self, input: NewProduct) -> ProductResult<Product>;

    /// Merge changes into an existing product
    async fn update(&self, id: &str, changes: ProductChanges) -> ProductResult<Product>;

    /// Delete a product by ID, returning the removed record
    async fn delete(&self, id: &str) -> ProductResult<Product>;
}

/// In-memory implementation of ProductRepository.
///
/// Clones share the same underlying store. Each mutation runs under a single
/// write-lock acquisition, so find-then-replace and find-then-remove are atomic.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<ProductStore>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::from_store(ProductStore::new())
    }

    /// Repository over the sample catalogue
    pub fn with_sample_data() -> Self {
        Self::from_store(ProductStore::seeded())
    }

    pub fn from_store(store: ProductStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store.list().to_vec())
    }

    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.get_by_id(id).cloned())
    }

    async fn create(&self, input: NewProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        let product = Product::new(input);
        store.append(product.clone());

        tracing::info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    async fn update(&self, id: &str, changes: ProductChanges) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        let index = store
            .find_index(id)
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;

        let mut product = store.list()[index].clone();
        product.apply_changes(changes);
        store.replace_at(index, product.clone());

        tracing::info!(product_id = %id, "Updated product");
        Ok(product)
    }

    async fn delete(&self, id: &str) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        let removed = store
            .find_index(id)
            .and_then(|index| store.remove_at(index))
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;

        tracing::info!(product_id = %id, "Deleted product");
        Ok(removed)
    }
}
