//! Ordered in-memory product list.

use crate::models::Product;

/// Insertion-ordered list of products.
///
/// The store does no uniqueness checking and no locking of its own; callers
/// supply unique ids and serialize access (see
/// [`InMemoryProductRepository`](crate::repository::InMemoryProductRepository)).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Store pre-loaded with [`sample_products`]
    pub fn seeded() -> Self {
        Self::with_products(sample_products())
    }

    /// All products, in insertion order
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Add a product at the end
    pub fn append(&mut self, product: Product) {
        self.products.push(product);
    }

    pub fn find_index(&self, id: &str) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }

    /// Overwrite the product at `index`, returning the previous one.
    /// Returns `None` and leaves the store untouched if `index` is out of range.
    pub fn replace_at(&mut self, index: usize, product: Product) -> Option<Product> {
        let slot = self.products.get_mut(index)?;
        Some(std::mem::replace(slot, product))
    }

    /// Remove and return the product at `index`, or `None` if out of range.
    pub fn remove_at(&mut self, index: usize) -> Option<Product> {
        (index < self.products.len()).then(|| self.products.remove(index))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// The fixed catalogue loaded at startup
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Laptop".to_string(),
            description: "High-performance laptop with 16GB RAM".to_string(),
            price: 1200.0,
            category: "electronics".to_string(),
            in_stock: true,
        },
        Product {
            id: "2".to_string(),
            name: "Smartphone".to_string(),
            description: "Latest model with 128GB storage".to_string(),
            price: 800.0,
            category: "electronics".to_string(),
            in_stock: true,
        },
        Product {
            id: "3".to_string(),
            name: "Coffee Maker".to_string(),
            description: "Programmable coffee maker with timer".to_string(),
            price: 50.0,
            category: "kitchen".to_string(),
            in_stock: false,
        },
    ]
}
