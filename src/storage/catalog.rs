use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use super::error::StorageError;
use crate::domain::{Amount, DomainError, Product, ProductId};

/// Concurrent in-memory product catalog.
///
/// Plain key-value storage with no invariants beyond a positive price;
/// the engine reads price and existence once per purchase.
pub struct ConcurrentCatalog {
    products: DashMap<ProductId, Product>,
    next_id: AtomicU64,
}

impl ConcurrentCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self {
            products: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Add a product, returning it with its assigned id
    pub fn add(
        &self,
        name: impl Into<String>,
        price: Amount,
        description: Option<String>,
    ) -> Result<Product, StorageError> {
        if !price.is_positive() {
            return Err(StorageError::Domain(DomainError::InvalidAmount));
        }

        let id = ProductId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let product = Product {
            id,
            name: name.into(),
            price,
            description,
        };

        self.products.insert(id, product.clone());
        Ok(product)
    }

    /// Look up a product by id
    pub fn get(&self, id: ProductId) -> Option<Product> {
        self.products.get(&id).map(|r| r.value().clone())
    }

    /// All products, sorted by id
    pub fn list(&self) -> Vec<Product> {
        let mut products: Vec<Product> = self
            .products
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        products.sort_by_key(|p| p.id);
        products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for ConcurrentCatalog {
    fn default() -> Self {
        Self::new()
    }
}
