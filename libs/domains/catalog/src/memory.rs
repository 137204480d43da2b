//! In-memory [`ProductRepository`] implementation.
//!
//! Backs the integration tests and any deployment that does not need a
//! durable store. Ids are assigned from a process-local sequence starting
//! at 1; id 0 marks an unsaved record.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::CatalogResult;
use crate::models::Product;
use crate::repository::ProductRepository;

pub struct InMemoryProductRepository {
    products: RwLock<BTreeMap<i64, Product>>,
    next_id: AtomicI64,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> CatalogResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.values().cloned().collect())
    }

    async fn find_all_sorted_by_price(&self) -> CatalogResult<Vec<Product>> {
        let products = self.products.read().await;
        let mut sorted: Vec<Product> = products.values().cloned().collect();
        sorted.sort_by(|a, b| a.price.total_cmp(&b.price));
        Ok(sorted)
    }

    async fn find_by_price_range(&self, lower: f64, upper: f64) -> CatalogResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products
            .values()
            .filter(|product| product.price >= lower && product.price <= upper)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> CatalogResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn save(&self, mut product: Product) -> CatalogResult<Product> {
        if product.id == Product::UNASSIGNED_ID {
            product.id = self.next_id.fetch_add(1, Ordering::Relaxed);
        }
        let mut products = self.products.write().await;
        products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn delete_by_id(&self, id: i64) -> CatalogResult<()> {
        let mut products = self.products.write().await;
        products.remove(&id);
        Ok(())
    }
}
