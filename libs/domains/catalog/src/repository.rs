use async_trait::async_trait;

use crate::error::CatalogResult;
use crate::models::Product;

/// Repository trait for Product persistence.
///
/// This trait defines the data access interface for products. The domain
/// relies entirely on the implementation for ordering: sorted and range
/// results are returned to callers exactly as the repository produced them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Get all products
    async fn find_all(&self) -> CatalogResult<Vec<Product>>;

    /// Get all products sorted by price, ascending
    async fn find_all_sorted_by_price(&self) -> CatalogResult<Vec<Product>>;

    /// Get products with a price between the limits, both inclusive
    async fn find_by_price_range(&self, lower: f64, upper: f64) -> CatalogResult<Vec<Product>>;

    /// Get a product by id
    async fn find_by_id(&self, id: i64) -> CatalogResult<Option<Product>>;

    /// Persist a product, assigning an id when the record carries none
    async fn save(&self, product: Product) -> CatalogResult<Product>;

    /// Delete a product by id
    async fn delete_by_id(&self, id: i64) -> CatalogResult<()>;
}
