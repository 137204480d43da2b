//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{CatalogError, CatalogResult, ErrorKey};
use crate::models::{merge_update, ProductDto};
use crate::repository::ProductRepository;
use crate::validation::{validate, OperationMode};

/// Product service providing the catalog operations.
///
/// The service validates representations, detects empty and missing results
/// from the repository, and raises classified failures with
/// operation-specific keys. Validation always completes before any write is
/// issued, and every operation performs at most one lookup followed by at
/// most one write.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Get all products.
    #[instrument(skip(self))]
    pub async fn get_all_products(&self) -> CatalogResult<Vec<ProductDto>> {
        let products = self.repository.find_all().await?;
        if products.is_empty() {
            tracing::error!(key = ErrorKey::GetAllProducts.as_str(), "product list is empty");
            return Err(CatalogError::EmptyResult(ErrorKey::GetAllProducts));
        }
        Ok(products.into_iter().map(ProductDto::from).collect())
    }

    /// Get all products sorted by price, ascending.
    #[instrument(skip(self))]
    pub async fn get_all_products_sorted_by_price(&self) -> CatalogResult<Vec<ProductDto>> {
        let products = self.repository.find_all_sorted_by_price().await?;
        if products.is_empty() {
            tracing::error!(
                key = ErrorKey::GetAllProductsSortedByPrice.as_str(),
                "product list is empty"
            );
            return Err(CatalogError::EmptyResult(ErrorKey::GetAllProductsSortedByPrice));
        }
        Ok(products.into_iter().map(ProductDto::from).collect())
    }

    /// Get products with a price inside the given range.
    #[instrument(skip(self))]
    pub async fn get_products_by_price_range(
        &self,
        lower: f64,
        upper: f64,
    ) -> CatalogResult<Vec<ProductDto>> {
        let products = self.repository.find_by_price_range(lower, upper).await?;
        if products.is_empty() {
            tracing::error!(
                key = ErrorKey::GetProductsByPriceRange.as_str(),
                lower,
                upper,
                "no products in price range"
            );
            return Err(CatalogError::EmptyResult(ErrorKey::GetProductsByPriceRange));
        }
        Ok(products.into_iter().map(ProductDto::from).collect())
    }

    /// Create a new product.
    #[instrument(skip(self, dto), fields(product_name = %dto.name))]
    pub async fn create_product(&self, dto: ProductDto) -> CatalogResult<ProductDto> {
        let violations = validate(&dto, OperationMode::Create);
        if !violations.is_empty() {
            return Err(CatalogError::Validation(violations));
        }

        // The incoming id is ignored; storage assigns one on save.
        let saved = self.repository.save(dto.to_record()).await?;
        tracing::info!(id = saved.id, "created product");
        Ok(ProductDto::from(saved))
    }

    /// Get a product by id.
    #[instrument(skip(self))]
    pub async fn get_product_by_id(&self, id: i64) -> CatalogResult<ProductDto> {
        self.repository
            .find_by_id(id)
            .await?
            .map(ProductDto::from)
            .ok_or(CatalogError::NotFound(ErrorKey::GetProductById))
    }

    /// Delete a product by id, returning its pre-deletion representation.
    #[instrument(skip(self))]
    pub async fn delete_product_by_id(&self, id: i64) -> CatalogResult<ProductDto> {
        let product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound(ErrorKey::DeleteProductById))?;

        self.repository.delete_by_id(id).await?;
        tracing::info!(id, "deleted product");
        Ok(ProductDto::from(product))
    }

    /// Replace a product with the incoming representation.
    ///
    /// A full update requires a complete, valid payload, so it validates
    /// under [`OperationMode::Create`]; only the partial-update path relaxes
    /// the Create-only rules. The payload's id is trusted only for the
    /// lookup; the persisted record always keeps the existing record's id.
    #[instrument(skip(self, dto), fields(id = dto.id))]
    pub async fn update_product(&self, dto: ProductDto) -> CatalogResult<ProductDto> {
        let violations = validate(&dto, OperationMode::Create);
        if !violations.is_empty() {
            return Err(CatalogError::Validation(violations));
        }

        let existing = self
            .repository
            .find_by_id(dto.id)
            .await?
            .ok_or(CatalogError::NotFound(ErrorKey::UpdateProduct))?;

        let mut product = dto.to_record();
        product.id = existing.id;

        let updated = self.repository.save(product).await?;
        Ok(ProductDto::from(updated))
    }

    /// Partially update a product, merging the incoming representation into
    /// the stored record (see [`merge_update`]).
    #[instrument(skip(self, dto), fields(id = dto.id))]
    pub async fn update_product_fields(&self, dto: ProductDto) -> CatalogResult<ProductDto> {
        let violations = validate(&dto, OperationMode::Update);
        if !violations.is_empty() {
            return Err(CatalogError::Validation(violations));
        }

        let existing = self
            .repository
            .find_by_id(dto.id)
            .await?
            .ok_or(CatalogError::NotFound(ErrorKey::UpdateProductFields))?;

        let merged = merge_update(&existing, &dto);
        let updated = self.repository.save(merged).await?;
        Ok(ProductDto::from(updated))
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;
    use crate::repository::MockProductRepository;
    use crate::validation::ValidationKey;
    use mockall::predicate::eq;

    fn pen(id: i64) -> Product {
        Product {
            id,
            name: "Pen".to_owned(),
            price: 200.0,
        }
    }

    #[tokio::test]
    async fn get_all_products_preserves_repository_order() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_all().returning(|| {
            Ok(vec![
                Product {
                    id: 2,
                    name: "Marker".to_owned(),
                    price: 250.0,
                },
                Product {
                    id: 1,
                    name: "Pen".to_owned(),
                    price: 150.0,
                },
            ])
        });

        let service = ProductService::new(repo);
        let products = service.get_all_products().await.unwrap();

        let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn empty_list_raises_operation_specific_key() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_all().returning(|| Ok(vec![]));

        let service = ProductService::new(repo);
        let err = service.get_all_products().await.unwrap_err();

        assert_eq!(err, CatalogError::EmptyResult(ErrorKey::GetAllProducts));
    }

    #[tokio::test]
    async fn empty_sorted_list_raises_its_own_key() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_all_sorted_by_price().returning(|| Ok(vec![]));

        let service = ProductService::new(repo);
        let err = service.get_all_products_sorted_by_price().await.unwrap_err();

        assert_eq!(
            err,
            CatalogError::EmptyResult(ErrorKey::GetAllProductsSortedByPrice)
        );
    }

    #[tokio::test]
    async fn empty_price_range_raises_its_own_key() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_price_range()
            .with(eq(100.0), eq(200.0))
            .returning(|_, _| Ok(vec![]));

        let service = ProductService::new(repo);
        let err = service
            .get_products_by_price_range(100.0, 200.0)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CatalogError::EmptyResult(ErrorKey::GetProductsByPriceRange)
        );
    }

    #[tokio::test]
    async fn create_product_persists_with_unassigned_id() {
        let mut repo = MockProductRepository::new();
        repo.expect_save()
            .withf(|product| product.id == Product::UNASSIGNED_ID)
            .returning(|mut product| {
                product.id = 1;
                Ok(product)
            });

        let service = ProductService::new(repo);
        let created = service
            .create_product(ProductDto {
                id: 0,
                name: "Pen".to_owned(),
                price: 150.0,
            })
            .await
            .unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.name, "Pen");
    }

    #[tokio::test]
    async fn create_product_rejects_invalid_payload_before_any_write() {
        // No save expectation: a write here fails the test.
        let mut repo = MockProductRepository::new();
        repo.expect_save().times(0);

        let service = ProductService::new(repo);
        let err = service
            .create_product(ProductDto {
                id: 0,
                name: String::new(),
                price: 50.0,
            })
            .await
            .unwrap_err();

        match err {
            CatalogError::Validation(violations) => {
                let keys: Vec<ValidationKey> = violations.iter().map(|v| v.key).collect();
                assert!(keys.contains(&ValidationKey::NameNotBlank));
                assert!(keys.contains(&ValidationKey::NameMinSize));
                assert!(keys.contains(&ValidationKey::PriceMinValue));
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn get_product_by_id_raises_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id().with(eq(9)).returning(|_| Ok(None));

        let service = ProductService::new(repo);
        let err = service.get_product_by_id(9).await.unwrap_err();

        assert_eq!(err, CatalogError::NotFound(ErrorKey::GetProductById));
    }

    #[tokio::test]
    async fn delete_returns_pre_deletion_representation() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .returning(|id| Ok(Some(pen(id))));
        repo.expect_delete_by_id().with(eq(1)).returning(|_| Ok(()));

        let service = ProductService::new(repo);
        let deleted = service.delete_product_by_id(1).await.unwrap();

        assert_eq!(deleted, ProductDto::from(pen(1)));
    }

    #[tokio::test]
    async fn delete_missing_product_raises_its_own_key() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id().with(eq(9)).returning(|_| Ok(None));
        repo.expect_delete_by_id().times(0);

        let service = ProductService::new(repo);
        let err = service.delete_product_by_id(9).await.unwrap_err();

        assert_eq!(err, CatalogError::NotFound(ErrorKey::DeleteProductById));
    }

    #[tokio::test]
    async fn update_product_forces_existing_id() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .returning(|id| Ok(Some(pen(id))));
        repo.expect_save()
            .withf(|product| product.id == 1 && product.name == "Marker")
            .returning(Ok);

        let service = ProductService::new(repo);
        let updated = service
            .update_product(ProductDto {
                id: 1,
                name: "Marker".to_owned(),
                price: 250.0,
            })
            .await
            .unwrap();

        assert_eq!(updated.id, 1);
        assert_eq!(updated.price, 250.0);
    }

    #[tokio::test]
    async fn full_update_requires_a_complete_valid_payload() {
        // Full update enforces the Create-only rules; a blank name and a
        // sub-minimum price must never reach storage.
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id().times(0);
        repo.expect_save().times(0);

        let service = ProductService::new(repo);
        let err = service
            .update_product(ProductDto {
                id: 1,
                name: String::new(),
                price: 50.0,
            })
            .await
            .unwrap_err();

        match err {
            CatalogError::Validation(violations) => {
                let keys: Vec<ValidationKey> = violations.iter().map(|v| v.key).collect();
                assert!(keys.contains(&ValidationKey::NameNotBlank));
                assert!(keys.contains(&ValidationKey::NameMinSize));
                assert!(keys.contains(&ValidationKey::PriceMinValue));
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn update_missing_product_raises_its_own_key() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id().with(eq(9)).returning(|_| Ok(None));
        repo.expect_save().times(0);

        let service = ProductService::new(repo);
        let err = service
            .update_product(ProductDto {
                id: 9,
                name: "Marker".to_owned(),
                price: 250.0,
            })
            .await
            .unwrap_err();

        assert_eq!(err, CatalogError::NotFound(ErrorKey::UpdateProduct));
    }

    #[tokio::test]
    async fn partial_update_overrides_positive_price() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .returning(|id| Ok(Some(pen(id))));
        repo.expect_save()
            .withf(|product| product.price == 150.0)
            .returning(Ok);

        let service = ProductService::new(repo);
        let updated = service
            .update_product_fields(ProductDto {
                id: 1,
                name: "Pen".to_owned(),
                price: 150.0,
            })
            .await
            .unwrap();

        assert_eq!(updated.price, 150.0);
    }

    #[tokio::test]
    async fn partial_update_with_zero_price_is_a_no_op() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .returning(|id| Ok(Some(pen(id))));
        repo.expect_save()
            .withf(|product| *product == pen(1))
            .returning(Ok);

        let service = ProductService::new(repo);
        let updated = service
            .update_product_fields(ProductDto {
                id: 1,
                name: "Pen".to_owned(),
                price: 0.0,
            })
            .await
            .unwrap();

        assert_eq!(updated, ProductDto::from(pen(1)));
    }

    #[tokio::test]
    async fn partial_update_missing_product_raises_its_own_key() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id().with(eq(9)).returning(|_| Ok(None));
        repo.expect_save().times(0);

        let service = ProductService::new(repo);
        let err = service
            .update_product_fields(ProductDto {
                id: 9,
                name: "Marker".to_owned(),
                price: 0.0,
            })
            .await
            .unwrap_err();

        assert_eq!(err, CatalogError::NotFound(ErrorKey::UpdateProductFields));
    }

    #[tokio::test]
    async fn update_rejects_invalid_price_pattern() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id().times(0);
        repo.expect_save().times(0);

        let service = ProductService::new(repo);
        let err = service
            .update_product_fields(ProductDto {
                id: 1,
                name: "Pen".to_owned(),
                price: 10.999,
            })
            .await
            .unwrap_err();

        match err {
            CatalogError::Validation(violations) => {
                assert!(violations
                    .iter()
                    .any(|v| v.key == ValidationKey::PricePattern));
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }
}
