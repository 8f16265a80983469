//! # Product Service
//!
//! Validation and orchestration around the product repository.
//!
//! The service adds exactly one business rule (creation validation) and
//! translates the repository's `Option` lookup into a not-found failure.
//! Everything else passes through unchanged: no retries, no session state,
//! no extra failure modes.

use async_trait::async_trait;
use tracing::debug;

use crate::error::{ServiceError, ServiceResult};
use vitrin_core::validation::validate_product_create;
use vitrin_core::{Product, ProductCreate};
use vitrin_db::{ProductReader, ProductWriter};

// =============================================================================
// Capability Trait
// =============================================================================

/// The operation set the service exposes to its caller.
///
/// An HTTP layer (or any other composition root) depends on this trait,
/// not on the concrete implementation.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Validates the candidate and inserts it.
    /// Returns the store-assigned id of the new product.
    async fn add(&self, candidate: ProductCreate) -> ServiceResult<i64>;

    /// Fetches a single product, failing with
    /// [`ServiceError::NotFound`] when the id matches nothing.
    async fn get_by_id(&self, id: i64) -> ServiceResult<Product>;

    /// Deletes a product by id.
    async fn delete_by_id(&self, id: i64) -> ServiceResult<()>;

    /// Replaces the price of a product, leaving other fields untouched.
    async fn update_price(&self, id: i64, new_price: f64) -> ServiceResult<()>;

    /// Returns the whole catalog.
    async fn get_all_products(&self) -> ServiceResult<Vec<Product>>;

    /// Returns the catalog of a single store.
    async fn get_all_products_by_store(&self, store_name: &str) -> ServiceResult<Vec<Product>>;
}

// =============================================================================
// Implementation
// =============================================================================

/// The one concrete [`ProductService`], generic over any repository that
/// provides the read and write capabilities.
#[derive(Debug, Clone)]
pub struct ProductServiceImpl<R> {
    repository: R,
}

impl<R> ProductServiceImpl<R>
where
    R: ProductReader + ProductWriter,
{
    /// Creates a new service around the given repository.
    /// The repository (and through it, the pool) is injected by the
    /// composition root.
    pub fn new(repository: R) -> Self {
        ProductServiceImpl { repository }
    }
}

#[async_trait]
impl<R> ProductService for ProductServiceImpl<R>
where
    R: ProductReader + ProductWriter,
{
    /// ## Creation Flow
    /// ```text
    /// candidate ──► validate_product_create
    ///                    │
    ///                    ├── Err? return Validation error, no repository
    ///                    │        call, no partial write
    ///                    │
    ///                    └── Ok ──► repository.insert ──► generated id
    /// ```
    async fn add(&self, candidate: ProductCreate) -> ServiceResult<i64> {
        validate_product_create(&candidate)?;

        debug!(name = %candidate.name, store = %candidate.store, "Adding product");
        let id = self.repository.insert(&candidate).await?;
        Ok(id)
    }

    async fn get_by_id(&self, id: i64) -> ServiceResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound { id })
    }

    async fn delete_by_id(&self, id: i64) -> ServiceResult<()> {
        self.repository.delete_by_id(id).await?;
        Ok(())
    }

    async fn update_price(&self, id: i64, new_price: f64) -> ServiceResult<()> {
        self.repository.update_price(id, new_price).await?;
        Ok(())
    }

    async fn get_all_products(&self) -> ServiceResult<Vec<Product>> {
        let products = self.repository.list_all().await?;
        Ok(products)
    }

    async fn get_all_products_by_store(&self, store_name: &str) -> ServiceResult<Vec<Product>> {
        let products = self.repository.list_by_store(store_name).await?;
        Ok(products)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use vitrin_db::{Database, DbConfig, DbError, ProductRepository};

    async fn test_service() -> (Database, ProductServiceImpl<ProductRepository>) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let service = ProductServiceImpl::new(db.products());
        (db, service)
    }

    fn candidate(name: &str, price: f64, discount: f64, store: &str) -> ProductCreate {
        ProductCreate {
            name: name.to_string(),
            price,
            discount,
            store: store.to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_rejects_discount_over_ceiling_with_zero_writes() {
        let (db, service) = test_service().await;

        let err = service
            .add(candidate("AirFryer", 3000.0, 70.1, "ABC TECH"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        // The repository was never called
        assert_eq!(db.products().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_add_rejects_empty_name_and_negative_price() {
        let (db, service) = test_service().await;

        let err = service
            .add(candidate("", 3000.0, 22.0, "ABC TECH"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        let err = service
            .add(candidate("AirFryer", -1.0, 22.0, "ABC TECH"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        assert_eq!(db.products().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_add_accepts_the_whole_allowed_discount_range() {
        let (db, service) = test_service().await;

        // Both endpoints of [0, 70] are valid
        service
            .add(candidate("Lambader", 2000.0, 0.0, "Dekorasyon Sarayı"))
            .await
            .unwrap();
        service
            .add(candidate("AirFryer", 3000.0, 70.0, "ABC TECH"))
            .await
            .unwrap();

        assert_eq!(db.products().count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_add_then_get_round_trip() {
        let (_db, service) = test_service().await;

        let id = service
            .add(candidate("AirFryer", 3000.0, 22.0, "ABC TECH"))
            .await
            .unwrap();

        let product = service.get_by_id(id).await.unwrap();
        assert_eq!(
            product,
            Product {
                id,
                name: "AirFryer".to_string(),
                price: 3000.0,
                discount: 22.0,
                store: "ABC TECH".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_get_by_id_missing_is_not_found() {
        let (_db, service) = test_service().await;

        let err = service.get_by_id(999).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { id: 999 }));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let (_db, service) = test_service().await;

        let id = service
            .add(candidate("Ütü", 1500.0, 10.0, "ABC TECH"))
            .await
            .unwrap();

        service.delete_by_id(id).await.unwrap();

        let err = service.get_by_id(id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_missing_surfaces_store_error() {
        let (_db, service) = test_service().await;

        let err = service.delete_by_id(42).await.unwrap_err();
        assert!(matches!(err, ServiceError::Store(DbError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_update_price_replaces_only_the_price() {
        let (_db, service) = test_service().await;

        let id = service
            .add(candidate("Çamaşır Makinesi", 10000.0, 15.0, "ABC TECH"))
            .await
            .unwrap();

        service.update_price(id, 9250.0).await.unwrap();

        let product = service.get_by_id(id).await.unwrap();
        assert_eq!(product.price, 9250.0);
        assert_eq!(product.name, "Çamaşır Makinesi");
        assert_eq!(product.discount, 15.0);
        assert_eq!(product.store, "ABC TECH");
    }

    #[tokio::test]
    async fn test_listing_passes_through_the_catalog() {
        let (_db, service) = test_service().await;

        service
            .add(candidate("AirFryer", 3000.0, 22.0, "ABC TECH"))
            .await
            .unwrap();
        service
            .add(candidate("Ütü", 1500.0, 10.0, "ABC TECH"))
            .await
            .unwrap();
        service
            .add(candidate("Çamaşır Makinesi", 10000.0, 15.0, "ABC TECH"))
            .await
            .unwrap();
        service
            .add(candidate("Lambader", 2000.0, 0.0, "Dekorasyon Sarayı"))
            .await
            .unwrap();

        let all = service.get_all_products().await.unwrap();
        assert_eq!(all.len(), 4);

        let abc = service.get_all_products_by_store("ABC TECH").await.unwrap();
        let names: Vec<&str> = abc.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["AirFryer", "Ütü", "Çamaşır Makinesi"]);

        // Per-row field values are preserved, not just the names
        assert_eq!(abc, all[..3].to_vec());
    }
}
