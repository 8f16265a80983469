//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - Catalog listing, unfiltered or by store
//! - Single-row lookup by id
//! - Insert, delete, price update
//!
//! ## Column Order Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │            Write and read paths share one column order              │
//! │                                                                     │
//! │  INSERT INTO products (name, price, discount, store) ...            │
//! │                          │                                          │
//! │                          ▼                                          │
//! │  SELECT id, name, price, discount, store FROM products ...          │
//! │                                                                     │
//! │  Every returned Product carries all five fields; the select list    │
//! │  mirrors the insert list (plus the generated id) so row mapping     │
//! │  stays positionally correct.                                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::{ProductReader, ProductWriter};
use vitrin_core::{Product, ProductCreate};

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let id = repo.insert(&candidate).await?;
/// let product = repo.get_by_id(id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository around an explicit pool.
    /// There is no process-wide pool; whoever composes the system hands
    /// one in.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Returns every product in the catalog, in insertion (rowid) order.
    ///
    /// A query failure is returned to the caller rather than degraded to an
    /// empty list; callers that want the lenient behavior can write
    /// `list_all().await.unwrap_or_default()`.
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        debug!("Listing all products");

        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, discount, store FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Returns the products owned by the given store, in insertion order.
    ///
    /// Exact match on the `store` column; same error contract as
    /// [`list_all`](Self::list_all).
    pub async fn list_by_store(&self, store_name: &str) -> DbResult<Vec<Product>> {
        debug!(store = %store_name, "Listing products by store");

        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, discount, store FROM products WHERE store = ?1 ORDER BY id",
        )
        .bind(store_name)
        .fetch_all(&self.pool)
        .await?;

        debug!(store = %store_name, count = products.len(), "Listed products");
        Ok(products)
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, discount, store FROM products WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Inserts a new product.
    ///
    /// The id is assigned by the database, never by the caller.
    ///
    /// ## Returns
    /// * `Ok(i64)` - The generated id
    /// * `Err(DbError::QueryFailed)` - Constraint violation or connectivity
    ///   failure
    pub async fn insert(&self, product: &ProductCreate) -> DbResult<i64> {
        debug!(name = %product.name, store = %product.store, "Inserting product");

        let result = sqlx::query(
            "INSERT INTO products (name, price, discount, store) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(product.discount)
        .bind(&product.store)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id = id, "Inserted product");
        Ok(id)
    }

    /// Deletes the product with the given id.
    ///
    /// ## Returns
    /// * `Ok(())` - Row deleted
    /// * `Err(DbError::NotFound)` - No row matched the id
    pub async fn delete_by_id(&self, id: i64) -> DbResult<()> {
        debug!(id = id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        // A missing id is an error, not a silent no-op
        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Replaces the price of the product with the given id.
    ///
    /// Only the price column is touched; name, discount and store are left
    /// as they are. The discount ceiling is a creation-time rule and is not
    /// re-checked here.
    ///
    /// ## Returns
    /// * `Ok(())` - Price updated
    /// * `Err(DbError::NotFound)` - No row matched the id
    pub async fn update_price(&self, id: i64, new_price: f64) -> DbResult<()> {
        debug!(id = id, new_price = new_price, "Updating product price");

        let result = sqlx::query("UPDATE products SET price = ?2 WHERE id = ?1")
            .bind(id)
            .bind(new_price)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Counts total products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Capability Trait Implementations
// =============================================================================

#[async_trait::async_trait]
impl ProductReader for ProductRepository {
    async fn list_all(&self) -> DbResult<Vec<Product>> {
        ProductRepository::list_all(self).await
    }

    async fn list_by_store(&self, store_name: &str) -> DbResult<Vec<Product>> {
        ProductRepository::list_by_store(self, store_name).await
    }

    async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        ProductRepository::get_by_id(self, id).await
    }

    async fn count(&self) -> DbResult<i64> {
        ProductRepository::count(self).await
    }
}

#[async_trait::async_trait]
impl ProductWriter for ProductRepository {
    async fn insert(&self, product: &ProductCreate) -> DbResult<i64> {
        ProductRepository::insert(self, product).await
    }

    async fn delete_by_id(&self, id: i64) -> DbResult<()> {
        ProductRepository::delete_by_id(self, id).await
    }

    async fn update_price(&self, id: i64, new_price: f64) -> DbResult<()> {
        ProductRepository::update_price(self, id, new_price).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn candidate(name: &str, price: f64, discount: f64, store: &str) -> ProductCreate {
        ProductCreate {
            name: name.to_string(),
            price,
            discount,
            store: store.to_string(),
        }
    }

    /// Seeds the four-product sample catalog and returns the repository.
    async fn seeded_repo(db: &Database) -> ProductRepository {
        let repo = db.products();
        repo.insert(&candidate("AirFryer", 3000.0, 22.0, "ABC TECH"))
            .await
            .unwrap();
        repo.insert(&candidate("Ütü", 1500.0, 10.0, "ABC TECH"))
            .await
            .unwrap();
        repo.insert(&candidate("Çamaşır Makinesi", 10000.0, 15.0, "ABC TECH"))
            .await
            .unwrap();
        repo.insert(&candidate("Lambader", 2000.0, 0.0, "Dekorasyon Sarayı"))
            .await
            .unwrap();
        repo
    }

    #[tokio::test]
    async fn test_insert_then_get_round_trip() {
        let db = test_db().await;
        let repo = db.products();

        let create = candidate("AirFryer", 3000.0, 22.0, "ABC TECH");
        let id = repo.insert(&create).await.unwrap();

        let product = repo.get_by_id(id).await.unwrap().unwrap();
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
    async fn test_ids_are_store_assigned_and_sequential() {
        let db = test_db().await;
        let repo = db.products();

        let first = repo
            .insert(&candidate("Ütü", 1500.0, 10.0, "ABC TECH"))
            .await
            .unwrap();
        let second = repo
            .insert(&candidate("Lambader", 2000.0, 0.0, "Dekorasyon Sarayı"))
            .await
            .unwrap();

        assert!(second > first);
    }

    #[tokio::test]
    async fn test_list_all_returns_every_row_in_insertion_order() {
        let db = test_db().await;
        let repo = seeded_repo(&db).await;

        let products = repo.list_all().await.unwrap();
        assert_eq!(products.len(), 4);

        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["AirFryer", "Ütü", "Çamaşır Makinesi", "Lambader"]);
    }

    #[tokio::test]
    async fn test_list_all_on_empty_table() {
        let db = test_db().await;
        let repo = db.products();

        let products = repo.list_all().await.unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_list_by_store_is_the_exact_subset() {
        let db = test_db().await;
        let repo = seeded_repo(&db).await;

        let abc = repo.list_by_store("ABC TECH").await.unwrap();
        assert_eq!(abc.len(), 3);

        // Field-for-field the same rows list_all returns for that store,
        // in the same insertion order
        let all = repo.list_all().await.unwrap();
        let expected: Vec<Product> = all
            .into_iter()
            .filter(|p| p.store == "ABC TECH")
            .collect();
        assert_eq!(abc, expected);

        let deco = repo.list_by_store("Dekorasyon Sarayı").await.unwrap();
        assert_eq!(deco.len(), 1);
        assert_eq!(deco[0].name, "Lambader");
    }

    #[tokio::test]
    async fn test_list_by_store_unknown_store_is_empty() {
        let db = test_db().await;
        let repo = seeded_repo(&db).await;

        let products = repo.list_by_store("XYZ HOME").await.unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_get_by_id_missing_returns_none() {
        let db = test_db().await;
        let repo = db.products();

        assert!(repo.get_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let db = test_db().await;
        let repo = db.products();

        let id = repo
            .insert(&candidate("AirFryer", 3000.0, 22.0, "ABC TECH"))
            .await
            .unwrap();

        repo.delete_by_id(id).await.unwrap();
        assert!(repo.get_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_not_found() {
        let db = test_db().await;
        let repo = db.products();

        let err = repo.delete_by_id(42).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_price_changes_only_the_price() {
        let db = test_db().await;
        let repo = db.products();

        let id = repo
            .insert(&candidate("Çamaşır Makinesi", 10000.0, 15.0, "ABC TECH"))
            .await
            .unwrap();

        repo.update_price(id, 9500.0).await.unwrap();

        let product = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(product.price, 9500.0);
        assert_eq!(product.name, "Çamaşır Makinesi");
        assert_eq!(product.discount, 15.0);
        assert_eq!(product.store, "ABC TECH");
    }

    #[tokio::test]
    async fn test_update_price_missing_id_is_not_found() {
        let db = test_db().await;
        let repo = db.products();

        let err = repo.update_price(42, 9.99).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_count_tracks_writes() {
        let db = test_db().await;
        let repo = db.products();

        assert_eq!(repo.count().await.unwrap(), 0);

        let id = repo
            .insert(&candidate("Lambader", 2000.0, 0.0, "Dekorasyon Sarayı"))
            .await
            .unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);

        repo.delete_by_id(id).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
