//! # Repository Module
//!
//! Database repository for the product catalog.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                     │
//! │                                                                     │
//! │  The Repository pattern abstracts database access behind a clean    │
//! │  API. The service layer never sees SQL.                             │
//! │                                                                     │
//! │  Service                                                            │
//! │       │                                                             │
//! │       │  repo.list_by_store("ABC TECH")                             │
//! │       ▼                                                             │
//! │  ProductRepository (impl ProductReader + ProductWriter)             │
//! │  ├── list_all / list_by_store / get_by_id / count                   │
//! │  └── insert / delete_by_id / update_price                           │
//! │       │                                                             │
//! │       │  SQL Query                                                  │
//! │       ▼                                                             │
//! │  SQLite Database                                                    │
//! │                                                                     │
//! │  Benefits:                                                          │
//! │  • SQL is isolated in one place                                     │
//! │  • The service depends on the traits, not the concrete type         │
//! │  • Easy to test (swap in any ProductReader + ProductWriter)         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The read and write halves are split into two small capability traits so
//! callers can depend on exactly the access they need. [`ProductRepository`]
//! is the one concrete implementation of both.
//!
//! [`ProductRepository`]: product::ProductRepository

use async_trait::async_trait;

use crate::error::DbResult;
use vitrin_core::{Product, ProductCreate};

pub mod product;

/// Read-side capability over the product catalog.
#[async_trait]
pub trait ProductReader: Send + Sync {
    /// Returns every product, in insertion (rowid) order.
    async fn list_all(&self) -> DbResult<Vec<Product>>;

    /// Returns the products whose `store` field exactly matches
    /// `store_name`, in insertion order.
    async fn list_by_store(&self, store_name: &str) -> DbResult<Vec<Product>>;

    /// Looks up a single product. `Ok(None)` when no row matches.
    async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>>;

    /// Counts products in the catalog (diagnostics).
    async fn count(&self) -> DbResult<i64>;
}

/// Write-side capability over the product catalog.
#[async_trait]
pub trait ProductWriter: Send + Sync {
    /// Inserts a product and returns the store-assigned id.
    async fn insert(&self, product: &ProductCreate) -> DbResult<i64>;

    /// Deletes the product with the given id.
    /// Fails with `DbError::NotFound` when no row matches.
    async fn delete_by_id(&self, id: i64) -> DbResult<()>;

    /// Replaces the price of the product with the given id, leaving every
    /// other field untouched.
    /// Fails with `DbError::NotFound` when no row matches.
    async fn update_price(&self, id: i64, new_price: f64) -> DbResult<()>;
}
