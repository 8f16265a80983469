//! # vitrin-db: Database Layer for Vitrin
//!
//! This crate provides database access for the Vitrin product catalog.
//! It uses SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Vitrin Data Flow                            │
//! │                                                                     │
//! │  Service call (add / get_by_id / ...)                               │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                   vitrin-db (THIS CRATE)                    │   │
//! │  │                                                             │   │
//! │  │   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   │   │
//! │  │   │   Database   │   │  Repository  │   │  Migrations  │   │   │
//! │  │   │  (pool.rs)   │   │ (product.rs) │   │  (embedded)  │   │   │
//! │  │   │              │   │              │   │              │   │   │
//! │  │   │ SqlitePool   │◄──│ ProductRepo  │   │ 001_*.sql    │   │   │
//! │  │   └──────────────┘   └──────────────┘   └──────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite database file (or :memory: in tests)                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Capability traits and the product repository
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vitrin_db::{Database, DbConfig};
//!
//! // Create database with default config (runs migrations)
//! let db = Database::new(DbConfig::new("path/to/vitrin.db")).await?;
//!
//! // Use the repository
//! let products = db.products().list_by_store("ABC TECH").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::product::ProductRepository;
pub use repository::{ProductReader, ProductWriter};
