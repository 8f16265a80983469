//! # vitrin-core: Pure Domain Logic for Vitrin
//!
//! This crate contains the domain model and business rules for the product
//! catalog, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Vitrin Architecture                           │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │            Caller (HTTP layer, CLI, composition root)       │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │                    vitrin-service                           │   │
//! │  │        validation + delegation to the repository            │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │              ★ vitrin-core (THIS CRATE) ★                   │   │
//! │  │                                                             │   │
//! │  │   ┌────────────┐   ┌────────────┐   ┌────────────┐         │   │
//! │  │   │   types    │   │ validation │   │   error    │         │   │
//! │  │   │  Product   │   │   rules    │   │ Validation │         │   │
//! │  │   │  + Create  │   │   checks   │   │   Error    │         │   │
//! │  │   └────────────┘   └────────────┘   └────────────┘         │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │                 vitrin-db (Database Layer)                  │   │
//! │  │          SQLite queries, migrations, repository             │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductCreate)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use vitrin_core::Product` instead of
// `use vitrin_core::types::Product`

pub use error::ValidationError;
pub use types::{Product, ProductCreate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum discount percentage a product may carry.
///
/// ## Business Reason
/// Discounts above 70% are assumed to be data-entry mistakes rather than
/// genuine promotions, so creation rejects them before any write happens.
/// Enforced at creation time only; later price updates do not re-check it.
pub const MAX_DISCOUNT_PERCENT: f64 = 70.0;
