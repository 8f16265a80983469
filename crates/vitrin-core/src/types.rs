//! # Domain Types
//!
//! Core domain types for the Vitrin product catalog.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌───────────────────┐        ┌───────────────────┐                 │
//! │  │     Product       │        │   ProductCreate   │                 │
//! │  │  ───────────────  │        │  ───────────────  │                 │
//! │  │  id (store-owned) │  ◄───  │  name             │                 │
//! │  │  name             │ insert │  price            │                 │
//! │  │  price            │        │  discount         │                 │
//! │  │  discount         │        │  store            │                 │
//! │  │  store            │        └───────────────────┘                 │
//! │  └───────────────────┘                                              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `id` is assigned by the database on insert (rowid) and is immutable
//! thereafter. Creation therefore goes through [`ProductCreate`], which
//! carries everything except the id.

use serde::{Deserialize, Serialize};

// =============================================================================
// Product
// =============================================================================

/// A product listed in a store's catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique identifier, assigned by the database on insert.
    pub id: i64,

    /// Display name. Non-empty by the creation rules.
    pub name: String,

    /// Unit price. Non-negative; the monetary unit is whatever the
    /// surrounding system uses, consistently.
    pub price: f64,

    /// Discount percentage in `[0, 70]`, enforced at creation time.
    pub discount: f64,

    /// Name of the seller/shop owning this product. Used as a filter key,
    /// not a foreign key.
    pub store: String,
}

impl Product {
    /// Returns the price after applying the discount percentage.
    pub fn discounted_price(&self) -> f64 {
        self.price * (1.0 - self.discount / 100.0)
    }
}

// =============================================================================
// Product Create
// =============================================================================

/// Payload for creating a product.
///
/// ## Why a separate type?
/// The id is store-assigned, so callers never supply one. Keeping creation
/// input as its own type makes "id left unset" unrepresentable instead of a
/// convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub discount: f64,
    pub store: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discounted_price() {
        let product = Product {
            id: 1,
            name: "AirFryer".to_string(),
            price: 3000.0,
            discount: 22.0,
            store: "ABC TECH".to_string(),
        };
        assert!((product.discounted_price() - 2340.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_discount_keeps_price() {
        let product = Product {
            id: 4,
            name: "Lambader".to_string(),
            price: 2000.0,
            discount: 0.0,
            store: "Dekorasyon Sarayı".to_string(),
        };
        assert_eq!(product.discounted_price(), 2000.0);
    }
}
