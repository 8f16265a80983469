//! # Validation Module
//!
//! Business rule validation for product creation.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Caller (HTTP layer, out of scope)                         │
//! │  └── Type validation (deserialization)                              │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: Service                                                   │
//! │  └── THIS MODULE: Business rule validation, before any write        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Database (SQLite)                                         │
//! │  └── NOT NULL constraints                                           │
//! │                                                                     │
//! │  A failure in layer 2 means the repository is never called.         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vitrin_core::{ProductCreate, validation::validate_product_create};
//!
//! let candidate = ProductCreate {
//!     name: "AirFryer".to_string(),
//!     price: 3000.0,
//!     discount: 22.0,
//!     store: "ABC TECH".to_string(),
//! };
//! assert!(validate_product_create(&candidate).is_ok());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::ProductCreate;
use crate::MAX_DISCOUNT_PERCENT;

/// Validates a product creation payload.
///
/// ## Rules
/// - `discount` must be within `[0, 70]` (the discount ceiling)
/// - `name` must not be empty (after trimming)
/// - `price` must not be negative (zero is allowed, e.g. giveaways)
///
/// ## Example
/// ```rust
/// use vitrin_core::{ProductCreate, validation::validate_product_create};
///
/// let mut candidate = ProductCreate {
///     name: "Ütü".to_string(),
///     price: 1500.0,
///     discount: 10.0,
///     store: "ABC TECH".to_string(),
/// };
/// assert!(validate_product_create(&candidate).is_ok());
///
/// candidate.discount = 75.0;
/// assert!(validate_product_create(&candidate).is_err());
/// ```
pub fn validate_product_create(candidate: &ProductCreate) -> ValidationResult<()> {
    validate_name(&candidate.name)?;
    validate_price(candidate.price)?;
    validate_discount(candidate.discount)?;
    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or whitespace-only
pub fn validate_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Validates a price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if price < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a discount percentage.
///
/// ## Rules
/// - Must be within `[0, MAX_DISCOUNT_PERCENT]`
pub fn validate_discount(discount: f64) -> ValidationResult<()> {
    if !(0.0..=MAX_DISCOUNT_PERCENT).contains(&discount) {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0.0,
            max: MAX_DISCOUNT_PERCENT,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(discount: f64) -> ProductCreate {
        ProductCreate {
            name: "AirFryer".to_string(),
            price: 3000.0,
            discount,
            store: "ABC TECH".to_string(),
        }
    }

    #[test]
    fn test_validate_discount_bounds() {
        // Whole allowed range, including both endpoints
        assert!(validate_discount(0.0).is_ok());
        assert!(validate_discount(22.0).is_ok());
        assert!(validate_discount(70.0).is_ok());

        assert!(validate_discount(70.1).is_err());
        assert!(validate_discount(100.0).is_err());
        assert!(validate_discount(-1.0).is_err());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Çamaşır Makinesi").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(1500.0).is_ok());
        assert!(validate_price(-0.01).is_err());
    }

    #[test]
    fn test_validate_product_create() {
        assert!(validate_product_create(&candidate(22.0)).is_ok());

        let err = validate_product_create(&candidate(71.0)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::OutOfRange {
                field: "discount".to_string(),
                min: 0.0,
                max: 70.0,
            }
        );
    }
}
