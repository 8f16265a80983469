//! # Service Error Types
//!
//! What the caller of the service layer sees.
//!
//! ## Two Failure Kinds
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Validation  - business rule violation, caught BEFORE any store     │
//! │                access (discount ceiling, empty name, ...)           │
//! │                                                                     │
//! │  Store       - query/insert/update/delete failure surfaced from     │
//! │                the repository, plus NotFound for single-row         │
//! │                lookups that matched nothing                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use vitrin_core::ValidationError;
use vitrin_db::DbError;

/// Errors produced by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A creation payload violated a business rule. No write happened.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A single-row lookup matched nothing.
    #[error("Product not found: {id}")]
    NotFound { id: i64 },

    /// The repository failed; carries the underlying database error.
    #[error("Store error: {0}")]
    Store(#[from] DbError),
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_converts() {
        let err: ServiceError = ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn test_not_found_message() {
        let err = ServiceError::NotFound { id: 7 };
        assert_eq!(err.to_string(), "Product not found: 7");
    }
}
