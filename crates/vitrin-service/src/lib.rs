//! # vitrin-service: Validation + Orchestration for Vitrin
//!
//! The service layer sits between the caller (an HTTP layer or similar,
//! outside this workspace) and the repository. It is the only place
//! business rules are enforced; every other call is pure delegation.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Service Layer Flow                           │
//! │                                                                     │
//! │  Caller                                                             │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ProductService (trait)                                             │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ProductServiceImpl                                                 │
//! │  ├── add ──► validate_product_create ──► repo.insert                │
//! │  │              │                                                   │
//! │  │              └── invalid? return early, ZERO writes              │
//! │  │                                                                  │
//! │  ├── get_by_id ──► repo.get_by_id ──► None → NotFound               │
//! │  └── everything else ──► straight delegation                        │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ProductReader + ProductWriter (vitrin-db)                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] - The `ProductService` trait and its implementation
//! - [`error`] - Service error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod product;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ServiceError, ServiceResult};
pub use product::{ProductService, ProductServiceImpl};
