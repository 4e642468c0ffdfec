//! # Error Types
//!
//! Domain-specific error types for sweetshop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                │
//! │                                                                     │
//! │  sweetshop-core errors (this file)                                  │
//! │  ├── CoreError        - Business rule failures                      │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  sweetshop-db errors (separate crate)                               │
//! │  └── DbError          - Database operation failures                 │
//! │                                                                     │
//! │  API errors (in app)                                                │
//! │  └── ApiError         - What clients see (status + JSON envelope)   │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → DbError → ApiError → Client    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Error display strings ARE the client-facing messages, so they are
//!    part of the API contract and must stay stable
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur before any storage call. Each variant's display text is the
/// exact message the HTTP layer returns with a 400 status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Price is negative (or not a finite number).
    #[error("Price must be a positive number")]
    InvalidPrice,

    /// Quantity is negative.
    #[error("Quantity must be a non-negative number")]
    InvalidQuantity,

    /// Email does not match the `local@domain.tld` shape.
    #[error("Invalid email format")]
    InvalidEmail,

    /// Registration password shorter than the minimum.
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    /// Price range search with min above max.
    #[error("Minimum price cannot be greater than maximum price")]
    InvertedPriceRange,

    /// Price range search with a negative bound.
    #[error("Prices must be positive numbers")]
    NegativePriceBound,

    /// Purchase amount of zero or less.
    #[error("Purchase quantity must be greater than zero")]
    InvalidPurchaseAmount,

    /// Restock amount of zero or less.
    #[error("Restock quantity must be greater than zero")]
    InvalidRestockAmount,
}

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These represent business rule violations or domain logic failures and map
/// deterministically onto HTTP status codes at the boundary.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The requested sweet does not exist.
    #[error("Sweet with ID {0} not found")]
    SweetNotFound(i64),

    /// A purchase asked for more units than are on hand.
    ///
    /// Distinct from a generic validation error: the request shape was fine,
    /// the domain state just does not allow it.
    #[error("Insufficient stock. Available: {available}, Requested: {requested}")]
    InsufficientStock { available: i64, requested: i64 },

    /// Registration with an email that is already taken.
    #[error("User already exists")]
    UserAlreadyExists,

    /// Login failure. Deliberately the same message for "no such user" and
    /// "wrong password" to prevent account enumeration.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Token verification failure (malformed, expired, or bad signature);
    /// callers are never told which.
    #[error("Invalid token")]
    InvalidToken,

    /// Validation failure (wraps ValidationError, message passes through).
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::SweetNotFound(42);
        assert_eq!(err.to_string(), "Sweet with ID 42 not found");

        let err = CoreError::InsufficientStock {
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock. Available: 3, Requested: 5"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required { field: "Name" };
        assert_eq!(err.to_string(), "Name is required");

        assert_eq!(
            ValidationError::InvalidPrice.to_string(),
            "Price must be a positive number"
        );
        assert_eq!(
            ValidationError::InvertedPriceRange.to_string(),
            "Minimum price cannot be greater than maximum price"
        );
        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            "Password must be at least 6 characters"
        );
    }

    #[test]
    fn test_validation_passes_through_core_error() {
        // The wrapped message must surface unchanged (no "Validation:" prefix),
        // because it is returned verbatim to API clients.
        let core_err: CoreError = ValidationError::InvalidPurchaseAmount.into();
        assert_eq!(
            core_err.to_string(),
            "Purchase quantity must be greater than zero"
        );
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_login_failures_share_one_message() {
        // Anti-enumeration: unknown user and bad password must be identical.
        assert_eq!(
            CoreError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
    }
}
