//! # Validation Module
//!
//! Input validation rules for the sweet shop.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Validation Layers                             │
//! │                                                                     │
//! │  Layer 1: HTTP boundary (axum)                                      │
//! │  └── Type validation (JSON deserialization)                         │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: Services                                                  │
//! │  └── THIS MODULE: business rule validation, before any storage call │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Database (SQLite)                                         │
//! │  ├── NOT NULL / CHECK constraints                                   │
//! │  └── UNIQUE constraint on users.email                               │
//! │                                                                     │
//! │  Defense in depth: each layer catches different errors              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Sweet Field Validators
// =============================================================================

/// Validates a sweet name: must be non-empty after trimming.
pub fn validate_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required { field: "Name" });
    }
    Ok(())
}

/// Validates a category: must be non-empty after trimming. Any text value is
/// accepted beyond that; categories are not an enumeration.
pub fn validate_category(category: &str) -> ValidationResult<()> {
    if category.trim().is_empty() {
        return Err(ValidationError::Required { field: "Category" });
    }
    Ok(())
}

/// Validates a price: must be a non-negative finite number.
///
/// Written as `!(price >= 0.0)` so NaN fails the check too.
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !(price >= 0.0) || price.is_infinite() {
        return Err(ValidationError::InvalidPrice);
    }
    Ok(())
}

/// Validates a quantity: must be non-negative.
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::InvalidQuantity);
    }
    Ok(())
}

// =============================================================================
// Search Validators
// =============================================================================

/// Validates a price range search: `min` must not exceed `max` and neither
/// bound may be negative.
pub fn validate_price_range(min: f64, max: f64) -> ValidationResult<()> {
    if min > max {
        return Err(ValidationError::InvertedPriceRange);
    }
    if min < 0.0 || max < 0.0 {
        return Err(ValidationError::NegativePriceBound);
    }
    Ok(())
}

// =============================================================================
// Stock Adjustment Validators
// =============================================================================

/// Validates a purchase amount: must be strictly positive.
pub fn validate_purchase_amount(amount: i64) -> ValidationResult<()> {
    if amount <= 0 {
        return Err(ValidationError::InvalidPurchaseAmount);
    }
    Ok(())
}

/// Validates a restock amount: must be strictly positive.
pub fn validate_restock_amount(amount: i64) -> ValidationResult<()> {
    if amount <= 0 {
        return Err(ValidationError::InvalidRestockAmount);
    }
    Ok(())
}

// =============================================================================
// Account Validators
// =============================================================================

/// Validates an email address against a simple `local@domain.tld` shape:
/// exactly one `@`, no whitespace, non-empty local part, and a domain with an
/// interior dot. Intentionally loose; full RFC 5322 parsing is not the goal.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    if email.is_empty() {
        return Err(ValidationError::Required { field: "Email" });
    }

    if email.chars().any(|c| c.is_whitespace()) {
        return Err(ValidationError::InvalidEmail);
    }

    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return Err(ValidationError::InvalidEmail),
    };

    if local.is_empty() || domain.is_empty() {
        return Err(ValidationError::InvalidEmail);
    }

    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validates a registration password: at least 6 characters.
pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.len() < 6 {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_category() {
        assert!(validate_name("Kaju Katli").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("  ").is_err());

        assert!(validate_category("chocolate").is_ok());
        assert!(validate_category("anything goes here").is_ok());
        assert!(validate_category("").is_err());
    }

    #[test]
    fn test_price() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(2.5).is_ok());
        assert_eq!(validate_price(-1.0), Err(ValidationError::InvalidPrice));
        assert_eq!(validate_price(f64::NAN), Err(ValidationError::InvalidPrice));
        assert_eq!(
            validate_price(f64::INFINITY),
            Err(ValidationError::InvalidPrice)
        );
    }

    #[test]
    fn test_quantity() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(100).is_ok());
        assert_eq!(validate_quantity(-1), Err(ValidationError::InvalidQuantity));
    }

    #[test]
    fn test_price_range() {
        assert!(validate_price_range(0.0, 10.0).is_ok());
        assert!(validate_price_range(5.0, 5.0).is_ok());
        assert_eq!(
            validate_price_range(10.0, 5.0),
            Err(ValidationError::InvertedPriceRange)
        );
        assert_eq!(
            validate_price_range(-1.0, 5.0),
            Err(ValidationError::NegativePriceBound)
        );
        // min > max is reported before the negative-bound check
        assert_eq!(
            validate_price_range(-1.0, -5.0),
            Err(ValidationError::InvertedPriceRange)
        );
    }

    #[test]
    fn test_stock_adjustments() {
        assert!(validate_purchase_amount(1).is_ok());
        assert_eq!(
            validate_purchase_amount(0),
            Err(ValidationError::InvalidPurchaseAmount)
        );
        assert_eq!(
            validate_purchase_amount(-5),
            Err(ValidationError::InvalidPurchaseAmount)
        );

        assert!(validate_restock_amount(1).is_ok());
        assert_eq!(
            validate_restock_amount(0),
            Err(ValidationError::InvalidRestockAmount)
        );
    }

    #[test]
    fn test_email() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("a.b+c@sub.example.co").is_ok());

        assert_eq!(
            validate_email(""),
            Err(ValidationError::Required { field: "Email" })
        );
        assert_eq!(validate_email("userexample.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("user@@example.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("user@example"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("user@.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("user@example."), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("us er@example.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("@example.com"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_password() {
        assert!(validate_password("secret").is_ok());
        assert_eq!(
            validate_password("12345"),
            Err(ValidationError::PasswordTooShort)
        );
        assert!(validate_password("").is_err());
    }
}
