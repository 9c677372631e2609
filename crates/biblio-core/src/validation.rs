//! # Validation Module
//!
//! Input validation utilities for Biblio.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: HTTP boundary (axum extractors)                           │
//! │  ├── Type validation (deserialization, path/query parsing)         │
//! │  └── Request-shape errors → 400 before any service runs            │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE - business rule validation                    │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Database (SQLite)                                         │
//! │  ├── NOT NULL / CHECK constraints                                   │
//! │  ├── PRIMARY KEY constraints                                        │
//! │  └── Foreign key constraints                                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::DiscountRate;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an ISBN.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 32 characters
/// - Should contain only alphanumeric characters and hyphens
///
/// The conventional 13-digit length is NOT enforced: legacy 10-character
/// ISBNs (which may end in `X`) and hyphenated forms are accepted as-is.
///
/// ## Example
/// ```rust
/// use biblio_core::validation::validate_isbn;
///
/// assert!(validate_isbn("9780123456789").is_ok());
/// assert!(validate_isbn("0-306-40615-2").is_ok());
/// assert!(validate_isbn("").is_err());
/// ```
pub fn validate_isbn(isbn: &str) -> ValidationResult<()> {
    let isbn = isbn.trim();

    if isbn.is_empty() {
        return Err(ValidationError::Required {
            field: "isbn".to_string(),
        });
    }

    if isbn.len() > 32 {
        return Err(ValidationError::TooLong {
            field: "isbn".to_string(),
            max: 32,
        });
    }

    if !isbn.chars().all(|c| c.is_alphanumeric() || c == '-') {
        return Err(ValidationError::InvalidFormat {
            field: "isbn".to_string(),
            reason: "must contain only letters, numbers, and hyphens".to_string(),
        });
    }

    Ok(())
}

/// Validates a book title.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_title(title: &str) -> ValidationResult<()> {
    let title = title.trim();

    if title.is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    if title.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "title".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a publisher or author name.
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use biblio_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(4999).is_ok());  // $49.99
/// assert!(validate_price_cents(0).is_ok());     // Free item
/// assert!(validate_price_cents(-100).is_err()); // Invalid
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a cart owner's user id.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// A non-positive id is a request error, distinct from "user has an empty
/// cart" (which is a perfectly valid state yielding zero totals).
pub fn validate_user_id(user_id: i64) -> ValidationResult<()> {
    if user_id <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "userId".to_string(),
        });
    }

    Ok(())
}

/// Validates a discount percentage and converts it to basis points.
///
/// ## Rules
/// - Must be within `[0, 100]`
///
/// An unclamped rate could push prices negative (rate > 100) or silently
/// raise them (rate < 0); both are rejected here before any price math.
///
/// ## Example
/// ```rust
/// use biblio_core::validation::validate_discount_percentage;
///
/// assert_eq!(validate_discount_percentage(10.0).unwrap().bps(), 1000);
/// assert!(validate_discount_percentage(-0.5).is_err());
/// assert!(validate_discount_percentage(100.5).is_err());
/// ```
pub fn validate_discount_percentage(pct: f64) -> ValidationResult<DiscountRate> {
    if !(0.0..=100.0).contains(&pct) {
        return Err(ValidationError::OutOfRange {
            field: "percentage".to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(DiscountRate::from_percentage(pct))
}

/// Validates a single rating value.
///
/// ## Rules
/// - Must be within the 1-5 star scale
pub fn validate_rating(rating: i64) -> ValidationResult<()> {
    if !(1..=5).contains(&rating) {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 1,
            max: 5,
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

    #[test]
    fn test_validate_isbn() {
        // Valid ISBNs
        assert!(validate_isbn("9780123456789").is_ok());
        assert!(validate_isbn("0-306-40615-2").is_ok());
        assert!(validate_isbn("030640615X").is_ok());

        // Invalid ISBNs
        assert!(validate_isbn("").is_err());
        assert!(validate_isbn("   ").is_err());
        assert!(validate_isbn("has space").is_err());
        assert!(validate_isbn(&"9".repeat(40)).is_err());
    }

    #[test]
    fn test_validate_title() {
        assert!(validate_title("The Rust Programming Language").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(4999).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_user_id() {
        assert!(validate_user_id(1).is_ok());
        assert!(validate_user_id(0).is_err());
        assert!(validate_user_id(-1).is_err());
    }

    #[test]
    fn test_validate_discount_percentage() {
        assert_eq!(validate_discount_percentage(0.0).unwrap().bps(), 0);
        assert_eq!(validate_discount_percentage(10.0).unwrap().bps(), 1000);
        assert_eq!(validate_discount_percentage(100.0).unwrap().bps(), 10_000);

        assert!(validate_discount_percentage(-0.01).is_err());
        assert!(validate_discount_percentage(100.01).is_err());
        assert!(validate_discount_percentage(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_rating() {
        for r in 1..=5 {
            assert!(validate_rating(r).is_ok());
        }
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
    }
}
