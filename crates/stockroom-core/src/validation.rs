//! # Validation Module
//!
//! Input validation utilities for Stockroom.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console prompts (apps/console)                                │
//! │  ├── Re-prompt on unparseable numbers                                   │
//! │  └── Immediate user feedback                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── Field length and emptiness                                         │
//! │  └── Quantity sign rules                                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Session operations                                            │
//! │  ├── Role gating                                                        │
//! │  ├── Capacity checks                                                    │
//! │  └── Id uniqueness                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::{validate_product_name, validate_quantity};
//!
//! validate_product_name("Bolt").unwrap();
//! validate_quantity(100).unwrap();
//! ```

use crate::error::ValidationError;
use crate::MAX_FIELD_LENGTH;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 100 characters
///
/// ## Returns
/// The trimmed name.
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }

    if name.chars().count() > MAX_FIELD_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name",
            max: MAX_FIELD_LENGTH,
        });
    }

    Ok(name.to_string())
}

/// Validates a credential field (username or password).
///
/// Over-length credentials can never match a configured user, but they
/// are rejected here so the authenticator only ever compares bounded
/// text.
pub fn validate_credential(field: &'static str, value: &str) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }

    if value.chars().count() > MAX_FIELD_LENGTH {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_FIELD_LENGTH,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a stock quantity (add/update).
///
/// ## Rules
/// - Must not be negative (zero stock is a valid state)
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::MustBeNonNegative { field: "quantity" });
    }

    Ok(())
}

/// Validates a sale quantity.
///
/// ## Rules
/// - Must be positive: selling zero (or fewer) units is meaningless
pub fn validate_sale_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "sale quantity",
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
    fn test_validate_product_name_trims() {
        assert_eq!(validate_product_name("  Bolt  ").unwrap(), "Bolt");
    }

    #[test]
    fn test_validate_product_name_rejects_empty() {
        assert_eq!(
            validate_product_name("   "),
            Err(ValidationError::Required { field: "name" })
        );
    }

    #[test]
    fn test_validate_product_name_rejects_over_length() {
        let long = "x".repeat(MAX_FIELD_LENGTH + 1);
        assert_eq!(
            validate_product_name(&long),
            Err(ValidationError::TooLong {
                field: "name",
                max: MAX_FIELD_LENGTH,
            })
        );
    }

    #[test]
    fn test_validate_product_name_accepts_boundary() {
        let exact = "x".repeat(MAX_FIELD_LENGTH);
        assert!(validate_product_name(&exact).is_ok());
    }

    #[test]
    fn test_validate_credential() {
        assert!(validate_credential("username", "admin").is_ok());
        assert!(validate_credential("username", "").is_err());
        assert!(validate_credential("password", &"p".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_quantity_allows_zero() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(100).is_ok());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_sale_quantity_requires_positive() {
        assert!(validate_sale_quantity(1).is_ok());
        assert!(validate_sale_quantity(0).is_err());
        assert!(validate_sale_quantity(-5).is_err());
    }
}
