//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                      │
//! │  ├── CoreError        - Business rule violations                        │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  Console shell (apps/console)                                           │
//! │  └── prints the Display text and returns to the menu                    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → printed message → next action      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error is recovered at the menu action that produced it; the
//! session loop continues. The single exception is authentication
//! failure, which is not an error value at all: it is the
//! [`Role::Unknown`](crate::Role::Unknown) sentinel the shell turns
//! into exit code 1.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (id, capacity, quantities)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic
/// failures. The shell catches them and shows the Display text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The session's role lacks privilege for an Admin-only action.
    ///
    /// The action continues to the next menu iteration; nothing was
    /// mutated.
    #[error("Access denied! You do not have permission to {action} products.")]
    PermissionDenied {
        /// The verb of the attempted action ("add", "delete", "update").
        action: &'static str,
    },

    /// No product carries the requested id.
    #[error("Product with ID {id} not found.")]
    ProductNotFound { id: u32 },

    /// No product carries the requested name (exact, case-sensitive).
    #[error("Product with name '{name}' not found.")]
    NameNotFound { name: String },

    /// A product with this id is already in the inventory.
    ///
    /// ## When This Occurs
    /// Ids must be unique among active products; re-adding a deleted
    /// id is fine, re-adding a live one is not.
    #[error("Product with ID {id} already exists.")]
    DuplicateId { id: u32 },

    /// The inventory is at capacity; nothing was added.
    #[error("Inventory is full ({capacity} products). Cannot add more products.")]
    InventoryFull { capacity: usize },

    /// The transaction log is at capacity.
    ///
    /// A mutating operation that would need a log entry is refused
    /// outright, so the store and the log never disagree about what
    /// happened.
    #[error("Transaction history is full ({capacity} entries). Cannot record further changes.")]
    HistoryFull { capacity: usize },

    /// Sale quantity exceeds available stock.
    ///
    /// ## User Workflow
    /// ```text
    /// Handle Sales (id: 1, qty: 150)
    ///      │
    ///      ▼
    /// Check stock: available=100
    ///      │
    ///      ▼
    /// InsufficientStock { id: 1, available: 100, requested: 150 }
    ///      │
    ///      ▼
    /// Shell shows: "Insufficient quantity in stock."
    /// ```
    #[error("Insufficient quantity in stock.")]
    InsufficientStock {
        id: u32,
        available: i64,
        requested: i64,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Numeric value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: &'static str },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: &'static str },

    /// Price text did not parse as a non-negative decimal amount.
    #[error("price '{input}' is not a valid amount")]
    InvalidPrice { input: String },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_denied_message() {
        let err = CoreError::PermissionDenied { action: "add" };
        assert_eq!(
            err.to_string(),
            "Access denied! You do not have permission to add products."
        );
    }

    #[test]
    fn test_not_found_messages() {
        assert_eq!(
            CoreError::ProductNotFound { id: 7 }.to_string(),
            "Product with ID 7 not found."
        );
        assert_eq!(
            CoreError::NameNotFound {
                name: "Bolt".to_string()
            }
            .to_string(),
            "Product with name 'Bolt' not found."
        );
    }

    #[test]
    fn test_insufficient_stock_message_matches_console_contract() {
        // The shell echoes Display text directly; the wording is part
        // of the external contract.
        let err = CoreError::InsufficientStock {
            id: 1,
            available: 100,
            requested: 150,
        };
        assert_eq!(err.to_string(), "Insufficient quantity in stock.");
    }

    #[test]
    fn test_validation_error_converts_to_core_error() {
        let validation = ValidationError::Required { field: "name" };
        let core: CoreError = validation.into();
        assert_eq!(core.to_string(), "Validation error: name is required");
    }
}
