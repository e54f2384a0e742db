//! # Error Types
//!
//! Domain-specific error types for mesa-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  mesa-core errors (this file)                                          │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → caller                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the offending value)
//! 3. Errors are enum variants, never String
//! 4. Every operation either fully succeeds or fails with state unchanged
//!
//! Note that an insufficient cash payment is NOT an error: it is a normal
//! settlement outcome, reported as data (see `payment::Settlement`).

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations. They propagate directly
/// to the immediate caller; there is no cross-component recovery logic.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A price was set or supplied with a negative value.
    ///
    /// The mutation that triggered this leaves the prior state unchanged.
    #[error("Price cannot be negative: got {cents} cents")]
    InvalidPrice { cents: i64 },

    /// An order line was added with a non-positive or oversized quantity.
    ///
    /// ## When This Occurs
    /// - `quantity <= 0` (a zero line would be a silent no-op, a negative
    ///   one would produce a negative subtotal)
    /// - `quantity > MAX_ITEM_QUANTITY` (fat-finger protection)
    #[error("Quantity must be between 1 and {max}, got {requested}")]
    InvalidQuantity { requested: i64, max: i64 },

    /// Order has exceeded the maximum allowed number of lines.
    #[error("Order cannot have more than {max} lines")]
    OrderTooLarge { max: usize },

    /// Payment amount is invalid (negative).
    #[error("Invalid payment amount: {cents} cents")]
    InvalidPaymentAmount { cents: i64 },

    /// No catalog record matches the requested category and name.
    #[error("Menu item not found in {category}: {name}")]
    ItemNotFound { category: String, name: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when caller input doesn't meet requirements. Used for early
/// validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

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
        let err = CoreError::InvalidPrice { cents: -250 };
        assert_eq!(err.to_string(), "Price cannot be negative: got -250 cents");

        let err = CoreError::InvalidQuantity {
            requested: 0,
            max: 999,
        };
        assert_eq!(err.to_string(), "Quantity must be between 1 and 999, got 0");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
