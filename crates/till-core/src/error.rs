//! # Error Types
//!
//! Domain-specific error types for till-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  till-core errors (this file)                                       │
//! │  └── CoreError      - Business rule violations                      │
//! │                                                                     │
//! │  till-db errors (separate crate)                                    │
//! │  └── DbError        - Database operation failures                   │
//! │                                                                     │
//! │  till-register errors (separate crate)                              │
//! │  ├── PrintError     - Receipt delivery failures                     │
//! │  └── RegisterError  - Composite of all of the above                 │
//! │                                                                     │
//! │  Flow: CoreError / DbError / PrintError → RegisterError → Caller    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item name, stock counts)
//! 3. Errors are enum variants, never String
//! 4. Validation errors fire before any mutation - a rejected operation
//!    leaves cart and catalog exactly as they were

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Identifier resolves to no catalog item.
    ///
    /// ## When This Occurs
    /// - Neither the name index nor the barcode index knows the value
    /// - A regular cart line references an item that was never stocked
    #[error("Item not found: {0}")]
    NotFound(String),

    /// Name or barcode collision on catalog add.
    #[error("Duplicate {field}: '{value}' already exists")]
    DuplicateItem { field: &'static str, value: String },

    /// Quantity is zero or negative.
    #[error("Quantity must be positive, got {0}")]
    InvalidQuantity(i64),

    /// Price is outside the allowed range for the operation.
    ///
    /// Regular lines allow zero (free items); fast lines require a
    /// strictly positive manually entered price.
    #[error("Invalid price: {0} paise")]
    InvalidPrice(i64),

    /// Requested quantity exceeds stock for a regular line.
    ///
    /// ## User Workflow
    /// ```text
    /// Add to Cart (qty: 5)
    ///      │
    ///      ▼
    /// Check stock: available=3
    ///      │
    ///      ▼
    /// OutOfStock { item: "Shirt", available: 3, requested: 5 }
    ///      │
    ///      ▼
    /// UI shows: "Only 3 Shirt in stock"
    /// ```
    #[error("Insufficient stock for {item}: available {available}, requested {requested}")]
    OutOfStock {
        item: String,
        available: i64,
        requested: i64,
    },

    /// Checkout attempted with no cart lines.
    #[error("Cart is empty")]
    EmptyCart,

    /// Cart line index out of range.
    #[error("Line index {index} out of range (cart has {len} lines)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A required text field is missing or blank.
    #[error("{0} is required")]
    Required(&'static str),
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
        let err = CoreError::OutOfStock {
            item: "Shirt".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Shirt: available 3, requested 5"
        );

        let err = CoreError::DuplicateItem {
            field: "barcode",
            value: "8901234".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate barcode: '8901234' already exists");
    }

    #[test]
    fn test_index_out_of_range_message() {
        let err = CoreError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(
            err.to_string(),
            "Line index 4 out of range (cart has 2 lines)"
        );
    }
}
