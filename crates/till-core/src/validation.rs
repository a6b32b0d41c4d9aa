//! # Validation Module
//!
//! Input validation for cart and catalog operations.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: THIS MODULE - business rule validation                    │
//! │  ├── Runs before any mutation                                       │
//! │  └── A rejected add leaves cart and catalog unchanged               │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: Database (SQLite)                                         │
//! │  ├── NOT NULL constraints                                           │
//! │  └── UNIQUE constraints (name, barcode)                             │
//! │                                                                     │
//! │  Defense in depth: each layer catches different errors              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty or whitespace-only
///
/// ## Example
/// ```rust
/// use till_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Blue Shirt").is_ok());
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> CoreResult<()> {
    if name.trim().is_empty() {
        return Err(CoreError::Required("item name"));
    }
    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity(qty: i64) -> CoreResult<()> {
    if qty <= 0 {
        return Err(CoreError::InvalidQuantity(qty));
    }
    Ok(())
}

/// Validates a unit price for a regular (catalog-backed) line.
///
/// ## Rules
/// - Must be non-negative; zero is allowed (free items)
pub fn validate_price(price: Money) -> CoreResult<()> {
    if price.is_negative() {
        return Err(CoreError::InvalidPrice(price.paise()));
    }
    Ok(())
}

/// Validates a unit price for a fast (manually entered) line.
///
/// ## Rules
/// - Must be strictly positive: a fast line is a manual bill entry, and
///   a zero price there is a typo, not a giveaway
pub fn validate_fast_price(price: Money) -> CoreResult<()> {
    if !price.is_positive() {
        return Err(CoreError::InvalidPrice(price.paise()));
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
    fn test_validate_item_name() {
        assert!(validate_item_name("Blue Shirt").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());
        assert_eq!(validate_quantity(0), Err(CoreError::InvalidQuantity(0)));
        assert_eq!(validate_quantity(-3), Err(CoreError::InvalidQuantity(-3)));
    }

    #[test]
    fn test_validate_price_allows_zero() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_paise(1099)).is_ok());
        assert_eq!(
            validate_price(Money::from_paise(-100)),
            Err(CoreError::InvalidPrice(-100))
        );
    }

    #[test]
    fn test_validate_fast_price_rejects_zero() {
        assert!(validate_fast_price(Money::from_paise(1)).is_ok());
        assert_eq!(
            validate_fast_price(Money::zero()),
            Err(CoreError::InvalidPrice(0))
        );
        assert_eq!(
            validate_fast_price(Money::from_paise(-100)),
            Err(CoreError::InvalidPrice(-100))
        );
    }
}
