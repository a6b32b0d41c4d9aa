//! # Cart Engine
//!
//! Accumulates line entries for the current transaction.
//!
//! ## Two Billing Modes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Cart Add Paths                                 │
//! │                                                                     │
//! │  add_regular(catalog, ...)          add_fast(...)                   │
//! │       │                                  │                          │
//! │       ├── qty > 0?                       ├── qty > 0?               │
//! │       ├── price >= 0?                    ├── price > 0?             │
//! │       ├── item in catalog?               │                          │
//! │       ├── stock >= qty?                  │  (no catalog, no stock)  │
//! │       │                                  │                          │
//! │       ▼                                  ▼                          │
//! │  merge on (name, price, REGULAR)    merge on (name, price, FAST)    │
//! │                                                                     │
//! │  A FAST line never merges with a REGULAR line of the same name      │
//! │  and price - the mode is part of the merge key.                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All validation happens before any mutation: a rejected add leaves the
//! cart exactly as it was. The running total is recomputed on demand, so
//! there is no cached invariant to keep in step.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{BillingMode, CartLine};
use crate::validation::{
    validate_fast_price, validate_item_name, validate_price, validate_quantity,
};

/// The active transaction cart.
///
/// Lines keep insertion order; the receipt renders them in exactly this
/// order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds a catalog-backed line.
    ///
    /// ## Errors
    /// - `InvalidQuantity` if `quantity` ≤ 0
    /// - `InvalidPrice` if `unit_price` < 0
    /// - `NotFound` if `item` is not in the catalog
    /// - `OutOfStock` if catalog stock for the item is below `quantity`
    ///
    /// On success the line merges into an existing
    /// `(item, unit_price, Regular)` line or is appended.
    pub fn add_regular(
        &mut self,
        catalog: &Catalog,
        item: &str,
        quantity: i64,
        unit_price: Money,
    ) -> CoreResult<()> {
        validate_quantity(quantity)?;
        validate_price(unit_price)?;

        let entry = catalog
            .get(item)
            .ok_or_else(|| CoreError::NotFound(item.to_string()))?;
        if !entry.can_sell(quantity) {
            return Err(CoreError::OutOfStock {
                item: item.to_string(),
                available: entry.stock,
                requested: quantity,
            });
        }

        self.merge_or_push(item, quantity, unit_price, BillingMode::Regular);
        Ok(())
    }

    /// Adds a free-form manually priced line.
    ///
    /// No stock check and no catalog membership required - fast lines
    /// bill ad-hoc items and never touch inventory.
    ///
    /// ## Errors
    /// - `Required` if the item name is blank
    /// - `InvalidQuantity` if `quantity` ≤ 0
    /// - `InvalidPrice` if `unit_price` ≤ 0
    pub fn add_fast(&mut self, item: &str, quantity: i64, unit_price: Money) -> CoreResult<()> {
        validate_item_name(item)?;
        validate_quantity(quantity)?;
        validate_fast_price(unit_price)?;

        self.merge_or_push(item.trim(), quantity, unit_price, BillingMode::Fast);
        Ok(())
    }

    /// Coalesces into an existing line with the same merge key, else
    /// appends. The merge key is (name, unit price, mode).
    fn merge_or_push(&mut self, item: &str, quantity: i64, unit_price: Money, mode: BillingMode) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.item_name == item && l.unit_price == unit_price && l.mode == mode)
        {
            line.quantity += quantity;
            return;
        }
        self.lines.push(CartLine {
            item_name: item.to_string(),
            quantity,
            unit_price,
            mode,
        });
    }

    /// Removes a line by position.
    pub fn remove_line(&mut self, index: usize) -> CoreResult<CartLine> {
        if index >= self.lines.len() {
            return Err(CoreError::IndexOutOfRange {
                index,
                len: self.lines.len(),
            });
        }
        Ok(self.lines.remove(index))
    }

    /// Running total: sum of quantity × unit price across all lines,
    /// computed fresh each call.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Empties the cart. Called after settlement.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
