//! # Domain Types
//!
//! Core domain types used throughout TillPoint.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐    │
//! │  │  CatalogItem    │   │    CartLine     │   │   SaleRecord    │    │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │    │
//! │  │  name (key)     │   │  item_name      │   │  item_name      │    │
//! │  │  price          │   │  quantity       │   │  quantity       │    │
//! │  │  stock          │   │  unit_price     │   │  unit_price     │    │
//! │  │  barcode?       │   │  mode           │   │  total, mode    │    │
//! │  └─────────────────┘   └─────────────────┘   │  sold_at        │    │
//! │                                              └─────────────────┘    │
//! │  ┌─────────────────┐   ┌─────────────────┐                          │
//! │  │  BillingMode    │   │ ReceiptSnapshot │                          │
//! │  │  ─────────────  │   │  ─────────────  │                          │
//! │  │  Regular        │   │  lines (copied) │                          │
//! │  │  Fast           │   │  total          │                          │
//! │  └─────────────────┘   │  taken_at       │                          │
//! │                        └─────────────────┘                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Item identity is the display name - the business key the cashier types
//! and the key the inventory table is indexed on. Barcodes are a secondary,
//! optional identity; names and barcodes each stay unique across the catalog.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Timestamp storage format shared by the sales ledger and receipt slot.
///
/// Second precision, local wall-clock, sortable as text.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// Billing Mode
// =============================================================================

/// How a cart line was billed.
///
/// Mode-specific behavior is expressed as pattern matches on this enum,
/// never as string comparisons; the string tags exist only at the
/// persistence boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingMode {
    /// Catalog-backed line: stock-checked at add time, stock-decremented
    /// at settlement.
    #[default]
    Regular,
    /// Free-form manually priced line: no catalog linkage, never affects
    /// stock.
    Fast,
}

impl BillingMode {
    /// The tag written to the `billing_mode` column.
    pub const fn tag(&self) -> &'static str {
        match self {
            BillingMode::Regular => "REGULAR",
            BillingMode::Fast => "FAST",
        }
    }

    /// Decodes a persisted tag.
    ///
    /// Anything other than the FAST tag is treated as regular, so rows
    /// written before the column existed (or with a mangled tag) still
    /// aggregate under regular billing.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "FAST" => BillingMode::Fast,
            _ => BillingMode::Regular,
        }
    }

    /// Whether settlement decrements catalog stock for this mode.
    pub const fn affects_stock(&self) -> bool {
        matches!(self, BillingMode::Regular)
    }
}

// =============================================================================
// Catalog Item
// =============================================================================

/// An item stocked in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Display name - unique business key.
    pub name: String,

    /// Unit price.
    pub price: Money,

    /// Current stock level. Settlement decrements; no floor is enforced
    /// here (the cart validates before committing).
    pub stock: i64,

    /// Optional barcode (unique across the catalog when present).
    pub barcode: Option<String>,
}

impl CatalogItem {
    /// Checks whether `quantity` units can be sold from current stock.
    pub fn can_sell(&self, quantity: i64) -> bool {
        self.stock >= quantity
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// A line entry in the active cart.
///
/// Owned exclusively by the cart for the duration of one transaction.
/// The unit price is frozen at add time; later catalog edits do not
/// reprice lines already in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Item name (catalog key for regular lines, free text for fast lines).
    pub item_name: String,

    /// Units on this line (always positive).
    pub quantity: i64,

    /// Price per unit, frozen at add time.
    pub unit_price: Money,

    /// Billing mode tag. Part of the merge key: fast and regular lines
    /// with the same name and price never coalesce.
    pub mode: BillingMode,
}

impl CartLine {
    /// Line total: quantity × unit price, computed fresh.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Sale Record
// =============================================================================

/// One persisted ledger row, written at settlement - one per cart line,
/// not per unit. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub item_name: String,
    pub quantity: i64,
    pub unit_price: Money,
    /// quantity × unit_price, stored redundantly the way the ledger
    /// schema keeps it.
    pub total: Money,
    pub sold_at: NaiveDateTime,
    pub mode: BillingMode,
}

impl SaleRecord {
    /// Builds a ledger row from a cart line at settlement time.
    pub fn from_line(line: &CartLine, sold_at: NaiveDateTime) -> Self {
        SaleRecord {
            item_name: line.item_name.clone(),
            quantity: line.quantity,
            unit_price: line.unit_price,
            total: line.line_total(),
            sold_at,
            mode: line.mode,
        }
    }
}

// =============================================================================
// Receipt Snapshot
// =============================================================================

/// The single persisted copy of the most recently settled transaction.
///
/// Lines are copied, not referenced; exactly one snapshot exists at a
/// time (each settlement overwrites the previous one). Supports
/// "reprint last receipt" only - there is no receipt history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptSnapshot {
    pub lines: Vec<CartLine>,
    pub total: Money,
    pub taken_at: NaiveDateTime,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 29)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_billing_mode_tags_round_trip() {
        assert_eq!(BillingMode::Regular.tag(), "REGULAR");
        assert_eq!(BillingMode::Fast.tag(), "FAST");
        assert_eq!(BillingMode::from_tag("FAST"), BillingMode::Fast);
        assert_eq!(BillingMode::from_tag("REGULAR"), BillingMode::Regular);
    }

    #[test]
    fn test_unknown_tag_defaults_to_regular() {
        assert_eq!(BillingMode::from_tag("fast"), BillingMode::Regular);
        assert_eq!(BillingMode::from_tag(""), BillingMode::Regular);
        assert_eq!(BillingMode::from_tag("WHOLESALE"), BillingMode::Regular);
    }

    #[test]
    fn test_only_regular_affects_stock() {
        assert!(BillingMode::Regular.affects_stock());
        assert!(!BillingMode::Fast.affects_stock());
    }

    #[test]
    fn test_line_total() {
        let line = CartLine {
            item_name: "Shirt".to_string(),
            quantity: 2,
            unit_price: Money::from_paise(49900),
            mode: BillingMode::Regular,
        };
        assert_eq!(line.line_total(), Money::from_paise(99800));
    }

    #[test]
    fn test_sale_record_from_line() {
        let line = CartLine {
            item_name: "Shirt".to_string(),
            quantity: 3,
            unit_price: Money::from_paise(5000),
            mode: BillingMode::Fast,
        };
        let record = SaleRecord::from_line(&line, ts());
        assert_eq!(record.total, Money::from_paise(15000));
        assert_eq!(record.mode, BillingMode::Fast);
        assert_eq!(record.sold_at, ts());
    }

    #[test]
    fn test_can_sell() {
        let item = CatalogItem {
            name: "Shirt".to_string(),
            price: Money::from_paise(49900),
            stock: 3,
            barcode: None,
        };
        assert!(item.can_sell(3));
        assert!(!item.can_sell(4));
    }
}
