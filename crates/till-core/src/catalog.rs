//! # Catalog
//!
//! In-memory mirror of the inventory table for one till session.
//!
//! ## Dual-Key Resolution
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │              resolve("8901030") - name or barcode?                  │
//! │                                                                     │
//! │  identifier ──► items: HashMap<name, CatalogItem>   (primary key)   │
//! │       │              │ miss                                         │
//! │       │              ▼                                              │
//! │       └────────► barcodes: HashMap<barcode, name>   (secondary)     │
//! │                      │ miss                                         │
//! │                      ▼                                              │
//! │                    None                                             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Names and barcodes occupy disjoint value spaces (each unique, both
//! enforced here and by the table's UNIQUE constraints), so lookup order
//! cannot change the answer; the name index is simply tried first.
//!
//! The mirror is authoritative for the session: every mutation here is
//! mirrored to the backing store by the register layer before the call
//! returns to the UI.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::CatalogItem;
use crate::validation::{validate_item_name, validate_price};

/// Session-scoped item catalog with name and barcode indexes.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Primary index: item name → item.
    items: HashMap<String, CatalogItem>,
    /// Secondary index: barcode → item name.
    barcodes: HashMap<String, String>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Hydrates a catalog from persisted inventory rows.
    ///
    /// Called once at session start with the result of `fetch_inventory`.
    pub fn from_rows(rows: impl IntoIterator<Item = CatalogItem>) -> Self {
        let mut catalog = Catalog::new();
        for item in rows {
            if let Some(code) = &item.barcode {
                catalog.barcodes.insert(code.clone(), item.name.clone());
            }
            catalog.items.insert(item.name.clone(), item);
        }
        catalog
    }

    /// Resolves an identifier (exact name or exact barcode) to an item name.
    ///
    /// Name index first, then the barcode index.
    pub fn resolve(&self, identifier: &str) -> Option<&str> {
        if let Some(item) = self.items.get(identifier) {
            return Some(item.name.as_str());
        }
        self.barcodes.get(identifier).map(String::as_str)
    }

    /// Looks up an item by name or barcode.
    pub fn lookup(&self, identifier: &str) -> Option<&CatalogItem> {
        let name = self.resolve(identifier)?;
        self.items.get(name)
    }

    /// Looks up an item by its exact name only.
    pub fn get(&self, name: &str) -> Option<&CatalogItem> {
        self.items.get(name)
    }

    /// Adds a new item.
    ///
    /// ## Errors
    /// - `DuplicateItem` if the name is already present
    /// - `DuplicateItem` if the barcode is already assigned to another item
    pub fn add(
        &mut self,
        name: &str,
        price: Money,
        stock: i64,
        barcode: Option<String>,
    ) -> CoreResult<()> {
        validate_item_name(name)?;
        validate_price(price)?;

        let name = name.trim();
        if self.items.contains_key(name) {
            return Err(CoreError::DuplicateItem {
                field: "item",
                value: name.to_string(),
            });
        }
        if let Some(code) = &barcode {
            if self.barcodes.contains_key(code) {
                return Err(CoreError::DuplicateItem {
                    field: "barcode",
                    value: code.clone(),
                });
            }
        }

        if let Some(code) = &barcode {
            self.barcodes.insert(code.clone(), name.to_string());
        }
        self.items.insert(
            name.to_string(),
            CatalogItem {
                name: name.to_string(),
                price,
                stock,
                barcode,
            },
        );
        Ok(())
    }

    /// Adjusts stock by a signed delta and returns the new level.
    ///
    /// No floor is enforced at this layer - the cart validates stock
    /// before a sale is committed, and a restock correction may need to
    /// drive the number below zero on purpose.
    pub fn adjust_stock(&mut self, name: &str, delta: i64) -> CoreResult<i64> {
        let item = self
            .items
            .get_mut(name)
            .ok_or_else(|| CoreError::NotFound(name.to_string()))?;
        item.stock += delta;
        Ok(item.stock)
    }

    /// Renames an item, updating its price and applying a stock delta
    /// in the same edit. The barcode follows the item.
    ///
    /// ## Errors
    /// - `NotFound` if `old_name` is absent
    /// - `DuplicateItem` if `new_name` already belongs to a different item
    /// - `InvalidPrice` if the new price is negative
    pub fn rename(
        &mut self,
        old_name: &str,
        new_name: &str,
        new_price: Money,
        stock_delta: i64,
    ) -> CoreResult<()> {
        validate_item_name(new_name)?;
        validate_price(new_price)?;

        let new_name = new_name.trim();
        if !self.items.contains_key(old_name) {
            return Err(CoreError::NotFound(old_name.to_string()));
        }
        if new_name != old_name && self.items.contains_key(new_name) {
            return Err(CoreError::DuplicateItem {
                field: "item",
                value: new_name.to_string(),
            });
        }

        let mut item = self.items.remove(old_name).expect("presence checked above");
        item.name = new_name.to_string();
        item.price = new_price;
        item.stock += stock_delta;
        if let Some(code) = &item.barcode {
            self.barcodes.insert(code.clone(), new_name.to_string());
        }
        self.items.insert(new_name.to_string(), item);
        Ok(())
    }

    /// Removes an item by name or barcode, returning the removed item.
    pub fn remove(&mut self, identifier: &str) -> CoreResult<CatalogItem> {
        let name = self
            .resolve(identifier)
            .ok_or_else(|| CoreError::NotFound(identifier.to_string()))?
            .to_string();
        let item = self.items.remove(&name).expect("resolved name is present");
        if let Some(code) = &item.barcode {
            self.barcodes.remove(code);
        }
        Ok(item)
    }

    /// Number of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over all items (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.values()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        let mut catalog = Catalog::new();
        catalog
            .add("Shirt", Money::from_paise(49900), 10, Some("8901001".into()))
            .unwrap();
        catalog
            .add("Jeans", Money::from_paise(129900), 4, None)
            .unwrap();
        catalog
    }

    #[test]
    fn test_lookup_by_name_and_barcode() {
        let catalog = sample();
        assert_eq!(catalog.lookup("Shirt").unwrap().stock, 10);
        assert_eq!(catalog.lookup("8901001").unwrap().name, "Shirt");
        assert!(catalog.lookup("Socks").is_none());
        assert!(catalog.lookup("0000000").is_none());
    }

    #[test]
    fn test_resolve_prefers_name_index() {
        let catalog = sample();
        assert_eq!(catalog.resolve("Jeans"), Some("Jeans"));
        assert_eq!(catalog.resolve("8901001"), Some("Shirt"));
    }

    #[test]
    fn test_add_duplicate_name_rejected() {
        let mut catalog = sample();
        let err = catalog
            .add("Shirt", Money::from_paise(100), 1, None)
            .unwrap_err();
        assert!(matches!(err, CoreError::DuplicateItem { field: "item", .. }));
        // Original item untouched
        assert_eq!(catalog.lookup("Shirt").unwrap().price, Money::from_paise(49900));
    }

    #[test]
    fn test_add_duplicate_barcode_rejected() {
        let mut catalog = sample();
        let err = catalog
            .add("Socks", Money::from_paise(9900), 20, Some("8901001".into()))
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::DuplicateItem { field: "barcode", .. }
        ));
        assert!(catalog.lookup("Socks").is_none());
    }

    #[test]
    fn test_adjust_stock_signed_no_floor() {
        let mut catalog = sample();
        assert_eq!(catalog.adjust_stock("Jeans", -6).unwrap(), -2);
        assert_eq!(catalog.adjust_stock("Jeans", 10).unwrap(), 8);
        assert!(matches!(
            catalog.adjust_stock("Socks", 1),
            Err(CoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_rename_keeps_barcode() {
        let mut catalog = sample();
        catalog
            .rename("Shirt", "Formal Shirt", Money::from_paise(59900), 5)
            .unwrap();

        assert!(catalog.lookup("Shirt").is_none());
        let item = catalog.lookup("Formal Shirt").unwrap();
        assert_eq!(item.price, Money::from_paise(59900));
        assert_eq!(item.stock, 15);
        // Barcode still resolves, now to the new name
        assert_eq!(catalog.resolve("8901001"), Some("Formal Shirt"));
    }

    #[test]
    fn test_rename_missing_and_collision() {
        let mut catalog = sample();
        assert!(matches!(
            catalog.rename("Socks", "Tube Socks", Money::zero(), 0),
            Err(CoreError::NotFound(_))
        ));
        assert!(matches!(
            catalog.rename("Jeans", "Shirt", Money::from_paise(100), 0),
            Err(CoreError::DuplicateItem { .. })
        ));
    }

    #[test]
    fn test_remove_by_barcode() {
        let mut catalog = sample();
        let removed = catalog.remove("8901001").unwrap();
        assert_eq!(removed.name, "Shirt");
        assert!(catalog.lookup("Shirt").is_none());
        assert!(catalog.lookup("8901001").is_none());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_remove_missing() {
        let mut catalog = sample();
        assert!(matches!(
            catalog.remove("Socks"),
            Err(CoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_from_rows_builds_both_indexes() {
        let rows = vec![
            CatalogItem {
                name: "Cap".into(),
                price: Money::from_paise(19900),
                stock: 7,
                barcode: Some("111".into()),
            },
            CatalogItem {
                name: "Belt".into(),
                price: Money::from_paise(39900),
                stock: 2,
                barcode: None,
            },
        ];
        let catalog = Catalog::from_rows(rows);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.lookup("111").unwrap().name, "Cap");
    }
}
