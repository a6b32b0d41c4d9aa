//! # Register Session
//!
//! One open till: the in-memory catalog mirror, the live cart, and the
//! database handle, in a single explicit object.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Session::open(db)                                                  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  inventory.fetch_all() ──► Catalog::from_rows ──► in-memory mirror  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  scan / add to cart / edit inventory ... (mirror is authoritative)  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  checkout() ──► ledger rows + stock writes + receipt slot           │
//! │                 (see checkout.rs)                                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! During a session the mirror is the source of truth for stock and
//! prices; every edit writes through to the database so a crash loses
//! at most the uncommitted cart.

use tracing::info;

use crate::error::RegisterResult;
use till_core::cart::Cart;
use till_core::catalog::Catalog;
use till_core::error::CoreError;
use till_core::money::Money;
use till_core::types::{CartLine, CatalogItem};
use till_db::Database;

/// An open register session.
pub struct Session {
    catalog: Catalog,
    cart: Cart,
    db: Database,
}

impl Session {
    /// Opens a session, hydrating the catalog mirror from the database.
    pub async fn open(db: Database) -> RegisterResult<Self> {
        let items = db.inventory().fetch_all().await?;
        info!(items = items.len(), "Register session opened");

        Ok(Session {
            catalog: Catalog::from_rows(items),
            cart: Cart::new(),
            db,
        })
    }

    /// Read access to the catalog mirror.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Read access to the live cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The underlying database handle.
    pub fn db(&self) -> &Database {
        &self.db
    }

    // =========================================================================
    // Inventory edits (write-through: mirror first, then the row)
    // =========================================================================

    /// Adds a new item to the catalog and persists it.
    pub async fn add_item(
        &mut self,
        name: &str,
        price: Money,
        stock: i64,
        barcode: Option<String>,
    ) -> RegisterResult<()> {
        // Mirror add validates and catches duplicates before any I/O
        self.catalog.add(name, price, stock, barcode)?;

        let item = self
            .catalog
            .get(name.trim())
            .expect("item was just added to the mirror")
            .clone();

        if let Err(e) = self.db.inventory().insert(&item).await {
            // Keep mirror and rows consistent
            self.catalog.remove(&item.name)?;
            return Err(e.into());
        }
        Ok(())
    }

    /// Edits an item (rename, reprice, stock correction) and persists.
    pub async fn update_item(
        &mut self,
        old_name: &str,
        new_name: &str,
        new_price: Money,
        stock_delta: i64,
    ) -> RegisterResult<()> {
        let before = self
            .catalog
            .get(old_name)
            .ok_or_else(|| CoreError::NotFound(old_name.to_string()))?
            .clone();
        self.catalog
            .rename(old_name, new_name, new_price, stock_delta)?;

        let item = self
            .catalog
            .get(new_name.trim())
            .expect("item was just renamed in the mirror")
            .clone();
        if let Err(e) = self.db.inventory().update_item(old_name, &item).await {
            // Keep mirror and rows consistent
            self.catalog
                .rename(&item.name, &before.name, before.price, -stock_delta)?;
            return Err(e.into());
        }
        Ok(())
    }

    /// Removes an item by name or barcode and persists the removal.
    pub async fn remove_item(&mut self, identifier: &str) -> RegisterResult<CatalogItem> {
        let item = self.catalog.remove(identifier)?;
        if let Err(e) = self.db.inventory().delete(&item.name).await {
            // Keep mirror and rows consistent
            self.catalog
                .add(&item.name, item.price, item.stock, item.barcode.clone())?;
            return Err(e.into());
        }
        Ok(item)
    }

    /// Applies a signed stock correction and persists the new level.
    pub async fn restock(&mut self, name: &str, delta: i64) -> RegisterResult<i64> {
        let new_stock = self.catalog.adjust_stock(name, delta)?;
        self.db.inventory().update_stock(name, new_stock).await?;
        Ok(new_stock)
    }

    // =========================================================================
    // Cart operations (pure, mirror-checked)
    // =========================================================================

    /// Adds a stock item to the cart by name or scanned barcode, at the
    /// catalog price.
    pub fn add_to_cart(&mut self, identifier: &str, quantity: i64) -> RegisterResult<()> {
        let name = self
            .catalog
            .resolve(identifier)
            .ok_or_else(|| CoreError::NotFound(identifier.to_string()))?
            .to_string();
        let price = self
            .catalog
            .get(&name)
            .expect("resolved name is present")
            .price;

        self.cart.add_regular(&self.catalog, &name, quantity, price)?;
        Ok(())
    }

    /// Adds a manually priced line (fast billing). No stock involvement.
    pub fn add_fast_to_cart(
        &mut self,
        item: &str,
        quantity: i64,
        unit_price: Money,
    ) -> RegisterResult<()> {
        self.cart.add_fast(item, quantity, unit_price)?;
        Ok(())
    }

    /// Removes a cart line by its display index.
    pub fn remove_cart_line(&mut self, index: usize) -> RegisterResult<CartLine> {
        Ok(self.cart.remove_line(index)?)
    }

    /// Empties the cart without settling (void).
    pub fn void_cart(&mut self) {
        self.cart.clear();
    }

    /// Internal: mutable access for the settlement path.
    pub(crate) fn parts_mut(&mut self) -> (&mut Catalog, &mut Cart, &Database) {
        (&mut self.catalog, &mut self.cart, &self.db)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use till_db::DbConfig;

    async fn open_session() -> Session {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        Session::open(db).await.unwrap()
    }

    #[tokio::test]
    async fn test_open_hydrates_catalog() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.inventory()
            .insert(&CatalogItem {
                name: "Shirt".to_string(),
                price: Money::from_paise(49900),
                stock: 10,
                barcode: Some("8901234".to_string()),
            })
            .await
            .unwrap();

        let session = Session::open(db).await.unwrap();
        assert_eq!(session.catalog().len(), 1);
        assert_eq!(session.catalog().resolve("8901234"), Some("Shirt"));
    }

    #[tokio::test]
    async fn test_add_item_writes_through() {
        let mut session = open_session().await;
        session
            .add_item("Shirt", Money::from_paise(49900), 10, None)
            .await
            .unwrap();

        assert!(session.catalog().get("Shirt").is_some());
        let rows = session.db().inventory().fetch_all().await.unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn test_add_duplicate_item_fails_fast() {
        let mut session = open_session().await;
        session
            .add_item("Shirt", Money::from_paise(49900), 10, None)
            .await
            .unwrap();
        let err = session
            .add_item("Shirt", Money::from_paise(59900), 5, None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::RegisterError::Core(CoreError::DuplicateItem { .. })
        ));
    }

    #[tokio::test]
    async fn test_restock_persists_absolute_level() {
        let mut session = open_session().await;
        session
            .add_item("Shirt", Money::from_paise(49900), 10, None)
            .await
            .unwrap();

        let new_level = session.restock("Shirt", 5).await.unwrap();
        assert_eq!(new_level, 15);

        let rows = session.db().inventory().fetch_all().await.unwrap();
        assert_eq!(rows[0].stock, 15);
    }

    #[tokio::test]
    async fn test_add_to_cart_by_barcode() {
        let mut session = open_session().await;
        session
            .add_item(
                "Shirt",
                Money::from_paise(49900),
                10,
                Some("8901234".to_string()),
            )
            .await
            .unwrap();

        session.add_to_cart("8901234", 2).unwrap();
        assert_eq!(session.cart().total(), Money::from_paise(99800));
        assert_eq!(session.cart().lines()[0].item_name, "Shirt");
    }

    #[tokio::test]
    async fn test_remove_item_by_barcode_deletes_row() {
        let mut session = open_session().await;
        session
            .add_item(
                "Shirt",
                Money::from_paise(49900),
                10,
                Some("8901234".to_string()),
            )
            .await
            .unwrap();

        let removed = session.remove_item("8901234").await.unwrap();
        assert_eq!(removed.name, "Shirt");
        assert_eq!(session.db().inventory().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_item_restores_mirror_on_db_failure() {
        let mut session = open_session().await;
        session
            .add_item(
                "Shirt",
                Money::from_paise(49900),
                10,
                Some("8901234".to_string()),
            )
            .await
            .unwrap();

        session.db().close().await;
        let err = session
            .update_item("Shirt", "Polo Shirt", Money::from_paise(59900), 5)
            .await
            .unwrap_err();
        assert!(matches!(err, crate::error::RegisterError::Db(_)));

        let item = session.catalog().get("Shirt").unwrap();
        assert_eq!(item.price, Money::from_paise(49900));
        assert_eq!(item.stock, 10);
        assert!(session.catalog().get("Polo Shirt").is_none());
        assert_eq!(session.catalog().resolve("8901234"), Some("Shirt"));
    }

    #[tokio::test]
    async fn test_remove_item_restores_mirror_on_db_failure() {
        let mut session = open_session().await;
        session
            .add_item(
                "Shirt",
                Money::from_paise(49900),
                10,
                Some("8901234".to_string()),
            )
            .await
            .unwrap();

        session.db().close().await;
        let err = session.remove_item("Shirt").await.unwrap_err();
        assert!(matches!(err, crate::error::RegisterError::Db(_)));

        assert_eq!(session.catalog().get("Shirt").unwrap().stock, 10);
        assert_eq!(session.catalog().resolve("8901234"), Some("Shirt"));
    }

    #[tokio::test]
    async fn test_void_cart_keeps_stock() {
        let mut session = open_session().await;
        session
            .add_item("Shirt", Money::from_paise(49900), 10, None)
            .await
            .unwrap();
        session.add_to_cart("Shirt", 2).unwrap();

        session.void_cart();

        assert!(session.cart().is_empty());
        assert_eq!(session.catalog().get("Shirt").unwrap().stock, 10);
    }
}
