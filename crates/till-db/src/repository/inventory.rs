//! # Inventory Repository
//!
//! Database operations for the item catalog.
//!
//! ## Key Operations
//! - Full catalog fetch for session hydration
//! - CRUD keyed by item name
//! - Absolute stock writes after settlement
//!
//! ## Stock Writes Are Absolute
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Settlement computes the new stock level in memory and writes it    │
//! │  as an absolute value:                                              │
//! │                                                                     │
//! │    mirror: Shirt stock 10 ── sell 2 ──► 8                           │
//! │    SQL:    UPDATE inventory SET stock = 8 WHERE name = 'Shirt'      │
//! │                                                                     │
//! │  The in-memory catalog is the source of truth during a session;     │
//! │  the row mirrors it, not the other way around.                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use till_core::money::Money;
use till_core::types::CatalogItem;

/// Database row shape for the `inventory` table.
#[derive(Debug, sqlx::FromRow)]
struct InventoryRow {
    name: String,
    price_paise: i64,
    stock: i64,
    barcode: Option<String>,
}

impl From<InventoryRow> for CatalogItem {
    fn from(row: InventoryRow) -> Self {
        CatalogItem {
            name: row.name,
            price: Money::from_paise(row.price_paise),
            stock: row.stock,
            barcode: row.barcode,
        }
    }
}

/// Repository for inventory database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = InventoryRepository::new(pool);
/// let items = repo.fetch_all().await?;
/// ```
#[derive(Debug, Clone)]
pub struct InventoryRepository {
    pool: SqlitePool,
}

impl InventoryRepository {
    /// Creates a new InventoryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        InventoryRepository { pool }
    }

    /// Fetches the entire catalog, ordered by name.
    ///
    /// Called once at session open to hydrate the in-memory catalog
    /// mirror. Shop catalogs are small (hundreds of rows), a full fetch
    /// is cheap.
    pub async fn fetch_all(&self) -> DbResult<Vec<CatalogItem>> {
        debug!("Fetching full inventory");

        let rows = sqlx::query_as::<_, InventoryRow>(
            r#"
            SELECT name, price_paise, stock, barcode
            FROM inventory
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CatalogItem::from).collect())
    }

    /// Inserts a new catalog item.
    ///
    /// ## Errors
    /// `UniqueViolation` if the name or barcode already exists.
    pub async fn insert(&self, item: &CatalogItem) -> DbResult<()> {
        debug!(name = %item.name, "Inserting inventory item");

        sqlx::query(
            r#"
            INSERT INTO inventory (name, price_paise, stock, barcode)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&item.name)
        .bind(item.price.paise())
        .bind(item.stock)
        .bind(&item.barcode)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Writes an absolute stock level for an item.
    ///
    /// Settlement computes the new level against the in-memory mirror
    /// and persists the result here.
    pub async fn update_stock(&self, name: &str, new_stock: i64) -> DbResult<()> {
        debug!(name = %name, new_stock = new_stock, "Updating stock");

        sqlx::query("UPDATE inventory SET stock = ? WHERE name = ?")
            .bind(new_stock)
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Updates name, price, stock, and barcode of an existing item in
    /// one statement (the edit form writes all fields).
    ///
    /// ## Errors
    /// `UniqueViolation` if the new name or barcode collides.
    pub async fn update_item(&self, old_name: &str, item: &CatalogItem) -> DbResult<()> {
        debug!(old_name = %old_name, new_name = %item.name, "Updating inventory item");

        sqlx::query(
            r#"
            UPDATE inventory
            SET name = ?, price_paise = ?, stock = ?, barcode = ?
            WHERE name = ?
            "#,
        )
        .bind(&item.name)
        .bind(item.price.paise())
        .bind(item.stock)
        .bind(&item.barcode)
        .bind(old_name)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Deletes an item by name.
    pub async fn delete(&self, name: &str) -> DbResult<()> {
        debug!(name = %name, "Deleting inventory item");

        sqlx::query("DELETE FROM inventory WHERE name = ?")
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Counts catalog items.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM inventory")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
