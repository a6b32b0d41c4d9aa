//! # Receipt Repository
//!
//! Single-slot persistence for the most recent receipt.
//!
//! ## Single-Slot Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  last_receipt holds at most ONE row, pinned to id = 1.              │
//! │                                                                     │
//! │  save_last():  DELETE FROM last_receipt;                            │
//! │                INSERT ... (id = 1)                                  │
//! │                                                                     │
//! │  Every settlement overwrites the slot. Reprint reads it back.       │
//! │  The cart lines are stored as a JSON array so the receipt can be    │
//! │  re-rendered exactly, including fast lines and merge results.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDateTime;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use till_core::money::Money;
use till_core::types::{CartLine, ReceiptSnapshot, TIMESTAMP_FORMAT};

/// Database row shape for the `last_receipt` table.
#[derive(Debug, sqlx::FromRow)]
struct ReceiptRow {
    cart_json: String,
    total_paise: i64,
    taken_at: String,
}

impl ReceiptRow {
    fn into_snapshot(self) -> DbResult<ReceiptSnapshot> {
        let lines: Vec<CartLine> = serde_json::from_str(&self.cart_json)
            .map_err(|e| DbError::CorruptRow(format!("cart_json: {}", e)))?;
        let taken_at = NaiveDateTime::parse_from_str(&self.taken_at, TIMESTAMP_FORMAT)
            .map_err(|e| DbError::CorruptRow(format!("taken_at '{}': {}", self.taken_at, e)))?;

        Ok(ReceiptSnapshot {
            lines,
            total: Money::from_paise(self.total_paise),
            taken_at,
        })
    }
}

/// Repository for the last-receipt slot.
#[derive(Debug, Clone)]
pub struct ReceiptRepository {
    pool: SqlitePool,
}

impl ReceiptRepository {
    /// Creates a new ReceiptRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ReceiptRepository { pool }
    }

    /// Overwrites the slot with a new snapshot.
    pub async fn save_last(&self, snapshot: &ReceiptSnapshot) -> DbResult<()> {
        debug!(
            lines = snapshot.lines.len(),
            total = snapshot.total.paise(),
            "Saving last receipt"
        );

        let cart_json = serde_json::to_string(&snapshot.lines)
            .map_err(|e| DbError::Internal(format!("serializing cart lines: {}", e)))?;

        // Two statements, one connection: the slot is only ever written
        // from the settlement path, which is sequential.
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM last_receipt")
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            r#"
            INSERT INTO last_receipt (id, cart_json, total_paise, taken_at)
            VALUES (1, ?, ?, ?)
            "#,
        )
        .bind(&cart_json)
        .bind(snapshot.total.paise())
        .bind(snapshot.taken_at.format(TIMESTAMP_FORMAT).to_string())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Reads the slot back, if a receipt has ever been settled.
    pub async fn get_last(&self) -> DbResult<Option<ReceiptSnapshot>> {
        let row = sqlx::query_as::<_, ReceiptRow>(
            "SELECT cart_json, total_paise, taken_at FROM last_receipt WHERE id = 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        row.map(ReceiptRow::into_snapshot).transpose()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};
    use chrono::NaiveDate;
    use till_core::money::Money;
    use till_core::types::{BillingMode, CartLine, ReceiptSnapshot};

    fn snapshot(item: &str, total_paise: i64) -> ReceiptSnapshot {
        ReceiptSnapshot {
            lines: vec![CartLine {
                item_name: item.to_string(),
                quantity: 2,
                unit_price: Money::from_paise(total_paise / 2),
                mode: BillingMode::Regular,
            }],
            total: Money::from_paise(total_paise),
            taken_at: NaiveDate::from_ymd_opt(2026, 8, 29)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap(),
        }
    }

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_empty_slot_reads_none() {
        let db = test_db().await;
        assert!(db.receipts().get_last().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_and_read_back() {
        let db = test_db().await;
        let repo = db.receipts();

        let snap = snapshot("Shirt", 99800);
        repo.save_last(&snap).await.unwrap();

        let fetched = repo.get_last().await.unwrap().unwrap();
        assert_eq!(fetched, snap);
    }

    #[tokio::test]
    async fn test_second_save_overwrites_slot() {
        let db = test_db().await;
        let repo = db.receipts();

        repo.save_last(&snapshot("Shirt", 99800)).await.unwrap();
        repo.save_last(&snapshot("Jeans", 129900)).await.unwrap();

        let fetched = repo.get_last().await.unwrap().unwrap();
        assert_eq!(fetched.lines[0].item_name, "Jeans");

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM last_receipt")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}
