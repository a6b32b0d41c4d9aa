//! # Sale Repository
//!
//! Append-only sales ledger. Settlement writes one row per cart line;
//! the daily report reads them back by calendar day.
//!
//! ## Ledger Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  sales                                                              │
//! │  ┌────┬───────────┬─────┬─────────┬─────────┬─────────────────────┐│
//! │  │ id │ item_name │ qty │ price   │ total   │ sold_at      │ mode ││
//! │  ├────┼───────────┼─────┼─────────┼─────────┼──────────────┼──────┤│
//! │  │  1 │ Shirt     │   2 │  49900  │  99800  │ ..09:00:00   │ REG  ││
//! │  │  2 │ Gift Wrap │   1 │   2000  │   2000  │ ..09:00:00   │ FAST ││
//! │  └────┴───────────┴─────┴─────────┴─────────┴──────────────┴──────┘│
//! │                                                                     │
//! │  Rows are never updated or deleted. Timestamps are local            │
//! │  wall-clock TEXT in '%Y-%m-%d %H:%M:%S'.                            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use till_core::money::Money;
use till_core::types::{BillingMode, SaleRecord, TIMESTAMP_FORMAT};

/// Database row shape for the `sales` table.
#[derive(Debug, sqlx::FromRow)]
struct SaleRow {
    item_name: String,
    quantity: i64,
    price_paise: i64,
    total_paise: i64,
    sold_at: String,
    billing_mode: String,
}

impl SaleRow {
    /// Converts a stored row into a domain record.
    ///
    /// Mode decoding is lenient: an unknown tag reads back as Regular,
    /// so rows written before the mode column existed still report
    /// correctly. A malformed timestamp is a corrupt row.
    fn into_record(self) -> DbResult<SaleRecord> {
        let sold_at = NaiveDateTime::parse_from_str(&self.sold_at, TIMESTAMP_FORMAT)
            .map_err(|e| DbError::CorruptRow(format!("sold_at '{}': {}", self.sold_at, e)))?;

        Ok(SaleRecord {
            item_name: self.item_name,
            quantity: self.quantity,
            unit_price: Money::from_paise(self.price_paise),
            total: Money::from_paise(self.total_paise),
            sold_at,
            mode: BillingMode::from_tag(&self.billing_mode),
        })
    }
}

/// Repository for the sales ledger.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    pool: SqlitePool,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SaleRepository { pool }
    }

    /// Appends one settled cart line to the ledger.
    pub async fn insert(&self, record: &SaleRecord) -> DbResult<()> {
        debug!(
            item = %record.item_name,
            quantity = record.quantity,
            mode = record.mode.tag(),
            "Recording sale"
        );

        sqlx::query(
            r#"
            INSERT INTO sales (item_name, quantity, price_paise, total_paise, sold_at, billing_mode)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.item_name)
        .bind(record.quantity)
        .bind(record.unit_price.paise())
        .bind(record.total.paise())
        .bind(record.sold_at.format(TIMESTAMP_FORMAT).to_string())
        .bind(record.mode.tag())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Fetches all sales for one calendar day, grouped by billing mode
    /// and chronological within each mode (the report query).
    pub async fn by_date(&self, date: NaiveDate) -> DbResult<Vec<SaleRecord>> {
        let date_str = date.format("%Y-%m-%d").to_string();
        debug!(date = %date_str, "Fetching sales for day");

        let rows = sqlx::query_as::<_, SaleRow>(
            r#"
            SELECT item_name, quantity, price_paise, total_paise, sold_at, billing_mode
            FROM sales
            WHERE date(sold_at) = ?
            ORDER BY billing_mode, sold_at
            "#,
        )
        .bind(&date_str)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(SaleRow::into_record).collect()
    }

    /// Counts ledger rows.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sales")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
