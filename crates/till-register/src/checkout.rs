//! # Checkout and Settlement
//!
//! Turns the live cart into durable state: ledger rows, stock writes,
//! and the last-receipt slot.
//!
//! ## Settlement Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  checkout()                                                         │
//! │       │                                                             │
//! │       ├── cart empty? ──► EmptyCart error, nothing written          │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  timestamp = local wall clock, second precision                     │
//! │       │                                                             │
//! │       ▼  per cart line                                              │
//! │  ┌──────────────────────────────────────────────────────┐           │
//! │  │ Regular + in catalog?                                │           │
//! │  │   mirror stock -= qty                                │           │
//! │  │   UPDATE inventory SET stock = <new level>           │           │
//! │  │ (fast lines and departed items skip the stock step)  │           │
//! │  │                                                      │           │
//! │  │ INSERT INTO sales ... (always, every line)           │           │
//! │  └──────────────────────────────────────────────────────┘           │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  overwrite last_receipt slot with the snapshot                      │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  clear cart, return snapshot                                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Settlement is line-by-line, not one transaction: a single register
//! writing to a local file has no concurrent writers, and a crash
//! mid-settlement leaves already-written lines ledgered, matching what
//! the receipt printer has already committed to paper.

use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};
use tracing::{debug, info};

use crate::error::RegisterResult;
use crate::session::Session;
use till_core::error::CoreError;
use till_core::report::DailyReport;
use till_core::types::{BillingMode, ReceiptSnapshot, SaleRecord};

/// Local wall-clock time at second precision, the resolution the
/// ledger stores.
fn now_wallclock() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

impl Session {
    /// Settles the cart.
    ///
    /// Decrements stock for regular lines still in the catalog, appends
    /// one ledger row per line, overwrites the last-receipt slot, and
    /// clears the cart. Returns the snapshot for printing.
    ///
    /// ## Errors
    /// - `EmptyCart` if there is nothing to settle (nothing is written)
    /// - database errors propagate; lines settled before the failure
    ///   remain written
    pub async fn checkout(&mut self) -> RegisterResult<ReceiptSnapshot> {
        let (catalog, cart, db) = self.parts_mut();

        if cart.is_empty() {
            return Err(CoreError::EmptyCart.into());
        }

        let taken_at = now_wallclock();
        let lines = cart.lines().to_vec();
        let total = cart.total();

        info!(lines = lines.len(), total = %total, "Settling cart");

        for line in &lines {
            // Stock only moves for regular lines whose item still
            // exists; fast lines are ad-hoc by definition.
            if line.mode == BillingMode::Regular && catalog.get(&line.item_name).is_some() {
                let new_stock = catalog.adjust_stock(&line.item_name, -line.quantity)?;
                db.inventory()
                    .update_stock(&line.item_name, new_stock)
                    .await?;
                debug!(item = %line.item_name, new_stock, "Stock updated");
            }

            db.sales()
                .insert(&SaleRecord::from_line(line, taken_at))
                .await?;
        }

        let snapshot = ReceiptSnapshot {
            lines,
            total,
            taken_at,
        };
        db.receipts().save_last(&snapshot).await?;

        cart.clear();
        info!(total = %total, "Settlement complete");

        Ok(snapshot)
    }

    /// Fetches the last settled receipt for reprinting, if any.
    pub async fn reprint_last(&self) -> RegisterResult<Option<ReceiptSnapshot>> {
        Ok(self.db().receipts().get_last().await?)
    }

    /// Builds the daily sales report for a calendar day.
    pub async fn daily_report(&self, date: NaiveDate) -> RegisterResult<DailyReport> {
        let records = self.db().sales().by_date(date).await?;
        Ok(DailyReport::from_records(date, records))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegisterError;
    use till_core::money::Money;
    use till_db::{Database, DbConfig};

    async fn stocked_session() -> Session {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut session = Session::open(db).await.unwrap();
        session
            .add_item("Shirt", Money::from_paise(49900), 10, None)
            .await
            .unwrap();
        session
            .add_item("Jeans", Money::from_paise(129900), 5, None)
            .await
            .unwrap();
        session
    }

    #[tokio::test]
    async fn test_empty_cart_cannot_settle() {
        let mut session = stocked_session().await;
        let err = session.checkout().await.unwrap_err();
        assert!(matches!(err, RegisterError::Core(CoreError::EmptyCart)));

        // Nothing was written
        assert_eq!(session.db().sales().count().await.unwrap(), 0);
        assert!(session.reprint_last().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_checkout_decrements_stock_and_ledgers() {
        let mut session = stocked_session().await;
        session.add_to_cart("Shirt", 2).unwrap();

        let snapshot = session.checkout().await.unwrap();

        assert_eq!(snapshot.total, Money::from_paise(99800));
        assert!(session.cart().is_empty());
        assert_eq!(session.catalog().get("Shirt").unwrap().stock, 8);

        let rows = session.db().inventory().fetch_all().await.unwrap();
        let shirt = rows.iter().find(|i| i.name == "Shirt").unwrap();
        assert_eq!(shirt.stock, 8);

        assert_eq!(session.db().sales().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_fast_lines_never_touch_stock() {
        let mut session = stocked_session().await;
        session
            .add_fast_to_cart("Gift Wrap", 1, Money::from_paise(2000))
            .unwrap();
        // Fast line named like a stock item still skips inventory
        session
            .add_fast_to_cart("Shirt", 1, Money::from_paise(30000))
            .unwrap();

        session.checkout().await.unwrap();

        assert_eq!(session.catalog().get("Shirt").unwrap().stock, 10);
        assert_eq!(session.db().sales().count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_snapshot_saved_and_reprintable() {
        let mut session = stocked_session().await;
        session.add_to_cart("Shirt", 1).unwrap();
        session
            .add_fast_to_cart("Gift Wrap", 1, Money::from_paise(2000))
            .unwrap();

        let snapshot = session.checkout().await.unwrap();
        let reprint = session.reprint_last().await.unwrap().unwrap();

        assert_eq!(reprint, snapshot);
        assert_eq!(reprint.lines.len(), 2);
    }

    #[tokio::test]
    async fn test_second_checkout_overwrites_snapshot() {
        let mut session = stocked_session().await;
        session.add_to_cart("Shirt", 1).unwrap();
        session.checkout().await.unwrap();

        session.add_to_cart("Jeans", 1).unwrap();
        session.checkout().await.unwrap();

        let reprint = session.reprint_last().await.unwrap().unwrap();
        assert_eq!(reprint.lines[0].item_name, "Jeans");
    }

    #[tokio::test]
    async fn test_daily_report_partitions_and_totals() {
        let mut session = stocked_session().await;
        session.add_to_cart("Shirt", 2).unwrap();
        session
            .add_fast_to_cart("Gift Wrap", 1, Money::from_paise(2000))
            .unwrap();
        session.checkout().await.unwrap();

        let today = Local::now().date_naive();
        let report = session.daily_report(today).await.unwrap();

        assert_eq!(report.regular.len(), 1);
        assert_eq!(report.fast.len(), 1);
        assert_eq!(report.regular_total, Money::from_paise(99800));
        assert_eq!(report.fast_total, Money::from_paise(2000));
        assert_eq!(report.grand_total, Money::from_paise(101800));
    }

    #[tokio::test]
    async fn test_oversell_blocked_before_settlement() {
        let mut session = stocked_session().await;
        let err = session.add_to_cart("Jeans", 6).unwrap_err();
        assert!(matches!(
            err,
            RegisterError::Core(CoreError::OutOfStock { available: 5, requested: 6, .. })
        ));

        // Stock untouched
        assert_eq!(session.catalog().get("Jeans").unwrap().stock, 5);
    }
}
