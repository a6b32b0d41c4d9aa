//! # Daily Sales Report
//!
//! Aggregates the persisted sale rows for a calendar day into a report
//! partitioned by billing mode, plus a 32-column printable rendering.
//!
//! ```text
//!   records ──► partition by mode ──► DailyReport ──► render()
//!                (FAST / rest)          totals          text
//! ```
//!
//! Partitioning is strict: a record is either Fast or it counts as
//! Regular, so no record is ever counted twice and
//! `grand_total = regular_total + fast_total` always holds.

use chrono::NaiveDate;

use crate::money::Money;
use crate::receipt::center;
use crate::types::{BillingMode, SaleRecord};

/// Report paper width (58mm thermal roll).
pub const REPORT_WIDTH: usize = 32;

/// A single day's sales, partitioned by billing mode.
///
/// Within each partition the records keep the order they were given in,
/// which for rows fetched by the sale repository is chronological.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub regular: Vec<SaleRecord>,
    pub fast: Vec<SaleRecord>,
    pub regular_total: Money,
    pub fast_total: Money,
    pub grand_total: Money,
}

impl DailyReport {
    /// Builds a report from the day's sale records.
    pub fn from_records(date: NaiveDate, records: Vec<SaleRecord>) -> Self {
        let mut regular = Vec::new();
        let mut fast = Vec::new();
        let mut regular_total = Money::zero();
        let mut fast_total = Money::zero();

        for record in records {
            match record.mode {
                BillingMode::Fast => {
                    fast_total += record.total;
                    fast.push(record);
                }
                BillingMode::Regular => {
                    regular_total += record.total;
                    regular.push(record);
                }
            }
        }

        DailyReport {
            date,
            regular,
            fast,
            regular_total,
            fast_total,
            grand_total: regular_total + fast_total,
        }
    }

    /// Total number of sale rows across both partitions.
    pub fn len(&self) -> usize {
        self.regular.len() + self.fast.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regular.is_empty() && self.fast.is_empty()
    }

    /// Renders the 32-column printable report.
    ///
    /// Regular rows first, then fast rows, then the grand total. Names
    /// longer than 15 chars are truncated.
    pub fn render(&self, store_name: &str) -> Vec<String> {
        let rule = "=".repeat(REPORT_WIDTH);
        let mut out = Vec::with_capacity(self.len() + 8);

        out.push(center(store_name, REPORT_WIDTH));
        out.push(center("Daily Sales Report", REPORT_WIDTH));
        out.push(center(&self.date.format("%Y-%m-%d").to_string(), REPORT_WIDTH));
        out.push(rule.clone());

        for record in self.regular.iter().chain(self.fast.iter()) {
            out.push(report_row(record));
        }

        out.push(rule.clone());
        out.push(format!("TOTAL SALES: {}", self.grand_total.to_decimal()));
        out.push(rule);

        out
    }
}

/// One report row: `name<15 qty>3 x price>5 = total>6`.
fn report_row(record: &SaleRecord) -> String {
    let name: String = record.item_name.chars().take(15).collect();
    format!(
        "{:<15} {:>3} x {:>5} = {:>6}",
        name,
        record.quantity,
        record.unit_price.to_decimal(),
        record.total.to_decimal(),
    )
}

// =============================================================================
// Unit Tests
// =============================================================================
