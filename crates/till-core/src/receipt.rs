//! # Receipt Formatter
//!
//! Renders a settled cart into the fixed-width receipt layout, either as
//! plain text lines or as an ESC/POS control stream for thermal hardware.
//!
//! ## Layout Contract (width 42)
//! ```text
//! ==========================================
//!                 TillPoint
//! ==========================================
//!            2026-08-29 14:30:00
//! ------------------------------------------
//!
//! ITEM                  QTY   PRICE    TOTAL
//! ------------------------------------------
//! Shirt                   2  499.00   998.00
//! ------------------------------------------
//!
//! SUBTOTAL:                          998.00
//! TAX (0%):                            0.00
//! ==========================================
//! TOTAL:                             998.00
//! ==========================================
//!
//!      Thank you for shopping with us!
//!            Visit us again soon!
//!
//! ------------------------------------------
//! ```
//!
//! The layout is byte-for-byte deterministic: money renders with fixed
//! two decimals, item names longer than 20 chars are truncated (never
//! wrapped), and rows appear in cart insertion order. The tax line is a
//! fixed 0% kept for format compatibility with pre-printed stationery.
//!
//! The ESC/POS variant carries the identical logical content interleaved
//! with control codes (initialize, bold and double-height toggles,
//! alignment toggles, feed, paper cut). It is a control-stream rendering
//! of the same data, not a separate model.

use chrono::NaiveDateTime;

use crate::money::Money;
use crate::types::{CartLine, TIMESTAMP_FORMAT};

/// Default receipt width in characters (standard 80mm thermal roll).
pub const DEFAULT_WIDTH: usize = 42;

/// Item name column width; longer names are truncated.
const ITEM_COL: usize = 20;

// =============================================================================
// ESC/POS control codes
// =============================================================================

/// Initialize printer (`ESC @`).
pub const ESC_INIT: &[u8] = b"\x1b@";
/// Full paper cut (`GS V 0`).
pub const ESC_CUT: &[u8] = b"\x1dV\x00";
/// Bold on (`ESC E 1`).
pub const ESC_BOLD_ON: &[u8] = b"\x1bE\x01";
/// Bold off (`ESC E 0`).
pub const ESC_BOLD_OFF: &[u8] = b"\x1bE\x00";
/// Center alignment (`ESC a 1`).
pub const ESC_ALIGN_CENTER: &[u8] = b"\x1ba\x01";
/// Left alignment (`ESC a 0`).
pub const ESC_ALIGN_LEFT: &[u8] = b"\x1ba\x00";
/// Double-height character mode (`ESC ! 16`).
pub const ESC_DOUBLE_HEIGHT: &[u8] = b"\x1b!\x10";
/// Normal character mode (`ESC ! 0`).
pub const ESC_NORMAL_SIZE: &[u8] = b"\x1b!\x00";

/// Feed `n` lines (`ESC d n`).
pub fn esc_feed_lines(n: u8) -> [u8; 3] {
    [0x1b, 0x64, n]
}

// =============================================================================
// Layout
// =============================================================================

/// Receipt layout parameters.
///
/// Width normally comes from the printer configuration's chars-per-line
/// setting: 42 for 80mm paper, 32 for 58mm.
#[derive(Debug, Clone)]
pub struct ReceiptLayout {
    pub width: usize,
    pub store_name: String,
    pub footer: Vec<String>,
}

impl Default for ReceiptLayout {
    fn default() -> Self {
        ReceiptLayout {
            width: DEFAULT_WIDTH,
            store_name: "TillPoint".to_string(),
            footer: vec![
                "Thank you for shopping with us!".to_string(),
                "Visit us again soon!".to_string(),
            ],
        }
    }
}

impl ReceiptLayout {
    /// A default layout with a different width.
    pub fn with_width(width: usize) -> Self {
        ReceiptLayout {
            width,
            ..ReceiptLayout::default()
        }
    }
}

// =============================================================================
// Text rendering
// =============================================================================

/// Centers `text` within `width` columns.
///
/// Matches the padding distribution the receipt layout was printed with
/// historically (Python's `str.center`): the surplus space goes to the
/// left only when both the margin and the width are odd. Shared with the
/// report renderer so the quirk lives in exactly one place.
pub(crate) fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let margin = width - len;
    let left = margin / 2 + (margin & width & 1);
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(margin - left))
}

/// Truncates an item name to the item column width (by characters, never
/// wrapped onto a second row).
fn clip_name(name: &str) -> String {
    name.chars().take(ITEM_COL).collect()
}

/// One item row: `ITEM<20 QTY>4 PRICE>7 TOTAL>8`, single-space separated.
fn item_row(line: &CartLine) -> String {
    format!(
        "{:<20} {:>4} {:>7} {:>8}",
        clip_name(&line.item_name),
        line.quantity,
        line.unit_price.to_decimal(),
        line.line_total().to_decimal(),
    )
}

/// Bold column header, same widths as the rows.
fn header_row() -> String {
    format!("{:<20} {:>4} {:>7} {:>8}", "ITEM", "QTY", "PRICE", "TOTAL")
}

/// A `label<30 amount>10` totals row.
fn totals_row(label: &str, amount: Money) -> String {
    format!("{:<30} {:>10}", label, amount.to_decimal())
}

/// Renders the receipt as ordered text lines.
///
/// Pure function: same lines, total, and timestamp always produce the
/// same output. `total` is the settled transaction total; the subtotal
/// row is recomputed from the lines (they are equal by construction -
/// integer money cannot drift).
pub fn render_text(
    layout: &ReceiptLayout,
    lines: &[CartLine],
    total: Money,
    taken_at: NaiveDateTime,
) -> Vec<String> {
    let w = layout.width;
    let rule_heavy = "=".repeat(w);
    let rule_light = "-".repeat(w);

    let mut out = Vec::with_capacity(lines.len() + 18);

    // Header block
    out.push(rule_heavy.clone());
    out.push(center(&layout.store_name, w));
    out.push(rule_heavy.clone());
    out.push(center(&taken_at.format(TIMESTAMP_FORMAT).to_string(), w));
    out.push(rule_light.clone());
    out.push(String::new());

    // Column header and items, insertion order
    out.push(header_row());
    out.push(rule_light.clone());

    let mut subtotal = Money::zero();
    for line in lines {
        subtotal += line.line_total();
        out.push(item_row(line));
    }

    out.push(rule_light.clone());
    out.push(String::new());

    // Totals block: fixed 0% tax line kept for format compatibility
    out.push(totals_row("SUBTOTAL:", subtotal));
    out.push(totals_row("TAX (0%):", Money::zero()));
    out.push(rule_heavy.clone());
    out.push(totals_row("TOTAL:", total));
    out.push(rule_heavy);
    out.push(String::new());

    // Footer
    for footer_line in &layout.footer {
        out.push(center(footer_line, w));
    }
    out.push(String::new());
    out.push(rule_light);
    out.push(String::new());

    out
}

// =============================================================================
// ESC/POS rendering
// =============================================================================

/// Renders the same logical receipt as a thermal printer control stream.
///
/// Emphasis map: store name and total are bold double-height, the column
/// header is bold, everything else is normal weight. Ends with a three
/// line feed and a paper cut.
pub fn render_escpos(
    layout: &ReceiptLayout,
    lines: &[CartLine],
    total: Money,
    taken_at: NaiveDateTime,
) -> Vec<u8> {
    let w = layout.width;
    let rule_heavy = "=".repeat(w);
    let rule_light = "-".repeat(w);

    let mut out: Vec<u8> = Vec::with_capacity(1024);
    let mut push_line = |out: &mut Vec<u8>, text: &str| {
        out.extend_from_slice(text.as_bytes());
        out.push(b'\n');
    };

    out.extend_from_slice(ESC_INIT);

    // Store name: bold, double height, centered by the printer
    out.extend_from_slice(ESC_ALIGN_CENTER);
    out.extend_from_slice(ESC_BOLD_ON);
    out.extend_from_slice(ESC_DOUBLE_HEIGHT);
    push_line(&mut out, &layout.store_name);
    out.extend_from_slice(ESC_NORMAL_SIZE);
    out.extend_from_slice(ESC_BOLD_OFF);

    push_line(&mut out, &rule_heavy);
    push_line(&mut out, &taken_at.format(TIMESTAMP_FORMAT).to_string());
    push_line(&mut out, &rule_light);
    out.push(b'\n');

    // Items: left aligned, bold header
    out.extend_from_slice(ESC_ALIGN_LEFT);
    out.extend_from_slice(ESC_BOLD_ON);
    push_line(&mut out, &header_row());
    out.extend_from_slice(ESC_BOLD_OFF);
    push_line(&mut out, &rule_light);

    let mut subtotal = Money::zero();
    for line in lines {
        subtotal += line.line_total();
        push_line(&mut out, &item_row(line));
    }
    push_line(&mut out, &rule_light);
    out.push(b'\n');

    // Totals: total line bold and double height
    push_line(&mut out, &totals_row("SUBTOTAL:", subtotal));
    push_line(&mut out, &totals_row("TAX (0%):", Money::zero()));
    push_line(&mut out, &rule_heavy);
    out.extend_from_slice(ESC_BOLD_ON);
    out.extend_from_slice(ESC_DOUBLE_HEIGHT);
    push_line(&mut out, &totals_row("TOTAL:", total));
    out.extend_from_slice(ESC_NORMAL_SIZE);
    out.extend_from_slice(ESC_BOLD_OFF);
    push_line(&mut out, &rule_heavy);
    out.push(b'\n');

    // Footer, centered by the printer
    out.extend_from_slice(ESC_ALIGN_CENTER);
    for footer_line in &layout.footer {
        push_line(&mut out, footer_line);
    }
    out.push(b'\n');

    out.extend_from_slice(&esc_feed_lines(3));
    out.extend_from_slice(ESC_CUT);

    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BillingMode;
    use chrono::NaiveDate;

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 29)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    fn shirt_line() -> CartLine {
        CartLine {
            item_name: "Shirt".to_string(),
            quantity: 2,
            unit_price: Money::from_paise(49900),
            mode: BillingMode::Regular,
        }
    }

    #[test]
    fn test_item_row_column_widths() {
        assert_eq!(
            item_row(&shirt_line()),
            "Shirt                   2  499.00   998.00"
        );
    }

    #[test]
    fn test_long_names_truncate_not_wrap() {
        let line = CartLine {
            item_name: "Extra Long Sleeve Winter Jacket".to_string(),
            quantity: 1,
            unit_price: Money::from_paise(100),
            mode: BillingMode::Regular,
        };
        let row = item_row(&line);
        assert!(row.starts_with("Extra Long Sleeve Wi "));
        assert_eq!(row.chars().count(), 42);
    }

    #[test]
    fn test_centering_matches_historic_layout() {
        assert_eq!(center("ab", 5), "  ab ");
        assert_eq!(center("abc", 6), " abc  ");
        assert_eq!(
            center("2026-08-29 14:30:00", 42),
            "           2026-08-29 14:30:00            "
        );
        // Too-wide text passes through untouched
        assert_eq!(center("abcdef", 4), "abcdef");
    }

    #[test]
    fn test_full_receipt_layout() {
        let layout = ReceiptLayout::default();
        let lines = vec![shirt_line()];
        let out = render_text(&layout, &lines, Money::from_paise(99800), ts());

        let rule_heavy = "=".repeat(42);
        let rule_light = "-".repeat(42);

        assert_eq!(out[0], rule_heavy);
        assert_eq!(out[1], center("TillPoint", 42));
        assert_eq!(out[2], rule_heavy);
        assert_eq!(out[3], center("2026-08-29 14:30:00", 42));
        assert_eq!(out[4], rule_light);
        assert_eq!(out[5], "");
        assert_eq!(out[6], "ITEM                  QTY   PRICE    TOTAL");
        assert_eq!(out[7], rule_light);
        assert_eq!(out[8], "Shirt                   2  499.00   998.00");
        assert_eq!(out[9], rule_light);
        assert_eq!(out[10], "");
        assert_eq!(out[11], "SUBTOTAL:                          998.00");
        assert_eq!(out[12], "TAX (0%):                            0.00");
        assert_eq!(out[13], rule_heavy);
        assert_eq!(out[14], "TOTAL:                             998.00");
        assert_eq!(out[15], rule_heavy);
        assert_eq!(out[16], "");
        assert_eq!(out[17], center("Thank you for shopping with us!", 42));
        assert_eq!(out[18], center("Visit us again soon!", 42));
        assert_eq!(out[19], "");
        assert_eq!(out[20], rule_light);
        assert_eq!(out[21], "");
        assert_eq!(out.len(), 22);
    }

    #[test]
    fn test_rows_in_insertion_order() {
        let layout = ReceiptLayout::default();
        let lines = vec![
            CartLine {
                item_name: "Jeans".to_string(),
                quantity: 1,
                unit_price: Money::from_paise(129900),
                mode: BillingMode::Regular,
            },
            CartLine {
                item_name: "Gift Wrap".to_string(),
                quantity: 1,
                unit_price: Money::from_paise(2000),
                mode: BillingMode::Fast,
            },
        ];
        let out = render_text(&layout, &lines, Money::from_paise(131900), ts());
        let jeans = out.iter().position(|l| l.starts_with("Jeans")).unwrap();
        let wrap = out.iter().position(|l| l.starts_with("Gift Wrap")).unwrap();
        assert!(jeans < wrap);
    }

    #[test]
    fn test_escpos_carries_same_row_bytes() {
        let layout = ReceiptLayout::default();
        let lines = vec![shirt_line()];
        let stream = render_escpos(&layout, &lines, Money::from_paise(99800), ts());

        assert!(stream.starts_with(ESC_INIT));
        assert!(stream.ends_with(ESC_CUT));

        let row = item_row(&lines[0]);
        let total_row = totals_row("TOTAL:", Money::from_paise(99800));
        let haystack = stream.as_slice();
        assert!(haystack
            .windows(row.len())
            .any(|win| win == row.as_bytes()));
        assert!(haystack
            .windows(total_row.len())
            .any(|win| win == total_row.as_bytes()));
        assert!(haystack
            .windows(ESC_DOUBLE_HEIGHT.len())
            .any(|win| win == ESC_DOUBLE_HEIGHT));
    }

    #[test]
    fn test_narrow_paper_width() {
        let layout = ReceiptLayout::with_width(32);
        let out = render_text(&layout, &[shirt_line()], Money::from_paise(99800), ts());
        assert_eq!(out[0], "=".repeat(32));
        assert_eq!(out[1], center("TillPoint", 32));
    }
}
