//! # Print Dispatch
//!
//! Turns a receipt snapshot into the payload the configured method
//! needs, and hands it to a [`PrintSink`].
//!
//! ## Dispatch
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  ReceiptSnapshot                                                    │
//! │       │                                                             │
//! │       ▼                ┌── Browser ────────► Text lines ──► HTML    │
//! │  PrintPayload::        ├── Windows Printer ► Text lines            │
//! │    for_config(...) ────┤                                            │
//! │                        └── Thermal Printer ► ESC/POS bytes          │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  sink.deliver_text(..) / sink.deliver_raw(..)                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The sink is the external-world boundary: real deployments hand the
//! payload to a browser or a spooler, tests capture it in memory. The
//! payload itself is computed purely, so the same snapshot and config
//! always produce the same bytes.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::{PrintConfig, PrintMethod};
use crate::error::PrintError;
use till_core::receipt::{self, ReceiptLayout};
use till_core::types::ReceiptSnapshot;

/// What gets sent to the printer for one receipt.
#[derive(Debug, Clone, PartialEq)]
pub enum PrintPayload {
    /// Plain text lines (browser and spooler methods).
    Text(Vec<String>),
    /// Raw ESC/POS control stream (thermal method).
    Raw(Vec<u8>),
}

impl PrintPayload {
    /// Renders the snapshot for the configured method.
    ///
    /// ## Errors
    /// `NoPrinter` if a hardware method is configured without a printer
    /// name.
    pub fn for_config(config: &PrintConfig, snapshot: &ReceiptSnapshot) -> Result<Self, PrintError> {
        if config.needs_printer_name() && config.printer_name.is_empty() {
            return Err(PrintError::NoPrinter);
        }

        let layout = ReceiptLayout::with_width(config.chars_per_line);

        let payload = match config.method {
            PrintMethod::ThermalPrinter => PrintPayload::Raw(receipt::render_escpos(
                &layout,
                &snapshot.lines,
                snapshot.total,
                snapshot.taken_at,
            )),
            PrintMethod::Browser | PrintMethod::WindowsPrinter => {
                PrintPayload::Text(receipt::render_text(
                    &layout,
                    &snapshot.lines,
                    snapshot.total,
                    snapshot.taken_at,
                ))
            }
        };

        Ok(payload)
    }

    /// Delivers this payload to a sink.
    pub fn deliver(&self, sink: &mut dyn PrintSink) -> Result<(), PrintError> {
        match self {
            PrintPayload::Text(lines) => sink.deliver_text(lines),
            PrintPayload::Raw(bytes) => sink.deliver_raw(bytes),
        }
    }
}

/// Destination for rendered receipts.
///
/// Implementations exist for HTML export (browser printing) and for
/// in-memory capture in tests. A spooler-backed sink plugs in the same
/// way.
pub trait PrintSink {
    /// Delivers plain text lines.
    fn deliver_text(&mut self, lines: &[String]) -> Result<(), PrintError>;

    /// Delivers a raw control stream.
    fn deliver_raw(&mut self, bytes: &[u8]) -> Result<(), PrintError>;
}

// =============================================================================
// HTML export sink
// =============================================================================

/// Wraps receipt lines in a self-printing HTML document and writes it
/// to a file, ready to be opened in a browser.
#[derive(Debug, Clone)]
pub struct HtmlExport {
    path: PathBuf,
}

impl HtmlExport {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        HtmlExport { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Builds the HTML document: monospace receipt in a `<pre>` block that
/// opens the print dialog on load.
pub fn receipt_html(lines: &[String]) -> String {
    let body = lines.join("\n");
    format!(
        r#"<html>
<head>
    <title>Receipt</title>
    <style>
        body {{
            font-family: 'Courier New', monospace;
            max-width: 400px;
            margin: 20px auto;
            padding: 20px;
            background: white;
        }}
        pre {{
            font-size: 12px;
            line-height: 1.4;
        }}
        @media print {{
            body {{ margin: 0; padding: 10px; }}
        }}
    </style>
</head>
<body>
    <pre>{body}</pre>
    <script>
        window.onload = function() {{
            window.print();
        }}
    </script>
</body>
</html>
"#
    )
}

impl PrintSink for HtmlExport {
    fn deliver_text(&mut self, lines: &[String]) -> Result<(), PrintError> {
        let html = receipt_html(lines);
        let mut file = std::fs::File::create(&self.path)
            .map_err(|e| PrintError::DeliveryFailed(e.to_string()))?;
        file.write_all(html.as_bytes())
            .map_err(|e| PrintError::DeliveryFailed(e.to_string()))?;

        info!(path = %self.path.display(), "Receipt exported for browser printing");
        Ok(())
    }

    fn deliver_raw(&mut self, _bytes: &[u8]) -> Result<(), PrintError> {
        Err(PrintError::DeliveryFailed(
            "HTML export cannot carry a raw printer stream".to_string(),
        ))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use till_core::money::Money;
    use till_core::types::{BillingMode, CartLine};

    /// Captures whatever was delivered, for assertions.
    #[derive(Default)]
    struct MemorySink {
        text: Vec<String>,
        raw: Vec<u8>,
    }

    impl PrintSink for MemorySink {
        fn deliver_text(&mut self, lines: &[String]) -> Result<(), PrintError> {
            self.text = lines.to_vec();
            Ok(())
        }

        fn deliver_raw(&mut self, bytes: &[u8]) -> Result<(), PrintError> {
            self.raw = bytes.to_vec();
            Ok(())
        }
    }

    fn snapshot() -> ReceiptSnapshot {
        ReceiptSnapshot {
            lines: vec![CartLine {
                item_name: "Shirt".to_string(),
                quantity: 2,
                unit_price: Money::from_paise(49900),
                mode: BillingMode::Regular,
            }],
            total: Money::from_paise(99800),
            taken_at: NaiveDate::from_ymd_opt(2026, 8, 29)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_browser_method_renders_text() {
        let config = PrintConfig::default();
        let payload = PrintPayload::for_config(&config, &snapshot()).unwrap();

        let mut sink = MemorySink::default();
        payload.deliver(&mut sink).unwrap();

        assert!(sink
            .text
            .contains(&"Shirt                   2  499.00   998.00".to_string()));
        assert!(sink.raw.is_empty());
    }

    #[test]
    fn test_thermal_method_renders_escpos() {
        let config = PrintConfig {
            method: PrintMethod::ThermalPrinter,
            printer_name: "EPSON".to_string(),
            ..PrintConfig::default()
        };
        let payload = PrintPayload::for_config(&config, &snapshot()).unwrap();

        let mut sink = MemorySink::default();
        payload.deliver(&mut sink).unwrap();

        assert!(sink.raw.starts_with(till_core::receipt::ESC_INIT));
        assert!(sink.text.is_empty());
    }

    #[test]
    fn test_hardware_method_without_name_is_rejected() {
        let config = PrintConfig {
            method: PrintMethod::WindowsPrinter,
            ..PrintConfig::default()
        };
        let err = PrintPayload::for_config(&config, &snapshot()).unwrap_err();
        assert!(matches!(err, PrintError::NoPrinter));
    }

    #[test]
    fn test_html_wraps_receipt_in_pre_block() {
        let html = receipt_html(&["LINE ONE".to_string(), "LINE TWO".to_string()]);
        assert!(html.contains("<pre>LINE ONE\nLINE TWO</pre>"));
        assert!(html.contains("window.print()"));
        assert!(html.contains("'Courier New', monospace"));
    }

    #[test]
    fn test_html_export_writes_file() {
        let path = std::env::temp_dir().join(format!("tillpoint-{}-receipt.html", std::process::id()));
        let mut sink = HtmlExport::new(&path);

        sink.deliver_text(&["TOTAL:  998.00".to_string()]).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("TOTAL:  998.00"));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_html_export_rejects_raw_stream() {
        let mut sink = HtmlExport::new("/tmp/never-written.html");
        assert!(sink.deliver_raw(b"\x1b@").is_err());
    }
}
