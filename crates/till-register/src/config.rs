//! # Printer Configuration
//!
//! The printer configuration lives in a small JSON file next to the
//! register data and is re-read before every print, so a settings
//! change takes effect without a restart.
//!
//! ## File Format
//! ```json
//! {
//!     "method": "Thermal Printer",
//!     "printer_name": "EPSON TM-T82",
//!     "paper_width_mm": 80,
//!     "chars_per_line": 42
//! }
//! ```
//!
//! A missing or malformed file falls back to defaults (browser printing,
//! 80mm paper) rather than failing: the register must stay usable on a
//! fresh install.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::PrintError;

/// Default configuration file name, resolved in the working directory.
pub const CONFIG_FILE: &str = "printer_config.json";

/// How receipts leave the register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PrintMethod {
    /// Render to a temporary HTML file and let the browser print it.
    /// Works everywhere, needs no driver. The fresh-install default.
    #[default]
    Browser,

    /// Raw ESC/POS stream to a thermal printer.
    #[serde(rename = "Thermal Printer")]
    ThermalPrinter,

    /// Plain text through the OS print spooler.
    #[serde(rename = "Windows Printer")]
    WindowsPrinter,
}

/// Printer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintConfig {
    /// Output method.
    pub method: PrintMethod,

    /// OS printer name. Only meaningful for the hardware methods.
    pub printer_name: String,

    /// Physical paper width. 80mm and 58mm rolls are common.
    pub paper_width_mm: u32,

    /// Characters per line at the receipt font. 42 for 80mm, 32 for 58mm.
    pub chars_per_line: usize,
}

impl Default for PrintConfig {
    fn default() -> Self {
        PrintConfig {
            method: PrintMethod::Browser,
            printer_name: String::new(),
            paper_width_mm: 80,
            chars_per_line: 42,
        }
    }
}

impl PrintConfig {
    /// Loads configuration from `path`.
    ///
    /// Missing file or unreadable JSON both yield the defaults. The
    /// register never refuses to start over printer settings.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return PrintConfig::default();
        }

        match std::fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(config) => config,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Malformed printer config, using defaults");
                    PrintConfig::default()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Unreadable printer config, using defaults");
                PrintConfig::default()
            }
        }
    }

    /// Saves configuration to `path` as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PrintError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PrintError::ConfigIo(e.to_string()))?;
        std::fs::write(path.as_ref(), json).map_err(|e| PrintError::ConfigIo(e.to_string()))
    }

    /// True for methods that need a named OS printer.
    pub fn needs_printer_name(&self) -> bool {
        matches!(
            self.method,
            PrintMethod::ThermalPrinter | PrintMethod::WindowsPrinter
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tillpoint-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = PrintConfig::load(temp_path("does-not-exist.json"));
        assert_eq!(config, PrintConfig::default());
        assert_eq!(config.method, PrintMethod::Browser);
        assert_eq!(config.chars_per_line, 42);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = temp_path("roundtrip.json");
        let config = PrintConfig {
            method: PrintMethod::ThermalPrinter,
            printer_name: "EPSON TM-T82".to_string(),
            paper_width_mm: 58,
            chars_per_line: 32,
        };
        config.save(&path).unwrap();

        let loaded = PrintConfig::load(&path);
        assert_eq!(loaded, config);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let path = temp_path("malformed.json");
        std::fs::write(&path, "{not json").unwrap();

        let config = PrintConfig::load(&path);
        assert_eq!(config, PrintConfig::default());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_method_tags_match_config_file() {
        let json = serde_json::to_string(&PrintMethod::ThermalPrinter).unwrap();
        assert_eq!(json, "\"Thermal Printer\"");
        let parsed: PrintMethod = serde_json::from_str("\"Windows Printer\"").unwrap();
        assert_eq!(parsed, PrintMethod::WindowsPrinter);
    }

    #[test]
    fn test_needs_printer_name() {
        let mut config = PrintConfig::default();
        assert!(!config.needs_printer_name());
        config.method = PrintMethod::ThermalPrinter;
        assert!(config.needs_printer_name());
    }
}
