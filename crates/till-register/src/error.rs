//! # Register Error Types
//!
//! Unified error type for register operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in TillPoint                          │
//! │                                                                     │
//! │  CoreError (till-core)  ──┐                                         │
//! │  DbError   (till-db)    ──┼──► RegisterError ──► caller             │
//! │  PrintError (this crate)──┘                                         │
//! │                                                                     │
//! │  Each source keeps its own taxonomy; the register only adds the     │
//! │  envelope, never re-categorizes.                                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use till_core::CoreError;
use till_db::DbError;

/// Printing and configuration delivery errors.
#[derive(Debug, Error)]
pub enum PrintError {
    /// A hardware method is configured but no printer name is set.
    #[error("No printer selected. Please configure printer in settings.")]
    NoPrinter,

    /// The sink could not deliver the payload.
    #[error("Print delivery failed: {0}")]
    DeliveryFailed(String),

    /// Printer configuration file could not be written.
    #[error("Printer config I/O failed: {0}")]
    ConfigIo(String),
}

/// Error type for register operations.
#[derive(Debug, Error)]
pub enum RegisterError {
    /// Business rule violation from till-core.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Persistence failure from till-db.
    #[error(transparent)]
    Db(#[from] DbError),

    /// Printing failure.
    #[error(transparent)]
    Print(#[from] PrintError),
}

/// Result type for register operations.
pub type RegisterResult<T> = Result<T, RegisterError>;

// =============================================================================
// Unit Tests
// =============================================================================
