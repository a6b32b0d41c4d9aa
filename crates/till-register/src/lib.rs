//! # till-register: Register Orchestration for TillPoint
//!
//! This crate runs the till: it owns the open session, drives checkout
//! and settlement, and dispatches receipts to the configured printer.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      TillPoint Architecture                         │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │               ★ till-register (THIS CRATE) ★                │   │
//! │  │                                                             │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌──────────┐  ┌─────────┐  │   │
//! │  │   │  session  │  │  checkout  │  │  config  │  │  print  │  │   │
//! │  │   │  Catalog  │  │ settlement │  │  JSON    │  │ payload │  │   │
//! │  │   │  + Cart   │  │  reprint   │  │  file    │  │  sinks  │  │   │
//! │  │   │  + Db     │  │  reports   │  │          │  │         │  │   │
//! │  │   └───────────┘  └────────────┘  └──────────┘  └─────────┘  │   │
//! │  └──────────┬───────────────────────────────┬──────────────────┘   │
//! │             │                               │                      │
//! │             ▼                               ▼                      │
//! │  ┌────────────────────┐          ┌────────────────────┐            │
//! │  │     till-core      │          │      till-db       │            │
//! │  │  pure functions    │          │  SQLite via sqlx   │            │
//! │  └────────────────────┘          └────────────────────┘            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use till_register::{PrintConfig, PrintPayload, Session};
//! use till_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./tillpoint.db")).await?;
//! let mut session = Session::open(db).await?;
//!
//! session.add_to_cart("8901111000012", 2)?;       // scanned barcode
//! let snapshot = session.checkout().await?;
//!
//! // Config is re-read per print, so settings changes apply instantly
//! let config = PrintConfig::load(till_register::config::CONFIG_FILE);
//! let payload = PrintPayload::for_config(&config, &snapshot)?;
//! payload.deliver(&mut sink)?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checkout;
pub mod config;
pub mod error;
pub mod print;
pub mod session;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{PrintConfig, PrintMethod};
pub use error::{PrintError, RegisterError, RegisterResult};
pub use print::{HtmlExport, PrintPayload, PrintSink};
pub use session::Session;
