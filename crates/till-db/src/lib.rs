//! # till-db: Database Layer for TillPoint
//!
//! This crate provides database access for the TillPoint register.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        TillPoint Data Flow                          │
//! │                                                                     │
//! │  Register session (checkout, inventory edits, reports)              │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                     till-db (THIS CRATE)                    │   │
//! │  │                                                             │   │
//! │  │   ┌───────────────┐   ┌────────────────┐   ┌────────────┐   │   │
//! │  │   │   Database    │   │  Repositories  │   │ Migrations │   │   │
//! │  │   │   (pool.rs)   │   │ inventory.rs   │   │ (embedded) │   │   │
//! │  │   │               │   │ sale.rs        │   │            │   │   │
//! │  │   │ SqlitePool    │◄──│ receipt.rs     │   │ 001_init   │   │   │
//! │  │   │ WAL + NORMAL  │   │                │   │            │   │   │
//! │  │   └───────────────┘   └────────────────┘   └────────────┘   │   │
//! │  │                                                             │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite database file (tillpoint.db)                                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (inventory, sale, receipt)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use till_db::{Database, DbConfig};
//!
//! // Create database with default config (runs migrations)
//! let config = DbConfig::new("path/to/tillpoint.db");
//! let db = Database::new(config).await?;
//!
//! // Use repositories
//! let items = db.inventory().fetch_all().await?;
//! let today = db.sales().by_date(today).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::inventory::InventoryRepository;
pub use repository::receipt::ReceiptRepository;
pub use repository::sale::SaleRepository;
