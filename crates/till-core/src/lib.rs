//! # till-core: Pure Business Logic for TillPoint
//!
//! This crate is the **heart** of TillPoint. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      TillPoint Architecture                         │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                 till-register (Orchestration)               │   │
//! │  │    Session ──► checkout ──► print dispatch ──► reports      │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │               ★ till-core (THIS CRATE) ★                    │   │
//! │  │                                                             │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────┐  │   │
//! │  │  │ catalog │ │  cart   │ │ receipt │ │ report  │ │money │  │   │
//! │  │  │ lookup  │ │ merge   │ │  42-col │ │  daily  │ │paise │  │   │
//! │  │  │  stock  │ │ totals  │ │ ESC/POS │ │ totals  │ │ i64  │  │   │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └─────────┘ └──────┘  │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO DATABASE • NO PRINTER • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │                 till-db (Database Layer)                    │   │
//! │  │          SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CatalogItem, CartLine, SaleRecord, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//! - [`catalog`] - In-memory inventory with name and barcode indexes
//! - [`cart`] - Cart with mode-aware line merging
//! - [`receipt`] - Deterministic 42-column receipt and ESC/POS rendering
//! - [`report`] - Daily sales report partitioned by billing mode
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, printer, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in paise (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use till_core::catalog::Catalog;
//! use till_core::cart::Cart;
//! use till_core::money::Money;
//!
//! let mut catalog = Catalog::new();
//! // Rs499.00 in paise, never from floats!
//! catalog.add("Shirt", Money::from_paise(49900), 10, Some("8901234".to_string())).unwrap();
//!
//! // A scanned barcode resolves to the item name.
//! let name = catalog.resolve("8901234").unwrap().to_string();
//! let price = catalog.get(&name).unwrap().price;
//!
//! let mut cart = Cart::new();
//! cart.add_regular(&catalog, &name, 2, price).unwrap();
//!
//! assert_eq!(cart.total(), Money::from_paise(99800));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod receipt;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use till_core::Money` instead of
// `use till_core::money::Money`

pub use cart::Cart;
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use report::DailyReport;
pub use types::*;
