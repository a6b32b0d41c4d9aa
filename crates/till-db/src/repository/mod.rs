//! # Repository Module
//!
//! Database repository implementations for TillPoint.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                     │
//! │                                                                     │
//! │  The Repository pattern abstracts database access behind a clean   │
//! │  API. SQL lives here and nowhere else.                              │
//! │                                                                     │
//! │  Register session                                                   │
//! │       │                                                             │
//! │       │  db.inventory().update_stock("Shirt", 8)                    │
//! │       ▼                                                             │
//! │  InventoryRepository                                                │
//! │  ├── fetch_all(&self)                                               │
//! │  ├── insert(&self, item)                                            │
//! │  ├── update_stock(&self, name, new_stock)                           │
//! │  └── delete(&self, name)                                            │
//! │       │                                                             │
//! │       │  SQL Query                                                  │
//! │       ▼                                                             │
//! │  SQLite Database                                                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`inventory::InventoryRepository`] - Catalog item CRUD
//! - [`sale::SaleRepository`] - Append-only sales ledger
//! - [`receipt::ReceiptRepository`] - Single-slot last-receipt snapshot

pub mod inventory;
pub mod receipt;
pub mod sale;
