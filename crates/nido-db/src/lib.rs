//! # nido-db: Property Store for Nido
//!
//! SQLite-backed implementation of the [`PropertyRepository`] port.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  BookingEvaluator (nido-booking)                                        │
//! │       │ resolve(id)                                                     │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     nido-db (THIS CRATE)                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌──────────────────────┐  ┌───────────┐ │   │
//! │  │   │   Database    │    │ SqlitePropertyRepo   │  │ Migrations│ │   │
//! │  │   │   (pool.rs)   │◄───│ properties +         │  │ (embedded)│ │   │
//! │  │   │  SqlitePool   │    │ blocked_dates        │  │           │ │   │
//! │  │   └───────────────┘    └──────────────────────┘  └───────────┘ │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file (nido.db)                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use nido_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("nido.db")).await?;
//! db.properties().insert(&nido_core::catalog::demo_property()).await?;
//! ```
//!
//! [`PropertyRepository`]: nido_core::PropertyRepository

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::property::SqlitePropertyRepository;
