//! # nido-booking: Booking Evaluator for Nido
//!
//! The layer the web frontend calls on every date or guest change. It
//! resolves the property through a [`PropertyRepository`](nido_core::PropertyRepository)
//! and hands the pure work to `nido-core`.
//!
//! ## Modules
//!
//! - [`evaluator`] - `BookingEvaluator`, the async orchestrator
//! - [`memory`] - In-memory repository seeded with the demo catalog
//! - [`config`] - `NidoConfig` (nido.toml + `NIDO_*` environment)
//! - [`logging`] - Tracing subscriber setup for binaries
//! - [`error`] - `BookingError`
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use nido_booking::{BookingEvaluator, InMemoryPropertyRepository};
//! use nido_core::{DateRange, PricingEngine};
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let evaluator = BookingEvaluator::new(
//!     Arc::new(InMemoryPropertyRepository::with_demo_catalog()),
//!     PricingEngine::default(),
//! );
//!
//! let range = DateRange::new(
//!     NaiveDate::from_ymd_opt(2024, 2, 1),
//!     NaiveDate::from_ymd_opt(2024, 2, 3),
//! );
//! let outcome = evaluator.evaluate("1", &range, 2).await?;
//! assert!(outcome.can_book());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod evaluator;
pub mod logging;
pub mod memory;

pub use config::{LogFormat, NidoConfig, RepositoryBackend};
pub use error::{BookingError, BookingResult};
pub use evaluator::BookingEvaluator;
pub use memory::InMemoryPropertyRepository;
