//! # nido-core: Pure Booking Logic for Nido
//!
//! This crate is the **heart** of the Nido booking flow. It decides whether a
//! guest's requested stay at a property is bookable and what it costs, as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Nido Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (Next.js)                           │   │
//! │  │   Calendar ──► Guest stepper ──► Cost breakdown ──► Book button │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ EvaluationRequest                      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              nido-booking (BookingEvaluator)                    │   │
//! │  │      resolve property (async) ──► evaluate_property (pure)      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ nido-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │  ┌─────────┐ ┌──────────────┐ ┌─────────┐ ┌─────────┐          │   │
//! │  │  │ nights  │ │ availability │ │ guests  │ │ pricing │          │   │
//! │  │  └─────────┘ └──────────────┘ └─────────┘ └─────────┘          │   │
//! │  │        └──────────────┬──────────────┘          │               │   │
//! │  │                  evaluation ◄────────────────────┘               │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                ▲                                        │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐   │
//! │  │      PropertyRepository implementations (nido-db, in-memory)     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Property, DateRange, CostBreakdown, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`nights`] - Night counting for a date range
//! - [`availability`] - Minimum stay and blocked-night checks
//! - [`guests`] - Guest count clamping for the stepper
//! - [`pricing`] - Cost breakdown from rate and nights
//! - [`evaluation`] - The pure "evaluate this stay" step
//! - [`ports`] - The `PropertyRepository` trait implemented by storage crates
//! - [`catalog`] - The demo listing used for seeding
//! - [`validation`] - Property record validation at ingest
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use nido_core::{catalog, evaluate_property, DateRange, PricingEngine};
//!
//! let property = catalog::demo_property();
//! let range = DateRange::new(
//!     NaiveDate::from_ymd_opt(2024, 2, 1),
//!     NaiveDate::from_ymd_opt(2024, 2, 3),
//! );
//!
//! let evaluation = evaluate_property(property, &range, 2, &PricingEngine::default());
//! assert!(evaluation.can_book);
//! assert_eq!(evaluation.cost_breakdown.total().major(), 5250);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod availability;
pub mod catalog;
pub mod error;
pub mod evaluation;
pub mod guests;
pub mod money;
pub mod nights;
pub mod ports;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use availability::{assess, is_date_blocked, is_feasible};
pub use error::{CoreError, CoreResult, ValidationError};
pub use evaluation::evaluate_property;
pub use guests::GuestBounds;
pub use money::Money;
pub use nights::compute_nights;
pub use ports::PropertyRepository;
pub use pricing::{FeeSchedule, PricingEngine};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Platform cleaning fee in whole currency units, charged once per stay.
pub const DEFAULT_CLEANING_FEE: i64 = 150;

/// Platform service fee in whole currency units, charged once per stay.
pub const DEFAULT_SERVICE_FEE: i64 = 100;

/// Lowest guest count a booking can carry.
pub const MIN_GUESTS: u32 = 1;

/// Currency label used when displaying money.
pub const CURRENCY: &str = "USDC";
