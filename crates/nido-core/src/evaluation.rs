//! # Booking Evaluation
//!
//! The pure half of "evaluate this booking request": everything after the
//! property has been resolved.
//!
//! ## Pipeline
//! ```text
//! Property + DateRange + requested guests
//!      │
//!      ├──► GuestBounds::clamp        → guests
//!      ├──► compute_nights            → nights
//!      ├──► availability::assess      → feasibility
//!      ├──► PricingEngine::price      → cost_breakdown
//!      │
//!      ▼
//! BookingEvaluation { can_book = feasible && nights > 0 }
//! ```
//!
//! Recomputed from scratch on every input change; nothing is cached.

use crate::availability::assess;
use crate::guests::GuestBounds;
use crate::nights::compute_nights;
use crate::pricing::PricingEngine;
use crate::types::{BookingEvaluation, DateRange, Property};

/// Evaluates a request against an already-resolved property.
pub fn evaluate_property(
    property: Property,
    range: &DateRange,
    requested_guests: i64,
    pricing: &PricingEngine,
) -> BookingEvaluation {
    let guests = GuestBounds::new(property.max_guests).clamp(requested_guests);
    let nights = compute_nights(range);
    let feasibility = assess(range, &property.blocked_dates, property.min_nights);
    let feasible = feasibility.is_available();
    let cost_breakdown = pricing.price(property.nightly_rate, nights);

    BookingEvaluation {
        property,
        guests,
        nights,
        feasible,
        feasibility,
        cost_breakdown,
        can_book: feasible && nights > 0,
    }
}
