//! # Domain Types
//!
//! Core domain types used throughout Nido.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Property     │   │    DateRange    │   │  CostBreakdown  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  from?          │   │  nights         │       │
//! │  │  nightly_rate   │   │  to?            │   │  subtotal       │       │
//! │  │  max_guests     │   └─────────────────┘   │  cleaning_fee   │       │
//! │  │  min_nights     │                         │  service_fee    │       │
//! │  │  blocked_dates  │   ┌─────────────────┐   │  total          │       │
//! │  │  policies       │   │   Feasibility   │   └─────────────────┘       │
//! │  └─────────────────┘   │  Incomplete     │                             │
//! │                        │  BelowMinimum   │   ┌─────────────────┐       │
//! │                        │  BlockedNight   │   │EvaluationOutcome│       │
//! │                        │  Available      │   │  NotFound       │       │
//! │                        └─────────────────┘   │  Evaluated      │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Calendar Dates Only
//! Every date here is a `chrono::NaiveDate`: day granularity, no time of day,
//! no timezone. Normalizing the guest's picker selection to calendar days is
//! the caller's job.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Property Id
// =============================================================================

/// Opaque property identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PropertyId(String);

impl PropertyId {
    /// Wraps an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        PropertyId(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PropertyId {
    fn from(id: &str) -> Self {
        PropertyId::new(id)
    }
}

impl From<String> for PropertyId {
    fn from(id: String) -> Self {
        PropertyId(id)
    }
}

// =============================================================================
// House Policies
// =============================================================================

/// Informational house rules shown next to the booking card.
///
/// None of these fields take part in feasibility or pricing. The deposit is
/// refundable and is not part of the charged total.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HousePolicies {
    /// Cancellation terms, e.g. "Free cancellation up to 48 hours before check-in".
    pub cancellation: String,

    /// Check-in window, e.g. "3:00 PM - 9:00 PM".
    pub check_in: String,

    /// Check-out time, e.g. "11:00 AM".
    pub check_out: String,

    /// Refundable security deposit.
    pub deposit: Money,
}

// =============================================================================
// Property
// =============================================================================

/// A rental listing as seen by the booking evaluator.
///
/// Read-only for the lifetime of a booking session. Produced by a
/// [`PropertyRepository`](crate::ports::PropertyRepository).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Property {
    /// Unique identifier.
    pub id: PropertyId,

    /// Listing headline.
    pub title: String,

    /// Human-readable location, e.g. "Luján, Buenos Aires".
    pub location: String,

    /// Price per night.
    pub nightly_rate: Money,

    /// Occupancy ceiling (at least 1).
    pub max_guests: u32,

    /// Minimum stay length in nights (at least 1).
    pub min_nights: u32,

    /// Dates that cannot be an occupied night of any stay.
    #[ts(as = "Vec<String>")]
    pub blocked_dates: BTreeSet<NaiveDate>,

    /// House rules.
    pub policies: HousePolicies,
}

// =============================================================================
// Date Range
// =============================================================================

/// The guest's (possibly partial) date selection.
///
/// ## States
/// ```text
/// from: None,  to: None   → nothing picked yet         (incomplete)
/// from: Some,  to: None   → check-in picked            (incomplete)
/// from: Some,  to: Some   → to > from                  (complete)
///                         → to <= from                 (incomplete)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DateRange {
    /// Check-in date.
    #[ts(as = "Option<String>")]
    pub from: Option<NaiveDate>,

    /// Check-out date.
    #[ts(as = "Option<String>")]
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Creates a range from two optional dates.
    pub const fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        DateRange { from, to }
    }

    /// Creates a range with both ends selected.
    pub const fn between(from: NaiveDate, to: NaiveDate) -> Self {
        DateRange {
            from: Some(from),
            to: Some(to),
        }
    }

    /// Creates a range with nothing selected.
    pub const fn empty() -> Self {
        DateRange { from: None, to: None }
    }

    /// Returns `(from, to)` when the range is complete.
    ///
    /// Same-day and inverted selections are not complete.
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.from, self.to) {
            (Some(from), Some(to)) if to > from => Some((from, to)),
            _ => None,
        }
    }

    /// Returns true if both ends are set and `to` is after `from`.
    pub fn is_complete(&self) -> bool {
        self.bounds().is_some()
    }

    /// Iterates the occupied nights: `from` inclusive up to `to` exclusive.
    ///
    /// Empty for an incomplete range. The check-out day is never included.
    pub fn occupied_nights(&self) -> impl Iterator<Item = NaiveDate> {
        self.bounds()
            .into_iter()
            .flat_map(|(from, to)| from.iter_days().take_while(move |day| *day < to))
    }
}

// =============================================================================
// Cost Breakdown
// =============================================================================

/// Itemized charge for a stay.
///
/// ## Invariants
/// - `subtotal == nightly_rate × nights`
/// - `total == subtotal + cleaning_fee + service_fee`
///
/// Both hold by construction: the fields are private and the only
/// constructor is [`PricingEngine::price`](crate::pricing::PricingEngine::price).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CostBreakdown {
    nights: u32,
    subtotal: Money,
    cleaning_fee: Money,
    service_fee: Money,
    total: Money,
}

impl CostBreakdown {
    pub(crate) fn compose(
        nightly_rate: Money,
        nights: u32,
        cleaning_fee: Money,
        service_fee: Money,
    ) -> Self {
        let subtotal = nightly_rate * nights;
        CostBreakdown {
            nights,
            subtotal,
            cleaning_fee,
            service_fee,
            total: subtotal + cleaning_fee + service_fee,
        }
    }

    pub fn nights(&self) -> u32 {
        self.nights
    }

    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    pub fn cleaning_fee(&self) -> Money {
        self.cleaning_fee
    }

    pub fn service_fee(&self) -> Money {
        self.service_fee
    }

    pub fn total(&self) -> Money {
        self.total
    }
}

// =============================================================================
// Feasibility
// =============================================================================

/// Why a date range can or cannot be booked.
///
/// `Incomplete` means "not ready yet" and is distinct from the two rejection
/// reasons. Only `Available` counts as feasible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export)]
pub enum Feasibility {
    /// The guest has not finished picking dates.
    Incomplete,

    /// The stay is shorter than the property's minimum.
    BelowMinimumStay { nights: u32, minimum: u32 },

    /// An occupied night falls on a blocked date (the earliest one is reported).
    BlockedNight {
        #[ts(as = "String")]
        date: NaiveDate,
    },

    /// Every rule passes.
    Available,
}

impl Feasibility {
    /// Returns true only for `Available`.
    pub fn is_available(&self) -> bool {
        matches!(self, Feasibility::Available)
    }
}

// =============================================================================
// Evaluation Request / Result
// =============================================================================

fn default_guests() -> i64 {
    1
}

/// What the presentation layer sends on every input change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EvaluationRequest {
    pub property_id: String,

    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub from: Option<NaiveDate>,

    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub to: Option<NaiveDate>,

    /// Requested guests; clamped, never rejected.
    #[serde(default = "default_guests")]
    pub guests: i64,
}

impl EvaluationRequest {
    /// Returns the requested date range.
    pub fn range(&self) -> DateRange {
        DateRange::new(self.from, self.to)
    }
}

/// The evaluated state of one booking request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BookingEvaluation {
    pub property: Property,

    /// Guest count after clamping into `[1, max_guests]`.
    pub guests: u32,

    pub nights: u32,

    pub feasible: bool,

    /// Reason behind `feasible`.
    pub feasibility: Feasibility,

    pub cost_breakdown: CostBreakdown,

    /// `feasible && nights > 0`. The book button gates on this alone.
    pub can_book: bool,
}

/// Result of `BookingEvaluator::evaluate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(tag = "outcome", rename_all = "snake_case")]
#[ts(export)]
pub enum EvaluationOutcome {
    /// The identifier did not resolve. No pricing was computed.
    PropertyNotFound { id: PropertyId },

    /// The property resolved and the request was evaluated.
    Evaluated(BookingEvaluation),
}

impl EvaluationOutcome {
    /// Returns the evaluation, if the property was found.
    pub fn evaluation(&self) -> Option<&BookingEvaluation> {
        match self {
            EvaluationOutcome::Evaluated(evaluation) => Some(evaluation),
            EvaluationOutcome::PropertyNotFound { .. } => None,
        }
    }

    /// Returns true if booking may proceed.
    pub fn can_book(&self) -> bool {
        self.evaluation().is_some_and(|e| e.can_book)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_range_completeness() {
        assert!(!DateRange::empty().is_complete());
        assert!(!DateRange::new(Some(date(2024, 2, 1)), None).is_complete());
        assert!(!DateRange::new(None, Some(date(2024, 2, 1))).is_complete());
        assert!(!DateRange::between(date(2024, 2, 1), date(2024, 2, 1)).is_complete());
        assert!(!DateRange::between(date(2024, 2, 3), date(2024, 2, 1)).is_complete());
        assert!(DateRange::between(date(2024, 2, 1), date(2024, 2, 2)).is_complete());
    }

    #[test]
    fn test_occupied_nights_exclude_checkout() {
        let range = DateRange::between(date(2024, 2, 28), date(2024, 3, 2));
        let nights: Vec<_> = range.occupied_nights().collect();
        assert_eq!(nights, vec![date(2024, 2, 28), date(2024, 2, 29), date(2024, 3, 1)]);
    }

    #[test]
    fn test_occupied_nights_empty_when_incomplete() {
        let inverted = DateRange::between(date(2024, 2, 5), date(2024, 2, 1));
        assert_eq!(inverted.occupied_nights().count(), 0);
        assert_eq!(DateRange::empty().occupied_nights().count(), 0);
    }

    #[test]
    fn test_cost_breakdown_compose() {
        let breakdown = CostBreakdown::compose(
            Money::from_major(2500),
            2,
            Money::from_major(150),
            Money::from_major(100),
        );
        assert_eq!(breakdown.subtotal().major(), 5000);
        assert_eq!(breakdown.total().major(), 5250);
    }

    #[test]
    fn test_evaluation_request_defaults() {
        let request: EvaluationRequest =
            serde_json::from_str(r#"{"propertyId":"1","from":"2024-02-01"}"#).unwrap();
        assert_eq!(request.guests, 1);
        assert_eq!(request.from, Some(date(2024, 2, 1)));
        assert!(!request.range().is_complete());
    }

    #[test]
    fn test_feasibility_serialization() {
        let json = serde_json::to_value(Feasibility::BelowMinimumStay {
            nights: 1,
            minimum: 2,
        })
        .unwrap();
        assert_eq!(json["status"], "below_minimum_stay");
        assert_eq!(json["minimum"], 2);
    }

    #[test]
    fn test_not_found_outcome_cannot_book() {
        let outcome = EvaluationOutcome::PropertyNotFound {
            id: PropertyId::new("missing"),
        };
        assert!(outcome.evaluation().is_none());
        assert!(!outcome.can_book());
    }
}
