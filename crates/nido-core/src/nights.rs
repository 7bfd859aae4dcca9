//! # Night Counting
//!
//! Derives the number of nights a date range occupies.
//!
//! ```text
//! check-in 2024-02-01 ──┬── night of 02-01
//!                       ├── night of 02-02
//! check-out 2024-02-03 ─┘   (departure, not a night)   → 2 nights
//! ```

use crate::types::DateRange;

/// Returns the number of nights between check-in and check-out.
///
/// ## Rules
/// - Incomplete range (either end missing) → `0`
/// - Same-day or inverted range → `0` ("not yet a bookable stay")
/// - Otherwise → `to − from` in whole calendar days
///
/// Dates carry no time of day, so the day difference is already whole and
/// no rounding is involved. Never fails.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use nido_core::{compute_nights, DateRange};
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 2, 1),
///     NaiveDate::from_ymd_opt(2024, 2, 3),
/// );
/// assert_eq!(compute_nights(&range), 2);
/// assert_eq!(compute_nights(&DateRange::empty()), 0);
/// ```
pub fn compute_nights(range: &DateRange) -> u32 {
    match range.bounds() {
        Some((from, to)) => {
            let days = to.signed_duration_since(from).num_days();
            u32::try_from(days).unwrap_or(u32::MAX)
        }
        None => 0,
    }
}
