//! # Availability Checks
//!
//! Decides whether a date range can be booked against a property's calendar.
//!
//! ## Decision Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  assess(range, blocked_dates, min_nights)                               │
//! │       │                                                                 │
//! │       ├── range incomplete?            → Incomplete      (not ready)   │
//! │       │                                                                 │
//! │       ├── nights < min_nights?         → BelowMinimumStay (rejected)   │
//! │       │                                                                 │
//! │       ├── any night in [from, to)                                      │
//! │       │   is blocked?                  → BlockedNight    (rejected)   │
//! │       │                                                                 │
//! │       └── otherwise                    → Available                     │
//! │                                                                         │
//! │  Check-out day is NOT an occupied night: it may be blocked.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use std::collections::BTreeSet;

use crate::nights::compute_nights;
use crate::types::{DateRange, Feasibility};

/// Classifies a date range against the minimum stay and blocked dates.
///
/// Pure and total. The earliest blocked occupied night is reported.
pub fn assess(range: &DateRange, blocked_dates: &BTreeSet<NaiveDate>, min_nights: u32) -> Feasibility {
    let Some((from, to)) = range.bounds() else {
        return Feasibility::Incomplete;
    };

    let nights = compute_nights(range);
    if nights < min_nights {
        return Feasibility::BelowMinimumStay {
            nights,
            minimum: min_nights,
        };
    }

    // Half-open: the check-out day is excluded
    if let Some(date) = blocked_dates.range(from..to).next() {
        return Feasibility::BlockedNight { date: *date };
    }

    Feasibility::Available
}

/// Returns true if the range is complete and bookable.
///
/// An incomplete range yields `false`. Callers that need to tell "not ready"
/// apart from "rejected" should use [`assess`].
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use nido_core::{is_feasible, DateRange};
/// use std::collections::BTreeSet;
///
/// let blocked: BTreeSet<_> = [NaiveDate::from_ymd_opt(2024, 2, 15).unwrap()].into();
/// let d = |day| NaiveDate::from_ymd_opt(2024, 2, day).unwrap();
///
/// assert!(!is_feasible(&DateRange::between(d(14), d(16)), &blocked, 2));
/// assert!(is_feasible(&DateRange::between(d(1), d(3)), &blocked, 2));
/// // Checking out on a blocked day is fine
/// assert!(is_feasible(&DateRange::between(d(13), d(15)), &blocked, 2));
/// ```
pub fn is_feasible(range: &DateRange, blocked_dates: &BTreeSet<NaiveDate>, min_nights: u32) -> bool {
    assess(range, blocked_dates, min_nights).is_available()
}

/// Returns true if the calendar should disable this day for check-in.
pub fn is_date_blocked(date: NaiveDate, blocked_dates: &BTreeSet<NaiveDate>) -> bool {
    blocked_dates.contains(&date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feb(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, day).unwrap()
    }

    fn blocked(days: &[u32]) -> BTreeSet<NaiveDate> {
        days.iter().map(|d| feb(*d)).collect()
    }

    #[test]
    fn test_blocked_occupied_night_is_infeasible() {
        let range = DateRange::between(feb(14), feb(16));
        assert_eq!(
            assess(&range, &blocked(&[15]), 2),
            Feasibility::BlockedNight { date: feb(15) }
        );
        assert!(!is_feasible(&range, &blocked(&[15]), 2));
    }

    #[test]
    fn test_blocked_check_in_day_is_infeasible() {
        let range = DateRange::between(feb(15), feb(18));
        assert!(!is_feasible(&range, &blocked(&[15]), 2));
    }

    #[test]
    fn test_blocked_check_out_day_is_allowed() {
        let range = DateRange::between(feb(13), feb(15));
        assert!(is_feasible(&range, &blocked(&[15]), 2));
    }

    #[test]
    fn test_clear_range_is_feasible() {
        let range = DateRange::between(feb(1), feb(3));
        assert_eq!(assess(&range, &blocked(&[15]), 2), Feasibility::Available);
    }

    #[test]
    fn test_below_minimum_stay() {
        let range = DateRange::between(feb(1), feb(2));
        assert_eq!(
            assess(&range, &blocked(&[]), 2),
            Feasibility::BelowMinimumStay {
                nights: 1,
                minimum: 2
            }
        );
        assert!(!is_feasible(&range, &blocked(&[]), 2));
    }

    #[test]
    fn test_minimum_checked_before_blocked_dates() {
        let range = DateRange::between(feb(15), feb(16));
        assert!(matches!(
            assess(&range, &blocked(&[15]), 2),
            Feasibility::BelowMinimumStay { .. }
        ));
    }

    #[test]
    fn test_incomplete_range_is_not_ready() {
        let partial = DateRange::new(Some(feb(1)), None);
        assert_eq!(assess(&partial, &blocked(&[]), 1), Feasibility::Incomplete);
        assert!(!is_feasible(&partial, &blocked(&[]), 1));

        let inverted = DateRange::between(feb(5), feb(1));
        assert_eq!(assess(&inverted, &blocked(&[]), 1), Feasibility::Incomplete);
    }

    #[test]
    fn test_lowering_minimum_keeps_feasible() {
        let range = DateRange::between(feb(1), feb(5));
        let dates = blocked(&[10, 20]);
        for min in (1..=4).rev() {
            assert!(is_feasible(&range, &dates, min), "min_nights {min}");
        }
    }

    #[test]
    fn test_blocking_any_occupied_night_makes_infeasible() {
        let range = DateRange::between(feb(1), feb(6));
        assert!(is_feasible(&range, &blocked(&[]), 2));

        for night in range.occupied_nights() {
            let dates: BTreeSet<_> = [night].into();
            assert!(!is_feasible(&range, &dates, 2), "blocked {night}");
        }
    }

    #[test]
    fn test_reports_earliest_blocked_night() {
        let range = DateRange::between(feb(1), feb(10));
        assert_eq!(
            assess(&range, &blocked(&[8, 3, 5]), 1),
            Feasibility::BlockedNight { date: feb(3) }
        );
    }

    #[test]
    fn test_is_date_blocked() {
        let dates = blocked(&[15, 16]);
        assert!(is_date_blocked(feb(15), &dates));
        assert!(!is_date_blocked(feb(17), &dates));
    }
}
