//! # Guest Count Bounds
//!
//! Keeps the guest stepper inside `[1, max_guests]`.
//!
//! ## Stepper Behavior
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  Guests        [ - ]   2   [ + ]         │
//! │                  │           │           │
//! │     decrement ───┘           └─── increment
//! │     max(1, n - 1)            min(max, n + 1)
//! │     disabled at 1            disabled at max
//! └──────────────────────────────────────────┘
//! ```
//!
//! Every operation clamps instead of rejecting. Out-of-range and negative
//! inputs come back inside the bounds.

use serde::{Deserialize, Serialize};

use crate::MIN_GUESTS;

/// Occupancy bounds for one property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestBounds {
    max_guests: u32,
}

impl GuestBounds {
    /// Creates bounds for a property's occupancy ceiling.
    ///
    /// A ceiling of 0 is treated as 1, so the range is never empty.
    pub fn new(max_guests: u32) -> Self {
        GuestBounds {
            max_guests: max_guests.max(MIN_GUESTS),
        }
    }

    /// Upper bound (inclusive).
    pub fn max_guests(&self) -> u32 {
        self.max_guests
    }

    /// Clamps any requested count into `[1, max_guests]`.
    ///
    /// ## Example
    /// ```rust
    /// use nido_core::GuestBounds;
    ///
    /// let bounds = GuestBounds::new(4);
    /// assert_eq!(bounds.clamp(-3), 1);
    /// assert_eq!(bounds.clamp(2), 2);
    /// assert_eq!(bounds.clamp(99), 4);
    /// ```
    pub fn clamp(&self, requested: i64) -> u32 {
        let clamped = requested.clamp(i64::from(MIN_GUESTS), i64::from(self.max_guests));
        // In range of u32 after the clamp above
        clamped as u32
    }

    /// One fewer guest, never below 1.
    pub fn decrement(&self, current: u32) -> u32 {
        self.clamp(i64::from(current) - 1)
    }

    /// One more guest, never above `max_guests`.
    pub fn increment(&self, current: u32) -> u32 {
        self.clamp(i64::from(current) + 1)
    }

    /// Whether the "-" button should be enabled.
    pub fn can_decrement(&self, current: u32) -> bool {
        current > MIN_GUESTS
    }

    /// Whether the "+" button should be enabled.
    pub fn can_increment(&self, current: u32) -> bool {
        current < self.max_guests
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stepper_edges() {
        let bounds = GuestBounds::new(4);
        assert_eq!(bounds.decrement(1), 1);
        assert_eq!(bounds.increment(4), 4);
        assert_eq!(bounds.increment(1), 2);
        assert_eq!(bounds.decrement(3), 2);
    }

    #[test]
    fn test_clamp_is_total() {
        let bounds = GuestBounds::new(4);
        for requested in [i64::MIN, -100, -1, 0, 1, 2, 3, 4, 5, 1_000, i64::MAX] {
            let guests = bounds.clamp(requested);
            assert!((1..=4).contains(&guests), "{requested} → {guests}");
        }
    }

    #[test]
    fn test_steps_from_out_of_range_values_stay_in_bounds() {
        let bounds = GuestBounds::new(4);
        assert_eq!(bounds.decrement(0), 1);
        assert_eq!(bounds.decrement(10), 4);
        assert_eq!(bounds.increment(0), 1);
        assert_eq!(bounds.increment(u32::MAX), 4);
    }

    #[test]
    fn test_zero_ceiling_behaves_as_one() {
        let bounds = GuestBounds::new(0);
        assert_eq!(bounds.max_guests(), 1);
        assert_eq!(bounds.clamp(3), 1);
    }

    #[test]
    fn test_button_states() {
        let bounds = GuestBounds::new(4);
        assert!(!bounds.can_decrement(1));
        assert!(bounds.can_decrement(2));
        assert!(bounds.can_increment(3));
        assert!(!bounds.can_increment(4));
    }
}
