//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    2500.00 USDC/night × 3 nights = 750000 cents, exactly               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use nido_core::money::Money;
//!
//! let rate = Money::from_major(2500);   // 2500.00 USDC per night
//! let subtotal = rate * 2u32;           // 5000.00 USDC (2 nights)
//! let total = subtotal + Money::from_major(250);
//! assert_eq!(total.major(), 5250);
//! ```
//!
//! Arithmetic saturates at the `i64` bounds instead of overflowing, so
//! pricing stays total for any input.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

use crate::CURRENCY;

/// Minor units per whole currency unit (USDC is displayed with 2 decimals).
const MINOR_PER_MAJOR: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Leaves room for refunds and credits
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serialized as a bare integer**: the frontend formats it
///
/// ## Where Money is Used
/// ```text
/// Property.nightly_rate ──► × nights ──► CostBreakdown.subtotal
///                                               │
/// FeeSchedule.cleaning_fee ─────────────────────┤
/// FeeSchedule.service_fee ──────────────────────┴──► CostBreakdown.total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, type = "number")]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use nido_core::money::Money;
    ///
    /// let fee = Money::from_cents(15000); // 150.00 USDC
    /// assert_eq!(fee.major(), 150);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole currency units.
    ///
    /// Listing prices and platform fees are quoted in whole units.
    #[inline]
    pub const fn from_major(units: i64) -> Self {
        Money(units.saturating_mul(MINOR_PER_MAJOR))
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit portion (truncated toward zero).
    ///
    /// ## Example
    /// ```rust
    /// use nido_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(250099).major(), 2500);
    /// assert_eq!(Money::from_cents(-550).major(), -5);
    /// ```
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Returns the minor-unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a nightly rate by a night count.
    ///
    /// ## Example
    /// ```rust
    /// use nido_core::money::Money;
    ///
    /// let rate = Money::from_major(2500);
    /// assert_eq!(rate.times_nights(2).major(), 5000);
    /// assert!(rate.times_nights(0).is_zero());
    /// ```
    #[inline]
    pub const fn times_nights(&self, nights: u32) -> Self {
        Money(self.0.saturating_mul(nights as i64))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the amount with the platform currency label.
///
/// ## Note
/// This is for logs and the CLI. The web frontend does its own localized
/// formatting from the raw cents.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02} {}",
            sign,
            self.major().abs(),
            self.minor_part(),
            CURRENCY
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

/// Multiplication by a night count.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, nights: u32) -> Self {
        self.times_nights(nights)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
