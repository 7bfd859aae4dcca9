//! # Pricing Engine
//!
//! Turns a night count and a nightly rate into an itemized cost breakdown.
//!
//! ## Calculation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  2500.00 USDC × 2 nights                             5000.00 USDC       │
//! │  Cleaning fee                                         150.00 USDC       │
//! │  Service fee                                          100.00 USDC       │
//! │  ───────────────────────────────────────────────────────────────        │
//! │  Total                                               5250.00 USDC       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Fees are platform-wide, not per property. With zero nights the engine
//! still returns a valid breakdown (fees only); whether to show it is the
//! UI's decision.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::CostBreakdown;
use crate::{DEFAULT_CLEANING_FEE, DEFAULT_SERVICE_FEE};

/// Flat per-stay platform fees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub cleaning_fee: Money,
    pub service_fee: Money,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        FeeSchedule {
            cleaning_fee: Money::from_major(DEFAULT_CLEANING_FEE),
            service_fee: Money::from_major(DEFAULT_SERVICE_FEE),
        }
    }
}

/// Prices stays against a fee schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PricingEngine {
    fees: FeeSchedule,
}

impl PricingEngine {
    pub fn new(fees: FeeSchedule) -> Self {
        PricingEngine { fees }
    }

    pub fn fees(&self) -> FeeSchedule {
        self.fees
    }

    /// Builds the cost breakdown for `nights` at `nightly_rate`.
    ///
    /// Exact integer arithmetic: `subtotal = rate × nights`,
    /// `total = subtotal + cleaning + service`. Pure and total; amounts past
    /// the `i64` cent range saturate, which validated rates never reach.
    ///
    /// ## Example
    /// ```rust
    /// use nido_core::{Money, PricingEngine};
    ///
    /// let breakdown = PricingEngine::default().price(Money::from_major(2500), 2);
    /// assert_eq!(breakdown.subtotal().major(), 5000);
    /// assert_eq!(breakdown.total().major(), 5250);
    /// ```
    pub fn price(&self, nightly_rate: Money, nights: u32) -> CostBreakdown {
        CostBreakdown::compose(
            nightly_rate,
            nights,
            self.fees.cleaning_fee,
            self.fees.service_fee,
        )
    }
}
