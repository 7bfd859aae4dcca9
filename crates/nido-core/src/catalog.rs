//! # Demo Catalog
//!
//! The listing the web app ships with before a real property feed exists.
//! Used to seed the in-memory and SQLite repositories.

use chrono::NaiveDate;

use crate::money::Money;
use crate::types::{HousePolicies, Property, PropertyId};

/// Identifier of the demo listing.
pub const DEMO_PROPERTY_ID: &str = "1";

const DEMO_BLOCKED_DATES: &[(i32, u32, u32)] = &[
    (2024, 2, 15),
    (2024, 2, 16),
    (2024, 2, 20),
    (2024, 3, 1),
    (2024, 3, 2),
    (2024, 3, 3),
];

/// Builds the demo listing: "Modern Apartment with Kitchen" in Luján.
///
/// Rate 2500 USDC/night, up to 4 guests, 2-night minimum.
pub fn demo_property() -> Property {
    Property {
        id: PropertyId::new(DEMO_PROPERTY_ID),
        title: "Modern Apartment with Kitchen".to_string(),
        location: "Luján, Buenos Aires".to_string(),
        nightly_rate: Money::from_major(2500),
        max_guests: 4,
        min_nights: 2,
        blocked_dates: DEMO_BLOCKED_DATES
            .iter()
            .filter_map(|(y, m, d)| NaiveDate::from_ymd_opt(*y, *m, *d))
            .collect(),
        policies: HousePolicies {
            cancellation: "Free cancellation up to 48 hours before check-in".to_string(),
            check_in: "3:00 PM - 9:00 PM".to_string(),
            check_out: "11:00 AM".to_string(),
            deposit: Money::from_major(500),
        },
    }
}
