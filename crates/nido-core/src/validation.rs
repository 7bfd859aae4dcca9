//! # Validation Module
//!
//! Checks applied to property records before they enter a repository.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Listing ingest (THIS MODULE)                                 │
//! │  ├── 0 < nightly rate <= MAX_NIGHTLY_RATE                              │
//! │  ├── max guests >= 1, min nights >= 1                                  │
//! │  └── id / title present                                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Database (SQLite CHECK constraints)                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Evaluation: no validation at all. Ranges and guest counts are         │
//! │  normalized (incomplete / clamped), never rejected.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Property;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted property identifier.
pub const MAX_PROPERTY_ID_LEN: usize = 64;

/// Longest accepted listing title.
pub const MAX_TITLE_LEN: usize = 200;

/// Highest accepted nightly rate, in whole currency units.
///
/// At this rate even a stay spanning the whole `NaiveDate` range prices
/// without reaching the `i64` cent limit.
pub const MAX_NIGHTLY_RATE: i64 = 1_000_000;

/// Validates a property identifier.
///
/// ## Example
/// ```rust
/// use nido_core::validation::validate_property_id;
///
/// assert!(validate_property_id("1").is_ok());
/// assert!(validate_property_id("  ").is_err());
/// ```
pub fn validate_property_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > MAX_PROPERTY_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: MAX_PROPERTY_ID_LEN,
        });
    }

    Ok(())
}

/// Validates a full property record.
///
/// ## Rules
/// - `id` present and at most 64 characters
/// - `title` present and at most 200 characters
/// - `nightly_rate` positive and at most [`MAX_NIGHTLY_RATE`]
/// - `max_guests` and `min_nights` at least 1
pub fn validate_property(property: &Property) -> ValidationResult<()> {
    validate_property_id(property.id.as_str())?;

    let title = property.title.trim();
    if title.is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }
    if title.len() > MAX_TITLE_LEN {
        return Err(ValidationError::TooLong {
            field: "title".to_string(),
            max: MAX_TITLE_LEN,
        });
    }

    if !property.nightly_rate.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "nightly_rate".to_string(),
        });
    }

    if property.nightly_rate > Money::from_major(MAX_NIGHTLY_RATE) {
        return Err(ValidationError::OutOfRange {
            field: "nightly_rate".to_string(),
            min: 1,
            max: Money::from_major(MAX_NIGHTLY_RATE).cents(),
        });
    }

    if property.max_guests == 0 {
        return Err(ValidationError::MustBePositive {
            field: "max_guests".to_string(),
        });
    }

    if property.min_nights == 0 {
        return Err(ValidationError::MustBePositive {
            field: "min_nights".to_string(),
        });
    }

    if property.policies.deposit.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "deposit".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Parses a `YYYY-MM-DD` calendar date.
///
/// ## Example
/// ```rust
/// use nido_core::validation::parse_date;
///
/// assert!(parse_date("2024-02-15").is_ok());
/// assert!(parse_date("15/02/2024").is_err());
/// ```
pub fn parse_date(value: &str) -> ValidationResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| {
        ValidationError::InvalidFormat {
            field: "date".to_string(),
            reason: e.to_string(),
        }
    })
}
