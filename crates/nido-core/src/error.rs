//! # Error Types
//!
//! Domain-specific error types for nido-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  nido-core errors (this file)                                          │
//! │  ├── CoreError        - Property lookup failures                       │
//! │  └── ValidationError  - Property record validation failures           │
//! │                                                                         │
//! │  nido-db errors (separate crate)                                       │
//! │  └── DbError          - Database operation failures → CoreError        │
//! │                                                                         │
//! │  nido-booking errors (app crate)                                       │
//! │  └── BookingError     - Config / IO failures, wraps CoreError          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Night counting, availability, guest clamping and pricing are total
//! functions and have no error type at all. Only the property lookup and
//! record ingest can fail.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised at the property lookup seam.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No property matches the identifier.
    ///
    /// ## When This Occurs
    /// - Stale link to a delisted property
    /// - Typo in the identifier
    ///
    /// The evaluator turns this into an `EvaluationOutcome::PropertyNotFound`
    /// so the UI can render its "not found" view. It is never retried.
    #[error("Property not found: {0}")]
    PropertyNotFound(String),

    /// The backing store could not answer the lookup.
    #[error("Property repository unavailable: {0}")]
    RepositoryUnavailable(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Returns true if this error means the identifier did not resolve.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::PropertyNotFound(_))
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Property record validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., unparseable date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::PropertyNotFound("42".to_string());
        assert_eq!(err.to_string(), "Property not found: 42");

        let err = CoreError::RepositoryUnavailable("pool closed".to_string());
        assert_eq!(err.to_string(), "Property repository unavailable: pool closed");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "id".to_string(),
        };
        assert_eq!(err.to_string(), "id is required");

        let err = ValidationError::MustBePositive {
            field: "nightly_rate".to_string(),
        };
        assert_eq!(err.to_string(), "nightly_rate must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "title".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert!(!core_err.is_not_found());
    }

    #[test]
    fn test_is_not_found() {
        assert!(CoreError::PropertyNotFound("x".into()).is_not_found());
        assert!(!CoreError::RepositoryUnavailable("x".into()).is_not_found());
    }
}
