//! # Booking Error Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Booking Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Arguments     │  │     Lookup              │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  InvalidArgument│  │  Core (CoreError)       │ │
//! │  │  ConfigLoad     │  │                 │  │  Db (DbError)           │ │
//! │  │  ConfigSave     │  │                 │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An unknown property is never an error here; the evaluator reports it as
//! `EvaluationOutcome::PropertyNotFound`.

use nido_core::CoreError;
use nido_db::DbError;
use thiserror::Error;

/// Result type alias for booking operations.
pub type BookingResult<T> = Result<T, BookingError>;

#[derive(Debug, Error)]
pub enum BookingError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Configuration values that cannot be used.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failed to read or parse the config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to write the config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Input Errors
    // =========================================================================
    /// Malformed command line input.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // =========================================================================
    // Lookup Errors
    // =========================================================================
    /// Repository failure surfaced by the evaluator.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Failure opening the property store.
    #[error(transparent)]
    Db(#[from] DbError),
}

impl From<std::io::Error> for BookingError {
    fn from(err: std::io::Error) -> Self {
        BookingError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for BookingError {
    fn from(err: toml::de::Error) -> Self {
        BookingError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for BookingError {
    fn from(err: toml::ser::Error) -> Self {
        BookingError::ConfigSaveFailed(err.to_string())
    }
}

impl From<nido_core::ValidationError> for BookingError {
    fn from(err: nido_core::ValidationError) -> Self {
        BookingError::InvalidArgument(err.to_string())
    }
}
