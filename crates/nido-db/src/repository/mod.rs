//! # Repository Module
//!
//! ## Available Repositories
//!
//! - [`property::SqlitePropertyRepository`] - Listings and their blocked
//!   dates; implements [`nido_core::PropertyRepository`]

pub mod property;
