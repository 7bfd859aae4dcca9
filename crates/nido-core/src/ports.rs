//! # Ports
//!
//! Traits implemented outside this crate.
//!
//! ## PropertyRepository
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  BookingEvaluator ──► dyn PropertyRepository ──┬──► InMemory (tests)   │
//! │                                                │                        │
//! │                                                └──► SQLite (nido-db)    │
//! │                                                                         │
//! │  resolve("1")   → Ok(Property)                                         │
//! │  resolve("404") → Err(CoreError::PropertyNotFound("404"))              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{Property, PropertyId};

/// Resolves a property identifier to its listing.
///
/// ## Contract
/// - Unknown id → `CoreError::PropertyNotFound(id)`
/// - Storage failure → `CoreError::RepositoryUnavailable(reason)`
/// - May suspend while fetching; callers await the full result before using it
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    async fn resolve(&self, id: &PropertyId) -> CoreResult<Property>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::demo_property;
    use crate::error::CoreError;
    use std::sync::Arc;

    struct SingleListing(Property);

    #[async_trait]
    impl PropertyRepository for SingleListing {
        async fn resolve(&self, id: &PropertyId) -> CoreResult<Property> {
            if *id == self.0.id {
                Ok(self.0.clone())
            } else {
                Err(CoreError::PropertyNotFound(id.to_string()))
            }
        }
    }

    #[tokio::test]
    async fn test_trait_object_resolves() {
        let repo: Arc<dyn PropertyRepository> = Arc::new(SingleListing(demo_property()));

        let property = repo.resolve(&PropertyId::new("1")).await.unwrap();
        assert_eq!(property.nightly_rate.major(), 2500);

        let err = repo.resolve(&PropertyId::new("2")).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
