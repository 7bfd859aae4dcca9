//! In-memory property repository.
//!
//! Holds listings in a map behind a `tokio::sync::RwLock`. Used for the demo
//! catalog and in tests; `nido_db::SqlitePropertyRepository` is the
//! production counterpart.

use async_trait::async_trait;
use nido_core::catalog::demo_property;
use nido_core::validation::validate_property;
use nido_core::{CoreError, CoreResult, Property, PropertyId, PropertyRepository};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Default)]
pub struct InMemoryPropertyRepository {
    properties: RwLock<HashMap<PropertyId, Property>>,
}

impl InMemoryPropertyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding the demo listing `"1"`.
    pub fn with_demo_catalog() -> Self {
        let property = demo_property();
        let mut properties = HashMap::new();
        properties.insert(property.id.clone(), property);

        InMemoryPropertyRepository {
            properties: RwLock::new(properties),
        }
    }

    /// Adds or replaces a listing after validating it.
    pub async fn insert(&self, property: Property) -> CoreResult<()> {
        validate_property(&property)?;

        debug!(property_id = %property.id, "Storing property in memory");
        self.properties
            .write()
            .await
            .insert(property.id.clone(), property);
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.properties.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.properties.read().await.is_empty()
    }
}

#[async_trait]
impl PropertyRepository for InMemoryPropertyRepository {
    async fn resolve(&self, id: &PropertyId) -> CoreResult<Property> {
        self.properties
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::PropertyNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nido_core::Money;

    #[tokio::test]
    async fn test_demo_catalog_resolves() {
        let repo = InMemoryPropertyRepository::with_demo_catalog();
        let property = repo.resolve(&PropertyId::new("1")).await.unwrap();

        assert_eq!(property.nightly_rate, Money::from_major(2500));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let repo = InMemoryPropertyRepository::new();
        assert!(repo.is_empty().await);

        let err = repo.resolve(&PropertyId::new("1")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_insert_validates() {
        let repo = InMemoryPropertyRepository::new();

        let mut property = demo_property();
        property.min_nights = 0;
        assert!(matches!(
            repo.insert(property).await,
            Err(CoreError::Validation(_))
        ));

        let mut property = demo_property();
        property.id = PropertyId::new("loft-7");
        repo.insert(property).await.unwrap();
        assert!(repo.resolve(&PropertyId::new("loft-7")).await.is_ok());
    }
}
