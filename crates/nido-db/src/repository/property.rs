//! # Property Repository
//!
//! Database operations for rental listings and their blocked dates.
//!
//! ## Storage Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  properties                          blocked_dates                        │
//! │  ─────────────────────────           ──────────────────────────          │
//! │  id  "1"                 ◄────────── property_id "1"                      │
//! │  nightly_rate_cents 250000           blocked_on  "2024-02-15"             │
//! │  max_guests 4                        blocked_on  "2024-02-16"             │
//! │  min_nights 2                        ...                                  │
//! │                                                                           │
//! │  get_by_id("1") = 1 row + N dates ──► Property { blocked_dates: {..} }   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use nido_core::validation::validate_property;
use nido_core::{CoreError, CoreResult, HousePolicies, Money, Property, PropertyId, PropertyRepository};
use sqlx::{FromRow, SqlitePool};
use std::collections::BTreeSet;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};

/// Raw `properties` row.
#[derive(Debug, FromRow)]
struct PropertyRow {
    id: String,
    title: String,
    location: String,
    nightly_rate_cents: i64,
    max_guests: i64,
    min_nights: i64,
    cancellation_policy: String,
    check_in_window: String,
    check_out_time: String,
    deposit_cents: i64,
}

impl PropertyRow {
    fn into_property(self, blocked_dates: BTreeSet<NaiveDate>) -> DbResult<Property> {
        let max_guests = u32::try_from(self.max_guests)
            .map_err(|_| DbError::corrupt("properties", format!("max_guests = {}", self.max_guests)))?;
        let min_nights = u32::try_from(self.min_nights)
            .map_err(|_| DbError::corrupt("properties", format!("min_nights = {}", self.min_nights)))?;

        Ok(Property {
            id: PropertyId::new(self.id),
            title: self.title,
            location: self.location,
            nightly_rate: Money::from_cents(self.nightly_rate_cents),
            max_guests,
            min_nights,
            blocked_dates,
            policies: HousePolicies {
                cancellation: self.cancellation_policy,
                check_in: self.check_in_window,
                check_out: self.check_out_time,
                deposit: Money::from_cents(self.deposit_cents),
            },
        })
    }
}

/// Repository for property database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.properties();
/// repo.insert(&property).await?;
/// let found = repo.get_by_id("1").await?;
/// ```
#[derive(Debug, Clone)]
pub struct SqlitePropertyRepository {
    pool: SqlitePool,
}

impl SqlitePropertyRepository {
    pub fn new(pool: SqlitePool) -> Self {
        SqlitePropertyRepository { pool }
    }

    /// Gets a property and its blocked dates.
    ///
    /// ## Returns
    /// * `Ok(Some(Property))` - Property found
    /// * `Ok(None)` - No property with this id
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Property>> {
        let row = sqlx::query_as::<_, PropertyRow>(
            r#"
            SELECT
                id,
                title,
                location,
                nightly_rate_cents,
                max_guests,
                min_nights,
                cancellation_policy,
                check_in_window,
                check_out_time,
                deposit_cents
            FROM properties
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            debug!(property_id = %id, "Property not found");
            return Ok(None);
        };

        let blocked_dates = self.blocked_dates(id).await?;
        row.into_property(blocked_dates).map(Some)
    }

    /// Returns the blocked dates of a property, in calendar order.
    pub async fn blocked_dates(&self, id: &str) -> DbResult<BTreeSet<NaiveDate>> {
        let dates: Vec<NaiveDate> = sqlx::query_scalar(
            "SELECT blocked_on FROM blocked_dates WHERE property_id = ?1 ORDER BY blocked_on",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(dates.into_iter().collect())
    }

    /// Inserts a property together with its blocked dates.
    ///
    /// The record is validated first. Runs in one transaction.
    pub async fn insert(&self, property: &Property) -> DbResult<()> {
        validate_property(property)?;

        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO properties (
                id, title, location, nightly_rate_cents, max_guests, min_nights,
                cancellation_policy, check_in_window, check_out_time, deposit_cents,
                created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
            "#,
        )
        .bind(property.id.as_str())
        .bind(&property.title)
        .bind(&property.location)
        .bind(property.nightly_rate.cents())
        .bind(i64::from(property.max_guests))
        .bind(i64::from(property.min_nights))
        .bind(&property.policies.cancellation)
        .bind(&property.policies.check_in)
        .bind(&property.policies.check_out)
        .bind(property.policies.deposit.cents())
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        for date in &property.blocked_dates {
            sqlx::query("INSERT OR IGNORE INTO blocked_dates (property_id, blocked_on) VALUES (?1, ?2)")
                .bind(property.id.as_str())
                .bind(*date)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        info!(
            property_id = %property.id,
            blocked = property.blocked_dates.len(),
            "Property inserted"
        );
        Ok(())
    }

    /// Marks dates unavailable. Already-blocked dates are skipped.
    ///
    /// ## Returns
    /// Number of newly blocked dates.
    pub async fn block_dates(&self, id: &str, dates: &[NaiveDate]) -> DbResult<u64> {
        if !self.exists(id).await? {
            return Err(DbError::not_found("Property", id));
        }

        let mut tx = self.pool.begin().await?;
        let mut added = 0;

        for date in dates {
            let result = sqlx::query(
                "INSERT OR IGNORE INTO blocked_dates (property_id, blocked_on) VALUES (?1, ?2)",
            )
            .bind(id)
            .bind(*date)
            .execute(&mut *tx)
            .await?;
            added += result.rows_affected();
        }

        sqlx::query("UPDATE properties SET updated_at = ?1 WHERE id = ?2")
            .bind(Utc::now())
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        debug!(property_id = %id, added, "Blocked dates added");
        Ok(added)
    }

    /// Makes a date available again.
    ///
    /// ## Returns
    /// `true` if the date was blocked before the call.
    pub async fn unblock_date(&self, id: &str, date: NaiveDate) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM blocked_dates WHERE property_id = ?1 AND blocked_on = ?2")
            .bind(id)
            .bind(date)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Counts stored properties.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM properties")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn exists(&self, id: &str) -> DbResult<bool> {
        let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM properties WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(found.is_some())
    }
}

#[async_trait]
impl PropertyRepository for SqlitePropertyRepository {
    async fn resolve(&self, id: &PropertyId) -> CoreResult<Property> {
        match self.get_by_id(id.as_str()).await {
            Ok(Some(property)) => Ok(property),
            Ok(None) => Err(CoreError::PropertyNotFound(id.to_string())),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use nido_core::catalog::demo_property;

    fn feb(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, day).unwrap()
    }

    async fn seeded() -> (Database, SqlitePropertyRepository) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.properties();
        repo.insert(&demo_property()).await.unwrap();
        (db, repo)
    }

    #[tokio::test]
    async fn test_insert_and_get_round_trip() {
        let (_db, repo) = seeded().await;

        let stored = repo.get_by_id("1").await.unwrap().unwrap();
        assert_eq!(stored, demo_property());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_missing_property_is_none() {
        let (_db, repo) = seeded().await;
        assert!(repo.get_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_insert_is_rejected() {
        let (_db, repo) = seeded().await;
        let err = repo.insert(&demo_property()).await.unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[tokio::test]
    async fn test_invalid_record_is_rejected() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut property = demo_property();
        property.max_guests = 0;

        let err = db.properties().insert(&property).await.unwrap_err();
        assert!(matches!(err, DbError::Validation(_)));
        assert_eq!(db.properties().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_block_and_unblock_dates() {
        let (_db, repo) = seeded().await;

        // 02-15 is already blocked in the demo listing
        let added = repo.block_dates("1", &[feb(10), feb(15)]).await.unwrap();
        assert_eq!(added, 1);
        assert!(repo.blocked_dates("1").await.unwrap().contains(&feb(10)));

        assert!(repo.unblock_date("1", feb(10)).await.unwrap());
        assert!(!repo.unblock_date("1", feb(10)).await.unwrap());
    }

    #[tokio::test]
    async fn test_block_dates_on_unknown_property() {
        let (_db, repo) = seeded().await;
        let err = repo.block_dates("missing", &[feb(1)]).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_through_port() {
        let (_db, repo) = seeded().await;

        let property = repo.resolve(&PropertyId::new("1")).await.unwrap();
        assert_eq!(property.min_nights, 2);

        let err = repo.resolve(&PropertyId::new("404")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_resolve_on_closed_pool_is_unavailable() {
        let (db, repo) = seeded().await;
        db.close().await;

        let err = repo.resolve(&PropertyId::new("1")).await.unwrap_err();
        assert!(matches!(err, CoreError::RepositoryUnavailable(_)));
    }
}
