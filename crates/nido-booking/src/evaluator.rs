//! # Booking Evaluator
//!
//! Resolves a property and evaluates a stay against it.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  evaluate("1", 2024-02-01 → 2024-02-03, guests = 2)                    │
//! │                                                                         │
//! │  1. repository.resolve("1").await                                      │
//! │       ├── Err(PropertyNotFound) ──► Ok(Outcome::PropertyNotFound)      │
//! │       ├── Err(other)            ──► Err(other)   (reported once)       │
//! │       └── Ok(property)                                                 │
//! │                                                                         │
//! │  2. evaluate_property(property, range, guests, pricing)   (pure)       │
//! │       clamp guests → nights → feasibility → cost breakdown             │
//! │                                                                         │
//! │  3. Ok(Outcome::Evaluated { can_book = feasible && nights > 0 })       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is computed until the lookup has completed. Each call is
//! independent; the evaluator holds no per-request state and can be shared
//! across tasks behind an `Arc`.

use nido_core::{
    evaluate_property, CoreError, CoreResult, DateRange, EvaluationOutcome, EvaluationRequest,
    PricingEngine, PropertyId, PropertyRepository,
};
use nido_db::{Database, DbConfig};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::{NidoConfig, RepositoryBackend};
use crate::error::{BookingError, BookingResult};
use crate::memory::InMemoryPropertyRepository;

#[derive(Clone)]
pub struct BookingEvaluator {
    repository: Arc<dyn PropertyRepository>,
    pricing: PricingEngine,
}

impl std::fmt::Debug for BookingEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingEvaluator")
            .field("pricing", &self.pricing)
            .finish_non_exhaustive()
    }
}

impl BookingEvaluator {
    pub fn new(repository: Arc<dyn PropertyRepository>, pricing: PricingEngine) -> Self {
        BookingEvaluator { repository, pricing }
    }

    /// Builds an evaluator from configuration, opening the configured store.
    pub async fn from_config(config: &NidoConfig) -> BookingResult<Self> {
        let pricing = PricingEngine::new(config.fee_schedule());

        let repository: Arc<dyn PropertyRepository> = match config.backend() {
            RepositoryBackend::Memory => {
                info!("Using in-memory demo catalog");
                Arc::new(InMemoryPropertyRepository::with_demo_catalog())
            }
            RepositoryBackend::Sqlite => {
                let path = config.repository.database_path.clone().ok_or_else(|| {
                    BookingError::InvalidConfig(
                        "database_path is required for the sqlite backend".into(),
                    )
                })?;
                let db = Database::new(DbConfig::new(path)).await?;
                Arc::new(db.properties())
            }
        };

        Ok(BookingEvaluator::new(repository, pricing))
    }

    pub fn pricing(&self) -> &PricingEngine {
        &self.pricing
    }

    /// Evaluates a stay at `property_id`.
    ///
    /// An unknown id yields `Ok(EvaluationOutcome::PropertyNotFound)`.
    /// `Err` is returned only when the repository itself fails.
    pub async fn evaluate(
        &self,
        property_id: &str,
        range: &DateRange,
        requested_guests: i64,
    ) -> CoreResult<EvaluationOutcome> {
        let id = PropertyId::new(property_id);

        let property = match self.repository.resolve(&id).await {
            Ok(property) => property,
            Err(CoreError::PropertyNotFound(_)) => {
                debug!(property_id = %id, "Property not found");
                return Ok(EvaluationOutcome::PropertyNotFound { id });
            }
            Err(err) => {
                warn!(property_id = %id, error = %err, "Property lookup failed");
                return Err(err);
            }
        };

        let evaluation = evaluate_property(property, range, requested_guests, &self.pricing);

        debug!(
            property_id = %id,
            nights = evaluation.nights,
            guests = evaluation.guests,
            feasible = evaluation.feasible,
            can_book = evaluation.can_book,
            total = %evaluation.cost_breakdown.total(),
            "Booking evaluated"
        );

        Ok(EvaluationOutcome::Evaluated(evaluation))
    }

    /// Evaluates a request as sent by the presentation layer.
    pub async fn evaluate_request(
        &self,
        request: &EvaluationRequest,
    ) -> CoreResult<EvaluationOutcome> {
        self.evaluate(&request.property_id, &request.range(), request.guests)
            .await
    }
}
