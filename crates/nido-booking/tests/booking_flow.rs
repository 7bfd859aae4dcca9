//! End-to-end booking evaluations against both repository backends.

use chrono::NaiveDate;
use nido_booking::{BookingEvaluator, InMemoryPropertyRepository};
use nido_core::catalog::demo_property;
use nido_core::validation::MAX_NIGHTLY_RATE;
use nido_core::{
    DateRange, EvaluationOutcome, Feasibility, GuestBounds, HousePolicies, Money, PricingEngine,
    Property, PropertyId, PropertyRepository,
};
use nido_db::{Database, DbConfig};
use serde_json::Value;
use std::collections::BTreeSet;
use std::sync::Arc;

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap()
}

/// minNights = 2, blocked {2024-02-15}, rate 2500.
fn scenario_property() -> Property {
    Property {
        id: PropertyId::new("scenario"),
        title: "Scenario Loft".to_string(),
        location: "Test City".to_string(),
        nightly_rate: Money::from_major(2500),
        max_guests: 4,
        min_nights: 2,
        blocked_dates: BTreeSet::from([date(2, 15)]),
        policies: HousePolicies {
            cancellation: "Non-refundable".to_string(),
            check_in: "2:00 PM".to_string(),
            check_out: "10:00 AM".to_string(),
            deposit: Money::zero(),
        },
    }
}

fn evaluator_with(repository: Arc<dyn PropertyRepository>) -> BookingEvaluator {
    BookingEvaluator::new(repository, PricingEngine::default())
}

async fn memory_evaluator() -> BookingEvaluator {
    let repo = InMemoryPropertyRepository::with_demo_catalog();
    repo.insert(scenario_property()).await.unwrap();
    evaluator_with(Arc::new(repo))
}

#[tokio::test]
async fn blocked_night_inside_stay_is_infeasible() {
    let evaluator = memory_evaluator().await;
    let outcome = evaluator
        .evaluate("scenario", &DateRange::between(date(2, 14), date(2, 16)), 2)
        .await
        .unwrap();

    let evaluation = outcome.evaluation().unwrap();
    assert!(!evaluation.feasible);
    assert!(!evaluation.can_book);
    assert_eq!(evaluation.feasibility, Feasibility::BlockedNight { date: date(2, 15) });
}

#[tokio::test]
async fn clear_two_night_stay_is_priced() {
    let evaluator = memory_evaluator().await;
    let outcome = evaluator
        .evaluate("scenario", &DateRange::between(date(2, 1), date(2, 3)), 2)
        .await
        .unwrap();

    let evaluation = outcome.evaluation().unwrap();
    assert!(evaluation.feasible);
    assert!(evaluation.can_book);
    assert_eq!(evaluation.nights, 2);
    assert_eq!(evaluation.cost_breakdown.subtotal(), Money::from_major(5000));
    assert_eq!(evaluation.cost_breakdown.total(), Money::from_major(5250));
}

#[tokio::test]
async fn one_night_is_below_minimum_stay() {
    let evaluator = memory_evaluator().await;
    let outcome = evaluator
        .evaluate("scenario", &DateRange::between(date(2, 1), date(2, 2)), 2)
        .await
        .unwrap();

    let evaluation = outcome.evaluation().unwrap();
    assert!(!evaluation.feasible);
    assert_eq!(
        evaluation.feasibility,
        Feasibility::BelowMinimumStay { nights: 1, minimum: 2 }
    );
}

#[tokio::test]
async fn checkout_on_blocked_day_is_allowed() {
    let evaluator = memory_evaluator().await;
    let outcome = evaluator
        .evaluate("scenario", &DateRange::between(date(2, 13), date(2, 15)), 2)
        .await
        .unwrap();

    assert!(outcome.can_book());
}

#[tokio::test]
async fn unresolved_id_has_no_breakdown() {
    let evaluator = memory_evaluator().await;
    let outcome = evaluator
        .evaluate("nope", &DateRange::between(date(2, 1), date(2, 3)), 2)
        .await
        .unwrap();

    assert!(matches!(outcome, EvaluationOutcome::PropertyNotFound { .. }));

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["outcome"], "property_not_found");
    assert!(json.get("costBreakdown").is_none());
}

#[tokio::test]
async fn inverted_range_is_not_bookable() {
    let evaluator = memory_evaluator().await;
    let outcome = evaluator
        .evaluate("scenario", &DateRange::between(date(2, 5), date(2, 3)), 2)
        .await
        .unwrap();

    let evaluation = outcome.evaluation().unwrap();
    assert_eq!(evaluation.nights, 0);
    assert_eq!(evaluation.feasibility, Feasibility::Incomplete);
    assert!(!evaluation.can_book);
}

#[test]
fn guest_stepper_stays_in_bounds() {
    let bounds = GuestBounds::new(4);
    assert_eq!(bounds.decrement(1), 1);
    assert_eq!(bounds.increment(4), 4);
}

#[tokio::test]
async fn evaluation_serializes_for_the_frontend() {
    let evaluator = memory_evaluator().await;
    let outcome = evaluator
        .evaluate("1", &DateRange::between(date(2, 1), date(2, 3)), 2)
        .await
        .unwrap();

    let json: Value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["outcome"], "evaluated");
    assert_eq!(json["canBook"], true);
    assert_eq!(json["nights"], 2);
    assert_eq!(json["feasibility"]["status"], "available");
    assert_eq!(json["property"]["maxGuests"], 4);
}

#[tokio::test]
async fn sqlite_backend_matches_memory_backend() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let store = db.properties();
    store.insert(&demo_property()).await.unwrap();
    store.insert(&scenario_property()).await.unwrap();

    let sqlite = evaluator_with(Arc::new(store));
    let memory = memory_evaluator().await;

    let requests = [
        ("1", DateRange::between(date(2, 1), date(2, 3)), 2),
        ("1", DateRange::between(date(2, 28), date(3, 2)), 9),
        ("scenario", DateRange::between(date(2, 14), date(2, 16)), 1),
        ("scenario", DateRange::new(Some(date(2, 1)), None), 1),
        ("missing", DateRange::between(date(2, 1), date(2, 3)), 1),
    ];

    for (id, range, guests) in requests {
        let from_db = sqlite.evaluate(id, &range, guests).await.unwrap();
        let from_memory = memory.evaluate(id, &range, guests).await.unwrap();
        assert_eq!(from_db, from_memory, "backends disagree for {id}");
    }
}

#[tokio::test]
async fn newly_blocked_night_makes_stay_infeasible() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let store = db.properties();
    store.insert(&scenario_property()).await.unwrap();

    let evaluator = evaluator_with(Arc::new(store.clone()));
    let range = DateRange::between(date(2, 1), date(2, 4));

    assert!(evaluator.evaluate("scenario", &range, 2).await.unwrap().can_book());

    store.block_dates("scenario", &[date(2, 2)]).await.unwrap();
    let outcome = evaluator.evaluate("scenario", &range, 2).await.unwrap();
    assert_eq!(
        outcome.evaluation().unwrap().feasibility,
        Feasibility::BlockedNight { date: date(2, 2) }
    );
}

#[tokio::test]
async fn top_rate_over_widest_range_prices_without_overflow() {
    let repo = InMemoryPropertyRepository::new();
    repo.insert(Property {
        id: PropertyId::new("penthouse"),
        nightly_rate: Money::from_major(MAX_NIGHTLY_RATE),
        blocked_dates: BTreeSet::new(),
        ..scenario_property()
    })
    .await
    .unwrap();

    let evaluator = evaluator_with(Arc::new(repo));
    let outcome = evaluator
        .evaluate("penthouse", &DateRange::between(NaiveDate::MIN, NaiveDate::MAX), 1)
        .await
        .unwrap();

    let evaluation = outcome.evaluation().unwrap();
    assert!(evaluation.can_book);
    let expected = Money::from_major(MAX_NIGHTLY_RATE).cents() * i64::from(evaluation.nights);
    assert_eq!(evaluation.cost_breakdown.subtotal().cents(), expected);
    assert!(evaluation.cost_breakdown.total().cents() < i64::MAX);
}

#[tokio::test]
async fn rate_above_ceiling_is_rejected_at_ingest() {
    let repo = InMemoryPropertyRepository::new();
    let result = repo
        .insert(Property {
            nightly_rate: Money::from_cents(i64::MAX / 2),
            ..scenario_property()
        })
        .await;
    assert!(result.is_err());
}
