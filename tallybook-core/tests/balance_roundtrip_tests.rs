//! Behavior tests for the tallybook-core record pipeline
//!
//! These tests exercise the public surface end to end: construction,
//! serialization, and lenient parsing over a shared context. Deterministic
//! capability adapters pin time and randomness wherever exact values matter.
//!
//! Run with: cargo test --test balance_roundtrip_tests -- --nocapture

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use tallybook_core::adapters::{FixedClock, MemorySink, ScriptedRandom};
use tallybook_core::{
    Balance, BalanceDraft, Clock, Diagnostic, IdStrategy, RandomSource, TallybookContext,
};

// ============================================================================
// Test Helpers
// ============================================================================

const FIXED_ISO: &str = "2024-01-15T10:30:00.000Z";

/// Instant every deterministic context is pinned to
fn fixed_instant() -> DateTime<Utc> {
    "2024-01-15T10:30:00Z".parse().unwrap()
}

/// UUID the scripted random source always answers with
fn fixture_uuid() -> Uuid {
    Uuid::parse_str("2d9f3a70-5c1e-4b8a-9e2f-6a84c1305b77").unwrap()
}

/// Context with pinned time and a scripted strong-uuid source
fn deterministic_context() -> TallybookContext {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock::new(fixed_instant()));
    let random: Arc<dyn RandomSource> = Arc::new(ScriptedRandom::with_uuid(fixture_uuid(), []));
    TallybookContext::with_capabilities(clock, random)
}

/// Context without a strong-uuid facility, salts served from `draws`
fn fallback_context(draws: impl IntoIterator<Item = u64>) -> TallybookContext {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock::new(fixed_instant()));
    let random: Arc<dyn RandomSource> = Arc::new(ScriptedRandom::without_uuid(draws));
    TallybookContext::with_capabilities(clock, random)
}

/// A handful of fully-formed records, notes both present and absent
fn sample_records() -> Vec<Balance> {
    vec![
        Balance::new("b1", "Checking", 1520.75, "2024-01-01T09:00:00.000Z"),
        Balance::new("b2", "Savings", -12.5, "2024-01-02T09:00:00.000Z")
            .with_notes("transfer out"),
        Balance::new("b3", "Cash", 0.0, "2024-01-03T09:00:00.000Z"),
    ]
}

// ============================================================================
// Round Trips
// ============================================================================

#[test]
fn test_round_trip_reproduces_records_exactly() {
    let context = deterministic_context();
    let records = sample_records();

    let json = context.codec.serialize(&records);
    let parsed = context.codec.parse(Some(&json));

    assert_eq!(parsed, records, "round trip must be lossless for full records");
}

#[test]
fn test_round_trip_keeps_absent_notes_absent() {
    let context = deterministic_context();
    let parsed = context.codec.parse(Some(&context.codec.serialize(&sample_records())));

    assert_eq!(parsed[0].notes, None, "absence must not become an empty string");
    assert_eq!(parsed[1].notes, Some("transfer out".to_string()));
    assert_eq!(parsed[2].notes, None);
}

#[test]
fn test_created_records_survive_the_round_trip() {
    // System capabilities: real ids and timestamps, equality still exact.
    let context = TallybookContext::new();
    let records = vec![
        context.records.create(BalanceDraft {
            account: Some("Groceries".to_string()),
            amount: Some(-84.2),
            ..Default::default()
        }),
        context.records.create(BalanceDraft {
            notes: Some("opening".to_string()),
            ..Default::default()
        }),
    ];

    let parsed = context.codec.parse(Some(&context.codec.serialize(&records)));
    assert_eq!(parsed, records);
}

// ============================================================================
// Constructor Properties
// ============================================================================

#[test]
fn test_create_always_yields_wellformed_records() {
    let context = TallybookContext::new();

    let drafts = vec![
        BalanceDraft::default(),
        BalanceDraft {
            amount: Some(f64::NAN),
            ..Default::default()
        },
        BalanceDraft {
            account: Some("Named".to_string()),
            amount: Some(3.25),
            ..Default::default()
        },
    ];

    for draft in drafts {
        let record = context.records.create(draft);
        assert!(!record.id.is_empty(), "id must never be empty");
        assert!(!record.amount.is_nan(), "constructed amount must never be NaN");
        assert!(!record.datetime.is_empty(), "datetime must never be empty");
        assert!(
            record.datetime.parse::<DateTime<Utc>>().is_ok(),
            "defaulted datetime must parse as ISO 8601: {}",
            record.datetime
        );
    }
}

#[test]
fn test_system_context_uses_strong_uuid_ids() {
    let context = TallybookContext::new();
    assert_eq!(context.ids.strategy(), IdStrategy::StrongRandom);

    let record = context.records.create(BalanceDraft::default());
    assert!(
        Uuid::parse_str(&record.id).is_ok(),
        "strong ids are hyphenated uuids: {}",
        record.id
    );
}

// ============================================================================
// Identifier Properties
// ============================================================================

#[test]
fn test_ten_thousand_ids_are_distinct() {
    let context = TallybookContext::new();

    let ids: HashSet<String> = (0..10_000).map(|_| context.ids.generate()).collect();
    assert_eq!(ids.len(), 10_000, "generated ids must not collide");
}

#[test]
fn test_ten_thousand_composite_ids_are_distinct() {
    // Fallback strategy, fixed instant: distinctness rides on the salts.
    let context = fallback_context(0..10_000);

    let ids: HashSet<String> = (0..10_000).map(|_| context.ids.generate()).collect();
    assert_eq!(ids.len(), 10_000);
}

#[test]
fn test_fallback_ids_carry_the_composite_shape() {
    let context = fallback_context([7]);
    assert_eq!(context.ids.strategy(), IdStrategy::FallbackComposite);

    let id = context.ids.generate();
    let parts: Vec<&str> = id.split('_').collect();
    assert_eq!(parts.len(), 3, "prefix, millis, salt: {}", id);
    assert_eq!(parts[0], "b");
    assert!(!parts[1].is_empty());
    assert_eq!(parts[2], "7", "salt 7 renders as itself in base 36");
}

// ============================================================================
// Lenient Parsing
// ============================================================================

#[test]
fn test_degenerate_payloads_parse_to_empty() {
    let context = deterministic_context();

    assert_eq!(context.codec.parse(None), vec![]);
    assert_eq!(context.codec.parse(Some("")), vec![]);
    assert_eq!(context.codec.parse(Some("not json{")), vec![]);
    assert_eq!(context.codec.parse(Some("{}")), vec![]);
    assert_eq!(context.codec.parse(Some("null")), vec![]);
}

#[test]
fn test_partial_object_is_revived_with_defaults() {
    let context = deterministic_context();
    let records = context.codec.parse(Some(r#"[{"account":"Cash"}]"#));

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.account, "Cash");
    assert_eq!(record.amount, 0.0);
    assert_eq!(record.id, fixture_uuid().to_string());
    assert_eq!(record.datetime, FIXED_ISO);
    assert_eq!(record.notes, None);
}

#[test]
fn test_parser_keeps_nan_where_constructor_zeroes_it() {
    let context = deterministic_context();

    // Coercion path: present but unconvertible, NaN survives.
    let parsed = context.codec.parse(Some(r#"[{"amount":"abc"}]"#));
    assert!(parsed[0].amount.is_nan());

    // Defaulting path: the constructor guards the same value.
    let created = context.records.create(BalanceDraft {
        amount: Some(f64::NAN),
        ..Default::default()
    });
    assert_eq!(created.amount, 0.0);
}

#[test]
fn test_nan_amount_degrades_to_zero_across_a_cycle() {
    // NaN encodes as null, and null coalesces to zero on the next parse.
    let context = deterministic_context();

    let with_nan = context.codec.parse(Some(r#"[{"amount":"abc"}]"#));
    let json = context.codec.serialize(&with_nan);
    assert!(json.contains(r#""amount":null"#), "NaN must encode as null: {}", json);

    let recycled = context.codec.parse(Some(&json));
    assert_eq!(recycled[0].amount, 0.0);
}

// ============================================================================
// Diagnostics
// ============================================================================

#[test]
fn test_sink_observes_swallowed_failures_without_changing_results() {
    let sink = Arc::new(MemorySink::new());
    let clock: Arc<dyn Clock> = Arc::new(FixedClock::new(fixed_instant()));
    let random: Arc<dyn RandomSource> = Arc::new(ScriptedRandom::with_uuid(fixture_uuid(), []));
    let context = TallybookContext::with_diagnostics(clock, random, Some(sink.clone()));

    assert_eq!(context.codec.parse(Some("not json{")), vec![]);
    assert_eq!(context.codec.parse(Some("{}")), vec![]);

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], Diagnostic::DecodeFailed { .. }));
    assert_eq!(events[1], Diagnostic::WrongShape { found: "an object" });
}

#[test]
fn test_fallback_selection_is_visible_through_the_sink() {
    let sink = Arc::new(MemorySink::new());
    let clock: Arc<dyn Clock> = Arc::new(FixedClock::new(fixed_instant()));
    let random: Arc<dyn RandomSource> = Arc::new(ScriptedRandom::without_uuid([1, 2, 3]));
    let context = TallybookContext::with_diagnostics(clock, random, Some(sink.clone()));

    assert_eq!(context.ids.strategy(), IdStrategy::FallbackComposite);
    assert_eq!(sink.events(), vec![Diagnostic::StrongIdsUnavailable]);

    // Generating more composite ids does not repeat the report.
    context.ids.generate();
    context.ids.generate();
    assert_eq!(sink.events().len(), 1);
}
