//! Laws the container keeps regardless of payload types.

use std::panic::{AssertUnwindSafe, catch_unwind};

use expected::Alternative;
use expected::prelude::*;
use expected_fixture::{FaultPlan, Flaky, Ledger, Recorder, capture_logs};
use pretty_assertions::assert_eq;
use serial_test::serial;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Checks that exactly one side is readable and that it matches the tag.
fn assert_one_alternative<V, E>(e: &Expected<V, E>) {
    match e.alternative() {
        Alternative::Value => {
            assert!(e.has_value());
            assert!(e.value().is_ok());
            assert!(e.error().is_err());
        }
        Alternative::Error => {
            assert!(!e.has_value());
            assert!(e.value().is_err());
            assert!(e.error().is_ok());
        }
    }
}

fn samples() -> Vec<Expected<String, u32>> {
    vec![
        Expected::from_value(String::new()),
        Expected::from_value("payload".into()),
        Expected::from_error(0),
        Expected::from_error(u32::MAX),
    ]
}

// ============================================================================
// TESTS
// ============================================================================

#[test]
fn test_exactly_one_alternative_through_mutation_sequence() {
    let mut e: Expected<String, u32> = Expected::default();
    let mut other: Expected<String, u32> = Expected::from_error(1);
    assert_one_alternative(&e);

    for step in 0..24u32 {
        match step % 6 {
            0 => e.assign(Expected::from_error(step)),
            1 => e.assign_value(format!("v{step}")),
            2 => e.assign_error(Unexpected::new(step)),
            3 => e.swap(&mut other),
            4 => {
                e.emplace(step.to_string());
            }
            _ => e.clone_from(&other),
        }
        assert_one_alternative(&e);
        assert_one_alternative(&other);
    }
}

#[test]
fn test_and_then_identity() {
    for e in samples() {
        assert_eq!(e.clone().and_then(|v| v), e);
    }
}

#[test]
fn test_or_else_identity() {
    for e in samples() {
        assert_eq!(e.clone().or_else(|err| Expected::from_error(err)), e);
        assert_eq!(e.clone().or_else(|_| ()), e);
    }
}

#[test]
fn test_transform_error_then_back_is_identity() {
    for e in samples() {
        let there = e.clone().transform_error(u64::from);
        let back = there.transform_error(|wide| u32::try_from(wide).unwrap_or(0));
        assert_eq!(back, e);
    }
}

#[test]
fn test_transform_void_collapse_ignores_side_effects() {
    let recorder = Recorder::new();
    let live: Expected<(), ()> = EXPECT.into();
    let out = live.transform(|()| {
        recorder.record("side effect");
    });
    assert!(out.has_value());
    assert_eq!(recorder.count(), 1);

    let live: Expected<(), String> = EXPECT.into();
    let out: Expected<(), String> = live.transform(|()| recorder.record("again"));
    assert!(out.has_value());
}

#[test]
fn test_emplace_after_error_never_exposes_stale_error() {
    let ledger = Ledger::new();
    let mut e: Expected<u32, _> = Expected::from_error(ledger.track("stale"));

    e.emplace(1);
    e.emplace(2);

    assert_eq!(ledger.live(), 0);
    assert_eq!(e.value(), Ok(&2));
    assert!(e.error().is_err());
}

#[test]
fn test_every_payload_dropped_exactly_once() {
    let ledger = Ledger::new();
    {
        let mut a: Expected<_, u8> = Expected::from_value(ledger.track(1));
        let mut b: Expected<_, u8> = Expected::from_error(2);
        a.swap(&mut b);
        let c = b.clone();
        b.reinit_error(3);
        a.assign(c);
        let _ = a.replace(Expected::from_error(4));
    }
    assert_eq!(ledger.created() + ledger.clones(), ledger.drops());
}

#[test]
fn test_strong_guarantee_on_every_failing_transition() {
    let plan = FaultPlan::new();
    let value_live: Expected<Flaky, Flaky> = Expected::from_value(Flaky::new("value", &plan));
    let error_live: Expected<Flaky, Flaky> = Expected::from_error(Flaky::new("error", &plan));

    for (mut target, source) in [
        (value_live.clone(), error_live.clone()),
        (error_live.clone(), value_live.clone()),
    ] {
        let before = (target.alternative(), label_of(&target));

        plan.fail_after(0);
        let copy = catch_unwind(AssertUnwindSafe(|| target.clone_from(&source)));
        assert!(copy.is_err());
        assert_eq!((target.alternative(), label_of(&target)), before);

        plan.fail_after(0);
        assert!(target.try_reinit_value(|| Flaky::build("new", &plan)).is_err());
        plan.fail_after(0);
        assert!(target.try_reinit_error(|| Flaky::build("new", &plan)).is_err());
        plan.fail_after(0);
        let emplace = catch_unwind(AssertUnwindSafe(|| {
            target.emplace_with(|| Flaky::build("new", &plan).unwrap());
        }));
        assert!(emplace.is_err());

        assert_eq!((target.alternative(), label_of(&target)), before);
    }
}

fn label_of(e: &Expected<Flaky, Flaky>) -> String {
    match e.as_ref().into_result() {
        Ok(flaky) | Err(flaky) => flaky.label().to_string(),
    }
}

#[serial]
#[test]
fn test_cross_alternative_swap_is_traced() {
    let (_, logs) = capture_logs(|| {
        let mut a: Expected<u8, u8> = Expected::from_value(1);
        let mut b: Expected<u8, u8> = Expected::from_error(2);
        a.swap(&mut b);
        let mut same = a;
        a.swap(&mut same);
    });
    assert!(logs.contains("swap across alternatives"), "{logs}");
    assert_eq!(logs.matches("swap across alternatives").count(), 1, "{logs}");
}
