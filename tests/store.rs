//! Tests for session store navigation semantics.
//!
//! These exercise the shipped survey tree end to end: start, advance,
//! back-navigation, terminal teardown, restart idempotence, and the
//! guarantee that every failure leaves observable state untouched.

mod common;

use common::*;
use surveygraph::store::{SelectOutcome, StoreError};
use surveygraph::types::{MessageRef, ParticipantKey};

fn key(raw: i64) -> ParticipantKey {
    ParticipantKey::new(raw)
}

#[test]
fn start_positions_the_session_at_the_root() {
    let store = shipped_store();

    let root = store.start(key(1));
    assert_eq!(root.id.as_str(), "q1");
    assert_eq!(root.text, "Choose category");
    assert_eq!(store.back_stack_depth(key(1)), Some(0));
}

#[test]
fn select_advances_and_pushes_the_back_stack() {
    let store = shipped_store();
    store.start(key(1));

    match store.select(key(1), "q1_option3").expect("valid selector") {
        SelectOutcome::Advanced(question) => assert_eq!(question.id.as_str(), "q3_1"),
        other => panic!("expected advance, got {other:?}"),
    }
    assert_eq!(store.back_stack_depth(key(1)), Some(1));
    assert_eq!(
        store.current_question(key(1)).map(|q| q.id.as_str().to_string()),
        Some("q3_1".to_string())
    );
}

#[test]
fn terminal_select_returns_the_payload_and_tears_down() {
    let store = shipped_store();
    store.start(key(1));
    store.select(key(1), "q1_option3").expect("advance to q3_1");

    match store.select(key(1), "q3_1_option1").expect("terminal selector") {
        SelectOutcome::Terminal { result, .. } => assert_eq!(result, "MIT-002"),
        other => panic!("expected terminal, got {other:?}"),
    }

    // Success implies destruction: nothing observable survives.
    assert!(!store.is_active(key(1)));
    assert!(store.current_question(key(1)).is_none());
    assert!(store.back_stack_depth(key(1)).is_none());
    assert!(store.last_message(key(1)).is_none());
}

#[test]
fn terminal_select_carries_the_last_message_handle_out() {
    let store = shipped_store();
    store.start(key(1));
    store
        .set_last_message(key(1), MessageRef::new(77))
        .expect("session active");
    store.select(key(1), "q1_option3").expect("advance");

    match store.select(key(1), "q3_1_option1").expect("terminal") {
        SelectOutcome::Terminal { last_message, .. } => {
            assert_eq!(last_message, Some(MessageRef::new(77)));
        }
        other => panic!("expected terminal, got {other:?}"),
    }
}

#[test]
fn back_restores_the_previous_question() {
    let store = shipped_store();
    store.start(key(2));
    match store.select(key(2), "q1_option1").expect("advance") {
        SelectOutcome::Advanced(question) => assert_eq!(question.id.as_str(), "q1_1"),
        other => panic!("expected advance, got {other:?}"),
    }
    assert_eq!(store.back_stack_depth(key(2)), Some(1));

    let restored = store.back(key(2)).expect("stack non-empty");
    assert_eq!(restored.id.as_str(), "q1");
    assert_eq!(store.back_stack_depth(key(2)), Some(0));
}

#[test]
fn select_without_a_session_fails_and_creates_nothing() {
    let store = shipped_store();

    let err = store.select(key(3), "q1_option1").unwrap_err();
    assert!(matches!(err, StoreError::NoActiveSession { .. }));
    assert!(!store.is_active(key(3)));
    assert_eq!(store.session_count(), 0);
}

#[test]
fn back_right_after_start_fails_and_changes_nothing() {
    let store = shipped_store();
    store.start(key(4));

    let err = store.back(key(4)).unwrap_err();
    assert!(matches!(err, StoreError::EmptyBackStack { .. }));

    // Still at the root, depth unchanged.
    assert_eq!(
        store.current_question(key(4)).map(|q| q.id.as_str().to_string()),
        Some("q1".to_string())
    );
    assert_eq!(store.back_stack_depth(key(4)), Some(0));
}

#[test]
fn unmatched_selector_is_a_noop() {
    let store = shipped_store();
    store.start(key(5));
    store.select(key(5), "q1_option1").expect("advance");

    let err = store.select(key(5), "q1_option3").unwrap_err();
    assert!(matches!(err, StoreError::SelectorNotFound { .. }));

    // Position and depth untouched by the failure.
    assert_eq!(
        store.current_question(key(5)).map(|q| q.id.as_str().to_string()),
        Some("q1_1".to_string())
    );
    assert_eq!(store.back_stack_depth(key(5)), Some(1));
}

#[test]
fn restart_is_idempotent_from_any_prior_state() {
    let store = shipped_store();

    // Absent.
    store.start(key(6));
    assert_eq!(store.back_stack_depth(key(6)), Some(0));

    // Mid-flow.
    store.select(key(6), "q1_option1").expect("advance");
    store.select(key(6), "q1_1_option2").expect("advance");
    assert_eq!(store.back_stack_depth(key(6)), Some(2));
    let root = store.start(key(6));
    assert_eq!(root.id.as_str(), "q1");
    assert_eq!(store.back_stack_depth(key(6)), Some(0));

    // Terminal just reached.
    store.select(key(6), "q1_option4").expect("terminal");
    assert!(!store.is_active(key(6)));
    store.start(key(6));
    assert_eq!(store.back_stack_depth(key(6)), Some(0));
}

#[test]
fn restart_discards_the_last_message_handle() {
    let store = shipped_store();
    store.start(key(7));
    store
        .set_last_message(key(7), MessageRef::new(9))
        .expect("session active");

    store.start(key(7));
    assert_eq!(store.last_message(key(7)), None);
}

#[test]
fn reset_is_idempotent_and_silent() {
    let store = shipped_store();
    store.reset(key(8)); // no session: still fine

    store.start(key(8));
    store.reset(key(8));
    assert!(!store.is_active(key(8)));
    store.reset(key(8));
}

#[test]
fn set_last_message_requires_a_session_and_overwrites() {
    let store = shipped_store();

    let err = store.set_last_message(key(9), MessageRef::new(1)).unwrap_err();
    assert!(matches!(err, StoreError::NoActiveSession { .. }));

    store.start(key(9));
    store
        .set_last_message(key(9), MessageRef::new(1))
        .expect("session active");
    store
        .set_last_message(key(9), MessageRef::new(2))
        .expect("session active");
    assert_eq!(store.last_message(key(9)), Some(MessageRef::new(2)));
}

#[test]
fn full_walk_down_and_back_up_a_deep_branch() {
    let store = shipped_store();
    store.start(key(10));

    store.select(key(10), "q1_option1").expect("to q1_1");
    store.select(key(10), "q1_1_option2").expect("to q1_1_1");
    assert_eq!(store.back_stack_depth(key(10)), Some(2));

    assert_eq!(store.back(key(10)).expect("pop").id.as_str(), "q1_1");
    assert_eq!(store.back(key(10)).expect("pop").id.as_str(), "q1");
    assert!(matches!(
        store.back(key(10)).unwrap_err(),
        StoreError::EmptyBackStack { .. }
    ));
}

#[test]
fn operations_on_one_key_never_touch_another() {
    let store = shipped_store();
    store.start(key(20));
    store.start(key(21));
    store.select(key(21), "q1_option2").expect("advance");

    // Drive key 20 through its whole lifecycle.
    store.select(key(20), "q1_option3").expect("advance");
    store.select(key(20), "q3_1_option2").expect("terminal");
    store.reset(key(20));

    // Key 21 is exactly where it was left.
    assert_eq!(
        store.current_question(key(21)).map(|q| q.id.as_str().to_string()),
        Some("q2_1".to_string())
    );
    assert_eq!(store.back_stack_depth(key(21)), Some(1));
}

#[test]
fn purge_idle_removes_only_stale_sessions() {
    let store = shipped_store();
    store.start(key(30));
    store.start(key(31));

    // Nothing is older than an hour.
    assert_eq!(store.purge_idle(chrono::Duration::hours(1)), 0);
    assert_eq!(store.session_count(), 2);

    // A negative threshold makes everything stale.
    assert_eq!(store.purge_idle(chrono::Duration::seconds(-1)), 2);
    assert_eq!(store.session_count(), 0);
}
