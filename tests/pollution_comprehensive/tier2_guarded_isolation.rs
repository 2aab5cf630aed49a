//! Tier 2: the guarded policy confines hostile payloads to their sender.

use crate::test_utils::{lab, map};
use mergelab::{MergePolicy, DEMO_RECORD};
use serde_json::json;

fn hostile_payload() -> serde_json::Value {
    json!({
        "bio": "hello",
        "__proto__": {"isAdmin": true},
        "nested": {"constructor": {"polluted": 1}, "keep": 2}
    })
}

/// Test: structural keys are stripped before the merge, at every depth.
#[test]
fn test_hostile_update_is_stripped() {
    let lab = lab();
    lab.service.register("alice", map(json!({}))).unwrap();

    let view = lab
        .service
        .update_profile("alice", hostile_payload(), MergePolicy::Guarded)
        .unwrap();

    assert_eq!(
        serde_json::Value::Object(view),
        json!({"bio": "hello", "nested": {"keep": 2}})
    );
}

/// Test: the shared store never sees a guarded payload.
#[test]
fn test_store_untouched_by_guarded_attack() {
    let lab = lab();
    lab.service.register("alice", map(json!({}))).unwrap();
    lab.service
        .update_profile("alice", hostile_payload(), MergePolicy::Guarded)
        .unwrap();

    assert!(lab.store.is_empty());
    assert_eq!(lab.store.snapshot(), map(json!({})));
}

/// Test: other records, and the demo record, are unaffected.
#[test]
fn test_other_records_unaffected() {
    let lab = lab();
    lab.service.register("alice", map(json!({}))).unwrap();
    lab.service
        .register("bob", map(json!({"bio": "bob here"})))
        .unwrap();

    lab.service
        .update_profile("alice", hostile_payload(), MergePolicy::Guarded)
        .unwrap();

    assert_eq!(
        lab.service.effective_view("bob").unwrap(),
        map(json!({"bio": "bob here"}))
    );
    assert_eq!(
        lab.service.effective_view(DEMO_RECORD).unwrap(),
        map(json!({"bio": ""}))
    );
}

/// Test: authorization is denied for every record after the attack.
#[test]
fn test_authorization_stays_denied() {
    let lab = lab();
    lab.service.register("alice", map(json!({}))).unwrap();
    lab.service
        .update_profile("alice", hostile_payload(), MergePolicy::Guarded)
        .unwrap();

    for name in lab.service.names() {
        assert!(
            !lab.service.is_authorized(&name, "isAdmin"),
            "{name} became admin under the guarded policy"
        );
    }
}

/// Test: repeating the attack accumulates nothing.
#[test]
fn test_repeated_attacks_accumulate_nothing() {
    let lab = lab();
    lab.service.register("alice", map(json!({}))).unwrap();

    let first = lab
        .service
        .update_profile("alice", hostile_payload(), MergePolicy::Guarded)
        .unwrap();
    for _ in 0..5 {
        let again = lab
            .service
            .update_profile("alice", hostile_payload(), MergePolicy::Guarded)
            .unwrap();
        assert_eq!(again, first);
    }
    assert!(lab.store.is_empty());
}
