//! Tier 2: how the unguarded policy leaks one sender's payload into
//! everyone's effective view.

use crate::test_utils::{admin_payload, lab, map};
use mergelab::{AttrMap, MergePolicy, DEMO_RECORD};
use serde_json::json;

/// Test: one record's structural key changes every record's view.
#[test]
fn test_leak_reaches_every_record() {
    let lab = lab();
    lab.service.register("alice", AttrMap::new()).unwrap();
    lab.service.register("bob", AttrMap::new()).unwrap();

    // Phase 1: nobody is an admin.
    assert!(!lab.service.is_authorized("bob", "isAdmin"));

    // Phase 2: alice sends the escalation payload.
    lab.service
        .update_profile("alice", admin_payload(), MergePolicy::Unguarded)
        .unwrap();

    // Phase 3: the flag shows up under names alice never touched.
    for name in ["alice", "bob", DEMO_RECORD] {
        assert!(
            lab.service.is_authorized(name, "isAdmin"),
            "{name} should read the polluted default"
        );
    }
    assert_eq!(lab.store.get("isAdmin"), Some(json!(true)));
}

/// Test: records registered after the attack inherit the pollution.
#[test]
fn test_new_registrations_inherit_pollution() {
    let lab = lab();
    lab.service.register("alice", AttrMap::new()).unwrap();
    lab.service
        .update_profile("alice", admin_payload(), MergePolicy::Unguarded)
        .unwrap();

    lab.service.register("carol", AttrMap::new()).unwrap();
    assert!(lab.service.is_authorized("carol", "isAdmin"));
}

/// Test: an own attribute shadows the polluted default, even a falsy one.
#[test]
fn test_own_attributes_shadow_polluted_defaults() {
    let lab = lab();
    lab.service.register("alice", AttrMap::new()).unwrap();
    lab.service
        .register("bob", map(json!({"isAdmin": false})))
        .unwrap();

    lab.service
        .update_profile("alice", admin_payload(), MergePolicy::Unguarded)
        .unwrap();

    assert!(lab.service.is_authorized("alice", "isAdmin"));
    assert!(!lab.service.is_authorized("bob", "isAdmin"));
}

/// Test: a structural key under a *fresh* key is copied opaquely; only a
/// later descent through an existing mapping reaches the store.
#[test]
fn test_descent_requires_existing_mapping() {
    let lab = lab();
    lab.service.register("alice", AttrMap::new()).unwrap();

    // Phase 1: "settings" is new, so the subtree lands verbatim on alice.
    lab.service
        .update_profile(
            "alice",
            json!({"settings": {"__proto__": {"stage": 1}}}),
            MergePolicy::Unguarded,
        )
        .unwrap();
    assert!(lab.store.is_empty());
    let own = lab.registry.get("alice").map(|record| record.attrs().clone());
    assert_eq!(
        own.and_then(|attrs| attrs.get("settings").cloned()),
        Some(json!({"__proto__": {"stage": 1}}))
    );

    // Phase 2: "settings" now holds a mapping, so the merge descends into
    // it and the structural key is intercepted.
    lab.service
        .update_profile(
            "alice",
            json!({"settings": {"__proto__": {"stage": 2}}}),
            MergePolicy::Unguarded,
        )
        .unwrap();
    assert_eq!(lab.store.get("stage"), Some(json!(2)));
}

/// Test: a structural key with a non-mapping value is dropped outright.
#[test]
fn test_non_mapping_structural_value_dropped() {
    let lab = lab();
    lab.service.register("alice", AttrMap::new()).unwrap();

    let view = lab
        .service
        .update_profile(
            "alice",
            json!({"__proto__": true, "constructor": [1, 2], "bio": "x"}),
            MergePolicy::Unguarded,
        )
        .unwrap();

    assert!(lab.store.is_empty());
    assert_eq!(serde_json::Value::Object(view), json!({"bio": "x"}));
}

/// Test: repeating the attack leaves the store exactly where it was.
#[test]
fn test_pollution_is_idempotent() {
    let lab = lab();
    lab.service.register("alice", AttrMap::new()).unwrap();

    lab.service
        .update_profile("alice", admin_payload(), MergePolicy::Unguarded)
        .unwrap();
    let after_first = lab.store.snapshot();

    for _ in 0..3 {
        lab.service
            .update_profile("alice", admin_payload(), MergePolicy::Unguarded)
            .unwrap();
    }
    assert_eq!(lab.store.snapshot(), after_first);
}
