//! Tier 3: complete attack stories, from first request to privilege check.

use crate::test_utils::{admin_payload, lab, map};
use mergelab::{LabError, MergeEngine, MergePolicy, DEMO_RECORD};
use serde_json::json;

/// Test: the full escalation chain on an unguarded deployment.
#[test]
fn test_admin_bypass_walkthrough() {
    let lab = lab();
    lab.service
        .register("mallory", map(json!({"bio": "new here"})))
        .unwrap();

    // Phase 1: the admin gate holds.
    match lab.service.authorize("mallory", "isAdmin") {
        Err(LabError::Unauthorized { capability }) => assert_eq!(capability, "isAdmin"),
        other => panic!("expected denial, got {other:?}"),
    }

    // Phase 2: one profile update carrying a structural key.
    let view = lab
        .service
        .update_profile("mallory", admin_payload(), MergePolicy::Unguarded)
        .unwrap();
    assert_eq!(view.get("isAdmin"), Some(&json!(true)));
    assert_eq!(view.get("bio"), Some(&json!("new here")));

    // Phase 3: the gate now opens for mallory and for everyone else.
    assert!(lab.service.authorize("mallory", "isAdmin").is_ok());
    assert!(lab.service.authorize(DEMO_RECORD, "isAdmin").is_ok());
}

/// Test: the identical payload on a guarded deployment changes nothing.
#[test]
fn test_sanitized_deployment_blocks_the_same_payload() {
    let lab = lab();
    lab.service
        .register("mallory", map(json!({"bio": "new here"})))
        .unwrap();

    let view = lab
        .service
        .update_profile("mallory", admin_payload(), MergePolicy::Guarded)
        .unwrap();

    assert_eq!(view, map(json!({"bio": "new here"})));
    assert!(lab.service.authorize("mallory", "isAdmin").is_err());
    assert!(lab.store.is_empty());
}

/// Test: a query string merged over shared search defaults is another
/// road to the same store.
#[test]
fn test_search_defaults_poisoned_through_query_merge() {
    let lab = lab();
    let engine = MergeEngine::new();

    // Phase 1: a benign query overlays the per-request defaults copy.
    let mut effective = map(json!({"page": 1, "pageSize": 10, "filters": {"q": "", "tags": []}}));
    engine.apply(
        MergePolicy::Unguarded,
        &mut effective,
        &lab.store,
        map(json!({"page": "3", "sort": "desc"})),
    );
    assert_eq!(effective.get("page"), Some(&json!("3")));
    assert_eq!(effective.get("pageSize"), Some(&json!(10)));
    assert_eq!(effective.get("sort"), Some(&json!("desc")));
    assert!(lab.store.is_empty());

    // Phase 2: a hostile query reaches past the defaults into the store.
    let mut effective = map(json!({"page": 1, "pageSize": 10, "filters": {"q": "", "tags": []}}));
    engine.apply(
        MergePolicy::Unguarded,
        &mut effective,
        &lab.store,
        map(json!({"__proto__": {"isAdmin": true}})),
    );
    assert_eq!(lab.store.get("isAdmin"), Some(json!(true)));

    // Phase 3: the profile side of the process observes the leak.
    assert!(lab.service.is_authorized(DEMO_RECORD, "isAdmin"));
}
