//! Pollution Comprehensive Test Suite
//!
//! Workspace-level verification of the merge lab, driven entirely through
//! the `mergelab` facade re-exports. Crate-internal details are out of
//! bounds here on purpose: these tests see what an embedding application
//! would see.
//!
//! ## Test Tiers
//!
//! - **Tier 1**: Merge and sanitizer laws (pure combinators)
//! - **Tier 2**: Policy behavior (guarded isolation, unguarded leak)
//! - **Tier 3**: End-to-end attack walkthroughs
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test pollution_comprehensive
//! ```

// Test modules
mod test_utils;

// Tier 1: Merge and Sanitizer Laws
mod tier1_merge_laws;
mod tier1_sanitizer_guarantees;

// Tier 2: Policy Behavior
mod tier2_guarded_isolation;
mod tier2_unguarded_leak;

// Tier 3: End-to-End Attack Walkthroughs
mod tier3_attack_walkthroughs;
