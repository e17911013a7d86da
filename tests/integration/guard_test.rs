//! Integration tests for the access guard against a stub authority.

mod helpers;

use std::sync::Arc;
use std::time::Duration;

use helpers::{MeMode, StubAuthority, TEST_EMAIL, TEST_TOKEN};
use star4ce_guard::{AccessGuard, GuardDecision, ProtectionPolicy};
use star4ce_session::Credential;

fn test_credential() -> Credential {
    Credential::new(TEST_TOKEN, "manager", TEST_EMAIL)
}

#[tokio::test]
async fn test_no_token_denies_without_remote_call() {
    let authority = StubAuthority::spawn(MeMode::Affirmative).await;
    let store = helpers::memory_store();
    let guard = AccessGuard::new(store, authority.client());

    let decision = guard.evaluate(ProtectionPolicy::default()).await;

    let GuardDecision::Deny(redirect) = decision else {
        panic!("expected denial, got {decision:?}");
    };
    assert_eq!(redirect.location(), "/login?expired=1");
    assert_eq!(authority.me_hits(), 0, "no remote call may be issued");
}

#[tokio::test]
async fn test_weak_mode_skips_verification() {
    let authority = StubAuthority::spawn(MeMode::Affirmative).await;
    let store = helpers::memory_store();
    store.set(&test_credential()).await.unwrap();
    let guard = AccessGuard::new(store, authority.client());

    let decision = guard.evaluate(ProtectionPolicy::weak()).await;

    assert!(matches!(decision, GuardDecision::Allow(_)));
    assert_eq!(authority.me_hits(), 0, "weak mode must not call the authority");
}

#[tokio::test]
async fn test_confirmed_token_allows_and_keeps_store() {
    let authority = StubAuthority::spawn(MeMode::Affirmative).await;
    let store = helpers::memory_store();
    let credential = test_credential();
    store.set(&credential).await.unwrap();
    let guard = AccessGuard::new(store.clone(), authority.client());

    let decision = guard.evaluate(ProtectionPolicy::default()).await;

    assert_eq!(decision, GuardDecision::Allow(credential));
    assert_eq!(authority.me_hits(), 1);
    assert_eq!(
        store.token().await.as_deref(),
        Some(TEST_TOKEN),
        "an affirmative check must not clear the store"
    );
}

#[tokio::test]
async fn test_rejected_token_denies_and_clears() {
    let authority = StubAuthority::spawn(MeMode::Rejecting).await;
    let store = helpers::memory_store();
    store.set(&test_credential()).await.unwrap();
    let guard = AccessGuard::new(store.clone(), authority.client());

    let decision = guard.evaluate(ProtectionPolicy::default()).await;

    let GuardDecision::Deny(redirect) = decision else {
        panic!("expected denial, got {decision:?}");
    };
    assert_eq!(redirect.location(), "/login?expired=1");
    assert_eq!(store.token().await, None, "rejection must clear the store");
}

#[tokio::test]
async fn test_unaffirmed_response_denies_and_clears() {
    // 2xx body lacking the affirmative flag takes the same path as a 401.
    let authority = StubAuthority::spawn(MeMode::Unaffirmed).await;
    let store = helpers::memory_store();
    store.set(&test_credential()).await.unwrap();
    let guard = AccessGuard::new(store.clone(), authority.client());

    let decision = guard.evaluate(ProtectionPolicy::default()).await;

    assert!(matches!(decision, GuardDecision::Deny(_)));
    assert_eq!(store.token().await, None);
}

#[tokio::test]
async fn test_hung_authority_denies_and_clears() {
    // The verification timeout folds a hung request into the rejection path.
    let authority = StubAuthority::spawn(MeMode::Hanging).await;
    let store = helpers::memory_store();
    store.set(&test_credential()).await.unwrap();
    let guard = AccessGuard::new(store.clone(), authority.client());

    let decision = guard.evaluate(ProtectionPolicy::default()).await;

    assert!(matches!(decision, GuardDecision::Deny(_)));
    assert_eq!(store.token().await, None);
}

#[tokio::test]
async fn test_cancelled_evaluation_is_superseded() {
    let authority = StubAuthority::spawn(MeMode::SlowAffirmative).await;
    let store = helpers::memory_store();
    store.set(&test_credential()).await.unwrap();
    let guard = Arc::new(AccessGuard::new(store.clone(), authority.client()));

    let running = {
        let guard = Arc::clone(&guard);
        tokio::spawn(async move { guard.evaluate(ProtectionPolicy::default()).await })
    };

    // Let the evaluation reach its in-flight verification, then navigate away.
    tokio::time::sleep(Duration::from_millis(100)).await;
    guard.cancel();

    let decision = running.await.unwrap();

    assert_eq!(decision, GuardDecision::Superseded);
    assert_eq!(
        store.token().await.as_deref(),
        Some(TEST_TOKEN),
        "a stale result must not mutate the store"
    );

    // The superseded evaluation leaves no terminal phase behind; the next
    // evaluation runs to completion as usual.
    assert!(!guard.state().is_terminal());
    let next = guard.evaluate(ProtectionPolicy::default()).await;
    assert!(matches!(next, GuardDecision::Allow(_)));
    assert!(guard.state().is_terminal());
}

#[tokio::test]
async fn test_reevaluation_after_allow_is_stable() {
    let authority = StubAuthority::spawn(MeMode::Affirmative).await;
    let store = helpers::memory_store();
    store.set(&test_credential()).await.unwrap();
    let guard = AccessGuard::new(store, authority.client());

    let first = guard.evaluate(ProtectionPolicy::default()).await;
    let second = guard.evaluate(ProtectionPolicy::default()).await;

    assert_eq!(first, second);
    assert_eq!(authority.me_hits(), 2);
}
