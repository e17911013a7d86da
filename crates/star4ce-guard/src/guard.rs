//! The access guard evaluation.

use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, warn};

use star4ce_client::AuthClient;
use star4ce_session::{Credential, SessionStore};

use crate::policy::ProtectionPolicy;
use crate::redirect::LoginRedirect;
use crate::state::{GuardState, VerificationOutcome};

/// Terminal result of one guard evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the protected content for this credential.
    Allow(Credential),
    /// Render nothing; navigate to the login entry point.
    Deny(LoginRedirect),
    /// A newer evaluation (or a cancellation) overtook this one while its
    /// verification call was in flight. The result was discarded without
    /// touching the store; callers drop this decision silently.
    Superseded,
}

/// Gates rendering of protected content behind a credential check.
///
/// The store and client are injected so the guard can be exercised against
/// an in-memory backend and a stub authority. One guard instance serves
/// consecutive page mounts; each call to [`evaluate`](Self::evaluate) is a
/// fresh evaluation.
///
/// Within an evaluation the store read strictly precedes the remote call,
/// and the remote call strictly precedes any clear.
#[derive(Debug)]
pub struct AccessGuard {
    store: SessionStore,
    client: AuthClient,
    /// Bumped by every evaluation and every cancellation; an in-flight
    /// verification only applies if the generation it started with is
    /// still current when it resolves.
    generation: AtomicU64,
    state: RwLock<GuardState>,
}

impl AccessGuard {
    /// Create a guard over the given store and authority client.
    pub fn new(store: SessionStore, client: AuthClient) -> Self {
        Self {
            store,
            client,
            generation: AtomicU64::new(0),
            state: RwLock::new(GuardState::Checking),
        }
    }

    /// Current evaluation phase. Non-terminal phases mean "show the
    /// neutral checking indicator, not the protected content".
    ///
    /// Only meaningful for the latest generation: a superseded evaluation
    /// never writes the phase (it must not clobber the evaluation that
    /// overtook it), so after a cancellation with no follow-up evaluation
    /// the phase stays non-terminal until the next mount evaluates.
    pub fn state(&self) -> GuardState {
        *self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    /// Invalidate any in-flight evaluation, e.g. because the visitor
    /// navigated away. Its verification result, when it arrives, resolves
    /// to [`GuardDecision::Superseded`].
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Run one evaluation under the given policy.
    ///
    /// Never fails: every verification failure — transport error, timeout,
    /// non-2xx status, missing affirmative flag — collapses into the
    /// denial path, which clears the store and carries a login redirect.
    pub async fn evaluate(&self, policy: ProtectionPolicy) -> GuardDecision {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.set_state(GuardState::Checking);

        let Some(credential) = self.store.credential().await else {
            debug!("no stored credential, denying without a remote call");
            self.set_state(GuardState::Denied);
            return GuardDecision::Deny(LoginRedirect::expired());
        };

        if !policy.verify {
            // Weak mode: trusts local storage only.
            self.set_state(GuardState::Allowed);
            return GuardDecision::Allow(credential);
        }

        self.set_state(GuardState::Verifying);
        let outcome = match self.client.verify(&credential.token).await {
            Ok(identity) if identity.ok => VerificationOutcome::Confirmed,
            Ok(_) => {
                debug!("authority response lacked the affirmative flag");
                VerificationOutcome::Rejected
            }
            Err(e) => {
                debug!(error = %e, "verification call failed");
                VerificationOutcome::Rejected
            }
        };

        // A stale result must neither mutate the store nor trigger
        // navigation.
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!("evaluation superseded, discarding verification result");
            return GuardDecision::Superseded;
        }

        if outcome == VerificationOutcome::Confirmed {
            self.set_state(GuardState::Allowed);
            GuardDecision::Allow(credential)
        } else {
            if let Err(e) = self.store.clear().await {
                warn!(error = %e, "failed to clear rejected session");
            }
            self.set_state(GuardState::Denied);
            GuardDecision::Deny(LoginRedirect::expired())
        }
    }

    fn set_state(&self, state: GuardState) {
        *self.state.write().unwrap_or_else(|e| e.into_inner()) = state;
    }
}
