//! Guard evaluation states and verification outcomes.

use std::fmt;

/// Phase of an access-guard evaluation.
///
/// `Checking` and `Verifying` are the non-terminal phases during which a
/// caller should show a neutral indicator instead of protected content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// Reading the session store; nothing decided yet.
    Checking,
    /// A verification call to the authority is outstanding.
    Verifying,
    /// Terminal: the visitor may see the protected content.
    Allowed,
    /// Terminal: the visitor is redirected to the login entry point.
    Denied,
}

impl GuardState {
    /// Whether the evaluation has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Allowed | Self::Denied)
    }
}

impl fmt::Display for GuardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checking => write!(f, "checking"),
            Self::Verifying => write!(f, "verifying"),
            Self::Allowed => write!(f, "allowed"),
            Self::Denied => write!(f, "denied"),
        }
    }
}

/// Result of checking a credential against the remote authority.
///
/// Transient, never persisted. Every failure mode — transport error,
/// timeout, non-2xx status, missing affirmative flag — collapses into
/// `Rejected`; the cause is not distinguished downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// No remote call was made (no token, or weak-mode policy).
    NotAttempted,
    /// The authority confirmed the token.
    Confirmed,
    /// The authority rejected the token, or the call failed.
    Rejected,
}

impl fmt::Display for VerificationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAttempted => write!(f, "not attempted"),
            Self::Confirmed => write!(f, "confirmed"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}
