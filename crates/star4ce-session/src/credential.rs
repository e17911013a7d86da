//! The stored credential.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The locally stored proof of authentication, pending remote verification.
///
/// Presence of a credential means the visitor logged in at some point; it
/// does **not** prove the token is still accepted by the remote authority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Opaque bearer token issued by the remote authority.
    pub token: String,
    /// Role label reported at login time.
    pub role: String,
    /// Email the visitor logged in with.
    pub email: String,
    /// When this credential was persisted. Informational only; the guard
    /// never consults it.
    pub saved_at: DateTime<Utc>,
}

impl Credential {
    /// Create a credential stamped with the current time.
    pub fn new(
        token: impl Into<String>,
        role: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            role: role.into(),
            email: email.into(),
            saved_at: Utc::now(),
        }
    }
}
