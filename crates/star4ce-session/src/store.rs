//! Session store facade over a persistence backend.

use std::sync::Arc;

use tracing::warn;

use star4ce_core::error::AppError;
use star4ce_core::result::AppResult;

use crate::backend::SessionBackend;
use crate::credential::Credential;

/// The persisted holder for the visitor's [`Credential`].
///
/// Reads never fail from the caller's point of view: a backend error or a
/// corrupt payload degrades to "no credential" with a warning log, since
/// an unreadable session is indistinguishable from an absent one for
/// gating purposes.
#[derive(Debug, Clone)]
pub struct SessionStore {
    backend: Arc<dyn SessionBackend>,
}

impl SessionStore {
    /// Create a store over the given backend.
    pub fn new(backend: Arc<dyn SessionBackend>) -> Self {
        Self { backend }
    }

    /// Read the stored credential, if any.
    pub async fn credential(&self) -> Option<Credential> {
        let payload = match self.backend.load().await {
            Ok(payload) => payload?,
            Err(e) => {
                warn!(error = %e, "failed to read session store, treating as empty");
                return None;
            }
        };

        match serde_json::from_str(&payload) {
            Ok(credential) => Some(credential),
            Err(e) => {
                warn!(error = %e, "stored session payload is not a valid credential");
                None
            }
        }
    }

    /// Read the stored token, if any. Never errors.
    pub async fn token(&self) -> Option<String> {
        self.credential().await.map(|c| c.token)
    }

    /// Persist a credential, replacing any previous one.
    pub async fn set(&self, credential: &Credential) -> AppResult<()> {
        let payload = serde_json::to_string(credential)
            .map_err(|e| AppError::session(format!("Failed to serialize credential: {e}")))?;
        self.backend.save(&payload).await
    }

    /// Remove the stored credential. Clearing an empty store is a no-op.
    pub async fn clear(&self) -> AppResult<()> {
        self.backend.delete().await
    }
}
