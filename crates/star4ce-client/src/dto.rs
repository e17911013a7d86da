//! Wire types for the remote authority's auth endpoints.

use serde::{Deserialize, Serialize};

/// Body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// Email to authenticate as.
    pub email: String,
    /// Plain-text password; only ever sent over the wire, never stored.
    pub password: String,
}

/// Successful response from `POST /auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer token.
    pub token: String,
    /// Role label for the authenticated account.
    pub role: String,
    /// Canonical email of the account.
    pub email: String,
}

/// Response from `GET /auth/me`.
///
/// Only the affirmative `ok` flag matters to the guard; a 2xx body without
/// it deserializes with `ok = false` and counts as a rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityResponse {
    /// Whether the authority confirms the presented token.
    #[serde(default)]
    pub ok: bool,
    /// Role as the authority currently sees it.
    #[serde(default)]
    pub role: Option<String>,
    /// Email as the authority currently sees it.
    #[serde(default)]
    pub email: Option<String>,
}
