//! Client for the remote authority's auth endpoints.

use std::time::Duration;

use reqwest::header::CACHE_CONTROL;
use tracing::debug;

use star4ce_core::config::api::ApiConfig;
use star4ce_core::error::AppError;
use star4ce_core::result::AppResult;

use crate::dto::{IdentityResponse, LoginRequest, LoginResponse};

/// Client for the Star4ce remote authority.
#[derive(Debug, Clone)]
pub struct AuthClient {
    client: reqwest::Client,
    base_url: String,
    verify_timeout: Duration,
}

impl AuthClient {
    /// Create a client from configuration.
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::external_service(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            verify_timeout: Duration::from_secs(config.verify_timeout_seconds),
        })
    }

    /// The configured authority base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /auth/login` — exchange email and password for a token.
    ///
    /// A non-2xx response carries a plain-text cause from the authority,
    /// surfaced verbatim as an authentication error.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginResponse> {
        let url = format!("{}/auth/login", self.base_url);
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::external_service(format!("Login request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let cause = response.text().await.unwrap_or_default();
            debug!(%status, "login rejected by authority");
            return Err(AppError::authentication(if cause.is_empty() {
                format!("Login failed with status {status}")
            } else {
                cause
            }));
        }

        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| AppError::external_service(format!("Malformed login response: {e}")))
    }

    /// `GET /auth/me` — ask the authority whether a token is still valid.
    ///
    /// Sent uncached with the token as a bearer credential, bounded by the
    /// configured verification timeout. Errors here carry no meaning beyond
    /// "not confirmed"; the guard collapses them into its rejection path.
    pub async fn verify(&self, token: &str) -> AppResult<IdentityResponse> {
        let url = format!("{}/auth/me", self.base_url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .header(CACHE_CONTROL, "no-store")
            .timeout(self.verify_timeout)
            .send()
            .await
            .map_err(|e| {
                AppError::external_service(format!("Verification request failed: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            debug!(%status, "identity check rejected");
            return Err(AppError::authentication(format!(
                "Identity check failed with status {status}"
            )));
        }

        response
            .json::<IdentityResponse>()
            .await
            .map_err(|e| AppError::external_service(format!("Malformed identity response: {e}")))
    }
}
